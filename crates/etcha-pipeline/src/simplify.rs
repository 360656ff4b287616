//! Uniform stroke simplification for the storage point cap.
//!
//! Persistence enforces a hard maximum on stored points, so callers
//! decimate longer strokes before submitting: keep the first point,
//! stride the middle uniformly, keep the last point. Uniform striding
//! (rather than geometric simplification) keeps the replay pacing
//! visually similar, since timestamps are carried along unchanged.

use crate::types::StrokePoint;

/// Reduce `points` to at most `max_points` by uniform sampling.
///
/// Strokes already within the cap are returned unchanged. Otherwise
/// the result has exactly `max_points` points: the original first and
/// last points, with the middle sampled at indices
/// `floor(i * len / max_points)`.
#[must_use = "returns the simplified point sequence"]
pub fn simplify(points: &[StrokePoint], max_points: usize) -> Vec<StrokePoint> {
    if points.len() <= max_points {
        return points.to_vec();
    }
    if max_points == 0 {
        return Vec::new();
    }
    if max_points == 1 {
        return vec![points[0]];
    }

    #[allow(clippy::cast_precision_loss)]
    let step = points.len() as f64 / max_points as f64;
    let mut simplified = Vec::with_capacity(max_points);

    simplified.push(points[0]);
    for i in 1..max_points - 1 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let source_index = (i as f64 * step).floor() as usize;
        if source_index > 0 && source_index < points.len() {
            simplified.push(points[source_index]);
        }
    }
    // The last original point is always preserved exactly.
    simplified.push(points[points.len() - 1]);

    simplified.truncate(max_points);
    simplified
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn stroke_of(n: usize) -> Vec<StrokePoint> {
        (0..n)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let x = i as f64;
                StrokePoint::new(x, x * 2.0, i as u64 * 8)
            })
            .collect()
    }

    #[test]
    fn short_stroke_unchanged() {
        let points = stroke_of(100);
        let result = simplify(&points, 8000);
        assert_eq!(result, points);
    }

    #[test]
    fn exact_cap_unchanged() {
        let points = stroke_of(8000);
        let result = simplify(&points, 8000);
        assert_eq!(result.len(), 8000);
        assert_eq!(result, points);
    }

    #[test]
    fn ten_thousand_points_reduce_to_exactly_the_cap() {
        let points = stroke_of(10_000);
        let result = simplify(&points, 8000);
        assert_eq!(result.len(), 8000);
    }

    #[test]
    fn first_and_last_points_preserved_exactly() {
        let points = stroke_of(10_000);
        let result = simplify(&points, 8000);
        assert_eq!(result.first().unwrap(), points.first().unwrap());
        assert_eq!(result.last().unwrap(), points.last().unwrap());
    }

    #[test]
    fn middle_points_are_strided_monotonically() {
        let points = stroke_of(10_000);
        let result = simplify(&points, 8000);
        // x carries the original index; it must be non-decreasing.
        for pair in result.windows(2) {
            assert!(pair[0].x <= pair[1].x);
        }
    }

    #[test]
    fn empty_input_stays_empty() {
        let result = simplify(&[], 8000);
        assert!(result.is_empty());
    }

    #[test]
    fn cap_of_one_keeps_first_point() {
        let points = stroke_of(10);
        let result = simplify(&points, 1);
        assert_eq!(result, vec![points[0]]);
    }

    #[test]
    fn cap_of_two_keeps_endpoints() {
        let points = stroke_of(10);
        let result = simplify(&points, 2);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], points[0]);
        assert_eq!(result[1], points[9]);
    }

    #[test]
    fn timestamps_survive_simplification() {
        let points = stroke_of(9000);
        let result = simplify(&points, 8000);
        for p in &result {
            // Each surviving point keeps its original timestamp, which
            // encodes its original index.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let original_index = p.x as u64;
            assert_eq!(p.timestamp, original_index * 8);
        }
    }
}
