//! Non-maximum suppression: thin gradient ridges to local maxima.
//!
//! A sample survives only if its magnitude is at least that of both
//! neighbors along its gradient direction. The candidate set is a
//! sparse subset of the pixel grid by this stage, so neighbor lookups
//! go through a coordinate-keyed hash map rather than array adjacency.
//! A missing neighbor counts as magnitude zero, so samples at the edge
//! of the interior region survive trivially.

use std::collections::HashMap;

use crate::types::{EdgePixel, GradientSample};

/// The two neighbor offsets along a gradient direction, selected by
/// quantizing the direction into four bins: horizontal (within 22.5
/// degrees of the x axis), the two diagonals, and vertical.
fn direction_neighbors(direction: f32) -> [(i64, i64); 2] {
    // Fold radians into [0, 180) degrees; opposite directions share a bin.
    let mut degrees = direction.to_degrees();
    if degrees < 0.0 {
        degrees += 180.0;
    }

    if degrees < 22.5 || degrees >= 157.5 {
        // Horizontal gradient.
        [(-1, 0), (1, 0)]
    } else if degrees < 67.5 {
        // 45-degree diagonal.
        [(1, 1), (-1, -1)]
    } else if degrees < 112.5 {
        // Vertical gradient.
        [(0, -1), (0, 1)]
    } else {
        // 135-degree diagonal.
        [(-1, 1), (1, -1)]
    }
}

/// Thin the dense gradient samples to local maxima along the gradient
/// direction.
///
/// Output order follows input order. The result is never larger than
/// the input; it only filters.
#[must_use = "returns the thinned edge pixels"]
pub fn non_maximum_suppression(samples: &[GradientSample]) -> Vec<EdgePixel> {
    let lookup: HashMap<(u32, u32), f32> = samples
        .iter()
        .map(|s| ((s.x, s.y), s.magnitude))
        .collect();

    let magnitude_at = |x: i64, y: i64| -> f32 {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return 0.0;
        };
        lookup.get(&(x, y)).copied().unwrap_or(0.0)
    };

    samples
        .iter()
        .filter(|s| {
            let [a, b] = direction_neighbors(s.direction);
            let (x, y) = (i64::from(s.x), i64::from(s.y));
            s.magnitude >= magnitude_at(x + a.0, y + a.1)
                && s.magnitude >= magnitude_at(x + b.0, y + b.1)
        })
        .map(|s| EdgePixel {
            x: s.x,
            y: s.y,
            magnitude: s.magnitude,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: u32, y: u32, magnitude: f32, direction: f32) -> GradientSample {
        GradientSample {
            x,
            y,
            magnitude,
            direction,
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(non_maximum_suppression(&[]).is_empty());
    }

    #[test]
    fn lone_sample_survives() {
        // Both direction neighbors are missing (magnitude 0).
        let thinned = non_maximum_suppression(&[sample(5, 5, 10.0, 0.0)]);
        assert_eq!(thinned.len(), 1);
        assert_eq!((thinned[0].x, thinned[0].y), (5, 5));
    }

    #[test]
    fn local_maximum_suppresses_horizontal_neighbors() {
        // Three samples in a row, gradient pointing along x: only the
        // center (strongest) survives; the flanks lose to it.
        let samples = [
            sample(4, 5, 3.0, 0.0),
            sample(5, 5, 9.0, 0.0),
            sample(6, 5, 4.0, 0.0),
        ];
        let thinned = non_maximum_suppression(&samples);
        assert_eq!(thinned.len(), 1);
        assert_eq!((thinned[0].x, thinned[0].y), (5, 5));
        assert!((thinned[0].magnitude - 9.0).abs() < f32::EPSILON);
    }

    #[test]
    fn vertical_gradient_checks_vertical_neighbors() {
        use std::f32::consts::FRAC_PI_2;
        let samples = [
            sample(5, 4, 3.0, FRAC_PI_2),
            sample(5, 5, 9.0, FRAC_PI_2),
            sample(5, 6, 4.0, FRAC_PI_2),
        ];
        let thinned = non_maximum_suppression(&samples);
        assert_eq!(thinned.len(), 1);
        assert_eq!((thinned[0].x, thinned[0].y), (5, 5));
    }

    #[test]
    fn equal_magnitude_plateau_survives() {
        // Survival requires >= both neighbors, so a flat plateau keeps
        // every sample.
        let samples = [
            sample(4, 5, 5.0, 0.0),
            sample(5, 5, 5.0, 0.0),
            sample(6, 5, 5.0, 0.0),
        ];
        let thinned = non_maximum_suppression(&samples);
        assert_eq!(thinned.len(), 3);
    }

    #[test]
    fn perpendicular_neighbors_do_not_suppress() {
        // Gradient along x, stronger neighbor above: irrelevant, since
        // only the two x-direction neighbors are compared.
        let samples = [sample(5, 5, 2.0, 0.0), sample(5, 4, 50.0, 0.0)];
        let thinned = non_maximum_suppression(&samples);
        assert_eq!(thinned.len(), 2);
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn never_increases_count() {
        let samples: Vec<GradientSample> = (0..100)
            .map(|i| sample(i % 10 + 2, i / 10 + 2, (i % 7) as f32, (i % 4) as f32 - 2.0))
            .collect();
        let thinned = non_maximum_suppression(&samples);
        assert!(thinned.len() <= samples.len());
    }

    #[test]
    fn negative_direction_folds_into_same_bin() {
        // -pi is the same axis as 0: horizontal neighbors apply.
        let samples = [
            sample(4, 5, 3.0, std::f32::consts::PI),
            sample(5, 5, 9.0, -std::f32::consts::PI),
            sample(6, 5, 4.0, 0.0),
        ];
        let thinned = non_maximum_suppression(&samples);
        assert_eq!(thinned.len(), 1);
        assert_eq!((thinned[0].x, thinned[0].y), (5, 5));
    }
}
