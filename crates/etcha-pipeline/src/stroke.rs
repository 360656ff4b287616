//! Stroke path construction: order sampled edge points into a single
//! traversable pen path.
//!
//! Greedy nearest-neighbor walk: starting from the first sampled edge
//! point, repeatedly adopt the closest remaining point. When the
//! closest candidate is farther than the jump threshold, the walk
//! restarts from the first remaining point instead; the renderer draws
//! a continuous line, so that restart shows up as a long straight
//! "travel line" between disconnected regions. This artifact is part of
//! the observed behavior and must not be optimized away, nor may the
//! heuristic be swapped for a tour-optimal route.
//!
//! Every emitted point gets a synthetic timestamp of
//! `start_ms + index * step` so replay pacing is uniform per point,
//! not per distance.
//!
//! The scan is O(n^2); the adaptive sampler exists to bound n.

use crate::types::{EdgePoint, PipelineConfig, Stroke, StrokePoint};

/// Squared Euclidean distance between two edge points.
fn distance_squared(a: EdgePoint, b: EdgePoint) -> f64 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    dx.mul_add(dx, dy * dy)
}

/// Build a timestamped stroke from sampled edge points.
///
/// The first edge point seeds the walk and is always emitted (with
/// `timestamp = start_ms`). Emission stops when either the working set
/// is exhausted or `config.max_points` points have been emitted. Empty
/// input produces an empty stroke.
#[must_use = "returns the ordered stroke"]
pub fn build_stroke(edges: &[EdgePoint], config: &PipelineConfig, start_ms: u64) -> Stroke {
    let Some((&seed, rest)) = edges.split_first() else {
        return Stroke::new(Vec::new());
    };
    if config.max_points == 0 {
        return Stroke::new(Vec::new());
    }

    let jump_sq = config.jump_threshold * config.jump_threshold;

    let mut points = Vec::with_capacity(config.max_points.min(edges.len()));
    let mut current = seed;
    points.push(StrokePoint::new(f64::from(current.x), f64::from(current.y), start_ms));

    let mut remaining: Vec<EdgePoint> = rest.to_vec();

    while !remaining.is_empty() && points.len() < config.max_points {
        let mut nearest_idx = 0;
        let mut nearest_sq = f64::INFINITY;
        for (i, &candidate) in remaining.iter().enumerate() {
            let d = distance_squared(current, candidate);
            if d < nearest_sq {
                nearest_sq = d;
                nearest_idx = i;
            }
        }

        // Too far to connect: restart the walk from the first remaining
        // point. It still becomes a stroke vertex, so the rendered path
        // shows the straight travel line between the two regions.
        let next_idx = if nearest_sq > jump_sq { 0 } else { nearest_idx };
        current = remaining.remove(next_idx);

        let timestamp = start_ms + points.len() as u64 * config.timestamp_step_ms;
        points.push(StrokePoint::new(f64::from(current.x), f64::from(current.y), timestamp));
    }

    Stroke::new(points)
}
