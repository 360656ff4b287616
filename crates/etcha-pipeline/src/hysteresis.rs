//! Hysteresis thresholding: classify thinned edges as strong, weak, or
//! discarded.
//!
//! The thresholds adapt to the magnitude distribution of the image at
//! hand: the high threshold tracks the top-5% magnitude cutoff (scaled
//! down), the low threshold tracks the high one, and both have absolute
//! floors so a noisy low-contrast image does not degenerate into a
//! dense edge soup. Weak edges are kept only when adjacent to a strong
//! edge, which preserves contour continuations while dropping isolated
//! speckle.

use std::collections::HashSet;

use crate::types::EdgePixel;

/// Absolute floor for the high threshold.
const HIGH_FLOOR: f32 = 80.0;
/// Absolute floor for the low threshold.
const LOW_FLOOR: f32 = 40.0;
/// Fraction of edges whose magnitude defines the percentile cutoff.
const TOP_FRACTION: f64 = 0.05;
/// High threshold as a fraction of the percentile cutoff.
const HIGH_SCALE: f32 = 0.8;
/// Low threshold as a fraction of the high threshold.
const LOW_SCALE: f32 = 0.4;

/// The dual thresholds derived from a magnitude distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Magnitudes at or above this are strong edges.
    pub high: f32,
    /// Magnitudes at or above this (but below `high`) are weak
    /// candidates.
    pub low: f32,
}

/// Derive the dual thresholds from the edge magnitude distribution.
///
/// The percentile cutoff is the value at the top-5% rank of magnitudes
/// sorted descending. `high = max(80, cutoff * 0.8)`,
/// `low = max(40, high * 0.4)`.
#[must_use]
pub fn derive_thresholds(edges: &[EdgePixel]) -> Thresholds {
    let mut magnitudes: Vec<f32> = edges.iter().map(|e| e.magnitude).collect();
    magnitudes.sort_by(|a, b| b.total_cmp(a));

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let rank = ((magnitudes.len() as f64 * TOP_FRACTION).floor() as usize)
        .min(magnitudes.len().saturating_sub(1));
    let cutoff = magnitudes.get(rank).copied().unwrap_or(0.0);

    let high = (cutoff * HIGH_SCALE).max(HIGH_FLOOR);
    let low = (high * LOW_SCALE).max(LOW_FLOOR);
    Thresholds { high, low }
}

/// Filter thinned edges by dual-threshold hysteresis.
///
/// Strong edges (magnitude >= high) are always kept. Weak candidates
/// (low <= magnitude < high) are kept only if at least one of their
/// eight grid neighbors is a strong edge. Everything else is discarded.
/// Output preserves input order.
#[must_use = "returns the filtered edge set"]
pub fn hysteresis_filter(edges: &[EdgePixel]) -> Vec<EdgePixel> {
    if edges.is_empty() {
        return Vec::new();
    }

    let thresholds = derive_thresholds(edges);

    let strong: HashSet<(u32, u32)> = edges
        .iter()
        .filter(|e| e.magnitude >= thresholds.high)
        .map(|e| (e.x, e.y))
        .collect();

    let has_strong_neighbor = |e: &EdgePixel| -> bool {
        let (x, y) = (i64::from(e.x), i64::from(e.y));
        for dy in -1..=1_i64 {
            for dx in -1..=1_i64 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (Ok(nx), Ok(ny)) = (u32::try_from(x + dx), u32::try_from(y + dy)) else {
                    continue;
                };
                if strong.contains(&(nx, ny)) {
                    return true;
                }
            }
        }
        false
    };

    edges
        .iter()
        .filter(|e| {
            e.magnitude >= thresholds.high
                || (e.magnitude >= thresholds.low && has_strong_neighbor(e))
        })
        .copied()
        .collect()
}
