//! Shared types for the etcha image-to-stroke pipeline.

use serde::{Deserialize, Serialize};

/// Re-export `GrayImage` so downstream crates can reference the
/// intensity map without depending on `image` directly.
pub use image::GrayImage;

/// Re-export `RgbaImage` so downstream crates can reference the
/// letterboxed canvas raster without depending on `image` directly.
pub use image::RgbaImage;

/// A single vertex of a replayable drawing path.
///
/// The timestamp is in milliseconds. For generated strokes it is
/// synthetic (fixed spacing per point, not wall-clock accurate); for
/// live-captured strokes it is the capture time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    /// Horizontal position (pixels from the left canvas edge).
    pub x: f64,
    /// Vertical position (pixels from the top canvas edge).
    pub y: f64,
    /// Replay timestamp in milliseconds.
    pub timestamp: u64,
}

impl StrokePoint {
    /// Create a new stroke point.
    #[must_use]
    pub const fn new(x: f64, y: f64, timestamp: u64) -> Self {
        Self { x, y, timestamp }
    }
}

/// An ordered sequence of stroke points; the order defines both the
/// drawn path and the replay order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stroke(Vec<StrokePoint>);

impl Stroke {
    /// Create a new stroke from a vector of points.
    #[must_use]
    pub const fn new(points: Vec<StrokePoint>) -> Self {
        Self(points)
    }

    /// Returns `true` if the stroke has no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of points in the stroke.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the first point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&StrokePoint> {
        self.0.first()
    }

    /// Returns the last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<&StrokePoint> {
        self.0.last()
    }

    /// Returns a slice of all points.
    #[must_use]
    pub fn points(&self) -> &[StrokePoint] {
        &self.0
    }

    /// Consumes the stroke and returns the underlying vector of points.
    #[must_use]
    pub fn into_points(self) -> Vec<StrokePoint> {
        self.0
    }
}

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// A dense gradient measurement at one interior pixel.
///
/// Ephemeral: produced by the edge detector, consumed by non-maximum
/// suppression, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSample {
    /// Pixel x coordinate (interior only).
    pub x: u32,
    /// Pixel y coordinate (interior only).
    pub y: u32,
    /// Non-negative gradient magnitude.
    pub magnitude: f32,
    /// Gradient direction as radians in (-pi, pi].
    pub direction: f32,
}

/// A pixel flagged as part of an image contour, with the gradient
/// magnitude that ranked it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePixel {
    /// Pixel x coordinate.
    pub x: u32,
    /// Pixel y coordinate.
    pub y: u32,
    /// Gradient magnitude at this pixel.
    pub magnitude: f32,
}

/// A bare contour coordinate after adaptive sampling has dropped the
/// magnitude. Input unit of the path builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgePoint {
    /// Pixel x coordinate.
    pub x: u32,
    /// Pixel y coordinate.
    pub y: u32,
}

/// Configuration for the image-to-stroke pipeline.
///
/// All parameters have defaults matching the observed drawing-canvas
/// behavior. The jump threshold is deliberately a fixed pixel constant
/// that does not scale with image resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Hard cap on emitted stroke points.
    pub max_points: usize,

    /// Nearest-neighbor distance (pixels) beyond which the path builder
    /// starts a new disconnected segment instead of connecting.
    pub jump_threshold: f64,

    /// Side length (pixels) of the square grid cells used by the
    /// adaptive sampler.
    pub cell_size: u32,

    /// Synthetic timestamp spacing between consecutive stroke points,
    /// in milliseconds.
    pub timestamp_step_ms: u64,
}

impl PipelineConfig {
    /// Default stroke point cap.
    pub const DEFAULT_MAX_POINTS: usize = 7500;
    /// Default far-jump threshold in pixels.
    pub const DEFAULT_JUMP_THRESHOLD: f64 = 50.0;
    /// Default sampler grid cell size in pixels.
    pub const DEFAULT_CELL_SIZE: u32 = 12;
    /// Default synthetic timestamp spacing in milliseconds.
    pub const DEFAULT_TIMESTAMP_STEP_MS: u64 = 8;
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_points: Self::DEFAULT_MAX_POINTS,
            jump_threshold: Self::DEFAULT_JUMP_THRESHOLD,
            cell_size: Self::DEFAULT_CELL_SIZE,
            timestamp_step_ms: Self::DEFAULT_TIMESTAMP_STEP_MS,
        }
    }
}

/// Errors that can occur during pipeline processing.
///
/// A blank image that yields no edges is *not* an error: the pipeline
/// returns an empty [`Stroke`] and the caller treats "nothing to draw"
/// as a valid outcome.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// Pipeline configuration is invalid.
    #[error("invalid pipeline configuration: {0}")]
    InvalidConfig(String),
}
