//! Image decoding and intensity-map reduction.
//!
//! Decoding accepts raw image bytes (PNG, JPEG, BMP, WebP). Reduction
//! collapses the RGBA canvas raster to a single-channel intensity map:
//! the unweighted mean of R, G, and B, with alpha ignored. The mean
//! (rather than a luminance weighting) matches the drawing canvas the
//! strokes replay on, where channel balance is irrelevant.

use image::{DynamicImage, GrayImage, Luma, RgbaImage};

use crate::types::PipelineError;

/// Decode raw image bytes into a [`DynamicImage`].
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the image format is
/// unrecognized or the data is corrupt.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, PipelineError> {
    if bytes.is_empty() {
        return Err(PipelineError::EmptyInput);
    }
    Ok(image::load_from_memory(bytes)?)
}

/// Reduce an RGBA raster to an intensity map: one byte per pixel,
/// computed as `(r + g + b) / 3`. Alpha is ignored.
///
/// Pure function: identical input always yields an identical map.
#[must_use = "returns the intensity map"]
pub fn intensity_map(rgba: &RgbaImage) -> GrayImage {
    GrayImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let p = rgba.get_pixel(x, y).0;
        let mean = (u16::from(p[0]) + u16::from(p[1]) + u16::from(p[2])) / 3;
        #[allow(clippy::cast_possible_truncation)]
        let value = mean as u8;
        Luma([value])
    })
}
