//! Letterboxing: fit a decoded image into the target canvas.
//!
//! The uploaded image rarely matches the drawing canvas dimensions, so
//! it is scaled to fit while preserving aspect ratio and centered on a
//! neutral background. The background matches the canvas fill color so
//! the letterbox bars produce no gradients of their own (apart from the
//! seam against the image, which is real contrast and may legitimately
//! be traced).
//!
//! This is the first step of the pipeline, before grayscale reduction.

use image::{DynamicImage, Rgba, RgbaImage, imageops};

use crate::types::Dimensions;

/// Canvas background fill, matching the drawing surface color.
pub const BACKGROUND: Rgba<u8> = Rgba([229, 231, 235, 255]);

/// Scale `image` to fit inside `canvas` preserving aspect ratio, and
/// center it on a [`BACKGROUND`]-filled raster of exactly the canvas
/// dimensions.
///
/// A wider-than-canvas image is pillarboxed top/bottom; a taller one is
/// letterboxed left/right. The offset on the padded axis is
/// `(canvas_dim - scaled_dim) / 2`.
#[must_use = "returns the composed canvas raster"]
pub fn letterbox(image: &DynamicImage, canvas: Dimensions) -> RgbaImage {
    let (img_w, img_h) = (f64::from(image.width()), f64::from(image.height()));
    let (canvas_w, canvas_h) = (f64::from(canvas.width), f64::from(canvas.height));

    let image_aspect = img_w / img_h;
    let canvas_aspect = canvas_w / canvas_h;

    let (draw_w, draw_h) = if image_aspect > canvas_aspect {
        // Image is wider: full canvas width, reduced height.
        (canvas_w, canvas_w / image_aspect)
    } else {
        // Image is taller (or same aspect): full canvas height.
        (canvas_h * image_aspect, canvas_h)
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (scaled_w, scaled_h) = ((draw_w.round() as u32).max(1), (draw_h.round() as u32).max(1));

    let offset_x = i64::from((canvas.width - scaled_w.min(canvas.width)) / 2);
    let offset_y = i64::from((canvas.height - scaled_h.min(canvas.height)) / 2);

    let scaled = image::imageops::resize(
        &image.to_rgba8(),
        scaled_w,
        scaled_h,
        imageops::FilterType::Triangle,
    );

    let mut composed = RgbaImage::from_pixel(canvas.width, canvas.height, BACKGROUND);
    imageops::overlay(&mut composed, &scaled, offset_x, offset_y);
    composed
}
