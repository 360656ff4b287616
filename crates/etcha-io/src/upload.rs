//! Upload handling: validate an image file and prepare it for the
//! pipeline.
//!
//! The upload step does **not** run the pipeline. It validates the
//! file, fetches the decorative description (best-effort), and returns
//! the image as a reusable `data:` URL; the caller decodes that URL
//! and feeds the bytes to `etcha-pipeline` together with the target
//! canvas dimensions.

use serde::{Deserialize, Serialize};

use crate::data_url::to_data_url;
use crate::describe::{ImageDescriber, describe_or_placeholder};

/// An uploaded image plus the canvas it will be drawn onto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRequest {
    /// Raw file bytes.
    pub image: Vec<u8>,
    /// Declared MIME type of the file (must be `image/*`).
    pub mime: String,
    /// Target canvas width in pixels.
    pub canvas_width: u32,
    /// Target canvas height in pixels.
    pub canvas_height: u32,
}

/// The prepared upload, ready for client-side path generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Decorative description of the image (placeholder text when the
    /// description service is unavailable).
    pub description: String,
    /// The uploaded image as a `data:` URL.
    pub image_data: String,
}

/// Errors that reject an upload outright.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// No file bytes were provided.
    #[error("no image file provided")]
    EmptyImage,

    /// The declared MIME type is not an image type.
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),
}

/// Validate an upload and prepare it for path generation.
///
/// The description call is best-effort; any failure substitutes the
/// placeholder text and the upload still succeeds.
///
/// # Errors
///
/// Returns [`UploadError::EmptyImage`] for an empty payload and
/// [`UploadError::UnsupportedType`] for a non-`image/*` MIME type.
pub fn accept_upload(
    request: &UploadRequest,
    describer: &dyn ImageDescriber,
) -> Result<UploadResponse, UploadError> {
    if request.image.is_empty() {
        return Err(UploadError::EmptyImage);
    }
    if !request.mime.starts_with("image/") {
        return Err(UploadError::UnsupportedType(request.mime.clone()));
    }

    let description = describe_or_placeholder(describer, &request.image, &request.mime);
    let image_data = to_data_url(&request.image, &request.mime);

    Ok(UploadResponse {
        description,
        image_data,
    })
}
