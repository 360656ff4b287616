//! Description-service seam: decorative image commentary.
//!
//! A vision model describes the uploaded image's main features for
//! display next to the generated drawing. The text is cosmetic -- the
//! pipeline never consumes it -- so service failures are recovered
//! locally by substituting a fixed placeholder and must never block
//! path generation.

/// Placeholder shown when the description service is unreachable or
/// misconfigured.
pub const PLACEHOLDER_DESCRIPTION: &str = "Image analysis unavailable";

/// Errors from a description service.
#[derive(Debug, thiserror::Error)]
pub enum DescribeError {
    /// The service is not configured (e.g. missing API credentials).
    #[error("description service not configured: {0}")]
    NotConfigured(String),

    /// The service call failed.
    #[error("description service request failed: {0}")]
    RequestFailed(String),
}

/// A service that produces a short textual description of an image.
///
/// Implementations wrap whatever vision backend is configured. The
/// contract is best-effort: callers route every error through
/// [`describe_or_placeholder`].
pub trait ImageDescriber {
    /// Describe the image's main features, edges, and contours.
    ///
    /// # Errors
    ///
    /// Returns a [`DescribeError`] when the backend is unavailable;
    /// callers substitute [`PLACEHOLDER_DESCRIPTION`].
    fn describe(&self, image: &[u8], mime: &str) -> Result<String, DescribeError>;
}

/// The no-backend describer: always reports itself as not configured.
///
/// Used when no vision service credentials are present; combined with
/// [`describe_or_placeholder`] it degrades to the placeholder text.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableDescriber;

impl ImageDescriber for UnavailableDescriber {
    fn describe(&self, _image: &[u8], _mime: &str) -> Result<String, DescribeError> {
        Err(DescribeError::NotConfigured(
            "no description backend".to_string(),
        ))
    }
}

/// Ask `describer` for a description, substituting the placeholder on
/// any failure. This is the only way upload handling calls the
/// service, so a dead backend can never fail an upload.
pub fn describe_or_placeholder(
    describer: &dyn ImageDescriber,
    image: &[u8],
    mime: &str,
) -> String {
    describer
        .describe(image, mime)
        .unwrap_or_else(|_| PLACEHOLDER_DESCRIPTION.to_string())
}
