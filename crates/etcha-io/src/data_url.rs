//! `data:` URL encoding and decoding for uploaded images.
//!
//! Uploads are handed back to the client as base64 `data:` URLs so the
//! same bytes can be previewed and fed to the pipeline without a second
//! round trip.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Errors from parsing a `data:` URL.
#[derive(Debug, thiserror::Error)]
pub enum DataUrlError {
    /// The string does not have the `data:<mime>;base64,<payload>` shape.
    #[error("malformed data URL")]
    Malformed,

    /// The payload is not valid base64.
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Encode raw bytes as a `data:<mime>;base64,...` URL.
#[must_use]
pub fn to_data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Decode a `data:<mime>;base64,...` URL back into its MIME type and
/// raw bytes.
///
/// # Errors
///
/// Returns [`DataUrlError::Malformed`] if the prefix or separators are
/// missing, and [`DataUrlError::Base64`] if the payload fails to
/// decode.
pub fn parse_data_url(url: &str) -> Result<(String, Vec<u8>), DataUrlError> {
    let rest = url.strip_prefix("data:").ok_or(DataUrlError::Malformed)?;
    let (mime, payload) = rest.split_once(";base64,").ok_or(DataUrlError::Malformed)?;
    let bytes = STANDARD.decode(payload)?;
    Ok((mime.to_string(), bytes))
}
