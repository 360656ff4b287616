//! etcha-io: upload handling and the description-service seam.
//!
//! The upload flow validates the incoming file, asks a description
//! service for decorative commentary (best-effort -- its failure never
//! blocks anything), and hands the image back as a reusable `data:`
//! URL for the pipeline caller to decode. The pipeline itself is *not*
//! invoked here; path generation runs against the returned image data.

pub mod data_url;
pub mod describe;
pub mod upload;

pub use data_url::{DataUrlError, parse_data_url, to_data_url};
pub use describe::{
    DescribeError, ImageDescriber, PLACEHOLDER_DESCRIPTION, UnavailableDescriber,
    describe_or_placeholder,
};
pub use upload::{UploadError, UploadRequest, UploadResponse, accept_upload};
