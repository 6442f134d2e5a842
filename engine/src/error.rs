//! Error handling for the CloudVision analysis engine
//!
//! The derivation services are total and never fail; errors exist only
//! at the input boundary, where malformed segmentation output or an
//! undecodable attachment handle can be rejected.

use thiserror::Error;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Validation error on {field}: {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    #[error("Malformed data URL")]
    MalformedDataUrl,

    #[error("Attachment decode error: {0}")]
    AttachmentDecode(#[from] base64::DecodeError),
}

/// Result type alias for engine boundaries
pub type EngineResult<T> = Result<T, EngineError>;
