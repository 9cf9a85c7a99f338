//! Error types for the thumbnails pipeline.
//!
//! # Design
//! `InvalidParameter` is the only client-side failure; everything else is the
//! upstream's fault or ours. `Upstream` keeps the raw status and body so the
//! server can log them, but its `Display` output carries only the status code
//! so the body never reaches a caller by accident.

use thiserror::Error;

/// Errors produced while validating input, building the upstream request,
/// or mapping the upstream response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An inbound query parameter is missing or malformed.
    #[error("{message}")]
    InvalidParameter {
        name: &'static str,
        message: &'static str,
    },

    /// The upstream answered with a status of 300 or above.
    #[error("YouTube API returned response code {status}")]
    Upstream { status: u16, body: String },

    /// The upstream could not be reached or its body could not be read.
    #[error("upstream transport failed: {0}")]
    Transport(String),

    /// The upstream body did not match the expected search schema.
    #[error("upstream response did not match the search schema: {0}")]
    UpstreamSchema(String),

    /// The public payload could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, ApiError::InvalidParameter { .. })
    }
}
