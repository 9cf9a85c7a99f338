//! HTTP mapping for pipeline errors.
//!
//! # Design
//! Invalid parameters become a 400 carrying the validator's message. Every
//! other failure becomes a 500 with a fixed message; upstream bodies and
//! transport details go to the log only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use thumbnails_core::ApiError;
use tracing::{error, warn};

/// Handler error. Converts pipeline failures into plain-text responses and
/// logs upstream details that must not reach the caller.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct AppError(#[from] ApiError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn public_message(&self) -> String {
        match &self.0 {
            ApiError::InvalidParameter { message, .. } => (*message).to_string(),
            ApiError::Upstream { .. } => self.0.to_string(),
            ApiError::Transport(_) => {
                "An internal error occurred while making the request".to_string()
            }
            ApiError::UpstreamSchema(_) => {
                "An internal error occurred while reading the YouTube response".to_string()
            }
            ApiError::Serialization(_) => {
                "An internal error occurred while generating the json response".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self.0 {
            ApiError::InvalidParameter { name, message } => {
                warn!(parameter = name, "rejected request: {message}");
            }
            ApiError::Upstream { status, body } => {
                error!(status, %body, "upstream search failed");
            }
            other => error!(error = %other, "thumbnails request failed"),
        }

        (self.status(), self.public_message()).into_response()
    }
}
