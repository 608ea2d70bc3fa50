use reqwest::StatusCode;
use thiserror::Error;

use crate::models::ApiError;

/// Everything a request builder can hand back to the caller.
///
/// Declared API errors (status codes the endpoint documents) arrive as
/// `Api`; any other non-success status is an undeclared protocol error
/// and arrives as `Status`. Transport and decode failures pass through
/// from the adapter unchanged.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("registry error {}: {}", .0.error_code, .0.message)]
    Api(ApiError),

    #[error("unexpected status {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid header value in configuration: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl ClientError {
    /// The declared error model, when this is a declared API error.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(e) => Some(e),
            _ => None,
        }
    }

    /// HTTP status attached to this error, when one exists.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api(e) => u16::try_from(e.error_code)
                .ok()
                .and_then(|c| StatusCode::from_u16(c).ok()),
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status(),
            _ => None,
        }
    }
}
