//! Client error types.

use shopfront_commerce::StorefrontError;
use thiserror::Error;

/// Errors that can occur when talking to the commerce API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    Request(String),

    /// HTTP error response, with the backend's message when it sent one.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Failed to parse a response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Domain validation failed before the request was sent.
    #[error(transparent)]
    Domain(#[from] StorefrontError),
}

impl ApiError {
    /// The HTTP status, when this error came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is an authentication failure.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Json(e.to_string())
    }
}
