//! API error types

use crate::dto::{ErrorCode, ErrorResponse};
use thiserror::Error;

/// Boxed error produced by a [`Transport`](crate::transport::Transport)
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Client-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Invalid client configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Header name or value rejected
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// URL could not be built
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// HTTP request could not be assembled
    #[error("failed to build request: {0}")]
    Request(#[from] http::Error),

    /// The transport failed before a response was received
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Response body was not the expected JSON
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered with a structured error
    #[error(transparent)]
    Remote(#[from] ErrorResponse),

    /// Non-success status without a structured error body
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body, lossily decoded
        body: String,
    },
}

impl ApiError {
    /// Wrap any transport failure
    pub fn transport(err: impl Into<BoxError>) -> Self {
        ApiError::Transport(err.into())
    }

    /// Error code reported by the service, if any
    pub fn remote_code(&self) -> Option<&ErrorCode> {
        match self {
            ApiError::Remote(response) => Some(&response.code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(Box::new(err))
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
