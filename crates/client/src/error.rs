//! Error types for the GKE client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during GKE client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connect, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success API response other than 404.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The requested resource does not exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Response body could not be decoded into the expected model.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Missing or malformed base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The client was built without an access token.
    #[error("An access token is required")]
    MissingAccessToken,
}

impl ClientError {
    /// Check if this error means the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this error indicates an authentication or permission failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::ApiError { status: 401 | 403, .. })
    }

    /// Check if this error is a connection-level failure.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::HttpError(e) if e.is_connect() || e.is_timeout())
    }
}
