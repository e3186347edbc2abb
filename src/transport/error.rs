//! Transport error types

use thiserror::Error;

/// Errors that can occur when talking to the records backend
#[derive(Error, Debug)]
pub enum TransportError {
    /// Backend could not be reached
    #[error("Records backend unavailable at {0}")]
    Unavailable(String),

    /// Request exceeded the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Backend has no record with this identifier
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// Any other client-side failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl TransportError {
    /// Classify a `reqwest` failure the same way for every call
    pub(crate) fn from_send(err: reqwest::Error, base_url: &str) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Unavailable(base_url.to_string())
        } else if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else {
            TransportError::Request(err)
        }
    }
}

/// Result type for transport operations
pub type TransportResult<T> = Result<T, TransportError>;
