//! Error types for nestnet transport operations.

use thiserror::Error;

/// Common error types that can occur while a transport carries a request.
#[derive(Debug, Error)]
pub enum Error {
    /// The transport does not accept the URL.
    #[error("Invalid URL")]
    InvalidUrl,
    /// An underlying I/O error occurred.
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    /// The response body exceeds the maximum allowed size.
    #[error("Response body size exceeds max limit")]
    ResponseTooLarge,
    /// The request timed out before completion.
    #[error("Request is not finished within timeout")]
    RequestTimeout,
}

/// Result type for nestnet transport operations.
pub type Result<T> = std::result::Result<T, Error>;
