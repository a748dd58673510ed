use thiserror::Error;

use nestnet_interface::Error as ErrorImpl;

/// The errors produced while building or dispatching a request.
#[derive(Debug, Error)]
pub enum Error {
    /// The endpoint or query string could not be encoded, or the joined result is not an
    /// absolute URL.
    #[error("Malformed URL: {0}")]
    MalformedUrl(String),
    /// The transport does not recognize the built URL as valid.
    #[error("Invalid URL")]
    InvalidUrl,
    /// A generic transport error.
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    /// The transport has received a response body that exceeds the maximum size limit
    /// specified in [`crate::DispatcherBuilder::max_response_buffer_size`].
    #[error("Response body size exceeds max limit")]
    ResponseTooLarge,
    /// The transport is not able to finish the exchange within the timeout specified in
    /// [`crate::DispatcherBuilder::request_timeout`].
    #[error("Request is not finished within timeout")]
    RequestTimeout,
}

/// A `Result` alias where the `Err` case is [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl From<ErrorImpl> for Error {
    fn from(e: ErrorImpl) -> Self {
        match e {
            ErrorImpl::InvalidUrl => Self::InvalidUrl,
            ErrorImpl::Io(e) => Self::Io(e),
            ErrorImpl::ResponseTooLarge => Self::ResponseTooLarge,
            ErrorImpl::RequestTimeout => Self::RequestTimeout,
        }
    }
}
