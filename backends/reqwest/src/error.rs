use std::io;

use nestnet_interface::Error as NestnetError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReqwestBackendError {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("tokio error: {0}")]
    Tokio(#[from] tokio::task::JoinError),
    #[error("response too large")]
    ResponseTooLarge,
    #[error("invalid header name: {0}")]
    InvalidHeaderName(String),
    #[error("invalid header value: {0}")]
    InvalidHeaderValue(String),
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ReqwestBackendError> for NestnetError {
    fn from(err: ReqwestBackendError) -> Self {
        match err {
            ReqwestBackendError::Reqwest(e) => {
                if e.is_timeout() {
                    NestnetError::RequestTimeout
                } else {
                    NestnetError::Io(io::Error::other(e))
                }
            }
            ReqwestBackendError::ResponseTooLarge => NestnetError::ResponseTooLarge,
            ReqwestBackendError::InvalidUrl(_) => NestnetError::InvalidUrl,
            ReqwestBackendError::Io(e) => NestnetError::Io(e),
            other => NestnetError::Io(io::Error::other(other)),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReqwestBackendError>;
