use thiserror::Error;

use nestnet_interface::client::BuildTransportError as BuildTransportErrorImpl;

use crate::Error as BackendError;

/// The errors produced when building a [`crate::Dispatcher`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuildDispatcherError {
    /// No backend registered.
    #[error("No backend registered. Please find a transport backend crate (e.g. nestnet-backend-reqwest) and call its `register` function at program startup.")]
    NoBackend,
    /// The backend has returned an error while creating the transport.
    #[error("Error creating transport: {0}")]
    BackendError(#[from] BackendError),
}

/// A `Result` alias where the `Err` case is [`BuildDispatcherError`].
pub type BuildDispatcherResult<T> = Result<T, BuildDispatcherError>;

impl From<BuildTransportErrorImpl> for BuildDispatcherError {
    fn from(e: BuildTransportErrorImpl) -> Self {
        match e {
            BuildTransportErrorImpl::BackendError(e) => Self::BackendError(e.into()),
            BuildTransportErrorImpl::NoBackend => Self::NoBackend,
        }
    }
}
