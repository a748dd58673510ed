use crate::error::{Error, Result};

/// The result of dispatching one request. Exactly one variant is produced per call.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The transport completed the exchange; carries the raw response body whatever the
    /// HTTP status was.
    Success(Vec<u8>),
    /// The transport reported an error.
    Failure(Error),
    /// The request could not be built, so nothing was sent.
    BuildFailure(Error),
}

impl DispatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Converts into a `Result`, folding both failure kinds into the error case.
    pub fn into_result(self) -> Result<Vec<u8>> {
        match self {
            Self::Success(bytes) => Ok(bytes),
            Self::Failure(e) | Self::BuildFailure(e) => Err(e),
        }
    }
}
