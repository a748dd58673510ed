//! Core transport interface traits.

use std::fmt;
use std::future::Future;

use crate::client::{BuildTransportResult, TransportOptions};
use crate::{Request, Response, Result};

/// Trait for transports that carry wire requests over the network.
///
/// A transport is expected to be long-lived and shared across many requests
/// so that it can pool connections. Completion may happen on any thread the
/// transport chooses.
pub trait Transport: Send + Sync + 'static {
    /// Provides a textual description of this transport.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transport")
    }

    /// Sends a request and resolves to whatever the server answered.
    ///
    /// Only transport-level problems are errors; any HTTP status is returned
    /// as part of the [`Response`].
    fn send(&self, req: Request) -> impl Future<Output = Result<Response>> + Send;
}

/// Trait for backends that can create transports.
pub trait TransportBackend: Send + Sync + 'static {
    /// The type of transport this backend creates.
    type Transport: Transport;

    /// Creates a new transport with the given options.
    fn create_transport(&self, options: TransportOptions)
        -> BuildTransportResult<Self::Transport>;
}
