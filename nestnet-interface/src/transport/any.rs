//! Type-erased transport traits.
//!
//! The traits in this module are automatically implemented for types that
//! implement the corresponding traits from the `transport::backend` module,
//! so backend developers don't need to implement them directly.

use std::fmt;
use std::sync::Arc;

use futures_core::future::BoxFuture;

use crate::client::{BuildTransportResult, TransportOptions};
use crate::{Request, Response, Result};

/// Trait for type-erased transport backends.
///
/// Automatically implemented for types implementing `TransportBackend`.
pub trait AnyTransportBackend: Send + Sync + 'static {
    /// Creates a new transport with the given options.
    fn create_transport(&self, options: TransportOptions)
        -> BuildTransportResult<Arc<dyn AnyTransport>>;
}

/// Trait for type-erased transports.
///
/// Automatically implemented for types implementing `Transport`.
pub trait AnyTransport: Send + Sync + 'static {
    /// Provides a textual description of this transport.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
    /// Sends a request and resolves to the response.
    fn send(&self, req: Request) -> BoxFuture<'_, Result<Response>>;
}

impl<B> AnyTransportBackend for B
where
    B: super::backend::TransportBackend,
{
    fn create_transport(
        &self,
        options: TransportOptions,
    ) -> BuildTransportResult<Arc<dyn AnyTransport>> {
        super::backend::TransportBackend::create_transport(self, options)
            .map(|transport| Arc::new(transport) as Arc<dyn AnyTransport>)
    }
}

impl<T> AnyTransport for T
where
    T: super::backend::Transport,
{
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::backend::Transport::describe(self, f)
    }

    fn send(&self, req: Request) -> BoxFuture<'_, Result<Response>> {
        Box::pin(super::backend::Transport::send(self, req))
    }
}
