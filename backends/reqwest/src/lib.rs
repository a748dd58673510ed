//! A nestnet transport backed by [`reqwest`].
//!
//! The transport works from inside a tokio runtime as well as from any other executor or
//! plain thread. Outside tokio, requests run on a small runtime managed by the transport.
//!
//! Call [`register`] once at startup to make this the transport used by
//! `DispatcherBuilder::build`, or pass a [`ReqwestTransport`] to `build_with` directly.

mod client;
mod error;
mod request;
mod response;
mod transport;

use nestnet_interface::client::{BuildTransportResult, TransportOptions};
use nestnet_interface::register_backend;

pub use client::ReqwestTransport;

/// The backend implementation using reqwest.
pub struct ReqwestBackend;

impl nestnet_interface::transport::TransportBackend for ReqwestBackend {
    type Transport = ReqwestTransport;

    fn create_transport(&self, options: TransportOptions) -> BuildTransportResult<Self::Transport> {
        Ok(ReqwestTransport::new(options)?)
    }
}

/// Registers the reqwest backend as global default.
pub fn register() {
    register_backend(ReqwestBackend);
}
