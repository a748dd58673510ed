//! Transport traits.
//!
//! Backend developers implement [`Transport`] and [`TransportBackend`]. The
//! type-erased [`AnyTransport`] and [`AnyTransportBackend`] are implemented
//! automatically and are what the facade stores.

mod any;
mod backend;

pub use any::{AnyTransport, AnyTransportBackend};
pub use backend::{Transport, TransportBackend};
