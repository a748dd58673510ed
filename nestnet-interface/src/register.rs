use std::sync::OnceLock;

use crate::transport::AnyTransportBackend;

/// The backend registered with [`register_backend`], if any.
pub static BACKEND: OnceLock<Box<dyn AnyTransportBackend>> = OnceLock::new();

/// Registers a transport backend as the process-wide default.
///
/// # Panics
///
/// Panics if a backend has already been registered.
pub fn register_backend(backend: impl crate::transport::TransportBackend) {
    if BACKEND.set(Box::new(backend)).is_err() {
        panic!("Backend already registered");
    }
}
