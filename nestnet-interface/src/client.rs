//! Transport configuration and building.
//!
//! This module provides the options a transport is created with and the
//! errors that can occur while creating one.

mod error;
mod options;

pub use error::{BuildTransportError, BuildTransportResult};
pub use options::TransportOptions;
