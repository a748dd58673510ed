//! Transport interface definitions for nestnet.
//!
//! This crate provides the contract a transport must fulfil to carry the wire
//! requests produced by the nestnet facade. It defines the wire request and
//! response types, the transport traits and the options a transport is built
//! with.
//!
//! ## Transport Registration
//!
//! Transport backends may register themselves using the `register_backend`
//! function so that the facade can create transports without naming a
//! concrete backend type.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod client;
mod error;
#[doc(hidden)] // For nestnet facade only
pub mod register;
mod request;
pub mod transport;

pub use error::{Error, Result};
pub use register::register_backend;
pub use request::{Method, Request, Response};
