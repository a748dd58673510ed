//! Declarative HTTP requests for Rust.
//!
//! ## Overview
//!
//! nestnet lets callers describe a request as a small value, a [`RequestDescriptor`] made of
//! a host, an endpoint, a raw query string, a [`Method`] and a [`Body`] encoding, and turns
//! that description into a fully-formed wire request. The [`Dispatcher`] hands the wire
//! request to a transport and reports back the raw response bytes.
//!
//! The body encodings are
//!
//! - [`Body::None`]: no body and no `Content-Type`
//! - [`Body::Form`]: `application/x-www-form-urlencoded` fields, see [`body_form!`]
//! - [`Body::Multipart`]: `multipart/form-data` with a fresh random boundary per build
//! - [`Body::Json`]: JSON bytes sent verbatim
//! - [`Body::Encodable`]: any [`NetworkEncodable`] value, serialized at build time
//!
//! ## Transports
//!
//! nestnet does not talk to the network itself. The transport is a collaborator described
//! by [`nestnet-interface`]; pass one to [`DispatcherBuilder::build_with`], or register a
//! backend such as [`nestnet-backend-reqwest`] once at startup and use
//! [`DispatcherBuilder::build`]. A transport is meant to be created once and reused so that
//! it can pool connections.
//!
//! ## Usage
//!
//! ```no_run
//! use nestnet::{body_form, Dispatcher, RequestDescriptor};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let dispatcher = Dispatcher::builder().bearer_token("s3cr3t").build()?;
//! let descriptor = RequestDescriptor::post("https://httpbin.org", "post").with_body(body_form! {
//!     "key1" => "value1",
//!     "key2" => 2,
//! });
//! let bytes = dispatcher.execute(&descriptor).await.into_result()?;
//! # Ok(())
//! # }
//! ```
//!
//! [`Dispatcher::execute_with`] is the callback flavor: it returns immediately and invokes
//! the callback exactly once on a background thread.
//!
//! Building never touches the network, so a descriptor can be inspected with
//! [`RequestDescriptor::build`] directly.
//!
//! ## Features
//!
//! - `json`: Enable [`Body::json`] and the [`Json`] wrapper for `serde` values.
//!
//! [`nestnet-interface`]: https://docs.rs/nestnet-interface
//! [`nestnet-backend-reqwest`]: https://docs.rs/nestnet-backend-reqwest

#![cfg_attr(docsrs, feature(doc_cfg))]

mod body;
mod builder;
pub mod dispatcher;
pub mod encoding;
mod error;
pub mod multipart;
pub mod observe;
mod request;

#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
pub use body::Json;
pub use body::{Body, BoxError, NetworkEncodable};
pub use builder::{BuiltRequest, Headers};
#[doc(inline)]
pub use dispatcher::{DispatchOutcome, Dispatcher, DispatcherBuilder};
pub use error::{Error, Result};
pub use multipart::Part;
pub use request::{Method, RequestDescriptor};
