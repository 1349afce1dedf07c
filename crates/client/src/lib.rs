//! `sysconsole-client`
//!
//! **Responsibility:** typed access to the admin-console REST backend.
//!
//! This crate provides:
//! - Request descriptors for every backend endpoint (`api::*`)
//! - A `Transport` seam with a reqwest implementation
//! - `ConsoleClient`, one async method per endpoint
//!
//! The client is a **thin shell** around the backend: it forwards parameters
//! and propagates whatever the backend answers. No retries, no caching.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::ConsoleClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use request::{ApiRequest, Method, RawRequest};
pub use transport::{Envelope, ReqwestTransport, Transport, SUCCESS_CODE};

pub use sysconsole_core as model;
