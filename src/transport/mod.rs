//! Transport layer
//!
//! The [`Transport`] trait is the seam between the pagination core and the
//! network: execute one HTTP round trip and hand back the parsed JSON body.
//!
//! # Features
//!
//! - **Single round trips**: one call, one request, no retries
//! - **Relative and absolute targets**: paths join onto a base URL, cursor
//!   links arriving as absolute URLs pass through untouched
//! - **Pluggable**: the crate ships a reqwest-backed implementation, tests
//!   and exotic setups inject their own

mod http;

pub use http::{HttpTransport, HttpTransportConfig, HttpTransportConfigBuilder};

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::error::Result;

/// One-round-trip HTTP executor used by every operation in the crate.
///
/// `target` is either a path (with query string) relative to the
/// implementation's base URL, or an absolute `http(s)` URL. Implementations
/// map non-success responses to [`Error::Api`] and connection failures to
/// [`Error::Http`], and never retry on their own; retry policy belongs to
/// the caller.
///
/// [`Error::Api`]: crate::error::Error::Api
/// [`Error::Http`]: crate::error::Error::Http
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request and return the parsed JSON body
    async fn execute(&self, method: Method, target: &str) -> Result<Value>;
}

#[cfg(test)]
pub(crate) mod mock;
