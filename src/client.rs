//! Top-level API client
//!
//! Binds one transport to the typed collection endpoints. Construction
//! from a base URL covers the common case; any [`Transport`] can be
//! injected for tests or custom network stacks. The client is cheap to
//! clone, endpoints share the underlying transport.

use std::sync::Arc;

use crate::endpoint::CollectionEndpoint;
use crate::resource::Resource;
use crate::resources::{Balance, Payment};
use crate::transport::{HttpTransport, HttpTransportConfig, Transport};

/// Client for one API host.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Create a client over an existing transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Create a client with a default HTTP transport pointed at `base_url`
    pub fn from_url(base_url: impl Into<String>) -> Self {
        Self::with_config(HttpTransportConfig::builder().base_url(base_url).build())
    }

    /// Create a client from a full transport configuration
    pub fn with_config(config: HttpTransportConfig) -> Self {
        Self::new(Arc::new(HttpTransport::with_config(config)))
    }

    /// The transport all endpoints of this client go through
    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.transport)
    }

    /// Balances endpoint (`bal_` ids, plus the `primary` sentinel)
    pub fn balances(&self) -> CollectionEndpoint<Balance> {
        self.endpoint()
    }

    /// Payments endpoint (`tr_` ids)
    pub fn payments(&self) -> CollectionEndpoint<Payment> {
        self.endpoint()
    }

    /// Endpoint for any caller-defined [`Resource`]
    pub fn endpoint<T: Resource>(&self) -> CollectionEndpoint<T> {
        CollectionEndpoint::new(Arc::clone(&self.transport))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}
