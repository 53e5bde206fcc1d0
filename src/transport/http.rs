//! reqwest-backed transport
//!
//! One GET per call, no retries, no rate limiting. Errors are surfaced
//! as-is so callers stay in charge of their own retry policy.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;

use super::Transport;
use crate::error::{Error, Result};

/// Configuration for the HTTP transport
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Base URL relative targets are joined onto
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("halcursor/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpTransportConfig {
    /// Create a new config builder
    pub fn builder() -> HttpTransportConfigBuilder {
        HttpTransportConfigBuilder::default()
    }
}

/// Builder for the transport config
#[derive(Default)]
pub struct HttpTransportConfigBuilder {
    config: HttpTransportConfig,
}

impl HttpTransportConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpTransportConfig {
        self.config
    }
}

/// HTTP transport backed by reqwest
pub struct HttpTransport {
    client: Client,
    config: HttpTransportConfig,
}

impl HttpTransport {
    /// Create a transport pointed at a base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_config(HttpTransportConfig::builder().base_url(base_url).build())
    }

    /// Create a transport with custom configuration
    pub fn with_config(config: HttpTransportConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Build the full URL for a target
    ///
    /// Absolute URLs pass through untouched; cursor links arrive absolute
    /// and must be followed exactly as the server wrote them.
    pub(crate) fn build_url(&self, target: &str) -> String {
        if target.starts_with("http://") || target.starts_with("https://") {
            return target.to_string();
        }

        match &self.config.base_url {
            Some(base) => {
                let base = base.trim_end_matches('/');
                let target = target.trim_start_matches('/');
                format!("{base}/{target}")
            }
            None => target.to_string(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, method: Method, target: &str) -> Result<Value> {
        let url = self.build_url(target);

        let mut req = self.client.request(method.clone(), &url);
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::api(status.as_u16(), error_message(&body)));
        }

        debug!("Request succeeded: {} {}", method, url);
        Ok(serde_json::from_str(&body)?)
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Pull a human-readable message out of an error response body
///
/// Problem-style JSON bodies carry `detail` or `title`; anything else is
/// used verbatim.
fn error_message(body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["detail", "title", "message"] {
            if let Some(Value::String(text)) = map.get(key) {
                if !text.is_empty() {
                    return text.clone();
                }
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "(empty response body)".to_string()
    } else {
        trimmed.to_string()
    }
}
