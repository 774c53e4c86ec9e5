//! HTTP client for the pool listing API
//!
//! Performs exactly one GET per call:
//! - Rate limiting to stay within the API's request quota
//! - Fixed identifying user agent
//! - Response body streamed into an owned buffer
//! - Error classification (transport, status, memory)
//!
//! There are no retries at this layer; any failure is returned to the caller.

use super::buffer::ResponseBuffer;
use super::rate_limit::{RateLimiter, RateLimiterConfig};
use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Upper bound on how much of an advertised `Content-Length` is reserved up front
const MAX_PRESIZE: u64 = 8 * 1024 * 1024;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout, covering connect through the last body byte
    pub timeout: Duration,
    /// Rate limiter configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            rate_limit: Some(RateLimiterConfig::default()),
            user_agent: default_user_agent(),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// What the tool is, sent in every default user agent
const PROJECT_DESCRIPTION: &str = "e621 pool file URL lister";

/// The user agent sent when none is configured
pub fn default_user_agent() -> String {
    user_agent_for(None)
}

/// Identifying user agent, naming the operator's e621 account when given
///
/// e.g. `pool-fetch/0.1.0 (e621 pool file URL lister; by someone on e621)`.
pub fn user_agent_for(contact: Option<&str>) -> String {
    let version = env!("CARGO_PKG_VERSION");
    match contact.map(str::trim).filter(|c| !c.is_empty()) {
        Some(contact) => {
            format!("pool-fetch/{version} ({PROJECT_DESCRIPTION}; by {contact} on e621)")
        }
        None => format!("pool-fetch/{version} ({PROJECT_DESCRIPTION})"),
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client performing single-attempt GET requests
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    /// The client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// GET a URL and return the complete response body
    pub async fn get_bytes(&self, url: &Url) -> Result<Bytes> {
        if let Some(ref limiter) = self.rate_limiter {
            limiter.wait().await;
        }

        debug!(url = %url, "GET");
        let mut response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let hint = response.content_length().map(|len| len.min(MAX_PRESIZE));
        let mut buffer = ResponseBuffer::with_capacity_hint(hint)?;
        while let Some(chunk) = response.chunk().await? {
            buffer.write(&chunk)?;
        }

        debug!(url = %url, bytes = buffer.len(), "Request succeeded");
        Ok(buffer.freeze())
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}
