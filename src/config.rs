//! Fetcher configuration
//!
//! Collects the endpoint and HTTP settings a [`PoolFetcher`] is built from.
//!
//! [`PoolFetcher`]: crate::pagination::PoolFetcher

use crate::endpoint::{PoolEndpoint, DEFAULT_ENDPOINT};
use crate::error::Result;
use crate::http::{user_agent_for, HttpClientConfig, RateLimiterConfig};
use std::time::Duration;

/// Pause before every page request
pub const PAGE_DELAY: Duration = Duration::from_secs(1);

/// Configuration for fetching a pool
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Pool listing endpoint
    pub endpoint: String,
    /// HTTP client configuration
    pub http: HttpClientConfig,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http: HttpClientConfig::default(),
        }
    }
}

impl FetcherConfig {
    /// Create a new config builder
    pub fn builder() -> FetcherConfigBuilder {
        FetcherConfigBuilder::default()
    }

    /// Parse the configured endpoint
    pub fn pool_endpoint(&self) -> Result<PoolEndpoint> {
        PoolEndpoint::new(&self.endpoint)
    }
}

/// Builder for fetcher config
#[derive(Default)]
pub struct FetcherConfigBuilder {
    config: FetcherConfig,
}

impl FetcherConfigBuilder {
    /// Set the pool listing endpoint
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.http.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.http.user_agent = agent.into();
        self
    }

    /// Name the operator's e621 account in the default user agent
    pub fn contact(mut self, name: &str) -> Self {
        self.config.http.user_agent = user_agent_for(Some(name));
        self
    }

    /// Set the request rate limit
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.http.rate_limit = Some(config);
        self
    }

    /// Disable the request rate limit
    pub fn no_rate_limit(mut self) -> Self {
        self.config.http.rate_limit = None;
        self
    }

    /// Build the config
    pub fn build(self) -> FetcherConfig {
        self.config
    }
}
