//! HTTP client module
//!
//! Provides the transport used to talk to the pool listing API.
//!
//! # Features
//!
//! - **Single Attempt**: One GET per call, failures are returned, never retried
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Buffered Bodies**: Response streamed into a fallible growable buffer

mod buffer;
mod client;
mod rate_limit;

pub use buffer::ResponseBuffer;
pub use client::{
    default_user_agent, user_agent_for, HttpClient, HttpClientConfig, HttpClientConfigBuilder,
};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
