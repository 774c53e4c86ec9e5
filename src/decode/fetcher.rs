//! JSON document fetcher
//!
//! Combines the HTTP transport with JSON parsing. The raw body is dropped
//! before returning, whether parsing succeeds or not.

use crate::error::Result;
use crate::http::HttpClient;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Fetches and parses JSON documents
#[derive(Debug)]
pub struct DocumentFetcher {
    client: HttpClient,
}

impl DocumentFetcher {
    /// Create a fetcher over an HTTP client
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// The underlying HTTP client
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// GET `url` and parse the body as JSON.
    ///
    /// Transport failures are `RequestFailed`; a body that is not valid
    /// JSON (including an empty body) is `ParseError`.
    pub async fn fetch(&self, url: &Url) -> Result<Value> {
        let body = self.client.get_bytes(url).await?;
        let document: serde_json::Result<Value> = serde_json::from_slice(&body);
        debug!(url = %url, bytes = body.len(), parsed = document.is_ok(), "Fetched document");
        drop(body);
        Ok(document?)
    }
}
