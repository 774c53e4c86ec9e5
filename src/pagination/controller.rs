//! Pool fetch loop
//!
//! Reads the pool's declared post count, then requests pages one at a
//! time, pausing before each, until the declared count is covered or a
//! page comes back empty. Any fetch, parse or page-shape failure ends
//! the run.

use super::pacing::Pacer;
use super::types::{NextPage, PaginationState, StopReason};
use crate::config::{FetcherConfig, PAGE_DELAY};
use crate::decode::{DocumentFetcher, PoolMetadata};
use crate::endpoint::PoolEndpoint;
use crate::error::Result;
use crate::http::HttpClient;
use crate::output::LineOutput;
use crate::page::{PageOutcome, PageProcessor};
use crate::types::{PageNumber, PoolId};
use std::io::Write;
use tracing::{debug, info};

/// Totals for one completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Pool that was fetched
    pub pool: PoolId,
    /// Post count declared by the pool metadata
    pub post_count: u64,
    /// Pages requested after the metadata
    pub pages_fetched: u64,
    /// Slots seen across all pages
    pub entries_seen: u64,
    /// URLs written to the primary channel
    pub urls_emitted: u64,
    /// Entries reported and skipped
    pub entries_skipped: u64,
    /// Why the loop ended
    pub stop_reason: StopReason,
}

impl RunSummary {
    fn new(pool: PoolId, post_count: u64) -> Self {
        Self {
            pool,
            post_count,
            pages_fetched: 0,
            entries_seen: 0,
            urls_emitted: 0,
            entries_skipped: 0,
            stop_reason: StopReason::NothingDeclared,
        }
    }

    fn record(&mut self, outcome: &PageOutcome) {
        self.pages_fetched += 1;
        self.entries_seen += outcome.entries as u64;
        self.urls_emitted += outcome.emitted as u64;
        self.entries_skipped += outcome.skipped as u64;
    }
}

/// Fetches every file URL of a pool
#[derive(Debug)]
pub struct PoolFetcher {
    endpoint: PoolEndpoint,
    documents: DocumentFetcher,
    pacer: Pacer,
}

impl PoolFetcher {
    /// Create a fetcher from explicit parts
    pub fn new(endpoint: PoolEndpoint, client: HttpClient, pacer: Pacer) -> Self {
        Self {
            endpoint,
            documents: DocumentFetcher::new(client),
            pacer,
        }
    }

    /// Create a fetcher from configuration, pausing [`PAGE_DELAY`] between pages
    pub fn from_config(config: FetcherConfig) -> Result<Self> {
        let endpoint = config.pool_endpoint()?;
        let client = HttpClient::with_config(config.http)?;
        Ok(Self::new(endpoint, client, Pacer::new(PAGE_DELAY)))
    }

    /// Replace the pacer
    #[must_use]
    pub fn with_pacer(mut self, pacer: Pacer) -> Self {
        self.pacer = pacer;
        self
    }

    /// The pool listing endpoint
    pub fn endpoint(&self) -> &PoolEndpoint {
        &self.endpoint
    }

    /// Fetch the declared post count of a pool
    pub async fn fetch_metadata(&self, pool: PoolId) -> Result<PoolMetadata> {
        let url = self.endpoint.page_url(pool, PageNumber::FIRST);
        let document = self.documents.fetch(&url).await?;
        PoolMetadata::from_document(document)
    }

    /// Fetch one page and write its URLs
    pub async fn fetch_page<O: Write, E: Write>(
        &self,
        processor: &PageProcessor,
        pool: PoolId,
        page: PageNumber,
        output: &mut LineOutput<O, E>,
    ) -> Result<PageOutcome> {
        let url = self.endpoint.page_url(pool, page);
        let document = self.documents.fetch(&url).await?;
        processor.process(page, document, output)
    }

    /// Write every valid file URL of `pool` to `output`, in API order.
    ///
    /// Errors while handling a page are wrapped with the page number.
    pub async fn run<O: Write, E: Write>(
        &self,
        pool: PoolId,
        output: &mut LineOutput<O, E>,
    ) -> Result<RunSummary> {
        let metadata = self.fetch_metadata(pool).await?;
        info!(pool = %pool, post_count = metadata.post_count, "Fetched pool metadata");

        let processor = PageProcessor::new(pool);
        let mut state = PaginationState::new(metadata.post_count);
        let mut summary = RunSummary::new(pool, metadata.post_count);

        while !state.is_done() {
            self.pacer.pause().await;

            let page = state.page();
            let outcome = self
                .fetch_page(&processor, pool, page, output)
                .await
                .map_err(|e| e.on_page(page.get()))?;
            summary.record(&outcome);

            let next = state.advance(outcome.entries);
            info!(
                pool = %pool,
                page = %page,
                entries = outcome.entries,
                emitted = outcome.emitted,
                skipped = outcome.skipped,
                remaining = state.remaining(),
                "Processed page"
            );
            if let NextPage::Continue(next_page) = next {
                debug!(pool = %pool, next_page = %next_page, "More posts remain");
            }
        }

        output.flush()?;
        if let Some(reason) = state.stop_reason() {
            summary.stop_reason = reason;
        }
        info!(
            pool = %pool,
            pages = summary.pages_fetched,
            emitted = summary.urls_emitted,
            skipped = summary.entries_skipped,
            stop = ?summary.stop_reason,
            "Pool fetch complete"
        );
        Ok(summary)
    }
}
