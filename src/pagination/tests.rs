//! Tests for pagination module

use super::*;
use crate::endpoint::PoolEndpoint;
use crate::error::ErrorKind;
use crate::http::{HttpClient, HttpClientConfig};
use crate::output::LineOutput;
use crate::types::{PageNumber, PoolId};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// PaginationState Tests
// ============================================================================

#[test]
fn test_pagination_state_new() {
    let state = PaginationState::new(250);
    assert_eq!(state.page(), PageNumber::FIRST);
    assert_eq!(state.remaining(), 250);
    assert!(!state.is_done());
    assert_eq!(state.stop_reason(), None);
}

#[test]
fn test_pagination_state_nothing_declared() {
    let mut state = PaginationState::new(0);
    assert!(state.is_done());
    assert_eq!(state.stop_reason(), Some(StopReason::NothingDeclared));
    assert_eq!(
        state.advance(5),
        NextPage::Done(StopReason::NothingDeclared)
    );
    assert_eq!(state.page(), PageNumber::FIRST);
}

#[test]
fn test_pagination_state_counts_down() {
    let mut state = PaginationState::new(250);

    let next = state.advance(100);
    assert!(next.is_continue());
    assert_eq!(next, NextPage::Continue(PageNumber::new(2)));
    assert_eq!(state.remaining(), 150);

    assert_eq!(state.advance(100), NextPage::Continue(PageNumber::new(3)));
    assert_eq!(state.remaining(), 50);

    let next = state.advance(50);
    assert!(next.is_done());
    assert_eq!(next, NextPage::Done(StopReason::CountReached));
    assert_eq!(state.remaining(), 0);
    assert_eq!(state.page(), PageNumber::new(4));
}

#[test]
fn test_pagination_state_remainder_clamped() {
    let mut state = PaginationState::new(10);
    assert_eq!(state.advance(75), NextPage::Done(StopReason::CountReached));
    assert_eq!(state.remaining(), 0);
}

#[test]
fn test_pagination_state_empty_page_stops_early() {
    let mut state = PaginationState::new(250);
    state.advance(100);
    state.advance(100);

    assert_eq!(state.advance(0), NextPage::Done(StopReason::EmptyPage));
    assert_eq!(state.remaining(), 50);
    assert!(state.is_done());
}

// ============================================================================
// Pacing Tests
// ============================================================================

/// Returns after at most `slice`, as if the sleep were interrupted
struct InterruptedNapper {
    slice: Duration,
    naps: AtomicU32,
}

impl InterruptedNapper {
    fn new(slice: Duration) -> Self {
        Self {
            slice,
            naps: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl Napper for InterruptedNapper {
    async fn nap(&self, duration: Duration) {
        self.naps.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(duration.min(self.slice)).await;
    }
}

/// Wakes up immediately a few times before sleeping properly
struct SpuriousNapper {
    spurious: u32,
    naps: AtomicU32,
}

#[async_trait]
impl Napper for SpuriousNapper {
    async fn nap(&self, duration: Duration) {
        let nap = self.naps.fetch_add(1, Ordering::SeqCst);
        if nap >= self.spurious {
            tokio::time::sleep(duration).await;
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_sleep_at_least_plain() {
    let start = Instant::now();
    sleep_at_least(Duration::from_secs(1), &TokioNapper).await;
    assert!(start.elapsed() >= Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn test_sleep_at_least_resumes_remaining_after_interruption() {
    let napper = InterruptedNapper::new(Duration::from_millis(300));

    let start = Instant::now();
    sleep_at_least(Duration::from_secs(1), &napper).await;
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_secs(1));
    // Restarting the full second after each interruption would take far longer
    assert!(elapsed < Duration::from_millis(1300));
    assert_eq!(napper.naps.load(Ordering::SeqCst), 4);
}

#[tokio::test(start_paused = true)]
async fn test_sleep_at_least_survives_spurious_wakeups() {
    let napper = SpuriousNapper {
        spurious: 3,
        naps: AtomicU32::new(0),
    };

    let start = Instant::now();
    sleep_at_least(Duration::from_secs(1), &napper).await;

    assert!(start.elapsed() >= Duration::from_secs(1));
    assert_eq!(napper.naps.load(Ordering::SeqCst), 4);
}

#[tokio::test(start_paused = true)]
async fn test_pacer_pause() {
    let napper = Arc::new(InterruptedNapper::new(Duration::from_millis(250)));
    let pacer = Pacer::with_napper(Duration::from_secs(1), napper.clone());
    assert_eq!(pacer.delay(), Duration::from_secs(1));

    let start = Instant::now();
    pacer.pause().await;
    pacer.pause().await;

    assert!(start.elapsed() >= Duration::from_secs(2));
    assert_eq!(napper.naps.load(Ordering::SeqCst), 8);
}

#[tokio::test(start_paused = true)]
async fn test_zero_delay_does_not_nap() {
    let napper = Arc::new(InterruptedNapper::new(Duration::from_millis(10)));
    let pacer = Pacer::with_napper(Duration::ZERO, napper.clone());

    pacer.pause().await;
    assert_eq!(napper.naps.load(Ordering::SeqCst), 0);
}

// ============================================================================
// PoolFetcher Tests
// ============================================================================

fn posts(urls: &[&str]) -> serde_json::Value {
    let posts: Vec<_> = urls.iter().map(|u| json!({ "file_url": u })).collect();
    json!(posts)
}

fn fetcher_for(server: &MockServer) -> PoolFetcher {
    let endpoint = PoolEndpoint::new(&format!("{}/pool/show.json", server.uri())).unwrap();
    let client =
        HttpClient::with_config(HttpClientConfig::builder().no_rate_limit().build()).unwrap();
    PoolFetcher::new(endpoint, client, Pacer::new(Duration::ZERO))
}

async fn mount_page(server: &MockServer, page: u64, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/pool/show.json"))
        .and(query_param("id", "42"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn run_pool(fetcher: &PoolFetcher) -> (crate::Result<RunSummary>, String, String) {
    let mut output = LineOutput::new(Vec::new(), Vec::new());
    let result = fetcher.run(PoolId::new(42), &mut output).await;
    let (out, err) = output.into_inner();
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[tokio::test]
async fn test_fetch_metadata() {
    let server = MockServer::start().await;
    mount_page(&server, 1, json!({"post_count": 3, "posts": []})).await;

    let metadata = fetcher_for(&server)
        .fetch_metadata(PoolId::new(42))
        .await
        .unwrap();
    assert_eq!(metadata.post_count, 3);
}

#[tokio::test]
async fn test_run_stops_when_count_reached() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        json!({"post_count": 3, "posts": posts(&["https://e621.net/1.png", "https://e621.net/2.png"])}),
    )
    .await;
    mount_page(
        &server,
        2,
        json!({"post_count": 3, "posts": posts(&["https://e621.net/3.png"])}),
    )
    .await;

    let (result, out, err) = run_pool(&fetcher_for(&server)).await;
    let summary = result.unwrap();

    assert_eq!(
        out,
        "https://e621.net/1.png\nhttps://e621.net/2.png\nhttps://e621.net/3.png\n"
    );
    assert_eq!(err, "");
    assert_eq!(summary.pages_fetched, 2);
    assert_eq!(summary.urls_emitted, 3);
    assert_eq!(summary.stop_reason, StopReason::CountReached);

    // Metadata plus two pages
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_run_stops_on_empty_page_despite_remainder() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        json!({"post_count": 250, "posts": posts(&["https://e621.net/1.png"])}),
    )
    .await;
    mount_page(
        &server,
        2,
        json!({"post_count": 250, "posts": posts(&["https://e621.net/2.png"])}),
    )
    .await;
    mount_page(&server, 3, json!({"post_count": 250, "posts": []})).await;

    let (result, out, _) = run_pool(&fetcher_for(&server)).await;
    let summary = result.unwrap();

    assert_eq!(out, "https://e621.net/1.png\nhttps://e621.net/2.png\n");
    assert_eq!(summary.pages_fetched, 3);
    assert_eq!(summary.stop_reason, StopReason::EmptyPage);
}

#[tokio::test]
async fn test_run_with_zero_posts_fetches_no_pages() {
    let server = MockServer::start().await;
    mount_page(&server, 1, json!({"post_count": 0, "posts": []})).await;

    let (result, out, _) = run_pool(&fetcher_for(&server)).await;
    let summary = result.unwrap();

    assert_eq!(out, "");
    assert_eq!(summary.pages_fetched, 0);
    assert_eq!(summary.stop_reason, StopReason::NothingDeclared);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_run_metadata_without_post_count_fails() {
    let server = MockServer::start().await;
    mount_page(&server, 1, json!({"posts": []})).await;

    let (result, out, _) = run_pool(&fetcher_for(&server)).await;
    let err = result.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidSchema);
    assert_eq!(err.page(), None);
    assert_eq!(out, "");
}

#[tokio::test]
async fn test_run_page_failure_names_page() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        json!({"post_count": 5, "posts": posts(&["https://e621.net/1.png"])}),
    )
    .await;
    Mock::given(method("GET"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let (result, out, _) = run_pool(&fetcher_for(&server)).await;
    let err = result.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ParseError);
    assert_eq!(err.page(), Some(2));
    assert!(err.to_string().starts_with("critical error on page 2: "));
    assert_eq!(out, "https://e621.net/1.png\n");
}
