//! Response decoder module
//!
//! Fetches JSON documents from the API and decodes them into typed views.
//!
//! # Overview
//!
//! - [`DocumentFetcher`] turns a URL into a parsed `serde_json::Value`
//! - [`PoolMetadata`] reads the declared post count
//! - [`PageDocument`] checks the `posts` array and yields its slots

mod fetcher;
mod types;

pub use fetcher::DocumentFetcher;
pub use types::{EntryProblem, PageDocument, PoolMetadata, PostEntry, PostSlot};
