//! # pool-fetch
//!
//! Fetches the ordered list of file URLs belonging to an e621 pool.
//!
//! ## Features
//!
//! - **Paginated Fetch**: Reads the declared post count, then walks pages until
//!   the count is covered or the server returns an empty page
//! - **Untrusted Input**: Every file URL must be a well-formed `https://` URL
//! - **Graceful Degradation**: Broken entries are reported and skipped, broken
//!   pages end the run
//! - **Polite Pacing**: At least one second between page requests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pool_fetch::{FetcherConfig, LineOutput, PoolFetcher, PoolId, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let fetcher = PoolFetcher::from_config(FetcherConfig::default())?;
//!     let mut output = LineOutput::new(std::io::stdout(), std::io::stderr());
//!     let summary = fetcher.run(PoolId::from_argument("12345")?, &mut output).await?;
//!     eprintln!("{} urls", summary.urls_emitted);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 PoolFetcher (pagination)                 │
//! │   metadata → pause → page 1 → pause → page 2 → … → done  │
//! └──────────────────────────────────────────────────────────┘
//!        │               │                 │
//! ┌──────┴─────┐ ┌───────┴────────┐ ┌──────┴──────────────┐
//! │  endpoint  │ │     decode     │ │        page         │
//! │ URL build  │ │ DocumentFetcher│ │ validate + emit     │
//! │ URL check  │ │  ← http client │ │  → output (2 sinks) │
//! └────────────┘ └────────────────┘ └─────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Pool and page identifiers
pub mod types;

/// Fetcher configuration
pub mod config;

/// Endpoint URL building and file URL validation
pub mod endpoint;

/// HTTP transport with rate limiting
pub mod http;

/// JSON document fetching and decoding
pub mod decode;

/// Output channels
pub mod output;

/// Page processing
pub mod page;

/// Pagination loop and pacing
pub mod pagination;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::FetcherConfig;
pub use error::{Error, ErrorKind, Result};
pub use output::LineOutput;
pub use pagination::{PoolFetcher, RunSummary};
pub use types::{PageNumber, PoolId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
