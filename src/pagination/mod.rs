//! Pagination module
//!
//! Drives the fetch of a whole pool.
//!
//! # Overview
//!
//! The loop moves through three states: fetching the pool metadata,
//! looping over pages, and done. A pause of at least one second precedes
//! every page request. The loop ends when the pages seen cover the
//! declared post count, or as soon as a page returns no posts.

mod controller;
mod pacing;
mod types;

pub use controller::{PoolFetcher, RunSummary};
pub use pacing::{sleep_at_least, Napper, Pacer, TokioNapper};
pub use types::{NextPage, PaginationState, StopReason};

#[cfg(test)]
mod tests;
