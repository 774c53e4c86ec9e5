//! Page processing module
//!
//! Validates the entries of one page and writes their file URLs.

mod processor;

pub use processor::{PageOutcome, PageProcessor};
