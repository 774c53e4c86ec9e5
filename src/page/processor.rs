//! Page processor
//!
//! Turns one parsed page document into output lines. Problems with a
//! single post are reported and skipped; problems with the page's shape
//! abort the page.

use crate::decode::{PageDocument, PostSlot};
use crate::endpoint::validate_file_url;
use crate::error::{Error, ErrorKind, Result};
use crate::output::LineOutput;
use crate::types::{PageNumber, PoolId};
use serde_json::Value;
use std::io::Write;
use tracing::{debug, warn};

/// What a processed page contributed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageOutcome {
    /// Slots in the page's `posts` array; zero means the pool is exhausted
    pub entries: usize,
    /// URLs written to the primary channel
    pub emitted: usize,
    /// Entries reported on the error channel and skipped
    pub skipped: usize,
}

impl PageOutcome {
    fn new(entries: usize) -> Self {
        Self {
            entries,
            ..Default::default()
        }
    }

    /// True when the server returned no posts for the page
    pub fn is_exhausted(&self) -> bool {
        self.entries == 0
    }
}

/// Processes pages of a single pool
#[derive(Debug, Clone, Copy)]
pub struct PageProcessor {
    pool: PoolId,
}

impl PageProcessor {
    /// Create a processor for a pool
    pub fn new(pool: PoolId) -> Self {
        Self { pool }
    }

    /// Emit the file URLs of one page in array order.
    ///
    /// Fails with `InvalidSchema` when `posts` is missing or not an array,
    /// or when a slot of the array is `null`. URLs emitted before a `null`
    /// slot stay emitted.
    pub fn process<O: Write, E: Write>(
        &self,
        page: PageNumber,
        document: Value,
        output: &mut LineOutput<O, E>,
    ) -> Result<PageOutcome> {
        let posts = PageDocument::from_document(document)?;
        let mut outcome = PageOutcome::new(posts.len());
        if posts.is_empty() {
            debug!(pool = %self.pool, page = %page, "Page has no posts");
            return Ok(outcome);
        }

        for (index, slot) in posts.into_slots().enumerate() {
            let entry = match slot {
                PostSlot::Present(entry) => entry,
                PostSlot::Absent => {
                    output.diagnose(self.pool, page, index, ErrorKind::InvalidSchema)?;
                    return Err(Error::invalid_schema(format!(
                        "posts entry {} is null",
                        index + 1
                    )));
                }
            };

            let url = match entry.file_url() {
                Ok(url) => url,
                Err(problem) => {
                    warn!(pool = %self.pool, page = %page, entry = index + 1, %problem, "Skipping post");
                    output.diagnose(
                        self.pool,
                        page,
                        index,
                        format_args!("{} ({problem})", ErrorKind::InvalidSchema),
                    )?;
                    outcome.skipped += 1;
                    continue;
                }
            };

            if let Err(err) = validate_file_url(url) {
                warn!(pool = %self.pool, page = %page, entry = index + 1, url, "Skipping malformed file URL");
                output.diagnose(self.pool, page, index, err.kind())?;
                outcome.skipped += 1;
                continue;
            }

            output.emit(url)?;
            outcome.emitted += 1;
        }

        Ok(outcome)
    }
}
