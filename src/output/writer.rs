//! Line writer for the two output channels
//!
//! Valid file URLs go to the primary channel, one per line. Per-entry
//! problems go to the error channel as one-line diagnostics naming the
//! pool, the page and the 1-based entry index.

use crate::error::Result;
use crate::types::{PageNumber, PoolId};
use std::fmt::Display;
use std::io::Write;

/// Primary and error output channels
#[derive(Debug)]
pub struct LineOutput<O, E> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> LineOutput<O, E> {
    /// Wrap a primary and an error sink
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Write one URL line to the primary channel
    pub fn emit(&mut self, url: &str) -> Result<()> {
        writeln!(self.out, "{url}")?;
        Ok(())
    }

    /// Write one diagnostic line to the error channel.
    ///
    /// `index` is zero-based; it is printed one-based.
    pub fn diagnose(
        &mut self,
        pool: PoolId,
        page: PageNumber,
        index: usize,
        reason: impl Display,
    ) -> Result<()> {
        writeln!(
            self.err,
            "error in pool {pool} page {page} entry {}: {reason}",
            index + 1
        )?;
        Ok(())
    }

    /// Flush both channels
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }

    /// Recover the underlying sinks
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}
