//! Growable response body buffer
//!
//! The transport writes each received chunk into a [`ResponseBuffer`].
//! Capacity grows by at least doubling, and every reservation is fallible
//! so that running out of memory surfaces as [`Error::OutOfMemory`]
//! instead of aborting the process.

use crate::error::{Error, Result};
use bytes::Bytes;

/// Owned byte sink for a streamed response body
#[derive(Debug, Default)]
pub struct ResponseBuffer {
    data: Vec<u8>,
}

impl ResponseBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer pre-sized for an expected body length
    pub fn with_capacity_hint(hint: Option<u64>) -> Result<Self> {
        let mut buffer = Self::new();
        if let Some(hint) = hint {
            buffer.reserve(usize::try_from(hint).unwrap_or(usize::MAX))?;
        }
        Ok(buffer)
    }

    /// Append a chunk
    pub fn write(&mut self, chunk: &[u8]) -> Result<()> {
        self.reserve(chunk.len())?;
        self.data.extend_from_slice(chunk);
        Ok(())
    }

    /// Number of bytes written so far
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when nothing has been written
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current capacity
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Hand out the accumulated body
    pub fn freeze(self) -> Bytes {
        Bytes::from(self.data)
    }

    // Vec grows amortized, at least doubling its capacity on reallocation.
    fn reserve(&mut self, additional: usize) -> Result<()> {
        self.data
            .try_reserve(additional)
            .map_err(|_| Error::OutOfMemory {
                requested: additional,
            })
    }
}
