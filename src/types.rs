//! Common types used throughout pool-fetch
//!
//! Identifiers for pools and pages, and the parsing of a pool identifier
//! out of user input.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Pool Identifier
// ============================================================================

/// Identifier of a pool on the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PoolId(u64);

impl PoolId {
    /// Create a pool id from a raw integer
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw integer value
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Extract a pool id from user input.
    ///
    /// Accepts a bare decimal integer or any string ending in a run of
    /// digits, such as a pool page URL (`https://e621.net/pools/456`).
    /// The digits are read from the end of the input backward until the
    /// first `/` or other non-digit character.
    pub fn from_argument(argument: &str) -> Result<Self> {
        if argument.is_empty() {
            return Err(Error::EmptyArgument);
        }

        let head = argument.trim_end_matches(|c: char| c.is_ascii_digit());
        let digits = &argument[head.len()..];
        if digits.is_empty() {
            return Err(Error::bad_argument(argument));
        }

        digits
            .parse()
            .map(Self)
            .map_err(|_| Error::bad_argument(argument))
    }
}

impl FromStr for PoolId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_argument(s)
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Page Number
// ============================================================================

/// One-based page index of a pool listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u64);

impl PageNumber {
    /// The first page of every pool
    pub const FIRST: Self = Self(1);

    /// Create a page number from a raw integer
    pub const fn new(page: u64) -> Self {
        Self(page)
    }

    /// Raw integer value
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The page after this one
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
