//! Pagination types
//!
//! Tracks the page to request next and how many declared posts are still
//! unaccounted for.

use crate::types::PageNumber;

/// Why pagination finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The pool declared no posts, so no page was requested
    NothingDeclared,
    /// Pages covered the declared post count
    CountReached,
    /// A page came back with no posts
    EmptyPage,
}

/// Result of recording a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// Request this page next
    Continue(PageNumber),
    /// No more pages
    Done(StopReason),
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }
}

/// Pagination state owned by the fetch loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    page: PageNumber,
    remaining: u64,
    stop: Option<StopReason>,
}

impl PaginationState {
    /// Start at page one with the declared post count as remainder
    pub fn new(post_count: u64) -> Self {
        Self {
            page: PageNumber::FIRST,
            remaining: post_count,
            stop: (post_count == 0).then_some(StopReason::NothingDeclared),
        }
    }

    /// The page to request next
    pub fn page(&self) -> PageNumber {
        self.page
    }

    /// Declared posts not yet seen on a page
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Is pagination complete?
    pub fn is_done(&self) -> bool {
        self.stop.is_some()
    }

    /// Why pagination stopped, once it has
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop
    }

    /// Record a fetched page holding `entries` slots.
    ///
    /// The page number always moves forward by one. The remainder shrinks
    /// by `entries` and never drops below zero. An empty page ends
    /// pagination even while posts remain.
    pub fn advance(&mut self, entries: usize) -> NextPage {
        if let Some(reason) = self.stop {
            return NextPage::Done(reason);
        }

        self.page = self.page.next();
        self.remaining = self.remaining.saturating_sub(entries as u64);

        if entries == 0 {
            self.stop = Some(StopReason::EmptyPage);
        } else if self.remaining == 0 {
            self.stop = Some(StopReason::CountReached);
        }

        match self.stop {
            Some(reason) => NextPage::Done(reason),
            None => NextPage::Continue(self.page),
        }
    }
}
