//! Feed state types

use crate::error::Error;
use crate::model::Show;
use std::sync::Arc;

/// Phase of the pagination state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    /// No fetch in flight, last fetch (if any) succeeded
    Idle,
    /// A fetch is in flight
    Loading,
    /// No fetch in flight, last fetch failed; the next load retries the same page
    IdleWithError,
}

/// Everything the presentation layer can observe about a feed
#[derive(Debug, Clone)]
pub struct FeedState {
    /// Shows in arrival order
    pub shows: Vec<Show>,
    /// Next page to request, starting at 1
    pub page: u32,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Error of the last failed fetch, cleared by the next success
    pub error: Option<Arc<Error>>,
}

impl FeedState {
    /// Create an empty state positioned at page 1
    pub fn new() -> Self {
        Self {
            shows: Vec::new(),
            page: 1,
            loading: false,
            error: None,
        }
    }

    /// Current phase of the state machine
    pub fn phase(&self) -> FeedPhase {
        if self.loading {
            FeedPhase::Loading
        } else if self.error.is_some() {
            FeedPhase::IdleWithError
        } else {
            FeedPhase::Idle
        }
    }

    /// Position of the second-to-last show, if the list has at least two
    pub fn near_end_index(&self) -> Option<usize> {
        self.shows.len().checked_sub(2)
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}
