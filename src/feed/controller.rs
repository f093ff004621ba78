//! Show feed controller
//!
//! All state lives in a `watch` channel. Every mutation goes through the
//! channel's sender, so updates are serialized and each one is published to
//! subscribers.

use super::types::FeedState;
use crate::config::FeedConfig;
use crate::error::Error;
use crate::model::Show;
use crate::service::ShowServicing;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Infinite-scroll controller over a page source
///
/// At most one fetch is in flight per feed. A fetch always runs to completion
/// and applies its result, even if the feed handle or the shows that triggered
/// it are gone by then.
pub struct ShowFeed {
    service: Arc<dyn ShowServicing>,
    state: Arc<watch::Sender<FeedState>>,
    title: &'static str,
}

impl ShowFeed {
    /// Create an empty feed
    pub fn new(service: Arc<dyn ShowServicing>) -> Self {
        Self::with_config(service, &FeedConfig::default())
    }

    /// Create an empty feed with options
    pub fn with_config(service: Arc<dyn ShowServicing>, config: &FeedConfig) -> Self {
        let (state, _) = watch::channel(FeedState::new());
        Self {
            service,
            state: Arc::new(state),
            title: config.title(),
        }
    }

    /// Display title
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Snapshot of the full state
    pub fn snapshot(&self) -> FeedState {
        self.state.borrow().clone()
    }

    /// Shows loaded so far, in arrival order
    pub fn shows(&self) -> Vec<Show> {
        self.state.borrow().shows.clone()
    }

    /// Number of shows loaded so far
    pub fn len(&self) -> usize {
        self.state.borrow().shows.len()
    }

    /// Whether no shows are loaded
    pub fn is_empty(&self) -> bool {
        self.state.borrow().shows.is_empty()
    }

    /// Next page that `load` will request
    pub fn page(&self) -> u32 {
        self.state.borrow().page
    }

    /// Whether a fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Error of the last failed fetch
    pub fn error(&self) -> Option<Arc<Error>> {
        self.state.borrow().error.clone()
    }

    /// Watch every state change
    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state.subscribe()
    }

    /// Fetch the page under the cursor
    ///
    /// No-op returning `None` while a fetch is in flight. Otherwise the fetch
    /// runs on a spawned task; the returned handle may be awaited or dropped.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn load(&self) -> Option<JoinHandle<()>> {
        let mut page = 0;
        let started = self.state.send_if_modified(|state| {
            if state.loading {
                return false;
            }
            state.loading = true;
            page = state.page;
            true
        });

        if !started {
            debug!("Fetch already in flight, ignoring load");
            return None;
        }

        let service = Arc::clone(&self.service);
        let guard = LoadingGuard::new(Arc::clone(&self.state));

        Some(tokio::spawn(async move {
            let result = service.popular(page).await;
            guard.finish(|state| match result {
                Ok(shows) => {
                    debug!("Page {} loaded: {} shows", page, shows.len());
                    state.shows.extend(shows);
                    state.page += 1;
                    state.error = None;
                }
                Err(e) => {
                    warn!("Page {} failed: {}", page, e);
                    state.error = Some(Arc::new(e));
                }
            });
        }))
    }

    /// Load the next page when `show` is the second-to-last item
    ///
    /// Fires one item before the true end so the next page is already on its
    /// way when the last row comes into view. Shows not in the list, and every
    /// other position, are ignored.
    pub fn trigger_if_near_end(&self, show: &Show) -> Option<JoinHandle<()>> {
        let near_end = {
            let state = self.state.borrow();
            state
                .shows
                .iter()
                .position(|s| s == show)
                .is_some_and(|index| Some(index) == state.near_end_index())
        };

        if near_end {
            self.load()
        } else {
            None
        }
    }

    /// Remove the shows at the given positions
    ///
    /// Survivors keep their relative order. Out-of-range positions are
    /// ignored. The cursor is left alone and nothing is reloaded.
    pub fn remove(&self, positions: impl IntoIterator<Item = usize>) {
        let positions: BTreeSet<usize> = positions.into_iter().collect();
        if positions.is_empty() {
            return;
        }

        self.state.send_if_modified(|state| {
            let before = state.shows.len();
            let mut index = 0;
            state.shows.retain(|_| {
                let keep = !positions.contains(&index);
                index += 1;
                keep
            });
            debug!("Removed {} shows", before - state.shows.len());
            before != state.shows.len()
        });
    }
}

impl std::fmt::Debug for ShowFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ShowFeed")
            .field("title", &self.title)
            .field("shows", &state.shows.len())
            .field("page", &state.page)
            .field("loading", &state.loading)
            .finish_non_exhaustive()
    }
}

/// Clears the loading flag when a fetch ends, however it ends
struct LoadingGuard {
    state: Arc<watch::Sender<FeedState>>,
    armed: bool,
}

impl LoadingGuard {
    fn new(state: Arc<watch::Sender<FeedState>>) -> Self {
        Self { state, armed: true }
    }

    /// Apply the fetch outcome and clear the flag in one update
    fn finish(mut self, apply: impl FnOnce(&mut FeedState)) {
        self.state.send_modify(|state| {
            apply(state);
            state.loading = false;
        });
        self.armed = false;
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if self.armed {
            warn!("Fetch ended without a result, clearing loading flag");
            self.state.send_modify(|state| state.loading = false);
        }
    }
}
