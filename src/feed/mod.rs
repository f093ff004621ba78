//! Pagination controller module
//!
//! Owns the cumulative, infinite-scroll backed list of shows that a
//! presentation layer renders.
//!
//! # Overview
//!
//! The feed module provides:
//! - `ShowFeed` - the controller: `load`, `trigger_if_near_end`, `remove`
//! - `FeedState` - cumulative list, page cursor, loading flag, last error
//! - `FeedPhase` - `Idle`, `Loading` or `IdleWithError`, derived from the state

mod controller;
mod types;

pub use controller::ShowFeed;
pub use types::{FeedPhase, FeedState};
