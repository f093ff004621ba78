//! Domain model
//!
//! Typed, immutable value objects decoded from the Episodate API:
//! - `Show` - a single TV show record
//! - `ShowStatus` - broadcast status, preserving unknown values verbatim
//! - `PageEnvelope` - one page of shows plus advisory pagination counters

pub mod dates;
mod types;

pub use dates::DATE_FORMAT;
pub use types::{PageEnvelope, Show, ShowStatus};
