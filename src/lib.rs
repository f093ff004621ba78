//! # tvtime-core
//!
//! Async paging client and infinite-scroll feed for the Episodate
//! "most popular" TV show listing.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tvtime_core::{ServiceConfig, ShowFeed, ShowService, TransportConfig};
//!
//! #[tokio::main]
//! async fn main() -> tvtime_core::Result<()> {
//!     let service = ShowService::http(ServiceConfig::default(), TransportConfig::default())?;
//!     let feed = ShowFeed::new(Arc::new(service));
//!
//!     if let Some(handle) = feed.load() {
//!         handle.await.ok();
//!     }
//!     for show in feed.shows() {
//!         println!("{} ({})", show.name, show.status);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  ShowFeed: load() · trigger_if_near_end() · remove()     │
//! │  shows / page / loading / error  ──watch──▶ presentation │
//! └────────────────────────────┬─────────────────────────────┘
//!                              │ popular(page)
//! ┌────────────────────────────┴─────────────────────────────┐
//! │  ShowService: ApiRequest ─▶ Transport ─▶ EnvelopeDecoder │
//! └────────────────────────────┬─────────────────────────────┘
//!                              │
//! ┌────────────────┬───────────┴───────────┬─────────────────┐
//! │ HttpTransport  │ StubTransport         │ CallbackTransport│
//! │ reqwest, rate  │ fixed outcome, request│ completion       │
//! │ limit, 1 shot  │ log                   │ handler bridge   │
//! └────────────────┴───────────────────────┴─────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Endpoint, transport and feed configuration
pub mod config;

/// Show and page envelope types
pub mod model;

/// Network exchange abstraction and implementations
pub mod transport;

/// Payload decoding
pub mod decode;

/// Paging service
pub mod service;

/// Pagination controller
pub mod feed;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{AppConfig, FeedConfig, ServiceConfig};
pub use error::{DecodeError, Error, Result, TransportError};
pub use feed::{FeedPhase, FeedState, ShowFeed};
pub use model::{PageEnvelope, Show, ShowStatus};
pub use service::{ShowService, ShowServicing};
pub use transport::{ApiRequest, HttpTransport, StubTransport, Transport, TransportConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
