//! Transport module
//!
//! The capability boundary for a single network exchange. The paging service
//! only ever sees the `Transport` trait, so the concrete network stack can be
//! swapped for a deterministic stand-in.
//!
//! # Implementations
//!
//! - **HttpTransport**: reqwest-backed HTTPS client, one attempt per call
//! - **StubTransport**: replays a fixed outcome, records every request
//! - **CallbackTransport**: adapts a completion-handler API into an awaitable call

mod callback;
mod client;
mod rate_limit;
mod stub;
mod types;

pub use callback::{CallbackTransport, Completion};
pub use client::{HttpTransport, TransportConfig, TransportConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use stub::StubTransport;
pub use types::{ApiRequest, Exchange, ResponseMeta, Transport};
