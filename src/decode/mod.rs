//! Response decoder module
//!
//! Turns raw response payloads into typed page envelopes.
//!
//! # Overview
//!
//! Decoding is synchronous and stateless. Wire names are mapped statically by
//! the model's serde attributes, dates follow the fixed `yyyy-MM-dd` policy, and
//! a single bad field rejects the whole envelope.

mod decoders;

pub use decoders::{stringify, EnvelopeDecoder};
