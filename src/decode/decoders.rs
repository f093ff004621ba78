//! Envelope decoder implementation

use crate::error::DecodeError;
use crate::model::PageEnvelope;

/// JSON decoder for "most popular" page envelopes
///
/// Never yields a partially populated envelope: either every show decodes or
/// the call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeDecoder;

impl EnvelopeDecoder {
    /// Create a new envelope decoder
    pub fn new() -> Self {
        Self
    }

    /// Decode a raw payload
    pub fn decode(&self, body: &[u8]) -> Result<PageEnvelope, DecodeError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Encode an envelope back into the wire shape
    pub fn encode(&self, envelope: &PageEnvelope) -> Result<Vec<u8>, DecodeError> {
        Ok(serde_json::to_vec(envelope)?)
    }
}

/// Pretty-print a raw JSON payload for logging
pub fn stringify(body: &[u8]) -> Result<String, DecodeError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
