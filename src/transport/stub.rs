//! Deterministic transport stand-in
//!
//! Replays one pre-set outcome on every call, whatever the request, and keeps
//! a log of the requests it saw.

use super::types::{ApiRequest, Exchange, ResponseMeta, Transport};
use crate::error::TransportError;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::{Mutex, PoisonError};

/// Transport that answers every request with the same outcome
#[derive(Debug)]
pub struct StubTransport {
    outcome: Result<Bytes, TransportError>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl StubTransport {
    /// Create a stub with the given outcome
    pub fn new(outcome: Result<Bytes, TransportError>) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a stub that always returns this payload
    pub fn success(body: impl Into<Bytes>) -> Self {
        Self::new(Ok(body.into()))
    }

    /// Create a stub that always returns this JSON document
    pub fn json(value: &serde_json::Value) -> Self {
        Self::success(value.to_string())
    }

    /// Create a stub that always fails with this error
    pub fn failure(error: TransportError) -> Self {
        Self::new(Err(error))
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of exchanges performed so far
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<Exchange, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        let body = self.outcome.clone()?;
        Ok((body, ResponseMeta::ok(request.url().ok())))
    }
}
