//! Transport types and traits
//!
//! Defines the request descriptor, response metadata and the `Transport`
//! capability itself.

use crate::error::TransportError;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use url::Url;

/// Raw payload plus response metadata of one successful exchange
pub type Exchange = (Bytes, ResponseMeta);

/// Fully specified description of one GET exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// URL scheme (e.g. "https")
    pub scheme: String,
    /// Host, optionally with a port
    pub host: String,
    /// Absolute path
    pub path: String,
    /// Query parameters in order
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    /// Create a request with no query parameters
    pub fn new(
        scheme: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Look up the first value of a query parameter
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Build the target URL
    pub fn url(&self) -> Result<Url, TransportError> {
        let mut url = Url::parse(&format!("{}://{}", self.scheme, self.host))?;
        url.set_path(&self.path);
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}

/// Metadata describing a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    /// HTTP status code
    pub status: u16,
    /// Final URL after redirects, when known
    pub url: Option<Url>,
    /// Content-Type header, when present
    pub content_type: Option<String>,
}

impl ResponseMeta {
    /// Metadata for a plain 200 response
    pub fn ok(url: Option<Url>) -> Self {
        Self {
            status: 200,
            url,
            content_type: None,
        }
    }
}

/// Performs one network exchange
///
/// Implementations must not retry or cache. A non-success status is a
/// failure; interpreting the payload is left to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request and return the raw payload
    async fn execute(&self, request: &ApiRequest) -> Result<Exchange, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: &ApiRequest) -> Result<Exchange, TransportError> {
        (**self).execute(request).await
    }
}
