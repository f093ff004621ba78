//! Show service implementation

use crate::config::ServiceConfig;
use crate::decode::{stringify, EnvelopeDecoder};
use crate::error::Result;
use crate::model::{PageEnvelope, Show};
use crate::transport::{HttpTransport, Transport, TransportConfig};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, enabled, trace, Level};

/// Source of pages of shows
///
/// The pagination controller depends on this trait rather than on
/// `ShowService`, so it can be driven by any page source.
#[async_trait]
pub trait ShowServicing: Send + Sync {
    /// Fetch the shows on the given page (1-based)
    async fn popular(&self, page: u32) -> Result<Vec<Show>>;
}

/// Paging service over a `Transport`
#[derive(Clone)]
pub struct ShowService {
    transport: Arc<dyn Transport>,
    config: ServiceConfig,
    decoder: EnvelopeDecoder,
}

impl ShowService {
    /// Create a service with the given transport and endpoint config
    pub fn new(transport: Arc<dyn Transport>, config: ServiceConfig) -> Self {
        Self {
            transport,
            config,
            decoder: EnvelopeDecoder::new(),
        }
    }

    /// Create a service over HTTPS with the given configs
    pub fn http(config: ServiceConfig, transport: TransportConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::with_config(transport)?;
        Ok(Self::new(Arc::new(transport), config))
    }

    /// Get the endpoint config
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Fetch one page and keep the advisory counters
    pub async fn popular_envelope(&self, page: u32) -> Result<PageEnvelope> {
        let request = self.config.page_request(page);
        debug!("Fetching page {} from {}", page, self.config.host);

        let (body, meta) = self.transport.execute(&request).await?;
        if enabled!(Level::TRACE) {
            match stringify(&body) {
                Ok(pretty) => trace!("Page {} payload (HTTP {}):\n{}", page, meta.status, pretty),
                Err(_) => trace!("Page {} payload is not JSON ({} bytes)", page, body.len()),
            }
        }

        let envelope = self.decoder.decode(&body)?;
        debug!(
            "Decoded page {}: {} shows (page {:?} of {:?})",
            page,
            envelope.len(),
            envelope.page,
            envelope.pages
        );
        Ok(envelope)
    }
}

#[async_trait]
impl ShowServicing for ShowService {
    async fn popular(&self, page: u32) -> Result<Vec<Show>> {
        Ok(self.popular_envelope(page).await?.shows)
    }
}

impl std::fmt::Debug for ShowService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShowService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
