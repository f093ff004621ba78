//! Configuration types
//!
//! Endpoint coordinates, transport settings and feed options. Everything is
//! immutable once built and is passed in at construction time. An `AppConfig`
//! can be loaded from a YAML file; any section left out falls back to its
//! defaults.

use crate::error::{Error, Result};
use crate::transport::{ApiRequest, TransportConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default API host
pub const DEFAULT_HOST: &str = "www.episodate.com";

/// Default "most popular" endpoint path
pub const DEFAULT_ENDPOINT: &str = "/api/most-popular";

// ============================================================================
// Service Config
// ============================================================================

/// Where the paging service sends its requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// URL scheme
    pub scheme: String,
    /// API host, optionally with a port
    pub host: String,
    /// Listing endpoint path
    pub endpoint: String,
    /// Name of the page number query parameter
    pub page_param: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            host: DEFAULT_HOST.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_param: "page".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Create a config pointing at the given host
    pub fn with_host(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }

    /// Set the URL scheme
    #[must_use]
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Set the endpoint path
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Build the request for one page
    pub fn page_request(&self, page: u32) -> ApiRequest {
        ApiRequest::new(&self.scheme, &self.host, &self.endpoint)
            .query(&self.page_param, page.to_string())
    }

    /// Validate the config
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::config("service host must not be empty"));
        }
        if !self.endpoint.starts_with('/') {
            return Err(Error::config(format!(
                "service endpoint '{}' must start with '/'",
                self.endpoint
            )));
        }
        if self.page_param.is_empty() {
            return Err(Error::config("page parameter name must not be empty"));
        }
        Ok(())
    }
}

// ============================================================================
// Feed Config
// ============================================================================

/// Options for the pagination controller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// UI-testing mode; only changes the display title
    pub enable_testing: bool,
}

impl FeedConfig {
    /// Display title for the feed
    pub fn title(&self) -> &'static str {
        if self.enable_testing {
            "Testing"
        } else {
            "Popular"
        }
    }
}

// ============================================================================
// App Config
// ============================================================================

/// Complete configuration, as loaded from YAML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub transport: TransportConfig,
    pub feed: FeedConfig,
}

impl AppConfig {
    /// Parse config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.service.validate()?;
        Ok(config)
    }

    /// Load config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&contents)
    }
}
