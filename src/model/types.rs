//! Show and page envelope types
//!
//! Field names follow Rust conventions; the wire names are mapped statically
//! through serde attributes.

use super::dates;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use url::Url;

// ============================================================================
// Show Status
// ============================================================================

/// Broadcast status of a show
///
/// The API sends a free-form string. Well-known values get their own variant;
/// anything else is kept as-is in `Other` so re-encoding is lossless.
///
/// Equality and hashing go through the wire value, so `Other("Running")` and
/// `Running` are the same status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShowStatus {
    Running,
    Ended,
    NewSeries,
    ToBeDetermined,
    InDevelopment,
    Other(String),
}

impl ShowStatus {
    /// Wire representation of the status
    pub fn as_str(&self) -> &str {
        match self {
            Self::Running => "Running",
            Self::Ended => "Ended",
            Self::NewSeries => "New Series",
            Self::ToBeDetermined => "To Be Determined",
            Self::InDevelopment => "In Development",
            Self::Other(raw) => raw,
        }
    }
}

impl PartialEq for ShowStatus {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ShowStatus {}

impl Hash for ShowStatus {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<String> for ShowStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Running" => Self::Running,
            "Ended" => Self::Ended,
            "New Series" => Self::NewSeries,
            "To Be Determined" => Self::ToBeDetermined,
            "In Development" => Self::InDevelopment,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for ShowStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<ShowStatus> for String {
    fn from(status: ShowStatus) -> Self {
        match status {
            ShowStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ShowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Show
// ============================================================================

/// A single TV show record
///
/// Shows are value objects: the feed never edits one in place, it only
/// appends or removes whole records. `id` is stable across pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Show {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    pub status: ShowStatus,
    #[serde(with = "dates::required")]
    pub start_date: NaiveDate,
    #[serde(
        default,
        with = "dates::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "image_thumbnail_path")]
    pub thumbnail: Url,
}

impl Show {
    /// Create a show with only the required fields set
    pub fn new(
        id: u64,
        name: impl Into<String>,
        status: impl Into<ShowStatus>,
        start_date: NaiveDate,
        thumbnail: Url,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            network: None,
            status: status.into(),
            start_date,
            end_date: None,
            thumbnail,
        }
    }

    /// Set the network label
    #[must_use]
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }

    /// Set the end date
    #[must_use]
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }
}

// ============================================================================
// Page Envelope
// ============================================================================

/// One decoded page of the "most popular" listing
///
/// `total`, `page` and `pages` are advisory. They may be missing and are never
/// used to decide which page to request next.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    /// Shows in server order
    #[serde(rename = "tv_shows")]
    pub shows: Vec<Show>,
}

impl PageEnvelope {
    /// Create an envelope with no counters
    pub fn new(shows: Vec<Show>) -> Self {
        Self {
            shows,
            ..Default::default()
        }
    }

    /// Number of shows on this page
    pub fn len(&self) -> usize {
        self.shows.len()
    }

    /// Whether this page carries no shows
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }
}
