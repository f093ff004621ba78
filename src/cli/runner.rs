//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::AppConfig;
use crate::error::{Error, Result, ResultExt};
use crate::feed::ShowFeed;
use crate::model::{PageEnvelope, Show};
use crate::service::ShowService;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        match &self.cli.command {
            Commands::Popular { pages } => self.popular(&config, *pages).await,
            Commands::Page { number } => self.page(&config, *number).await,
        }
    }

    /// Build the effective config: file values, then command-line overrides
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.cli.config {
            Some(path) => AppConfig::from_file(path)
                .with_context(|| format!("Failed to load config '{}'", path.display()))?,
            None => AppConfig::default(),
        };

        if let Some(host) = &self.cli.host {
            config.service.host.clone_from(host);
        }
        if self.cli.enable_testing {
            config.feed.enable_testing = true;
        }

        config.service.validate()?;
        Ok(config)
    }

    /// Scroll through `pages` pages and print the cumulative list
    async fn popular(&self, config: &AppConfig, pages: u32) -> Result<()> {
        let service = ShowService::http(config.service.clone(), config.transport.clone())?;
        let feed = ShowFeed::with_config(Arc::new(service), &config.feed);

        scroll(&feed, pages).await?;

        let shows = feed.shows();
        match self.cli.format {
            OutputFormat::Json => println!("{}", to_json(&shows)?),
            OutputFormat::Pretty => {
                println!("{} ({} shows)", feed.title(), shows.len());
                for show in &shows {
                    println!("{}", show_line(show));
                }
            }
        }
        Ok(())
    }

    /// Fetch and print a single page
    async fn page(&self, config: &AppConfig, number: u32) -> Result<()> {
        let service = ShowService::http(config.service.clone(), config.transport.clone())?;
        let envelope = service.popular_envelope(number).await?;

        match self.cli.format {
            OutputFormat::Json => println!("{}", to_json(&envelope)?),
            OutputFormat::Pretty => {
                println!("{}", envelope_header(number, &envelope));
                for show in &envelope.shows {
                    println!("{}", show_line(show));
                }
            }
        }
        Ok(())
    }
}

/// Drive the feed the way a scrolling list would
///
/// Each loaded row is "shown" in turn; the near-end trigger decides when the
/// next page is requested. Stops after `pages` successful pages, on an empty
/// page, or on the first error. If the listing repeats a show the trigger
/// can't fire, so it also stops early (with a warning) in that case.
pub async fn scroll(feed: &ShowFeed, pages: u32) -> Result<()> {
    if pages == 0 {
        return Ok(());
    }

    if let Some(handle) = feed.load() {
        handle
            .await
            .map_err(|e| Error::Other(format!("Feed task failed: {e}")))?;
    }

    while feed.page() <= pages {
        if let Some(err) = feed.error() {
            return Err(Error::Other(format!(
                "Failed to load page {}: {err}",
                feed.page()
            )));
        }

        let before = feed.len();
        let mut pending = None;
        for show in feed.shows() {
            if let Some(handle) = feed.trigger_if_near_end(&show) {
                pending = Some(handle);
            }
        }

        let Some(handle) = pending else {
            warn!(
                loaded = feed.page() - 1,
                requested = pages,
                "Near-end trigger did not fire, stopping early"
            );
            break;
        };
        handle
            .await
            .map_err(|e| Error::Other(format!("Feed task failed: {e}")))?;

        if feed.error().is_none() && feed.len() == before {
            info!("Page {} was empty, end of listing", feed.page() - 1);
            break;
        }
    }

    match feed.error() {
        Some(err) => Err(Error::Other(format!(
            "Failed to load page {}: {err}",
            feed.page()
        ))),
        None => Ok(()),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::Other(format!("Failed to render JSON: {e}")))
}

fn envelope_header(number: u32, envelope: &PageEnvelope) -> String {
    let pages = envelope
        .pages
        .map_or_else(|| "?".to_string(), |p| p.to_string());
    let total = envelope.total.as_deref().unwrap_or("?");
    format!(
        "Page {} of {} ({} shows total, {} on this page)",
        envelope.page.unwrap_or(number),
        pages,
        total,
        envelope.len()
    )
}

fn show_line(show: &Show) -> String {
    let ended = show
        .end_date
        .map_or_else(String::new, |d| d.format("%Y-%m-%d").to_string());
    format!(
        "{:>7}  {} [{}] {} ({} - {})",
        show.id,
        show.name,
        show.network.as_deref().unwrap_or("-"),
        show.status,
        show.start_date.format("%Y-%m-%d"),
        ended
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;
    use crate::error::TransportError;
    use crate::service::ShowServicing;
    use crate::transport::{StubTransport, Transport};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use clap::Parser;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};
    use url::Url;

    fn stub_feed(stub: &Arc<StubTransport>) -> ShowFeed {
        let transport: Arc<dyn Transport> = stub.clone();
        ShowFeed::new(Arc::new(ShowService::new(
            transport,
            ServiceConfig::default(),
        )))
    }

    fn two_shows() -> serde_json::Value {
        json!({
            "tv_shows": [
                {"id": 1, "name": "Seinfeld", "status": "Ended", "start_date": "1989-07-05", "image_thumbnail_path": "https://e.com/1.jpg"},
                {"id": 2, "name": "Rick and Morty", "status": "Running", "start_date": "2013-12-02", "image_thumbnail_path": "https://e.com/2.jpg"}
            ]
        })
    }

    /// Serves `per_page` distinct shows on every page
    struct PagedService {
        per_page: u64,
        calls: AtomicU32,
    }

    #[async_trait]
    impl ShowServicing for PagedService {
        async fn popular(&self, page: u32) -> Result<Vec<Show>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok((0..self.per_page)
                .map(|i| {
                    let id = u64::from(page) * 100 + i;
                    Show::new(
                        id,
                        format!("Show {id}"),
                        "Running",
                        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                        Url::parse(&format!("https://e.com/{id}.jpg")).unwrap(),
                    )
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn test_scroll_loads_requested_pages() {
        let service = Arc::new(PagedService {
            per_page: 4,
            calls: AtomicU32::new(0),
        });
        let feed = ShowFeed::new(service.clone());

        scroll(&feed, 3).await.unwrap();

        assert_eq!(service.calls.load(Ordering::SeqCst), 3);
        assert_eq!(feed.page(), 4);
        assert_eq!(feed.len(), 12);
        assert_eq!(feed.shows()[4].id, 200);
    }

    #[tokio::test]
    async fn test_scroll_zero_pages() {
        let stub = Arc::new(StubTransport::json(&two_shows()));
        let feed = stub_feed(&stub);

        scroll(&feed, 0).await.unwrap();
        assert_eq!(stub.request_count(), 0);
    }

    #[tokio::test]
    async fn test_scroll_stops_on_empty_listing() {
        let stub = Arc::new(StubTransport::json(&json!({ "tv_shows": [] })));
        let feed = stub_feed(&stub);

        scroll(&feed, 5).await.unwrap();
        assert_eq!(stub.request_count(), 1);
        assert!(feed.is_empty());
    }

    #[tokio::test]
    async fn test_scroll_stops_early_on_repeated_shows() {
        let stub = Arc::new(StubTransport::json(&two_shows()));
        let feed = stub_feed(&stub);

        scroll(&feed, 3).await.unwrap();

        assert_eq!(stub.request_count(), 2);
        assert_eq!(feed.page(), 3);
        assert_eq!(feed.len(), 4);
        assert!(!feed.is_loading());
    }

    #[tokio::test]
    async fn test_scroll_reports_error() {
        let stub = Arc::new(StubTransport::failure(TransportError::http_status(
            500, "",
        )));
        let feed = stub_feed(&stub);

        let err = scroll(&feed, 2).await.unwrap_err();
        assert!(err.to_string().contains("Failed to load page 1"));
        assert!(!feed.is_loading());
    }

    #[test]
    fn test_load_config_overrides() {
        let cli = Cli::parse_from([
            "tvtime",
            "--host",
            "episodate.com",
            "--enable-testing",
            "popular",
            "--pages",
            "2",
        ]);
        let config = Runner::new(cli).load_config().unwrap();

        assert_eq!(config.service.host, "episodate.com");
        assert!(config.feed.enable_testing);
        assert_eq!(config.feed.title(), "Testing");
    }

    #[test]
    fn test_load_config_missing_file() {
        let cli = Cli::parse_from(["tvtime", "-C", "/nonexistent/tvtime.yaml", "page"]);
        let err = Runner::new(cli).load_config().unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn test_show_line() {
        let show = Show::new(
            17658,
            "Seinfeld",
            "Ended",
            NaiveDate::from_ymd_opt(1989, 7, 5).unwrap(),
            Url::parse("https://e.com/1.jpg").unwrap(),
        )
        .with_network("NBC")
        .with_end_date(NaiveDate::from_ymd_opt(1998, 5, 14).unwrap());

        assert_eq!(
            show_line(&show),
            "  17658  Seinfeld [NBC] Ended (1989-07-05 - 1998-05-14)"
        );
    }

    #[test]
    fn test_envelope_header() {
        let envelope = PageEnvelope {
            total: Some("1000".to_string()),
            page: Some(2),
            pages: Some(50),
            shows: Vec::new(),
        };
        assert_eq!(
            envelope_header(2, &envelope),
            "Page 2 of 50 (1000 shows total, 0 on this page)"
        );
        assert_eq!(
            envelope_header(7, &PageEnvelope::default()),
            "Page 7 of ? (? shows total, 0 on this page)"
        );
    }
}
