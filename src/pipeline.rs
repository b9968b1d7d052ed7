//! One end-to-end run: fetch, parse, fall back if empty, write.
//!
//! ```text
//! Fetching ─┬─ body ──> parse ─┬─ non-empty ─────────────┬─> Written
//!           │                  └─ empty ──> Synthesized ─┤
//!           └─ none ──────────────────────> Synthesized ─┘
//! ```
//!
//! Every path ends with the feed written. Only a filesystem error stops the
//! run short.

use crate::config::PipelineConfig;
use crate::fallback::generate_mock_events;
use crate::models::{EventRecord, EventSource};
use crate::outputs::json::write_events;
use crate::scrapers::kokuchpro;
use chrono::NaiveDate;
use rand::Rng;
use std::error::Error;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// Summary of what a run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Whether the feed holds scraped or placeholder events.
    pub source: EventSource,
    pub count: usize,
    pub path: PathBuf,
}

/// Run the pipeline once.
///
/// The body is parsed only when the fetch succeeded. Placeholders are
/// generated only when nothing was scraped.
///
/// # Arguments
///
/// * `config` - Fetch settings, output path and fallback count
/// * `rng` - Source of randomness for placeholder events
/// * `today` - First day of the placeholder window
///
/// # Returns
///
/// A [`RunReport`] describing what was written, or an error if the feed
/// could not be written.
#[instrument(level = "info", skip_all, fields(output = %config.output_path.display()))]
pub async fn run<R: Rng>(
    config: &PipelineConfig,
    rng: &mut R,
    today: NaiveDate,
) -> Result<RunReport, Box<dyn Error>> {
    info!("Searching kokuchpro for online company info sessions");
    let scraped: Vec<EventRecord> = match kokuchpro::fetch_listing(&config.fetch).await {
        Some(body) => kokuchpro::parse_listing(&body, &config.fetch.url),
        None => Vec::new(),
    };

    let (source, events) = if scraped.is_empty() {
        warn!("No events scraped; writing placeholder events instead");
        (
            EventSource::Placeholder,
            generate_mock_events(rng, today, config.fallback_count),
        )
    } else {
        (EventSource::Scraped, scraped)
    };

    write_events(&events, &config.output_path).await?;

    Ok(RunReport {
        source,
        count: events.len(),
        path: config.output_path.clone(),
    })
}
