//! # kokuchi_events
//!
//! Scrapes online company info sessions (会社説明会) from the kokuchpro search
//! results and writes them to `public/events.json`, the feed behind the
//! front-end calendar view.
//!
//! ## Usage
//!
//! ```sh
//! kokuchi_events
//! kokuchi_events -o ./public/events.json --delay-secs 0
//! ```
//!
//! ## Architecture
//!
//! A single run, one request at a time:
//! 1. **Fetching**: one GET to the search page after a short delay
//! 2. **Parsing**: pick title, link and date out of each `div.event-card`
//! 3. **Fallback**: placeholder sessions if nothing was scraped
//! 4. **Output**: the JSON feed is always written

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod fallback;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;

use cli::Cli;
use fallback::placeholder_rng;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("kokuchi_events starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");
    let config = args.into_config();

    let mut rng = placeholder_rng(config.seed);
    let today = Local::now().date_naive();

    let report = match pipeline::run(&config, &mut rng, today).await {
        Ok(report) => report,
        Err(e) => {
            error!(path = %config.output_path.display(), error = %e, "Failed to write events feed");
            return Err(e);
        }
    };

    let elapsed = start_time.elapsed();
    info!(
        source = %report.source,
        count = report.count,
        path = %report.path.display(),
        millis = elapsed.as_millis() as u64,
        "Execution complete"
    );

    Ok(())
}
