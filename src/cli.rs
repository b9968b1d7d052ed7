//! Command-line interface definitions.
//!
//! Every option has a default, so running the binary with no arguments
//! scrapes the standard search page into `public/events.json`. Each option
//! can also be supplied through an environment variable.

use crate::config::{
    DEFAULT_DELAY_SECS, DEFAULT_FALLBACK_COUNT, DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_URL,
    DEFAULT_TIMEOUT_SECS, FetchConfig, PipelineConfig,
};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Command-line arguments for the events scraper.
///
/// # Examples
///
/// ```sh
/// # Defaults: kokuchpro search -> public/events.json
/// kokuchi_events
///
/// # Write somewhere else, skip the politeness delay
/// kokuchi_events -o /tmp/events.json --delay-secs 0
///
/// # Reproducible placeholder data
/// kokuchi_events --seed 42
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path of the JSON file to write
    #[arg(short, long, env = "EVENTS_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Search results page to scrape
    #[arg(short, long, env = "EVENTS_SOURCE_URL", default_value = DEFAULT_SOURCE_URL)]
    pub url: String,

    /// Request timeout in seconds
    #[arg(long, env = "EVENTS_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Seconds to wait before sending the request
    #[arg(long, env = "EVENTS_DELAY_SECS", default_value_t = DEFAULT_DELAY_SECS)]
    pub delay_secs: u64,

    /// Number of placeholder events written when nothing could be scraped
    #[arg(long, env = "EVENTS_FALLBACK_COUNT", default_value_t = DEFAULT_FALLBACK_COUNT)]
    pub fallback_count: usize,

    /// Seed for placeholder generation
    #[arg(long, env = "EVENTS_SEED")]
    pub seed: Option<u64>,
}

impl Cli {
    /// Convert parsed arguments into a [`PipelineConfig`].
    pub fn into_config(self) -> PipelineConfig {
        PipelineConfig {
            fetch: FetchConfig {
                url: self.url,
                timeout: Duration::from_secs(self.timeout_secs),
                delay: Duration::from_secs(self.delay_secs),
                ..FetchConfig::default()
            },
            output_path: self.output,
            fallback_count: self.fallback_count,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["kokuchi_events"]);

        assert_eq!(cli.output, PathBuf::from("public/events.json"));
        assert_eq!(cli.url, DEFAULT_SOURCE_URL);
        assert_eq!(cli.timeout_secs, 15);
        assert_eq!(cli.delay_secs, 2);
        assert_eq!(cli.fallback_count, 10);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "kokuchi_events",
            "-o",
            "/tmp/events.json",
            "-u",
            "http://127.0.0.1:9000/s/",
        ]);

        assert_eq!(cli.output, PathBuf::from("/tmp/events.json"));
        assert_eq!(cli.url, "http://127.0.0.1:9000/s/");
    }

    #[test]
    fn test_into_config() {
        let config = Cli::parse_from([
            "kokuchi_events",
            "--delay-secs",
            "0",
            "--timeout-secs",
            "3",
            "--seed",
            "7",
        ])
        .into_config();

        assert_eq!(config.fetch.delay, Duration::ZERO);
        assert_eq!(config.fetch.timeout, Duration::from_secs(3));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.fetch.referer, "https://www.google.com/");
    }
}
