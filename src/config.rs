//! Runtime configuration for the scrape pipeline.
//!
//! Every component receives its settings explicitly instead of reading
//! globals, so tests can point the fetcher at a mock server and the writer
//! at a temporary directory.

use std::path::PathBuf;
use std::time::Duration;

/// kokuchpro search for "会社説明会", online-only.
pub const DEFAULT_SOURCE_URL: &str =
    "https://www.kokuchpro.com/s/q-%E4%BC%9A%E7%A4%BE%E8%AA%AC%E6%98%8E%E4%BC%9A/?online=1";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const DEFAULT_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const DEFAULT_REFERER: &str = "https://www.google.com/";

pub const DEFAULT_OUTPUT_PATH: &str = "public/events.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_DELAY_SECS: u64 = 2;
pub const DEFAULT_FALLBACK_COUNT: usize = 10;

/// Settings for the single listing request.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Search results page to scrape.
    pub url: String,
    /// Browser `User-Agent` sent with the request.
    pub user_agent: String,
    /// `Accept` header, preferring HTML.
    pub accept: String,
    /// `Referer` header, made to look like a search-engine click-through.
    pub referer: String,
    /// Upper bound on the whole request.
    pub timeout: Duration,
    /// Pause before the request is sent.
    pub delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            url: DEFAULT_SOURCE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            delay: Duration::from_secs(DEFAULT_DELAY_SECS),
        }
    }
}

/// Settings for one end-to-end run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub fetch: FetchConfig,
    /// Destination of the JSON feed, overwritten on every run.
    pub output_path: PathBuf,
    /// Number of placeholder records written when nothing is scraped.
    pub fallback_count: usize,
    /// Seed for the placeholder generator; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            fetch: FetchConfig::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            fallback_count: DEFAULT_FALLBACK_COUNT,
            seed: None,
        }
    }
}
