//! JSON feed output for the calendar front-end.
//!
//! The feed is a top-level array, pretty-printed with two-space indentation.
//! Japanese text is written as raw UTF-8 rather than `\u` escapes.
//!
//! # Replacement
//!
//! The file is first written to `<path>.tmp` and then renamed over `<path>`,
//! so a reader sees either the previous feed or the new one in full.

use crate::models::EventRecord;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Serialize `events` and replace the file at `path`.
///
/// Creates the parent directory when it is missing. An empty slice is
/// written as `[]`.
///
/// # Arguments
///
/// * `events` - Records to write, in output order
/// * `path` - Destination of the feed, usually `public/events.json`
///
/// # Returns
///
/// `Ok(())` once the new feed is in place.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// written or renamed. The temporary file is removed before returning.
#[instrument(level = "info", skip_all, fields(path = %path.display(), count = events.len()))]
pub async fn write_events(events: &[EventRecord], path: &Path) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(events)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create output dir");
            return Err(e.into());
        }
    }

    let temp = temp_path(path);
    let written = match fs::write(&temp, json).await {
        Ok(()) => fs::rename(&temp, path).await,
        Err(e) => Err(e),
    };
    if let Err(e) = written {
        error!(temp = %temp.display(), error = %e, "Failed to replace events feed");
        let _ = fs::remove_file(&temp).await;
        return Err(e.into());
    }
    info!("Wrote events feed");

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
