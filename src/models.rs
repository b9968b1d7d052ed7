//! Data models for calendar events.
//!
//! - [`EventRecord`]: one entry in the `events.json` feed
//! - [`EventSource`]: where a record came from, and the constants that go with it
//!
//! The front-end calendar reads `title`, `start`, `url`, `color` and
//! `description`, and matches days on `start == "YYYY-MM-DD"`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Link used by every placeholder record.
pub const PLACEHOLDER_URL: &str = "https://www.kokuchpro.com/";

/// Origin of an [`EventRecord`].
///
/// Each source carries its own title tag, colour and description so the
/// calendar can tell live listings apart from placeholders at a glance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSource {
    /// Parsed from the kokuchpro search results.
    Scraped,
    /// Generated because nothing could be scraped.
    Placeholder,
}

impl EventSource {
    /// Marker prepended to scraped titles.
    pub fn title_tag(self) -> &'static str {
        match self {
            EventSource::Scraped => "【Zoom】",
            EventSource::Placeholder => "【緊急開催】",
        }
    }

    /// Hex colour used by the calendar bar.
    pub fn color(self) -> &'static str {
        match self {
            EventSource::Scraped => "#F59E0B",
            EventSource::Placeholder => "#EF4444",
        }
    }

    /// Fixed description shown in the calendar's day popup.
    pub fn description(self) -> &'static str {
        match self {
            EventSource::Scraped => "こくちーずプロより",
            EventSource::Placeholder => "これはダミーデータです。スクレイピングがブロックされました。",
        }
    }
}

impl fmt::Display for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventSource::Scraped => f.write_str("scraped"),
            EventSource::Placeholder => f.write_str("placeholder"),
        }
    }
}

/// A single calendar entry.
///
/// Field declaration order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EventRecord {
    /// Display title, always prefixed with the source's tag (the heading text
    /// after the tag may be empty).
    pub title: String,
    /// Start date in `YYYY-MM-DD` form.
    pub start: String,
    /// Link to the listing; relative hrefs are resolved against the page URL.
    pub url: String,
    /// `#RRGGBB` colour for the calendar bar.
    pub color: String,
    pub description: String,
}

impl EventRecord {
    /// Build a record from a scraped listing. `title` is the raw heading text.
    pub fn scraped(title: &str, start: String, url: String) -> Self {
        let title = format!("{}{}", EventSource::Scraped.title_tag(), title);
        Self::from_source(EventSource::Scraped, title, start, url)
    }

    /// Build a placeholder record for `company` on `start`.
    pub fn placeholder(company: &str, start: String) -> Self {
        let tag = EventSource::Placeholder.title_tag();
        let title = format!("{tag}{company} オンライン説明会");
        Self::from_source(EventSource::Placeholder, title, start, PLACEHOLDER_URL.to_string())
    }

    fn from_source(source: EventSource, title: String, start: String, url: String) -> Self {
        EventRecord {
            title,
            start,
            url,
            color: source.color().to_string(),
            description: source.description().to_string(),
        }
    }
}
