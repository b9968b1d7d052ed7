//! kokuchpro search results scraper.
//!
//! The search page lists one event per `div.event-card`:
//!
//! ```html
//! <div class="event-card">
//!   <h3 class="event-title"><a href="/event/abc/">株式会社サンプル 会社説明会</a></h3>
//!   <div class="event-date">2025/12/08(月) 19:00〜</div>
//! </div>
//! ```
//!
//! # Date Normalization
//!
//! The date text is assumed to start with `YYYY/MM/DD` or `YYYY.MM.DD`. Only
//! the first ten characters are kept and their separators rewritten to `-`.
//! Anything else on the site will pass through unparsed.
//!
//! # Encoding
//!
//! The body is decoded with the charset named in the response's
//! `Content-Type`, falling back to UTF-8. There is no content sniffing, so a
//! Shift_JIS page served without a charset parameter would be misdecoded.

use crate::config::FetchConfig;
use crate::models::EventRecord;
use crate::utils::truncate_for_log;
use once_cell::sync::Lazy;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, REFERER, USER_AGENT};
use reqwest::{Client, StatusCode};
use scraper::{ElementRef, Html, Selector};
use std::error::Error;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

static CARD_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("div.event-card").unwrap());
static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h3.event-title").unwrap());
static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
static DATE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("div.event-date").unwrap());

/// Download the search results page.
///
/// Waits `config.delay` first, then sends exactly one GET with the
/// configured browser headers and timeout.
///
/// # Arguments
///
/// * `config` - Target URL, headers, timeout and pre-request delay
///
/// # Returns
///
/// The decoded page body, or `None` on a non-200 status or any transport
/// error. Both are logged and never retried.
#[instrument(level = "info", skip_all, fields(url = %config.url))]
pub async fn fetch_listing(config: &FetchConfig) -> Option<String> {
    match try_fetch_listing(config).await {
        Ok(body) => body,
        Err(e) => {
            error!(error = %e, "Listing fetch failed");
            None
        }
    }
}

async fn try_fetch_listing(config: &FetchConfig) -> Result<Option<String>, Box<dyn Error>> {
    if !config.delay.is_zero() {
        debug!(delay_ms = config.delay.as_millis() as u64, "Waiting before request");
        sleep(config.delay).await;
    }

    let client = build_client(config)?;
    let response = client.get(&config.url).send().await?;
    let status = response.status();

    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        warn!(
            %status,
            body_preview = %truncate_for_log(&body, 200),
            "Listing request was not successful"
        );
        return Ok(None);
    }

    let body = response.text().await?;
    info!(%status, bytes = body.len(), "Fetched listing page");
    Ok(Some(body))
}

fn build_client(config: &FetchConfig) -> Result<Client, Box<dyn Error>> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
    headers.insert(ACCEPT, HeaderValue::from_str(&config.accept)?);
    headers.insert(REFERER, HeaderValue::from_str(&config.referer)?);

    let client = Client::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .build()?;
    Ok(client)
}

/// Extract every well-formed event card from `html`.
///
/// # Arguments
///
/// * `html` - Markup of the search results page
/// * `page_url` - URL the markup was fetched from, used to resolve relative links
///
/// # Returns
///
/// One [`EventRecord`] per card that has a heading, an anchor and an `href`,
/// in document order. Cards missing any of those are skipped.
#[instrument(level = "info", skip_all, fields(page_url = %page_url))]
pub fn parse_listing(html: &str, page_url: &str) -> Vec<EventRecord> {
    let base = Url::parse(page_url).ok();
    let document = Html::parse_document(html);
    let cards: Vec<ElementRef<'_>> = document.select(&CARD_SELECTOR).collect();
    info!(count = cards.len(), "Found event cards");

    let events: Vec<EventRecord> = cards
        .iter()
        .enumerate()
        .filter_map(|(index, card)| {
            let parsed = parse_card(*card, base.as_ref());
            if parsed.is_none() {
                debug!(index, "Skipping malformed card");
            }
            parsed
        })
        .collect();

    info!(
        parsed = events.len(),
        skipped = cards.len() - events.len(),
        "Parsed event cards"
    );
    events
}

/// Parse one card, or `None` if its heading, anchor or `href` is missing.
///
/// Empty values are kept: a heading with no text (an image-only title) still
/// yields a record, and so does `href=""`.
fn parse_card(card: ElementRef<'_>, base: Option<&Url>) -> Option<EventRecord> {
    let heading = card.select(&TITLE_SELECTOR).next()?;
    let title = stripped_text(heading);

    let href = heading.select(&LINK_SELECTOR).next()?.value().attr("href")?;
    let url = resolve_link(href, base);

    let raw_date = card
        .select(&DATE_SELECTOR)
        .next()
        .map(stripped_text)
        .unwrap_or_default();

    Some(EventRecord::scraped(&title, normalize_date(&raw_date), url))
}

/// Keep absolute links untouched; join relative ones onto the page URL.
///
/// An empty `href` resolves to the page itself. A link that cannot be joined
/// is kept verbatim.
fn resolve_link(href: &str, base: Option<&Url>) -> String {
    let href = href.trim();
    match (Url::parse(href), base) {
        (Err(url::ParseError::RelativeUrlWithoutBase), Some(base)) => base
            .join(href)
            .map(String::from)
            .unwrap_or_else(|_| href.to_string()),
        _ => href.to_string(),
    }
}

/// Concatenate the element's text nodes, each trimmed.
fn stripped_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}

/// Take the first ten characters and turn `.` and `/` separators into `-`.
///
/// `"2025/12/08(月) 19:00〜"` becomes `"2025-12-08"`.
pub fn normalize_date(raw: &str) -> String {
    raw.chars()
        .take(10)
        .map(|c| if c == '.' || c == '/' { '-' } else { c })
        .collect()
}
