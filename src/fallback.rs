//! Placeholder events used when the listing could not be scraped.
//!
//! The calendar should never render empty, so a blocked or broken scrape is
//! covered with a handful of plausible sessions over the next few days.

use crate::models::EventRecord;
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, instrument};

/// Companies that placeholder sessions are attributed to.
pub const PLACEHOLDER_COMPANIES: [&str; 5] = [
    "(株)関西デジタル",
    "大阪ITソリューションズ",
    "ネクストイノベーション",
    "梅田WEBサービス",
    "神戸テック",
];

/// Largest day offset from today, inclusive.
pub const MAX_DAY_OFFSET: i64 = 3;

/// Generate `count` placeholder events starting within `[today, today + 3]`.
#[instrument(level = "info", skip(rng))]
pub fn generate_mock_events<R: Rng>(
    rng: &mut R,
    today: NaiveDate,
    count: usize,
) -> Vec<EventRecord> {
    let events: Vec<EventRecord> = (0..count)
        .map(|_| {
            let offset = rng.random_range(0..=MAX_DAY_OFFSET);
            let company = PLACEHOLDER_COMPANIES[rng.random_range(0..PLACEHOLDER_COMPANIES.len())];
            let start = today + Duration::days(offset);
            EventRecord::placeholder(company, start.format("%Y-%m-%d").to_string())
        })
        .collect();

    info!(count = events.len(), "Generated placeholder events");
    events
}

/// Seeded RNG when `seed` is given, otherwise one drawn from OS entropy.
pub fn placeholder_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 30).unwrap()
    }

    #[test]
    fn test_generates_requested_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_mock_events(&mut rng, today(), 10).len(), 10);
        assert!(generate_mock_events(&mut rng, today(), 0).is_empty());
    }

    #[test]
    fn test_dates_within_window() {
        let mut rng = StdRng::seed_from_u64(2);
        let first = today();
        let last = today() + Duration::days(MAX_DAY_OFFSET);

        for event in generate_mock_events(&mut rng, today(), 200) {
            let start = NaiveDate::parse_from_str(&event.start, "%Y-%m-%d").unwrap();
            assert!(start >= first && start <= last, "{start} out of range");
        }
    }

    #[test]
    fn test_window_crosses_year_boundary() {
        let mut rng = StdRng::seed_from_u64(3);
        let starts: Vec<String> = generate_mock_events(&mut rng, today(), 200)
            .into_iter()
            .map(|e| e.start)
            .collect();

        assert!(starts.iter().any(|s| s.starts_with("2026-01-")));
    }

    #[test]
    fn test_titles_use_known_companies() {
        let mut rng = StdRng::seed_from_u64(4);

        for event in generate_mock_events(&mut rng, today(), 50) {
            let company = event
                .title
                .strip_prefix("【緊急開催】")
                .and_then(|rest| rest.strip_suffix(" オンライン説明会"))
                .unwrap();
            assert!(PLACEHOLDER_COMPANIES.contains(&company));
            assert_eq!(event.color, "#EF4444");
            assert_eq!(event.url, "https://www.kokuchpro.com/");
        }
    }

    #[test]
    fn test_same_seed_same_events() {
        let a = generate_mock_events(&mut placeholder_rng(Some(9)), today(), 10);
        let b = generate_mock_events(&mut placeholder_rng(Some(9)), today(), 10);
        assert_eq!(a, b);
    }
}
