//! Event listing scrapers.
//!
//! A scraper is split into two phases:
//!
//! 1. **Fetching**: download the listing page; any failure becomes `None`
//! 2. **Parsing**: turn the markup into [`EventRecord`](crate::models::EventRecord)s,
//!    skipping cards that do not have the expected shape
//!
//! # Supported Sources
//!
//! | Source | Module | Method |
//! |--------|--------|--------|
//! | こくちーずプロ | [`kokuchpro`] | HTML scraping of the search results page |

pub mod kokuchpro;
