//! Output generation.
//!
//! # Submodules
//!
//! - [`json`]: writes the event list as the `events.json` feed read by the calendar
//!
//! # Output Structure
//!
//! ```text
//! public/
//! └── events.json   # [{ "title", "start", "url", "color", "description" }, ...]
//! ```

pub mod json;
