//! HTML parsing and static link extraction.
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod links;

// Re-export public API
pub use links::{extract_insecure_links, refresh_url_from_content};
