//! Static insecure-link extraction.
//!
//! Collects every statically-declared plain-HTTP URL reachable from the
//! final page's markup: anchor `href` attributes and meta-refresh targets.
//! Parsing is permissive (malformed markup never aborts extraction) and
//! nothing is ever executed, so links reachable only through script are out
//! of scope.

use std::sync::LazyLock;

use log::debug;
use scraper::{Html, Selector};
use url::Url;

use crate::app::is_plain_http;
use crate::error_handling::StageError;

// CSS selector strings
const ANCHOR_SELECTOR_STR: &str = "a[href]";
const META_HTTP_EQUIV_SELECTOR_STR: &str = "meta[http-equiv]";

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(ANCHOR_SELECTOR_STR).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse anchor selector '{}': {}",
            ANCHOR_SELECTOR_STR,
            e
        );
        match_nothing_selector()
    })
});

static META_HTTP_EQUIV_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(META_HTTP_EQUIV_SELECTOR_STR).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse meta selector '{}': {}",
            META_HTTP_EQUIV_SELECTOR_STR,
            e
        );
        match_nothing_selector()
    })
});

// Known-valid selector that matches nothing, used as a fallback so a broken
// selector constant degrades to "no matches" instead of a panic.
fn match_nothing_selector() -> Selector {
    Selector::parse("*:not(*)").expect("fallback selector '*:not(*)' should always parse")
}

/// Extracts every insecure absolute URL statically declared in `html`.
///
/// Anchor `href` values and meta-refresh targets are resolved against
/// `base_url`; a resolved URL is recorded when its scheme is plain `http`.
/// The returned sequence keeps document order (anchors first, then
/// meta-refresh targets) and permits duplicates.
///
/// # Errors
///
/// Returns `StageError::HtmlParse` when `base_url` itself cannot be parsed;
/// individual unresolvable hrefs are skipped, not fatal.
pub fn extract_insecure_links(html: &str, base_url: &str) -> Result<Vec<String>, StageError> {
    let base = Url::parse(base_url)
        .map_err(|e| StageError::html_parse(format!("invalid base URL '{base_url}': {e}")))?;

    let document = Html::parse_document(html);
    let mut insecure = Vec::new();

    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        match base.join(href) {
            Ok(resolved) if is_plain_http(&resolved) => insecure.push(resolved.to_string()),
            Ok(_) => {}
            Err(e) => debug!("Skipping unresolvable href '{href}': {e}"),
        }
    }

    for element in document.select(&META_HTTP_EQUIV_SELECTOR) {
        let is_refresh = element
            .value()
            .attr("http-equiv")
            .is_some_and(|v| v.eq_ignore_ascii_case("refresh"));
        if !is_refresh {
            continue;
        }
        let Some(content) = element.value().attr("content") else {
            continue;
        };
        let Some(target) = refresh_url_from_content(content) else {
            continue;
        };
        match base.join(target) {
            Ok(resolved) if is_plain_http(&resolved) => insecure.push(resolved.to_string()),
            Ok(_) => {}
            Err(e) => debug!("Skipping unresolvable meta-refresh target '{target}': {e}"),
        }
    }

    Ok(insecure)
}

/// Extracts the navigation target from a meta-refresh `content` value.
///
/// Takes the substring after the last case-insensitive `url=` marker and
/// trims surrounding whitespace, nothing more. Real-world refresh values
/// use unusual spacing and quoting, and quoted values are deliberately left
/// quoted so downstream resolution sees exactly what the markup declared.
pub fn refresh_url_from_content(content: &str) -> Option<&str> {
    let lowered = content.to_ascii_lowercase();
    let idx = lowered.rfind("url=")?;
    Some(content[idx + "url=".len()..].trim())
}
