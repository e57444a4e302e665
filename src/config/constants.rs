//! Configuration constants.
//!
//! Defaults and limits used throughout the application.

/// Maximum redirect hops followed during the manual chain walk.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Per-request timeout in seconds, applied to every request in a session.
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;

/// Maximum URL length (2048 characters) to prevent abuse via extremely long
/// URLs. This matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Default User-Agent string for HTTP requests.
///
/// Sites frequently serve different redirect chains (or block outright) for
/// obviously non-browser agents, so the default mimics a current browser.
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
