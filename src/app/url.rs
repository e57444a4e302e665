//! URL validation and classification utilities.

use log::warn;
use url::Url;

use crate::config::MAX_URL_LENGTH;

/// Validates and normalizes a URL.
///
/// Adds an https:// prefix if no scheme is present, then validates that the
/// URL is syntactically valid and uses the http or https scheme. Rejects
/// URLs longer than `MAX_URL_LENGTH`. Logs a warning and returns `None` if
/// the URL is invalid, too long, or uses an unsupported scheme.
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            &url[..50.min(url.len())]
        );
        return None;
    }

    let normalized = if !url.starts_with("http://") && !url.starts_with("https://") {
        format!("https://{url}")
    } else {
        url.to_string()
    };

    // The added prefix can push a borderline URL over the limit
    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting normalized URL exceeding maximum length ({} > {})",
            normalized.len(),
            MAX_URL_LENGTH
        );
        return None;
    }

    match Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => Some(normalized),
            _ => {
                warn!("Rejecting unsupported scheme for URL: {url}");
                None
            }
        },
        Err(_) => {
            warn!("Rejecting invalid URL: {url}");
            None
        }
    }
}

/// True when a resolved URL uses unencrypted plain-HTTP transport.
///
/// This is the single classification point shared by the redirect walker and
/// the static link extractor: only the exact scheme `http` counts as
/// insecure; `https` and everything else do not.
pub fn is_plain_http(url: &Url) -> bool {
    url.scheme() == "http"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_adds_https_prefix() {
        assert_eq!(
            validate_and_normalize_url("example.com"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_validate_preserves_explicit_schemes() {
        assert_eq!(
            validate_and_normalize_url("http://example.com"),
            Some("http://example.com".to_string())
        );
        assert_eq!(
            validate_and_normalize_url("https://example.com"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_validate_rejects_garbage() {
        assert_eq!(validate_and_normalize_url("not a url at all!!!"), None);
        assert_eq!(validate_and_normalize_url(""), None);
        assert_eq!(validate_and_normalize_url("://example.com"), None);
    }

    #[test]
    fn test_validate_rejects_overlong_url() {
        let long_url = format!("https://example.com/{}", "a".repeat(2100));
        assert_eq!(validate_and_normalize_url(&long_url), None);
    }

    #[test]
    fn test_validate_keeps_path_and_query() {
        assert_eq!(
            validate_and_normalize_url("example.com/path?query=value"),
            Some("https://example.com/path?query=value".to_string())
        );
    }

    #[test]
    fn test_is_plain_http_only_matches_http_scheme() {
        let http = Url::parse("http://insecure.example/x").unwrap();
        let https = Url::parse("https://safe.example/y").unwrap();
        let ftp = Url::parse("ftp://files.example/z").unwrap();
        assert!(is_plain_http(&http));
        assert!(!is_plain_http(&https));
        assert!(!is_plain_http(&ftp));
    }
}
