//! Manual redirect-chain walking.
//!
//! Follows the redirect chain hop by hop with redirects disabled on the
//! client, so every intermediate URL and status is observed and recorded.

use log::{debug, warn};
use reqwest::Url;

use crate::app::is_plain_http;
use crate::error_handling::StageError;
use crate::models::{AnalysisResult, RedirectHop};

/// Status codes treated as redirects: both temporary and permanent semantics.
const REDIRECT_STATUSES: [u16; 5] = [301, 302, 303, 307, 308];

pub(crate) fn is_redirect_status(status: u16) -> bool {
    REDIRECT_STATUSES.contains(&status)
}

/// Walks the redirect chain from `start_url`, following at most
/// `max_redirects` hops, and returns the terminal URL.
///
/// Each hop is appended to `result.redirect_chain` as it is observed, and
/// `result.redirect_chain_contains_http` is set (sticky) whenever a resolved
/// redirect target uses plain HTTP. If the hop budget is exhausted while the
/// chain is still redirecting, the last resolved (not yet fetched) URL is
/// the terminal one.
///
/// # Arguments
///
/// * `start_url` - The initial URL to start from
/// * `max_redirects` - Maximum number of hops to follow
/// * `client` - HTTP client with redirects disabled (for manual tracking)
/// * `result` - The shared result record hops are written into
///
/// # Errors
///
/// Returns `StageError::Redirect` on any transport failure or on a
/// `Location` header that cannot be resolved to an absolute URL; hops
/// observed before the failure remain in the record.
pub async fn walk_redirect_chain(
    start_url: &str,
    max_redirects: usize,
    client: &reqwest::Client,
    result: &mut AnalysisResult,
) -> Result<String, StageError> {
    let mut current = start_url.to_string();

    for _ in 0..max_redirects {
        let response = client
            .get(&current)
            .send()
            .await
            .map_err(|e| StageError::redirect(e))?;

        let status = response.status().as_u16();
        result.redirect_chain.push(RedirectHop {
            url: current.clone(),
            status,
        });

        if !is_redirect_status(status) {
            // Not a redirect, we've reached the final URL
            break;
        }

        let Some(location) = response.headers().get(reqwest::header::LOCATION) else {
            warn!("Redirect status {status} for {current} without a Location header; treating as terminal");
            break;
        };
        let location = location.to_str().unwrap_or("").to_string();

        // Absolute Location values parse directly; relative references are
        // joined against the URL that issued the redirect
        let next = Url::parse(&location)
            .or_else(|_| {
                Url::parse(&current).and_then(|base| base.join(&location))
            })
            .map_err(|e| StageError::redirect(format!("unresolvable Location '{location}': {e}")))?;

        if is_plain_http(&next) {
            result.redirect_chain_contains_http = true;
        }

        debug!("Hop {status}: {current} -> {next}");
        current = next.to_string();
    }

    Ok(current)
}
