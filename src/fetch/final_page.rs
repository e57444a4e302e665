//! Fetching the terminal page of a redirect chain.

use log::debug;

use crate::error_handling::StageError;

/// Fetches the terminal URL's HTML body.
///
/// Unlike the manual chain walk, this request uses a client with the default
/// redirect policy, so any redirects the terminal URL still performs are
/// followed by the library before the body is returned.
///
/// # Errors
///
/// Returns `StageError::FinalFetch` on any transport or body-decoding
/// failure.
pub async fn fetch_final_page(
    url: &str,
    client: &reqwest::Client,
) -> Result<String, StageError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| StageError::final_fetch(e))?;

    debug!("Final page {url} answered with status {}", response.status());

    response
        .text()
        .await
        .map_err(|e| StageError::final_fetch(e))
}
