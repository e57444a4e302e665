//! The sequential analysis pipeline.
//!
//! Three stages run strictly forward over one shared result record:
//! redirect walk, final-page fetch, static link extraction. Any stage
//! failure is recorded into the record and skips the remaining stages; the
//! record is returned from every exit path.

use log::{debug, info};

use crate::config::Config;
use crate::error_handling::StageError;
use crate::fetch::{fetch_final_page, walk_redirect_chain};
use crate::initialization::init_session;
use crate::models::AnalysisResult;
use crate::parse::extract_insecure_links;

/// Analyzes one URL for insecure transport usage.
///
/// Follows the redirect chain from `target_url` (up to
/// `config.max_redirects` hops), fetches the terminal page, and extracts
/// statically-declared plain-HTTP links from its markup. Every network
/// request uses `config.timeout_seconds` as its timeout and the transport
/// session is scoped to this single call.
///
/// This function never fails: transport and parse errors are recorded in
/// the returned record's `errors` list and the stages after the failing one
/// are skipped.
pub async fn analyze_url(target_url: &str, config: &Config) -> AnalysisResult {
    let mut result = AnalysisResult::new(target_url);

    let session = match init_session(config) {
        Ok(session) => session,
        Err(e) => {
            result.record_error(&StageError::redirect(e));
            return result;
        }
    };

    let terminal_url = match walk_redirect_chain(
        target_url,
        config.max_redirects,
        &session.walker,
        &mut result,
    )
    .await
    {
        Ok(url) => url,
        Err(e) => {
            result.record_error(&e);
            return result;
        }
    };
    info!(
        "Redirect walk finished after {} hop(s); terminal URL: {}",
        result.redirect_chain.len(),
        terminal_url
    );

    let html = match fetch_final_page(&terminal_url, &session.fetcher).await {
        Ok(html) => html,
        Err(e) => {
            result.record_error(&e);
            return result;
        }
    };
    debug!("Fetched {} bytes of HTML from {terminal_url}", html.len());

    match extract_insecure_links(&html, &terminal_url) {
        Ok(links) => {
            info!("Found {} insecure static link(s)", links.len());
            result.static_insecure_links.extend(links);
        }
        Err(e) => result.record_error(&e),
    }

    result
}
