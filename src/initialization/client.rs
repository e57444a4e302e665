//! HTTP session initialization.
//!
//! One `HttpSession` is created per analysis invocation and dropped when it
//! returns. It holds the two clients the pipeline needs: a walker client
//! with redirects disabled (for manual hop tracking) and a fetcher client
//! with the default redirect policy (for the final-page request). Both share
//! a single cookie jar so cookie state set on early hops is visible to every
//! later request in the same run.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;
use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// The per-analysis transport session.
pub struct HttpSession {
    /// Client with redirects disabled, used for manual hop-by-hop walking.
    pub walker: reqwest::Client,
    /// Client with the default redirect policy, used for the final-page fetch.
    pub fetcher: reqwest::Client,
}

/// Initializes the transport session for one analysis run.
///
/// Both clients are configured with the per-request timeout and User-Agent
/// from the configuration and share one cookie jar. The session must not be
/// reused across analyses; each run gets a fresh one.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_session(config: &Config) -> Result<HttpSession, InitializationError> {
    let jar = Arc::new(Jar::default());

    let walker = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .cookie_provider(Arc::clone(&jar))
        .build()?;

    let fetcher = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .cookie_provider(jar)
        .build()?;

    Ok(HttpSession { walker, fetcher })
}
