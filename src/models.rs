//! The analysis result record.
//!
//! One `AnalysisResult` is created per analysis invocation, populated in
//! place by the pipeline stages, and always returned to the caller: partial
//! data plus whatever errors occurred, never an error instead of a record.

use serde::{Deserialize, Serialize};

use crate::error_handling::StageError;

/// One request/response pair observed while walking the redirect chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectHop {
    /// The URL the request was issued against.
    pub url: String,
    /// The HTTP status code the server answered with.
    pub status: u16,
}

/// The record built incrementally by one analysis run.
///
/// All sequence fields are append-only and keep insertion order;
/// `redirect_chain_contains_http` is sticky; once set it is never cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The original input URL, immutable once set.
    pub target_url: String,
    /// Every hop taken while following redirects, in chronological order.
    pub redirect_chain: Vec<RedirectHop>,
    /// Whether any resolved redirect target in the chain used plain HTTP.
    pub redirect_chain_contains_http: bool,
    /// Absolute plain-HTTP URLs statically declared in the final page's
    /// markup (anchor hrefs and meta-refresh targets). Duplicates permitted.
    pub static_insecure_links: Vec<String>,
    /// Human-readable, stage-tagged error strings.
    pub errors: Vec<String>,
}

impl AnalysisResult {
    /// Creates an empty record for the given target URL.
    pub fn new(target_url: &str) -> Self {
        Self {
            target_url: target_url.to_string(),
            redirect_chain: Vec::new(),
            redirect_chain_contains_http: false,
            static_insecure_links: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Appends a stage failure to the error list in its tagged string form.
    pub(crate) fn record_error(&mut self, error: &StageError) {
        self.errors.push(error.to_string());
    }

    /// True when the analysis found nothing insecure and recorded no errors.
    pub fn is_clean(&self) -> bool {
        !self.redirect_chain_contains_http
            && self.static_insecure_links.is_empty()
            && self.errors.is_empty()
    }
}
