//! Error type definitions.
//!
//! Two families of errors exist: initialization failures, which surface to
//! the binary boundary, and per-stage analysis failures, which are captured
//! into the result record as tagged strings and never unwind past the
//! analysis entry point.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error building the HTTP clients for an analysis session.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// A failure in one of the three analysis stages.
///
/// The `Display` form carries the stage tag that ends up in the result
/// record's `errors` list; later stages are skipped according to which
/// stage failed (redirect walking aborts everything downstream, a final
/// fetch failure aborts extraction, a parse failure aborts only itself).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StageError {
    /// Transport failure during hop-by-hop redirect walking.
    #[error("Redirect error: {0}")]
    Redirect(String),

    /// Transport failure fetching the terminal page.
    #[error("Failed to fetch final page: {0}")]
    FinalFetch(String),

    /// Failure while parsing HTML for links.
    #[error("HTML parse error: {0}")]
    HtmlParse(String),
}

impl StageError {
    /// Wraps any displayable cause as a redirect-stage failure.
    pub fn redirect(cause: impl std::fmt::Display) -> Self {
        StageError::Redirect(cause.to_string())
    }

    /// Wraps any displayable cause as a final-fetch failure.
    pub fn final_fetch(cause: impl std::fmt::Display) -> Self {
        StageError::FinalFetch(cause.to_string())
    }

    /// Wraps any displayable cause as an HTML-parse failure.
    pub fn html_parse(cause: impl std::fmt::Display) -> Self {
        StageError::HtmlParse(cause.to_string())
    }
}
