//! redirect_audit library: single-URL insecure-transport analysis
//!
//! This library inspects one web resource for plain-HTTP transport usage:
//! it follows the redirect chain hop by hop (flagging any hop whose target
//! is unencrypted), fetches the terminal page, and extracts every
//! statically-declared plain-HTTP link from its markup (anchor hrefs and
//! meta-refresh targets). JavaScript is never executed, so script-driven
//! redirects and links are out of scope by design.
//!
//! # Example
//!
//! ```no_run
//! use redirect_audit::{analyze_url, to_json, Config};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let config = Config::default();
//! let result = analyze_url("https://example.com", &config).await;
//!
//! if result.redirect_chain_contains_http {
//!     eprintln!("insecure hop in the redirect chain!");
//! }
//! println!("{}", to_json(&result));
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context. Execution is strictly sequential: each analysis performs its
//! network calls one after another with the configured per-request timeout
//! as the only cancellation mechanism.

#![warn(missing_docs)]

mod analyzer;
mod app;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
mod parse;
pub mod report;

// Re-export public API
pub use analyzer::analyze_url;
pub use app::validate_and_normalize_url;
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, StageError};
pub use models::{AnalysisResult, RedirectHop};
pub use report::{print_human_report, to_json};
