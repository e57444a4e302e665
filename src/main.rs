//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `redirect_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;

use redirect_audit::initialization::init_logger_with;
use redirect_audit::{analyze_url, print_human_report, validate_and_normalize_url, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let mut config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let Some(target_url) = validate_and_normalize_url(&config.url) else {
        anyhow::bail!("Invalid target URL: {}", config.url);
    };
    config.url = target_url;

    let result = analyze_url(&config.url, &config).await;
    print_human_report(&result);

    if result.is_clean() {
        log::info!("No insecure transport found for {}", result.target_url);
    } else {
        log::warn!(
            "Insecure transport indicators for {}: chain_contains_http={}, insecure_links={}, errors={}",
            result.target_url,
            result.redirect_chain_contains_http,
            result.static_insecure_links.len(),
            result.errors.len()
        );
    }

    Ok(())
}
