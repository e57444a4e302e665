//! Rendering of the analysis record.
//!
//! Two outputs: a human-readable report for the terminal and a pretty JSON
//! dump for machine ingestion. The human report always prints every
//! section, even when empty, so a total failure early in the chain is still
//! visible as an empty chain plus a populated error list.

use colored::Colorize;

use crate::models::AnalysisResult;

/// Serializes the record to pretty-printed JSON.
pub fn to_json(result: &AnalysisResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
}

/// Prints the human report followed by the full JSON dump to stdout.
pub fn print_human_report(result: &AnalysisResult) {
    println!();
    println!("{}", "--- HUMAN REPORT ---".bold());
    println!("Target: {}", result.target_url);
    println!("Redirect Chain:");
    for hop in &result.redirect_chain {
        println!("  - {} → {}", hop.status, hop.url);
    }

    let verdict = if result.redirect_chain_contains_http {
        "true".red()
    } else {
        "false".green()
    };
    println!();
    println!("Redirect Chain Contains HTTP? {verdict}");

    println!();
    println!("Static Insecure Links Found:");
    for link in &result.static_insecure_links {
        println!("  - {}", link.red());
    }

    println!();
    println!("Errors:");
    for error in &result.errors {
        println!("  - {}", error.yellow());
    }

    println!();
    println!("{}", "--- JSON OUTPUT ---".bold());
    println!("{}", to_json(result));
}
