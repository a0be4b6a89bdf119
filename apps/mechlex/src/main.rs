//! # Mechlex - Mechanics Glossary CLI
//!
//! The main binary for the Mechlex catalog engine.
//!
//! ## Usage
//!
//! ```bash
//! # Full record for a term
//! mechlex -f official.json -f scraped.json show "First Strike"
//!
//! # Resolved description text
//! mechlex -f official.json describe Trample --fallback
//!
//! # Search and listing
//! mechlex -f official.json search fly --category evergreen
//! mechlex -f official.json list --category beginner
//!
//! # Catalog build summary
//! mechlex -f official.json status
//! ```

use clap::Parser;
use mechlex::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    // Initialize tracing — MECHLEX_LOG_FORMAT=json enables
    // machine-parseable output; --verbose/--quiet pick the default
    // filter when RUST_LOG is unset.
    let log_format = std::env::var("MECHLEX_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "mechlex=debug"
    } else if cli.quiet {
        "mechlex=warn"
    } else {
        "mechlex=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Only structural faults exit nonzero; a term with no catalog
    // entry is a rendered state, not an error.
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
