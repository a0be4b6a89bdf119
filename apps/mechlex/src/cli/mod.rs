//! # Mechlex CLI Module
//!
//! This module implements the CLI interface for Mechlex.
//!
//! ## Available Commands
//!
//! - `show` - Full catalog record for a term
//! - `describe` - Resolved description text for a term
//! - `search` - Case-insensitive substring search over names
//! - `list` - Names in a category (all / evergreen / beginner)
//! - `status` - Catalog counts and build report

mod commands;

use crate::loader;
use clap::{Parser, Subcommand};
use mechlex_core::MechlexError;
use std::path::PathBuf;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Mechlex - Mechanics Glossary
///
/// A deterministic catalog of game mechanics merged from sources of
/// differing provenance. Lookups resolve by source precedence;
/// unknown terms render a not-found state instead of failing.
#[derive(Parser, Debug)]
#[command(name = "mechlex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug-level) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress informational logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Raw document file (JSON array of entries); repeatable
    #[arg(short = 'f', long = "file", required = true)]
    pub files: Vec<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the full catalog record for a term
    Show {
        /// Term name (case and punctuation insensitive)
        name: String,
    },

    /// Print the resolved description for a term
    Describe {
        /// Term name (case and punctuation insensitive)
        name: String,

        /// Prefer the fallback description when one exists
        #[arg(long)]
        fallback: bool,
    },

    /// Search names by case-insensitive substring
    Search {
        /// Query text; empty returns the whole category
        query: String,

        /// Category to search within (all, evergreen, beginner)
        #[arg(short, long, default_value = "all")]
        category: String,
    },

    /// List the names in a category
    List {
        /// Category to list (all, evergreen, beginner)
        #[arg(short, long, default_value = "all")]
        category: String,
    },

    /// Show catalog counts and the build report
    Status,
}

// =============================================================================
// EXECUTION
// =============================================================================

/// Build the catalog from the supplied documents, then run the
/// requested command against the immutable snapshot.
///
/// # Errors
/// Only structural faults: unreadable/invalid document files or an
/// empty catalog build. Query-side misses never error.
pub fn execute(cli: Cli) -> Result<(), MechlexError> {
    let (glossary, report) = loader::build_glossary(&cli.files)?;

    tracing::info!(
        records = report.records_built,
        conflicts = report.conflict_count(),
        stock_substitutions = report.stock_substitutions,
        skipped_invalid = report.skipped_invalid,
        "catalog built"
    );
    for conflict in &report.conflicts {
        tracing::debug!(
            key = conflict.key.as_str(),
            kept = conflict.kept.as_str(),
            discarded = conflict.discarded.as_str(),
            "precedence conflict resolved"
        );
    }

    match cli.command {
        Commands::Show { name } => commands::cmd_show(&glossary, &name, cli.json),
        Commands::Describe { name, fallback } => {
            commands::cmd_describe(&glossary, &name, fallback, cli.json);
        }
        Commands::Search { query, category } => {
            commands::cmd_search(&glossary, &query, &category, cli.json);
        }
        Commands::List { category } => commands::cmd_list(&glossary, &category, cli.json),
        Commands::Status => commands::cmd_status(&glossary, &report, cli.json),
    }

    Ok(())
}
