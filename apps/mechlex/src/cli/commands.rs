//! # CLI Command Implementations
//!
//! Rendering for each subcommand, in text or `--json` form.
//!
//! Nothing here fails: a term with no catalog entry renders the
//! not-found state and the process still exits 0.

use crate::output::{DescriptionResponse, DetailsResponse, SearchResponse, StatusResponse};
use mechlex_core::{BuildReport, CategoryTag, Glossary, MechanicRecord};

/// Serialize a response, falling back to a diagnostic object if the
/// (infallible in practice) serialization ever fails.
fn print_json<T: serde::Serialize>(response: &T) {
    match serde_json::to_string_pretty(response) {
        Ok(json) => println!("{json}"),
        Err(e) => println!("{{\"error\":\"serialization failed: {e}\"}}"),
    }
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Show the full catalog record for a term.
pub fn cmd_show(glossary: &Glossary, name: &str, json: bool) {
    let record = glossary.details(name);

    if json {
        let response = match record {
            Some(record) => DetailsResponse::found(record.clone()),
            None => DetailsResponse::not_found(),
        };
        print_json(&response);
        return;
    }

    match record {
        Some(record) => print_record(record),
        None => println!("No details available yet for '{name}'."),
    }
}

fn print_record(record: &MechanicRecord) {
    println!("{}", record.name);
    println!("  Category:    {}", record.category.as_str());
    println!("  Source:      {}", record.source.as_str());
    println!("  Confidence:  {}", record.confidence.as_str());
    println!("  Evergreen:   {}", if record.is_evergreen { "yes" } else { "no" });
    println!(
        "  Beginner:    {}",
        if record.is_beginner_friendly { "yes" } else { "no" }
    );
    println!("  Description: {}", record.description);
    if let Some(fallback) = &record.fallback_description {
        println!("  Fallback:    {fallback}");
    }
    if let Some(url) = &record.wiki_url {
        println!("  Wiki:        {url}");
    }
}

// =============================================================================
// DESCRIBE COMMAND
// =============================================================================

/// Print the resolved, citation-free description for a term.
pub fn cmd_describe(glossary: &Glossary, name: &str, prefer_fallback: bool, json: bool) {
    let description = glossary.description(name, prefer_fallback);

    if json {
        let response = DescriptionResponse {
            name: name.to_string(),
            found: description.is_some(),
            official: glossary.is_official(name),
            description,
        };
        print_json(&response);
        return;
    }

    match description {
        Some(text) => println!("{text}"),
        None => println!("No details available yet for '{name}'."),
    }
}

// =============================================================================
// SEARCH COMMAND
// =============================================================================

/// Search names by case-insensitive substring within a category.
pub fn cmd_search(glossary: &Glossary, query: &str, category: &str, json: bool) {
    let tag = CategoryTag::parse(category);
    let results = glossary.search_in(tag, query);

    if json {
        print_json(&SearchResponse {
            category: tag.as_str().to_string(),
            query: query.trim().to_string(),
            count: results.len(),
            results,
        });
        return;
    }

    if results.is_empty() {
        println!("No mechanics match '{}'.", query.trim());
    } else {
        for name in results {
            println!("{name}");
        }
    }
}

// =============================================================================
// LIST COMMAND
// =============================================================================

/// List every name in a category.
pub fn cmd_list(glossary: &Glossary, category: &str, json: bool) {
    // Listing is searching with empty query text.
    cmd_search(glossary, "", category, json);
}

// =============================================================================
// STATUS COMMAND
// =============================================================================

/// Show catalog counts and build-report numbers.
pub fn cmd_status(glossary: &Glossary, report: &BuildReport, json: bool) {
    let catalog = glossary.catalog();
    let response = StatusResponse::new(
        catalog.len(),
        catalog.evergreen_count(),
        catalog.beginner_count(),
        report,
    );

    if json {
        print_json(&response);
        return;
    }

    println!("Catalog status:");
    println!("  Records:             {}", response.records);
    println!("  Evergreen:           {}", response.evergreen);
    println!("  Beginner-friendly:   {}", response.beginner);
    println!("  Conflicts resolved:  {}", response.conflicts_resolved);
    println!("  Stock substitutions: {}", response.stock_substitutions);
    println!("  Skipped invalid:     {}", response.skipped_invalid);
}
