//! # Query Engine
//!
//! Composes category filtering, free-text filtering, and
//! deterministic sort ordering into a single query contract.
//!
//! - Category filter always runs before the text filter; text search
//!   never spans outside the selected category
//! - Text matching is plain case-insensitive substring containment,
//!   no fuzzy matching, no tokenization
//! - Results are always sorted ordinally (locale-independent)
//! - Nothing here errors: empty query text, unknown tags, and zero
//!   matches all degrade to ordinary results

use crate::catalog::MechanicCatalog;
use std::fmt;

// =============================================================================
// CATEGORY TAG
// =============================================================================

/// The category dimension of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryTag {
    /// The full universe of names.
    #[default]
    All,
    /// The small fixed core-keyword subset.
    Evergreen,
    /// The curated subset surfaced to new users.
    Beginner,
}

impl CategoryTag {
    /// Parse a caller-supplied tag.
    ///
    /// Unknown tags degrade to `All`; query input is never rejected.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "evergreen" => Self::Evergreen,
            "beginner" => Self::Beginner,
            _ => Self::All,
        }
    }

    /// Wire/display tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Evergreen => "evergreen",
            Self::Beginner => "beginner",
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// SEARCH
// =============================================================================

/// Run a catalog query: category base set, then substring filter,
/// then ordinal sort.
///
/// Empty (or whitespace-only) `query_text` returns the whole
/// category-filtered set, still sorted. A query matching nothing
/// returns an empty vec, never an error.
#[must_use]
pub fn search(catalog: &MechanicCatalog, tag: CategoryTag, query_text: &str) -> Vec<String> {
    let base = catalog.names_by_category(tag);

    let needle = query_text.trim().to_lowercase();
    let mut names: Vec<String> = if needle.is_empty() {
        base.into_iter().map(ToString::to_string).collect()
    } else {
        base.into_iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .map(ToString::to_string)
            .collect()
    };

    // names_by_category already sorts, but the contract lives here:
    // every result set leaves this function ordinally ordered.
    names.sort_unstable();
    names
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogBuilder, RawEntry};
    use crate::types::Source;

    fn catalog() -> MechanicCatalog {
        let mut builder = CatalogBuilder::new();
        for (name, evergreen, beginner) in [
            ("Flying", true, true),
            ("Reach", true, false),
            ("Trample", true, true),
            ("Cascade", false, false),
            ("Storm", false, false),
        ] {
            builder.ingest_entry(RawEntry {
                name: name.to_string(),
                description: Some(format!("{name} does something.")),
                fallback_description: None,
                category: None,
                is_evergreen: evergreen,
                is_beginner_friendly: beginner,
                source: Source::Official,
                confidence: None,
                wiki_url: None,
            });
        }
        builder.build().expect("build").0
    }

    #[test]
    fn empty_query_returns_sorted_universe() {
        let catalog = catalog();
        assert_eq!(
            search(&catalog, CategoryTag::All, ""),
            vec!["Cascade", "Flying", "Reach", "Storm", "Trample"]
        );
    }

    #[test]
    fn whitespace_query_is_empty_query() {
        let catalog = catalog();
        assert_eq!(
            search(&catalog, CategoryTag::All, "   "),
            search(&catalog, CategoryTag::All, "")
        );
    }

    #[test]
    fn substring_filter_is_case_insensitive() {
        let catalog = catalog();
        let upper = search(&catalog, CategoryTag::All, "FLY");
        let lower = search(&catalog, CategoryTag::All, "fly");
        assert_eq!(upper, lower);
        assert_eq!(upper, vec!["Flying"]);
    }

    #[test]
    fn substring_matches_anywhere_in_the_name() {
        let catalog = catalog();
        assert_eq!(search(&catalog, CategoryTag::All, "tr"), vec!["Trample"]);
        assert_eq!(search(&catalog, CategoryTag::All, "orm"), vec!["Storm"]);
    }

    #[test]
    fn zero_matches_is_an_empty_result_not_an_error() {
        let catalog = catalog();
        assert!(search(&catalog, CategoryTag::All, "zzzz").is_empty());
    }

    #[test]
    fn category_filter_runs_before_text_filter() {
        let catalog = catalog();
        // "Cascade" contains "as" but is not evergreen, so the
        // evergreen query must not see it.
        let results = search(&catalog, CategoryTag::Evergreen, "as");
        assert!(results.is_empty());

        let all = search(&catalog, CategoryTag::All, "as");
        assert_eq!(all, vec!["Cascade"]);
    }

    #[test]
    fn category_results_are_subsets_of_all() {
        let catalog = catalog();
        let universe = search(&catalog, CategoryTag::All, "");
        for tag in [CategoryTag::Evergreen, CategoryTag::Beginner] {
            for name in search(&catalog, tag, "") {
                assert!(universe.contains(&name));
            }
        }
    }

    #[test]
    fn unknown_tags_degrade_to_all() {
        assert_eq!(CategoryTag::parse("all"), CategoryTag::All);
        assert_eq!(CategoryTag::parse("evergreen"), CategoryTag::Evergreen);
        assert_eq!(CategoryTag::parse("BEGINNER"), CategoryTag::Beginner);
        assert_eq!(CategoryTag::parse("planeswalker"), CategoryTag::All);
        assert_eq!(CategoryTag::parse(""), CategoryTag::All);
    }

    #[test]
    fn results_are_always_sorted() {
        let catalog = catalog();
        let results = search(&catalog, CategoryTag::All, "a");
        let mut sorted = results.clone();
        sorted.sort_unstable();
        assert_eq!(results, sorted);
    }
}
