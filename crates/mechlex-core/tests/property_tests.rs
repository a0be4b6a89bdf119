//! # Property-Based Tests
//!
//! Determinism and algebra invariants for the catalog engine,
//! verified over arbitrary inputs.

use mechlex_core::{
    CatalogBuilder, CategoryTag, MechanicCatalog, RawEntry, Source, citation, key, search,
};
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// GENERATORS
// =============================================================================

fn arb_source() -> impl Strategy<Value = Source> {
    prop_oneof![
        Just(Source::Official),
        Just(Source::EnhancedFallback),
        Just(Source::BasicFallback),
    ]
}

fn arb_entry() -> impl Strategy<Value = RawEntry> {
    ("[A-Za-z][A-Za-z '-]{0,20}", arb_source(), any::<bool>(), any::<bool>()).prop_map(
        |(name, source, evergreen, beginner)| RawEntry {
            name,
            description: Some("Some description text.".to_string()),
            fallback_description: None,
            category: None,
            is_evergreen: evergreen,
            is_beginner_friendly: beginner,
            source,
            confidence: None,
            wiki_url: None,
        },
    )
}

fn build(entries: Vec<RawEntry>) -> MechanicCatalog {
    let mut builder = CatalogBuilder::new();
    builder.ingest_all(entries);
    builder.build().expect("non-empty build").0
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Normalization is deterministic: two calls agree for any input.
    #[test]
    fn normalize_deterministic(name in ".*") {
        prop_assert_eq!(key::normalize(&name), key::normalize(&name));
    }

    /// Normalized keys only ever contain `[a-z0-9_]`, with no
    /// separator runs and no separators at the ends.
    #[test]
    fn normalize_canonical_form(name in ".*") {
        let normalized = key::normalize(&name);
        prop_assert!(
            normalized.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        );
        prop_assert!(!normalized.contains("__"));
        prop_assert!(!normalized.starts_with('_'));
        prop_assert!(!normalized.ends_with('_'));
    }

    /// Normalizing an already-normalized key changes nothing.
    #[test]
    fn normalize_idempotent(name in ".*") {
        let once = key::normalize(&name);
        prop_assert_eq!(key::normalize(&once), once);
    }

    /// Citation stripping is idempotent for any input.
    #[test]
    fn strip_idempotent(text in ".*") {
        let once = citation::strip(&text);
        prop_assert_eq!(citation::strip(&once), once);
    }

    /// Stripping never leaves a bracketed-integer marker behind.
    #[test]
    fn strip_removes_all_markers(text in ".*", n in 0u32..10000) {
        let seeded = format!("{text}[{n}] tail");
        let stripped = citation::strip(&seeded);
        let marker = format!("[{n}]");
        prop_assert!(!stripped.contains(&marker));
    }

    /// Search is case-insensitive: upper and lower query text agree.
    #[test]
    fn search_case_insensitive(
        entries in vec(arb_entry(), 1..20),
        query in "[a-zA-Z]{0,6}",
    ) {
        let catalog = build(entries);
        let lower = search(&catalog, CategoryTag::All, &query.to_lowercase());
        let upper = search(&catalog, CategoryTag::All, &query.to_uppercase());
        prop_assert_eq!(lower, upper);
    }

    /// Every category result set is a subset of the universe, and
    /// every result set is sorted.
    #[test]
    fn search_subset_and_sorted(
        entries in vec(arb_entry(), 1..20),
        query in "[a-zA-Z]{0,4}",
    ) {
        let catalog = build(entries);
        let universe = search(&catalog, CategoryTag::All, "");

        for tag in [CategoryTag::All, CategoryTag::Evergreen, CategoryTag::Beginner] {
            let results = search(&catalog, tag, &query);
            let mut sorted = results.clone();
            sorted.sort_unstable();
            prop_assert_eq!(&results, &sorted);
            for name in &results {
                prop_assert!(universe.contains(name));
            }
        }
    }

    /// The retained record for a contested key is independent of the
    /// order in which sources were merged.
    #[test]
    fn merge_order_independent(entries in vec(arb_entry(), 1..12)) {
        let forward = build(entries.clone());
        let reversed = build(entries.into_iter().rev().collect());

        for name in forward.all_names() {
            let a = forward.get_by_name(name).expect("record");
            let b = reversed.get_by_name(name).expect("record");
            prop_assert_eq!(a.source, b.source);
        }
        prop_assert_eq!(forward.len(), reversed.len());
    }
}
