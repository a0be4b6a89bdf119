//! # Glossary Surface
//!
//! The caller-facing query surface consumed by presentation layers.
//!
//! A [`Glossary`] wraps the immutable catalog snapshot in an `Arc` so
//! concurrent callers share one table, never a copy. Every operation
//! is synchronous and pure; absent data surfaces as `None` or an
//! empty vec, never a fault.

use crate::catalog::MechanicCatalog;
use crate::query::{self, CategoryTag};
use crate::resolver;
use crate::types::MechanicRecord;
use std::sync::Arc;

/// Read-only query facade over a built catalog.
///
/// Cloning a `Glossary` clones the `Arc`, not the table.
#[derive(Debug, Clone)]
pub struct Glossary {
    catalog: Arc<MechanicCatalog>,
}

impl Glossary {
    /// Wrap a freshly built catalog.
    #[must_use]
    pub fn new(catalog: MechanicCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// The underlying snapshot.
    #[must_use]
    pub fn catalog(&self) -> &MechanicCatalog {
        &self.catalog
    }

    /// Full record for a term, or `None` when the catalog has no
    /// entry (the caller renders a "details not available yet" state).
    #[must_use]
    pub fn details(&self, name: &str) -> Option<&MechanicRecord> {
        self.catalog.get_by_name(name)
    }

    /// Resolved, citation-free description for a term.
    ///
    /// Fallback text is returned only when `prefer_fallback` is set
    /// and the record carries one. `None` when the term is unknown.
    #[must_use]
    pub fn description(&self, name: &str, prefer_fallback: bool) -> Option<String> {
        self.catalog
            .get_by_name(name)
            .map(|record| resolver::resolve(record, prefer_fallback))
    }

    /// Whether the term's primary description is authoritative.
    /// Unknown terms are not official.
    #[must_use]
    pub fn is_official(&self, name: &str) -> bool {
        self.catalog
            .get_by_name(name)
            .is_some_and(MechanicRecord::is_official)
    }

    /// Case-insensitive substring search over the whole universe,
    /// sorted ordinally.
    #[must_use]
    pub fn search(&self, query_text: &str) -> Vec<String> {
        query::search(&self.catalog, CategoryTag::All, query_text)
    }

    /// Search within one category tag (unknown tags degrade to all).
    #[must_use]
    pub fn search_in(&self, tag: CategoryTag, query_text: &str) -> Vec<String> {
        query::search(&self.catalog, tag, query_text)
    }

    /// Names in a category, by caller-supplied tag string.
    #[must_use]
    pub fn by_category(&self, tag: &str) -> Vec<String> {
        self.catalog
            .names_by_category(CategoryTag::parse(tag))
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
