//! # Mechanic Catalog
//!
//! The in-memory record collection and its builder.
//!
//! Construction merges raw upstream entries by source precedence
//! (`official > enhanced_fallback > basic_fallback`); once built, the
//! catalog is an immutable read-only snapshot for the lifetime of the
//! process. Queries never mutate it; a fresh build replaces the whole
//! set.
//!
//! All storage uses `BTreeMap`/`BTreeSet` for deterministic iteration.

use crate::query::CategoryTag;
use crate::types::{
    Category, Confidence, MechanicKey, MechanicRecord, MechlexError, Source,
};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// RAW UPSTREAM ENTRY
// =============================================================================

/// One entry of a raw upstream document, before merging.
///
/// Only `name` and `source` are required; everything else has a
/// recovery path (stock description, default category, confidence
/// derived from the source tier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    /// Display name of the term.
    pub name: String,
    /// Candidate description text, if the upstream document had any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Explicit secondary candidate text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_description: Option<String>,
    /// Category tag; absent maps to `other`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Core-keyword subset membership.
    #[serde(default)]
    pub is_evergreen: bool,
    /// Beginner-friendly subset membership.
    #[serde(default)]
    pub is_beginner_friendly: bool,
    /// Provenance tier of this entry.
    pub source: Source,
    /// Trust label; absent derives from `source`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    /// Reference link, passed through opaquely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiki_url: Option<String>,
}

/// Stock sentence substituted when an upstream entry carries no
/// description text at all (MalformedSource recovery).
#[must_use]
pub fn stock_description(name: &str) -> String {
    format!("No description is available yet for {name}.")
}

// =============================================================================
// BUILD REPORT
// =============================================================================

/// A precedence conflict resolved during the merge: two sources
/// claimed the same key, the lower tier was discarded.
///
/// Not an error condition, just the deterministic resolution rule,
/// recorded so the app layer can log it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrecedenceConflict {
    /// The contested key.
    pub key: MechanicKey,
    /// The tier whose text the catalog retains.
    pub kept: Source,
    /// The tier whose text was discarded.
    pub discarded: Source,
}

/// Observability summary of a catalog build.
///
/// The core stays logging-framework-free; the app layer reads this
/// report and emits whatever tracing events it wants.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
    /// Records in the finished catalog.
    pub records_built: usize,
    /// Entries rejected outright (name with no alphanumerics).
    pub skipped_invalid: usize,
    /// Entries whose missing description was replaced by the stock
    /// sentence.
    pub stock_substitutions: usize,
    /// Same-key collisions resolved by precedence.
    pub conflicts: Vec<PrecedenceConflict>,
}

impl BuildReport {
    /// Number of precedence conflicts resolved during the build.
    #[must_use]
    pub fn conflict_count(&self) -> usize {
        self.conflicts.len()
    }
}

// =============================================================================
// CATALOG BUILDER
// =============================================================================

/// Merges raw upstream entries into a catalog by source precedence.
///
/// The builder is the only phase that mutates state; [`Self::build`]
/// consumes it and hands out the immutable snapshot. One bad entry
/// never aborts the build: malformed input is recovered or skipped
/// and counted in the [`BuildReport`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    records: BTreeMap<MechanicKey, MechanicRecord>,
    report: BuildReport,
}

impl CatalogBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest every entry of an upstream document, in order.
    pub fn ingest_all<I: IntoIterator<Item = RawEntry>>(&mut self, entries: I) {
        for entry in entries {
            self.ingest_entry(entry);
        }
    }

    /// Ingest a single raw entry, merging by precedence.
    ///
    /// Resolution rules for an already-present key:
    /// - higher tier arriving later REPLACES the record; the displaced
    ///   text is salvaged as `fallback_description` when the incoming
    ///   entry has none of its own
    /// - lower or equal tier arriving later is DISCARDED
    ///
    /// Either way the conflict is recorded in the report, and the
    /// retained content is independent of merge order.
    pub fn ingest_entry(&mut self, entry: RawEntry) {
        let key = MechanicKey::from_name(&entry.name);
        if key.is_empty() {
            self.report.skipped_invalid = self.report.skipped_invalid.saturating_add(1);
            return;
        }

        let incoming = self.record_from_entry(entry);

        match self.records.entry(key.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(incoming);
            }
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                if incoming.source > existing.source {
                    self.report.conflicts.push(PrecedenceConflict {
                        key,
                        kept: incoming.source,
                        discarded: existing.source,
                    });

                    let mut winner = incoming;
                    let displaced = existing.description.clone();
                    if winner.fallback_description.is_none()
                        && displaced != winner.description
                        && displaced != stock_description(&existing.name)
                    {
                        winner.fallback_description = Some(displaced);
                    }
                    *existing = winner;
                } else {
                    // Equal tier: first writer wins. Lower tier:
                    // discarded, not overwritten.
                    self.report.conflicts.push(PrecedenceConflict {
                        key,
                        kept: existing.source,
                        discarded: incoming.source,
                    });
                }
            }
        }
    }

    /// Finish the merge and hand out the immutable snapshot.
    ///
    /// # Errors
    /// `MechlexError::EmptyCatalog` when no entry survived ingestion;
    /// an empty catalog is the one structural build fault.
    pub fn build(mut self) -> Result<(MechanicCatalog, BuildReport), MechlexError> {
        if self.records.is_empty() {
            return Err(MechlexError::EmptyCatalog);
        }

        let mut evergreen = BTreeSet::new();
        let mut beginner = BTreeSet::new();
        for (key, record) in &self.records {
            if record.is_evergreen {
                evergreen.insert(key.clone());
            }
            if record.is_beginner_friendly {
                beginner.insert(key.clone());
            }
        }

        self.report.records_built = self.records.len();
        let catalog = MechanicCatalog {
            records: self.records,
            evergreen,
            beginner,
        };
        Ok((catalog, self.report))
    }

    /// Normalize a raw entry into a full record, recovering missing
    /// fields.
    fn record_from_entry(&mut self, entry: RawEntry) -> MechanicRecord {
        let description = match entry.description.filter(|text| !text.trim().is_empty()) {
            Some(text) => text,
            None => {
                self.report.stock_substitutions =
                    self.report.stock_substitutions.saturating_add(1);
                stock_description(&entry.name)
            }
        };

        MechanicRecord {
            description,
            fallback_description: entry
                .fallback_description
                .filter(|text| !text.trim().is_empty()),
            category: entry.category.unwrap_or_default(),
            is_evergreen: entry.is_evergreen,
            is_beginner_friendly: entry.is_beginner_friendly,
            confidence: entry
                .confidence
                .unwrap_or_else(|| entry.source.default_confidence()),
            quality_rating: entry.source.default_quality(),
            source: entry.source,
            wiki_url: entry.wiki_url,
            name: entry.name,
        }
    }
}

// =============================================================================
// MECHANIC CATALOG
// =============================================================================

/// The immutable record collection.
///
/// Lookups normalize through the same [`MechanicKey::from_name`] the
/// builder used, so construction and lookup can never disagree on
/// keys. Share freely across threads behind an `Arc`; nothing here
/// mutates after build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MechanicCatalog {
    records: BTreeMap<MechanicKey, MechanicRecord>,
    evergreen: BTreeSet<MechanicKey>,
    beginner: BTreeSet<MechanicKey>,
}

impl MechanicCatalog {
    /// Look up a record by display name.
    ///
    /// `None` is the NotFound signal: callers render a "no data yet"
    /// state, nothing throws.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&MechanicRecord> {
        self.records.get(&MechanicKey::from_name(name))
    }

    /// Number of records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records. Never true for a catalog
    /// produced by [`CatalogBuilder::build`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in deterministic key order.
    pub fn records(&self) -> impl Iterator<Item = &MechanicRecord> {
        self.records.values()
    }

    /// The full universe of display names, sorted ordinally.
    #[must_use]
    pub fn all_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.values().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Display names in one category, sorted ordinally.
    ///
    /// `All` is the full universe; `Evergreen` and `Beginner` are the
    /// curated subsets, each independent of the other.
    #[must_use]
    pub fn names_by_category(&self, tag: CategoryTag) -> Vec<&str> {
        match tag {
            CategoryTag::All => self.all_names(),
            CategoryTag::Evergreen => self.subset_names(&self.evergreen),
            CategoryTag::Beginner => self.subset_names(&self.beginner),
        }
    }

    /// Number of evergreen records.
    #[must_use]
    pub fn evergreen_count(&self) -> usize {
        self.evergreen.len()
    }

    /// Number of beginner-friendly records.
    #[must_use]
    pub fn beginner_count(&self) -> usize {
        self.beginner.len()
    }

    fn subset_names(&self, keys: &BTreeSet<MechanicKey>) -> Vec<&str> {
        let mut names: Vec<&str> = keys
            .iter()
            .filter_map(|key| self.records.get(key))
            .map(|record| record.name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}

// =============================================================================
// TESTS
// =============================================================================
