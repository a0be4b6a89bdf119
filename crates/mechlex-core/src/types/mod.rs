//! # Core Type Definitions
//!
//! This module contains all core types for the Mechlex deterministic
//! catalog substrate:
//! - Lookup identifier (`MechanicKey`)
//! - Provenance and trust labels (`Source`, `Confidence`, `QualityRating`)
//! - Category tags (`Category`)
//! - The catalog record (`MechanicRecord`)
//! - Error types (`MechlexError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Implement `Ord` where they participate in `BTreeMap`/`BTreeSet` keys
//! - Carry serde derives with the wire names fixed (camelCase fields,
//!   snake_case tags), so serialized form is stable across builds

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// LOOKUP KEY
// =============================================================================

/// Canonical lookup identifier for a mechanic, derived from its display
/// name by [`crate::key::normalize`].
///
/// Two names that differ only in case or punctuation normalize to the
/// same key; the catalog deduplicates on this type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MechanicKey(String);

impl MechanicKey {
    /// Derive the key for a display name.
    ///
    /// This is the ONLY way a key is produced; construction and lookup
    /// paths both go through here so they can never disagree.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(crate::key::normalize(name))
    }

    /// Get the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty key derives only from a name with no alphanumerics.
    /// Such entries are rejected at build time.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// PROVENANCE & TRUST LABELS
// =============================================================================

/// Provenance tag for a description, ordered by precedence.
///
/// Variant order IS the precedence lattice: `Official` compares
/// greater than `EnhancedFallback`, which compares greater than
/// `BasicFallback`. Merge resolution uses this `Ord` directly instead
/// of string comparisons.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Scraped/derived text with no authoritative backing.
    BasicFallback,
    /// Curated fallback text, better than basic but not authoritative.
    EnhancedFallback,
    /// Authoritative rules text.
    Official,
}

impl Source {
    /// Wire/display tag for this source.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::EnhancedFallback => "enhanced_fallback",
            Self::BasicFallback => "basic_fallback",
        }
    }

    /// Default confidence label for text of this provenance.
    #[must_use]
    pub fn default_confidence(self) -> Confidence {
        match self {
            Self::Official => Confidence::High,
            Self::EnhancedFallback => Confidence::Medium,
            Self::BasicFallback => Confidence::Low,
        }
    }

    /// Default quality rating for text of this provenance.
    #[must_use]
    pub fn default_quality(self) -> QualityRating {
        match self {
            Self::Official => QualityRating::Excellent,
            Self::EnhancedFallback => QualityRating::Good,
            Self::BasicFallback => QualityRating::Basic,
        }
    }
}

/// Coarse trust label exposed to callers.
///
/// Informational only: correlated with [`Source`] but never consulted
/// by filtering or resolution logic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Wire/display tag for this confidence level.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Coarse quality label exposed to callers. Informational only.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum QualityRating {
    Basic,
    Good,
    Excellent,
}

// =============================================================================
// CATEGORY
// =============================================================================

/// Category tag from a small but open set.
///
/// The known variants cover the curated taxonomy; anything else rides
/// through as `Other` so upstream documents can introduce new tags
/// without a schema change.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Combat,
    Protection,
    Triggered,
    CostReduction,
    Other(String),
}

impl Category {
    /// Wire/display tag for this category.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Combat => "combat",
            Self::Protection => "protection",
            Self::Triggered => "triggered",
            Self::CostReduction => "cost_reduction",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "combat" => Self::Combat,
            "protection" => Self::Protection,
            "triggered" => Self::Triggered,
            "cost_reduction" => Self::CostReduction,
            _ => Self::Other(tag),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Other("other".to_string())
    }
}

// =============================================================================
// MECHANIC RECORD
// =============================================================================

/// One catalog entry per domain term.
///
/// Built once at catalog-build time and read-only thereafter. The
/// record's key is not stored; it derives deterministically from
/// `name` via [`MechanicKey::from_name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MechanicRecord {
    /// Canonical human-readable term, case and punctuation preserved.
    pub name: String,
    /// Primary candidate text from the highest-precedence source known.
    /// Never empty: build substitutes a stock sentence when no source
    /// text exists.
    pub description: String,
    /// Secondary candidate text, present when a non-authoritative
    /// candidate is known alongside the primary one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fallback_description: Option<String>,
    /// Category tag.
    pub category: Category,
    /// Member of the small fixed core-keyword subset.
    pub is_evergreen: bool,
    /// Member of the curated subset surfaced to new users.
    pub is_beginner_friendly: bool,
    /// Provenance of `description`.
    pub source: Source,
    /// Informational trust label.
    pub confidence: Confidence,
    /// Informational quality label.
    pub quality_rating: QualityRating,
    /// Reference link; opaque passthrough, never parsed.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub wiki_url: Option<String>,
}

impl MechanicRecord {
    /// Derive this record's lookup key from its name.
    #[must_use]
    pub fn key(&self) -> MechanicKey {
        MechanicKey::from_name(&self.name)
    }

    /// Whether the primary description is authoritative.
    #[must_use]
    pub fn is_official(&self) -> bool {
        self.source == Source::Official
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Mechlex system.
///
/// Query-time operations never produce these: unknown names, empty
/// query text, and unknown category tags all degrade to `None`/empty
/// results. Only construction-time structural faults are errors.
#[derive(Debug, Error)]
pub enum MechlexError {
    /// An upstream document could not be read.
    #[error("I/O error: {0}")]
    Io(String),

    /// An upstream document could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The catalog build produced no records at all.
    #[error("Catalog build produced no records")]
    EmptyCatalog,
}

// =============================================================================
// TESTS
// =============================================================================
