//! # mechlex-core
//!
//! The deterministic catalog engine for Mechlex - THE LOGIC.
//!
//! This crate implements the catalog resolution and query subsystem
//! for a glossary of game mechanics: how a term's canonical
//! description is chosen among competing sources, how identifiers are
//! normalized and deduplicated, how citation artifacts are stripped
//! from free text, and how the category/text/sort query algebra
//! behaves.
//!
//! ## Architectural Constraints
//!
//! - Pure Rust: no async, no network, no file I/O; callers hand the
//!   builder raw entries and receive an immutable snapshot back
//! - Deterministic: `BTreeMap`/`BTreeSet` only, single normalization
//!   function, single compiled citation pattern, no randomness
//! - Read-only after build: queries never mutate; a fresh build
//!   replaces the whole catalog
//! - Never invents: an unknown term is `None`, never a synthesized
//!   record

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod citation;
pub mod key;
pub mod query;
pub mod resolver;
pub mod surface;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    Category, Confidence, MechanicKey, MechanicRecord, MechlexError, QualityRating, Source,
};

// =============================================================================
// RE-EXPORTS: Catalog Engine
// =============================================================================

pub use catalog::{
    BuildReport, CatalogBuilder, MechanicCatalog, PrecedenceConflict, RawEntry, stock_description,
};
pub use query::{CategoryTag, search};
pub use resolver::resolve;
pub use surface::Glossary;
