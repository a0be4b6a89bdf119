//! # Description Resolution
//!
//! Chooses which candidate text a caller sees for a record, under an
//! explicit preference mode. Citation markers are stripped from
//! whatever text wins.
//!
//! Resolution never runs for a missing record: NotFound is the
//! catalog's concern and surfaces as `None` before this module is
//! reached.

use crate::citation;
use crate::types::MechanicRecord;

/// Resolve the display description for `record`.
///
/// - With `prefer_fallback` and a non-empty `fallback_description`,
///   the fallback text wins (sanitized).
/// - Otherwise the primary `description` wins (sanitized). An
///   `Official` record is therefore never superseded by its fallback
///   unless the caller asked for it explicitly.
///
/// Pure and deterministic: no I/O, no randomness.
#[must_use]
pub fn resolve(record: &MechanicRecord, prefer_fallback: bool) -> String {
    if prefer_fallback {
        if let Some(fallback) = record.fallback_description.as_deref() {
            if !fallback.is_empty() {
                return citation::strip(fallback);
            }
        }
    }

    citation::strip(&record.description)
}

// =============================================================================
// TESTS
// =============================================================================
