//! # JSON Output Types
//!
//! Response shapes for `--json` mode. The record itself serializes
//! with the catalog's camelCase wire schema; these wrappers add the
//! envelope fields a consuming layer needs (found flags, counts).

use mechlex_core::{BuildReport, MechanicRecord};
use serde::Serialize;

// =============================================================================
// DETAILS RESPONSE
// =============================================================================

/// Full-record lookup response.
///
/// `found: false` with no record is the NotFound state; it is a
/// normal response, not an error payload.
#[derive(Debug, Clone, Serialize)]
pub struct DetailsResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<MechanicRecord>,
}

impl DetailsResponse {
    #[must_use]
    pub fn found(record: MechanicRecord) -> Self {
        Self {
            found: true,
            record: Some(record),
        }
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self {
            found: false,
            record: None,
        }
    }
}

// =============================================================================
// DESCRIPTION RESPONSE
// =============================================================================

/// Resolved description response.
#[derive(Debug, Clone, Serialize)]
pub struct DescriptionResponse {
    pub name: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub official: bool,
}

// =============================================================================
// SEARCH / LIST RESPONSE
// =============================================================================

/// Search and category-listing response.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub category: String,
    pub query: String,
    pub count: usize,
    pub results: Vec<String>,
}

// =============================================================================
// STATUS RESPONSE
// =============================================================================

/// Catalog build summary response.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub records: usize,
    pub evergreen: usize,
    pub beginner: usize,
    pub conflicts_resolved: usize,
    pub stock_substitutions: usize,
    pub skipped_invalid: usize,
}

impl StatusResponse {
    #[must_use]
    pub fn new(records: usize, evergreen: usize, beginner: usize, report: &BuildReport) -> Self {
        Self {
            records,
            evergreen,
            beginner,
            conflicts_resolved: report.conflict_count(),
            stock_substitutions: report.stock_substitutions,
            skipped_invalid: report.skipped_invalid,
        }
    }
}
