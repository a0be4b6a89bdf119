//! # Document Loader
//!
//! Reads raw upstream documents (JSON arrays of entries) from disk
//! and feeds them to the catalog builder, in command-line order.
//!
//! The core never touches files; this module is the boundary where
//! I/O errors exist.

use mechlex_core::{BuildReport, CatalogBuilder, Glossary, MechlexError, RawEntry};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum size for a raw document file (10 MB).
///
/// Prevents memory exhaustion from accidental large files; real
/// catalogs are a few hundred kilobytes.
const MAX_DOCUMENT_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), MechlexError> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        MechlexError::Io(format!("Cannot read metadata for '{}': {}", path.display(), e))
    })?;

    if metadata.len() > max_size {
        return Err(MechlexError::Io(format!(
            "File '{}' is {} bytes, exceeding the {} byte limit",
            path.display(),
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

// =============================================================================
// LOADING
// =============================================================================

/// Parse one raw document file: a JSON array of entries.
pub fn load_entries(path: &Path) -> Result<Vec<RawEntry>, MechlexError> {
    validate_file_size(path, MAX_DOCUMENT_FILE_SIZE)?;

    let text = std::fs::read_to_string(path)
        .map_err(|e| MechlexError::Io(format!("Cannot read '{}': {}", path.display(), e)))?;

    serde_json::from_str(&text)
        .map_err(|e| MechlexError::Parse(format!("Invalid document '{}': {}", path.display(), e)))
}

/// Load every document and build the catalog once.
///
/// Documents merge in command-line order; within and across files the
/// precedence rules decide what the catalog retains, so the order
/// only affects equal-tier ties.
///
/// # Errors
/// Structural faults only: unreadable file, invalid JSON, or a build
/// that produced no records.
pub fn build_glossary(paths: &[PathBuf]) -> Result<(Glossary, BuildReport), MechlexError> {
    let mut builder = CatalogBuilder::new();
    for path in paths {
        let entries = load_entries(path)?;
        tracing::debug!(file = %path.display(), entries = entries.len(), "ingesting document");
        builder.ingest_all(entries);
    }

    let (catalog, report) = builder.build()?;
    Ok((Glossary::new(catalog), report))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_entries(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(MechlexError::Io(_))));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, "not json at all").expect("write");

        let result = load_entries(file.path());
        assert!(matches!(result, Err(MechlexError::Parse(_))));
    }

    #[test]
    fn empty_document_list_fails_the_build() {
        let result = build_glossary(&[]);
        assert!(matches!(result, Err(MechlexError::EmptyCatalog)));
    }
}
