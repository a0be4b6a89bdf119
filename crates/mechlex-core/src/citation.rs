//! # Citation Sanitization
//!
//! Strips bracketed numeric citation markers (wiki-style `[1]`,
//! `[2][3]`, ...) from description text before it reaches callers.
//!
//! One compiled pattern, no locale dependency, pure functions only.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// One or more adjacent bracketed positive integers, together with any
/// whitespace immediately before the run. Consuming the leading
/// whitespace keeps "creatures [1][2] fly" from collapsing to a
/// double space.
static CITATION_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(?:\[\d+\])+").expect("citation pattern is valid"));

/// Remove every citation-marker run from `text`.
///
/// Surrounding text and whitespace are otherwise untouched. Idempotent:
/// stripping twice yields the same output as stripping once.
///
/// ```
/// use mechlex_core::citation::strip;
///
/// assert_eq!(strip("Flying creatures [1][2] fly."), "Flying creatures fly.");
/// assert_eq!(strip("No markers here."), "No markers here.");
/// ```
#[must_use]
pub fn strip(text: &str) -> String {
    // Removal can splice a new marker together out of nested brackets
    // ("[12[9]4]" -> "[124]"), so run to a fixpoint. Marker-free text
    // costs exactly one pass.
    let mut current = text.to_string();
    loop {
        match CITATION_MARKERS.replace_all(&current, "") {
            Cow::Borrowed(_) => return current,
            Cow::Owned(stripped) => current = stripped,
        }
    }
}

/// [`strip`] lifted over absent text: `None` passes through unchanged
/// (it stays `None`, it does not become an empty string).
#[must_use]
pub fn strip_optional(text: Option<&str>) -> Option<String> {
    text.map(strip)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_single_marker() {
        assert_eq!(strip("Deathtouch is lethal.[4]"), "Deathtouch is lethal.");
    }

    #[test]
    fn removes_adjacent_marker_run() {
        assert_eq!(
            strip("Flying creatures [1][2] fly."),
            "Flying creatures fly."
        );
    }

    #[test]
    fn removes_multiple_separate_runs() {
        assert_eq!(
            strip("Haste[1] ignores summoning sickness[2][3]."),
            "Haste ignores summoning sickness."
        );
    }

    #[test]
    fn leaves_marker_free_text_untouched() {
        assert_eq!(strip("No markers here."), "No markers here.");
        assert_eq!(strip(""), "");
    }

    #[test]
    fn leaves_non_citation_brackets_untouched() {
        // Only bracketed positive integers are markers.
        assert_eq!(strip("See [note] and [1a]."), "See [note] and [1a].");
        assert_eq!(strip("Empty [] stays."), "Empty [] stays.");
    }

    #[test]
    fn nested_brackets_strip_to_fixpoint() {
        assert_eq!(strip("[12[9]4]"), "");
        assert_eq!(strip("kept [1[2]3] text"), "kept text");
    }

    #[test]
    fn idempotent() {
        let once = strip("Ward [12] taxes[3] spells.");
        let twice = strip(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn optional_none_passes_through() {
        assert_eq!(strip_optional(None), None);
    }

    #[test]
    fn optional_some_is_stripped() {
        assert_eq!(
            strip_optional(Some("Reach [7] blocks fliers.")),
            Some("Reach blocks fliers.".to_string())
        );
    }
}
