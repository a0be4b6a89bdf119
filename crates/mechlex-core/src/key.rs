//! # Key Normalization
//!
//! The single normalization function mapping a human-readable term
//! name to its stable lookup key.
//!
//! There is exactly ONE separator convention. Every construction and
//! lookup path derives keys through [`normalize`] (via
//! [`crate::MechanicKey::from_name`]); no call site applies its own
//! variant, so a name can never land under two different keys.

/// The single separator used between alphanumeric runs in a key.
pub const KEY_SEPARATOR: char = '_';

/// Normalize a display name into its canonical lookup key.
///
/// Lower-cases the input and replaces every run of characters outside
/// `[a-z0-9]` with a single `_`, trimming separators from both ends.
///
/// Pure and total: the empty string (and any name with no
/// alphanumerics) maps to the empty key.
///
/// ```
/// use mechlex_core::key::normalize;
///
/// assert_eq!(normalize("First Strike"), "first_strike");
/// assert_eq!(normalize("Will-o'-the-Wisp"), "will_o_the_wisp");
/// assert_eq!(normalize("FLYING"), "flying");
/// ```
#[must_use]
pub fn normalize(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !key.is_empty() {
                key.push(KEY_SEPARATOR);
            }
            pending_separator = false;
            key.push(ch.to_ascii_lowercase());
        } else {
            // Runs of non-alphanumerics collapse to one separator,
            // and leading/trailing runs vanish entirely.
            pending_separator = true;
        }
    }

    key
}

// =============================================================================
// TESTS
// =============================================================================
