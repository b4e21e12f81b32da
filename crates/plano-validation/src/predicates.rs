//! Shared emptiness and length predicates.
//!
//! These two are the only primitives; every section rule is built by
//! composing them per-field.

/// True iff the string contains nothing but whitespace.
///
/// Missing JSON fields deserialize to `""` via `#[serde(default)]`, so this
/// single check covers absent, null, and whitespace-only values.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// True iff the trimmed value has at least `min` characters.
///
/// Counted in chars, not bytes: the documents are Portuguese text and
/// accented letters must count as one.
pub fn has_minimum_length(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}
