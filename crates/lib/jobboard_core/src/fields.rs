//! Presence checks for submitted fields.

/// Keep a submitted value only if it has non-whitespace content.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
