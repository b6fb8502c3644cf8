//! Required-field presence.

/// `value` is expected to be trimmed by the caller.
pub fn check(value: &str, label: &str) -> Option<String> {
    value.is_empty().then(|| format!("{label} is required"))
}
