//! Cross-field equality.

pub fn matches(value: &str, other_value: &str, label: &str, other_label: &str) -> Option<String> {
    (value != other_value).then(|| format!("{label} does not match {other_label}"))
}
