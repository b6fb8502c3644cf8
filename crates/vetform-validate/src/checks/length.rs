//! Character-count bounds.

/// Inclusive min/max on `chars().count()`, not bytes, so accented names
/// are measured the way the user sees them.
pub fn check(value: &str, min: usize, max: usize, label: &str) -> Option<String> {
    let count = value.chars().count();
    if count < min {
        return Some(format!("{label} must be at least {min} characters"));
    }
    if count > max {
        return Some(format!("{label} must be at most {max} characters"));
    }
    None
}
