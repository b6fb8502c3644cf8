//! Forbidden-class sanitation hints.
//!
//! These checks surface as warnings only. They are a UX nudge against
//! pasting markup or query fragments into free-text fields; authoritative
//! sanitization happens server-side with parameterized queries and output
//! encoding.

use std::sync::LazyLock;

use regex::Regex;

static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?[a-z][^>]*>").expect("markup pattern compiles"));

static SQL_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)('|--|;|/\*|\*/|\b(select|insert|update|delete|drop|union|exec)\b)")
        .expect("sql pattern compiles")
});

pub fn check_markup(value: &str, label: &str) -> Option<String> {
    MARKUP
        .is_match(value)
        .then(|| format!("{label} must not contain HTML markup"))
}

pub fn check_sql_meta(value: &str, label: &str) -> Option<String> {
    SQL_META
        .is_match(value)
        .then(|| format!("{label} contains characters that are not allowed"))
}
