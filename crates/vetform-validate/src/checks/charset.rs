//! Required character-class constraints.

use vetform_rules::CharClassKind;

pub fn check(value: &str, kind: CharClassKind, label: &str) -> Option<String> {
    let ok = match kind {
        CharClassKind::LettersAndSpaces => value
            .chars()
            .all(|c| c.is_alphabetic() || c.is_whitespace()),
        CharClassKind::DigitsOnly => value.chars().all(|c| c.is_ascii_digit()),
        CharClassKind::Alphanumeric => value.chars().all(char::is_alphanumeric),
        CharClassKind::Username => value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')),
    };
    if ok {
        return None;
    }
    Some(format!("{label} {}", description(kind)))
}

fn description(kind: CharClassKind) -> &'static str {
    match kind {
        CharClassKind::LettersAndSpaces => "must contain only letters and spaces",
        CharClassKind::DigitsOnly => "must contain only digits",
        CharClassKind::Alphanumeric => "must contain only letters and digits",
        CharClassKind::Username => "may contain only letters, digits, '.', '_' and '-'",
    }
}
