//! National phone-number format.

use vetform_rules::PhonePolicy;

/// Validate a phone number against the national numbering policy.
///
/// Separators (spaces, dashes, dots, parentheses) are ignored; an optional
/// `+<country code>` prefix is stripped before the digit checks.
pub fn check(value: &str, policy: &PhonePolicy, label: &str) -> Option<String> {
    let compact: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
        .collect();

    let national = match compact.strip_prefix('+') {
        Some(rest) => match rest.strip_prefix(policy.country_code.as_str()) {
            Some(national) => national,
            None => {
                return Some(format!(
                    "{label} has an unsupported country code (expected +{})",
                    policy.country_code
                ));
            }
        },
        None => compact.as_str(),
    };

    if !national.chars().all(|c| c.is_ascii_digit()) {
        return Some(format!("{label} must contain only digits"));
    }
    if national.chars().count() != policy.national_digits {
        return Some(format!(
            "{label} must have exactly {} digits",
            policy.national_digits
        ));
    }
    if !policy
        .prefixes
        .iter()
        .any(|prefix| national.starts_with(prefix.as_str()))
    {
        return Some(format!(
            "{label} does not start with a recognized area prefix"
        ));
    }
    None
}
