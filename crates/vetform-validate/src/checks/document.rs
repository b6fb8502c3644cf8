//! Document-number format conditioned on document type.

/// CC (cédula de ciudadanía) is strictly numeric. CE (cédula de
/// extranjería) and passports accept letters. Unknown or not-yet-selected
/// types fall back to the permissive alphanumeric shape so the user is not
/// blamed for a field they have not reached.
pub fn check(value: &str, doc_type: &str, label: &str) -> Option<String> {
    match doc_type.trim().to_uppercase().as_str() {
        "CC" => {
            let count = value.chars().count();
            let numeric = value.chars().all(|c| c.is_ascii_digit());
            if !numeric || !(6..=10).contains(&count) {
                return Some(format!("{label} must be 6 to 10 digits for document type CC"));
            }
            None
        }
        _ => {
            let count = value.chars().count();
            let alnum = value.chars().all(|c| c.is_ascii_alphanumeric());
            if !alnum || !(6..=12).contains(&count) {
                return Some(format!("{label} must be 6 to 12 letters or digits"));
            }
            None
        }
    }
}
