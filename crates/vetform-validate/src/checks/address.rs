//! Physical address structure.
//!
//! Colombian-style addresses name a street type, a street number, and a
//! unit separated by `#` or `-`, e.g. "Calle 10 # 5-23".

const STREET_TOKENS: &[&str] = &[
    "calle",
    "cl",
    "carrera",
    "cra",
    "kra",
    "avenida",
    "av",
    "transversal",
    "tv",
    "diagonal",
    "dg",
    "circular",
    "autopista",
    "via",
    "manzana",
    "mz",
    "kilometro",
    "km",
];

pub fn check(value: &str, label: &str) -> Option<String> {
    let lower = value.to_lowercase();
    let has_street_token = lower
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .any(|word| STREET_TOKENS.contains(&word));
    if !has_street_token {
        return Some(format!(
            "{label} must name a street type (calle, carrera, avenida, ...)"
        ));
    }
    if !lower.chars().any(|c| c.is_ascii_digit()) {
        return Some(format!("{label} must include a street number"));
    }
    if !lower.contains('#') && !lower.contains('-') {
        return Some(format!("{label} must separate the unit with '#' or '-'"));
    }
    None
}
