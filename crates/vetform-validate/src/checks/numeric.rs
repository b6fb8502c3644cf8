//! Numeric range checks for integer and decimal fields.

pub fn integer_in_range(value: &str, min: i64, max: i64, label: &str) -> Option<String> {
    let Ok(parsed) = value.parse::<i64>() else {
        return Some(format!("{label} must be a whole number"));
    };
    if !(min..=max).contains(&parsed) {
        return Some(format!("{label} must be between {min} and {max}"));
    }
    None
}

pub fn decimal_in_range(value: &str, min: f64, max: f64, label: &str) -> Option<String> {
    let Ok(parsed) = value.parse::<f64>() else {
        return Some(format!("{label} must be a number like 12.5"));
    };
    if !parsed.is_finite() || parsed < min || parsed > max {
        return Some(format!("{label} must be between {min} and {max}"));
    }
    None
}
