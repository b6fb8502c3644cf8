//! Password strength policy.
//!
//! Ordered checks: length bounds, required character classes, forbidden
//! dictionary words, keyboard walks, repeated runs, palindromes, and a
//! computed entropy floor. The first violated check's message is returned.

use vetform_rules::PasswordPolicy;

const KEYBOARD_ROWS: &[&str] = &["qwertyuiop", "asdfghjkl", "zxcvbnm", "1234567890"];
const WALK_WINDOW: usize = 4;
const REPEAT_RUN: usize = 3;
const PALINDROME_MIN: usize = 4;

pub fn check(value: &str, policy: &PasswordPolicy, label: &str) -> Option<String> {
    let count = value.chars().count();
    if count < policy.min_len {
        return Some(format!(
            "{label} must be at least {} characters",
            policy.min_len
        ));
    }
    if count > policy.max_len {
        return Some(format!(
            "{label} must be at most {} characters",
            policy.max_len
        ));
    }
    if !value.chars().any(char::is_uppercase) {
        return Some(format!("{label} must contain an uppercase letter"));
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Some(format!("{label} must contain a digit"));
    }
    if !value.chars().any(is_symbol) {
        return Some(format!("{label} must contain a symbol"));
    }

    let lower = value.to_lowercase();
    if let Some(word) = policy
        .forbidden_words
        .iter()
        .find(|word| !word.is_empty() && lower.contains(&word.to_lowercase()))
    {
        return Some(format!("{label} contains the forbidden word '{word}'"));
    }
    if has_keyboard_walk(&lower) {
        return Some(format!("{label} contains a keyboard sequence"));
    }
    if has_repeated_run(value) {
        return Some(format!(
            "{label} repeats the same character {REPEAT_RUN} or more times in a row"
        ));
    }
    if is_palindrome(&lower) {
        return Some(format!("{label} reads the same forwards and backwards"));
    }

    let bits = entropy_bits(value);
    if bits < policy.entropy_bits {
        return Some(format!(
            "{label} is too predictable (estimated {bits:.0} bits of entropy, needs {:.0})",
            policy.entropy_bits
        ));
    }
    None
}

fn is_symbol(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}

/// Any run of `WALK_WINDOW` adjacent keys from a qwerty row or the digit
/// row, in either direction.
fn has_keyboard_walk(lower: &str) -> bool {
    for row in KEYBOARD_ROWS {
        let reversed: String = row.chars().rev().collect();
        for sequence in [*row, reversed.as_str()] {
            let keys: Vec<char> = sequence.chars().collect();
            for window in keys.windows(WALK_WINDOW) {
                let needle: String = window.iter().collect();
                if lower.contains(&needle) {
                    return true;
                }
            }
        }
    }
    false
}

fn has_repeated_run(value: &str) -> bool {
    let mut run = 0usize;
    let mut previous = None;
    for c in value.chars() {
        if Some(c) == previous {
            run += 1;
            if run >= REPEAT_RUN {
                return true;
            }
        } else {
            previous = Some(c);
            run = 1;
        }
    }
    false
}

fn is_palindrome(lower: &str) -> bool {
    let chars: Vec<char> = lower.chars().collect();
    if chars.len() < PALINDROME_MIN {
        return false;
    }
    chars.iter().eq(chars.iter().rev())
}

/// `length * log2(pool size)`, where the pool is the union of character
/// classes actually present. The required-class checks above guarantee
/// uppercase, digit, and symbol; a password that also mixes in lowercase
/// earns the full 94-character pool.
fn entropy_bits(value: &str) -> f64 {
    let mut pool = 0usize;
    if value.chars().any(char::is_lowercase) {
        pool += 26;
    }
    if value.chars().any(char::is_uppercase) {
        pool += 26;
    }
    if value.chars().any(|c| c.is_ascii_digit()) {
        pool += 10;
    }
    if value.chars().any(is_symbol) {
        pool += 32;
    }
    if pool == 0 {
        return 0.0;
    }
    value.chars().count() as f64 * (pool as f64).log2()
}
