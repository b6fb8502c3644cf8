//! Configurable validation policies.
//!
//! Thresholds and allow/deny lists live here instead of inline constants so
//! a deployment can override them from a JSON file without touching the rule
//! tables. One policy set applies to every form; per-screen drift in
//! thresholds is deliberately impossible.

use std::path::Path;

use serde::{Deserialize, Serialize};

use vetform_model::Result;

/// Password strength policy shared by every form that collects a password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum length in characters.
    pub min_len: usize,
    /// Maximum length in characters.
    pub max_len: usize,
    /// Minimum computed entropy, `length * log2(pool size)`, in bits.
    pub entropy_bits: f64,
    /// Dictionary words rejected anywhere inside the password
    /// (matched case-insensitively).
    pub forbidden_words: Vec<String>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_len: 8,
            max_len: 64,
            entropy_bits: 50.0,
            forbidden_words: [
                "password",
                "contrasena",
                "qwerty",
                "admin",
                "letmein",
                "welcome",
                "iloveyou",
                "dragon",
                "monkey",
                "futbol",
                "colombia",
                "mascota",
                "veterinaria",
            ]
            .iter()
            .map(|word| (*word).to_string())
            .collect(),
        }
    }
}

/// National phone-number policy.
///
/// Defaults follow the Colombian numbering plan: ten national digits, an
/// optional `+57` country prefix, `30x`-`35x` mobile prefixes and the unified
/// `60x` fixed-line prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhonePolicy {
    /// Country calling code accepted as an optional `+<code>` prefix.
    pub country_code: String,
    /// Exact number of national digits.
    pub national_digits: usize,
    /// Accepted leading digit prefixes of the national number.
    pub prefixes: Vec<String>,
}

impl Default for PhonePolicy {
    fn default() -> Self {
        Self {
            country_code: "57".to_string(),
            national_digits: 10,
            prefixes: ["30", "31", "32", "33", "34", "35", "60"]
                .iter()
                .map(|prefix| (*prefix).to_string())
                .collect(),
        }
    }
}

/// Email allow/deny-list policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailPolicy {
    /// Accepted top-level domains (final DNS label, case-insensitive).
    pub allowed_tlds: Vec<String>,
    /// Known disposable/throwaway providers, rejected outright.
    pub disposable_domains: Vec<String>,
}

impl Default for EmailPolicy {
    fn default() -> Self {
        Self {
            allowed_tlds: [
                "com", "co", "net", "org", "edu", "gov", "io", "info", "es", "mx",
            ]
            .iter()
            .map(|tld| (*tld).to_string())
            .collect(),
            disposable_domains: [
                "mailinator.com",
                "10minutemail.com",
                "guerrillamail.com",
                "yopmail.com",
                "temp-mail.org",
                "trashmail.com",
                "getnada.com",
            ]
            .iter()
            .map(|domain| (*domain).to_string())
            .collect(),
        }
    }
}

/// The full set of policies consumed by the rule tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicySet {
    pub password: PasswordPolicy,
    pub phone: PhonePolicy,
    pub email: EmailPolicy,
}

impl PolicySet {
    /// Load a policy set from a JSON document. Missing sections and fields
    /// keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a policy set from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
