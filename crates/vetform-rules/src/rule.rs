//! Declarative rule checks.
//!
//! A field's validation is an ordered chain of [`RuleCheck`] variants; the
//! engine evaluates them in declaration order and the first failing check's
//! message wins. Every threshold that varies by deployment lives in the
//! policy set, not here.

/// One predicate in a field's ordered rule chain.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleCheck {
    /// Non-empty after trimming, in every mode.
    Required,
    /// Non-empty after trimming, but only when creating a new record.
    /// When editing, an empty value skips the rest of the chain.
    RequiredOnCreate,
    /// Inclusive character-count bounds.
    Length { min: usize, max: usize },
    /// The value must consist of the given character class.
    CharClass(CharClassKind),
    /// The value must be one of the listed options (case-insensitive).
    OneOf { values: Vec<String> },
    /// Rejects HTML-like markup. Advisory (warning severity).
    NoMarkup,
    /// Rejects SQL meta-characters and keywords. Advisory (warning severity).
    NoSqlMeta,
    /// National phone number per the phone policy.
    Phone,
    /// Email address per the email allow/deny-list policy.
    Email,
    /// Physical address: street-type token, street number, unit separator.
    Address,
    /// The value must equal another field's value in the snapshot.
    MatchesField { other: String },
    /// Document-number format conditioned on the document-type field.
    DocumentNumber { type_field: String },
    /// Full password strength policy.
    Password,
    /// Integer within an inclusive range.
    NumericRange { min: i64, max: i64 },
    /// Decimal within an inclusive range.
    Decimal { min: f64, max: f64 },
}

/// Character classes used by [`RuleCheck::CharClass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClassKind {
    /// Unicode letters and spaces (covers accented names).
    LettersAndSpaces,
    /// ASCII digits only.
    DigitsOnly,
    /// Unicode letters and digits.
    Alphanumeric,
    /// ASCII letters, digits and `.`, `_`, `-`.
    Username,
}

/// Ordered checks for one field, plus its presence policy.
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    /// Display label used in error messages.
    pub label: String,
    /// Optional fields skip every check while empty.
    pub optional: bool,
    /// Checks evaluated in order; the first failure wins.
    pub checks: Vec<RuleCheck>,
}

impl FieldRules {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            optional: false,
            checks: Vec::new(),
        }
    }

    /// Mark the field optional: empty values validate as clean.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Append a check to the chain.
    #[must_use]
    pub fn check(mut self, check: RuleCheck) -> Self {
        self.checks.push(check);
        self
    }

    /// True when the chain demands a value in the given create/edit context.
    pub fn is_required(&self, is_create: bool) -> bool {
        if self.optional {
            return false;
        }
        self.checks.iter().any(|check| match check {
            RuleCheck::Required => true,
            RuleCheck::RequiredOnCreate => is_create,
            _ => false,
        })
    }
}
