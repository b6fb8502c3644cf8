use serde::{Deserialize, Serialize};

/// Severity of a validation issue.
///
/// Errors block form submission. Warnings are advisory sanitation hints
/// (markup/SQL-meta denylists) and never stand in for server-side
/// sanitization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single rule violation for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Field the violation applies to.
    pub field: String,
    /// Stable rule code (e.g. "VF-REQ", "VF-EMAIL").
    pub code: String,
    /// Human-readable message shown inline next to the field.
    pub message: String,
    /// Severity level.
    pub severity: Severity,
}

impl ValidationIssue {
    pub fn error(field: &str, code: &str, message: String) -> Self {
        Self {
            field: field.to_string(),
            code: code.to_string(),
            message,
            severity: Severity::Error,
        }
    }

    pub fn warning(field: &str, code: &str, message: String) -> Self {
        Self {
            field: field.to_string(),
            code: code.to_string(),
            message,
            severity: Severity::Warning,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
