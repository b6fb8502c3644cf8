use serde::{Deserialize, Serialize};

use crate::issue::{Severity, ValidationIssue};

/// Validation outcome for a whole form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormReport {
    pub entity: String,
    pub issues: Vec<ValidationIssue>,
}

impl FormReport {
    pub fn new(entity: &str) -> Self {
        Self {
            entity: entity.to_string(),
            issues: Vec::new(),
        }
    }

    pub fn add(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|issue| issue.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// A form is submittable when no error-severity issue exists.
    /// Warnings do not block submission.
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn issues_for<'s>(&'s self, field: &str) -> impl Iterator<Item = &'s ValidationIssue> {
        self.issues.iter().filter(move |issue| issue.field == field)
    }

    /// First message recorded for a field, or the empty string when clean.
    /// Matches the inline per-field display contract: first failure wins.
    pub fn first_message_for(&self, field: &str) -> &str {
        self.issues
            .iter()
            .find(|issue| issue.field == field)
            .map(|issue| issue.message.as_str())
            .unwrap_or("")
    }

    /// Per-field rollup in snapshot order of first appearance.
    pub fn field_summaries(&self) -> Vec<FieldSummary> {
        let mut summaries: Vec<FieldSummary> = Vec::new();
        for issue in &self.issues {
            match summaries.iter_mut().find(|s| s.field == issue.field) {
                Some(summary) => summary.absorb(issue),
                None => summaries.push(FieldSummary::from_issue(issue)),
            }
        }
        summaries
    }
}

/// Aggregate of every issue raised for one field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSummary {
    pub field: String,
    pub errors: usize,
    pub warnings: usize,
    pub first_message: String,
}

impl FieldSummary {
    fn from_issue(issue: &ValidationIssue) -> Self {
        let mut summary = Self {
            field: issue.field.clone(),
            errors: 0,
            warnings: 0,
            first_message: issue.message.clone(),
        };
        summary.count(issue);
        summary
    }

    fn absorb(&mut self, issue: &ValidationIssue) {
        self.count(issue);
    }

    fn count(&mut self, issue: &ValidationIssue) {
        match issue.severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
        }
    }
}
