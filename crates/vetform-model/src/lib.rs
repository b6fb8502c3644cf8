pub mod error;
pub mod issue;
pub mod report;
pub mod snapshot;

pub use error::{Result, VetformError};
pub use issue::{Severity, ValidationIssue};
pub use report::{FieldSummary, FormReport};
pub use snapshot::{FormMode, FormSnapshot};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_report_counts() {
        let mut report = FormReport::new("owner");
        report.add(ValidationIssue::error(
            "email",
            "VF-EMAIL",
            "email is not a valid address".to_string(),
        ));
        report.add(ValidationIssue::warning(
            "direccion",
            "VF-SQL",
            "direccion contains SQL meta-characters".to_string(),
        ));
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_errors());
        assert!(!report.is_valid());
    }

    #[test]
    fn warnings_alone_keep_form_valid() {
        let mut report = FormReport::new("owner");
        report.add(ValidationIssue::warning(
            "direccion",
            "VF-MARKUP",
            "direccion contains markup".to_string(),
        ));
        assert!(report.is_valid());
        assert_eq!(report.warning_count(), 1);
    }
}
