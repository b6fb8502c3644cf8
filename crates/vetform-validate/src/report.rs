use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use vetform_model::{FormReport, Result, ValidationIssue};

const REPORT_SCHEMA: &str = "vetform.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Machine-readable validation report envelope.
#[derive(Debug, Serialize)]
pub struct ReportPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub entity: &'a str,
    pub error_count: usize,
    pub warning_count: usize,
    pub issues: &'a [ValidationIssue],
}

impl<'a> ReportPayload<'a> {
    pub fn new(report: &'a FormReport) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            entity: &report.entity,
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            issues: &report.issues,
        }
    }
}

/// Write the report as `validation_report.json` in `output_dir`, creating
/// the directory if needed. Returns the path written.
pub fn write_report_json(output_dir: &Path, report: &FormReport) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("validation_report.json");
    let payload = ReportPayload::new(report);
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
