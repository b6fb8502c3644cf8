//! JSON report writer tests.

use std::fs;
use std::path::PathBuf;

use vetform_model::{FormMode, FormSnapshot};
use vetform_rules::Entity;
use vetform_validate::{RuleEngine, write_report_json};

fn temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("vetform_validate_{stamp}"));
    dir
}

#[test]
fn report_json_has_versioned_envelope() {
    let snapshot = FormSnapshot::new().with("nombre", "Juan3");
    let report = RuleEngine::new().validate_form(Entity::Owner, &snapshot, FormMode::Create);
    assert!(report.has_errors());

    let dir = temp_dir();
    let path = write_report_json(&dir, &report).expect("write report");
    let text = fs::read_to_string(&path).expect("read report");
    let value: serde_json::Value = serde_json::from_str(&text).expect("parse report");

    assert_eq!(value["schema"], "vetform.validation-report");
    assert_eq!(value["schema_version"], 1);
    assert_eq!(value["entity"], "owner");
    assert!(value["generated_at"].is_string());
    assert!(value["error_count"].as_u64().unwrap_or(0) > 0);
    assert!(value["issues"].is_array());

    fs::remove_dir_all(&dir).ok();
}
