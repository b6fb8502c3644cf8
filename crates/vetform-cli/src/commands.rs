use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};

use vetform_cli::logging::redact_value;
use vetform_model::{FormReport, FormSnapshot, ValidationIssue};
use vetform_rules::{Entity, PolicySet, RuleRegistry};
use vetform_validate::{RuleEngine, write_report_json};

use crate::cli::{CheckArgs, FieldArgs};

pub struct CheckResult {
    pub entity: Entity,
    pub report: FormReport,
    pub report_path: Option<PathBuf>,
    /// Number of fields configured for the entity, not snapshot size:
    /// missing required fields count as checked.
    pub checked_fields: usize,
}

pub fn run_check(args: &CheckArgs, policies: Option<&Path>) -> Result<CheckResult> {
    let entity = parse_entity(&args.entity)?;
    let engine = build_engine(policies)?;
    let text = fs::read_to_string(&args.form)
        .with_context(|| format!("reading {}", args.form.display()))?;
    let snapshot = FormSnapshot::from_json_str(&text)
        .with_context(|| format!("parsing {}", args.form.display()))?;
    let mode = args.mode.to_mode();

    info!(entity = %entity, ?mode, fields = snapshot.len(), "validating form");
    let report = engine.validate_form(entity, &snapshot, mode);

    let report_path = match &args.report_dir {
        Some(dir) => Some(write_report_json(dir, &report)?),
        None => None,
    };
    let checked_fields = engine.registry().table(entity).len();
    Ok(CheckResult {
        entity,
        report,
        report_path,
        checked_fields,
    })
}

pub fn run_field(args: &FieldArgs, policies: Option<&Path>) -> Result<Option<ValidationIssue>> {
    let entity = parse_entity(&args.entity)?;
    let engine = build_engine(policies)?;
    let snapshot = match &args.snapshot {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            FormSnapshot::from_json_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => FormSnapshot::new(),
    };
    debug!(
        entity = %entity,
        field = %args.field,
        value = redact_value(&args.value),
        "validating field"
    );
    Ok(engine.validate_field(entity, &args.field, &args.value, &snapshot, args.mode.to_mode()))
}

pub fn run_entities() {
    let registry = RuleRegistry::builtin();
    for entity in Entity::ALL {
        let fields: Vec<&str> = registry.table(entity).fields().collect();
        println!("{entity}: {}", fields.join(", "));
    }
}

fn parse_entity(name: &str) -> Result<Entity> {
    Entity::parse(name).ok_or_else(|| {
        anyhow!("unknown entity '{name}' (expected owner, veterinarian, pet, or staff-user)")
    })
}

fn build_engine(policies: Option<&Path>) -> Result<RuleEngine> {
    let registry = match policies {
        Some(path) => {
            let set = PolicySet::from_path(path)
                .with_context(|| format!("loading policies from {}", path.display()))?;
            RuleRegistry::with_policies(set)
        }
        None => RuleRegistry::builtin(),
    };
    Ok(RuleEngine::with_registry(registry))
}
