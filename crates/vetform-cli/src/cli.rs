//! CLI argument definitions for the vetform validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use vetform_model::FormMode;

#[derive(Parser)]
#[command(
    name = "vetform",
    version,
    about = "Vetform - validate veterinary-clinic entity forms",
    long_about = "Validate veterinary-clinic form payloads against the shared rule tables.\n\n\
                  One declaratively-configured rule set covers the owner, veterinarian,\n\
                  pet, and staff-user forms. Thresholds and email allow/deny lists are\n\
                  overridable with --policies. Validation here is advisory: the backend\n\
                  re-validates every write."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow field values (personal data) to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// JSON file overriding the validation policies.
    #[arg(long = "policies", value_name = "FILE", global = true)]
    pub policies: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a whole form payload against an entity's rule table.
    Check(CheckArgs),

    /// Validate a single field value.
    Field(FieldArgs),

    /// List entities and their configured fields.
    Entities,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Entity form to validate (owner, veterinarian, pet, staff-user).
    #[arg(value_name = "ENTITY")]
    pub entity: String,

    /// Path to a JSON object of field values.
    #[arg(value_name = "FORM_JSON")]
    pub form: PathBuf,

    /// Create or edit mode (affects which fields are mandatory).
    #[arg(long = "mode", value_enum, default_value = "create")]
    pub mode: ModeArg,

    /// Write a machine-readable report into this directory.
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct FieldArgs {
    /// Entity form the field belongs to.
    #[arg(value_name = "ENTITY")]
    pub entity: String,

    /// Field name as configured in the rule table.
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// Value to validate.
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Create or edit mode (affects which fields are mandatory).
    #[arg(long = "mode", value_enum, default_value = "create")]
    pub mode: ModeArg,

    /// Optional JSON snapshot of the rest of the form, for cross-field
    /// rules (confirm-password, document type).
    #[arg(long = "snapshot", value_name = "FILE")]
    pub snapshot: Option<PathBuf>,
}

/// CLI form-mode choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Create,
    Edit,
}

impl ModeArg {
    pub fn to_mode(self) -> FormMode {
        match self {
            ModeArg::Create => FormMode::Create,
            ModeArg::Edit => FormMode::Edit,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_check_with_mode_and_report_dir() {
        let cli = Cli::try_parse_from([
            "vetform",
            "check",
            "owner",
            "form.json",
            "--mode",
            "edit",
            "--report-dir",
            "out",
        ])
        .expect("parse");
        let Command::Check(args) = cli.command else {
            panic!("expected check subcommand");
        };
        assert_eq!(args.entity, "owner");
        assert!(matches!(args.mode, ModeArg::Edit));
        assert_eq!(args.report_dir.as_deref(), Some(std::path::Path::new("out")));
    }

    #[test]
    fn parses_field_with_snapshot() {
        let cli = Cli::try_parse_from([
            "vetform",
            "field",
            "owner",
            "confirmPassword",
            "secret",
            "--snapshot",
            "form.json",
        ])
        .expect("parse");
        let Command::Field(args) = cli.command else {
            panic!("expected field subcommand");
        };
        assert_eq!(args.field, "confirmPassword");
        assert!(args.snapshot.is_some());
    }

    #[test]
    fn policies_flag_is_global() {
        let cli = Cli::try_parse_from(["vetform", "entities", "--policies", "policies.json"])
            .expect("parse");
        assert!(cli.policies.is_some());
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["vetform", "frobnicate"]).is_err());
    }
}
