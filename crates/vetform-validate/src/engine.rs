use tracing::debug;

use vetform_model::{FormMode, FormReport, FormSnapshot, ValidationIssue};
use vetform_rules::{Entity, FieldRules, RuleCheck, RuleRegistry};

use crate::checks;
use crate::codes;

/// Executes the declarative rule tables against form snapshots.
///
/// Stateless between calls: every validation is a pure function of
/// `(entity, field, value, snapshot, mode)`. Real-time behavior comes from
/// the caller re-invoking the engine on change and on blur, not from any
/// internal state.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    registry: RuleRegistry,
}

impl RuleEngine {
    /// Engine over the built-in rule tables with default policies.
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::builtin(),
        }
    }

    /// Engine over a registry with overridden policies.
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Validate a single field. `None` means the value is accepted.
    ///
    /// Unrecognized field names validate as clean; callers must ensure every
    /// field they care about has a configured rule chain. Values are trimmed
    /// before evaluation.
    pub fn validate_field(
        &self,
        entity: Entity,
        field: &str,
        value: &str,
        snapshot: &FormSnapshot,
        mode: FormMode,
    ) -> Option<ValidationIssue> {
        let table = self.registry.table(entity);
        let Some(rules) = table.rules_for(field) else {
            debug!(entity = %entity, field, "no rules configured, accepting");
            return None;
        };

        let trimmed = value.trim();
        if trimmed.is_empty() {
            if let Some(message) = checks::presence::check(trimmed, &rules.label) {
                if rules.is_required(mode.is_create()) {
                    return Some(ValidationIssue::error(field, codes::REQUIRED, message));
                }
            }
            // A blank value skips the chain, except that cross-field equality
            // still holds: an empty confirmPassword must not pass while a new
            // password has been typed.
            for check in &rules.checks {
                if let RuleCheck::MatchesField { other } = check {
                    let other_value = snapshot.value_of(other).trim();
                    if !other_value.is_empty() {
                        return Some(ValidationIssue::error(
                            field,
                            codes::MATCH,
                            format!("{} does not match {other}", rules.label),
                        ));
                    }
                }
            }
            return None;
        }

        for check in &rules.checks {
            if let Some(issue) = self.run_check(check, rules, field, trimmed, snapshot) {
                debug!(entity = %entity, field, code = %issue.code, "field rejected");
                return Some(issue);
            }
        }
        None
    }

    /// String-contract variant of [`validate_field`]: the empty string means
    /// the value is accepted.
    ///
    /// [`validate_field`]: RuleEngine::validate_field
    pub fn validate_message(
        &self,
        entity: Entity,
        field: &str,
        value: &str,
        snapshot: &FormSnapshot,
        mode: FormMode,
    ) -> String {
        self.validate_field(entity, field, value, snapshot, mode)
            .map(|issue| issue.message)
            .unwrap_or_default()
    }

    /// Validate every configured field of the form, in table order.
    ///
    /// Fields absent from the snapshot are validated as empty, so missing
    /// required fields are reported. Snapshot fields without configured
    /// rules are ignored.
    pub fn validate_form(
        &self,
        entity: Entity,
        snapshot: &FormSnapshot,
        mode: FormMode,
    ) -> FormReport {
        let table = self.registry.table(entity);
        let mut report = FormReport::new(entity.as_str());
        for field in table.fields() {
            let value = snapshot.value_of(field);
            if let Some(issue) = self.validate_field(entity, field, value, snapshot, mode) {
                report.add(issue);
            }
        }
        report
    }

    /// Fields whose validation should be re-triggered when `field` changes
    /// (password -> confirmPassword, documentoTipo -> documentoNumero).
    pub fn dependents_of(&self, entity: Entity, field: &str) -> &[String] {
        self.registry.table(entity).dependents_of(field)
    }

    fn run_check(
        &self,
        check: &RuleCheck,
        rules: &FieldRules,
        field: &str,
        value: &str,
        snapshot: &FormSnapshot,
    ) -> Option<ValidationIssue> {
        let label = rules.label.as_str();
        let policies = self.registry.policies();
        match check {
            // Presence is settled before the chain runs.
            RuleCheck::Required | RuleCheck::RequiredOnCreate => None,
            RuleCheck::Length { min, max } => checks::length::check(value, *min, *max, label)
                .map(|message| ValidationIssue::error(field, codes::LENGTH, message)),
            RuleCheck::CharClass(kind) => checks::charset::check(value, *kind, label)
                .map(|message| ValidationIssue::error(field, codes::CHAR_CLASS, message)),
            RuleCheck::OneOf { values } => {
                if values.iter().any(|option| option.eq_ignore_ascii_case(value)) {
                    None
                } else {
                    Some(ValidationIssue::error(
                        field,
                        codes::ONE_OF,
                        format!("{label} must be one of: {}", values.join(", ")),
                    ))
                }
            }
            RuleCheck::NoMarkup => checks::sanitize::check_markup(value, label)
                .map(|message| ValidationIssue::warning(field, codes::MARKUP, message)),
            RuleCheck::NoSqlMeta => checks::sanitize::check_sql_meta(value, label)
                .map(|message| ValidationIssue::warning(field, codes::SQL_META, message)),
            RuleCheck::Phone => checks::phone::check(value, &policies.phone, label)
                .map(|message| ValidationIssue::error(field, codes::PHONE, message)),
            RuleCheck::Email => checks::email::check(value, &policies.email, label)
                .map(|message| ValidationIssue::error(field, codes::EMAIL, message)),
            RuleCheck::Address => checks::address::check(value, label)
                .map(|message| ValidationIssue::error(field, codes::ADDRESS, message)),
            RuleCheck::MatchesField { other } => {
                checks::crossfield::matches(value, snapshot.value_of(other).trim(), label, other)
                    .map(|message| ValidationIssue::error(field, codes::MATCH, message))
            }
            RuleCheck::DocumentNumber { type_field } => {
                checks::document::check(value, snapshot.value_of(type_field), label)
                    .map(|message| ValidationIssue::error(field, codes::DOCUMENT, message))
            }
            RuleCheck::Password => checks::password::check(value, &policies.password, label)
                .map(|message| ValidationIssue::error(field, codes::PASSWORD, message)),
            RuleCheck::NumericRange { min, max } => {
                checks::numeric::integer_in_range(value, *min, *max, label)
                    .map(|message| ValidationIssue::error(field, codes::NUMERIC, message))
            }
            RuleCheck::Decimal { min, max } => {
                checks::numeric::decimal_in_range(value, *min, *max, label)
                    .map(|message| ValidationIssue::error(field, codes::DECIMAL, message))
            }
        }
    }
}
