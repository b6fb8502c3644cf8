//! Tests for the rule registry, tables, and policy loading.

use vetform_rules::{Entity, PolicySet, RuleCheck, RuleRegistry};

#[test]
fn builtin_covers_every_entity() {
    let registry = RuleRegistry::builtin();
    for entity in Entity::ALL {
        assert!(
            !registry.table(entity).is_empty(),
            "no rules for {entity}"
        );
    }
}

#[test]
fn owner_table_has_expected_fields() {
    let registry = RuleRegistry::builtin();
    let table = registry.table(Entity::Owner);
    for field in [
        "nombre",
        "apellido",
        "email",
        "telefono",
        "direccion",
        "documentoTipo",
        "documentoNumero",
        "password",
        "confirmPassword",
    ] {
        assert!(table.rules_for(field).is_some(), "missing field {field}");
    }
    assert!(table.rules_for("unknown").is_none());
}

#[test]
fn dependent_edges_are_declared() {
    let registry = RuleRegistry::builtin();
    let owner = registry.table(Entity::Owner);
    assert_eq!(owner.dependents_of("password"), ["confirmPassword"]);
    assert_eq!(owner.dependents_of("documentoTipo"), ["documentoNumero"]);
    assert!(owner.dependents_of("nombre").is_empty());
}

#[test]
fn rule_order_is_preserved() {
    let registry = RuleRegistry::builtin();
    let rules = registry
        .table(Entity::Owner)
        .rules_for("nombre")
        .expect("nombre rules");
    // Presence precedes length precedes character class.
    assert!(matches!(rules.checks[0], RuleCheck::Required));
    assert!(matches!(rules.checks[1], RuleCheck::Length { min: 2, max: 100 }));
    assert!(matches!(rules.checks[2], RuleCheck::CharClass(_)));
}

#[test]
fn requiredness_depends_on_mode() {
    let registry = RuleRegistry::builtin();
    let table = registry.table(Entity::Owner);
    let password = table.rules_for("password").expect("password rules");
    assert!(password.is_required(true));
    assert!(!password.is_required(false));
    let nombre = table.rules_for("nombre").expect("nombre rules");
    assert!(nombre.is_required(true));
    assert!(nombre.is_required(false));
    let direccion = table.rules_for("direccion").expect("direccion rules");
    assert!(!direccion.is_required(true));
}

#[test]
fn entity_parse_accepts_synonyms() {
    assert_eq!(Entity::parse("Owner"), Some(Entity::Owner));
    assert_eq!(Entity::parse("propietario"), Some(Entity::Owner));
    assert_eq!(Entity::parse("vet"), Some(Entity::Veterinarian));
    assert_eq!(Entity::parse("mascota"), Some(Entity::Pet));
    assert_eq!(Entity::parse("usuario"), Some(Entity::StaffUser));
    assert_eq!(Entity::parse("appointment"), None);
}

#[test]
fn default_policies_are_consistent() {
    let policies = PolicySet::default();
    assert_eq!(policies.password.min_len, 8);
    assert_eq!(policies.password.max_len, 64);
    assert_eq!(policies.phone.national_digits, 10);
    assert!(policies.phone.prefixes.contains(&"30".to_string()));
    assert!(policies.email.allowed_tlds.contains(&"com".to_string()));
    assert!(
        policies
            .email
            .disposable_domains
            .contains(&"mailinator.com".to_string())
    );
}

#[test]
fn policy_overrides_keep_defaults_for_missing_fields() {
    let policies = PolicySet::from_json_str(
        r#"{
            "password": { "min_len": 12 },
            "email": { "allowed_tlds": ["com"] }
        }"#,
    )
    .expect("policies");
    assert_eq!(policies.password.min_len, 12);
    // Unspecified fields keep their defaults.
    assert_eq!(policies.password.max_len, 64);
    assert_eq!(policies.email.allowed_tlds, ["com"]);
    assert!(!policies.email.disposable_domains.is_empty());
    assert_eq!(policies.phone, PolicySet::default().phone);
}

#[test]
fn policy_rejects_malformed_json() {
    assert!(PolicySet::from_json_str("{not json").is_err());
}
