//! Engine-level tests for the per-field validation contract.

use vetform_model::{FormMode, FormSnapshot};
use vetform_rules::Entity;
use vetform_validate::{RuleEngine, codes};

fn engine() -> RuleEngine {
    RuleEngine::new()
}

fn message(field: &str, value: &str) -> String {
    engine().validate_message(
        Entity::Owner,
        field,
        value,
        &FormSnapshot::new(),
        FormMode::Create,
    )
}

#[test]
fn valid_name_passes() {
    assert_eq!(message("nombre", "Juan"), "");
}

#[test]
fn name_with_digit_fails() {
    assert!(!message("nombre", "Juan3").is_empty());
}

#[test]
fn accented_name_passes() {
    assert_eq!(message("nombre", "José Pérez"), "");
}

#[test]
fn name_boundary_at_min_length() {
    assert_eq!(message("nombre", "Ju"), "");
    assert!(!message("nombre", "J").is_empty());
}

#[test]
fn malformed_email_fails() {
    assert!(!message("email", "not-an-email").is_empty());
}

#[test]
fn plain_email_passes() {
    assert_eq!(message("email", "ana@clinica.com"), "");
}

#[test]
fn disposable_email_domain_is_rejected() {
    let issue = engine()
        .validate_field(
            Entity::Owner,
            "email",
            "ana@mailinator.com",
            &FormSnapshot::new(),
            FormMode::Create,
        )
        .expect("issue");
    assert_eq!(issue.code, codes::EMAIL);
    assert!(issue.message.contains("disposable"));
}

#[test]
fn unlisted_tld_is_rejected() {
    assert!(!message("email", "ana@clinica.xyz").is_empty());
}

#[test]
fn ten_digit_mobile_passes() {
    assert_eq!(message("telefono", "3011234567"), "");
}

#[test]
fn short_phone_fails() {
    assert!(!message("telefono", "123").is_empty());
}

#[test]
fn phone_with_country_prefix_and_separators_passes() {
    assert_eq!(message("telefono", "+57 301 123 4567"), "");
    assert_eq!(message("telefono", "301-123-4567"), "");
}

#[test]
fn phone_with_unknown_area_prefix_fails() {
    let issue = engine()
        .validate_field(
            Entity::Owner,
            "telefono",
            "9011234567",
            &FormSnapshot::new(),
            FormMode::Create,
        )
        .expect("issue");
    assert_eq!(issue.code, codes::PHONE);
}

#[test]
fn confirm_password_matching_snapshot_passes() {
    let snapshot = FormSnapshot::new().with("password", "Tr9!mVzQd");
    let message = engine().validate_message(
        Entity::Owner,
        "confirmPassword",
        "Tr9!mVzQd",
        &snapshot,
        FormMode::Create,
    );
    assert_eq!(message, "");
}

#[test]
fn confirm_password_mismatch_fails() {
    let snapshot = FormSnapshot::new().with("password", "Tr9!mVzQd");
    let message = engine().validate_message(
        Entity::Owner,
        "confirmPassword",
        "different",
        &snapshot,
        FormMode::Create,
    );
    assert!(!message.is_empty());
}

#[test]
fn empty_confirm_fails_while_new_password_typed_on_edit() {
    let snapshot = FormSnapshot::new().with("password", "Tr9!mVzQd");
    let issue = engine().validate_field(
        Entity::Owner,
        "confirmPassword",
        "",
        &snapshot,
        FormMode::Edit,
    );
    assert_eq!(issue.expect("issue").code, codes::MATCH);
}

#[test]
fn password_optional_when_editing() {
    let message = engine().validate_message(
        Entity::Owner,
        "password",
        "",
        &FormSnapshot::new(),
        FormMode::Edit,
    );
    assert_eq!(message, "");
}

#[test]
fn password_required_when_creating() {
    let issue = engine()
        .validate_field(
            Entity::Owner,
            "password",
            "",
            &FormSnapshot::new(),
            FormMode::Create,
        )
        .expect("issue");
    assert_eq!(issue.code, codes::REQUIRED);
}

#[test]
fn unknown_field_validates_as_clean() {
    assert_eq!(message("no-such-field", "anything"), "");
}

#[test]
fn identical_inputs_give_identical_results() {
    let snapshot = FormSnapshot::new().with("password", "abc");
    let engine = engine();
    let first = engine.validate_message(
        Entity::Owner,
        "confirmPassword",
        "xyz",
        &snapshot,
        FormMode::Create,
    );
    let second = engine.validate_message(
        Entity::Owner,
        "confirmPassword",
        "xyz",
        &snapshot,
        FormMode::Create,
    );
    assert_eq!(first, second);
}

#[test]
fn optional_address_skips_checks_while_empty() {
    assert_eq!(message("direccion", ""), "");
    assert_eq!(message("direccion", "   "), "");
}

#[test]
fn populated_address_must_be_structured() {
    assert_eq!(message("direccion", "Calle 10 # 5-23"), "");
    let issue = engine()
        .validate_field(
            Entity::Owner,
            "direccion",
            "Parque Central",
            &FormSnapshot::new(),
            FormMode::Create,
        )
        .expect("issue");
    assert_eq!(issue.code, codes::ADDRESS);
}

#[test]
fn address_with_sql_meta_warns_but_does_not_block() {
    let snapshot = FormSnapshot::new()
        .with("nombre", "Juan")
        .with("apellido", "Gomez")
        .with("email", "juan@clinica.com")
        .with("telefono", "3011234567")
        .with("documentoTipo", "CC")
        .with("documentoNumero", "12345678")
        .with("password", "Tr9!mVzQd")
        .with("confirmPassword", "Tr9!mVzQd")
        .with("direccion", "Calle 10 # 5-23; extra");
    let report = engine().validate_form(Entity::Owner, &snapshot, FormMode::Create);
    assert_eq!(report.error_count(), 0, "{:?}", report.issues);
    assert_eq!(report.warning_count(), 1);
    assert!(report.is_valid());
    assert_eq!(report.issues[0].code, codes::SQL_META);
}

#[test]
fn document_number_format_follows_document_type() {
    let cc = FormSnapshot::new().with("documentoTipo", "CC");
    let engine = engine();
    assert_eq!(
        engine.validate_message(Entity::Owner, "documentoNumero", "12345678", &cc, FormMode::Create),
        ""
    );
    assert!(
        !engine
            .validate_message(Entity::Owner, "documentoNumero", "1234", &cc, FormMode::Create)
            .is_empty()
    );
    assert!(
        !engine
            .validate_message(Entity::Owner, "documentoNumero", "AB123456", &cc, FormMode::Create)
            .is_empty()
    );

    let passport = FormSnapshot::new().with("documentoTipo", "PAS");
    assert_eq!(
        engine.validate_message(
            Entity::Owner,
            "documentoNumero",
            "AB123456",
            &passport,
            FormMode::Create
        ),
        ""
    );
}

#[test]
fn validate_form_reports_missing_required_fields() {
    let snapshot = FormSnapshot::new().with("nombre", "Juan");
    let report = engine().validate_form(Entity::Owner, &snapshot, FormMode::Create);
    assert!(report.has_errors());
    assert_eq!(report.first_message_for("nombre"), "");
    assert!(!report.first_message_for("apellido").is_empty());
    assert!(!report.first_message_for("email").is_empty());
}

#[test]
fn dependents_are_exposed_for_retrigger() {
    let engine = engine();
    assert_eq!(
        engine.dependents_of(Entity::Owner, "password"),
        ["confirmPassword"]
    );
    assert_eq!(
        engine.dependents_of(Entity::Owner, "documentoTipo"),
        ["documentoNumero"]
    );
    assert!(engine.dependents_of(Entity::Owner, "email").is_empty());
}

#[test]
fn pet_fields_validate_ranges_and_codelist() {
    let engine = engine();
    let empty = FormSnapshot::new();
    let check = |field: &str, value: &str| {
        engine.validate_message(Entity::Pet, field, value, &empty, FormMode::Create)
    };
    assert_eq!(check("especie", "perro"), "");
    assert_eq!(check("especie", "GATO"), "");
    assert!(!check("especie", "dinosaurio").is_empty());
    assert_eq!(check("edad", "3"), "");
    assert!(!check("edad", "tres").is_empty());
    assert!(!check("edad", "100").is_empty());
    assert_eq!(check("peso", "12.5"), "");
    assert!(!check("peso", "-1").is_empty());
    assert!(!check("peso", "mucho").is_empty());
}

#[test]
fn staff_username_charset_is_enforced() {
    let engine = engine();
    let empty = FormSnapshot::new();
    let check = |value: &str| {
        engine.validate_message(Entity::StaffUser, "username", value, &empty, FormMode::Create)
    };
    assert_eq!(check("ana.gomez_1"), "");
    assert!(!check("ana gomez").is_empty());
    assert!(!check("ana").is_empty());
}
