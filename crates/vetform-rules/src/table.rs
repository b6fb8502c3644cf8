//! Rule tables keyed by `(entity, field)`.
//!
//! The clinic frontend historically duplicated field validation per screen,
//! with thresholds drifting between copies. The registry below is the single
//! source of truth: one table per entity form, one policy set for all of
//! them.

use std::collections::BTreeMap;

use crate::entity::Entity;
use crate::policy::PolicySet;
use crate::rule::{CharClassKind, FieldRules, RuleCheck};

/// Rules and cross-field dependency edges for one entity form.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: BTreeMap<String, FieldRules>,
    dependents: BTreeMap<String, Vec<String>>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, rules: FieldRules) {
        self.rules.insert(field.to_string(), rules);
    }

    /// Declare that editing `field` should re-trigger validation of
    /// `dependent` (e.g. password -> confirmPassword).
    pub fn add_dependent(&mut self, field: &str, dependent: &str) {
        self.dependents
            .entry(field.to_string())
            .or_default()
            .push(dependent.to_string());
    }

    pub fn rules_for(&self, field: &str) -> Option<&FieldRules> {
        self.rules.get(field)
    }

    /// Fields whose validation depends on `field`.
    pub fn dependents_of(&self, field: &str) -> &[String] {
        self.dependents
            .get(field)
            .map(|fields| fields.as_slice())
            .unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// All entity rule tables plus the policy set they share.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    tables: BTreeMap<Entity, RuleTable>,
    policies: PolicySet,
}

impl RuleRegistry {
    /// Built-in tables with default policies.
    pub fn builtin() -> Self {
        Self::with_policies(PolicySet::default())
    }

    /// Built-in tables with overridden policies.
    pub fn with_policies(policies: PolicySet) -> Self {
        let mut tables = BTreeMap::new();
        tables.insert(Entity::Owner, owner_table());
        tables.insert(Entity::Veterinarian, veterinarian_table());
        tables.insert(Entity::Pet, pet_table());
        tables.insert(Entity::StaffUser, staff_user_table());
        Self { tables, policies }
    }

    pub fn table(&self, entity: Entity) -> &RuleTable {
        // Every Entity variant is inserted in with_policies.
        &self.tables[&entity]
    }

    pub fn policies(&self) -> &PolicySet {
        &self.policies
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Person name field: required, 2-100 chars, letters and spaces.
fn person_name(label: &str) -> FieldRules {
    FieldRules::new(label)
        .check(RuleCheck::Required)
        .check(RuleCheck::Length { min: 2, max: 100 })
        .check(RuleCheck::CharClass(CharClassKind::LettersAndSpaces))
}

fn email_field() -> FieldRules {
    FieldRules::new("email")
        .check(RuleCheck::Required)
        .check(RuleCheck::Length { min: 6, max: 120 })
        .check(RuleCheck::Email)
}

fn phone_field() -> FieldRules {
    FieldRules::new("telefono")
        .check(RuleCheck::Required)
        .check(RuleCheck::Phone)
}

fn password_field() -> FieldRules {
    FieldRules::new("password")
        .check(RuleCheck::RequiredOnCreate)
        .check(RuleCheck::Password)
}

fn confirm_password_field() -> FieldRules {
    FieldRules::new("confirmPassword")
        .check(RuleCheck::RequiredOnCreate)
        .check(RuleCheck::MatchesField {
            other: "password".to_string(),
        })
}

fn credential_fields(table: &mut RuleTable) {
    table.insert("password", password_field());
    table.insert("confirmPassword", confirm_password_field());
    table.add_dependent("password", "confirmPassword");
}

fn owner_table() -> RuleTable {
    let mut table = RuleTable::new();
    table.insert("nombre", person_name("nombre"));
    table.insert("apellido", person_name("apellido"));
    table.insert("email", email_field());
    table.insert("telefono", phone_field());
    table.insert(
        "direccion",
        FieldRules::new("direccion")
            .optional()
            .check(RuleCheck::Length { min: 5, max: 150 })
            .check(RuleCheck::Address)
            .check(RuleCheck::NoMarkup)
            .check(RuleCheck::NoSqlMeta),
    );
    table.insert(
        "documentoTipo",
        FieldRules::new("documentoTipo")
            .check(RuleCheck::Required)
            .check(RuleCheck::OneOf {
                values: vec!["CC".to_string(), "CE".to_string(), "PAS".to_string()],
            }),
    );
    table.insert(
        "documentoNumero",
        FieldRules::new("documentoNumero")
            .check(RuleCheck::Required)
            .check(RuleCheck::DocumentNumber {
                type_field: "documentoTipo".to_string(),
            }),
    );
    table.add_dependent("documentoTipo", "documentoNumero");
    credential_fields(&mut table);
    table
}

fn veterinarian_table() -> RuleTable {
    let mut table = RuleTable::new();
    table.insert("nombre", person_name("nombre"));
    table.insert("apellido", person_name("apellido"));
    table.insert("email", email_field());
    table.insert("telefono", phone_field());
    table.insert(
        "licencia",
        FieldRules::new("licencia")
            .check(RuleCheck::Required)
            .check(RuleCheck::Length { min: 4, max: 10 })
            .check(RuleCheck::CharClass(CharClassKind::DigitsOnly)),
    );
    table.insert(
        "especialidad",
        FieldRules::new("especialidad")
            .check(RuleCheck::Required)
            .check(RuleCheck::Length { min: 3, max: 60 })
            .check(RuleCheck::CharClass(CharClassKind::LettersAndSpaces)),
    );
    credential_fields(&mut table);
    table
}

fn pet_table() -> RuleTable {
    let mut table = RuleTable::new();
    table.insert(
        "nombre",
        FieldRules::new("nombre")
            .check(RuleCheck::Required)
            .check(RuleCheck::Length { min: 2, max: 50 })
            .check(RuleCheck::CharClass(CharClassKind::LettersAndSpaces)),
    );
    table.insert(
        "especie",
        FieldRules::new("especie")
            .check(RuleCheck::Required)
            .check(RuleCheck::OneOf {
                values: ["perro", "gato", "ave", "reptil", "roedor", "otro"]
                    .iter()
                    .map(|value| (*value).to_string())
                    .collect(),
            }),
    );
    table.insert(
        "raza",
        FieldRules::new("raza")
            .optional()
            .check(RuleCheck::Length { min: 2, max: 60 })
            .check(RuleCheck::CharClass(CharClassKind::LettersAndSpaces)),
    );
    table.insert(
        "edad",
        FieldRules::new("edad")
            .check(RuleCheck::Required)
            .check(RuleCheck::NumericRange { min: 0, max: 60 }),
    );
    table.insert(
        "peso",
        FieldRules::new("peso")
            .check(RuleCheck::Required)
            .check(RuleCheck::Decimal {
                min: 0.0,
                max: 200.0,
            }),
    );
    table
}

fn staff_user_table() -> RuleTable {
    let mut table = RuleTable::new();
    table.insert(
        "username",
        FieldRules::new("username")
            .check(RuleCheck::Required)
            .check(RuleCheck::Length { min: 4, max: 30 })
            .check(RuleCheck::CharClass(CharClassKind::Username)),
    );
    table.insert("email", email_field());
    table.insert(
        "rol",
        FieldRules::new("rol")
            .check(RuleCheck::Required)
            .check(RuleCheck::OneOf {
                values: vec!["admin".to_string(), "veterinario".to_string()],
            }),
    );
    credential_fields(&mut table);
    table
}
