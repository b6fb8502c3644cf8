//! Declarative validation rule tables for the clinic's entity forms.
//!
//! One rule table per entity, keyed by field name, sharing a single
//! configurable policy set. Rule chains are ordered; the engine in
//! `vetform-validate` evaluates them first-failure-wins.

pub mod entity;
pub mod policy;
pub mod rule;
pub mod table;

pub use entity::Entity;
pub use policy::{EmailPolicy, PasswordPolicy, PhonePolicy, PolicySet};
pub use rule::{CharClassKind, FieldRules, RuleCheck};
pub use table::{RuleRegistry, RuleTable};
