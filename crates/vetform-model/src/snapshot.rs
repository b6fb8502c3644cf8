use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VetformError};

/// Whether the form is creating a new record or editing an existing one.
///
/// Affects conditional requiredness: password fields are mandatory when
/// creating, optional while left blank when editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

impl FormMode {
    pub fn is_create(self) -> bool {
        matches!(self, FormMode::Create)
    }

    /// Parse a form mode from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "create" | "new" => Some(FormMode::Create),
            "edit" | "update" => Some(FormMode::Edit),
            _ => None,
        }
    }
}

/// The complete set of in-progress field values at validation time.
///
/// Cross-field rules (confirm-password equality, document-number format)
/// read their counterpart values from here. The engine never mutates a
/// snapshot; validation is a pure function of its inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    fields: BTreeMap<String, String>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, convenient in tests and call sites.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Value of a field, or the empty string when the field is absent.
    pub fn value_of(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build a snapshot from a JSON object.
    ///
    /// Scalar values (numbers, booleans) are stringified so payloads written
    /// by hand or exported from a form state container both load. Nested
    /// objects and arrays are rejected.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Object(map) = value else {
            return Err(VetformError::Message(
                "form payload must be a JSON object of field values".to_string(),
            ));
        };
        let mut snapshot = Self::new();
        for (field, value) in map {
            let text = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Null => String::new(),
                other => {
                    return Err(VetformError::Message(format!(
                        "field '{field}' has a non-scalar value: {other}"
                    )));
                }
            };
            snapshot.set(field, text);
        }
        Ok(snapshot)
    }
}
