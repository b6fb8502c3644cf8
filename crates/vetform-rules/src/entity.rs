//! Entity forms covered by the built-in rule tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the clinic's entity forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    /// Pet owner (client) form.
    Owner,
    /// Veterinarian profile form.
    Veterinarian,
    /// Pet record form.
    Pet,
    /// Clinic staff account form.
    StaffUser,
}

impl Entity {
    pub const ALL: [Entity; 4] = [
        Entity::Owner,
        Entity::Veterinarian,
        Entity::Pet,
        Entity::StaffUser,
    ];

    /// Returns the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::Owner => "owner",
            Entity::Veterinarian => "veterinarian",
            Entity::Pet => "pet",
            Entity::StaffUser => "staff-user",
        }
    }

    /// Parse an entity name (case-insensitive, accepts Spanish synonyms).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "owner" | "propietario" | "cliente" => Some(Entity::Owner),
            "veterinarian" | "vet" | "veterinario" => Some(Entity::Veterinarian),
            "pet" | "mascota" => Some(Entity::Pet),
            "staff-user" | "staff" | "user" | "usuario" => Some(Entity::StaffUser),
            _ => None,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
