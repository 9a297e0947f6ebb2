//! Volunteer model.
//!
//! A person belongs to exactly one role pool (ushers or watchmen) and is
//! soft-disabled rather than deleted. Watchmen may carry a group number, but
//! group membership is resolved from the configured roster by full name,
//! not from that field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity assigned by the person store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub u64);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Volunteer role pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Usher,
    Watchman,
}

impl Role {
    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Usher => "usher",
            Role::Watchman => "watchman",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored volunteer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Store-assigned identity.
    pub id: PersonId,
    /// Given name ("nombre").
    pub given_name: String,
    /// Family name ("apellido").
    pub family_name: String,
    /// Role pool.
    pub role: Role,
    /// Whether the person can currently be selected.
    pub active: bool,
    /// Declared group number (watchmen only, informational).
    pub group: Option<u8>,
}

impl Person {
    /// Roster key: `"family_name given_name"`.
    ///
    /// Group membership is matched against this string exactly; two people
    /// formatting to the same name are indistinguishable to the roster.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.family_name, self.given_name)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family_name, self.given_name)
    }
}

/// A person not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub given_name: String,
    pub family_name: String,
    pub role: Role,
    pub active: bool,
    pub group: Option<u8>,
}

impl NewPerson {
    /// Creates an active person for the given role.
    pub fn new(role: Role, given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self {
            given_name: given_name.into(),
            family_name: family_name.into(),
            role,
            active: true,
            group: None,
        }
    }

    /// Creates an active usher.
    pub fn usher(given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self::new(Role::Usher, given_name, family_name)
    }

    /// Creates an active watchman.
    pub fn watchman(given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self::new(Role::Watchman, given_name, family_name)
    }

    /// Sets the declared group number.
    pub fn with_group(mut self, group: u8) -> Self {
        self.group = Some(group);
        self
    }

    /// Marks the person inactive.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Attaches a store-assigned identity.
    pub fn into_person(self, id: PersonId) -> Person {
        Person {
            id,
            given_name: self.given_name,
            family_name: self.family_name,
            role: self.role,
            active: self.active,
            group: self.group,
        }
    }
}
