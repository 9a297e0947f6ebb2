//! Watchman group projection.

use serde::{Deserialize, Serialize};

use super::Person;

/// The active members of one configured group.
///
/// Derived from the current person store on every query; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerGroup {
    /// Group number (1..=6).
    pub number: u8,
    /// Active members in store order.
    pub members: Vec<Person>,
}

impl VolunteerGroup {
    pub fn new(number: u8, members: Vec<Person>) -> Self {
        Self { number, members }
    }

    /// Whether the person (by identity) is a member.
    pub fn contains(&self, person: &Person) -> bool {
        self.members.iter().any(|m| m.id == person.id)
    }

    /// Full names of the members.
    pub fn names(&self) -> Vec<String> {
        self.members.iter().map(Person::full_name).collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Per-group summary for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStats {
    pub number: u8,
    pub total_members: usize,
    pub active_names: Vec<String>,
    pub active_count: usize,
}

impl From<&VolunteerGroup> for GroupStats {
    fn from(group: &VolunteerGroup) -> Self {
        let active_names: Vec<String> = group
            .members
            .iter()
            .filter(|p| p.active)
            .map(Person::full_name)
            .collect();
        Self {
            number: group.number,
            total_members: group.members.len(),
            active_count: active_names.len(),
            active_names,
        }
    }
}
