//! Storage contracts.
//!
//! The roster services never talk to a database directly. They read and
//! write through [`PersonStore`] and [`AssignmentStore`], which an
//! embedding application implements over its own storage. The in-memory
//! implementations in [`memory`] back the tests and small deployments.
//!
//! Each call is expected to be independently atomic; the services never
//! group calls into transactions.

pub mod memory;

pub use memory::{MemoryAssignmentStore, MemoryPersonStore};

use crate::error::StoreError;
use crate::models::{
    Assignment, AssignmentColumn, AssignmentId, AssignmentRow, NewPerson, Person, PersonId, Role,
};

/// Volunteer storage.
pub trait PersonStore {
    /// Active people of a role, ordered by family name, then given name.
    fn list_active(&self, role: Role) -> Result<Vec<Person>, StoreError>;

    /// Every person of a role, active or not, in the same order.
    fn list_all(&self, role: Role) -> Result<Vec<Person>, StoreError>;

    /// Stores a new person and returns its identity.
    fn add(&self, person: NewPerson) -> Result<PersonId, StoreError>;

    /// Sets the active flag.
    fn set_active(&self, id: PersonId, active: bool) -> Result<(), StoreError>;
}

/// Assignment storage.
pub trait AssignmentStore {
    /// Stores a validated assignment and returns its identity.
    fn save(&self, assignment: &Assignment) -> Result<AssignmentId, StoreError>;

    /// All rows in insertion order.
    fn list_all(&self) -> Result<Vec<AssignmentRow>, StoreError>;

    /// Rows whose lowercased week label contains the Spanish name of
    /// `month` (1..=12), in insertion order.
    fn list_by_month(&self, month: u32) -> Result<Vec<AssignmentRow>, StoreError>;

    /// Removes every row.
    fn clear(&self) -> Result<(), StoreError>;

    /// Overwrites one column of a stored row.
    fn update(
        &self,
        id: AssignmentId,
        column: AssignmentColumn,
        value: &str,
    ) -> Result<(), StoreError>;
}
