//! In-memory stores.

use std::cell::{Cell, RefCell};

use super::{AssignmentStore, PersonStore};
use crate::calendar::month_name;
use crate::error::StoreError;
use crate::models::{
    Assignment, AssignmentColumn, AssignmentId, AssignmentRow, NewPerson, Person, PersonId, Role,
};

/// Person store held in memory. Identities start at 1.
#[derive(Debug, Default)]
pub struct MemoryPersonStore {
    people: RefCell<Vec<Person>>,
    next_id: Cell<u64>,
}

impl MemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `people`.
    pub fn with_people(people: impl IntoIterator<Item = NewPerson>) -> Self {
        let store = Self::new();
        for p in people {
            store.insert(p);
        }
        store
    }

    /// Looks up a person by identity.
    pub fn get(&self, id: PersonId) -> Option<Person> {
        self.people.borrow().iter().find(|p| p.id == id).cloned()
    }

    fn insert(&self, person: NewPerson) -> PersonId {
        let id = PersonId(self.next_id.get() + 1);
        self.next_id.set(id.0);
        self.people.borrow_mut().push(person.into_person(id));
        id
    }

    fn sorted(&self, role: Role, only_active: bool) -> Vec<Person> {
        let mut people: Vec<Person> = self
            .people
            .borrow()
            .iter()
            .filter(|p| p.role == role && (p.active || !only_active))
            .cloned()
            .collect();
        people.sort_by(|a, b| {
            a.family_name
                .cmp(&b.family_name)
                .then_with(|| a.given_name.cmp(&b.given_name))
        });
        people
    }
}

impl PersonStore for MemoryPersonStore {
    fn list_active(&self, role: Role) -> Result<Vec<Person>, StoreError> {
        Ok(self.sorted(role, true))
    }

    fn list_all(&self, role: Role) -> Result<Vec<Person>, StoreError> {
        Ok(self.sorted(role, false))
    }

    fn add(&self, person: NewPerson) -> Result<PersonId, StoreError> {
        Ok(self.insert(person))
    }

    fn set_active(&self, id: PersonId, active: bool) -> Result<(), StoreError> {
        let mut people = self.people.borrow_mut();
        let person = people
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::PersonNotFound(id))?;
        person.active = active;
        Ok(())
    }
}

/// Assignment store held in memory. Identities start at 1.
#[derive(Debug, Default)]
pub struct MemoryAssignmentStore {
    rows: RefCell<Vec<AssignmentRow>>,
    next_id: Cell<u64>,
}

impl MemoryAssignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }
}

impl AssignmentStore for MemoryAssignmentStore {
    fn save(&self, assignment: &Assignment) -> Result<AssignmentId, StoreError> {
        let id = AssignmentId(self.next_id.get() + 1);
        self.next_id.set(id.0);
        self.rows
            .borrow_mut()
            .push(AssignmentRow::from_assignment(id, assignment));
        Ok(id)
    }

    fn list_all(&self) -> Result<Vec<AssignmentRow>, StoreError> {
        Ok(self.rows.borrow().clone())
    }

    fn list_by_month(&self, month: u32) -> Result<Vec<AssignmentRow>, StoreError> {
        let name = month_name(month)
            .ok_or_else(|| StoreError::Backend(format!("no month numbered {month}")))?;
        Ok(self
            .rows
            .borrow()
            .iter()
            .filter(|r| r.week_mentions(name))
            .cloned()
            .collect())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.rows.borrow_mut().clear();
        Ok(())
    }

    fn update(
        &self,
        id: AssignmentId,
        column: AssignmentColumn,
        value: &str,
    ) -> Result<(), StoreError> {
        let mut rows = self.rows.borrow_mut();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::AssignmentNotFound(id.0))?;
        row.set(column, value);
        Ok(())
    }
}
