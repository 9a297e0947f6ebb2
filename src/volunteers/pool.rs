//! Shared role pool maintenance.

use rand::seq::index;
use rand::Rng;
use tracing::{debug, info, warn};

use super::Headcount;
use crate::error::{Result, RosterError};
use crate::models::{NewPerson, Person, PersonId, Role};
use crate::store::PersonStore;

/// One role's slice of the person store.
#[derive(Debug)]
pub struct RolePool<'a, S: ?Sized> {
    store: &'a S,
    role: Role,
}

impl<'a, S: PersonStore + ?Sized> RolePool<'a, S> {
    pub fn new(store: &'a S, role: Role) -> Self {
        Self { store, role }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Active members, in store order.
    pub fn active(&self) -> Result<Vec<Person>> {
        self.store
            .list_active(self.role)
            .map_err(|e| RosterError::persistence(format!("listing active {}s", self.role), e))
    }

    /// Marks a person selectable.
    pub fn activate(&self, id: PersonId) -> Result<()> {
        self.set_active(id, true)
    }

    /// Marks a person unselectable. The record is kept.
    pub fn deactivate(&self, id: PersonId) -> Result<()> {
        self.set_active(id, false)
    }

    /// Reactivates every member of the role and returns the active list.
    pub fn reactivate_all(&self) -> Result<Vec<Person>> {
        let everyone = self
            .store
            .list_all(self.role)
            .map_err(|e| RosterError::persistence(format!("listing {}s", self.role), e))?;
        for p in everyone.iter().filter(|p| !p.active) {
            self.set_active(p.id, true)?;
        }
        info!(role = %self.role, count = everyone.len(), "reactivated all");
        self.active()
    }

    /// Stores a new active member of this role.
    pub fn add(&self, mut person: NewPerson) -> Result<Person> {
        person.role = self.role;
        person.active = true;
        let id = self
            .store
            .add(person.clone())
            .map_err(|e| RosterError::persistence(format!("adding {}", self.role), e))?;
        info!(role = %self.role, %id, "added volunteer");
        Ok(person.into_person(id))
    }

    /// Compares the active count against `required`.
    pub fn minimum_met(&self, required: usize) -> Result<Headcount> {
        Ok(Headcount {
            role: self.role,
            active: self.active()?.len(),
            required,
        })
    }

    /// Picks `count` candidates uniformly without replacement.
    ///
    /// The result order is random as well, so slot positions are too.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        candidates: &[Person],
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Person>> {
        if candidates.len() < count {
            warn!(
                role = %self.role,
                required = count,
                available = candidates.len(),
                "not enough candidates"
            );
            return Err(RosterError::InsufficientCandidates {
                role: self.role,
                required: count,
                available: candidates.len(),
            });
        }
        debug!(role = %self.role, count, pool = candidates.len(), "sampling");
        Ok(index::sample(rng, candidates.len(), count)
            .into_iter()
            .map(|i| candidates[i].clone())
            .collect())
    }

    fn set_active(&self, id: PersonId, active: bool) -> Result<()> {
        self.store
            .set_active(id, active)
            .map_err(|e| RosterError::persistence(format!("updating {} {id}", self.role), e))?;
        info!(role = %self.role, %id, active, "activation changed");
        Ok(())
    }
}
