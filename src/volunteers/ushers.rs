//! Usher selection.

use rand::Rng;

use super::{Headcount, RolePool, Selection, INCOMPLETE_SELECTION};
use crate::error::Result;
use crate::models::{NewPerson, Person, PersonId, Role, USHER_SLOTS};
use crate::store::PersonStore;

/// Ushers picked per meeting.
pub const DEFAULT_USHER_COUNT: usize = USHER_SLOTS;

/// Usher selection over a person store.
#[derive(Debug)]
pub struct UsherService<'a, S: ?Sized> {
    pool: RolePool<'a, S>,
}

impl<'a, S: PersonStore + ?Sized> UsherService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            pool: RolePool::new(store, Role::Usher),
        }
    }

    /// Active ushers, ordered by family then given name.
    pub fn active(&self) -> Result<Vec<Person>> {
        self.pool.active()
    }

    /// Picks `count` active ushers at random.
    ///
    /// Slots are filled in pick order: two for the first hour, two for the
    /// second, one after the meeting.
    pub fn select_random<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Selection> {
        let candidates = self.active()?;
        let people = self.pool.sample(&candidates, count, rng)?;
        Ok(selection(people))
    }

    pub fn activate(&self, id: PersonId) -> Result<()> {
        self.pool.activate(id)
    }

    pub fn deactivate(&self, id: PersonId) -> Result<()> {
        self.pool.deactivate(id)
    }

    pub fn reactivate_all(&self) -> Result<Vec<Person>> {
        self.pool.reactivate_all()
    }

    pub fn add(
        &self,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
    ) -> Result<Person> {
        self.pool.add(NewPerson::usher(given_name, family_name))
    }

    pub fn minimum_met(&self, required: usize) -> Result<Headcount> {
        self.pool.minimum_met(required)
    }
}

fn selection(people: Vec<Person>) -> Selection {
    let summary = match people.as_slice() {
        [a, b, c, d, closing, ..] => format!(
            "Acomodadores 1° hora: {a} / {b}\n\n\
             Acomodadores 2° hora: {c} / {d}\n\n\
             Acomodador después de la reunión: {closing}"
        ),
        _ => INCOMPLETE_SELECTION.to_string(),
    };
    Selection { people, summary }
}
