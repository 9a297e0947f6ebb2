//! Watchman groups and selection.

use rand::Rng;
use tracing::debug;

use super::{Headcount, RolePool, Selection, INCOMPLETE_SELECTION};
use crate::config::GroupRoster;
use crate::error::{Result, RosterError};
use crate::models::{GroupStats, NewPerson, Person, PersonId, Role, VolunteerGroup, WATCHMAN_SLOTS};
use crate::store::PersonStore;

/// Watchmen picked per meeting.
pub const DEFAULT_WATCHMAN_COUNT: usize = WATCHMAN_SLOTS;

/// Watchman selection over a person store and a group roster.
///
/// Groups are recomputed from the store on every call: a watchman belongs
/// to a group when their full name matches one of the group's configured
/// names exactly. Watchmen not named by the roster belong to no group.
///
/// # Example
/// ```
/// use u_roster::config::GroupRoster;
/// use u_roster::models::NewPerson;
/// use u_roster::store::MemoryPersonStore;
/// use u_roster::volunteers::WatchmanService;
///
/// let store = MemoryPersonStore::with_people([
///     NewPerson::watchman("Rocio", "Ferreira"),
///     NewPerson::watchman("Yanina", "Gomez"),
///     NewPerson::watchman("Analia", "Israelson"),
/// ]);
/// let roster = GroupRoster::new([(1, ["Ferreira Rocio", "Gomez Yanina", "Israelson Analia"])]);
/// let watchmen = WatchmanService::new(&store, roster);
///
/// let pick = watchmen.select_from_group(1).unwrap();
/// assert_eq!(
///     pick.summary,
///     "Vigilancia 1° hora: Ferreira Rocio\n\n\
///      Vigilancia 2° hora: Gomez Yanina\n\n\
///      Vigilancia después de la reunión: Israelson Analia"
/// );
/// ```
#[derive(Debug)]
pub struct WatchmanService<'a, S: ?Sized> {
    pool: RolePool<'a, S>,
    roster: GroupRoster,
}

impl<'a, S: PersonStore + ?Sized> WatchmanService<'a, S> {
    pub fn new(store: &'a S, roster: GroupRoster) -> Self {
        Self {
            pool: RolePool::new(store, Role::Watchman),
            roster,
        }
    }

    pub fn roster(&self) -> &GroupRoster {
        &self.roster
    }

    /// Active watchmen, ordered by family then given name.
    pub fn active(&self) -> Result<Vec<Person>> {
        self.pool.active()
    }

    /// Current groups, in roster order.
    pub fn groups_now(&self) -> Result<Vec<VolunteerGroup>> {
        let active = self.active()?;
        Ok(self
            .roster
            .groups
            .iter()
            .map(|g| {
                let members = active
                    .iter()
                    .filter(|p| g.members.contains(&p.full_name()))
                    .cloned()
                    .collect();
                VolunteerGroup::new(g.number, members)
            })
            .collect())
    }

    /// One group, or `None` when the number is not configured.
    pub fn group(&self, number: u8) -> Result<Option<VolunteerGroup>> {
        Ok(self.groups_now()?.into_iter().find(|g| g.number == number))
    }

    /// Number of the first group containing `person`, 0 when none does.
    pub fn group_of(&self, person: &Person) -> Result<u8> {
        Ok(self
            .groups_now()?
            .iter()
            .find(|g| g.contains(person))
            .map_or(0, |g| g.number))
    }

    /// Picks `count` watchmen at random, optionally skipping one group.
    ///
    /// `Some(0)` behaves like `None`. Any other group number must be
    /// configured.
    pub fn select_random<R: Rng + ?Sized>(
        &self,
        count: usize,
        exclude_group: Option<u8>,
        rng: &mut R,
    ) -> Result<Selection> {
        let mut candidates = self.active()?;

        if let Some(number) = exclude_group.filter(|&n| n != 0) {
            let excluded = self
                .group(number)?
                .ok_or_else(|| RosterError::invalid(format!("group {number} is not configured")))?;
            candidates.retain(|p| !excluded.contains(p));
            debug!(group = number, remaining = candidates.len(), "excluded group");
        }

        let people = self.pool.sample(&candidates, count, rng)?;
        Ok(selection(people))
    }

    /// The first three active members of a group, in store order.
    pub fn select_from_group(&self, number: u8) -> Result<Selection> {
        let group = self
            .group(number)?
            .ok_or_else(|| RosterError::invalid(format!("group {number} is not configured")))?;
        if group.len() < WATCHMAN_SLOTS {
            return Err(RosterError::InsufficientCandidates {
                role: Role::Watchman,
                required: WATCHMAN_SLOTS,
                available: group.len(),
            });
        }
        debug!(group = number, "selected from group");
        Ok(selection(
            group.members.into_iter().take(WATCHMAN_SLOTS).collect(),
        ))
    }

    pub fn activate(&self, id: PersonId) -> Result<()> {
        self.pool.activate(id)
    }

    pub fn deactivate(&self, id: PersonId) -> Result<()> {
        self.pool.deactivate(id)
    }

    /// Reactivates every watchman and returns the active list.
    pub fn reactivate_all(&self) -> Result<Vec<Person>> {
        self.pool.reactivate_all()
    }

    /// Stores a new watchman. `group` is recorded on the person only; roster
    /// membership still comes from the configured names.
    pub fn add(
        &self,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        group: Option<u8>,
    ) -> Result<Person> {
        let mut person = NewPerson::watchman(given_name, family_name);
        person.group = group;
        self.pool.add(person)
    }

    pub fn minimum_met(&self, required: usize) -> Result<Headcount> {
        self.pool.minimum_met(required)
    }

    /// Per-group summary, in roster order.
    pub fn group_stats(&self) -> Result<Vec<GroupStats>> {
        Ok(self.groups_now()?.iter().map(GroupStats::from).collect())
    }
}

fn selection(people: Vec<Person>) -> Selection {
    let summary = match people.as_slice() {
        [first, second, closing, ..] => format!(
            "Vigilancia 1° hora: {first}\n\n\
             Vigilancia 2° hora: {second}\n\n\
             Vigilancia después de la reunión: {closing}"
        ),
        _ => INCOMPLETE_SELECTION.to_string(),
    };
    Selection { people, summary }
}
