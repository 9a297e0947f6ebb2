//! Volunteer selection.
//!
//! | Service | Pool | Default pick | Slots |
//! |---------|------|--------------|-------|
//! | [`UsherService`] | active ushers | 5 | 2 + 2 + 1 |
//! | [`WatchmanService`] | active watchmen, optionally minus one group | 3 | 1 + 1 + 1 |
//!
//! Both services share pool maintenance (activation, bulk reactivation,
//! headcount checks) through [`RolePool`]. Random picks are uniform and
//! without replacement; the random source is always supplied by the caller
//! so runs can be reproduced with a seeded generator.
//!
//! # Example
//! ```
//! use rand::{rngs::SmallRng, SeedableRng};
//! use u_roster::models::NewPerson;
//! use u_roster::store::MemoryPersonStore;
//! use u_roster::volunteers::UsherService;
//!
//! let store = MemoryPersonStore::with_people(
//!     ["Ana", "Bea", "Carla", "Dora", "Eva"].map(|n| NewPerson::usher(n, "Perez")),
//! );
//! let ushers = UsherService::new(&store);
//! let mut rng = SmallRng::seed_from_u64(7);
//! let pick = ushers.select_random(5, &mut rng).unwrap();
//! assert_eq!(pick.people.len(), 5);
//! assert!(pick.summary.starts_with("Acomodadores 1° hora: "));
//! ```

mod pool;
mod ushers;
mod watchmen;

pub use pool::RolePool;
pub use ushers::{UsherService, DEFAULT_USHER_COUNT};
pub use watchmen::{WatchmanService, DEFAULT_WATCHMAN_COUNT};

use serde::{Deserialize, Serialize};

use crate::models::{Person, Role};

/// Summary text used when a selection cannot fill every slot.
pub const INCOMPLETE_SELECTION: &str = "Selección incompleta";

/// People picked for one meeting, with a display summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Picked people, in slot order.
    pub people: Vec<Person>,
    /// Multi-line summary naming each slot.
    pub summary: String,
}

/// Result of a minimum-headcount check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headcount {
    pub role: Role,
    pub active: usize,
    pub required: usize,
}

impl Headcount {
    /// Whether the active count reaches the requirement.
    pub fn is_met(&self) -> bool {
        self.active >= self.required
    }

    /// Display message, e.g. `"Hay 4 vigilantes activos. Se necesitan al menos 3."`.
    pub fn message(&self) -> String {
        let plural = match self.role {
            Role::Usher => "acomodadores",
            Role::Watchman => "vigilantes",
        };
        format!(
            "Hay {} {} activos. Se necesitan al menos {}.",
            self.active, plural, self.required
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headcount() {
        let h = Headcount {
            role: Role::Watchman,
            active: 4,
            required: 3,
        };
        assert!(h.is_met());
        assert_eq!(h.message(), "Hay 4 vigilantes activos. Se necesitan al menos 3.");

        let h = Headcount {
            role: Role::Usher,
            active: 4,
            required: 5,
        };
        assert!(!h.is_met());
        assert_eq!(h.message(), "Hay 4 acomodadores activos. Se necesitan al menos 5.");
    }
}
