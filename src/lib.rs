//! Volunteer roster scheduling for a weekly congregation meeting.
//!
//! Generates the weekly calendar (meeting days, special events, rotating
//! cleaning crew), picks ushers and watchmen for each meeting, and records
//! the resulting assignments through pluggable storage.
//!
//! # Modules
//!
//! - **`calendar`**: Monday alignment, week arithmetic, Spanish month names, `Clock`
//! - **`rotation`**: Six-group cleaning rotation anchored to a reference week
//! - **`weeks`**: `WeekBuilder` and `WeekService` (generation, current and
//!   upcoming weeks, special weeks, gaps between events)
//! - **`volunteers`**: `UsherService` and `WatchmanService` (random and
//!   group-based selection, activation, headcount)
//! - **`assignments`**: `AssignmentService` (create, validate, save, list, edit)
//! - **`store`**: `PersonStore` / `AssignmentStore` contracts and in-memory stores
//! - **`models`**: `Week`, `Person`, `VolunteerGroup`, `Assignment`, `AssignmentRow`
//! - **`config`**: `RosterConfig` (rotation anchor, calendar exceptions, crews), TOML loading
//! - **`error`**: `RosterError`, `StoreError`
//!
//! # Architecture
//!
//! Services are synchronous and hold no global state. Everything that
//! varies between deployments comes in through [`config::RosterConfig`];
//! everything with side effects comes in through a collaborator: storage
//! through the `store` traits, today's date through
//! [`calendar::Clock`], randomness through a caller-supplied
//! [`rand::Rng`]. Diagnostics go to `tracing`; installing a subscriber is
//! left to the application.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rand::{rngs::SmallRng, SeedableRng};
//! use u_roster::assignments::AssignmentService;
//! use u_roster::calendar::FixedClock;
//! use u_roster::config::RosterConfig;
//! use u_roster::models::{MeetingKind, NewPerson};
//! use u_roster::store::{MemoryAssignmentStore, MemoryPersonStore};
//! use u_roster::volunteers::{UsherService, WatchmanService};
//! use u_roster::weeks::WeekService;
//!
//! let config = RosterConfig::default();
//! let today = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
//! let weeks = WeekService::with_clock(&config, FixedClock(today)).unwrap();
//! let week = weeks.generate(None, 4).unwrap().remove(0);
//!
//! let people = MemoryPersonStore::with_people(
//!     ["Ana", "Bea", "Carla", "Dora", "Eva"]
//!         .map(|n| NewPerson::usher(n, "Perez"))
//!         .into_iter()
//!         .chain(["Iris", "Maia", "Rosa"].map(|n| NewPerson::watchman(n, "Lopez"))),
//! );
//! let ushers = UsherService::new(&people);
//! let watchmen = WatchmanService::new(&people, config.roster.clone());
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let u = ushers.select_random(5, &mut rng).unwrap();
//! let w = watchmen.select_random(3, None, &mut rng).unwrap();
//!
//! let store = MemoryAssignmentStore::new();
//! let assignments = AssignmentService::new(&store);
//! let a = assignments
//!     .create(week, &u.people, &w.people, MeetingKind::Midweek)
//!     .unwrap();
//! assert!(assignments.save(&a).success);
//! assert_eq!(assignments.list_by_month(3).unwrap().len(), 1);
//! ```

pub mod assignments;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod rotation;
pub mod store;
pub mod volunteers;
pub mod weeks;

pub use error::{Result, RosterError, StoreError};
