//! Roster domain models.
//!
//! Plain data shared by the services and handed to presentation and
//! storage collaborators.
//!
//! | Model | Meaning |
//! |-------|---------|
//! | Week | Monday-to-Sunday period with meeting days and cleaning group |
//! | Person | Usher or watchman, soft-disabled when inactive |
//! | VolunteerGroup | Active watchmen matching one configured crew |
//! | Assignment | Filled slots for one week's meeting |
//! | AssignmentRow | Stored assignment flattened to display strings |

mod assignment;
mod group;
mod person;
mod week;

pub use assignment::{
    Assignment, AssignmentColumn, AssignmentId, AssignmentRow, USHER_SLOTS, WATCHMAN_SLOTS,
};
pub use group::{GroupStats, VolunteerGroup};
pub use person::{NewPerson, Person, PersonId, Role};
pub use week::{MeetingDay, MeetingKind, Week, WeekKind};
