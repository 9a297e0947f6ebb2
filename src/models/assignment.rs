//! Assignment model.
//!
//! An assignment fills the slots of one week's meeting:
//!
//! | Slot | Ushers | Watchmen |
//! |------|--------|----------|
//! | First hour | 2 | 1 |
//! | Second hour | 2 | 1 |
//! | After the meeting | 1 | 1 |
//!
//! Slots are optional while an assignment is being assembled;
//! [`Assignment::validate`] checks completeness before it is stored.
//! Stored assignments come back as flat [`AssignmentRow`]s.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Person, Week};
use crate::error::{MissingField, Result, RosterError};

/// Number of usher slots per assignment.
pub const USHER_SLOTS: usize = 5;
/// Number of watchman slots per assignment.
pub const WATCHMAN_SLOTS: usize = 3;

/// Identity assigned by the assignment store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentId(pub u64);

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The filled slots for one week's meeting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Target week.
    pub week: Option<Week>,
    /// First-hour usher pair.
    pub usher_hour1: [Option<Person>; 2],
    /// Second-hour usher pair.
    pub usher_hour2: [Option<Person>; 2],
    /// Usher after the meeting.
    pub usher_closing: Option<Person>,
    /// First-hour watchman.
    pub watchman_hour1: Option<Person>,
    /// Second-hour watchman.
    pub watchman_hour2: Option<Person>,
    /// Watchman after the meeting.
    pub watchman_closing: Option<Person>,
    /// Meeting day label, e.g. `"Miércoles 15"`.
    pub meeting_day: String,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target week.
    pub fn with_week(mut self, week: Week) -> Self {
        self.week = Some(week);
        self
    }

    /// Fills usher slots in order `[hour1, hour1, hour2, hour2, closing]`.
    /// Missing trailing people leave their slots empty; extras are ignored.
    pub fn with_ushers(mut self, ushers: &[Person]) -> Self {
        let mut slots = ushers.iter().cloned().map(Some);
        self.usher_hour1 = [slots.next().flatten(), slots.next().flatten()];
        self.usher_hour2 = [slots.next().flatten(), slots.next().flatten()];
        self.usher_closing = slots.next().flatten();
        self
    }

    /// Fills watchman slots in order `[hour1, hour2, closing]`.
    pub fn with_watchmen(mut self, watchmen: &[Person]) -> Self {
        let mut slots = watchmen.iter().cloned();
        self.watchman_hour1 = slots.next();
        self.watchman_hour2 = slots.next();
        self.watchman_closing = slots.next();
        self
    }

    /// Sets the meeting day label.
    pub fn with_meeting_day(mut self, label: impl Into<String>) -> Self {
        self.meeting_day = label.into();
        self
    }

    /// `"A / B"` for the first-hour pair, empty if either slot is open.
    pub fn ushers_hour1_label(&self) -> String {
        pair_label(&self.usher_hour1)
    }

    /// `"A / B"` for the second-hour pair, empty if either slot is open.
    pub fn ushers_hour2_label(&self) -> String {
        pair_label(&self.usher_hour2)
    }

    fn usher_slots(&self) -> [&Option<Person>; USHER_SLOTS] {
        [
            &self.usher_hour1[0],
            &self.usher_hour1[1],
            &self.usher_hour2[0],
            &self.usher_hour2[1],
            &self.usher_closing,
        ]
    }

    fn watchman_slots(&self) -> [&Option<Person>; WATCHMAN_SLOTS] {
        [
            &self.watchman_hour1,
            &self.watchman_hour2,
            &self.watchman_closing,
        ]
    }

    /// Checks that the week, all eight slots and the meeting day are set.
    ///
    /// Missing fields are reported in the order week, ushers, watchmen,
    /// meeting day; only the first one is named.
    pub fn validate(&self) -> Result<()> {
        if self.week.is_none() {
            return Err(RosterError::ValidationFailed(MissingField::Week));
        }
        if self.usher_slots().iter().any(|s| s.is_none()) {
            return Err(RosterError::ValidationFailed(MissingField::Ushers));
        }
        if self.watchman_slots().iter().any(|s| s.is_none()) {
            return Err(RosterError::ValidationFailed(MissingField::Watchmen));
        }
        if self.meeting_day.is_empty() {
            return Err(RosterError::ValidationFailed(MissingField::MeetingDay));
        }
        Ok(())
    }
}

fn pair_label(pair: &[Option<Person>; 2]) -> String {
    match pair {
        [Some(a), Some(b)] => format!("{a} / {b}"),
        _ => String::new(),
    }
}

fn slot_label(slot: &Option<Person>) -> String {
    slot.as_ref().map(Person::full_name).unwrap_or_default()
}

/// A stored assignment, flattened to display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub id: AssignmentId,
    /// Week label, e.g. `"6-12 enero 2025"`.
    pub week: String,
    pub ushers_hour1: String,
    pub ushers_hour2: String,
    pub usher_closing: String,
    pub watchman_hour1: String,
    pub watchman_hour2: String,
    pub watchman_closing: String,
    pub meeting_day: String,
}

impl AssignmentRow {
    /// Flattens an assignment under the given identity.
    pub fn from_assignment(id: AssignmentId, assignment: &Assignment) -> Self {
        Self {
            id,
            week: assignment
                .week
                .as_ref()
                .map(Week::label)
                .unwrap_or_default(),
            ushers_hour1: assignment.ushers_hour1_label(),
            ushers_hour2: assignment.ushers_hour2_label(),
            usher_closing: slot_label(&assignment.usher_closing),
            watchman_hour1: slot_label(&assignment.watchman_hour1),
            watchman_hour2: slot_label(&assignment.watchman_hour2),
            watchman_closing: slot_label(&assignment.watchman_closing),
            meeting_day: assignment.meeting_day.clone(),
        }
    }

    /// Overwrites one editable column.
    pub fn set(&mut self, column: AssignmentColumn, value: impl Into<String>) {
        let value = value.into();
        match column {
            AssignmentColumn::UshersHour1 => self.ushers_hour1 = value,
            AssignmentColumn::UshersHour2 => self.ushers_hour2 = value,
            AssignmentColumn::UsherClosing => self.usher_closing = value,
            AssignmentColumn::WatchmanHour1 => self.watchman_hour1 = value,
            AssignmentColumn::WatchmanHour2 => self.watchman_hour2 = value,
            AssignmentColumn::WatchmanClosing => self.watchman_closing = value,
            AssignmentColumn::MeetingDay => self.meeting_day = value,
        }
    }

    /// Whether the week label mentions the given (lowercase) text.
    pub fn week_mentions(&self, needle: &str) -> bool {
        self.week.to_lowercase().contains(needle)
    }
}

/// Columns of a stored row that may be edited after saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentColumn {
    UshersHour1,
    UshersHour2,
    UsherClosing,
    WatchmanHour1,
    WatchmanHour2,
    WatchmanClosing,
    MeetingDay,
}

impl AssignmentColumn {
    /// All editable columns.
    pub const ALL: [AssignmentColumn; 7] = [
        AssignmentColumn::UshersHour1,
        AssignmentColumn::UshersHour2,
        AssignmentColumn::UsherClosing,
        AssignmentColumn::WatchmanHour1,
        AssignmentColumn::WatchmanHour2,
        AssignmentColumn::WatchmanClosing,
        AssignmentColumn::MeetingDay,
    ];

    /// Column name as used by stores.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentColumn::UshersHour1 => "ushers_hour1",
            AssignmentColumn::UshersHour2 => "ushers_hour2",
            AssignmentColumn::UsherClosing => "usher_closing",
            AssignmentColumn::WatchmanHour1 => "watchman_hour1",
            AssignmentColumn::WatchmanHour2 => "watchman_hour2",
            AssignmentColumn::WatchmanClosing => "watchman_closing",
            AssignmentColumn::MeetingDay => "meeting_day",
        }
    }
}

impl FromStr for AssignmentColumn {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        AssignmentColumn::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| RosterError::invalid(format!("column '{s}' is not editable")))
    }
}
