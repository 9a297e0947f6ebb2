//! Assignment assembly and storage.
//!
//! [`AssignmentService`] turns a week and two selections into an
//! [`Assignment`], validates it and hands it to an [`AssignmentStore`].
//! Saving and clearing report failure as a value rather than an error, so a
//! caller presenting the result never has to unwind a storage fault.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::calendar::month_name;
use crate::error::{MissingField, Result, RosterError};
use crate::models::{
    Assignment, AssignmentColumn, AssignmentId, AssignmentRow, MeetingKind, Person, Week,
    USHER_SLOTS, WATCHMAN_SLOTS,
};
use crate::store::AssignmentStore;

/// Outcome of [`AssignmentService::save`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOutcome {
    pub success: bool,
    /// Stored id on success, the reason otherwise.
    pub id: Option<AssignmentId>,
    pub message: String,
}

/// Assignment operations over an assignment store.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use u_roster::assignments::AssignmentService;
/// use u_roster::config::RosterConfig;
/// use u_roster::models::{MeetingKind, NewPerson, PersonId};
/// use u_roster::store::MemoryAssignmentStore;
/// use u_roster::weeks::WeekService;
///
/// let weeks = WeekService::new(&RosterConfig::default()).unwrap();
/// let start = NaiveDate::from_ymd_opt(2025, 1, 13).unwrap();
/// let week = weeks.generate(Some(start), 1).unwrap().remove(0);
///
/// let people = |n: u64| -> Vec<_> {
///     (1..=n).map(|i| NewPerson::usher(format!("P{i}"), "Test").into_person(PersonId(i))).collect()
/// };
///
/// let store = MemoryAssignmentStore::new();
/// let service = AssignmentService::new(&store);
/// let assignment = service
///     .create(week, &people(5), &people(3), MeetingKind::Midweek)
///     .unwrap();
/// assert_eq!(assignment.meeting_day, "Miércoles 15");
///
/// let outcome = service.save(&assignment);
/// assert!(outcome.success);
/// assert_eq!(service.list_by_month(1).unwrap().len(), 1);
/// ```
#[derive(Debug)]
pub struct AssignmentService<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: AssignmentStore + ?Sized> AssignmentService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Builds a complete assignment.
    ///
    /// Ushers fill `[hour1, hour1, hour2, hour2, closing]` and watchmen
    /// `[hour1, hour2, closing]`. The meeting-day label comes from the
    /// week's midweek or weekend meeting, honoring overrides.
    pub fn create(
        &self,
        week: Week,
        ushers: &[Person],
        watchmen: &[Person],
        kind: MeetingKind,
    ) -> Result<Assignment> {
        if ushers.len() != USHER_SLOTS {
            return Err(RosterError::invalid(format!(
                "exactly {USHER_SLOTS} ushers are required, got {}",
                ushers.len()
            )));
        }
        if watchmen.len() != WATCHMAN_SLOTS {
            return Err(RosterError::invalid(format!(
                "exactly {WATCHMAN_SLOTS} watchmen are required, got {}",
                watchmen.len()
            )));
        }
        let meeting_day = week.meeting_label(kind);
        Ok(Assignment::new()
            .with_week(week)
            .with_ushers(ushers)
            .with_watchmen(watchmen)
            .with_meeting_day(meeting_day))
    }

    /// Validates and stores an assignment. Never fails; see [`SaveOutcome`].
    pub fn save(&self, assignment: &Assignment) -> SaveOutcome {
        if let Err(e) = assignment.validate() {
            let reason = match e {
                RosterError::ValidationFailed(field) => missing_message(field).to_string(),
                other => other.to_string(),
            };
            return SaveOutcome {
                success: false,
                id: None,
                message: format!("Asignación inválida: {reason}"),
            };
        }
        match self.store.save(assignment) {
            Ok(id) => {
                info!(%id, meeting_day = %assignment.meeting_day, "assignment saved");
                SaveOutcome {
                    success: true,
                    id: Some(id),
                    message: format!("Asignación guardada con ID {id}"),
                }
            }
            Err(e) => {
                error!(error = %e, "saving assignment failed");
                SaveOutcome {
                    success: false,
                    id: None,
                    message: format!("Error al guardar: {e}"),
                }
            }
        }
    }

    /// Every stored row.
    pub fn list_all(&self) -> Result<Vec<AssignmentRow>> {
        self.store
            .list_all()
            .map_err(|e| RosterError::persistence("listing assignments", e))
    }

    /// Rows whose week label names the month (1..=12).
    pub fn list_by_month(&self, month: u32) -> Result<Vec<AssignmentRow>> {
        if month_name(month).is_none() {
            return Err(RosterError::invalid(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        self.store
            .list_by_month(month)
            .map_err(|e| RosterError::persistence(format!("listing assignments for month {month}"), e))
    }

    /// Removes every stored assignment. Failures are logged and reported as
    /// `false`.
    pub fn clear(&self) -> bool {
        match self.store.clear() {
            Ok(()) => {
                info!("assignments cleared");
                true
            }
            Err(e) => {
                error!(error = %e, "clearing assignments failed");
                false
            }
        }
    }

    /// Edits one column of a stored row, by column name.
    pub fn update(&self, id: AssignmentId, column: &str, value: &str) -> Result<()> {
        let column: AssignmentColumn = column.parse()?;
        self.store
            .update(id, column, value)
            .map_err(|e| RosterError::persistence(format!("updating assignment {id}"), e))
    }
}

fn missing_message(field: MissingField) -> &'static str {
    match field {
        MissingField::Week => "Falta la semana",
        MissingField::Ushers => "Faltan acomodadores",
        MissingField::Watchmen => "Faltan vigilantes",
        MissingField::MeetingDay => "Falta el día de reunión",
    }
}
