//! Week composition.

use chrono::{NaiveDate, TimeDelta};
use std::collections::HashMap;

use crate::calendar::same_week;
use crate::config::{CalendarConfig, OverrideDay, SpecialEvent};
use crate::models::{Week, WeekKind};

/// Composes [`Week`] values from a Monday, its number and its cleaning
/// group, applying irregular meeting days and special events.
#[derive(Debug, Clone, Default)]
pub struct WeekBuilder {
    exceptions: HashMap<NaiveDate, OverrideDay>,
    events: Vec<SpecialEvent>,
}

impl WeekBuilder {
    /// Creates a builder from calendar configuration.
    ///
    /// A date listed twice keeps its last override.
    pub fn new(config: CalendarConfig) -> Self {
        Self {
            exceptions: config
                .meeting_exceptions
                .into_iter()
                .map(|e| (e.date, e.day))
                .collect(),
            events: config.special_events,
        }
    }

    /// Builds the week starting at `monday`.
    ///
    /// Inputs are not validated: a non-Monday `monday` shifts every derived
    /// date by the same amount.
    pub fn build(&self, monday: NaiveDate, number: u32, cleaning_group: u8) -> Week {
        let tuesday = monday + TimeDelta::days(1);
        let saturday = monday + TimeDelta::days(5);

        let tuesday_override =
            (self.exceptions.get(&tuesday) == Some(&OverrideDay::Tuesday)).then_some(tuesday);
        let saturday_override =
            (self.exceptions.get(&saturday) == Some(&OverrideDay::Saturday)).then_some(saturday);

        // First matching event wins.
        let (kind, event_label) = self
            .events
            .iter()
            .find(|e| same_week(monday, e.date))
            .map(|e| (e.kind, Some(e.label.clone())))
            .unwrap_or((WeekKind::Normal, None));

        Week {
            start: monday,
            number,
            cleaning_group,
            wednesday: monday + TimeDelta::days(2),
            sunday: monday + TimeDelta::days(6),
            tuesday_override,
            saturday_override,
            kind,
            event_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MeetingException;
    use crate::models::MeetingDay;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(date: NaiveDate, kind: WeekKind, label: &str) -> SpecialEvent {
        SpecialEvent {
            date,
            kind,
            label: label.into(),
        }
    }

    #[test]
    fn test_regular_week() {
        let w = WeekBuilder::default().build(date(2025, 1, 13), 3, 4);
        assert_eq!(w.number, 3);
        assert_eq!(w.cleaning_group, 4);
        assert_eq!(w.wednesday, date(2025, 1, 15));
        assert_eq!(w.sunday, date(2025, 1, 19));
        assert_eq!(w.tuesday_override, None);
        assert_eq!(w.saturday_override, None);
        assert_eq!(w.kind, WeekKind::Normal);
        assert_eq!(w.event_label, None);
    }

    #[test]
    fn test_meeting_exceptions() {
        let builder = WeekBuilder::new(CalendarConfig {
            meeting_exceptions: vec![
                MeetingException {
                    date: date(2025, 7, 8),
                    day: OverrideDay::Tuesday,
                },
                MeetingException {
                    date: date(2025, 7, 12),
                    day: OverrideDay::Saturday,
                },
            ],
            special_events: vec![],
        });

        let w = builder.build(date(2025, 7, 7), 1, 1);
        assert_eq!(w.tuesday_override, Some(date(2025, 7, 8)));
        assert_eq!(w.saturday_override, Some(date(2025, 7, 12)));
        assert_eq!(w.midweek_meeting().0, MeetingDay::Tuesday);
        assert_eq!(w.weekend_meeting().0, MeetingDay::Saturday);

        let next = builder.build(date(2025, 7, 14), 2, 2);
        assert_eq!(next.tuesday_override, None);
        assert_eq!(next.saturday_override, None);
    }

    #[test]
    fn test_exception_must_match_its_day() {
        // A Saturday listed as a Tuesday override moves nothing.
        let builder = WeekBuilder::new(CalendarConfig {
            meeting_exceptions: vec![MeetingException {
                date: date(2025, 7, 12),
                day: OverrideDay::Tuesday,
            }],
            special_events: vec![],
        });
        let w = builder.build(date(2025, 7, 7), 1, 1);
        assert_eq!(w.saturday_override, None);
        assert_eq!(w.tuesday_override, None);
    }

    #[test]
    fn test_special_event_only_in_its_week() {
        let builder = WeekBuilder::new(CalendarConfig {
            meeting_exceptions: vec![],
            special_events: vec![event(date(2025, 10, 31), WeekKind::Assembly, "Asamblea")],
        });

        let w = builder.build(date(2025, 10, 27), 1, 1);
        assert_eq!(w.kind, WeekKind::Assembly);
        assert_eq!(w.event_label.as_deref(), Some("Asamblea"));
        assert!(w.is_special());

        assert_eq!(builder.build(date(2025, 10, 20), 1, 1).kind, WeekKind::Normal);
        assert_eq!(builder.build(date(2025, 11, 3), 1, 1).kind, WeekKind::Normal);
    }

    #[test]
    fn test_sunday_event_belongs_to_preceding_monday() {
        let builder = WeekBuilder::new(CalendarConfig {
            meeting_exceptions: vec![],
            special_events: vec![event(date(2026, 3, 22), WeekKind::CircuitAssembly, "Circuito")],
        });
        assert_eq!(builder.build(date(2026, 3, 16), 1, 1).kind, WeekKind::CircuitAssembly);
        assert_eq!(builder.build(date(2026, 3, 23), 1, 1).kind, WeekKind::Normal);
    }

    #[test]
    fn test_first_matching_event_wins() {
        let builder = WeekBuilder::new(CalendarConfig {
            meeting_exceptions: vec![],
            special_events: vec![
                event(date(2025, 6, 3), WeekKind::Convention, "Primero"),
                event(date(2025, 6, 5), WeekKind::Assembly, "Segundo"),
            ],
        });
        let w = builder.build(date(2025, 6, 2), 1, 1);
        assert_eq!(w.kind, WeekKind::Convention);
        assert_eq!(w.event_label.as_deref(), Some("Primero"));
    }
}
