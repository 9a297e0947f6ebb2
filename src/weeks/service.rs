//! Week collection service.

use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

use super::WeekBuilder;
use crate::calendar::{monday_of, weeks_between, weeks_from, Clock, SystemClock};
use crate::config::RosterConfig;
use crate::error::Result;
use crate::models::{MeetingKind, Week};
use crate::rotation::CleaningRotation;

/// Weeks generated when no count is given.
pub const DEFAULT_WEEK_COUNT: i64 = 52;
/// Size of the upcoming-weeks window when no count is given.
pub const DEFAULT_UPCOMING: usize = 4;
/// Characters of each event label kept in [`WeekService::event_gaps`] keys.
const GAP_LABEL_CHARS: usize = 20;

/// Generates and queries runs of consecutive weeks.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_roster::calendar::FixedClock;
/// use u_roster::config::RosterConfig;
/// use u_roster::weeks::WeekService;
///
/// let today = NaiveDate::from_ymd_opt(2025, 10, 29).unwrap();
/// let service = WeekService::with_clock(&RosterConfig::default(), FixedClock(today)).unwrap();
///
/// let weeks = service.generate(None, 8).unwrap();
/// assert_eq!(weeks.len(), 8);
/// assert_eq!(weeks[0].start, NaiveDate::from_ymd_opt(2025, 10, 27).unwrap());
/// assert!(weeks[0].is_special());
/// assert_eq!(service.current_week(&weeks).map(|w| w.number), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct WeekService<C = SystemClock> {
    builder: WeekBuilder,
    rotation: CleaningRotation,
    clock: C,
}

impl WeekService<SystemClock> {
    /// Creates a service on the system clock.
    pub fn new(config: &RosterConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> WeekService<C> {
    /// Creates a service with an explicit clock.
    pub fn with_clock(config: &RosterConfig, clock: C) -> Result<Self> {
        Ok(Self::from_parts(
            WeekBuilder::new(config.calendar.clone()),
            CleaningRotation::new(config.rotation.clone())?,
            clock,
        ))
    }

    /// Assembles a service from prepared components.
    pub fn from_parts(builder: WeekBuilder, rotation: CleaningRotation, clock: C) -> Self {
        Self {
            builder,
            rotation,
            clock,
        }
    }

    /// The cleaning rotation in use.
    pub fn rotation(&self) -> &CleaningRotation {
        &self.rotation
    }

    /// Today's date according to the service clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Generates `count` consecutive weeks numbered from 1.
    ///
    /// `start` defaults to today and is aligned to its Monday.
    ///
    /// # Errors
    /// `InvalidArgument` if `count` is negative.
    pub fn generate(&self, start: Option<NaiveDate>, count: i64) -> Result<Vec<Week>> {
        let first_monday = monday_of(start.unwrap_or_else(|| self.clock.today()));
        let mondays = weeks_from(first_monday, count)?;
        let groups = self.rotation.sequence(first_monday, count)?;

        let weeks: Vec<Week> = mondays
            .into_iter()
            .zip(groups)
            .zip(1u32..)
            .map(|((monday, group), number)| self.builder.build(monday, number, group))
            .collect();

        debug!(
            start = %first_monday,
            count = weeks.len(),
            special = weeks.iter().filter(|w| w.is_special()).count(),
            "generated weeks"
        );
        Ok(weeks)
    }

    /// The week starting on today's Monday, if present.
    pub fn current_week<'w>(&self, weeks: &'w [Week]) -> Option<&'w Week> {
        let monday = monday_of(self.clock.today());
        weeks.iter().find(|w| w.start == monday)
    }

    /// Special weeks in list order.
    pub fn special_weeks<'w>(&self, weeks: &'w [Week]) -> Vec<&'w Week> {
        weeks.iter().filter(|w| w.is_special()).collect()
    }

    /// Up to `count` weeks starting on or after today, in list order.
    ///
    /// Compares against today's date, not its Monday, so the current week
    /// is excluded unless today is Monday.
    pub fn upcoming<'w>(&self, weeks: &'w [Week], count: usize) -> Vec<&'w Week> {
        let today = self.clock.today();
        weeks
            .iter()
            .filter(|w| w.start >= today)
            .take(count)
            .collect()
    }

    /// Week distance between consecutive special weeks, in list order.
    ///
    /// Keys join the first 20 characters of both event labels; events whose
    /// labels share those prefixes overwrite each other.
    pub fn event_gaps(&self, weeks: &[Week]) -> HashMap<String, i64> {
        self.special_weeks(weeks)
            .windows(2)
            .map(|pair| {
                let key = format!(
                    "{}... → {}...",
                    label_prefix(pair[0]),
                    label_prefix(pair[1])
                );
                (key, weeks_between(pair[0].start, pair[1].start))
            })
            .collect()
    }

    /// Display strings for list presentation.
    pub fn labels(&self, weeks: &[Week]) -> Vec<String> {
        weeks.iter().map(Week::label).collect()
    }

    /// Meeting label for one of the week's meetings, e.g. `"Martes 8"`.
    pub fn meeting_day_label(&self, week: &Week, kind: MeetingKind) -> String {
        week.meeting_label(kind)
    }
}

fn label_prefix(week: &Week) -> String {
    week.event_label
        .as_deref()
        .unwrap_or_default()
        .chars()
        .take(GAP_LABEL_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::FixedClock;
    use crate::config::{CalendarConfig, MeetingException, OverrideDay, RotationConfig, SpecialEvent};
    use crate::error::RosterError;
    use crate::models::WeekKind;
    use chrono::{Datelike, TimeDelta, Weekday};

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

    fn service_at(today: NaiveDate, calendar: CalendarConfig) -> WeekService<FixedClock> {
        let config = RosterConfig {
            calendar,
            ..Default::default()
        };
        WeekService::with_clock(&config, FixedClock(today)).unwrap()
    }

    fn fixture_calendar() -> CalendarConfig {
        CalendarConfig {
            meeting_exceptions: vec![MeetingException {
                date: date(2025, 7, 8),
                day: OverrideDay::Tuesday,
            }],
            special_events: vec![
                event(date(2025, 7, 25), WeekKind::Convention, "Convención Regional 2025 Feliz"),
                event(date(2025, 9, 3), WeekKind::CircuitAssembly, "Asamblea de circuito con el superintendente"),
                event(date(2025, 10, 31), WeekKind::Assembly, "Asamblea Regional 2025"),
            ],
        }
    }

    #[test]
    fn test_generate_aligns_and_numbers() {
        let service = service_at(date(2025, 7, 2), fixture_calendar());
        let weeks = service.generate(None, 10).unwrap();

        assert_eq!(weeks.len(), 10);
        assert_eq!(weeks[0].start, date(2025, 6, 30));
        for (i, w) in weeks.iter().enumerate() {
            assert_eq!(w.number as usize, i + 1);
            assert_eq!(w.start.weekday(), Weekday::Mon);
            assert_eq!(w.cleaning_group, service.rotation().group_for(w.start));
        }
        assert_eq!(weeks[1].tuesday_override, Some(date(2025, 7, 8)));
        assert_eq!(weeks[0].tuesday_override, None);
    }

    #[test]
    fn test_generate_explicit_start() {
        let service = service_at(date(2020, 1, 1), CalendarConfig::default());
        let weeks = service.generate(Some(date(2025, 10, 30)), 3).unwrap();
        assert_eq!(weeks[0].start, date(2025, 10, 27));
        assert_eq!(weeks[0].kind, WeekKind::Assembly);
        assert_eq!(weeks[1].kind, WeekKind::Normal);
    }

    #[test]
    fn test_generate_default_count_and_errors() {
        let service = service_at(date(2025, 1, 1), CalendarConfig::default());
        assert_eq!(service.generate(None, DEFAULT_WEEK_COUNT).unwrap().len(), 52);
        assert!(service.generate(None, 0).unwrap().is_empty());
        assert!(matches!(
            service.generate(None, -1),
            Err(RosterError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_generate_beyond_date_range_is_an_error() {
        let service = service_at(date(2025, 1, 1), CalendarConfig::default());
        assert!(matches!(
            service.generate(None, 14_000_000),
            Err(RosterError::InvalidArgument(_))
        ));
        assert!(service
            .rotation()
            .sequence(date(2025, 1, 6), i64::MAX)
            .is_err());
    }

    #[test]
    fn test_cleaning_group_rotates_forward() {
        let service = service_at(date(2033, 1, 3), CalendarConfig::default());
        let groups: Vec<u8> = service
            .generate(None, 7)
            .unwrap()
            .iter()
            .map(|w| w.cleaning_group)
            .collect();
        assert_eq!(groups, vec![1, 2, 3, 4, 5, 6, 1]);
    }

    #[test]
    fn test_reference_week_with_group_one_anchor() {
        let config = RosterConfig {
            rotation: RotationConfig {
                reference_group: 1,
                ..Default::default()
            },
            ..Default::default()
        };
        let service = WeekService::with_clock(&config, FixedClock(date(2033, 2, 9))).unwrap();

        let reference_week = service.generate(None, 1).unwrap();
        assert_eq!(reference_week[0].start, date(2033, 2, 7));
        assert_eq!(reference_week[0].cleaning_group, 1);

        let cycle_earlier = service
            .generate(Some(date(2033, 2, 7) - TimeDelta::days(42)), 1)
            .unwrap();
        assert_eq!(cycle_earlier[0].cleaning_group, 1);
    }

    #[test]
    fn test_current_week() {
        let service = service_at(date(2025, 7, 10), fixture_calendar());
        let weeks = service.generate(Some(date(2025, 6, 30)), 4).unwrap();
        assert_eq!(service.current_week(&weeks).map(|w| w.start), Some(date(2025, 7, 7)));

        let later = service_at(date(2026, 1, 1), fixture_calendar());
        assert!(later.current_week(&weeks).is_none());
    }

    #[test]
    fn test_special_weeks_keep_order() {
        let service = service_at(date(2025, 7, 1), fixture_calendar());
        let weeks = service.generate(None, 20).unwrap();
        let special: Vec<WeekKind> = service.special_weeks(&weeks).iter().map(|w| w.kind).collect();
        assert_eq!(
            special,
            vec![WeekKind::Convention, WeekKind::CircuitAssembly, WeekKind::Assembly]
        );
    }

    #[test]
    fn test_upcoming_uses_raw_today() {
        // Thursday: the current week's Monday is already past.
        let service = service_at(date(2025, 7, 10), fixture_calendar());
        let weeks = service.generate(Some(date(2025, 6, 30)), 10).unwrap();

        let upcoming = service.upcoming(&weeks, DEFAULT_UPCOMING);
        let starts: Vec<NaiveDate> = upcoming.iter().map(|w| w.start).collect();
        assert_eq!(
            starts,
            vec![date(2025, 7, 14), date(2025, 7, 21), date(2025, 7, 28), date(2025, 8, 4)]
        );

        // On a Monday the current week is included.
        let monday = service_at(date(2025, 7, 7), fixture_calendar());
        assert_eq!(monday.upcoming(&weeks, 1)[0].start, date(2025, 7, 7));
        assert!(monday.upcoming(&weeks, 0).is_empty());
    }

    #[test]
    fn test_event_gaps() {
        let service = service_at(date(2025, 7, 1), fixture_calendar());
        let weeks = service.generate(None, 20).unwrap();
        let gaps = service.event_gaps(&weeks);

        assert_eq!(gaps.len(), 2);
        // 2025-07-21 → 2025-09-01 → 2025-10-27
        assert_eq!(
            gaps.get("Convención Regional ... → Asamblea de circuito...").copied(),
            Some(6)
        );
        assert_eq!(
            gaps.get("Asamblea de circuito... → Asamblea Regional 20...").copied(),
            Some(8)
        );
    }

    #[test]
    fn test_event_gap_prefix_collision_overwrites() {
        let calendar = CalendarConfig {
            meeting_exceptions: vec![],
            special_events: vec![
                event(date(2025, 1, 8), WeekKind::Assembly, "Asamblea de circuito A"),
                event(date(2025, 2, 5), WeekKind::Assembly, "Asamblea de circuito B"),
                event(date(2025, 3, 5), WeekKind::Assembly, "Asamblea de circuito C"),
            ],
        };
        let service = service_at(date(2025, 1, 6), calendar);
        let weeks = service.generate(None, 12).unwrap();
        let gaps = service.event_gaps(&weeks);

        assert_eq!(gaps.len(), 1);
        assert_eq!(
            gaps.get("Asamblea de circuito... → Asamblea de circuito...").copied(),
            Some(4)
        );
    }

    #[test]
    fn test_labels_and_meeting_day() {
        let service = service_at(date(2025, 7, 1), fixture_calendar());
        let weeks = service.generate(None, 2).unwrap();
        assert_eq!(
            service.labels(&weeks),
            vec!["30 junio - 6 julio 2025".to_string(), "7-13 julio 2025".to_string()]
        );
        assert_eq!(service.meeting_day_label(&weeks[1], MeetingKind::Midweek), "Martes 8");
        assert_eq!(service.meeting_day_label(&weeks[1], MeetingKind::Weekend), "Domingo 13");
    }
}
