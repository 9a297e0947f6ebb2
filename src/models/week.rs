//! Week model.
//!
//! A week runs Monday to Sunday and carries its two meeting days, its
//! cleaning group and, for special weeks, the event that overrides it.
//!
//! # Meeting days
//! The midweek meeting is on Wednesday unless `tuesday_override` is set;
//! the weekend meeting is on Sunday unless `saturday_override` is set. The
//! regular dates are stored either way.

use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::month_name;

/// Classification of a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekKind {
    /// Regular week.
    #[default]
    Normal,
    /// Regional assembly.
    Assembly,
    /// Convention.
    Convention,
    /// Circuit assembly.
    CircuitAssembly,
}

/// A concrete meeting weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingDay {
    Tuesday,
    Wednesday,
    Saturday,
    Sunday,
}

impl MeetingDay {
    /// Spanish weekday name, lowercase.
    pub fn spanish_name(&self) -> &'static str {
        match self {
            MeetingDay::Tuesday => "martes",
            MeetingDay::Wednesday => "miércoles",
            MeetingDay::Saturday => "sábado",
            MeetingDay::Sunday => "domingo",
        }
    }

    /// Spanish weekday name with an uppercase initial.
    pub fn label(&self) -> &'static str {
        match self {
            MeetingDay::Tuesday => "Martes",
            MeetingDay::Wednesday => "Miércoles",
            MeetingDay::Saturday => "Sábado",
            MeetingDay::Sunday => "Domingo",
        }
    }
}

/// Which of the two weekly meetings is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingKind {
    #[default]
    Midweek,
    Weekend,
}

/// One Monday-to-Sunday period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    /// Monday of the week.
    pub start: NaiveDate,
    /// 1-based position within its generation run.
    pub number: u32,
    /// Cleaning group on duty (1..=6).
    pub cleaning_group: u8,
    /// Regular midweek meeting date.
    pub wednesday: NaiveDate,
    /// Regular weekend meeting date.
    pub sunday: NaiveDate,
    /// Set when the midweek meeting moves to Tuesday.
    pub tuesday_override: Option<NaiveDate>,
    /// Set when the weekend meeting moves to Saturday.
    pub saturday_override: Option<NaiveDate>,
    /// Special-event classification.
    pub kind: WeekKind,
    /// Event name for special weeks.
    pub event_label: Option<String>,
}

impl Week {
    /// Sunday of the week.
    pub fn end(&self) -> NaiveDate {
        self.start + TimeDelta::days(6)
    }

    /// Whether a special event overrides this week.
    pub fn is_special(&self) -> bool {
        self.kind != WeekKind::Normal
    }

    /// Effective midweek meeting day and date.
    pub fn midweek_meeting(&self) -> (MeetingDay, NaiveDate) {
        match self.tuesday_override {
            Some(date) => (MeetingDay::Tuesday, date),
            None => (MeetingDay::Wednesday, self.wednesday),
        }
    }

    /// Effective weekend meeting day and date.
    pub fn weekend_meeting(&self) -> (MeetingDay, NaiveDate) {
        match self.saturday_override {
            Some(date) => (MeetingDay::Saturday, date),
            None => (MeetingDay::Sunday, self.sunday),
        }
    }

    /// Effective meeting day and date for `kind`.
    pub fn meeting(&self, kind: MeetingKind) -> (MeetingDay, NaiveDate) {
        match kind {
            MeetingKind::Midweek => self.midweek_meeting(),
            MeetingKind::Weekend => self.weekend_meeting(),
        }
    }

    /// Label for a meeting, e.g. `"Miércoles 15"`.
    pub fn meeting_label(&self, kind: MeetingKind) -> String {
        let (day, date) = self.meeting(kind);
        format!("{} {}", day.label(), date.day())
    }

    /// Spanish date range, e.g. `"6-12 enero 2025"` or
    /// `"30 junio - 6 julio 2025"`. The year is the start date's year.
    pub fn label(&self) -> String {
        let start = self.start;
        let end = self.end();
        let start_month = month_name(start.month()).unwrap_or_default();

        if start.month() == end.month() {
            format!("{}-{} {} {}", start.day(), end.day(), start_month, start.year())
        } else {
            let end_month = month_name(end.month()).unwrap_or_default();
            format!(
                "{} {} - {} {} {}",
                start.day(),
                start_month,
                end.day(),
                end_month,
                start.year()
            )
        }
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plain_week(start: NaiveDate) -> Week {
        Week {
            start,
            number: 1,
            cleaning_group: 3,
            wednesday: start + TimeDelta::days(2),
            sunday: start + TimeDelta::days(6),
            tuesday_override: None,
            saturday_override: None,
            kind: WeekKind::Normal,
            event_label: None,
        }
    }

    #[test]
    fn test_label_same_month() {
        let w = plain_week(date(2025, 1, 6));
        assert_eq!(w.label(), "6-12 enero 2025");
        assert_eq!(w.to_string(), "6-12 enero 2025");
    }

    #[test]
    fn test_label_across_months() {
        let w = plain_week(date(2025, 6, 30));
        assert_eq!(w.label(), "30 junio - 6 julio 2025");
    }

    #[test]
    fn test_label_across_years_uses_start_year() {
        let w = plain_week(date(2024, 12, 30));
        assert_eq!(w.label(), "30 diciembre - 5 enero 2024");
    }

    #[test]
    fn test_regular_meetings() {
        let w = plain_week(date(2025, 1, 13));
        assert_eq!(w.midweek_meeting(), (MeetingDay::Wednesday, date(2025, 1, 15)));
        assert_eq!(w.weekend_meeting(), (MeetingDay::Sunday, date(2025, 1, 19)));
        assert_eq!(w.meeting_label(MeetingKind::Midweek), "Miércoles 15");
        assert_eq!(w.meeting_label(MeetingKind::Weekend), "Domingo 19");
        assert!(!w.is_special());
    }

    #[test]
    fn test_overrides_replace_meeting_day() {
        let mut w = plain_week(date(2025, 7, 7));
        w.tuesday_override = Some(date(2025, 7, 8));
        w.saturday_override = Some(date(2025, 7, 12));

        assert_eq!(w.midweek_meeting(), (MeetingDay::Tuesday, date(2025, 7, 8)));
        assert_eq!(w.weekend_meeting(), (MeetingDay::Saturday, date(2025, 7, 12)));
        assert_eq!(w.meeting_label(MeetingKind::Midweek), "Martes 8");
        assert_eq!(w.meeting_label(MeetingKind::Weekend), "Sábado 12");
        // Regular dates are still stored.
        assert_eq!(w.wednesday, date(2025, 7, 9));
        assert_eq!(w.sunday, date(2025, 7, 13));
    }

    #[test]
    fn test_meeting_day_names() {
        assert_eq!(MeetingDay::Wednesday.spanish_name(), "miércoles");
        assert_eq!(MeetingDay::Saturday.label(), "Sábado");
    }
}
