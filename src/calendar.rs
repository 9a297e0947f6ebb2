//! Calendar primitives.
//!
//! Pure date arithmetic on Monday-aligned weeks, Spanish month names, and
//! the [`Clock`] seam through which services learn "today".
//!
//! # Week model
//! Weeks start on Monday (weekday index 0) and end on Sunday (index 6).
//! Week distances use floor division, so callers should align both dates
//! to Mondays before comparing.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use u_roster::calendar::{monday_of, same_week, weeks_between};
//!
//! let thursday = NaiveDate::from_ymd_opt(2025, 1, 16).unwrap();
//! let monday = NaiveDate::from_ymd_opt(2025, 1, 13).unwrap();
//! assert_eq!(monday_of(thursday), monday);
//! assert!(same_week(thursday, monday));
//! assert_eq!(weeks_between(monday, NaiveDate::from_ymd_opt(2025, 2, 10).unwrap()), 4);
//! ```

use chrono::{Datelike, Local, NaiveDate, TimeDelta};

use crate::error::{Result, RosterError};

const DAYS_PER_WEEK: i64 = 7;

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Monday of the week containing `date`.
///
/// Dates in the partial week at the start of chrono's range have no
/// representable Monday and map to [`NaiveDate::MIN`].
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday();
    date.checked_sub_signed(TimeDelta::days(i64::from(offset)))
        .unwrap_or(NaiveDate::MIN)
}

/// `count` consecutive Mondays (7 days apart) starting at `start`.
///
/// `start` is used as given; align it with [`monday_of`] first.
///
/// # Errors
/// `InvalidArgument` if `count` is negative, or if the last week would end
/// past the representable date range.
pub fn weeks_from(start: NaiveDate, count: i64) -> Result<Vec<NaiveDate>> {
    if count < 0 {
        return Err(RosterError::invalid(format!(
            "week count must be non-negative, got {count}"
        )));
    }
    if count > 0 && last_sunday(start, count).is_none() {
        return Err(RosterError::invalid(format!(
            "{count} weeks from {start} run past the supported date range"
        )));
    }
    Ok((0..count)
        .map(|i| start + TimeDelta::days(i * DAYS_PER_WEEK))
        .collect())
}

fn last_sunday(start: NaiveDate, count: i64) -> Option<NaiveDate> {
    let days = (count - 1)
        .checked_mul(DAYS_PER_WEEK)?
        .checked_add(DAYS_PER_WEEK - 1)?;
    start.checked_add_signed(TimeDelta::try_days(days)?)
}

/// Signed whole weeks from `a` to `b`, floor-divided.
pub fn weeks_between(a: NaiveDate, b: NaiveDate) -> i64 {
    b.signed_duration_since(a)
        .num_days()
        .div_euclid(DAYS_PER_WEEK)
}

/// Whether two dates fall in the same Monday-aligned week.
pub fn same_week(a: NaiveDate, b: NaiveDate) -> bool {
    monday_of(a) == monday_of(b)
}

/// Spanish month name, lowercase, for `month` in 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTHS.get(index).copied()
}

/// Source of the current date.
pub trait Clock {
    /// Today's date.
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monday_of_every_weekday() {
        let monday = date(2025, 3, 17);
        for offset in 0..7 {
            let d = monday + TimeDelta::days(offset);
            assert_eq!(monday_of(d), monday, "offset {offset}");
        }
        assert_eq!(monday_of(date(2025, 3, 24)), date(2025, 3, 24));
    }

    #[test]
    fn test_monday_of_properties() {
        let mut d = date(2024, 12, 1);
        for _ in 0..400 {
            let m = monday_of(d);
            assert_eq!(m.weekday(), Weekday::Mon);
            assert!(m <= d);
            assert!(d.signed_duration_since(m).num_days() <= 6);
            assert_eq!(monday_of(m), m);
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_monday_of_across_year_boundary() {
        // 2025-01-01 is a Wednesday.
        assert_eq!(monday_of(date(2025, 1, 1)), date(2024, 12, 30));
    }

    #[test]
    fn test_weeks_from() {
        let start = date(2025, 1, 6);
        let weeks = weeks_from(start, 5).unwrap();
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0], start);
        for pair in weeks.windows(2) {
            assert_eq!(pair[1].signed_duration_since(pair[0]).num_days(), 7);
        }
        assert_eq!(weeks[4], date(2025, 2, 3));
    }

    #[test]
    fn test_weeks_from_zero_and_negative() {
        assert!(weeks_from(date(2025, 1, 6), 0).unwrap().is_empty());
        assert!(matches!(
            weeks_from(date(2025, 1, 6), -1),
            Err(RosterError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_weeks_from_past_date_range() {
        let start = date(2025, 1, 6);
        for count in [14_000_000, i64::MAX / 7, i64::MAX] {
            assert!(matches!(
                weeks_from(start, count),
                Err(RosterError::InvalidArgument(_))
            ));
        }

        // The last week must fit entirely, Sunday included.
        let last_monday = monday_of(NaiveDate::MAX - TimeDelta::days(6));
        assert_eq!(weeks_from(last_monday, 1).unwrap(), vec![last_monday]);
        assert!(weeks_from(last_monday, 2).is_err());
    }

    #[test]
    fn test_monday_of_range_edges() {
        // NaiveDate::MIN falls mid-week.
        assert_eq!(monday_of(NaiveDate::MIN), NaiveDate::MIN);
        assert_eq!(monday_of(NaiveDate::MAX).weekday(), Weekday::Mon);
    }

    #[test]
    fn test_weeks_between_floor() {
        let a = date(2025, 1, 6);
        assert_eq!(weeks_between(a, date(2025, 1, 20)), 2);
        assert_eq!(weeks_between(a, date(2025, 1, 19)), 1);
        assert_eq!(weeks_between(date(2025, 1, 20), a), -2);
        // Floor, not truncation, for negative spans.
        assert_eq!(weeks_between(date(2025, 1, 7), a), -1);
        assert_eq!(weeks_between(a, a), 0);
    }

    #[test]
    fn test_same_week() {
        assert!(same_week(date(2025, 10, 27), date(2025, 11, 2)));
        assert!(!same_week(date(2025, 11, 2), date(2025, 11, 3)));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), Some("enero"));
        assert_eq!(month_name(9), Some("septiembre"));
        assert_eq!(month_name(12), Some("diciembre"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(date(2026, 10, 19));
        assert_eq!(clock.today(), date(2026, 10, 19));
    }
}
