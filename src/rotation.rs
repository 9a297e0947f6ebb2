//! Cleaning-group rotation.
//!
//! Six crews take turns cleaning the hall, one per week. The order is a
//! fixed cycle (default `[6, 5, 4, 3, 2, 1]`) anchored at a reference date.
//!
//! # Algorithm
//!
//! For a Monday `m`:
//!
//! ```text
//! offset   = floor((reference_date - m).days / 7)
//! position = (offset + index_of(reference_group)) mod len(cycle)
//! group    = cycle[position]
//! ```
//!
//! The offset counts weeks *until* the reference date, so walking forward
//! in time walks backward through the cycle array. With the default cycle
//! that reads as 1, 2, 3, 4, 5, 6, 1, ... as weeks advance.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use u_roster::config::RotationConfig;
//! use u_roster::rotation::CleaningRotation;
//!
//! let rotation = CleaningRotation::new(RotationConfig::default()).unwrap();
//! let reference = NaiveDate::from_ymd_opt(2033, 2, 7).unwrap();
//! assert_eq!(rotation.group_for(reference), 6);
//! assert_eq!(rotation.advance(6, 1).unwrap(), 5);
//! ```

use chrono::NaiveDate;

use crate::calendar::weeks_from;
use crate::config::RotationConfig;
use crate::error::{Result, RosterError};

/// Maps weeks to cleaning groups.
#[derive(Debug, Clone)]
pub struct CleaningRotation {
    cycle: Vec<u8>,
    reference_date: NaiveDate,
    reference_index: usize,
}

impl CleaningRotation {
    /// Builds a rotation from validated configuration.
    ///
    /// # Errors
    /// `InvalidArgument` if the cycle is empty, repeats a group, or lacks
    /// the reference group.
    pub fn new(config: RotationConfig) -> Result<Self> {
        config.validate()?;
        let reference_index = config
            .cycle
            .iter()
            .position(|g| *g == config.reference_group)
            .unwrap_or(0);
        Ok(Self {
            cycle: config.cycle,
            reference_date: config.reference_date,
            reference_index,
        })
    }

    /// The configured cycle.
    pub fn cycle(&self) -> &[u8] {
        &self.cycle
    }

    /// Group on duty for the week starting at `monday`.
    pub fn group_for(&self, monday: NaiveDate) -> u8 {
        let days = self.reference_date.signed_duration_since(monday).num_days();
        let offset = days.div_euclid(7);
        self.cycle[self.wrap(offset + self.reference_index as i64)]
    }

    /// Groups for `count` consecutive weeks from `start`, aligned with
    /// [`weeks_from`].
    ///
    /// # Errors
    /// `InvalidArgument` if `count` is negative.
    pub fn sequence(&self, start: NaiveDate, count: i64) -> Result<Vec<u8>> {
        Ok(weeks_from(start, count)?
            .into_iter()
            .map(|monday| self.group_for(monday))
            .collect())
    }

    /// Moves `group` forward along the cycle by `skipped_weeks` positions.
    ///
    /// Used when special events take weeks out of the cleaning calendar.
    ///
    /// # Errors
    /// `InvalidArgument` if `group` is not part of the cycle.
    pub fn advance(&self, group: u8, skipped_weeks: u32) -> Result<u8> {
        let index = self
            .cycle
            .iter()
            .position(|g| *g == group)
            .ok_or_else(|| {
                RosterError::invalid(format!("group {group} is not in the rotation cycle"))
            })?;
        Ok(self.cycle[self.wrap(index as i64 + i64::from(skipped_weeks))])
    }

    fn wrap(&self, position: i64) -> usize {
        position.rem_euclid(self.cycle.len() as i64) as usize
    }
}
