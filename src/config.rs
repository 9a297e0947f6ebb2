//! Roster configuration.
//!
//! A [`RosterConfig`] holds the deployment data the services are built
//! from: the cleaning rotation anchor, irregular meeting days, special
//! events and the watchman crew rosters. [`RosterConfig::default`] carries
//! the congregation's current data.
//!
//! # TOML
//!
//! Every section is optional and falls back to its default. Dates are
//! quoted ISO strings.
//!
//! ```toml
//! [rotation]
//! cycle = [6, 5, 4, 3, 2, 1]
//! reference_date = "2033-02-07"
//! reference_group = 6
//!
//! [[calendar.meeting_exceptions]]
//! date = "2025-07-08"
//! day = "tuesday"
//!
//! [[calendar.special_events]]
//! date = "2025-10-31"
//! kind = "assembly"
//! label = "Asamblea Regional 2025"
//!
//! [[roster.groups]]
//! number = 1
//! members = ["Ferreira Rocio", "Gomez Yanina"]
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Result, RosterError};
use crate::models::WeekKind;

/// Complete roster configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub rotation: RotationConfig,
    pub calendar: CalendarConfig,
    pub roster: GroupRoster,
}

impl RosterConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: RosterConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every section.
    pub fn validate(&self) -> Result<()> {
        self.rotation.validate()?;
        self.roster.validate()
    }
}

/// Cleaning-group rotation anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Group numbers in rotation order.
    pub cycle: Vec<u8>,
    /// Date whose week is on duty for `reference_group`.
    pub reference_date: NaiveDate,
    /// Group on duty in the reference week.
    pub reference_group: u8,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            cycle: vec![6, 5, 4, 3, 2, 1],
            reference_date: NaiveDate::from_ymd_opt(2033, 2, 7).unwrap_or_default(),
            reference_group: 6,
        }
    }
}

impl RotationConfig {
    /// Checks that the cycle is non-empty, has no repeats and contains the
    /// reference group.
    pub fn validate(&self) -> Result<()> {
        if self.cycle.is_empty() {
            return Err(RosterError::invalid("rotation cycle is empty"));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.cycle.iter().find(|g| !seen.insert(**g)) {
            return Err(RosterError::invalid(format!(
                "group {dup} appears twice in the rotation cycle"
            )));
        }
        if !self.cycle.contains(&self.reference_group) {
            return Err(RosterError::invalid(format!(
                "reference group {} is not in the rotation cycle",
                self.reference_group
            )));
        }
        Ok(())
    }
}

/// Day an irregular meeting moves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideDay {
    /// Midweek meeting held on Tuesday instead of Wednesday.
    Tuesday,
    /// Weekend meeting held on Saturday instead of Sunday.
    Saturday,
}

/// One irregular meeting date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingException {
    pub date: NaiveDate,
    pub day: OverrideDay,
}

/// An event that overrides the week it falls in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialEvent {
    /// Any date inside the event's week.
    pub date: NaiveDate,
    pub kind: WeekKind,
    pub label: String,
}

/// Irregular meeting days and special events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub meeting_exceptions: Vec<MeetingException>,
    /// Scanned in order; the first event in a week wins.
    pub special_events: Vec<SpecialEvent>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
        Self {
            meeting_exceptions: vec![
                MeetingException {
                    date: date(2025, 7, 7),
                    day: OverrideDay::Tuesday,
                },
                MeetingException {
                    date: date(2026, 4, 2),
                    day: OverrideDay::Tuesday,
                },
            ],
            special_events: vec![
                SpecialEvent {
                    date: date(2025, 10, 31),
                    kind: WeekKind::Assembly,
                    label: "Asamblea Regional 2025\n\n         Adoración Pura\n(Mat. 4:10; Juan. 2:17; Juan. 4:23)".into(),
                },
                SpecialEvent {
                    date: date(2026, 3, 22),
                    kind: WeekKind::CircuitAssembly,
                    label: "Asamblea de circuito con el\nrepresentante de la sucursal".into(),
                },
            ],
        }
    }
}

/// One crew's configured member names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterGroup {
    pub number: u8,
    /// Exact full names (`"family given"`), in roster order.
    pub members: Vec<String>,
}

/// Watchman crews by exact full name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupRoster {
    pub groups: Vec<RosterGroup>,
}

impl Default for GroupRoster {
    fn default() -> Self {
        let group = |number, names: &[&str]| RosterGroup {
            number,
            members: names.iter().map(|n| n.to_string()).collect(),
        };
        Self {
            groups: vec![
                group(1, &["Ferreira Rocio", "Gomez Yanina", "Israelson Analia", "Valiente Silvia"]),
                group(2, &["Coronel Vanesa", "Dominguez Alejandra", "Quiroz Rosario"]),
                group(3, &["Altamirano Maia", "Altamirano Pamela", "Cardozo Karolaine", "Gonzalez Iris"]),
                group(4, &["Carena Graciela", "Deiana Ruth", "Valiente Fátima"]),
                group(5, &["Dominguez Miriam", "Encina Mónica", "Viera Valeria"]),
                group(6, &["Arguello Monica", "Benitez Gabriela", "Ledesma Susana", "Sotelo Rosa"]),
            ],
        }
    }
}

impl GroupRoster {
    /// Creates a roster from `(number, names)` pairs.
    pub fn new<I, N, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = (u8, N)>,
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            groups: groups
                .into_iter()
                .map(|(number, names)| RosterGroup {
                    number,
                    members: names.into_iter().map(Into::into).collect(),
                })
                .collect(),
        }
    }

    /// Configured names for a group.
    pub fn names(&self, number: u8) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.number == number)
            .map(|g| g.members.as_slice())
    }

    /// Whether `number` is a configured group.
    pub fn contains_group(&self, number: u8) -> bool {
        self.groups.iter().any(|g| g.number == number)
    }

    /// Group numbers in configuration order.
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.groups.iter().map(|g| g.number)
    }

    /// Checks that no group number is configured twice.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for g in &self.groups {
            if !seen.insert(g.number) {
                return Err(RosterError::invalid(format!(
                    "group {} is configured twice",
                    g.number
                )));
            }
        }
        Ok(())
    }
}
