//! Week generation.
//!
//! [`WeekBuilder`] composes a single [`Week`](crate::models::Week) from its
//! Monday, number and cleaning group; [`WeekService`] generates runs of
//! weeks and answers calendar queries over them (current week, special
//! weeks, upcoming window, gaps between events).
//!
//! # Special events
//! An event applies to the Monday-aligned week containing its date. When
//! two events fall in one week, the first configured one wins.

mod builder;
mod service;

pub use builder::WeekBuilder;
pub use service::{WeekService, DEFAULT_UPCOMING, DEFAULT_WEEK_COUNT};
