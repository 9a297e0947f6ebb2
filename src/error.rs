//! Error taxonomy for roster operations.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | `InvalidArgument` | negative counts, unknown group numbers, unknown columns, months outside 1..=12 |
//! | `InsufficientCandidates` | selections larger than the active pool, short groups |
//! | `ValidationFailed` | incomplete assignments |
//! | `Persistence` | storage collaborator failures, wrapped with context |
//! | `Config` | configuration text that does not parse |
//!
//! Persistence failures at the save boundary are not propagated; see
//! [`AssignmentService::save`](crate::assignments::AssignmentService::save).

use std::fmt;

use thiserror::Error;

use crate::models::{PersonId, Role};

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Errors returned by roster operations.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Malformed input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The candidate pool is smaller than the requested selection.
    #[error("need at least {required} active {role}s, but only {available} available")]
    InsufficientCandidates {
        role: Role,
        required: usize,
        available: usize,
    },

    /// An assignment is incomplete.
    #[error("invalid assignment: {0}")]
    ValidationFailed(MissingField),

    /// The storage collaborator failed.
    #[error("{context}: {source}")]
    Persistence {
        context: String,
        #[source]
        source: StoreError,
    },

    /// Configuration text could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl RosterError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn persistence(context: impl Into<String>, source: StoreError) -> Self {
        Self::Persistence {
            context: context.into(),
            source,
        }
    }
}

/// The slot class an incomplete assignment is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Week,
    Ushers,
    Watchmen,
    MeetingDay,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Week => write!(f, "missing week"),
            Self::Ushers => write!(f, "missing ushers"),
            Self::Watchmen => write!(f, "missing watchmen"),
            Self::MeetingDay => write!(f, "missing meeting day"),
        }
    }
}

/// Failure reported by a storage collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("person {0} not found")]
    PersonNotFound(PersonId),

    #[error("assignment {0} not found")]
    AssignmentNotFound(u64),

    #[error("storage backend error: {0}")]
    Backend(String),
}
