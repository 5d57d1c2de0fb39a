//! Trajectory construction errors.

use super::error_code::{self, ContactErrorCode};

/// Errors raised while turning one person's records into a trajectory.
#[derive(Debug, thiserror::Error)]
pub enum TrajectoryError {
    #[error("invalid trajectory for {person}: no records")]
    Empty { person: String },

    #[error("invalid trajectory for {person}: record {index} has condition {found}, expected {expected}")]
    MixedCondition {
        person: String,
        index: usize,
        expected: String,
        found: String,
    },

    #[error("invalid trajectory for {person}: record {index} belongs to {found}")]
    ForeignRecord {
        person: String,
        index: usize,
        found: String,
    },

    #[error("duplicate record group for {person}")]
    DuplicatePerson { person: String },
}

impl ContactErrorCode for TrajectoryError {
    fn error_code(&self) -> &'static str {
        error_code::TRAJECTORY_ERROR
    }
}
