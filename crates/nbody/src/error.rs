//! Error types for body construction, runs and the persisted record format.

use thiserror::Error;
use units::UnitError;

/// Input rejected before any state is touched
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("body name must not be empty")]
    EmptyName,

    #[error("a body named `{0}` already exists")]
    DuplicateName(String),

    #[error("body name `{0}` cannot be stored (whitespace, a path separator, a bare parenthesis or a dot name)")]
    InvalidName(String),

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("{first} and {second} cannot both be given")]
    Conflicting {
        first: &'static str,
        second: &'static str,
    },

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error(transparent)]
    Unit(#[from] UnitError),
}

/// Fatal run failure. A failed run leaves the system untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("bodies `{first}` and `{second}` occupy the same position at t = {time} s")]
    DegenerateGeometry {
        first: String,
        second: String,
        time: f64,
    },

    #[error("state of body `{body}` became non-finite at t = {time} s")]
    NonFinite { body: String, time: f64 },

    #[error("timestep no longer advances the clock at t = {time} s")]
    Stalled { time: f64 },
}

/// Failure to read the persisted system record format
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("expected {expected}, found `{found}`")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },

    #[error("record is not terminated by `)`")]
    Unterminated,

    #[error("field {0} appears twice in one record")]
    DuplicateField(&'static str),

    #[error("invalid value `{token}` for {field}")]
    InvalidValue { field: &'static str, token: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
