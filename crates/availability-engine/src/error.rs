//! Error types for availability-engine operations.

use thiserror::Error;
use uuid::Uuid;

use crate::clock::ClockTime;

/// Caller-input errors. None of them are retryable without correcting the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid time format '{0}'. Please use HH:MM format")]
    InvalidTimeFormat(String),

    #[error("Invalid time range: start {start} must be less than end {end}")]
    InvalidRange { start: ClockTime, end: ClockTime },

    /// Added alongside the three kinds above, which alone leave an unknown
    /// day silently matching no intervals.
    #[error("Unrecognized day '{0}'. Expected a weekday name such as Monday")]
    InvalidDay(String),
}

impl ValidationError {
    /// Stable name of the error kind, used on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingParameter(_) => "MissingParameter",
            ValidationError::InvalidTimeFormat(_) => "InvalidTimeFormat",
            ValidationError::InvalidRange { .. } => "InvalidRange",
            ValidationError::InvalidDay(_) => "InvalidDay",
        }
    }
}

/// Failures of a [`ResourceStore`](crate::store::ResourceStore).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Resource already exists: {0}")]
    Duplicate(String),

    #[error("Resource not found: {0}")]
    NotFound(Uuid),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
