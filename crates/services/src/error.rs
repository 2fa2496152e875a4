//! Shared error types for the services crate.

use std::fmt;

use thiserror::Error;
use zimer_core::TimerError;

/// Which start field a parse failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Minutes,
    Questions,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Minutes => f.write_str("minutes"),
            InputField::Questions => f.write_str("questions"),
        }
    }
}

/// Errors emitted by the exam controller and input parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamError {
    #[error("{field} must be a whole number, got {raw:?}")]
    InvalidInput { field: InputField, raw: String },
    #[error(transparent)]
    Timer(#[from] TimerError),
}

impl ExamError {
    /// Input that cannot start a run: unparseable or non-positive.
    #[must_use]
    pub fn is_invalid_configuration(&self) -> bool {
        match self {
            ExamError::InvalidInput { .. } => true,
            ExamError::Timer(err) => err.is_invalid_configuration(),
        }
    }

    /// A command the current run state does not accept.
    #[must_use]
    pub fn is_invalid_state_transition(&self) -> bool {
        matches!(self, ExamError::Timer(err) if err.is_invalid_state_transition())
    }
}
