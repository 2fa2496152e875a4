use thiserror::Error;

use crate::model::{Command, RunState};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimerError {
    #[error("minutes and questions must be positive integers (got {minutes} minutes, {questions} questions)")]
    InvalidConfiguration { minutes: i64, questions: i64 },

    #[error("cannot {command} while {state}")]
    InvalidStateTransition { command: Command, state: RunState },
}

impl TimerError {
    #[must_use]
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }

    #[must_use]
    pub fn is_invalid_state_transition(&self) -> bool {
        matches!(self, Self::InvalidStateTransition { .. })
    }
}
