//! The exam countdown state machine.
//!
//! Total time is split evenly across the questions that are left. Finishing a
//! question early returns the unused time to the shared pool, and overrunning
//! one takes time from every later question.

use crate::error::TimerError;
use crate::model::{Command, ExamConfig, ExamSnapshot, RunState};

/// Overrun (in seconds) past which the countdown stops on its own.
pub const RUNAWAY_LIMIT_SECS: i64 = -36_000;

/// Even split of the remaining time over the remaining questions.
///
/// Uses integer division, so negative totals truncate toward zero.
/// Yields 0 when no questions are left.
#[must_use]
pub fn allocate(total_remaining: i64, questions_remaining: i64) -> i64 {
    if questions_remaining <= 0 {
        return 0;
    }
    total_remaining / questions_remaining
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionOutcome {
    /// Moved on to the given 1-based question.
    Advanced { question: u32 },
    /// The last question was finished.
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Both counters went down by one second.
    Counted,
    /// Not running; nothing changed.
    Skipped,
    /// This tick crossed the runaway limit and stopped the countdown.
    Halted,
}

/// Owns all timing state for one exam.
///
/// Every field is zero while idle; `reset` returns to exactly that value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExamTimer {
    state: RunState,
    total_seconds_initial: i64,
    total_questions: u32,
    total_remaining: i64,
    current_question_index: u32,
    current_question_remaining: i64,
}

impl ExamTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a run with `minutes` of total time over `questions` questions.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidStateTransition` unless idle, and
    /// `TimerError::InvalidConfiguration` for non-positive inputs. State is left
    /// unchanged on error.
    pub fn start(&mut self, minutes: i64, questions: i64) -> Result<(), TimerError> {
        if self.state != RunState::Idle {
            return Err(self.refuse(Command::Start));
        }
        let config = ExamConfig::from_minutes(minutes, questions)?;
        self.start_with(config);
        Ok(())
    }

    /// Starts a run from an already validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidStateTransition` unless idle.
    pub fn start_config(&mut self, config: ExamConfig) -> Result<(), TimerError> {
        if self.state != RunState::Idle {
            return Err(self.refuse(Command::Start));
        }
        self.start_with(config);
        Ok(())
    }

    fn start_with(&mut self, config: ExamConfig) {
        self.total_seconds_initial = config.total_seconds();
        self.total_remaining = config.total_seconds();
        self.total_questions = config.total_questions();
        self.current_question_index = 1;
        self.current_question_remaining = self.allocate_current();
        self.state = RunState::Running;
    }

    /// Switches between running and paused, returning the new state.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidStateTransition` when no run is in progress.
    pub fn toggle_pause(&mut self) -> Result<RunState, TimerError> {
        self.state = match self.state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
            _ => return Err(self.refuse(Command::TogglePause)),
        };
        Ok(self.state)
    }

    /// Advances the countdown by one second.
    ///
    /// Safe to call in any state; only a running timer changes. Counters may go
    /// negative.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != RunState::Running {
            return TickOutcome::Skipped;
        }
        self.total_remaining = self.total_remaining.saturating_sub(1);
        self.current_question_remaining = self.current_question_remaining.saturating_sub(1);

        if self.total_remaining < RUNAWAY_LIMIT_SECS {
            self.state = RunState::Halted;
            return TickOutcome::Halted;
        }
        TickOutcome::Counted
    }

    /// Marks the current question as done.
    ///
    /// Moving to the next question re-splits the current total over the questions
    /// left; the total itself is untouched. Finishing the last question ends the run.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidStateTransition` unless running.
    pub fn finish_question(&mut self) -> Result<QuestionOutcome, TimerError> {
        if self.state != RunState::Running {
            return Err(self.refuse(Command::FinishQuestion));
        }
        if self.current_question_index >= self.total_questions {
            self.state = RunState::Finished;
            return Ok(QuestionOutcome::Completed);
        }

        self.current_question_index += 1;
        self.current_question_remaining = self.allocate_current();
        Ok(QuestionOutcome::Advanced {
            question: self.current_question_index,
        })
    }

    /// Discards configuration and progress and returns to idle.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn snapshot(&self) -> ExamSnapshot {
        ExamSnapshot {
            question_index: self.current_question_index,
            total_questions: self.total_questions,
            total_remaining: self.total_remaining,
            current_question_remaining: self.current_question_remaining,
            total_seconds_initial: self.total_seconds_initial,
            run_state: self.state,
        }
    }

    #[must_use]
    pub fn run_state(&self) -> RunState {
        self.state
    }

    fn allocate_current(&self) -> i64 {
        let left = i64::from(self.total_questions) - i64::from(self.current_question_index) + 1;
        allocate(self.total_remaining, left)
    }

    fn refuse(&self, command: Command) -> TimerError {
        TimerError::InvalidStateTransition {
            command,
            state: self.state,
        }
    }
}
