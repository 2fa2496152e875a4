use zimer_core::{
    Command, ExamSnapshot, ExamTimer, QuestionOutcome, RunState, TickOutcome, TimerError,
};

use crate::error::ExamError;
use super::setup::ExamSetup;

/// Inputs the presentation shell can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamCommand {
    Start(ExamSetup),
    TogglePause,
    FinishQuestion,
    Reset,
    Tick,
}

/// What a successfully applied command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamEvent {
    Started { question_seconds: i64 },
    Paused,
    Resumed,
    Advanced { question: u32, question_seconds: i64 },
    /// The last question was finished. The shell should tell the user.
    Completed,
    Ticked,
    /// The runaway guard stopped the countdown.
    Halted,
    Reset,
    /// A tick arrived while nothing was counting.
    Idle,
}

impl ExamEvent {
    /// True once no further ticks can change the timer until a reset.
    #[must_use]
    pub fn ends_countdown(self) -> bool {
        matches!(self, ExamEvent::Completed | ExamEvent::Halted)
    }
}

/// Command shell over a single, explicitly owned timer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExamController {
    timer: ExamTimer,
}

impl ExamController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one command to the timer.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::Timer` when the command is refused. The timer is left
    /// untouched in that case.
    pub fn apply(&mut self, command: ExamCommand) -> Result<ExamEvent, ExamError> {
        let result = self.dispatch(command);
        if let Err(err) = &result {
            log::warn!("exam command {command:?} rejected: {err}");
        }
        result
    }

    fn dispatch(&mut self, command: ExamCommand) -> Result<ExamEvent, ExamError> {
        match command {
            ExamCommand::Start(setup) => {
                // A live run refuses Start before its arguments are looked at.
                let state = self.timer.run_state();
                if state != RunState::Idle {
                    return Err(TimerError::InvalidStateTransition {
                        command: Command::Start,
                        state,
                    }
                    .into());
                }
                let config = setup.validate()?;
                self.timer.start_config(config)?;
                let snapshot = self.timer.snapshot();
                log::info!(
                    "exam started: {} minutes over {} questions, {}s per question",
                    setup.minutes,
                    snapshot.total_questions,
                    snapshot.current_question_remaining
                );
                Ok(ExamEvent::Started {
                    question_seconds: snapshot.current_question_remaining,
                })
            }
            ExamCommand::TogglePause => {
                let state = self.timer.toggle_pause()?;
                if state == RunState::Paused {
                    log::info!("exam paused");
                    Ok(ExamEvent::Paused)
                } else {
                    log::info!("exam resumed");
                    Ok(ExamEvent::Resumed)
                }
            }
            ExamCommand::FinishQuestion => match self.timer.finish_question()? {
                QuestionOutcome::Advanced { question } => {
                    let snapshot = self.timer.snapshot();
                    log::info!(
                        "question {question}/{} started with {}s ({}s left overall)",
                        snapshot.total_questions,
                        snapshot.current_question_remaining,
                        snapshot.total_remaining
                    );
                    Ok(ExamEvent::Advanced {
                        question,
                        question_seconds: snapshot.current_question_remaining,
                    })
                }
                QuestionOutcome::Completed => {
                    log::info!(
                        "all questions finished with {}s left",
                        self.timer.snapshot().total_remaining
                    );
                    Ok(ExamEvent::Completed)
                }
            },
            ExamCommand::Reset => {
                self.timer.reset();
                log::info!("exam reset");
                Ok(ExamEvent::Reset)
            }
            ExamCommand::Tick => Ok(self.tick()),
        }
    }

    /// Deliver one clock tick. Never fails.
    pub fn tick(&mut self) -> ExamEvent {
        match self.timer.tick() {
            TickOutcome::Counted => {
                log::trace!("tick: {}s left", self.timer.snapshot().total_remaining);
                ExamEvent::Ticked
            }
            TickOutcome::Skipped => ExamEvent::Idle,
            TickOutcome::Halted => {
                log::warn!(
                    "countdown halted after {}s of overrun",
                    -self.timer.snapshot().total_remaining
                );
                ExamEvent::Halted
            }
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> ExamSnapshot {
        self.timer.snapshot()
    }

    #[must_use]
    pub fn run_state(&self) -> RunState {
        self.timer.run_state()
    }
}
