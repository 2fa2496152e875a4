use crate::model::RunState;
use crate::time::progress_percent;

/// Read-only view of the timer, taken after every command or tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExamSnapshot {
    pub question_index: u32,
    pub total_questions: u32,
    pub total_remaining: i64,
    pub current_question_remaining: i64,
    pub total_seconds_initial: i64,
    pub run_state: RunState,
}

impl ExamSnapshot {
    /// Share of the total budget still available, in whole percent.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        progress_percent(self.total_remaining, self.total_seconds_initial)
    }

    /// Number of questions from the current one through the last, inclusive.
    #[must_use]
    pub fn questions_remaining(&self) -> u32 {
        if self.question_index == 0 {
            return 0;
        }
        self.total_questions
            .saturating_sub(self.question_index)
            .saturating_add(1)
    }
}
