use std::time::Duration;

/// Start values offered to the user and the tick period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamDefaults {
    pub minutes: i64,
    pub questions: i64,
    pub tick_period: Duration,
}

impl ExamDefaults {
    pub const DEFAULT_MINUTES: i64 = 60;
    pub const DEFAULT_QUESTIONS: i64 = 50;
    pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

    #[must_use]
    pub fn with_minutes(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }

    #[must_use]
    pub fn with_questions(mut self, questions: i64) -> Self {
        self.questions = questions;
        self
    }

    #[must_use]
    pub fn with_tick_period(mut self, tick_period: Duration) -> Self {
        self.tick_period = tick_period;
        self
    }
}

impl Default for ExamDefaults {
    fn default() -> Self {
        Self {
            minutes: Self::DEFAULT_MINUTES,
            questions: Self::DEFAULT_QUESTIONS,
            tick_period: Self::DEFAULT_TICK_PERIOD,
        }
    }
}
