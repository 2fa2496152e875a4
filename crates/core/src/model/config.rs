use crate::error::TimerError;

pub const SECONDS_PER_MINUTE: i64 = 60;

/// Fixed parameters of one exam run.
///
/// Both values are validated once and stay immutable until the timer is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamConfig {
    total_seconds: i64,
    total_questions: u32,
}

impl ExamConfig {
    /// Builds a configuration from a duration in minutes and a question count.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidConfiguration` if either value is not positive
    /// or does not fit the timer's counters.
    pub fn from_minutes(minutes: i64, questions: i64) -> Result<Self, TimerError> {
        let invalid = TimerError::InvalidConfiguration { minutes, questions };
        if minutes <= 0 || questions <= 0 {
            return Err(invalid);
        }
        let total_seconds = minutes.checked_mul(SECONDS_PER_MINUTE).ok_or(invalid)?;
        let total_questions = u32::try_from(questions).map_err(|_| invalid)?;

        Ok(Self {
            total_seconds,
            total_questions,
        })
    }

    #[must_use]
    pub fn total_seconds(&self) -> i64 {
        self.total_seconds
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }
}
