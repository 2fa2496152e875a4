use zimer_core::{ExamConfig, TimerError};

use crate::error::{ExamError, InputField};

/// Raw start parameters as entered by the user, parsed but not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamSetup {
    pub minutes: i64,
    pub questions: i64,
}

impl ExamSetup {
    #[must_use]
    pub fn new(minutes: i64, questions: i64) -> Self {
        Self { minutes, questions }
    }

    /// Parse the two start fields from text input.
    ///
    /// # Errors
    ///
    /// Returns `ExamError::InvalidInput` for text that is not a whole number and
    /// `ExamError::Timer` for numbers that are not positive.
    pub fn parse(minutes: &str, questions: &str) -> Result<Self, ExamError> {
        let setup = Self {
            minutes: parse_field(minutes, InputField::Minutes)?,
            questions: parse_field(questions, InputField::Questions)?,
        };
        setup.validate()?;
        Ok(setup)
    }

    /// # Errors
    ///
    /// Returns `TimerError::InvalidConfiguration` for non-positive values.
    pub fn validate(self) -> Result<ExamConfig, TimerError> {
        ExamConfig::from_minutes(self.minutes, self.questions)
    }
}

fn parse_field(value: &str, field: InputField) -> Result<i64, ExamError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ExamError::InvalidInput {
            field,
            raw: value.to_string(),
        })
}
