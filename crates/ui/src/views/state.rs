use services::ExamError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    InvalidInput,
    InvalidState,
}

impl ViewError {
    #[must_use]
    pub fn from_exam(err: &ExamError) -> Self {
        if err.is_invalid_state_transition() {
            ViewError::InvalidState
        } else {
            ViewError::InvalidInput
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::InvalidInput => {
                "Please enter positive integers for minutes and questions."
            }
            ViewError::InvalidState => "Reset the timer before starting a new exam.",
        }
    }
}
