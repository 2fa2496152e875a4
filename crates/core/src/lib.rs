#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod time;
pub mod timer;

pub use error::TimerError;
pub use model::{Command, ExamConfig, ExamSnapshot, RunState};
pub use time::{progress_percent, seconds_to_mmss};
pub use timer::{ExamTimer, QuestionOutcome, TickOutcome, allocate};
