mod config;
mod run_state;
mod snapshot;

pub use config::{ExamConfig, SECONDS_PER_MINUTE};
pub use run_state::{Command, RunState};
pub use snapshot::ExamSnapshot;
