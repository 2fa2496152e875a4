mod controller;
mod setup;

pub use controller::{ExamCommand, ExamController, ExamEvent};
pub use setup::ExamSetup;
