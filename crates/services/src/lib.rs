#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod exam;
pub mod ticker;

pub use config::ExamDefaults;
pub use error::{ExamError, InputField};
pub use exam::{ExamCommand, ExamController, ExamEvent, ExamSetup};
pub use ticker::{TickFlow, Ticker};
