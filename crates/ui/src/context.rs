use std::sync::Arc;
use std::time::Duration;

use services::ExamDefaults;

pub trait UiApp: Send + Sync {
    fn exam_defaults(&self) -> ExamDefaults;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppContext {
    exam_defaults: ExamDefaults,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            exam_defaults: app.exam_defaults(),
        }
    }

    #[must_use]
    pub fn exam_defaults(&self) -> ExamDefaults {
        self.exam_defaults
    }

    #[must_use]
    pub fn tick_period(&self) -> Duration {
        self.exam_defaults.tick_period
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
