use zimer_core::{ExamSnapshot, RunState, seconds_to_mmss};

/// One-shot messages shown after the countdown ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExamNotice {
    Completed,
    Halted,
}

impl ExamNotice {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ExamNotice::Completed => "All questions finished. Good luck!",
            ExamNotice::Halted => {
                "The countdown stopped after ten hours of overrun. Reset to start again."
            }
        }
    }
}

/// Display strings and control states derived from a timer snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamVm {
    pub question_label: String,
    pub total_label: String,
    pub question_time_label: String,
    pub total_overrun: bool,
    pub question_overrun: bool,
    pub paused_label: Option<&'static str>,
    pub progress_percent: u8,
    pub pause_label: &'static str,
    pub can_start: bool,
    pub can_toggle_pause: bool,
    pub can_finish: bool,
}

#[must_use]
pub fn map_exam_snapshot(snapshot: &ExamSnapshot) -> ExamVm {
    let question_label = if snapshot.total_questions == 0 {
        "Question: -/-".to_string()
    } else {
        format!(
            "Question: {}/{}",
            snapshot.question_index, snapshot.total_questions
        )
    };

    let state = snapshot.run_state;
    let paused = state == RunState::Paused;

    ExamVm {
        question_label,
        total_label: seconds_to_mmss(snapshot.total_remaining),
        question_time_label: seconds_to_mmss(snapshot.current_question_remaining),
        total_overrun: snapshot.total_remaining < 0,
        question_overrun: snapshot.current_question_remaining < 0,
        paused_label: paused.then_some("Paused"),
        progress_percent: snapshot.progress_percent(),
        pause_label: if paused { "Resume ▶" } else { "Pause ⏸" },
        can_start: state == RunState::Idle,
        can_toggle_pause: state.is_active(),
        can_finish: state == RunState::Running,
    }
}

impl ExamVm {
    #[must_use]
    pub fn total_class(&self) -> &'static str {
        timer_class(self.total_overrun)
    }

    #[must_use]
    pub fn question_class(&self) -> &'static str {
        timer_class(self.question_overrun)
    }
}

fn timer_class(overrun: bool) -> &'static str {
    if overrun {
        "exam-timer__value exam-timer__value--overrun"
    } else {
        "exam-timer__value"
    }
}
