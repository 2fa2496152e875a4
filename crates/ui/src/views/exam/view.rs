use dioxus::core::Task;
use dioxus::prelude::*;
use services::{ExamCommand, ExamController, ExamEvent, ExamSetup};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{ExamNotice, map_exam_snapshot};

use super::intent::ExamIntent;
use super::ticks::{start_ticks, stop_ticks};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const HINT: &str = "This program divides exam time across questions. \
If a question's time runs out without answering, it will subtract from the rest.";

fn is_space(key: &Key) -> bool {
    matches!(key, Key::Character(value) if value == " ")
}

#[component]
pub fn ExamView() -> Element {
    let ctx = use_context::<AppContext>();
    let defaults = ctx.exam_defaults();
    let tick_period = ctx.tick_period();

    let mut minutes = use_signal(|| defaults.minutes.to_string());
    let mut questions = use_signal(|| defaults.questions.to_string());
    let controller = use_signal(ExamController::new);
    let ticker = use_signal(|| None::<Task>);
    let notice = use_signal(|| None::<ExamNotice>);
    let error = use_signal(|| None::<ViewError>);

    let dispatch_intent = use_callback(move |intent: ExamIntent| {
        let mut controller = controller;
        let mut notice = notice;
        let mut error = error;

        match intent {
            ExamIntent::Start => {
                let parsed = ExamSetup::parse(minutes.peek().as_str(), questions.peek().as_str());
                let result =
                    parsed.and_then(|setup| controller.write().apply(ExamCommand::Start(setup)));
                match result {
                    Ok(_) => {
                        error.set(None);
                        notice.set(None);
                        start_ticks(controller, notice, ticker, tick_period);
                    }
                    Err(err) => {
                        log::debug!("start rejected: {err}");
                        error.set(Some(ViewError::from_exam(&err)));
                    }
                }
            }
            ExamIntent::TogglePause => {
                // Refusals are logged by the controller.
                controller.write().apply(ExamCommand::TogglePause).ok();
            }
            ExamIntent::FinishQuestion => {
                let result = controller.write().apply(ExamCommand::FinishQuestion);
                if matches!(result, Ok(ExamEvent::Completed)) {
                    stop_ticks(ticker);
                    notice.set(Some(ExamNotice::Completed));
                }
            }
            ExamIntent::Reset => {
                stop_ticks(ticker);
                controller.write().apply(ExamCommand::Reset).ok();
                notice.set(None);
                error.set(None);
            }
        }
    });

    // Space toggles pause while a run is live. Returns whether the key was used.
    let handle_key = use_callback(move |key: Key| {
        if is_space(&key) && controller.peek().run_state().is_active() {
            dispatch_intent.call(ExamIntent::TogglePause);
            true
        } else {
            false
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ExamTestHandles>() {
                handles.register(dispatch_intent, handle_key, controller, notice);
            }
        }
    }

    let vm = map_exam_snapshot(&controller.read().snapshot());
    let total_class = vm.total_class();
    let question_class = vm.question_class();

    rsx! {
        div {
            class: "page page--exam",
            id: "exam-root",
            tabindex: "0",
            onkeydown: move |evt: KeyboardEvent| {
                if handle_key.call(evt.data.key()) {
                    evt.prevent_default();
                }
            },

            div { class: "exam-setup",
                label { r#for: "exam-minutes", "Total minutes:" }
                input {
                    id: "exam-minutes",
                    r#type: "text",
                    inputmode: "numeric",
                    size: "10",
                    value: "{minutes}",
                    disabled: !vm.can_start,
                    oninput: move |evt| minutes.set(evt.value()),
                }
                label { r#for: "exam-questions", "Number of questions:" }
                input {
                    id: "exam-questions",
                    r#type: "text",
                    inputmode: "numeric",
                    size: "10",
                    value: "{questions}",
                    disabled: !vm.can_start,
                    oninput: move |evt| questions.set(evt.value()),
                }
            }

            div { class: "exam-actions",
                button {
                    id: "exam-start",
                    class: "btn btn-primary",
                    disabled: !vm.can_start,
                    onclick: move |_| dispatch_intent.call(ExamIntent::Start),
                    "Start"
                }
                button {
                    id: "exam-pause",
                    class: "btn",
                    disabled: !vm.can_toggle_pause,
                    onclick: move |_| dispatch_intent.call(ExamIntent::TogglePause),
                    "{vm.pause_label}"
                }
                button {
                    id: "exam-finish",
                    class: "btn",
                    disabled: !vm.can_finish,
                    onclick: move |_| dispatch_intent.call(ExamIntent::FinishQuestion),
                    "Finished this question ✓"
                }
                button {
                    id: "exam-reset",
                    class: "btn",
                    onclick: move |_| dispatch_intent.call(ExamIntent::Reset),
                    "Reset"
                }
            }

            if let Some(err) = error() {
                p { class: "exam-error", role: "alert", "{err.message()}" }
            }

            div { class: "exam-display",
                p { class: "exam-question", "{vm.question_label}" }
                if let Some(paused) = vm.paused_label {
                    p { class: "exam-paused", "{paused}" }
                }

                div { class: "exam-timers",
                    div { class: "exam-timer",
                        span { class: "exam-timer__caption", "Total remaining time:" }
                        span { class: "{total_class}", id: "exam-total", "{vm.total_label}" }
                    }
                    div { class: "exam-timer",
                        span { class: "exam-timer__caption", "Current question time:" }
                        span { class: "{question_class}", id: "exam-current", "{vm.question_time_label}" }
                    }
                }

                p { class: "exam-hint", "{HINT}" }

                progress {
                    class: "exam-progress",
                    max: "100",
                    value: "{vm.progress_percent}",
                }
            }

            if let Some(notice) = notice() {
                div { class: "exam-notice", role: "status", "{notice.message()}" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ExamTestHandles {
    dispatch: Rc<RefCell<Option<Callback<ExamIntent>>>>,
    keys: Rc<RefCell<Option<Callback<Key, bool>>>>,
    controller: Rc<RefCell<Option<Signal<ExamController>>>>,
    notice: Rc<RefCell<Option<Signal<Option<ExamNotice>>>>>,
}

#[cfg(test)]
impl ExamTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<ExamIntent>,
        keys: Callback<Key, bool>,
        controller: Signal<ExamController>,
        notice: Signal<Option<ExamNotice>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.keys.borrow_mut() = Some(keys);
        *self.controller.borrow_mut() = Some(controller);
        *self.notice.borrow_mut() = Some(notice);
    }

    pub(crate) fn dispatch(&self) -> Callback<ExamIntent> {
        (*self.dispatch.borrow()).expect("exam dispatch registered")
    }

    pub(crate) fn key_down(&self) -> Callback<Key, bool> {
        (*self.keys.borrow()).expect("exam key handler registered")
    }

    pub(crate) fn controller(&self) -> Signal<ExamController> {
        (*self.controller.borrow()).expect("exam controller registered")
    }

    pub(crate) fn notice(&self) -> Signal<Option<ExamNotice>> {
        (*self.notice.borrow()).expect("exam notice registered")
    }
}
