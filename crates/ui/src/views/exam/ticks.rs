use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use services::{ExamController, ExamEvent, TickFlow, Ticker};
use zimer_core::RunState;

use crate::vm::ExamNotice;

/// Schedule ticks for the running exam, replacing any pending schedule.
pub(super) fn start_ticks(
    controller: Signal<ExamController>,
    notice: Signal<Option<ExamNotice>>,
    mut ticker: Signal<Option<Task>>,
    period: Duration,
) {
    stop_ticks(ticker);
    let task = spawn(async move {
        Ticker::new(period)
            .run(move || deliver_tick(controller, notice))
            .await;
    });
    ticker.set(Some(task));
}

/// Cancel the pending tick, if any. Takes effect before the next tick fires.
pub(super) fn stop_ticks(mut ticker: Signal<Option<Task>>) {
    let pending = ticker.write().take();
    if let Some(task) = pending {
        task.cancel();
    }
}

/// Hand one tick to the controller.
///
/// The controller is only written while it is counting, so a paused timer does
/// not re-render every period.
pub(crate) fn deliver_tick(
    mut controller: Signal<ExamController>,
    mut notice: Signal<Option<ExamNotice>>,
) -> TickFlow {
    let state = controller.peek().run_state();
    if state.is_terminal() {
        return TickFlow::Stop;
    }
    if state != RunState::Running {
        return TickFlow::Continue;
    }

    let event = controller.write().tick();
    if event == ExamEvent::Halted {
        notice.set(Some(ExamNotice::Halted));
    }
    if event.ends_countdown() {
        TickFlow::Stop
    } else {
        TickFlow::Continue
    }
}
