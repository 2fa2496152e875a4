use dioxus::prelude::*;
use services::{ExamDefaults, ExamEvent, TickFlow};
use zimer_core::RunState;

use super::ExamIntent;
use super::exam::deliver_tick;
use super::test_harness::{quiet_defaults, setup_view_harness};
use crate::vm::ExamNotice;

fn space() -> Key {
    Key::Character(" ".to_string())
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_renders_idle_defaults() {
    let mut harness = setup_view_harness(ExamDefaults::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question: -/-"), "missing idle label in {html}");
    assert!(html.contains("00:00"), "missing zero time in {html}");
    assert!(html.contains("value=\"60\""), "missing minutes default in {html}");
    assert!(html.contains("value=\"50\""), "missing questions default in {html}");
    assert!(html.contains("Finished this question"), "missing finish button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_start_shows_allocation() {
    let mut harness = setup_view_harness(quiet_defaults(10, 4));
    harness.rebuild();
    harness.act(|handles| handles.dispatch().call(ExamIntent::Start));

    let html = harness.render();
    assert!(html.contains("Question: 1/4"), "missing question label in {html}");
    assert!(html.contains("10:00"), "missing total time in {html}");
    assert!(html.contains("02:30"), "missing question time in {html}");
    let state = harness.act(|handles| handles.controller().peek().run_state());
    assert_eq!(state, RunState::Running);
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_rejects_invalid_input() {
    let mut harness = setup_view_harness(quiet_defaults(0, 4));
    harness.rebuild();
    harness.act(|handles| handles.dispatch().call(ExamIntent::Start));

    let html = harness.render();
    assert!(
        html.contains("Please enter positive integers"),
        "missing validation message in {html}"
    );
    assert!(html.contains("Question: -/-"), "timer should stay idle in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_pause_and_overrun() {
    let mut harness = setup_view_harness(quiet_defaults(1, 2));
    harness.rebuild();
    harness.act(|handles| handles.dispatch().call(ExamIntent::Start));

    harness.act(|handles| {
        let mut controller = handles.controller();
        for _ in 0..31 {
            assert_eq!(controller.write().tick(), ExamEvent::Ticked);
        }
    });
    let html = harness.render();
    assert!(html.contains("-00:01"), "missing overrun in {html}");
    assert!(html.contains("exam-timer__value--overrun"), "missing overrun class in {html}");

    harness.act(|handles| handles.dispatch().call(ExamIntent::TogglePause));
    let html = harness.render();
    assert!(html.contains("Paused"), "missing paused marker in {html}");
    assert!(html.contains("Resume"), "missing resume label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_completion_and_reset() {
    let mut harness = setup_view_harness(quiet_defaults(2, 2));
    harness.rebuild();
    harness.act(|handles| handles.dispatch().call(ExamIntent::Start));
    harness.act(|handles| handles.dispatch().call(ExamIntent::FinishQuestion));
    let html = harness.render();
    assert!(html.contains("Question: 2/2"), "missing second question in {html}");

    harness.act(|handles| handles.dispatch().call(ExamIntent::FinishQuestion));
    let html = harness.render();
    assert!(
        html.contains("All questions finished. Good luck!"),
        "missing completion notice in {html}"
    );

    harness.act(|handles| handles.dispatch().call(ExamIntent::Reset));
    let html = harness.render();
    assert!(html.contains("Question: -/-"), "missing reset label in {html}");
    assert!(!html.contains("Good luck"), "notice should clear on reset in {html}");
    let state = harness.act(|handles| handles.controller().peek().run_state());
    assert_eq!(state, RunState::Idle);
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_space_bar_toggles_pause() {
    let mut harness = setup_view_harness(quiet_defaults(5, 5));
    harness.rebuild();

    let used = harness.act(|handles| handles.key_down().call(space()));
    assert!(!used, "space should do nothing before a run starts");

    harness.act(|handles| handles.dispatch().call(ExamIntent::Start));
    let used = harness.act(|handles| handles.key_down().call(space()));
    assert!(used);
    let html = harness.render();
    assert!(html.contains("Paused"), "missing paused marker in {html}");
    let state = harness.act(|handles| handles.controller().peek().run_state());
    assert_eq!(state, RunState::Paused);

    let used = harness.act(|handles| handles.key_down().call(Key::Enter));
    assert!(!used, "only space toggles pause");

    harness.act(|handles| handles.key_down().call(space()));
    let html = harness.render();
    assert!(!html.contains("Paused"), "pause marker should clear in {html}");
    assert!(html.contains("Pause"), "missing pause label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_paused_ticks_leave_timer_alone() {
    let mut harness = setup_view_harness(quiet_defaults(1, 1));
    harness.rebuild();
    harness.act(|handles| handles.dispatch().call(ExamIntent::Start));
    harness.act(|handles| handles.dispatch().call(ExamIntent::TogglePause));

    let (flow, snapshot) = harness.act(|handles| {
        let before = handles.controller().peek().snapshot();
        let flow = deliver_tick(handles.controller(), handles.notice());
        assert_eq!(handles.controller().peek().snapshot(), before);
        (flow, before)
    });
    assert_eq!(flow, TickFlow::Continue);
    assert_eq!(snapshot.total_remaining, 60);
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_runaway_guard_shows_halted_notice() {
    let mut harness = setup_view_harness(quiet_defaults(1, 1));
    harness.rebuild();
    harness.act(|handles| handles.dispatch().call(ExamIntent::Start));

    let ticks = harness.act(|handles| {
        let mut ticks = 0_u32;
        while deliver_tick(handles.controller(), handles.notice()) == TickFlow::Continue {
            ticks += 1;
        }
        ticks + 1
    });
    assert_eq!(ticks, 60 + 36_001);

    let html = harness.render();
    assert!(
        html.contains(ExamNotice::Halted.message()),
        "missing halted notice in {html}"
    );
    let state = harness.act(|handles| handles.controller().peek().run_state());
    assert_eq!(state, RunState::Halted);
    let flow = harness.act(|handles| deliver_tick(handles.controller(), handles.notice()));
    assert_eq!(flow, TickFlow::Stop);

    harness.act(|handles| handles.dispatch().call(ExamIntent::Reset));
    let html = harness.render();
    assert!(!html.contains("ten hours"), "notice should clear on reset in {html}");
}
