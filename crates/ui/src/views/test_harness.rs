use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::ExamDefaults;

use crate::context::{UiApp, build_app_context};
use crate::views::ExamView;
use crate::views::exam::ExamTestHandles;

#[derive(Clone)]
struct TestApp {
    defaults: ExamDefaults,
}

impl UiApp for TestApp {
    fn exam_defaults(&self) -> ExamDefaults {
        self.defaults
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    exam_handles: ExamTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.exam_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { ExamView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub exam_handles: ExamTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Run a closure inside the dom's runtime, then flush the resulting renders.
    pub fn act<O>(&mut self, f: impl FnOnce(&ExamTestHandles) -> O) -> O {
        let handles = self.exam_handles.clone();
        let out = self.dom.in_runtime(|| f(&handles));
        drive_dom(&mut self.dom);
        out
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(defaults: ExamDefaults) -> ViewHarness {
    let exam_handles = ExamTestHandles::default();
    let app = Arc::new(TestApp { defaults });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            exam_handles: exam_handles.clone(),
        },
    );

    ViewHarness { dom, exam_handles }
}

/// Defaults with a tick period long enough that no real tick lands during a test.
pub fn quiet_defaults(minutes: i64, questions: i64) -> ExamDefaults {
    ExamDefaults::default()
        .with_minutes(minutes)
        .with_questions(questions)
        .with_tick_period(Duration::from_secs(3600))
}
