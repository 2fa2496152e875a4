use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::ExamView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ExamView)] Exam {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "ZIMER" }
                p { class: "app-header__tagline", "Exam Time Divider" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
