use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::RosaryView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", RosaryView)] Rosary {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Outlet::<Route> {}
        }
    }
}
