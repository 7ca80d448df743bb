use dioxus::prelude::*;
use rosary_core::model::Section;

use crate::views::beads::Beads;
use crate::vm::SidebarEntryVm;

#[component]
pub fn Sidebar(
    entries: Vec<SidebarEntryVm>,
    on_select: Callback<Section>,
    on_open_intentions: Callback<()>,
) -> Element {
    rsx! {
        aside { class: "sidebar",
            h2 { class: "sidebar-title", "Navigatio Sacra" }
            nav { class: "sidebar-nav",
                for entry in entries {
                    SidebarEntry { key: "{entry.section}", entry, on_select }
                }
            }
            button {
                class: "btn sidebar-intentions",
                r#type: "button",
                onclick: move |_| on_open_intentions.call(()),
                "Prayer Intentions"
            }
        }
    }
}

#[component]
fn SidebarEntry(entry: SidebarEntryVm, on_select: Callback<Section>) -> Element {
    let section = entry.section;
    let mut class = String::from("sidebar-entry");
    if entry.is_current {
        class.push_str(" current");
    }
    if entry.is_today {
        class.push_str(" today-mystery");
    }

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| on_select.call(section),
            div { class: "sidebar-entry-text",
                h3 { "{entry.title}" }
                p { "{entry.subtitle}" }
            }
            if entry.is_today {
                span { class: "today-badge", "Mystery of the day" }
            }
            if let Some(beads) = entry.beads {
                Beads { beads, size: "sm" }
            }
        }
    }
}
