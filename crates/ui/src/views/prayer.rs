use dioxus::prelude::*;
use rosary_core::content::Part;
use rosary_core::model::{Intention, Section};

use crate::views::beads::Beads;
use crate::views::{ViewError, ViewState};
use crate::vm::PrayerPageVm;

#[component]
pub fn PrayerContent(
    page: PrayerPageVm,
    intentions: ViewState<Vec<Intention>>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
    on_jump: Callback<usize>,
) -> Element {
    let current = page.section;

    rsx! {
        main { class: "prayer-content",
            section { class: "prayer-header",
                h1 { "{page.title}" }
                p { class: "prayer-subtitle",
                    "{page.subtitle} • "
                    em { "{page.latin}" }
                }
                if let Some(mystery) = page.mystery.clone() {
                    div { class: "mystery-progress",
                        p { class: "mystery-position", "{mystery.label}" }
                        Beads { beads: mystery.beads, on_select: on_jump }
                    }
                }
            }

            div { class: "prayer-parts",
                for (idx, part) in page.parts.iter().copied().enumerate() {
                    PrayerPart { key: "{idx}", part }
                    if page.intentions_after == Some(idx) {
                        IntentionList { intentions: intentions.clone() }
                    }
                }
            }

            nav { class: "prayer-nav",
                button {
                    class: "btn nav-previous",
                    r#type: "button",
                    disabled: page.nav.previous_disabled,
                    onclick: move |_| on_previous.call(()),
                    "{page.nav.previous_label}"
                }
                div { class: "section-dots",
                    for section in Section::ALL {
                        span {
                            key: "{section}",
                            class: if section == current { "dot active" } else { "dot" },
                        }
                    }
                }
                button {
                    class: "btn nav-next",
                    r#type: "button",
                    disabled: page.nav.next_disabled,
                    onclick: move |_| on_next.call(()),
                    "{page.nav.next_label}"
                }
            }
        }
    }
}

#[component]
fn PrayerPart(part: Part) -> Element {
    rsx! {
        article { class: "prayer-part",
            h2 { "{part.title}" }
            div { class: "prayer-columns",
                div { class: "prayer-latin",
                    h3 { "Lingua Latina" }
                    p { "{part.latin}" }
                }
                div { class: "prayer-vernacular",
                    h3 { "English" }
                    p { "{part.vernacular}" }
                }
            }
        }
    }
}

/// The user's intentions, read out after the offertory. Nothing is shown
/// until there is at least one.
#[component]
fn IntentionList(intentions: ViewState<Vec<Intention>>) -> Element {
    match intentions {
        ViewState::Ready(items) if !items.is_empty() => rsx! {
            section { class: "offertory-intentions",
                h3 { "Intentiones" }
                ul {
                    for item in items {
                        li { key: "{item.id}", "{item.text}" }
                    }
                }
            }
        },
        ViewState::Error(_) => rsx! {
            section { class: "offertory-intentions",
                p { class: "error", {ViewError::message()} }
            }
        },
        _ => rsx! {},
    }
}
