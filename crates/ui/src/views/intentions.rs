use dioxus::prelude::*;
use rosary_core::model::{Intention, IntentionId};

use crate::views::{ViewError, ViewState};
use crate::vm::format_date;

#[component]
pub fn IntentionsModal(
    signed_in: bool,
    intentions: ViewState<Vec<Intention>>,
    on_add: Callback<String>,
    on_remove: Callback<IntentionId>,
    on_close: Callback<()>,
) -> Element {
    let mut draft = use_signal(String::new);

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal intentions-modal",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "Prayer Intentions" }

                if signed_in {
                    form {
                        class: "intention-form",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            let text = draft();
                            if !text.trim().is_empty() {
                                on_add.call(text);
                                draft.set(String::new());
                            }
                        },
                        input {
                            r#type: "text",
                            placeholder: "For whom or what do you pray?",
                            value: "{draft}",
                            oninput: move |evt| draft.set(evt.value()),
                        }
                        button { class: "btn", r#type: "submit", "Add" }
                    }
                    match intentions {
                        ViewState::Idle | ViewState::Loading => rsx! {
                            p { "Loading..." }
                        },
                        ViewState::Ready(items) => rsx! {
                            if items.is_empty() {
                                p { class: "muted", "No intentions yet." }
                            } else {
                                ul { class: "intention-list",
                                    for intention in items {
                                        IntentionRow { key: "{intention.id}", intention, on_remove }
                                    }
                                }
                            }
                        },
                        ViewState::Error(_) => rsx! {
                            p { class: "error", {ViewError::message()} }
                        },
                    }
                } else {
                    p { class: "muted", "Sign in to keep your prayer intentions." }
                }

                div { class: "modal-actions",
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}

#[component]
fn IntentionRow(intention: Intention, on_remove: Callback<IntentionId>) -> Element {
    let id = intention.id;
    let added = format_date(intention.created_at);
    rsx! {
        li { class: "intention-row",
            span { class: "intention-text", "{intention.text}" }
            span { class: "intention-date", "{added}" }
            button {
                class: "btn intention-remove",
                r#type: "button",
                onclick: move |_| on_remove.call(id),
                "Remove"
            }
        }
    }
}
