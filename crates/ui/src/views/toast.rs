use dioxus::prelude::*;

#[component]
pub fn Toast(message: String, on_dismiss: Callback<()>) -> Element {
    rsx! {
        div { class: "toast",
            span { class: "toast-message", "{message}" }
            button {
                class: "toast-dismiss",
                r#type: "button",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
