use dioxus::prelude::*;
use rosary_core::model::PublicUser;

use crate::context::AppContext;
use crate::vm::{AuthForm, AuthMode, submit_auth};

#[component]
pub fn LoginDialog(
    #[props(default = AuthMode::Login)] initial_mode: AuthMode,
    on_close: Callback<()>,
    on_signed_in: Callback<PublicUser>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let auth = ctx.auth();
    let mut form = use_signal(|| AuthForm::new(initial_mode));
    let error = use_signal(|| None::<String>);
    let pending = use_signal(|| false);

    let mode = form.read().mode;
    let toggle_label = match mode {
        AuthMode::Login => "Need an account? Register",
        AuthMode::Register => "Already registered? Sign in",
    };
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        let current = form();
        let mut error = error;
        let mut pending = pending;
        spawn(async move {
            pending.set(true);
            let result = submit_auth(&auth, &current).await;
            pending.set(false);
            match result {
                Ok(user) => {
                    error.set(None);
                    on_signed_in.call(user);
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal login-dialog",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "{mode.title()}" }
                form { class: "login-form", onsubmit: on_submit,
                    label { "Username"
                        input {
                            r#type: "text",
                            value: "{form.read().username}",
                            oninput: move |evt| form.write().username = evt.value(),
                        }
                    }
                    label { "Password"
                        input {
                            r#type: "password",
                            value: "{form.read().password}",
                            oninput: move |evt| form.write().password = evt.value(),
                        }
                    }
                    if mode == AuthMode::Register {
                        label { "Confirm password"
                            input {
                                r#type: "password",
                                value: "{form.read().confirm}",
                                oninput: move |evt| form.write().confirm = evt.value(),
                            }
                        }
                    }
                    if let Some(message) = error() {
                        p { class: "form-error", "{message}" }
                    }
                    div { class: "modal-actions",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: pending(),
                            "{mode.title()}"
                        }
                        button {
                            class: "btn btn-link",
                            r#type: "button",
                            onclick: move |_| {
                                let next = form.read().mode.toggled();
                                form.set(AuthForm::new(next));
                                let mut error = error;
                                error.set(None);
                            },
                            "{toggle_label}"
                        }
                    }
                }
            }
        }
    }
}
