use std::time::Duration;

use dioxus::prelude::*;
use rosary_core::model::{IntentionId, PublicUser, Section};
use services::{IntentionError, SessionService};

use crate::context::AppContext;
use crate::views::intentions::IntentionsModal;
use crate::views::login::LoginDialog;
use crate::views::prayer::PrayerContent;
use crate::views::sidebar::Sidebar;
use crate::views::toast::Toast;
use crate::views::{ViewError, view_state_from_resource};
use crate::vm::{map_prayer_page, map_sidebar_entries};

const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NavAction {
    Next,
    Previous,
    Jump(usize),
    Select(Section),
}

fn restore_user(session: &SessionService) -> Option<PublicUser> {
    match session.restore() {
        Ok(user) => user,
        Err(err) => {
            tracing::warn!(error = %err, "could not restore signed-in user");
            None
        }
    }
}

fn show_toast(mut toast: Signal<Option<String>>, message: String) {
    toast.set(Some(message.clone()));
    spawn(async move {
        tokio::time::sleep(TOAST_TTL).await;
        // a newer toast owns the slot now
        if toast.peek().as_deref() == Some(message.as_str()) {
            toast.set(None);
        }
    });
}

fn intention_failure(err: &IntentionError) -> String {
    match err {
        IntentionError::Text(text) => text.to_string(),
        other => {
            tracing::warn!(error = %other, "intention request failed");
            ViewError::message().to_owned()
        }
    }
}

#[component]
pub fn RosaryView() -> Element {
    let ctx = use_context::<AppContext>();
    let today = ctx.mystery_of_the_day();
    let progress = ctx.progress();
    let session = ctx.session();
    let intention_service = ctx.intentions();

    let mut snapshot = use_signal({
        let progress = progress.clone();
        move || progress.snapshot()
    });
    let mut user = use_signal({
        let session = session.clone();
        move || restore_user(&session)
    });
    let mut show_intentions = use_signal(|| false);
    let mut show_login = use_signal(|| false);
    let mut toast = use_signal(|| None::<String>);
    let intentions_rev = use_signal(|| 0_u32);

    let intentions = use_resource({
        let service = intention_service.clone();
        move || {
            let service = service.clone();
            let signed_in = user();
            let _ = intentions_rev();
            async move {
                let Some(signed_in) = signed_in else {
                    return Ok(Vec::new());
                };
                service.list(signed_in.id).await.map_err(|err| {
                    tracing::warn!(error = %err, "failed to load intentions");
                    ViewError::Unknown
                })
            }
        }
    });
    let intentions_state = view_state_from_resource(&intentions);

    let on_nav = use_callback({
        let progress = progress.clone();
        move |action: NavAction| {
            let current = snapshot.peek().current;
            let result = match action {
                NavAction::Next => progress.next(),
                NavAction::Previous => progress.previous(),
                NavAction::Jump(index) => progress.jump_to(current, index),
                NavAction::Select(section) => Ok(progress.select(section)),
            };
            if let Err(err) = result {
                tracing::warn!(error = %err, ?action, "progress was not saved");
                show_toast(toast, ViewError::message().to_owned());
            }
            snapshot.set(progress.snapshot());
        }
    });

    let on_signed_in = use_callback({
        let session = session.clone();
        move |signed_in: PublicUser| {
            if let Err(err) = session.remember(&signed_in) {
                tracing::warn!(error = %err, "could not remember signed-in user");
                show_toast(toast, ViewError::message().to_owned());
            }
            user.set(Some(signed_in));
            show_login.set(false);
        }
    });

    let on_sign_out = {
        let session = session.clone();
        move |_| {
            if let Err(err) = session.forget() {
                tracing::warn!(error = %err, "could not forget signed-in user");
            }
            user.set(None);
        }
    };

    let on_add_intention = use_callback({
        let service = intention_service.clone();
        move |text: String| {
            let Some(signed_in) = user.peek().clone() else {
                show_toast(toast, "Sign in to keep prayer intentions".to_owned());
                return;
            };
            let service = service.clone();
            let mut intentions_rev = intentions_rev;
            spawn(async move {
                match service.add(signed_in.id, &text).await {
                    Ok(_) => *intentions_rev.write() += 1,
                    Err(err) => show_toast(toast, intention_failure(&err)),
                }
            });
        }
    });

    let on_remove_intention = use_callback({
        let service = intention_service.clone();
        move |id: IntentionId| {
            let Some(signed_in) = user.peek().clone() else {
                return;
            };
            let service = service.clone();
            let mut intentions_rev = intentions_rev;
            spawn(async move {
                match service.remove(id, signed_in.id).await {
                    Ok(()) => *intentions_rev.write() += 1,
                    Err(err) => show_toast(toast, intention_failure(&err)),
                }
            });
        }
    });

    let current = snapshot.read().clone();
    let page = map_prayer_page(&current);
    let entries = map_sidebar_entries(&current, today);
    let signed_in = user();

    rsx! {
        div { class: "rosary",
            header { class: "rosary-header",
                h1 { "✠ Rosarium Virginis Mariae ✠" }
                div { class: "account",
                    if let Some(account) = signed_in.clone() {
                        span { class: "welcome", "Welcome, {account.username}" }
                        button {
                            class: "btn btn-link",
                            r#type: "button",
                            onclick: on_sign_out,
                            "Sign out"
                        }
                    } else {
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| show_login.set(true),
                            "Sign in"
                        }
                    }
                }
            }

            div { class: "rosary-body",
                Sidebar {
                    entries,
                    on_select: move |section| on_nav.call(NavAction::Select(section)),
                    on_open_intentions: move |_| show_intentions.set(true),
                }
                PrayerContent {
                    page,
                    intentions: intentions_state.clone(),
                    on_previous: move |_| on_nav.call(NavAction::Previous),
                    on_next: move |_| on_nav.call(NavAction::Next),
                    on_jump: move |index| on_nav.call(NavAction::Jump(index)),
                }
            }

            if show_intentions() {
                IntentionsModal {
                    signed_in: signed_in.is_some(),
                    intentions: intentions_state.clone(),
                    on_add: on_add_intention,
                    on_remove: on_remove_intention,
                    on_close: move |_| show_intentions.set(false),
                }
            }
            if show_login() {
                LoginDialog {
                    on_close: move |_| show_login.set(false),
                    on_signed_in,
                }
            }
            if let Some(message) = toast() {
                Toast { message, on_dismiss: move |_| toast.set(None) }
            }
        }
    }
}
