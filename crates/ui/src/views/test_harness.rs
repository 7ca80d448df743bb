use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use rosary_core::model::PublicUser;
use rosary_core::time::fixed_now;
use services::{
    AppServices, AuthService, Clock, IntentionService, ProgressService, SessionService,
};
use storage::local_store::{InMemoryLocalStore, LocalStore};
use storage::repository::{IntentionRepository, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::RosaryView;
use crate::views::login::LoginDialog;

#[derive(Clone)]
struct TestApp {
    clock: Clock,
    services: AppServices,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn intentions(&self) -> Arc<IntentionService> {
        self.services.intentions()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn session(&self) -> Arc<SessionService> {
        self.services.session()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Rosary,
    Login,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
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
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Rosary => rsx! { RosaryView {} },
        ViewKind::Login => rsx! {
            LoginDialog {
                on_close: move |_| {},
                on_signed_in: move |_user: PublicUser| {},
            }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub local: Arc<dyn LocalStore>,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
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

/// Harness over fresh in-memory storage and local store.
pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with(
        view,
        Storage::in_memory(),
        Arc::new(InMemoryLocalStore::new()),
    )
}

/// Same as `setup_view_harness`, but intentions come from `intentions`.
pub fn setup_view_harness_with_intentions(
    view: ViewKind,
    intentions: Arc<dyn IntentionRepository>,
) -> ViewHarness {
    let mut storage = Storage::in_memory();
    storage.intentions = intentions;
    setup_view_harness_with(view, storage, Arc::new(InMemoryLocalStore::new()))
}

/// Services are assembled eagerly, so anything seeded into `local` must be
/// written before this is called.
pub fn setup_view_harness_with(
    view: ViewKind,
    storage: Storage,
    local: Arc<dyn LocalStore>,
) -> ViewHarness {
    let clock = Clock::fixed(fixed_now());
    let services = AppServices::from_parts(&storage, Arc::clone(&local), clock);
    let app = Arc::new(TestApp {
        clock,
        services: services.clone(),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        local,
        services,
    }
}
