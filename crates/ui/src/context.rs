use std::sync::Arc;

use rosary_core::model::Section;
use services::{AuthService, Clock, IntentionService, ProgressService, SessionService};

pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;

    fn auth(&self) -> Arc<AuthService>;
    fn intentions(&self) -> Arc<IntentionService>;
    fn progress(&self) -> Arc<ProgressService>;
    fn session(&self) -> Arc<SessionService>;
}

#[derive(Clone)]
pub struct AppContext {
    clock: Clock,

    auth: Arc<AuthService>,
    intentions: Arc<IntentionService>,
    progress: Arc<ProgressService>,
    session: Arc<SessionService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            auth: app.auth(),
            intentions: app.intentions(),
            progress: app.progress(),
            session: app.session(),
        }
    }

    /// Mystery traditionally prayed today, by the context clock.
    #[must_use]
    pub fn mystery_of_the_day(&self) -> Section {
        Section::for_weekday(self.clock.weekday())
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn intentions(&self) -> Arc<IntentionService> {
        Arc::clone(&self.intentions)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn session(&self) -> Arc<SessionService> {
        Arc::clone(&self.session)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
