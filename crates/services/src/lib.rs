#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth_service;
pub mod error;
pub mod intention_service;
pub mod prayer_service;
pub mod progress;
pub mod session_service;

pub use rosary_core::Clock;

pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use error::{
    AppServicesError, AuthError, IntentionError, PrayerError, ProgressError, SessionError,
};
pub use intention_service::IntentionService;
pub use prayer_service::PrayerService;
pub use progress::{ProgressService, ProgressSnapshot, SectionProgress};
pub use session_service::SessionService;
