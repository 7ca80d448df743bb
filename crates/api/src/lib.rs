//! HTTP surface for accounts, prayer records and intentions.

#![forbid(unsafe_code)]

use std::sync::Arc;

use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use services::{AppServices, AuthService, IntentionService, PrayerService};
use tokio::net::TcpListener;

mod error;
mod handlers;
mod middleware;

pub use error::ApiError;

/// Services shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub prayers: Arc<PrayerService>,
    pub intentions: Arc<IntentionService>,
}

impl AppState {
    #[must_use]
    pub fn from_services(services: &AppServices) -> Self {
        Self {
            auth: services.auth(),
            prayers: services.prayers(),
            intentions: services.intentions(),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/prayers", post(handlers::prayers::create))
        .route(
            "/api/prayers/:id",
            get(handlers::prayers::list).patch(handlers::prayers::update),
        )
        .route("/api/intentions", post(handlers::intentions::create))
        .route(
            "/api/intentions/:id",
            get(handlers::intentions::list).delete(handlers::intentions::remove),
        )
        .fallback(handlers::not_found)
        .layer(from_fn(middleware::cors_middleware))
        .layer(from_fn(middleware::request_tracing_middleware))
        .with_state(state)
}

/// Serve `state` on an already-bound listener until the task is dropped.
///
/// # Errors
///
/// Returns the underlying I/O error if the server stops unexpectedly.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "api listening");
    }
    axum::serve(listener, build_router(state)).await
}
