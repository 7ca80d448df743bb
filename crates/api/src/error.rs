use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use services::{AuthError, IntentionError, PrayerError};

/// Flat HTTP error: a status code plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    fn internal(err: &dyn std::error::Error) -> Self {
        tracing::error!(error = %err, "request failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UsernameTaken => Self::bad_request(err.to_string()),
            AuthError::InvalidCredentials => Self::new(StatusCode::UNAUTHORIZED, err.to_string()),
            AuthError::User(inner) => Self::bad_request(inner.to_string()),
            other => Self::internal(&other),
        }
    }
}

impl From<PrayerError> for ApiError {
    fn from(err: PrayerError) -> Self {
        match err {
            PrayerError::NotFound => Self::not_found(err.to_string()),
            PrayerError::UnknownUser => Self::bad_request("Invalid prayer data"),
            other => Self::internal(&other),
        }
    }
}

impl From<IntentionError> for ApiError {
    fn from(err: IntentionError) -> Self {
        match err {
            IntentionError::NotFound => Self::not_found(err.to_string()),
            IntentionError::UnknownUser => Self::bad_request("Invalid intention data"),
            IntentionError::Text(inner) => Self::bad_request(inner.to_string()),
            other => Self::internal(&other),
        }
    }
}
