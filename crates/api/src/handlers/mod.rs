use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::ApiError;

pub(crate) mod auth;
pub(crate) mod intentions;
pub(crate) mod prayers;

pub(crate) async fn not_found() -> Response {
    ApiError::new(StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// Parse a numeric path segment.
pub(crate) fn parse_id<T: std::str::FromStr>(raw: &str, what: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid {what} id")))
}
