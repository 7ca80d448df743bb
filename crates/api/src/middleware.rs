use std::time::Instant;

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::Instrument;

/// Permissive CORS: preflights are answered directly with 200 and every
/// response carries the allow headers.
pub(crate) async fn cors_middleware(req: Request<Body>, next: Next) -> Response {
    let mut resp = if req.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(req).await
    };
    let headers = resp.headers_mut();
    headers.insert("access-control-allow-origin", HeaderValue::from_static("*"));
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static("GET,POST,PATCH,DELETE,OPTIONS"),
    );
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static("content-type"),
    );
    resp
}

pub(crate) async fn request_tracing_middleware(req: Request<Body>, next: Next) -> Response {
    let span = tracing::info_span!(
        "http.request",
        method = %req.method(),
        route = %req.uri().path(),
    );
    async move {
        let started = Instant::now();
        let resp = next.run(req).await;
        tracing::info!(
            status = resp.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis(),
            "request served"
        );
        resp
    }
    .instrument(span)
    .await
}
