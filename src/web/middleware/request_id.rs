//! Request IDs and per-request response logging.
//!
//! An incoming `X-Request-Id` is reused when it looks sane, otherwise a ULID
//! is generated. Every response echoes the resolved ID back.

use axum::extract::Request;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::Instrument;

use crate::utils::fmt_duration;

pub static REQUEST_ID: &str = "x-request-id";

/// Upstream IDs longer than this are replaced rather than trusted.
const MAX_UPSTREAM_LEN: usize = 128;

/// Picks the upstream ID if present and printable, else a fresh ULID.
fn resolve(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty() && v.len() <= MAX_UPSTREAM_LEN)
        .map(str::to_owned)
        .unwrap_or_else(|| ulid::Ulid::new().to_string())
}

/// Which surface a path belongs to, for grouping log lines.
fn endpoint(path: &str) -> &'static str {
    match path {
        "/api/tags/autocomplete" => "queryset",
        p if p.starts_with("/api/lists/") && p.ends_with("/autocomplete") => "list",
        "/api/health" | "/api/status" => "status",
        _ => "other",
    }
}

fn log_response(status: StatusCode, elapsed: &str) {
    let code = status.as_u16();
    if status.is_server_error() {
        tracing::warn!(status = code, elapsed, "response");
    } else if status.is_client_error() {
        tracing::info!(status = code, elapsed, "response");
    } else {
        tracing::debug!(status = code, elapsed, "response");
    }
}

pub async fn request_id(req: Request, next: Next) -> Response {
    let req_id = resolve(req.headers());
    let span = tracing::info_span!(
        "request",
        req_id = %req_id,
        method = %req.method(),
        path = %req.uri().path(),
        endpoint = endpoint(req.uri().path()),
    );

    async move {
        let start = Instant::now();
        let mut response = next.run(req).await;
        log_response(response.status(), &fmt_duration(start.elapsed()));

        if let Ok(value) = HeaderValue::from_str(&req_id) {
            response.headers_mut().insert(REQUEST_ID, value);
        }
        response
    }
    .instrument(span)
    .await
}
