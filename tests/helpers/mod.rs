//! Shared fixtures for router-level tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use select2_autocomplete::config::Config;
use select2_autocomplete::state::AppState;
use select2_autocomplete::web::create_router;
use tower::ServiceExt;

/// Config with small, predictable data sets.
pub fn test_config() -> Config {
    Config {
        page_size: 2,
        editors: vec!["alice".to_owned()],
        blocked_users: vec!["mallory".to_owned()],
        seed_tags: ["rust", "rustic", "trust", "go"]
            .into_iter()
            .map(String::from)
            .collect(),
        seed_colors: ["Apple", "banana", "Avocado"]
            .into_iter()
            .map(String::from)
            .collect(),
        ..Config::default()
    }
}

pub fn router() -> Router {
    router_with(test_config())
}

pub fn router_with(config: Config) -> Router {
    create_router(AppState::from_config(&config))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_else(|err| panic!("failed to build request: {err}"))
}

pub fn get_as(uri: &str, user: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("x-user", user)
        .body(Body::empty())
        .unwrap_or_else(|err| panic!("failed to build request: {err}"))
}

/// Form-encoded POST; `user` sets the requester header when present.
pub fn post_form(uri: &str, body: &str, user: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(user) = user {
        builder = builder.header("x-user", user);
    }
    builder
        .body(Body::from(body.to_owned()))
        .unwrap_or_else(|err| panic!("failed to build request: {err}"))
}

pub async fn send(router: &Router, request: Request<Body>) -> Response {
    match router.clone().oneshot(request).await {
        Ok(response) => response,
        Err(err) => panic!("router request failed: {err}"),
    }
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    match to_bytes(response.into_body(), 1024 * 1024).await {
        Ok(bytes) => bytes.to_vec(),
        Err(err) => panic!("failed to read response body: {err}"),
    }
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(err) => panic!(
            "response body is not JSON: {err}; body={}",
            String::from_utf8_lossy(&bytes)
        ),
    }
}

/// `(status, json)` for a request expected to return a JSON body.
pub async fn json_request(
    router: &Router,
    request: Request<Body>,
) -> (StatusCode, serde_json::Value) {
    let response = send(router, request).await;
    let status = response.status();
    (status, body_json(response).await)
}

pub fn texts(value: &serde_json::Value) -> Vec<String> {
    value["results"]
        .as_array()
        .unwrap_or_else(|| panic!("no results array in {value}"))
        .iter()
        .map(|r| r["text"].as_str().unwrap_or_default().to_owned())
        .collect()
}
