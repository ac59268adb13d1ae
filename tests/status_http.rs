//! Health/status endpoints and the headers every response carries.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use helpers::*;
use serde_json::json;

#[tokio::test]
async fn health_reports_healthy() {
    let router = router();
    let (status, value) = json_request(&router, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["status"], json!("healthy"));
    assert!(value["timestamp"].is_string());
}

#[tokio::test]
async fn status_counts_tags_and_list_values() {
    let router = router();
    let (status, value) = json_request(&router, get("/api/status")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["tagCount"], json!(4));
    assert_eq!(value["lists"], json!({"colors": 3, "countries": 6}));
    assert_eq!(value["version"], json!(env!("CARGO_PKG_VERSION")));
}

#[tokio::test]
async fn responses_carry_security_headers_and_request_id() {
    let router = router();
    let response = send(&router, get("/api/health")).await;
    let headers = response.headers();
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert!(headers.get("content-security-policy").is_some());
    assert!(headers.get("strict-transport-security").is_none());

    let req_id = headers.get("x-request-id").unwrap().to_str().unwrap();
    assert_eq!(req_id.len(), 26, "expected a generated ULID, got {req_id}");
}

#[tokio::test]
async fn upstream_request_id_is_propagated() {
    let router = router();
    let request = Request::builder()
        .uri("/api/health")
        .header("x-request-id", "edge-1234")
        .header("x-forwarded-proto", "https")
        .body(Body::empty())
        .unwrap();
    let response = send(&router, request).await;
    assert_eq!(response.headers().get("x-request-id").unwrap(), "edge-1234");
    assert!(response.headers().get("strict-transport-security").is_some());
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let router = router();
    let response = send(&router, get("/api/nope")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
