//! Integration tests for health, routing fallbacks, CORS and body limits.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use geoproc_core::config::AppConfig;
use helpers::{POINTS_URL, TestApp};

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.send("GET", "/api/health", "", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
    assert!(response.body["uptime_seconds"].is_u64());
    assert!(response.body["timestamp"].is_string());
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new();

    let response = app.send("GET", "/api/polygons", "", &[]).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
    assert_eq!(response.body["message"], "No route for /api/polygons");
}

#[tokio::test]
async fn test_request_id_header() {
    let app = TestApp::new();

    let response = app
        .post_points(json!({"points": [{"lat": 1, "lng": 1}]}))
        .await;

    let request_id = response
        .headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header");
    assert_eq!(request_id.len(), 36);
}

#[tokio::test]
async fn test_cors_preflight_localhost_allowed() {
    let app = TestApp::new();

    let response = app
        .send(
            "OPTIONS",
            POINTS_URL,
            "",
            &[
                ("Origin", "http://localhost:3000"),
                ("Access-Control-Request-Method", "POST"),
                ("Access-Control-Request-Headers", "content-type"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response
            .headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
}

#[tokio::test]
async fn test_cors_foreign_origin_not_allowed() {
    let app = TestApp::new();

    let response = app
        .send(
            "POST",
            POINTS_URL,
            r#"{"points":[{"lat":1,"lng":2}]}"#,
            &[("Origin", "https://elsewhere.example.com")],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.headers.get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn test_cors_configured_origin_allowed() {
    let mut config = AppConfig::default();
    config.server.cors.allow_localhost = false;
    config.server.cors.allowed_origins = vec!["https://maps.example.com".to_string()];
    let app = TestApp::with_config(config);

    let allowed = app
        .send(
            "POST",
            POINTS_URL,
            r#"{"points":[{"lat":1,"lng":2}]}"#,
            &[("Origin", "https://maps.example.com")],
        )
        .await;
    assert_eq!(
        allowed
            .headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("https://maps.example.com")
    );

    let local = app
        .send(
            "POST",
            POINTS_URL,
            r#"{"points":[{"lat":1,"lng":2}]}"#,
            &[("Origin", "http://localhost:3000")],
        )
        .await;
    assert!(local.headers.get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn test_body_limit() {
    let mut config = AppConfig::default();
    config.server.max_body_bytes = 32;
    let app = TestApp::with_config(config);

    let response = app
        .post_points(json!({"points": [
            {"lat": 1.0, "lng": 2.0},
            {"lat": 3.0, "lng": 4.0},
            {"lat": 5.0, "lng": 6.0},
        ]}))
        .await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
}
