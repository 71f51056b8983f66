// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API authentication and CORS tests.
//!
//! These tests verify that:
//! 1. Guarded routes stay open unless `require_auth` is set
//! 2. With `require_auth`, missing or invalid tokens are rejected
//! 3. Tokens issued by `/login` are accepted by the guard
//! 4. CORS preflight requests return correct headers

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use route_fuel::middleware::auth::issue_token;
use serde_json::json;
use std::time::Duration;
use tower::ServiceExt;

mod common;

fn report_request(auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/report");
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_report_open_by_default() {
    let (app, _) = common::create_test_app("http://127.0.0.1:9/v8/routes");

    let response = app.oneshot(report_request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::json_body(response).await, json!({"report": []}));
}

#[tokio::test]
async fn test_guarded_route_without_token() {
    let (app, _) = common::create_test_app_with("http://127.0.0.1:9/v8/routes", |config| {
        config.require_auth = true;
    });

    let response = app.oneshot(report_request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_guarded_route_with_invalid_token() {
    let (app, _) = common::create_test_app_with("http://127.0.0.1:9/v8/routes", |config| {
        config.require_auth = true;
    });

    let response = app
        .oneshot(report_request(Some("Bearer invalid.token.here")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_guarded_route_with_foreign_key_token() {
    let (app, _) = common::create_test_app_with("http://127.0.0.1:9/v8/routes", |config| {
        config.require_auth = true;
    });
    let token = issue_token(
        "alice",
        b"some_other_signing_key_32_bytes!",
        Duration::from_secs(300),
    )
    .unwrap();

    let response = app
        .oneshot(report_request(Some(&format!("Bearer {}", token))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_guarded_route_accepts_login_token() {
    let (app, _) = common::create_test_app_with("http://127.0.0.1:9/v8/routes", |config| {
        config.require_auth = true;
    });

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({"username": "alice", "password": "x"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let token = common::json_body(response).await["token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .oneshot(report_request(Some(&format!("Bearer {}", token))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_is_public() {
    let (app, _) = common::create_test_app_with("http://127.0.0.1:9/v8/routes", |config| {
        config.require_auth = true;
    });

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::json_body(response).await["status"], "ok");
}

#[tokio::test]
async fn test_cors_preflight() {
    let (app, _) = common::create_test_app("http://127.0.0.1:9/v8/routes");

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/calculateRoute")
                .header(header::ORIGIN, "http://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://example.com"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
    let methods = headers
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("POST"));
    assert!(methods.contains("GET"));
}
