use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use http_body_util::BodyExt;
use httpmock::prelude::*;
use serde_json::{Value, json};
use tokio::sync::Mutex;
use tower::util::ServiceExt;

use enphase_proxy::management::TokenManager;
use enphase_proxy::server::{AppContext, router};
use enphase_proxy::types::Token;

fn epoch_now() -> u64 {
    Utc::now().timestamp() as u64
}

// Helper function to create a context wired against a mock upstream
fn create_test_context(server: &MockServer, expires_at: u64) -> Arc<AppContext> {
    Arc::new(AppContext {
        token_manager: Mutex::new(TokenManager::new(
            "client-id".to_string(),
            "client-secret".to_string(),
            server.url("/oauth/token"),
            Token {
                access_token: "T1".to_string(),
                refresh_token: "R1".to_string(),
                expires_at,
            },
        )),
        api_url: server.base_url(),
        system_id: "42".to_string(),
    })
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes()
        .to_vec();
    (status, body)
}

#[tokio::test]
async fn serves_liveness_string() {
    let server = MockServer::start_async().await;
    let app = router(create_test_context(&server, 0));

    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).expect("utf8"), "✅ Enphase backend running.");
}

#[tokio::test]
async fn serves_health_with_version() {
    let server = MockServer::start_async().await;
    let app = router(create_test_context(&server, 0));

    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_slice(&body).expect("health json");
    assert_eq!(health["status"], "ok");
    assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn summary_refreshes_then_serves_normalized_shape() {
    let server = MockServer::start_async().await;
    let token_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/oauth/token");
            then.status(200)
                .json_body(json!({"access_token": "T2", "expires_in": 1800}));
        })
        .await;
    let summary_mock = server
        .mock_async(|when, then| {
            // The fetch must use the freshly refreshed token
            when.method(GET)
                .path("/systems/42/summary")
                .header("authorization", "Bearer T2");
            then.status(200)
                .json_body(json!({"production": {"today": 5.2}, "consumption": {}}));
        })
        .await;

    let app = router(create_test_context(&server, 0));
    let (status, body) = get(app, "/enphase_summary").await;

    token_mock.assert_async().await;
    summary_mock.assert_async().await;

    assert_eq!(status, StatusCode::OK);
    let payload: Value = serde_json::from_slice(&body).expect("summary json");
    assert_eq!(
        payload,
        json!({
            "production": {"today": 5.2, "month": 0.0, "year": 0.0, "lifetime": 0.0},
            "consumption": {"today": 0.0, "month": 0.0, "year": 0.0, "lifetime": 0.0}
        })
    );
}

#[tokio::test]
async fn refresh_failure_collapses_to_generic_error() {
    let server = MockServer::start_async().await;
    let token_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/oauth/token");
            then.status(401).body("invalid_grant");
        })
        .await;
    let summary_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/systems/42/summary");
            then.status(200).json_body(json!({}));
        })
        .await;

    let app = router(create_test_context(&server, 0));
    let (status, body) = get(app, "/enphase_summary").await;

    token_mock.assert_async().await;
    // A failed refresh aborts the request before any fetch happens
    summary_mock.assert_calls_async(0).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let payload: Value = serde_json::from_slice(&body).expect("error json");
    assert_eq!(payload, json!({"error": "Failed to load Enphase data"}));
}

#[tokio::test]
async fn fetch_failure_collapses_to_generic_error() {
    let server = MockServer::start_async().await;
    let token_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/oauth/token");
            then.status(200).json_body(json!({"access_token": "T2"}));
        })
        .await;
    let _summary_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/systems/42/summary");
            then.status(502).body("bad gateway");
        })
        .await;

    // The held token is still valid, so only the fetch runs and fails
    let app = router(create_test_context(&server, epoch_now() + 600));
    let (status, body) = get(app, "/enphase_summary").await;

    token_mock.assert_calls_async(0).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let payload: Value = serde_json::from_slice(&body).expect("error json");
    assert_eq!(payload, json!({"error": "Failed to load Enphase data"}));
}

#[tokio::test]
async fn repeated_requests_reuse_refreshed_token() {
    let server = MockServer::start_async().await;
    let token_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/oauth/token");
            then.status(200)
                .json_body(json!({"access_token": "T2", "expires_in": 1800}));
        })
        .await;
    let summary_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/systems/42/summary")
                .header("authorization", "Bearer T2");
            then.status(200).json_body(json!({"production": {}, "consumption": {}}));
        })
        .await;

    let app = router(create_test_context(&server, 0));

    let (first, _) = get(app.clone(), "/enphase_summary").await;
    let (second, _) = get(app, "/enphase_summary").await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);

    // The first request refreshed; the second reused the stored token
    token_mock.assert_calls_async(1).await;
    summary_mock.assert_calls_async(2).await;
}
