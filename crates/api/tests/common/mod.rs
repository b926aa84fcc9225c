//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use trainlog_api::auth::identity::{IdentityConfig, IdentityVerifier, VerifiedIdentity};
use trainlog_api::auth::resolver::IdentityResolver;
use trainlog_api::config::ServerConfig;
use trainlog_api::router::build_app_router;
use trainlog_api::state::AppState;
use trainlog_core::error::CoreError;

/// Accepts tokens of the form `token-<subject>` without any signature.
pub struct StaticVerifier;

#[async_trait]
impl IdentityVerifier for StaticVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, CoreError> {
        let sub = token
            .strip_prefix("token-")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CoreError::Unauthorized("Invalid or expired token".into()))?;
        Ok(VerifiedIdentity {
            external_auth_id: sub.to_string(),
            email: Some(format!("{sub}@example.com")),
            name: Some(sub.to_string()),
            image_url: None,
        })
    }
}

/// Bearer token the static verifier maps to external id `sub`.
pub fn token(sub: &str) -> String {
    format!("token-{sub}")
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        identity: IdentityConfig {
            secret: "test-secret".to_string(),
            issuer: None,
            audience: None,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and the static identity verifier.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let identity = Arc::new(IdentityResolver::new(pool.clone(), Arc::new(StaticVerifier)));
    let state = AppState::new(pool, identity);
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON. Empty bodies become `null`.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}

/// Status and parsed body in one step.
pub async fn status_and_json(response: Response<Body>) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    (status, body_json(response).await)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Id of a seeded preset exercise by name.
pub async fn preset_id(pool: &PgPool, name: &str) -> i64 {
    let (id,): (i64,) = sqlx::query_as("SELECT id FROM exercises WHERE is_preset AND name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap();
    id
}

/// Create a training session through the API and return its id.
pub async fn create_session(pool: &PgPool, token: &str) -> i64 {
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/training-sessions",
        serde_json::json!({"performedStartAt": "2024-01-01T09:00:00Z"}),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Add a workout for an existing exercise and return the response.
pub async fn add_workout(
    pool: &PgPool,
    token: &str,
    session_id: i64,
    exercise_id: i64,
) -> (StatusCode, serde_json::Value) {
    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/training-sessions/{session_id}/workouts"),
        serde_json::json!({"exerciseId": exercise_id}),
        token,
    )
    .await;
    status_and_json(response).await
}

/// Fetch a session and return `(workout id, orderIndex)` pairs in response order.
pub async fn workout_order(pool: &PgPool, token: &str, session_id: i64) -> Vec<(i64, i64)> {
    let response = get_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/training-sessions/{session_id}"),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["workouts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| (w["id"].as_i64().unwrap(), w["orderIndex"].as_i64().unwrap()))
        .collect()
}
