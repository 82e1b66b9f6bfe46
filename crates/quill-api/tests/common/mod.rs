//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use quill_store::pg_blog_repository::PgBlogRepository;
use quill_test_support::sign_token;
use sqlx::PgPool;
use tower::ServiceExt;

use quill_api::auth::TokenVerifier;
use quill_api::state::AppState;

/// Shared secret used by every integration test.
pub const SECRET: &str = "integration-secret";

/// Build the full app router with a real `PgBlogRepository`. Uses the same
/// route structure as `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let app_state = AppState::new(
        Arc::new(PgBlogRepository::new(pool)),
        Arc::new(TokenVerifier::new(SECRET)),
    );
    quill_api::app(app_state)
}

/// A token for `user_id` signed with [`SECRET`].
pub fn token_for(user_id: &str) -> String {
    sign_token(SECRET, user_id)
}

/// Send a request with an optional token and JSON body and return the
/// response status and JSON body.
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<&serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", token);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request without a token and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send_json(app, "GET", uri, None, None).await
}
