//! Health check endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Readiness response.
#[derive(Serialize)]
pub struct ReadyResponse {
    /// `ready` or `not ready`.
    pub status: &'static str,
    /// Store reachability: `healthy` or `unhealthy`.
    pub database: &'static str,
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /health/ready
///
/// 503 while the blog store is unreachable.
async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    match state.blog_repository.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyResponse {
                status: "ready",
                database: "healthy",
            }),
        ),
        Err(err) => {
            warn!(error = %err, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyResponse {
                    status: "not ready",
                    database: "unhealthy",
                }),
            )
        }
    }
}

/// Returns the health check router. These routes are not behind the
/// authorization gate.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness))
}
