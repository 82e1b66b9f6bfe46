//! Quill blog API — HTTP surface.
//!
//! Library half of the `quill-api` crate so that integration tests can build
//! the same router as the binary.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

use state::AppState;

/// Mount point of the blog routes.
pub const BLOG_PREFIX: &str = "/api/v1/blog";

/// Builds the full application router.
pub fn app(state: AppState) -> Router {
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    Router::new()
        .merge(routes::health::router())
        .nest(BLOG_PREFIX, routes::blog::router(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
