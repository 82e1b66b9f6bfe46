//! Quill blog API server entry point.

use std::error::Error;
use std::sync::Arc;

use quill_api::auth::TokenVerifier;
use quill_api::config::AppConfig;
use quill_api::state::AppState;
use quill_api::telemetry;
use quill_store::pg_blog_repository::PgBlogRepository;
use quill_store::schema::MIGRATOR;
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env file is fine; real deployments set the environment.
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let telemetry = telemetry::init(&config.telemetry)?;

    tracing::info!("Starting Quill blog API server");

    // Create database connection pool.
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    MIGRATOR.run(&pool).await?;
    tracing::info!("Database migrations applied");

    // Build application state.
    let app_state = AppState::new(
        Arc::new(PgBlogRepository::new(pool)),
        Arc::new(TokenVerifier::new(&config.jwt_secret)),
    );

    let app = quill_api::app(app_state);

    // Start server.
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;
    if let Err(e) = &served {
        tracing::error!(error = %e, "server exited with error");
    }

    tracing::info!("Server stopped");
    // Flush spans before surfacing a serve failure.
    telemetry.shutdown();

    served.map_err(Into::into)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
