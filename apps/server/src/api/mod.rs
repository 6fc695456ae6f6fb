//! API layer - routes, handlers, and middleware

pub mod handlers;
pub mod middleware;
pub mod routes;

use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::json;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    // Get request body size limit from config
    let max_body_size = state.config.server.max_request_body_size;
    let cors_origins = state.config.server.cors_origins.clone();

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Root endpoint
        .route("/", get(root))
        // Favicon handler (returns 204 to prevent 404 logs)
        .route("/favicon.ico", get(favicon))
        // Game API routes
        .nest("/api", routes::api_routes())
        // Add state
        .with_state(state)
        // Add middleware (applied in reverse order)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(middleware::compression())
        .layer(middleware::cors(&cors_origins))
        .layer(middleware::trace())
        // Limit request body size to prevent DoS via large payloads
        .layer(DefaultBodyLimit::max(max_body_size))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "meeple"
    }))
}

async fn root() -> impl IntoResponse {
    // Informational endpoint for humans poking at the server root.
    (
        StatusCode::OK,
        Json(json!({
            "server": "Meeple",
            "version": env!("CARGO_PKG_VERSION"),
            "status": "running"
        })),
    )
}

async fn favicon() -> impl IntoResponse {
    // Return 204 No Content to indicate no favicon is available
    // This prevents 404 errors from cluttering logs
    StatusCode::NO_CONTENT
}
