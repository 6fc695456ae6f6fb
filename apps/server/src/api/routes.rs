//! API route definitions

use crate::api::handlers::games;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Routes mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Exact routes first (more specific)
        .route("/game/search", get(games::search_games))
        .route("/game/:id", get(games::get_game))
}
