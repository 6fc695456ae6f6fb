//! Game handlers

use crate::error::{Error, Result};
use crate::models::{Game, SearchResponse};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use std::collections::HashMap;

/// GET /api/game/search?q=...
///
/// Rejects a missing or empty `q` before any upstream call is made.
pub async fn search_games(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<SearchResponse>> {
    let query = params
        .get("q")
        .map(String::as_str)
        .filter(|q| !q.is_empty())
        .ok_or(Error::MissingQuery)?;

    let response = state.games.search(query).await?;

    Ok(Json(response))
}

/// GET /api/game/:id
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Game>> {
    let game_id: u64 = id.parse().map_err(|_| Error::InvalidGameId(id.clone()))?;

    let game = state.games.game(game_id).await?;

    Ok(Json(game))
}
