//! Shared application state

use crate::config::Config;
use crate::services::GameService;
use anyhow::Context;
use meeple_bgg_client::{BggApi, BggClient};
use std::sync::Arc;
use std::time::Duration;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub games: Arc<GameService>,
}

impl AppState {
    /// Build state with a real BGG client per `config`.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let bgg = BggClient::with_settings(
            config.bgg.base_url.clone(),
            Duration::from_secs(config.bgg.timeout_seconds),
        )
        .context("Failed to build BGG client")?;

        Ok(Self::with_client(config, Arc::new(bgg)))
    }

    /// Build state around an existing BGG client.
    ///
    /// Tests use this to substitute a recording fake for the real client.
    pub fn with_client(config: Config, bgg: Arc<dyn BggApi>) -> Self {
        let games = GameService::new(
            bgg,
            config.bgg.game_cache_size,
            Duration::from_secs(config.bgg.game_cache_ttl_seconds),
        );

        Self {
            config: Arc::new(config),
            games: Arc::new(games),
        }
    }
}
