//! API response models

use meeple_bgg_client::Thing;
use serde::{Deserialize, Serialize};

/// Response body for `GET /api/game/search`.
///
/// `games` carries the upstream detail records exactly as the BGG client
/// returned them, in the order the search ranked them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub query: String,
    pub games: Vec<Thing>,
}

/// A board game, flattened for `GET /api/game/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_published: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_players: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_players: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playing_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub categories: Vec<String>,
    pub mechanics: Vec<String>,
}

impl Game {
    /// Flatten a BGG thing record into a `Game`.
    ///
    /// Returns `None` when the record is not a board game or carries no
    /// usable name.
    pub fn from_thing(thing: &Thing) -> Option<Self> {
        if thing.kind != "boardgame" {
            return None;
        }

        let name = thing.primary_name()?.to_string();

        Some(Self {
            id: thing.id,
            name,
            year_published: thing.year_published,
            min_players: thing.min_players,
            max_players: thing.max_players,
            playing_time: thing.playing_time,
            min_age: thing.min_age,
            thumbnail: thing.thumbnail.clone(),
            image: thing.image.clone(),
            description: thing.description.clone(),
            categories: thing.link_values("boardgamecategory"),
            mechanics: thing.link_values("boardgamemechanic"),
        })
    }
}
