//! BoardGameGeek XML API2 client
//!
//! Async client for the subset of the BGG API the meeple backend consumes:
//! item search and batched thing lookups. Responses are XML; this crate
//! decodes them into typed models that serialize as camelCase JSON.
//!
//! # Examples
//!
//! ```rust,no_run
//! use meeple_bgg_client::{BggApi, BggClient, ThingType};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = BggClient::new()?;
//! let results = client.search("carcassonne", ThingType::Boardgame).await?;
//! let ids: Vec<u64> = results.items.iter().map(|item| item.id).collect();
//! let games = client.things(&ids, ThingType::Boardgame).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod xml;

pub use client::{BggApi, BggClient};
pub use error::{Error, Result};
pub use models::{Link, SearchItem, SearchResults, Thing, ThingName, ThingType};
