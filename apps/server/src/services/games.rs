//! Game search and lookup backed by the BGG API
//!
//! Search results are never cached: rankings shift and queries vary too
//! much for a small in-process cache to help. Individual game records are
//! near-immutable, so lookups go through an LRU cache with a TTL.

use crate::error::{Error, Result};
use crate::models::{Game, SearchResponse};
use lru::LruCache;
use meeple_bgg_client::{BggApi, Thing, ThingType};
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

struct CachedThing {
    fetched_at: Instant,
    thing: Arc<Thing>,
}

/// Service for querying board games on BGG.
pub struct GameService {
    bgg: Arc<dyn BggApi>,
    cache: Mutex<LruCache<u64, CachedThing>>,
    cache_ttl: Duration,
}

impl GameService {
    pub fn new(bgg: Arc<dyn BggApi>, cache_size: NonZeroUsize, cache_ttl: Duration) -> Self {
        Self {
            bgg,
            cache: Mutex::new(LruCache::new(cache_size)),
            cache_ttl,
        }
    }

    /// Search for board games and return full detail records.
    ///
    /// Issues one search request, then one batched detail request for every
    /// hit. The detail records come back in the order the search ranked
    /// them, and are passed through unmodified.
    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        let results = self.bgg.search(query, ThingType::Boardgame).await?;

        let ids: Vec<u64> = results.items.iter().map(|item| item.id).collect();
        let games = self.bgg.things(&ids, ThingType::Boardgame).await?;

        Ok(SearchResponse {
            query: query.to_string(),
            games,
        })
    }

    /// Look up a single board game by its BGG id.
    pub async fn game(&self, id: u64) -> Result<Game> {
        if let Some(thing) = self.cached(id) {
            return Self::to_game(id, &thing);
        }

        let things = self.bgg.things(&[id], ThingType::Boardgame).await?;
        let thing = things
            .into_iter()
            .find(|thing| thing.id == id)
            .ok_or(Error::GameNotFound(id))?;

        let thing = Arc::new(thing);
        {
            let mut cache = self.cache.lock().unwrap();
            cache.put(
                id,
                CachedThing {
                    fetched_at: Instant::now(),
                    thing: Arc::clone(&thing),
                },
            );
        }

        Self::to_game(id, &thing)
    }

    /// Fresh cache entry for `id`, if any. Expired entries are evicted.
    fn cached(&self, id: u64) -> Option<Arc<Thing>> {
        let mut cache = self.cache.lock().unwrap();

        let expired = match cache.get(&id) {
            Some(entry) => {
                if entry.fetched_at.elapsed() < self.cache_ttl {
                    tracing::debug!(id, "game cache hit");
                    return Some(Arc::clone(&entry.thing));
                }
                true
            }
            None => false,
        };

        if expired {
            cache.pop(&id);
        }

        None
    }

    fn to_game(id: u64, thing: &Thing) -> Result<Game> {
        Game::from_thing(thing).ok_or(Error::GameNotFound(id))
    }
}
