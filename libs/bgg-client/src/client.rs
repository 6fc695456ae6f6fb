//! BGG XML API2 client

use crate::error::{Error, Result};
use crate::models::{SearchResults, Thing, ThingType};
use crate::xml;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const BGG_BASE_URL: &str = "https://boardgamegeek.com/xmlapi2";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Operations the backend consumes from the BGG API.
///
/// The server talks to BGG through this trait so tests can substitute a
/// recording fake for the real HTTP client.
#[async_trait]
pub trait BggApi: Send + Sync {
    /// Search for items whose name matches a query string.
    async fn search(&self, query: &str, thing_type: ThingType) -> Result<SearchResults>;

    /// Fetch full item records in one batched request.
    ///
    /// An empty id list resolves to an empty result without issuing a
    /// request; the API rejects `/thing` calls without ids.
    async fn things(&self, ids: &[u64], thing_type: ThingType) -> Result<Vec<Thing>>;
}

/// Client for the BoardGameGeek XML API2.
pub struct BggClient {
    client: Client,
    base_url: String,
}

impl BggClient {
    /// Create a new client with default settings.
    pub fn new() -> Result<Self> {
        Self::with_base_url(BGG_BASE_URL.to_string())
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Result<Self> {
        Self::with_settings(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom base URL and request timeout.
    pub fn with_settings(base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn search_url(&self, query: &str, thing_type: ThingType) -> String {
        format!(
            "{}/search?query={}&type={}",
            self.base_url,
            urlencoding::encode(query),
            thing_type.as_str()
        )
    }

    fn things_url(&self, ids: &[u64], thing_type: ThingType) -> String {
        let ids = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        format!(
            "{}/thing?id={}&type={}",
            self.base_url,
            ids,
            thing_type.as_str()
        )
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl BggApi for BggClient {
    async fn search(&self, query: &str, thing_type: ThingType) -> Result<SearchResults> {
        let url = self.search_url(query, thing_type);
        tracing::debug!(query, "BGG search");

        let body = self.fetch(&url).await?;
        xml::parse_search(&body)
    }

    async fn things(&self, ids: &[u64], thing_type: ThingType) -> Result<Vec<Thing>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.things_url(ids, thing_type);
        tracing::debug!(count = ids.len(), "BGG thing lookup");

        let body = self.fetch(&url).await?;
        xml::parse_things(&body)
    }
}

impl Default for BggClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default BggClient")
    }
}
