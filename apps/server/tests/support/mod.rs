#![allow(dead_code)]

use anyhow::Context as _;
use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, HeaderName, HeaderValue, Method, Request, StatusCode},
    Router,
};
use meeple::{api::create_router, state::AppState, Config};
use meeple_bgg_client::{BggApi, SearchItem, SearchResults, Thing, ThingName, ThingType};
use std::sync::{Arc, Mutex};
use tower::ServiceExt as _;

/// One recorded call against the BGG API fake.
#[derive(Debug, Clone, PartialEq)]
pub enum BggCall {
    Search { query: String, thing_type: String },
    Things { ids: Vec<u64>, thing_type: String },
}

/// Recording fake for the BGG API.
///
/// Returns canned responses and keeps an ordered log of every call, so
/// tests can assert exactly what went upstream.
pub struct MockBgg {
    search_results: Vec<SearchItem>,
    things: Vec<Thing>,
    fail_search: bool,
    fail_things: bool,
    calls: Mutex<Vec<BggCall>>,
}

impl MockBgg {
    pub fn new() -> Self {
        Self {
            search_results: Vec::new(),
            things: Vec::new(),
            fail_search: false,
            fail_things: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_search_results(mut self, items: Vec<SearchItem>) -> Self {
        self.search_results = items;
        self
    }

    pub fn with_things(mut self, things: Vec<Thing>) -> Self {
        self.things = things;
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    pub fn failing_things(mut self) -> Self {
        self.fail_things = true;
        self
    }

    pub fn calls(&self) -> Vec<BggCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BggApi for MockBgg {
    async fn search(
        &self,
        query: &str,
        thing_type: ThingType,
    ) -> meeple_bgg_client::Result<SearchResults> {
        self.calls.lock().unwrap().push(BggCall::Search {
            query: query.to_string(),
            thing_type: thing_type.as_str().to_string(),
        });

        if self.fail_search {
            return Err(meeple_bgg_client::Error::Api("search unavailable".to_string()));
        }

        Ok(SearchResults {
            total: self.search_results.len() as u64,
            items: self.search_results.clone(),
        })
    }

    async fn things(
        &self,
        ids: &[u64],
        thing_type: ThingType,
    ) -> meeple_bgg_client::Result<Vec<Thing>> {
        self.calls.lock().unwrap().push(BggCall::Things {
            ids: ids.to_vec(),
            thing_type: thing_type.as_str().to_string(),
        });

        if self.fail_things {
            return Err(meeple_bgg_client::Error::Api("things unavailable".to_string()));
        }

        Ok(self.things.clone())
    }
}

pub struct TestApp {
    pub router: Router,
    pub bgg: Arc<MockBgg>,
}

impl TestApp {
    pub fn new(bgg: MockBgg) -> Self {
        Self::with_config(|_| {}, bgg)
    }

    pub fn with_config(configure: impl FnOnce(&mut Config), bgg: MockBgg) -> Self {
        let mut config = Config::default();
        configure(&mut config);

        let bgg = Arc::new(bgg);
        let state = AppState::with_client(config, bgg.clone());
        let router = create_router(state);

        Self { router, bgg }
    }

    pub async fn request(
        &self,
        method: Method,
        path_and_query: &str,
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        self.request_with_extra_headers(method, path_and_query, &[])
            .await
    }

    pub async fn request_with_extra_headers(
        &self,
        method: Method,
        path_and_query: &str,
        extra_headers: &[(&str, &str)],
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        let mut request = Request::builder()
            .method(method)
            .uri(path_and_query)
            .header("host", "example.org")
            .header("accept", "application/json")
            .body(Body::empty())
            .context("build request")?;

        for (name, value) in extra_headers {
            request.headers_mut().insert(
                name.parse::<HeaderName>().context("parse header name")?,
                value.parse::<HeaderValue>().context("parse header value")?,
            );
        }

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("dispatch request")?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .context("read response body")?;

        Ok((status, headers, body))
    }
}

/// Search result fixture.
pub fn search_item(id: u64, name: &str) -> SearchItem {
    SearchItem {
        id,
        kind: "boardgame".to_string(),
        name: name.to_string(),
        year_published: None,
    }
}

/// Minimal board game detail fixture.
pub fn thing(id: u64, name: &str) -> Thing {
    Thing {
        id,
        kind: "boardgame".to_string(),
        thumbnail: None,
        image: None,
        names: vec![ThingName {
            kind: "primary".to_string(),
            value: name.to_string(),
        }],
        description: None,
        year_published: None,
        min_players: None,
        max_players: None,
        playing_time: None,
        min_play_time: None,
        max_play_time: None,
        min_age: None,
        links: Vec::new(),
    }
}
