//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use async_trait::async_trait;
use moviedeck::catalog::{CatalogApi, CatalogError, MovieDetail, MovieId, MovieSummary, NamedRef};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Create a temporary config file pointing the catalog at `base_url`.
pub fn temp_config(base_url: &str, api_key: Option<&str>) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");

    let mut content = format!(
        r#"[catalog]
base_url = "{}"
auth_type = "api_key"
api_key_env = "MOVIEDECK_TEST_UNSET_KEY"
timeout_seconds = 5
connect_timeout_seconds = 2
"#,
        base_url
    );
    if let Some(key) = api_key {
        content.push_str(&format!("api_key = \"{}\"\n", key));
    }
    content.push_str(
        r#"
[ui]
page_size = 4
debounce_ms = 50
"#,
    );

    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Write raw TOML to a temporary config file.
pub fn raw_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn movie(id: MovieId, title: &str) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        poster_path: Some(format!("/poster{}.jpg", id)),
        backdrop_path: Some(format!("/backdrop{}.jpg", id)),
        vote_average: 7.0,
    }
}

pub fn movies(count: u64) -> Vec<MovieSummary> {
    (1..=count).map(|id| movie(id, &format!("Movie {}", id))).collect()
}

pub fn detail(id: MovieId, title: &str) -> MovieDetail {
    MovieDetail {
        summary: movie(id, title),
        overview: Some(format!("About {}", title)),
        release_date: Some("1999-03-30".to_string()),
        runtime_minutes: Some(136),
        genres: vec![
            NamedRef {
                id: 28,
                name: "Action".to_string(),
            },
            NamedRef {
                id: 878,
                name: "Science Fiction".to_string(),
            },
        ],
        production_companies: vec![NamedRef {
            id: 79,
            name: "Village Roadshow Pictures".to_string(),
        }],
    }
}

/// In-process catalog with scripted latency and failures.
///
/// Search results are derived from the term so tests can tell which
/// response was applied. Every call is recorded, blank searches included.
#[derive(Default)]
pub struct ScriptedCatalog {
    calls: Mutex<Vec<String>>,
    trending: Mutex<Vec<MovieSummary>>,
    details: Mutex<HashMap<MovieId, MovieDetail>>,
    delays: Mutex<HashMap<String, Duration>>,
    failures: Mutex<HashMap<String, String>>,
}

impl ScriptedCatalog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_trending(movies: Vec<MovieSummary>) -> Arc<Self> {
        let catalog = Self::default();
        *catalog.trending.lock() = movies;
        Arc::new(catalog)
    }

    pub fn add_detail(&self, detail: MovieDetail) {
        self.details.lock().insert(detail.id(), detail);
    }

    /// Delay responses for `key` (a search term, "trending" or "movie/{id}").
    pub fn delay(&self, key: &str, delay: Duration) {
        self.delays.lock().insert(key.to_string(), delay);
    }

    /// Fail calls for `key` with a remote failure carrying `message`.
    pub fn fail(&self, key: &str, message: &str) {
        self.failures
            .lock()
            .insert(key.to_string(), message.to_string());
    }

    /// Calls made so far, as "trending", "search:{term}" or "movie:{id}".
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| c.strip_prefix("search:").map(str::to_string))
            .collect()
    }

    /// Results a search for `term` resolves to.
    pub fn results_for(term: &str) -> Vec<MovieSummary> {
        let base = term.len() as u64 * 100;
        (1..=3)
            .map(|n| movie(base + n, &format!("{} {}", term, n)))
            .collect()
    }

    async fn respond(&self, key: &str) -> Result<(), CatalogError> {
        let delay = self.delays.lock().get(key).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let failure = self.failures.lock().get(key).cloned();
        match failure {
            Some(message) => Err(CatalogError::RemoteFailure {
                message,
                status: Some(500),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogApi for ScriptedCatalog {
    async fn trending(&self) -> Result<Vec<MovieSummary>, CatalogError> {
        self.calls.lock().push("trending".to_string());
        self.respond("trending").await?;
        Ok(self.trending.lock().clone())
    }

    async fn search(&self, term: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        self.calls.lock().push(format!("search:{}", term));
        self.respond(term).await?;
        Ok(Self::results_for(term))
    }

    async fn movie(&self, id: MovieId) -> Result<MovieDetail, CatalogError> {
        self.calls.lock().push(format!("movie:{}", id));
        self.respond(&format!("movie/{}", id)).await?;
        self.details
            .lock()
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound { id })
    }
}
