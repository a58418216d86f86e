//! Remote movie catalog: typed models, errors and the async query surface.

mod client;
mod error;
mod models;

use async_trait::async_trait;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use models::{MovieDetail, MovieId, MovieSummary, NamedRef};

/// Read-only queries against the movie catalog.
///
/// Implementations perform at most one request per call and never retry.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Movies trending over the configured window.
    async fn trending(&self) -> Result<Vec<MovieSummary>, CatalogError>;

    /// Free-text title search. Blank terms resolve to an empty list
    /// without touching the network.
    async fn search(&self, term: &str) -> Result<Vec<MovieSummary>, CatalogError>;

    /// Full record for one movie. Unknown ids yield `CatalogError::NotFound`.
    async fn movie(&self, id: MovieId) -> Result<MovieDetail, CatalogError>;
}

/// True for empty or whitespace-only search input.
pub fn is_blank_query(term: &str) -> bool {
    term.trim().is_empty()
}
