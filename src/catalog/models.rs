use serde::{Deserialize, Serialize};

pub type MovieId = u64;

/// A movie card as returned by list endpoints (trending, search).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
}

/// Named reference used for genres and production companies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: u64,
    pub name: String,
}

/// Full record returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub summary: MovieSummary,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(rename = "runtime", default)]
    pub runtime_minutes: Option<u32>,
    #[serde(default)]
    pub genres: Vec<NamedRef>,
    #[serde(default)]
    pub production_companies: Vec<NamedRef>,
}

impl MovieDetail {
    pub fn id(&self) -> MovieId {
        self.summary.id
    }

    pub fn title(&self) -> &str {
        &self.summary.title
    }
}

/// Paged envelope wrapping list responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ResultsPage {
    pub results: Vec<MovieSummary>,
}
