use crate::catalog::{MovieDetail, MovieId};
use crate::ui::fetch::RequestId;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// Detail fetch for `movie_id` issued as `request`.
    Opened { request: RequestId, movie_id: MovieId },
    Loaded { request: RequestId, detail: MovieDetail },
    /// The catalog has no movie with this id.
    Missing { request: RequestId, movie_id: MovieId },
    Failed { request: RequestId, message: String },
}

impl Intent for DetailIntent {}
