//! Movie detail view.

use std::sync::Arc;

use crate::catalog::{CatalogApi, CatalogError, MovieDetail, MovieId};
use crate::ui::detail::{DetailIntent, DetailReducer, DetailState};
use crate::ui::fetch::{Completion, Fetcher, RequestId};
use crate::ui::mvi::Reducer;

pub struct DetailController<C: CatalogApi + ?Sized> {
    catalog: Arc<C>,
    state: DetailState,
    fetcher: Fetcher<MovieDetail>,
    disposed: bool,
}

impl<C: CatalogApi + ?Sized + 'static> DetailController<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            state: DetailState::default(),
            fetcher: Fetcher::new(),
            disposed: false,
        }
    }

    /// Load `movie_id`. Opening another id before this one finishes
    /// supersedes it.
    pub fn open(&mut self, movie_id: MovieId) -> RequestId {
        let catalog = Arc::clone(&self.catalog);
        let request = self
            .fetcher
            .issue(async move { catalog.movie(movie_id).await });
        tracing::debug!(request, movie_id, "Loading movie detail");
        self.dispatch(DetailIntent::Opened { request, movie_id });
        request
    }

    pub async fn step(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        match self.fetcher.next_completion().await {
            Some(completion) => {
                self.apply(completion);
                true
            }
            None => false,
        }
    }

    pub async fn settle(&mut self) {
        while self.step().await {}
    }

    /// Abort the detail fetch, if any. Later completions are never applied.
    pub fn dispose(&mut self) {
        self.fetcher.cancel_all();
        self.disposed = true;
    }

    fn apply(&mut self, completion: Completion<MovieDetail>) {
        let Completion { request, result } = completion;
        let intent = match result {
            Ok(detail) => DetailIntent::Loaded { request, detail },
            Err(CatalogError::NotFound { id }) => DetailIntent::Missing {
                request,
                movie_id: id,
            },
            Err(err) => DetailIntent::Failed {
                request,
                message: err.to_string(),
            },
        };
        self.dispatch(intent);
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    fn dispatch(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, state, DetailReducer, intent);
    }
}
