//! Trending listing view.

use std::sync::Arc;

use crate::catalog::{CatalogApi, MovieSummary};
use crate::pagination::Paginator;
use crate::ui::backdrop::{BackdropPicker, RandomPicker};
use crate::ui::fetch::{Completion, Fetcher, RequestId};
use crate::ui::mvi::Reducer;
use crate::ui::query::{completion_intent, QueryIntent, QueryReducer, QueryState};
use crate::ui::theme::Theme;
use crate::ui::view::GridView;

/// Owns the trending grid for one mounted listing view.
///
/// Dropping or disposing the controller aborts any fetch still in flight.
pub struct ListingController<C: CatalogApi + ?Sized> {
    catalog: Arc<C>,
    state: QueryState,
    fetcher: Fetcher<Vec<MovieSummary>>,
    picker: Box<dyn BackdropPicker>,
    theme: Theme,
    disposed: bool,
}

impl<C: CatalogApi + ?Sized + 'static> ListingController<C> {
    pub fn new(catalog: Arc<C>, pagination: Paginator) -> Self {
        Self {
            catalog,
            state: QueryState::new(pagination),
            fetcher: Fetcher::new(),
            picker: Box::new(RandomPicker),
            theme: Theme::default(),
            disposed: false,
        }
    }

    pub fn with_picker(mut self, picker: impl BackdropPicker + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Start loading the trending list. Calling again reloads it.
    pub fn mount(&mut self) -> RequestId {
        let catalog = Arc::clone(&self.catalog);
        let request = self
            .fetcher
            .issue(async move { catalog.trending().await });
        tracing::debug!(request, "Loading trending movies");
        self.dispatch(QueryIntent::FetchStarted {
            request,
            query: String::new(),
        });
        request
    }

    /// Apply the next fetch completion. Returns `false` when nothing is in
    /// flight or the view was disposed.
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

    /// Apply completions until nothing is in flight.
    pub async fn settle(&mut self) {
        while self.step().await {}
    }

    /// Tear the view down: abort the trending fetch if it is still running.
    pub fn dispose(&mut self) {
        self.fetcher.cancel_all();
        self.disposed = true;
    }

    fn apply(&mut self, completion: Completion<Vec<MovieSummary>>) {
        if completion.request != self.state.latest_request {
            tracing::debug!(
                request = completion.request,
                latest = self.state.latest_request,
                "Dropping stale trending response"
            );
        }
        let intent = completion_intent(completion, self.picker.as_mut());
        self.dispatch(intent);
    }

    pub fn select_page(&mut self, page: usize) {
        self.dispatch(QueryIntent::SelectPage { page });
    }

    pub fn next_page(&mut self) {
        self.dispatch(QueryIntent::NextPage);
    }

    pub fn previous_page(&mut self) {
        self.dispatch(QueryIntent::PreviousPage);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn view(&self) -> GridView {
        GridView::from_state(&self.state, self.theme)
    }

    fn dispatch(&mut self, intent: QueryIntent) {
        dispatch_mvi!(self, state, QueryReducer, intent);
    }
}
