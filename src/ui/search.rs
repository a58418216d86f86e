//! Search view: debounced input, out-of-order safe result handling.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::catalog::{is_blank_query, CatalogApi, MovieSummary};
use crate::debounce::Debouncer;
use crate::pagination::Paginator;
use crate::ui::backdrop::{BackdropPicker, RandomPicker};
use crate::ui::fetch::{Completion, Fetcher, RequestId};
use crate::ui::mvi::Reducer;
use crate::ui::query::{completion_intent, QueryIntent, QueryReducer, QueryState};
use crate::ui::theme::Theme;
use crate::ui::view::GridView;

/// Events a frontend can feed into the search view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Raw text from the search box; debounced before searching.
    Input(String),
    /// Quiet interval elapsed for this term. Events from an older
    /// `generation` are dropped.
    Debounced { term: String, generation: u64 },
    /// The input source is gone. Pending work still completes; further
    /// input is ignored.
    Closed,
}

/// Owns the search grid for one mounted search view.
///
/// At most one debounce timer is armed at a time. Only the completion of the
/// most recently issued search is applied; older responses are dropped.
/// Dropping the controller cancels the timer and aborts in-flight fetches.
pub struct SearchController<C: CatalogApi + ?Sized> {
    catalog: Arc<C>,
    state: QueryState,
    fetcher: Fetcher<Vec<MovieSummary>>,
    debouncer: Debouncer<(u64, String)>,
    generation: u64,
    events_tx: mpsc::UnboundedSender<SearchEvent>,
    events_rx: mpsc::UnboundedReceiver<SearchEvent>,
    picker: Box<dyn BackdropPicker>,
    input_closed: bool,
    disposed: bool,
}

impl<C: CatalogApi + ?Sized + 'static> SearchController<C> {
    pub fn new(catalog: Arc<C>, pagination: Paginator, quiet: Duration) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let fire_tx = events_tx.clone();
        let debouncer = Debouncer::new(quiet, move |(generation, term): (u64, String)| {
            let _ = fire_tx.send(SearchEvent::Debounced { term, generation });
        });

        Self {
            catalog,
            state: QueryState::new(pagination),
            fetcher: Fetcher::new(),
            debouncer,
            generation: 0,
            events_tx,
            events_rx,
            picker: Box::new(RandomPicker),
            input_closed: false,
            disposed: false,
        }
    }

    pub fn with_picker(mut self, picker: impl BackdropPicker + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }

    /// Sender for frontends that deliver input from another task.
    pub fn input_sender(&self) -> mpsc::UnboundedSender<SearchEvent> {
        self.events_tx.clone()
    }

    /// Record typed text and restart the quiet interval.
    pub fn on_input(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.dispatch(QueryIntent::QueryChanged {
            query: term.clone(),
        });
        self.generation += 1;
        self.debouncer.on_input((self.generation, term));
    }

    /// Search immediately, superseding any pending input and older fetches.
    ///
    /// A debounced term that already fired but is still queued is dropped
    /// too. Blank terms resolve to an empty grid without a catalog call.
    pub fn search_now(&mut self, term: impl Into<String>) -> RequestId {
        self.debouncer.cancel();
        self.generation += 1;
        self.issue_search(term.into())
    }

    // A timer that fired before newer input was typed must not cancel the
    // timer armed for that input, so debounced searches come through here.
    fn issue_search(&mut self, term: String) -> RequestId {
        if is_blank_query(&term) {
            let request = self.fetcher.reserve();
            self.dispatch(QueryIntent::FetchStarted {
                request,
                query: term,
            });
            self.dispatch(QueryIntent::FetchSucceeded {
                request,
                results: Vec::new(),
                backdrop_index: None,
            });
            return request;
        }

        let catalog = Arc::clone(&self.catalog);
        let query = term.clone();
        let request = self
            .fetcher
            .issue(async move { catalog.search(&query).await });
        tracing::debug!(request, term = %term, "Searching catalog");
        self.dispatch(QueryIntent::FetchStarted {
            request,
            query: term,
        });
        request
    }

    /// True when no timer is armed, no fetch is running and no event is queued.
    pub fn is_idle(&self) -> bool {
        !self.debouncer.is_pending() && self.fetcher.is_idle() && self.events_rx.is_empty()
    }

    /// Wait for and handle the next event or fetch completion.
    ///
    /// Returns `false` once disposed, or once input has closed and all
    /// pending work is done.
    pub async fn step(&mut self) -> bool {
        if self.disposed || (self.input_closed && self.is_idle()) {
            return false;
        }

        let event = tokio::select! {
            Some(event) = self.events_rx.recv() => event,
            Some(completion) = self.fetcher.next_completion(), if !self.fetcher.is_idle() => {
                self.apply(completion);
                return true;
            }
            else => return false,
        };

        match event {
            SearchEvent::Input(term) if !self.input_closed => self.on_input(term),
            SearchEvent::Input(_) => {}
            SearchEvent::Debounced { term, generation } if generation == self.generation => {
                self.issue_search(term);
            }
            SearchEvent::Debounced { term, generation } => {
                tracing::debug!(
                    generation,
                    latest = self.generation,
                    term = %term,
                    "Dropping superseded input"
                );
            }
            SearchEvent::Closed => self.input_closed = true,
        }
        true
    }

    /// Handle events until the view is idle.
    pub async fn settle(&mut self) {
        while !self.is_idle() {
            if !self.step().await {
                break;
            }
        }
    }

    /// Tear the view down: cancel the timer and abort in-flight searches.
    pub fn dispose(&mut self) {
        self.debouncer.cancel();
        self.generation += 1;
        self.fetcher.cancel_all();
        self.disposed = true;
    }

    fn apply(&mut self, completion: Completion<Vec<MovieSummary>>) {
        if completion.request != self.state.latest_request {
            tracing::debug!(
                request = completion.request,
                latest = self.state.latest_request,
                "Dropping stale search response"
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

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// The search page always renders dark.
    pub fn view(&self) -> GridView {
        GridView::from_state(&self.state, Theme::Dark)
    }

    fn dispatch(&mut self, intent: QueryIntent) {
        dispatch_mvi!(self, state, QueryReducer, intent);
    }
}
