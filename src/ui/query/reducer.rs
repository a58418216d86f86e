use crate::ui::mvi::Reducer;

use super::intent::QueryIntent;
use super::state::{QueryState, QueryStatus};

pub struct QueryReducer;

impl Reducer for QueryReducer {
    type State = QueryState;
    type Intent = QueryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QueryIntent::QueryChanged { query } => QueryState { query, ..state },

            QueryIntent::FetchStarted { request, query } => {
                if request < state.latest_request {
                    return state;
                }
                QueryState {
                    query,
                    status: QueryStatus::Loading,
                    error_message: None,
                    latest_request: request,
                    ..state
                }
            }

            QueryIntent::FetchSucceeded {
                request,
                results,
                backdrop_index,
            } => {
                if request != state.latest_request {
                    return state;
                }
                let backdrop = backdrop_index.and_then(|i| results.get(i)).cloned();
                QueryState {
                    results,
                    page: 1,
                    status: QueryStatus::Ready,
                    error_message: None,
                    backdrop,
                    ..state
                }
            }

            QueryIntent::FetchFailed { request, message } => {
                if request != state.latest_request {
                    return state;
                }
                QueryState {
                    results: Vec::new(),
                    page: 1,
                    status: QueryStatus::Failed,
                    error_message: Some(message),
                    backdrop: None,
                    ..state
                }
            }

            QueryIntent::SelectPage { page } => turn_page(state, |_| page),
            QueryIntent::NextPage => turn_page(state, |current| current.saturating_add(1)),
            QueryIntent::PreviousPage => turn_page(state, |current| current.saturating_sub(1)),
        }
    }
}

/// Page changes only apply to a ready grid and never leave the valid range.
fn turn_page(state: QueryState, target: impl FnOnce(usize) -> usize) -> QueryState {
    if state.status != QueryStatus::Ready {
        return state;
    }
    let page = state
        .pagination
        .clamp_page(state.results.len(), target(state.page));
    QueryState { page, ..state }
}
