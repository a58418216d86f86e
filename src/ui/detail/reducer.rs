use crate::ui::fetch::RequestId;
use crate::ui::mvi::Reducer;

use super::intent::DetailIntent;
use super::state::{DetailPhase, DetailState};

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Opened { request, movie_id } => {
                if request < state.latest_request {
                    return state;
                }
                DetailState {
                    phase: DetailPhase::Loading { movie_id },
                    latest_request: request,
                }
            }
            DetailIntent::Loaded { request, detail } => settle(state, request, || {
                DetailPhase::Ready {
                    detail: Box::new(detail),
                }
            }),
            DetailIntent::Missing { request, movie_id } => {
                settle(state, request, || DetailPhase::NotFound { movie_id })
            }
            DetailIntent::Failed { request, message } => {
                let movie_id = state.movie_id().unwrap_or_default();
                settle(state, request, || DetailPhase::Failed { movie_id, message })
            }
        }
    }
}

/// Apply a completion only if it answers the latest request.
fn settle(state: DetailState, request: RequestId, phase: impl FnOnce() -> DetailPhase) -> DetailState {
    if request != state.latest_request {
        return state;
    }
    DetailState {
        phase: phase(),
        ..state
    }
}
