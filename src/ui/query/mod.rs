//! Shared state machine for the listing and search grids.

mod intent;
mod reducer;
mod state;

pub use intent::QueryIntent;
pub use reducer::QueryReducer;
pub use state::{QueryState, QueryStatus};

use crate::catalog::MovieSummary;
use crate::ui::backdrop::BackdropPicker;
use crate::ui::fetch::Completion;

/// Turn a finished list fetch into the intent that applies it.
///
/// The backdrop is drawn here, outside the reducer, so the reducer stays
/// deterministic.
pub(crate) fn completion_intent(
    completion: Completion<Vec<MovieSummary>>,
    picker: &mut dyn BackdropPicker,
) -> QueryIntent {
    let Completion { request, result } = completion;
    match result {
        Ok(results) => {
            let backdrop_index = picker.pick(results.len());
            QueryIntent::FetchSucceeded {
                request,
                results,
                backdrop_index,
            }
        }
        Err(err) => QueryIntent::FetchFailed {
            request,
            message: err.to_string(),
        },
    }
}
