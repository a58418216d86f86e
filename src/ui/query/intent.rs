use crate::catalog::MovieSummary;
use crate::ui::fetch::RequestId;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum QueryIntent {
    /// Text typed into the search box. Does not fetch by itself.
    QueryChanged { query: String },
    /// A fetch for `query` was issued as `request`.
    FetchStarted { request: RequestId, query: String },
    /// Results for `request`. `backdrop_index` was chosen by the controller.
    FetchSucceeded {
        request: RequestId,
        results: Vec<MovieSummary>,
        backdrop_index: Option<usize>,
    },
    /// `request` failed with a user-visible message.
    FetchFailed { request: RequestId, message: String },
    /// Page button clicked (1-based). Out-of-range pages are clamped.
    SelectPage { page: usize },
    NextPage,
    PreviousPage,
}

impl Intent for QueryIntent {}
