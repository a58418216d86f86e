use crate::catalog::MovieSummary;
use crate::pagination::Paginator;
use crate::ui::fetch::RequestId;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Grid state for one mounted view.
///
/// `page` always lies in `[1, max(1, page_count)]`.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    pub query: String,
    pub results: Vec<MovieSummary>,
    pub page: usize,
    pub pagination: Paginator,
    pub status: QueryStatus,
    pub error_message: Option<String>,
    /// Result chosen to decorate the page background.
    pub backdrop: Option<MovieSummary>,
    /// Newest request issued; completions for older requests are dropped.
    pub latest_request: RequestId,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(Paginator::default())
    }
}

impl UiState for QueryState {}

impl QueryState {
    pub fn new(pagination: Paginator) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            page: 1,
            pagination,
            status: QueryStatus::Idle,
            error_message: None,
            backdrop: None,
            latest_request: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.results.len())
    }

    /// Cards on the current page.
    pub fn visible(&self) -> &[MovieSummary] {
        self.pagination.slice(&self.results, self.page)
    }

    /// Spotlight card, when the head is excluded from the grid.
    pub fn spotlight(&self) -> Option<&MovieSummary> {
        self.pagination.spotlight(&self.results)
    }
}
