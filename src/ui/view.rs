//! Render-ready projections of view state.

use crate::catalog::MovieSummary;
use crate::ui::query::{QueryState, QueryStatus};
use crate::ui::theme::Theme;

/// Everything needed to draw one card grid page.
#[derive(Debug, Clone, PartialEq)]
pub struct GridView {
    pub query: String,
    pub status: QueryStatus,
    pub error: Option<String>,
    pub spotlight: Option<MovieSummary>,
    pub cards: Vec<MovieSummary>,
    pub backdrop: Option<MovieSummary>,
    pub page: usize,
    pub page_count: usize,
    pub theme: Theme,
}

impl GridView {
    pub fn from_state(state: &QueryState, theme: Theme) -> Self {
        Self {
            query: state.query.clone(),
            status: state.status,
            error: state.error_message.clone(),
            spotlight: state.spotlight().cloned(),
            cards: state.visible().to_vec(),
            backdrop: state.backdrop.clone(),
            page: state.page,
            page_count: state.page_count(),
            theme,
        }
    }

    /// Page buttons are only worth drawing with more than one page.
    pub fn shows_pager(&self) -> bool {
        self.page_count > 1
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty() && self.spotlight.is_none()
    }
}
