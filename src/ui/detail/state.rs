use crate::catalog::{MovieDetail, MovieId};
use crate::ui::fetch::RequestId;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailPhase {
    #[default]
    Idle,
    Loading {
        movie_id: MovieId,
    },
    Ready {
        detail: Box<MovieDetail>,
    },
    /// Shown as a "not found" page rather than an error.
    NotFound {
        movie_id: MovieId,
    },
    Failed {
        movie_id: MovieId,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    pub phase: DetailPhase,
    pub latest_request: RequestId,
}

impl UiState for DetailState {}

impl DetailState {
    pub fn detail(&self) -> Option<&MovieDetail> {
        match &self.phase {
            DetailPhase::Ready { detail } => Some(detail),
            _ => None,
        }
    }

    /// Movie the view is currently about, whatever its phase.
    pub fn movie_id(&self) -> Option<MovieId> {
        match &self.phase {
            DetailPhase::Idle => None,
            DetailPhase::Loading { movie_id }
            | DetailPhase::NotFound { movie_id }
            | DetailPhase::Failed { movie_id, .. } => Some(*movie_id),
            DetailPhase::Ready { detail } => Some(detail.id()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, DetailPhase::Loading { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            DetailPhase::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}
