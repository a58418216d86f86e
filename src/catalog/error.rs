//! Error types for catalog access.

use thiserror::Error;

use super::models::MovieId;

/// Errors returned by the remote catalog.
///
/// An empty search term is not an error: it resolves to an empty result set.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure, non-2xx status, or a payload that did not parse.
    /// The message is shown to the user as-is.
    #[error("{message}")]
    RemoteFailure {
        message: String,
        status: Option<u16>,
    },

    /// Detail lookup for an id the catalog does not know.
    #[error("Movie {id} not found")]
    NotFound { id: MovieId },

    /// No usable credential for the catalog.
    #[error("Catalog not configured: {reason}")]
    NotConfigured { reason: String },

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

impl CatalogError {
    pub(crate) fn remote(message: impl Into<String>, status: Option<u16>) -> Self {
        CatalogError::RemoteFailure {
            message: message.into(),
            status,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}
