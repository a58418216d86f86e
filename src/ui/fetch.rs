//! Request lifecycle for view controllers.
//!
//! Every fetch runs as a task owned by the controller's `Fetcher` and is
//! tagged with a request number. Numbers increase monotonically per
//! fetcher; reducers apply a completion only when its number is the latest
//! one issued. Dropping the fetcher aborts whatever is still in flight.

use std::future::Future;

use tokio::task::JoinSet;

use crate::catalog::CatalogError;

pub type RequestId = u64;

/// Outcome of one fetch, tagged with the request it answers.
#[derive(Debug)]
pub struct Completion<T> {
    pub request: RequestId,
    pub result: Result<T, CatalogError>,
}

pub struct Fetcher<T> {
    last_issued: RequestId,
    in_flight: JoinSet<Completion<T>>,
}

impl<T: Send + 'static> Fetcher<T> {
    pub fn new() -> Self {
        Self {
            last_issued: 0,
            in_flight: JoinSet::new(),
        }
    }

    /// Reserve the next request number without spawning anything.
    ///
    /// Used for requests that resolve locally, so they still supersede
    /// older network fetches.
    pub fn reserve(&mut self) -> RequestId {
        self.last_issued += 1;
        self.last_issued
    }

    /// Spawn `fetch` and return the request number it was tagged with.
    pub fn issue<F>(&mut self, fetch: F) -> RequestId
    where
        F: Future<Output = Result<T, CatalogError>> + Send + 'static,
    {
        let request = self.reserve();
        self.in_flight.spawn(async move {
            Completion {
                request,
                result: fetch.await,
            }
        });
        tracing::debug!(request, in_flight = self.in_flight.len(), "Fetch issued");
        request
    }

    pub fn last_issued(&self) -> RequestId {
        self.last_issued
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_idle(&self) -> bool {
        self.in_flight.is_empty()
    }

    /// Wait for the next fetch to finish, in completion order.
    ///
    /// Returns `None` once nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<Completion<T>> {
        while let Some(joined) = self.in_flight.join_next().await {
            match joined {
                Ok(completion) => return Some(completion),
                Err(err) if err.is_cancelled() => continue,
                Err(err) => {
                    tracing::error!(error = %err, "Fetch task panicked");
                }
            }
        }
        None
    }

    /// Abort every in-flight fetch. Their results are never delivered.
    pub fn cancel_all(&mut self) {
        if !self.in_flight.is_empty() {
            tracing::debug!(aborted = self.in_flight.len(), "Cancelling in-flight fetches");
        }
        self.in_flight.abort_all();
    }
}

impl<T: Send + 'static> Default for Fetcher<T> {
    fn default() -> Self {
        Self::new()
    }
}
