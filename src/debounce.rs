//! Trailing-edge debouncing for typed input.
//!
//! A `Debouncer` owns at most one pending timer. Each new input cancels the
//! previous timer and arms a fresh one; only the value present when a timer
//! expires is delivered. Dropping the debouncer cancels any pending timer.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

pub const DEFAULT_QUIET_INTERVAL: Duration = Duration::from_millis(500);

type FireFn<T> = Arc<dyn Fn(T) + Send + Sync>;

pub struct Debouncer<T> {
    quiet: Duration,
    fire: FireFn<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer that calls `fire` once input has been quiet for `quiet`.
    ///
    /// `on_input` must be called from within a Tokio runtime.
    pub fn new<F>(quiet: Duration, fire: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            quiet,
            fire: Arc::new(fire),
            pending: None,
        }
    }

    pub fn quiet_interval(&self) -> Duration {
        self.quiet
    }

    /// Restart the quiet period with `value` as the candidate to deliver.
    pub fn on_input(&mut self, value: T) {
        self.cancel();

        let fire = Arc::clone(&self.fire);
        let quiet = self.quiet;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            fire(value);
        }));
    }

    /// Drop the pending value, if any, without delivering it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// True while a timer is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
