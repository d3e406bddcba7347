//! Input event coalescing.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Coalesces a burst of rapid events into one delayed action.
///
/// Owns at most one pending scheduled task: `trigger` supersedes any pending
/// invocation, so only the latest event in a burst fires, and a superseded
/// task never runs. Discrete events (blur, change) bypass the debouncer
/// entirely.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `action` to run after the delay, cancelling any pending one.
    ///
    /// Must run inside a `tokio::task::LocalSet`: the scheduled task is not
    /// `Send`.
    pub fn trigger<F>(&mut self, action: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    /// Cancel the pending invocation, if any. Total: a cancelled task never
    /// fires.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
