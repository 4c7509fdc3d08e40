//! Deferred scroll-to-latest requests

use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tracing::debug;

/// Runs scroll actions after a delay, at most one pending at a time.
///
/// Scheduling a new delayed action aborts the previous one, and dropping
/// the scheduler aborts whatever is still pending.
#[derive(Debug, Default)]
pub struct ScrollScheduler {
    pending: Mutex<Option<AbortHandle>>,
}

impl ScrollScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` after `delay`. A zero delay runs it right away and
    /// leaves any pending action alone.
    pub fn schedule<F>(&self, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if delay.is_zero() {
            action();
            return;
        }

        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                debug!("No async runtime; running scroll action immediately");
                action();
                return;
            }
        };

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        let task = handle.spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        });
        *pending = Some(task.abort_handle());
    }

    /// Abort the pending action, if any.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }
}

impl Drop for ScrollScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
