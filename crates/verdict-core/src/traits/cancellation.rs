//! Cooperative cancellation token.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::results::JobEndStatus;

/// Cooperative cancellation for long-running validation runs.
pub trait Cancellable {
    /// Check if cancellation has been requested.
    fn is_cancelled(&self) -> bool;

    /// Request cancellation with the given end status.
    fn cancel(&self, status: JobEndStatus);
}

/// Default cancellation token: an `AtomicBool` plus the job-end status to
/// report. Clones share state; safe to trip from any thread.
#[derive(Debug, Clone)]
pub struct CancelToken {
    inner: Arc<CancelState>,
}

#[derive(Debug)]
struct CancelState {
    cancelled: AtomicBool,
    end_status: Mutex<JobEndStatus>,
}

impl CancelToken {
    /// Create a new token (not cancelled, status `Normal`).
    pub fn new() -> Self {
        Self {
            inner: Arc::new(CancelState {
                cancelled: AtomicBool::new(false),
                end_status: Mutex::new(JobEndStatus::Normal),
            }),
        }
    }

    /// The status a result should report: `Normal` until cancelled, then
    /// whatever the canceller supplied.
    pub fn end_status(&self) -> JobEndStatus {
        *self
            .inner
            .end_status
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl Cancellable for CancelToken {
    fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Relaxed)
    }

    // The status is stored before the flag is raised so a reader that
    // observes the flag always sees the matching status.
    fn cancel(&self, status: JobEndStatus) {
        *self
            .inner
            .end_status
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = status;
        self.inner.cancelled.store(true, Ordering::Release);
    }
}
