//! A scheduler backed by `tokio::time`.

use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tokio::task::AbortHandle;

use super::{Scheduler, Task};
use crate::error::NoRuntimeError;

/// Timers that sleep on a tokio runtime.
///
/// Each scheduled task is spawned onto the runtime, sleeps for its wait
/// and then runs synchronously. Cancelling aborts the spawned task; a task
/// that has already woken up is past the point of cancellation.
///
/// The clock is [`tokio::time::Instant`], so a runtime with paused time
/// (`#[tokio::test(start_paused = true)]`) drives this scheduler
/// deterministically.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use underbar::function::delay;
/// use underbar::scheduler::TokioScheduler;
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// let scheduler = TokioScheduler::current().expect("inside a runtime");
/// let (sender, receiver) = tokio::sync::oneshot::channel();
/// delay(&scheduler, move |value| sender.send(value), Duration::from_millis(50), 7);
/// assert_eq!(receiver.await, Ok(7));
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Uses the runtime the caller is currently running on.
    ///
    /// # Errors
    ///
    /// Returns [`NoRuntimeError`] when called outside a tokio runtime.
    pub fn current() -> Result<Self, NoRuntimeError> {
        Handle::try_current()
            .map(Self::from_handle)
            .map_err(|_| NoRuntimeError)
    }

    /// Uses the runtime behind `handle`.
    #[must_use]
    pub const fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }
}

impl Scheduler for TokioScheduler {
    type Handle = AbortHandle;

    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }

    fn schedule(&self, wait: Duration, task: Task) -> AbortHandle {
        tracing::debug!(?wait, "timer scheduled on tokio runtime");
        self.handle
            .spawn(async move {
                tokio::time::sleep(wait).await;
                task();
            })
            .abort_handle()
    }

    fn cancel(&self, handle: AbortHandle) -> bool {
        let pending = !handle.is_finished();
        handle.abort();
        tracing::debug!(pending, "timer cancelled on tokio runtime");
        pending
    }
}
