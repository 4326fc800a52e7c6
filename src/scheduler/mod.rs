//! Timer scheduling for deferred and rate-limited calls.
//!
//! `delay` and `throttle` never sleep or spawn on their own; they hand a
//! [`Task`] to a [`Scheduler`] and return immediately. Two schedulers are
//! provided:
//!
//! - [`ManualScheduler`]: a virtual clock advanced explicitly by the
//!   caller. Deterministic, so it is the natural choice for tests and for
//!   event loops that already own their notion of time.
//! - [`TokioScheduler`] (feature `async`): timers backed by
//!   `tokio::time`, firing on the runtime's workers.
//!
//! # Ordering
//!
//! Tasks fire in non-decreasing order of their deadlines. A cancelled task
//! never fires.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::time::Duration;
//! use underbar::scheduler::{ManualScheduler, Scheduler};
//!
//! let scheduler = ManualScheduler::new();
//! let fired = Arc::new(AtomicUsize::new(0));
//!
//! let counter = Arc::clone(&fired);
//! scheduler.schedule(
//!     Duration::from_millis(10),
//!     Box::new(move || {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     }),
//! );
//!
//! scheduler.advance(Duration::from_millis(9));
//! assert_eq!(fired.load(Ordering::SeqCst), 0);
//! scheduler.advance(Duration::from_millis(1));
//! assert_eq!(fired.load(Ordering::SeqCst), 1);
//! ```

use std::time::{Duration, Instant};

mod manual;
#[cfg(feature = "async")]
mod runtime;

pub use manual::{ManualScheduler, TimerId};
#[cfg(feature = "async")]
pub use runtime::TokioScheduler;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// A source of time and timers.
///
/// Implementations are cheap handles: cloning a scheduler yields another
/// handle onto the same clock and queue.
pub trait Scheduler: Clone + Send + Sync + 'static {
    /// Identifies a scheduled task so it can be cancelled.
    type Handle: Send + 'static;

    /// Returns the scheduler's current time.
    fn now(&self) -> Instant;

    /// Runs `task` once `wait` has elapsed on this scheduler's clock.
    fn schedule(&self, wait: Duration, task: Task) -> Self::Handle;

    /// Cancels a scheduled task.
    ///
    /// Returns `true` if the task was still pending and will now never run.
    fn cancel(&self, handle: Self::Handle) -> bool;
}
