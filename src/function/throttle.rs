//! Time-windowed throttling.
//!
//! [`Throttle`] runs its callable at most once per window on the leading
//! edge and defers the most recent suppressed call to the trailing edge.
//!
//! # State machine
//!
//! ```text
//!            call                          call (inside window)
//!   Idle ───────────▶ Open ◀─────────────────────────┐
//!    ▲     run now,    │  cancel pending trailing,    │
//!    │     open window │  schedule trailing for the ──┘
//!    │                 │  rest of the window
//!    │                 │
//!    │                 │ call (window elapsed): run now, reopen
//!    │                 ▼
//!    └──── (no transition back; Open with an elapsed window acts as Idle)
//! ```
//!
//! - At most one immediate run per window.
//! - The trailing run uses the arguments of the most recent call.
//! - A call always returns the most recently computed result; on the
//!   rescheduling path that result is stale.
//! - A trailing run records its own execution time as the new trigger
//!   time, so it opens a fresh window.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//! use underbar::function::throttle;
//! use underbar::scheduler::ManualScheduler;
//!
//! let scheduler = ManualScheduler::new();
//! let runs = Arc::new(Mutex::new(Vec::new()));
//!
//! let log = Arc::clone(&runs);
//! let save = throttle(
//!     scheduler.clone(),
//!     move |draft: &'static str| {
//!         log.lock().unwrap().push(draft);
//!         draft.len()
//!     },
//!     Duration::from_millis(100),
//! );
//!
//! assert_eq!(save.call("a"), 1); // runs now
//! scheduler.advance(Duration::from_millis(20));
//! assert_eq!(save.call("ab"), 1); // deferred, returns the last result
//! scheduler.advance(Duration::from_millis(20));
//! assert_eq!(save.call("abc"), 1); // replaces the deferred call
//!
//! scheduler.advance(Duration::from_millis(60));
//! assert_eq!(*runs.lock().unwrap(), vec!["a", "abc"]);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::scheduler::Scheduler;

enum Window<R, H> {
    Idle,
    Open {
        last_trigger: Instant,
        result: R,
        pending: Option<H>,
    },
}

struct ThrottleState<R, H> {
    window: Window<R, H>,
    // Bumped on every scheduling decision; a trailing task only runs while
    // its generation is still current.
    generation: u64,
}

struct Shared<R, H, F> {
    function: F,
    state: Mutex<ThrottleState<R, H>>,
}

impl<R, H, F> Shared<R, H, F> {
    fn fire_trailing<A>(&self, generation: u64, fired_at: Instant, argument: A)
    where
        F: Fn(A) -> R,
    {
        let mut state = self.state.lock();
        if state.generation != generation {
            tracing::trace!(generation, "throttle: discarding superseded trailing call");
            return;
        }
        tracing::trace!(generation, "throttle: trailing call");
        let result = (self.function)(argument);
        state.window = Window::Open {
            last_trigger: fired_at,
            result,
            pending: None,
        };
    }
}

/// A callable limited to one leading-edge run per window.
///
/// # Type Parameters
///
/// * `S` - The scheduler that owns the clock and the trailing timer
/// * `A` - The argument type (use a tuple for several arguments)
/// * `R` - The result type
/// * `F` - The wrapped callable
///
/// # Thread Safety
///
/// All state transitions and every run of the wrapped callable happen
/// under one mutex. Calling the same `Throttle` from inside its own
/// callable therefore deadlocks.
pub struct Throttle<S: Scheduler, A, R, F> {
    scheduler: S,
    wait: Duration,
    shared: Arc<Shared<R, S::Handle, F>>,
    _argument: PhantomData<fn(A)>,
}

impl<S, A, R, F> Throttle<S, A, R, F>
where
    S: Scheduler,
    A: Send + 'static,
    R: Clone + Send + 'static,
    F: Fn(A) -> R + Send + Sync + 'static,
{
    /// Wraps `function` with a window of `wait` measured on `scheduler`.
    pub fn new(scheduler: S, function: F, wait: Duration) -> Self {
        Self {
            scheduler,
            wait,
            shared: Arc::new(Shared {
                function,
                state: Mutex::new(ThrottleState {
                    window: Window::Idle,
                    generation: 0,
                }),
            }),
            _argument: PhantomData,
        }
    }

    /// Calls or defers the wrapped function and returns the most recently
    /// computed result.
    ///
    /// Outside a window the function runs immediately and its fresh result
    /// is returned. Inside a window any pending trailing call is cancelled,
    /// a new one is scheduled for the end of the window with `argument`,
    /// and the result of the last completed run is returned.
    pub fn call(&self, argument: A) -> R {
        let now = self.scheduler.now();
        let mut state = self.shared.state.lock();
        state.generation += 1;
        let generation = state.generation;

        if let Window::Open {
            last_trigger,
            result,
            pending,
        } = &mut state.window
        {
            let window_end = last_trigger.checked_add(self.wait);
            if window_end.is_none_or(|end| now < end) {
                if let Some(previous) = pending.take() {
                    self.scheduler.cancel(previous);
                }
                // A window whose end is not representable never closes.
                let remaining = window_end.map_or(Duration::MAX, |end| end - now);
                tracing::trace!(?remaining, generation, "throttle: rescheduling trailing call");
                let shared = Arc::clone(&self.shared);
                let clock = self.scheduler.clone();
                *pending = Some(self.scheduler.schedule(
                    remaining,
                    Box::new(move || shared.fire_trailing(generation, clock.now(), argument)),
                ));
                return result.clone();
            }
            if let Some(previous) = pending.take() {
                self.scheduler.cancel(previous);
            }
        }

        tracing::trace!(generation, "throttle: immediate call");
        let result = (self.shared.function)(argument);
        state.window = Window::Open {
            last_trigger: now,
            result: result.clone(),
            pending: None,
        };
        result
    }

    /// Returns the window length.
    #[inline]
    pub const fn wait(&self) -> Duration {
        self.wait
    }

    /// Returns `true` while a trailing call is scheduled.
    pub fn has_pending(&self) -> bool {
        matches!(
            self.shared.state.lock().window,
            Window::Open {
                pending: Some(_),
                ..
            }
        )
    }

    /// Returns `true` if a call made now would be deferred.
    pub fn is_windowed(&self) -> bool {
        let now = self.scheduler.now();
        match self.shared.state.lock().window {
            Window::Idle => false,
            Window::Open { last_trigger, .. } => last_trigger
                .checked_add(self.wait)
                .is_none_or(|end| now < end),
        }
    }
}

impl<S: Scheduler, A, R, F> fmt::Debug for Throttle<S, A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        let open = matches!(state.window, Window::Open { .. });
        formatter
            .debug_struct("Throttle")
            .field("wait", &self.wait)
            .field("open", &open)
            .field("generation", &state.generation)
            .finish_non_exhaustive()
    }
}

/// Wraps `function` so it runs at most once per `wait` on the leading
/// edge, with the latest suppressed call replayed on the trailing edge.
///
/// See [`Throttle`].
#[inline]
pub fn throttle<S, A, R, F>(scheduler: S, function: F, wait: Duration) -> Throttle<S, A, R, F>
where
    S: Scheduler,
    A: Send + 'static,
    R: Clone + Send + 'static,
    F: Fn(A) -> R + Send + Sync + 'static,
{
    Throttle::new(scheduler, function, wait)
}

static_assertions::assert_impl_all!(
    Throttle<crate::scheduler::ManualScheduler, i32, i32, fn(i32) -> i32>: Send, Sync
);
