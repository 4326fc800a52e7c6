//! Deferred invocation.

use std::time::Duration;

use crate::scheduler::Scheduler;

/// Runs `function(argument)` once `wait` has elapsed on `scheduler`.
///
/// The call returns immediately. The eventual result is discarded; the
/// caller receives nothing. Use a tuple to pass several arguments.
///
/// # Examples
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
/// use underbar::function::delay;
/// use underbar::scheduler::ManualScheduler;
///
/// let scheduler = ManualScheduler::new();
/// let greeting = Arc::new(Mutex::new(String::new()));
///
/// let target = Arc::clone(&greeting);
/// delay(
///     &scheduler,
///     move |(salutation, name): (&str, &str)| {
///         *target.lock().unwrap() = format!("{salutation}, {name}");
///     },
///     Duration::from_millis(500),
///     ("hello", "world"),
/// );
///
/// assert!(greeting.lock().unwrap().is_empty());
/// scheduler.advance(Duration::from_millis(500));
/// assert_eq!(*greeting.lock().unwrap(), "hello, world");
/// ```
pub fn delay<S, A, R, F>(scheduler: &S, function: F, wait: Duration, argument: A)
where
    S: Scheduler,
    A: Send + 'static,
    F: FnOnce(A) -> R + Send + 'static,
{
    tracing::trace!(?wait, "delay: deferring call");
    // Dropping the handle leaves the timer armed.
    let _timer = scheduler.schedule(
        wait,
        Box::new(move || {
            drop(function(argument));
        }),
    );
}
