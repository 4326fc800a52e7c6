//! Run-once decorator.
//!
//! [`Once`] wraps a callable so that it runs on the first call only. Every
//! later call returns a clone of the first result, whatever arguments it
//! was given.
//!
//! # Examples
//!
//! ```rust
//! use underbar::function::once;
//!
//! let initialize = once(|name: &str| format!("initialized {name}"));
//!
//! assert_eq!(initialize.call("db"), "initialized db");
//! // Later arguments are ignored.
//! assert_eq!(initialize.call("cache"), "initialized db");
//! ```

use std::fmt;
use std::marker::PhantomData;

use parking_lot::Mutex;

use crate::error::OncePoisonedError;

/// The state of a [`Once`] wrapper.
#[derive(Debug)]
pub enum OnceState<F, R> {
    /// Not called yet. Holds the callable.
    Unfired(F),
    /// The callable is running, or panicked while running.
    Firing,
    /// Called. Holds the cached result.
    Fired(R),
}

/// A callable that runs at most once.
///
/// # Type Parameters
///
/// * `A` - The argument type (use a tuple for several arguments)
/// * `R` - The result type
/// * `F` - The wrapped callable
///
/// # Thread Safety
///
/// State transitions are serialized by a mutex that is held while the
/// wrapped callable runs. Calling the same `Once` from inside its own
/// callable therefore deadlocks.
///
/// # Poisoning
///
/// If the callable panics, the wrapper stays in [`OnceState::Firing`]:
/// [`try_call`](Once::try_call) returns [`OncePoisonedError`] and
/// [`call`](Once::call) panics from then on.
pub struct Once<A, R, F> {
    state: Mutex<OnceState<F, R>>,
    _argument: PhantomData<fn(A)>,
}

impl<A, R, F> Once<A, R, F>
where
    F: FnOnce(A) -> R,
    R: Clone,
{
    /// Wraps `function`.
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            state: Mutex::new(OnceState::Unfired(function)),
            _argument: PhantomData,
        }
    }

    /// Calls the wrapped function on the first call and returns its cached
    /// result on every call.
    ///
    /// # Panics
    ///
    /// Panics if the first call panicked (the wrapper is poisoned).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use underbar::function::Once;
    ///
    /// let calls = Cell::new(0);
    /// let counted = Once::new(|increment: i32| {
    ///     calls.set(calls.get() + 1);
    ///     increment
    /// });
    ///
    /// assert_eq!(counted.call(5), 5);
    /// assert_eq!(counted.call(10), 5);
    /// assert_eq!(calls.get(), 1);
    /// ```
    pub fn call(&self, argument: A) -> R {
        match self.try_call(argument) {
            Ok(result) => result,
            Err(error) => panic!("{error}"),
        }
    }

    /// Like [`call`](Once::call), reporting poisoning as an error.
    ///
    /// # Errors
    ///
    /// Returns [`OncePoisonedError`] if the first call panicked.
    pub fn try_call(&self, argument: A) -> Result<R, OncePoisonedError> {
        let mut state = self.state.lock();
        match std::mem::replace(&mut *state, OnceState::Firing) {
            OnceState::Fired(result) => {
                *state = OnceState::Fired(result.clone());
                Ok(result)
            }
            OnceState::Firing => Err(OncePoisonedError),
            OnceState::Unfired(function) => {
                tracing::debug!("once: first invocation");
                let result = function(argument);
                *state = OnceState::Fired(result.clone());
                Ok(result)
            }
        }
    }

    /// Returns `true` once the wrapped function has completed.
    pub fn is_fired(&self) -> bool {
        matches!(*self.state.lock(), OnceState::Fired(_))
    }

    /// Returns `true` if the wrapped function panicked.
    pub fn is_poisoned(&self) -> bool {
        matches!(*self.state.lock(), OnceState::Firing)
    }

    /// Returns the cached result, if the function has run.
    pub fn result(&self) -> Option<R> {
        match &*self.state.lock() {
            OnceState::Fired(result) => Some(result.clone()),
            OnceState::Unfired(_) | OnceState::Firing => None,
        }
    }
}

impl<A, R: fmt::Debug, F> fmt::Debug for Once<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.lock() {
            OnceState::Unfired(_) => formatter.write_str("Once(<unfired>)"),
            OnceState::Firing => formatter.write_str("Once(<poisoned>)"),
            OnceState::Fired(result) => formatter.debug_tuple("Once").field(result).finish(),
        }
    }
}

/// Wraps `function` so that it runs at most once.
///
/// See [`Once`].
#[inline]
pub fn once<A, R, F>(function: F) -> Once<A, R, F>
where
    F: FnOnce(A) -> R,
    R: Clone,
{
    Once::new(function)
}

static_assertions::assert_impl_all!(Once<i32, String, fn(i32) -> String>: Send, Sync);
