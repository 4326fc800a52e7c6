//! Error types.
//!
//! Only a handful of operations in this crate can fail. Each failure has its
//! own error type so that callers can match on exactly what went wrong, and
//! [`UnderbarError`] unifies them for callers that prefer a single type.
//!
//! | Error | Raised by |
//! |---|---|
//! | [`EmptyReductionError`] | `reduce` over an empty collection |
//! | [`NotCallableError`] | `invoke` with a key that is not a method |
//! | [`OncePoisonedError`] | `Once::try_call` after the first call panicked |
//! | [`NoRuntimeError`] | `TokioScheduler::current` outside a runtime |

use thiserror::Error;

/// Returned by `reduce` when the collection is empty and no seed exists.
///
/// # Examples
///
/// ```rust
/// use underbar::error::EmptyReductionError;
///
/// assert_eq!(
///     EmptyReductionError.to_string(),
///     "reduce of an empty collection with no initial value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("reduce of an empty collection with no initial value")]
pub struct EmptyReductionError;

/// Returned by `invoke` when a key does not resolve to a callable member.
///
/// # Examples
///
/// ```rust
/// use underbar::error::NotCallableError;
///
/// let error = NotCallableError::new("shout");
/// assert_eq!(error.key, "shout");
/// assert_eq!(error.to_string(), "`shout` is not a callable member");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{key}` is not a callable member")]
pub struct NotCallableError {
    /// The key that failed to resolve.
    pub key: String,
}

impl NotCallableError {
    /// Creates a new `NotCallableError` for the given key.
    #[must_use]
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

/// Returned by `Once::try_call` when the wrapped callable panicked on its
/// first and only invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Once instance has been poisoned")]
pub struct OncePoisonedError;

/// Returned when a tokio-backed scheduler is requested outside a runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no tokio runtime is available to drive timers")]
pub struct NoRuntimeError;

/// Unified error type for every failure this crate can report.
///
/// # Examples
///
/// ```rust
/// use underbar::error::{EmptyReductionError, UnderbarError};
///
/// let error: UnderbarError = EmptyReductionError.into();
/// assert_eq!(error, UnderbarError::EmptyReduction(EmptyReductionError));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnderbarError {
    /// See [`EmptyReductionError`].
    #[error(transparent)]
    EmptyReduction(#[from] EmptyReductionError),
    /// See [`NotCallableError`].
    #[error(transparent)]
    NotCallable(#[from] NotCallableError),
    /// See [`OncePoisonedError`].
    #[error(transparent)]
    OncePoisoned(#[from] OncePoisonedError),
    /// See [`NoRuntimeError`].
    #[error(transparent)]
    NoRuntime(#[from] NoRuntimeError),
}
