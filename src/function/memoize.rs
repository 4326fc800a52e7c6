//! Argument-keyed result cache.
//!
//! [`Memoize`] wraps a single-argument callable and remembers its result
//! per argument. The cache grows with every new argument and is never
//! evicted.
//!
//! # Falsy results
//!
//! Under the default [`CachePolicy::TruthyOnly`] a cached result is only
//! reused when it is truthy (see [`Truthy`]). A function that returns `0`,
//! `""`, `false` or an empty container for some argument is therefore
//! recomputed on every call with that argument. This matches the
//! long-standing behavior of this decorator and is kept as the default;
//! [`CachePolicy::Always`] reuses every cached result. Result types with no
//! notion of truthiness are memoized through [`Memoize::always`].
//!
//! # Examples
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use underbar::function::memoize;
//!
//! let calls = AtomicUsize::new(0);
//! let square = memoize(|value: u64| {
//!     calls.fetch_add(1, Ordering::SeqCst);
//!     value * value
//! });
//!
//! assert_eq!(square.call(5), 25);
//! assert_eq!(square.call(5), 25);
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

use std::fmt;
use std::hash::Hash;

use parking_lot::Mutex;

use crate::truthy::Truthy;

#[cfg(feature = "fxhash")]
type CacheMap<K, R> = rustc_hash::FxHashMap<K, R>;

#[cfg(not(feature = "fxhash"))]
type CacheMap<K, R> = std::collections::HashMap<K, R>;

/// Decides whether a cached result may be reused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CachePolicy {
    /// Reuse a cached result only when it is truthy.
    #[default]
    TruthyOnly,
    /// Reuse every cached result.
    Always,
}

const fn reuse_any<R>(_: &R) -> bool {
    true
}

/// A callable whose results are cached by argument.
///
/// # Type Parameters
///
/// * `K` - The argument type, used as the cache key
/// * `R` - The result type
/// * `F` - The wrapped callable
///
/// # Thread Safety
///
/// The cache is guarded by a mutex that is *not* held while the wrapped
/// function runs, so a memoized function may call back into its own
/// wrapper (for example through a shared handle while recursing). Two
/// concurrent misses on the same argument may both compute; the later
/// store wins.
pub struct Memoize<K, R, F> {
    function: F,
    policy: CachePolicy,
    reusable: fn(&R) -> bool,
    cache: Mutex<CacheMap<K, R>>,
}

impl<K, R, F> Memoize<K, R, F>
where
    K: Eq + Hash + Clone,
    R: Clone + Truthy,
    F: Fn(K) -> R,
{
    /// Wraps `function` with the default [`CachePolicy::TruthyOnly`].
    #[inline]
    pub fn new(function: F) -> Self {
        Self::with_policy(function, CachePolicy::default())
    }

    /// Wraps `function` with the given cache policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use underbar::function::{CachePolicy, Memoize};
    ///
    /// let calls = AtomicUsize::new(0);
    /// let zero = Memoize::with_policy(
    ///     |_: u8| {
    ///         calls.fetch_add(1, Ordering::SeqCst);
    ///         0
    ///     },
    ///     CachePolicy::Always,
    /// );
    ///
    /// zero.call(1);
    /// zero.call(1);
    /// assert_eq!(calls.load(Ordering::SeqCst), 1);
    /// ```
    pub fn with_policy(function: F, policy: CachePolicy) -> Self {
        let reusable: fn(&R) -> bool = match policy {
            CachePolicy::TruthyOnly => R::is_truthy,
            CachePolicy::Always => reuse_any::<R>,
        };
        Self::from_parts(function, policy, reusable)
    }
}

impl<K, R, F> Memoize<K, R, F>
where
    K: Eq + Hash + Clone,
    R: Clone,
    F: Fn(K) -> R,
{
    /// Wraps `function` with [`CachePolicy::Always`].
    ///
    /// Unlike [`with_policy`](Memoize::with_policy) this places no
    /// [`Truthy`] bound on the result type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::function::{CachePolicy, Memoize};
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// struct Span(u32, u32);
    ///
    /// let span = Memoize::always(|width: u32| Span(0, width));
    /// assert_eq!(span.call(4), Span(0, 4));
    /// assert_eq!(span.policy(), CachePolicy::Always);
    /// ```
    pub fn always(function: F) -> Self {
        Self::from_parts(function, CachePolicy::Always, reuse_any::<R>)
    }

    fn from_parts(function: F, policy: CachePolicy, reusable: fn(&R) -> bool) -> Self {
        Self {
            function,
            policy,
            reusable,
            cache: Mutex::new(CacheMap::default()),
        }
    }

    /// Returns the cached result for `argument`, computing and storing it
    /// when there is no usable cached result.
    pub fn call(&self, argument: K) -> R {
        if let Some(cached) = self.lookup(&argument) {
            tracing::trace!("memoize: cache hit");
            return cached;
        }
        tracing::trace!("memoize: cache miss");
        let result = (self.function)(argument.clone());
        self.cache.lock().insert(argument, result.clone());
        result
    }

    fn lookup(&self, argument: &K) -> Option<R> {
        self.cache
            .lock()
            .get(argument)
            .filter(|cached| (self.reusable)(*cached))
            .cloned()
    }

    /// Returns the policy this wrapper was created with.
    #[inline]
    pub const fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Returns the number of cached arguments, including falsy results
    /// that the policy will not reuse.
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }
}

impl<K, R, F> fmt::Debug for Memoize<K, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("policy", &self.policy)
            .field("cached", &self.cache.lock().len())
            .finish_non_exhaustive()
    }
}

/// Wraps `function` with an argument-keyed cache.
///
/// See [`Memoize`].
#[inline]
pub fn memoize<K, R, F>(function: F) -> Memoize<K, R, F>
where
    K: Eq + Hash + Clone,
    R: Clone + Truthy,
    F: Fn(K) -> R,
{
    Memoize::new(function)
}

static_assertions::assert_impl_all!(Memoize<u64, u64, fn(u64) -> u64>: Send, Sync);
