//! Function decorators.
//!
//! Each decorator wraps a callable and owns the private state that alters
//! how it is invoked:
//!
//! - [`once`]: runs the callable on the first call only and caches the
//!   result.
//! - [`memoize`]: caches results by argument.
//! - [`delay`]: runs the callable after a wait on a
//!   [`Scheduler`](crate::scheduler::Scheduler).
//! - [`throttle`]: at most one leading-edge run per window, with the most
//!   recent suppressed call replayed on the trailing edge.
//!
//! Wrappers never share state, even when they wrap the same callable.
//! Callables taking several arguments are wrapped as a single tuple
//! argument.
//!
//! # Examples
//!
//! ```rust
//! use underbar::function::{memoize, once};
//!
//! let setup = once(|(host, port): (&str, u16)| format!("{host}:{port}"));
//! assert_eq!(setup.call(("localhost", 8080)), "localhost:8080");
//! assert_eq!(setup.call(("example.com", 80)), "localhost:8080");
//!
//! let length = memoize(|word: &str| word.len());
//! assert_eq!(length.call("memo"), 4);
//! assert_eq!(length.len(), 1);
//! ```

mod delay;
mod memoize;
mod once;
mod throttle;
mod utils;

pub use delay::delay;
pub use memoize::{CachePolicy, Memoize, memoize};
pub use once::{Once, OnceState, once};
pub use throttle::{Throttle, throttle};
pub use utils::identity;
