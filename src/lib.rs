//! # underbar
//!
//! Functional utilities for Rust: helpers for traversing, transforming and
//! reducing collections, and decorators that change how a callable is
//! invoked.
//!
//! ## Overview
//!
//! - **Iteration Engine**: [`each`](collection::each) and
//!   [`reduce`](collection::reduce) define traversal order and fold
//!   semantics once; every other collection operation is built on them.
//! - **Derived Predicates**: `filter`, `reject`, `index_of`, `uniq`,
//!   `every`, `some`, `contains`, `map`, `invoke`
//! - **Collection Helpers**: `first`, `last`, `pluck`, `extend`,
//!   `defaults`, `shuffle`, `sort_by`, `zip`, `flatten`, `intersection`,
//!   `difference`
//! - **Function Decorators**: `once`, `memoize`, `delay`, `throttle`
//! - **Schedulers**: the timer abstraction behind `delay` and `throttle`,
//!   with a deterministic virtual clock and a tokio-backed implementation
//!
//! ## Feature Flags
//!
//! - `collection`: Iteration engine and collection helpers
//! - `function`: Function decorators and schedulers
//! - `async`: `TokioScheduler`
//! - `fxhash`: Use `FxHashMap` for the `memoize` cache
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use underbar::prelude::*;
//!
//! let numbers = vec![1, 2, 3];
//! assert_eq!(reduce(&numbers, |total, number| total + number), Ok(6));
//! assert_eq!(reduce_from(&numbers, 10, |total, number| total + number), 16);
//!
//! let square = once(|value: i32| value * value);
//! assert_eq!(square.call(4), 16);
//! assert_eq!(square.call(9), 16);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::truthy::Truthy;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "function")]
    pub use crate::scheduler::*;
}

pub mod error;
pub mod truthy;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "function")]
pub mod scheduler;
