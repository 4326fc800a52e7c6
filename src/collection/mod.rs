//! Traversal, transformation and reduction of collections.
//!
//! A collection is either an ordered sequence or a key-value mapping. Both
//! are reached through the [`Collection`] trait, and everything in this
//! module bottoms out in the iteration engine:
//!
//! - [`each`]: visit every element with its index or key
//! - [`reduce`]: left fold seeded with the first element
//! - [`reduce_from`]: left fold seeded by the caller
//!
//! Built on top of the engine:
//!
//! - Predicates and transformations: [`filter`], [`reject`], [`index_of`],
//!   [`uniq`], [`every`], [`some`], [`contains`], [`map`], [`invoke`]
//! - Array helpers: [`first`], [`last`], [`shuffle`], [`sort_by`], [`zip`],
//!   [`flatten`], [`intersection`], [`difference`]
//! - Record helpers: [`pluck`], [`extend`], [`defaults`]
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use underbar::collection::{contains, filter, reduce, reduce_from, some_truthy, uniq};
//!
//! let numbers = vec![3, 1, 3, 2];
//! assert_eq!(uniq(&numbers), vec![3, 1, 2]);
//! assert_eq!(filter(&numbers, |number| *number > 1), vec![3, 3, 2]);
//! assert_eq!(reduce(&numbers, |total, number| total + number), Ok(9));
//!
//! let stock: BTreeMap<&str, u32> = [("apples", 0), ("pears", 4)].into_iter().collect();
//! assert!(some_truthy(&stock));
//! assert!(contains(&stock, &4));
//! assert_eq!(reduce_from(&stock, 0, |total, count| total + count), 4);
//! ```

mod array;
mod derived;
mod engine;
mod invoke;
mod object;
mod traverse;

pub use array::{
    Nested, difference, first, first_n, flatten, intersection, last, last_n, shuffle,
    shuffle_with, sort_by, zip,
};
pub use derived::{
    contains, every, every_truthy, filter, index_of, map, reject, some, some_truthy, uniq,
};
pub use engine::{each, reduce, reduce_from};
pub use invoke::{Invoker, Method, Receiver, invoke, invoke_function};
pub use object::{Record, defaults, extend, pluck};
pub use traverse::Collection;
