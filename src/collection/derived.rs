//! Derived predicates and transformations.
//!
//! Everything here is written in terms of [`each`], [`reduce_from`] or
//! another derived operation. None of these functions hold state, and all
//! of them inherit the engine's traversal order.

use super::engine::{each, reduce_from};
use super::traverse::Collection;
use crate::truthy::Truthy;

/// Returns the elements that pass `test`, in traversal order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::filter;
///
/// let odds = filter(&vec![1, 2, 3, 4, 5], |number| number % 2 == 1);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub fn filter<C, P>(collection: &C, mut test: P) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    let mut passed = Vec::new();
    each(collection, |value, _, _| {
        if test(value) {
            passed.push(value.clone());
        }
    });
    passed
}

/// Returns the elements that fail `test`, in traversal order.
///
/// `reject(c, test)` is exactly `filter(c, |x| !test(x))`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reject;
///
/// let evens = reject(&vec![1, 2, 3, 4, 5], |number| number % 2 == 1);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn reject<C, P>(collection: &C, mut test: P) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    filter(collection, |value| !test(value))
}

/// Returns the index of the first element equal to `target`.
///
/// `None` means no element matched. Once a match is recorded, later
/// matches never replace it.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::index_of;
///
/// assert_eq!(index_of(&[10, 20, 10], &10), Some(0));
/// assert_eq!(index_of(&[10, 20, 10], &30), None);
/// ```
pub fn index_of<T: PartialEq>(array: &[T], target: &T) -> Option<usize> {
    let mut found = None;
    each(array, |value, index, _| {
        if found.is_none() && value == target {
            found = Some(index);
        }
    });
    found
}

/// Returns a duplicate-free copy keeping first occurrences in order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::uniq;
///
/// assert_eq!(uniq(&[1, 2, 1, 3, 2]), vec![1, 2, 3]);
/// ```
pub fn uniq<T: PartialEq + Clone>(array: &[T]) -> Vec<T> {
    let mut unique: Vec<T> = Vec::new();
    each(array, |value, _, _| {
        if index_of(&unique, value).is_none() {
            unique.push(value.clone());
        }
    });
    unique
}

/// Returns whether every element passes `predicate`.
///
/// After the first failure the predicate is no longer called, but the
/// traversal itself still visits every element. An empty collection is
/// vacuously `true`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::every;
///
/// assert!(every(&vec![2, 4, 6], |number| number % 2 == 0));
/// assert!(!every(&vec![2, 3, 6], |number| number % 2 == 0));
/// assert!(every(&Vec::<i32>::new(), |_| false));
/// ```
pub fn every<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    reduce_from(collection, true, |passed, value| passed && predicate(value))
}

/// [`every`] with truthiness as the predicate.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::every_truthy;
///
/// assert!(every_truthy(&vec![1, 2, 3]));
/// assert!(!every_truthy(&vec![1, 0, 3]));
/// ```
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    every(collection, Truthy::is_truthy)
}

/// Returns whether at least one element passes `predicate`.
///
/// Defined as `!every(c, |x| !predicate(x))`, so an empty collection is
/// `false`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::some;
///
/// assert!(some(&vec![1, 2, 3], |number| *number > 2));
/// assert!(!some(&Vec::<i32>::new(), |_| true));
/// ```
pub fn some<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    !every(collection, |value| !predicate(value))
}

/// [`some`] with truthiness as the predicate.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::some_truthy;
///
/// assert!(some_truthy(&vec!["", "x"]));
/// assert!(!some_truthy(&vec!["", ""]));
/// ```
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    some(collection, Truthy::is_truthy)
}

/// Returns whether any element equals `target`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::collection::contains;
///
/// assert!(contains(&vec![1, 2, 3], &2));
///
/// let ages: HashMap<&str, u32> = [("ada", 36), ("alan", 41)].into_iter().collect();
/// assert!(contains(&ages, &41));
/// assert!(!contains(&ages, &50));
/// ```
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    reduce_from(collection, false, |found, value| found || value == target)
}

/// Returns `function(value)` for every element, preserving order and
/// length.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::map;
///
/// assert_eq!(map(&vec![1, 2, 3], |number| number * 10), vec![10, 20, 30]);
/// ```
pub fn map<C, U, F>(collection: &C, mut function: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> U,
{
    let mut mapped = Vec::with_capacity(collection.size());
    each(collection, |value, _, _| mapped.push(function(value)));
    mapped
}
