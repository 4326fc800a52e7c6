//! The `Collection` capability - iterate with index or key.
//!
//! Sequences and mappings are traversed through one trait so that the
//! iteration engine never has to inspect which variant it received.
//!
//! | Implementor | `Key<'a>` | Order |
//! |---|---|---|
//! | `[T]`, `[T; N]`, `Vec<T>`, `VecDeque<T>` | `usize` | index `0..len` |
//! | `HashMap<K, V, S>` | `&'a K` | host enumeration order |
//! | `BTreeMap<K, V>` | `&'a K` | ascending key order |

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;

/// A container whose elements can be visited together with their index or
/// key.
///
/// # Contract
///
/// - `fold_entries` visits every element exactly once and never stops
///   early; `each_entry` is the fold with a unit accumulator.
/// - Sequences are visited in index order `0..len`.
/// - Mappings are visited in the order the underlying map enumerates them.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Collection;
///
/// let mut seen = Vec::new();
/// vec!['a', 'b'].each_entry(|value, index| seen.push((index, *value)));
/// assert_eq!(seen, vec![(0, 'a'), (1, 'b')]);
/// ```
pub trait Collection {
    /// The element type.
    type Item;

    /// The position handed to visitors: an index or a borrowed key.
    type Key<'a>: Copy
    where
        Self: 'a;

    /// Left-folds every element with its index or key into `initial`.
    fn fold_entries<'a, A, F>(&'a self, initial: A, folder: F) -> A
    where
        F: FnMut(A, &'a Self::Item, Self::Key<'a>) -> A;

    /// Visits every element with its index or key.
    #[inline]
    fn each_entry<'a, F>(&'a self, mut visitor: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>),
    {
        self.fold_entries((), |(), value, key| visitor(value, key));
    }

    /// Returns the number of elements.
    fn size(&self) -> usize;
}

impl<T> Collection for [T] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn fold_entries<'a, A, F>(&'a self, initial: A, mut folder: F) -> A
    where
        F: FnMut(A, &'a T, usize) -> A,
    {
        self.iter()
            .enumerate()
            .fold(initial, |accumulator, (index, value)| folder(accumulator, value, index))
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    #[inline]
    fn fold_entries<'a, A, F>(&'a self, initial: A, folder: F) -> A
    where
        F: FnMut(A, &'a T, usize) -> A,
    {
        self.as_slice().fold_entries(initial, folder)
    }

    #[inline]
    fn size(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    #[inline]
    fn fold_entries<'a, A, F>(&'a self, initial: A, folder: F) -> A
    where
        F: FnMut(A, &'a T, usize) -> A,
    {
        self.as_slice().fold_entries(initial, folder)
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn fold_entries<'a, A, F>(&'a self, initial: A, mut folder: F) -> A
    where
        F: FnMut(A, &'a T, usize) -> A,
    {
        self.iter()
            .enumerate()
            .fold(initial, |accumulator, (index, value)| folder(accumulator, value, index))
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S: BuildHasher> Collection for HashMap<K, V, S> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn fold_entries<'a, A, F>(&'a self, initial: A, mut folder: F) -> A
    where
        F: FnMut(A, &'a V, &'a K) -> A,
    {
        self.iter()
            .fold(initial, |accumulator, (key, value)| folder(accumulator, value, key))
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn fold_entries<'a, A, F>(&'a self, initial: A, mut folder: F) -> A
    where
        F: FnMut(A, &'a V, &'a K) -> A,
    {
        self.iter()
            .fold(initial, |accumulator, (key, value)| folder(accumulator, value, key))
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}
