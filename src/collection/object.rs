//! Record helpers: `pluck`, `extend` and `defaults`.
//!
//! A record is a mapping from fields to values. [`Record`] abstracts over
//! the map types so the helpers work on `HashMap` and `BTreeMap` alike.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::derived::map;
use super::traverse::Collection;

/// A field-to-value mapping that can be read, written and enumerated.
pub trait Record {
    /// The field (key) type.
    type Field;
    /// The value type.
    type Value;

    /// Returns the value stored under `field`, if any.
    fn lookup(&self, field: &Self::Field) -> Option<&Self::Value>;

    /// Stores `value` under `field`, replacing any previous value.
    fn assign(&mut self, field: Self::Field, value: Self::Value);

    /// Visits every field with its value.
    fn visit_fields<'a, F>(&'a self, visitor: F)
    where
        F: FnMut(&'a Self::Field, &'a Self::Value);
}

impl<K: Eq + Hash, V, S: BuildHasher> Record for HashMap<K, V, S> {
    type Field = K;
    type Value = V;

    #[inline]
    fn lookup(&self, field: &K) -> Option<&V> {
        self.get(field)
    }

    #[inline]
    fn assign(&mut self, field: K, value: V) {
        self.insert(field, value);
    }

    fn visit_fields<'a, F>(&'a self, mut visitor: F)
    where
        F: FnMut(&'a K, &'a V),
    {
        self.each_entry(|value, field| visitor(field, value));
    }
}

impl<K: Ord, V> Record for BTreeMap<K, V> {
    type Field = K;
    type Value = V;

    #[inline]
    fn lookup(&self, field: &K) -> Option<&V> {
        self.get(field)
    }

    #[inline]
    fn assign(&mut self, field: K, value: V) {
        self.insert(field, value);
    }

    fn visit_fields<'a, F>(&'a self, mut visitor: F)
    where
        F: FnMut(&'a K, &'a V),
    {
        self.each_entry(|value, field| visitor(field, value));
    }
}

/// Projects `field` out of every record, `None` where it is missing.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::collection::pluck;
///
/// let people: Vec<BTreeMap<&str, u32>> = vec![
///     [("age", 36)].into_iter().collect(),
///     [("height", 170)].into_iter().collect(),
/// ];
/// assert_eq!(pluck(&people, &"age"), vec![Some(36), None]);
/// ```
pub fn pluck<C, R>(collection: &C, field: &R::Field) -> Vec<Option<R::Value>>
where
    C: Collection<Item = R> + ?Sized,
    R: Record,
    R::Value: Clone,
{
    map(collection, |record| record.lookup(field).cloned())
}

/// Copies every field of every source into `target`.
///
/// Sources are applied in order, so later sources overwrite earlier ones.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::collection::extend;
///
/// let base: HashMap<&str, i32> = [("a", 1)].into_iter().collect();
/// let patch: HashMap<&str, i32> = [("a", 10), ("b", 2)].into_iter().collect();
/// let merged = extend(base, &[patch]);
/// assert_eq!(merged[&"a"], 10);
/// assert_eq!(merged[&"b"], 2);
/// ```
pub fn extend<T, S>(mut target: T, sources: &[S]) -> T
where
    T: Record,
    S: Record<Field = T::Field, Value = T::Value>,
    T::Field: Clone,
    T::Value: Clone,
{
    for source in sources {
        source.visit_fields(|field, value| target.assign(field.clone(), value.clone()));
    }
    target
}

/// Like [`extend`], but never overwrites a field that is already present.
///
/// A field filled in by an earlier source counts as present for later
/// sources.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::collection::defaults;
///
/// let options: BTreeMap<&str, i32> = [("retries", 5)].into_iter().collect();
/// let fallback: BTreeMap<&str, i32> = [("retries", 3), ("timeout", 30)].into_iter().collect();
/// let resolved = defaults(options, &[fallback]);
/// assert_eq!(resolved[&"retries"], 5);
/// assert_eq!(resolved[&"timeout"], 30);
/// ```
pub fn defaults<T, S>(mut target: T, sources: &[S]) -> T
where
    T: Record,
    S: Record<Field = T::Field, Value = T::Value>,
    T::Field: Clone,
    T::Value: Clone,
{
    for source in sources {
        source.visit_fields(|field, value| {
            if target.lookup(field).is_none() {
                target.assign(field.clone(), value.clone());
            }
        });
    }
    target
}
