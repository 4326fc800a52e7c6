//! The iteration engine: `each`, `reduce` and `reduce_from`.
//!
//! Every traversal in this crate goes through these three functions, so
//! they are the single place where traversal order, whole-collection
//! visitation and seeding rules are decided:
//!
//! - Order is the order of [`Collection::fold_entries`].
//! - Nothing short-circuits: every element is visited.
//! - `reduce` seeds from the first visited element and folds the rest;
//!   `reduce_from` seeds from the caller and folds everything.

use super::traverse::Collection;
use crate::error::EmptyReductionError;

/// Calls `iterator(value, key, collection)` for every element.
///
/// Sequences are visited in index order; mappings in the order the map
/// enumerates its entries. There is no return value and no early exit.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::each;
///
/// let letters = vec!["a", "b", "c"];
/// let mut joined = String::new();
/// each(&letters, |letter, index, collection| {
///     joined.push_str(letter);
///     if index + 1 < collection.len() {
///         joined.push(',');
///     }
/// });
/// assert_eq!(joined, "a,b,c");
/// ```
pub fn each<'a, C, F>(collection: &'a C, mut iterator: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item, C::Key<'a>, &'a C),
{
    collection.each_entry(|value, key| iterator(value, key, collection));
}

/// Left-folds the collection, seeding the accumulator with its first
/// element.
///
/// The first visited element is cloned into the accumulator and folding
/// continues from the second element with
/// `accumulator = iterator(accumulator, &value)`.
///
/// # Errors
///
/// Returns [`EmptyReductionError`] when the collection has no elements.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce;
/// use underbar::error::EmptyReductionError;
///
/// assert_eq!(reduce(&vec![1, 2, 3], |total, number| total + number), Ok(6));
/// assert_eq!(
///     reduce(&Vec::<i32>::new(), |total, number| total + number),
///     Err(EmptyReductionError)
/// );
/// ```
pub fn reduce<C, F>(collection: &C, mut iterator: F) -> Result<C::Item, EmptyReductionError>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item) -> C::Item,
{
    collection
        .fold_entries(None, |accumulator, value, _| {
            Some(match accumulator {
                None => value.clone(),
                Some(previous) => iterator(previous, value),
            })
        })
        .ok_or(EmptyReductionError)
}

/// Left-folds the collection starting from `initial`.
///
/// Folding starts at the first element; an empty collection yields
/// `initial` unchanged.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce_from;
///
/// assert_eq!(reduce_from(&vec![1, 2, 3], 10, |total, number| total + number), 16);
///
/// let words = vec!["fold", "left"];
/// let length = reduce_from(&words, 0, |total, word| total + word.len());
/// assert_eq!(length, 8);
/// ```
pub fn reduce_from<C, A, F>(collection: &C, initial: A, mut iterator: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item) -> A,
{
    collection.fold_entries(initial, |accumulator, value, _| iterator(accumulator, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::BTreeMap;

    #[rstest]
    fn each_visits_every_index_in_order() {
        let values = vec![5, 6, 7];
        let mut indices = Vec::new();
        each(&values, |_, index, _| indices.push(index));
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[rstest]
    fn each_passes_the_collection_itself() {
        let values = [1, 2];
        each(&values, |_, _, collection| assert_eq!(collection, &[1, 2]));
    }

    #[rstest]
    fn each_over_mapping_passes_keys() {
        let map: BTreeMap<&str, i32> = [("one", 1), ("two", 2)].into_iter().collect();
        let mut keys = Vec::new();
        each(&map, |_, key, _| keys.push(*key));
        assert_eq!(keys, vec!["one", "two"]);
    }

    #[rstest]
    fn reduce_without_seed_starts_from_first_element() {
        let mut steps = Vec::new();
        let result = reduce(&vec![1, 2, 3], |accumulator, value| {
            steps.push((accumulator, *value));
            accumulator + value
        });
        assert_eq!(result, Ok(6));
        assert_eq!(steps, vec![(1, 2), (3, 3)]);
    }

    #[rstest]
    fn reduce_single_element_returns_it_without_calling_iterator() {
        let result = reduce(&vec![42], |_, _| panic!("iterator must not run"));
        assert_eq!(result, Ok(42));
    }

    #[rstest]
    fn reduce_empty_is_an_error() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(
            reduce(&empty, |accumulator, _| accumulator),
            Err(EmptyReductionError)
        );
    }

    #[rstest]
    fn reduce_from_with_seed_folds_every_element() {
        assert_eq!(reduce_from(&vec![1, 2, 3], 10, |a, b| a + b), 16);
    }

    #[rstest]
    fn reduce_from_empty_returns_seed() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(reduce_from(&empty, 7, |a, b| a + b), 7);
    }

    #[rstest]
    fn reduce_from_is_left_associative() {
        let result = reduce_from(&["b", "c"], String::from("a"), |mut accumulator, value| {
            accumulator.push_str(value);
            accumulator
        });
        assert_eq!(result, "abc");
    }

    #[rstest]
    fn reduce_from_threads_a_move_only_accumulator() {
        struct Tally(Vec<u8>);

        let tally = reduce_from(&vec![3_u8, 1, 2], Tally(Vec::new()), |Tally(mut seen), value| {
            seen.push(*value);
            Tally(seen)
        });
        assert_eq!(tally.0, vec![3, 1, 2]);
    }

    #[rstest]
    fn reduce_over_mapping_uses_first_entry_as_seed() {
        let map: BTreeMap<&str, i32> = [("a", 1), ("b", 20), ("c", 300)].into_iter().collect();
        assert_eq!(reduce(&map, |a, b| a + b), Ok(321));
    }
}
