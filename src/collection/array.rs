//! Array helpers: slicing, reordering and set-like combinations.
//!
//! These operations carry no state. Where a helper needs to traverse or
//! test membership it goes through the iteration engine and the derived
//! predicates, so traversal order stays the engine's.

use rand::RngExt;

use super::derived::{contains, every, filter, map, some};
use super::engine::{each, reduce_from};

/// Returns the first element.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::first;
///
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub fn first<T>(array: &[T]) -> Option<&T> {
    array.first()
}

/// Returns up to `count` leading elements.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), &[1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 5), &[1, 2, 3]);
/// ```
#[inline]
pub fn first_n<T>(array: &[T], count: usize) -> &[T] {
    &array[..count.min(array.len())]
}

/// Returns the last element.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::last;
///
/// assert_eq!(last(&[1, 2, 3]), Some(&3));
/// ```
#[inline]
pub fn last<T>(array: &[T]) -> Option<&T> {
    array.last()
}

/// Returns up to `count` trailing elements.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), &[2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 5), &[1, 2, 3]);
/// ```
#[inline]
pub fn last_n<T>(array: &[T], count: usize) -> &[T] {
    &array[array.len().saturating_sub(count)..]
}

/// Returns a uniformly shuffled copy using the thread-local generator.
///
/// The input is left untouched.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::shuffle;
///
/// let original = [1, 2, 3, 4];
/// let mut shuffled = shuffle(&original);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, original);
/// ```
pub fn shuffle<T: Clone>(array: &[T]) -> Vec<T> {
    shuffle_with(array, &mut rand::rng())
}

/// Returns a shuffled copy using the given random number generator.
///
/// Fisher-Yates from the back: position `index` swaps with a uniformly
/// chosen position in `0..=index`.
pub fn shuffle_with<T: Clone, R: RngExt>(array: &[T], random: &mut R) -> Vec<T> {
    let mut shuffled = array.to_vec();
    for index in (1..shuffled.len()).rev() {
        let other = random.random_range(0..=index);
        shuffled.swap(index, other);
    }
    shuffled
}

/// Returns a copy sorted by the key `criterion` extracts.
///
/// The sort is stable: elements with equal keys keep their relative order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::sort_by;
///
/// let words = ["pear", "fig", "apple", "kiwi"];
/// assert_eq!(sort_by(&words, |word| word.len()), vec!["fig", "pear", "kiwi", "apple"]);
/// ```
pub fn sort_by<T, K, F>(array: &[T], criterion: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut sorted = array.to_vec();
    sorted.sort_by_key(criterion);
    sorted
}

/// Groups the elements at each index of every input into one row.
///
/// Rows run to the length of the longest input; shorter inputs contribute
/// `None` past their end.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::zip;
///
/// let zipped = zip(&[&['a', 'b', 'c'][..], &['x'][..]]);
/// assert_eq!(
///     zipped,
///     vec![
///         vec![Some('a'), Some('x')],
///         vec![Some('b'), None],
///         vec![Some('c'), None],
///     ]
/// );
/// ```
pub fn zip<T: Clone>(arrays: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = reduce_from(arrays, 0, |longest, array| longest.max(array.len()));
    (0..longest)
        .map(|index| map(arrays, |array| array.get(index).cloned()))
        .collect()
}

/// A tree of values: either a single item or a list of nested trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    /// A leaf value.
    Item(T),
    /// A nested list.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Creates a leaf.
    #[inline]
    pub const fn item(value: T) -> Self {
        Self::Item(value)
    }

    /// Creates a list.
    #[inline]
    pub const fn list(children: Vec<Self>) -> Self {
        Self::List(children)
    }
}

/// Flattens arbitrarily nested lists depth-first.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{flatten, Nested};
///
/// let nested = [
///     Nested::item(1),
///     Nested::list(vec![Nested::item(2), Nested::list(vec![Nested::item(3)])]),
///     Nested::list(vec![]),
///     Nested::item(4),
/// ];
/// assert_eq!(flatten(&nested), vec![1, 2, 3, 4]);
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    fn flatten_into<T: Clone>(nested: &[Nested<T>], flattened: &mut Vec<T>) {
        each(nested, |node, _, _| match node {
            Nested::Item(value) => flattened.push(value.clone()),
            Nested::List(children) => flatten_into(children, flattened),
        });
    }

    let mut flattened = Vec::new();
    flatten_into(nested, &mut flattened);
    flattened
}

/// Returns the elements of the first array that appear in every other
/// array, in the first array's order.
///
/// No arrays yield an empty result; a single array yields a copy of it.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::intersection;
///
/// let shared = intersection(&[&[1, 2, 3, 4][..], &[2, 4, 6][..], &[4, 2][..]]);
/// assert_eq!(shared, vec![2, 4]);
/// ```
pub fn intersection<T: PartialEq + Clone>(arrays: &[&[T]]) -> Vec<T> {
    let Some((head, others)) = arrays.split_first() else {
        return Vec::new();
    };
    filter(*head, |value| every(others, |other| contains(*other, value)))
}

/// Returns the elements of `array` that appear in none of `others`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::difference;
///
/// let remaining = difference(&[1, 2, 3, 4, 5], &[&[5, 2, 10][..], &[1][..]]);
/// assert_eq!(remaining, vec![3, 4]);
/// ```
pub fn difference<T: PartialEq + Clone>(array: &[T], others: &[&[T]]) -> Vec<T> {
    filter(array, |value| !some(others, |other| contains(*other, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    #[rstest]
    #[case(0, &[])]
    #[case(2, &[1, 2])]
    #[case(9, &[1, 2, 3])]
    fn first_n_clamps_to_length(#[case] count: usize, #[case] expected: &[i32]) {
        assert_eq!(first_n(&[1, 2, 3], count), expected);
    }

    #[rstest]
    #[case(0, &[])]
    #[case(1, &[3])]
    #[case(9, &[1, 2, 3])]
    fn last_n_clamps_to_length(#[case] count: usize, #[case] expected: &[i32]) {
        assert_eq!(last_n(&[1, 2, 3], count), expected);
    }

    #[rstest]
    fn last_of_empty_is_none() {
        assert_eq!(last::<u8>(&[]), None);
    }

    #[rstest]
    fn shuffle_with_is_a_permutation() {
        let original: Vec<i32> = (0..50).collect();
        let mut random = StdRng::seed_from_u64(7);
        let mut shuffled = shuffle_with(&original, &mut random);
        assert_eq!(shuffled.len(), original.len());
        shuffled.sort_unstable();
        assert_eq!(shuffled, original);
    }

    #[rstest]
    fn shuffle_with_same_seed_is_deterministic() {
        let original: Vec<i32> = (0..20).collect();
        let left = shuffle_with(&original, &mut StdRng::seed_from_u64(42));
        let right = shuffle_with(&original, &mut StdRng::seed_from_u64(42));
        assert_eq!(left, right);
    }

    #[rstest]
    fn shuffle_of_single_element_is_unchanged() {
        assert_eq!(shuffle(&["only"]), vec!["only"]);
    }

    #[rstest]
    fn sort_by_is_stable() {
        let pairs = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        assert_eq!(
            sort_by(&pairs, |pair| pair.0),
            vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]
        );
    }

    #[rstest]
    fn zip_of_nothing_is_empty() {
        let arrays: [&[i32]; 0] = [];
        assert!(zip(&arrays).is_empty());
    }

    #[rstest]
    fn flatten_empty_lists_disappear() {
        let nested: [Nested<i32>; 2] = [Nested::list(vec![]), Nested::list(vec![Nested::list(vec![])])];
        assert!(flatten(&nested).is_empty());
    }

    #[rstest]
    fn intersection_of_single_array_is_copy() {
        assert_eq!(intersection(&[&[3, 1, 3][..]]), vec![3, 1, 3]);
    }

    #[rstest]
    fn intersection_of_no_arrays_is_empty() {
        let arrays: [&[i32]; 0] = [];
        assert!(intersection(&arrays).is_empty());
    }

    #[rstest]
    fn difference_without_others_is_copy() {
        assert_eq!(difference(&[1, 2], &[]), vec![1, 2]);
    }
}
