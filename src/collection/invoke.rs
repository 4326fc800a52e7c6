//! Invoking a function or a named method on every element.
//!
//! There is no implicit receiver binding in Rust, so the element a method
//! runs on is always passed explicitly as the first argument. Named
//! methods are looked up through the [`Receiver`] trait.

use super::derived::map;
use super::engine::reduce_from;
use super::traverse::Collection;
use crate::error::NotCallableError;

/// A method that runs on a receiver of type `T` with arguments `A`.
pub type Method<T, A, R> = fn(&T, &A) -> R;

/// Types whose methods can be resolved by name.
///
/// Returning `None` means the key names nothing callable on this receiver,
/// which makes [`invoke`] fail with [`NotCallableError`].
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{Method, Receiver};
///
/// struct Counter(i32);
///
/// impl Receiver<i32, i32> for Counter {
///     fn resolve(&self, key: &str) -> Option<Method<Self, i32, i32>> {
///         match key {
///             "add" => Some(|counter, amount| counter.0 + amount),
///             _ => None,
///         }
///     }
/// }
///
/// let add = Counter(1).resolve("add").unwrap();
/// assert_eq!(add(&Counter(1), &2), 3);
/// ```
pub trait Receiver<A, R>: Sized {
    /// Resolves `key` to a method on this receiver.
    fn resolve(&self, key: &str) -> Option<Method<Self, A, R>>;
}

/// What [`invoke`] should call on each element.
pub enum Invoker<'a, T, A, R> {
    /// Call this function with the element as receiver.
    Function(&'a dyn Fn(&T, &A) -> R),
    /// Resolve this key on each element and call the result.
    Key(&'a str),
}

impl<'a, T, A, R> From<&'a str> for Invoker<'a, T, A, R> {
    fn from(key: &'a str) -> Self {
        Self::Key(key)
    }
}

impl<T, A, R> std::fmt::Debug for Invoker<'_, T, A, R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Function(_) => formatter.write_str("Invoker::Function(..)"),
            Self::Key(key) => formatter.debug_tuple("Invoker::Key").field(key).finish(),
        }
    }
}

/// Calls the invoker on every element with `args`, collecting the results.
///
/// # Errors
///
/// Returns [`NotCallableError`] as soon as an element does not resolve an
/// [`Invoker::Key`] to a method. Elements after the failing one are not
/// invoked.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{invoke, Invoker, Method, Receiver};
///
/// #[derive(Clone)]
/// struct Word(String);
///
/// impl Receiver<usize, String> for Word {
///     fn resolve(&self, key: &str) -> Option<Method<Self, usize, String>> {
///         match key {
///             "repeat" => Some(|word, times| word.0.repeat(*times)),
///             _ => None,
///         }
///     }
/// }
///
/// let words = vec![Word("ab".into()), Word("c".into())];
/// assert_eq!(
///     invoke(&words, Invoker::Key("repeat"), &2_usize),
///     Ok(vec!["abab".to_string(), "cc".to_string()])
/// );
///
/// let first: &dyn Fn(&Word, &usize) -> String = &|word, _| word.0[..1].to_string();
/// assert_eq!(
///     invoke(&words, Invoker::Function(first), &0_usize),
///     Ok(vec!["a".to_string(), "c".to_string()])
/// );
///
/// let missing: Result<Vec<String>, _> = invoke(&words, "shout".into(), &1_usize);
/// assert!(missing.is_err());
/// ```
pub fn invoke<C, A, R>(
    collection: &C,
    invoker: Invoker<'_, C::Item, A, R>,
    args: &A,
) -> Result<Vec<R>, NotCallableError>
where
    C: Collection + ?Sized,
    C::Item: Receiver<A, R>,
{
    match invoker {
        Invoker::Function(function) => Ok(invoke_function(collection, function, args)),
        Invoker::Key(key) => reduce_from(
            collection,
            Ok(Vec::with_capacity(collection.size())),
            |results: Result<Vec<R>, NotCallableError>, receiver| {
                let mut results = results?;
                let method = receiver
                    .resolve(key)
                    .ok_or_else(|| NotCallableError::new(key))?;
                results.push(method(receiver, args));
                Ok(results)
            },
        ),
    }
}

/// Calls `function(element, args)` on every element.
///
/// The total form of [`invoke`] for the function case: it needs no
/// [`Receiver`] implementation and cannot fail.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::invoke_function;
///
/// let scaled = invoke_function(&vec![1, 2, 3], |value, factor| value * factor, &3);
/// assert_eq!(scaled, vec![3, 6, 9]);
/// ```
pub fn invoke_function<C, A, R, F>(collection: &C, function: F, args: &A) -> Vec<R>
where
    C: Collection + ?Sized,
    F: Fn(&C::Item, &A) -> R,
{
    map(collection, |receiver| function(receiver, args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    struct Account {
        balance: i64,
        frozen: bool,
    }

    impl Receiver<i64, i64> for Account {
        fn resolve(&self, key: &str) -> Option<Method<Self, i64, i64>> {
            match key {
                "deposit" => Some(|account, amount| account.balance + amount),
                "withdraw" if !self.frozen => Some(|account, amount| account.balance - amount),
                _ => None,
            }
        }
    }

    fn accounts() -> Vec<Account> {
        vec![
            Account {
                balance: 10,
                frozen: false,
            },
            Account {
                balance: 20,
                frozen: false,
            },
        ]
    }

    #[rstest]
    fn invoke_by_key_calls_resolved_method() {
        assert_eq!(
            invoke(&accounts(), Invoker::Key("deposit"), &5_i64),
            Ok(vec![15, 25])
        );
    }

    #[rstest]
    fn invoke_by_function_binds_each_element() {
        let double: &dyn Fn(&Account, &i64) -> i64 = &|account, _| account.balance * 2;
        assert_eq!(
            invoke(&accounts(), Invoker::Function(double), &0_i64),
            Ok(vec![20, 40])
        );
    }

    #[rstest]
    fn invoke_unknown_key_is_not_callable() {
        assert_eq!(
            invoke(&accounts(), Invoker::Key("close"), &0_i64),
            Err(NotCallableError::new("close"))
        );
    }

    #[rstest]
    fn invoke_fails_on_first_receiver_without_method() {
        let mut mixed = accounts();
        mixed[1].frozen = true;
        assert_eq!(
            invoke(&mixed, Invoker::Key("withdraw"), &1_i64),
            Err(NotCallableError::new("withdraw"))
        );
    }

    #[rstest]
    fn invoke_on_empty_collection_succeeds() {
        let empty: Vec<Account> = Vec::new();
        assert_eq!(
            invoke(&empty, Invoker::Key("missing"), &0_i64),
            Ok(Vec::<i64>::new())
        );
    }

    #[rstest]
    fn invoke_function_calls_once_per_element() {
        let calls = Cell::new(0);
        let lengths = invoke_function(
            &vec!["a", "bb", "ccc"],
            |word, _: &()| {
                calls.set(calls.get() + 1);
                word.len()
            },
            &(),
        );
        assert_eq!(lengths, vec![1, 2, 3]);
        assert_eq!(calls.get(), 3);
    }
}
