//! Small combinators shared by the decorators.

/// Returns the value unchanged.
///
/// `every_truthy` and `some_truthy` test each element as if `identity`
/// had been passed as the predicate. It is also a convenient callable to
/// wrap when only the decorator behavior matters.
///
/// # Examples
///
/// ```rust
/// use underbar::function::{identity, once};
///
/// assert_eq!(identity(42), 42);
///
/// let first = once(identity::<&str>);
/// assert_eq!(first.call("kept"), "kept");
/// assert_eq!(first.call("ignored"), "kept");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}
