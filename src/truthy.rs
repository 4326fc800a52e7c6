//! Truthiness - the single boolean coercion rule.
//!
//! A value is *falsy* when it is empty, zero, or absent; every other value
//! is *truthy*. This rule backs the default iterator of `every`/`some` and
//! the cache-presence check of `memoize`.
//!
//! | Type | Falsy when |
//! |---|---|
//! | `bool` | `false` |
//! | integers | `0` |
//! | floats | `0.0`, `-0.0` or `NaN` |
//! | `char` | `'\0'` |
//! | `String`, `&str` | empty |
//! | `Vec<T>`, `[T]`, `VecDeque<T>` | empty |
//! | `HashMap`, `BTreeMap` | empty |
//! | `Option<T>` | `None`, or `Some(v)` with `v` falsy |
//! | `()` | always |
//!
//! # Examples
//!
//! ```rust
//! use underbar::truthy::Truthy;
//!
//! assert!(1_i32.is_truthy());
//! assert!(!0_u8.is_truthy());
//! assert!(!"".is_truthy());
//! assert!("text".is_truthy());
//! assert!(!None::<i32>.is_truthy());
//! assert!(!Some(0_i64).is_truthy());
//! ```

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Types that coerce to a boolean.
pub trait Truthy {
    /// Returns `true` unless the value is empty, zero, or absent.
    fn is_truthy(&self) -> bool;

    /// The negation of [`is_truthy`](Truthy::is_truthy).
    #[inline]
    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

macro_rules! impl_truthy_for_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl Truthy for $float {
                #[inline]
                fn is_truthy(&self) -> bool {
                    !self.is_nan() && *self != 0.0
                }
            }
        )*
    };
}

impl_truthy_for_float!(f32, f64);

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != '\0'
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for VecDeque<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, S> Truthy for HashMap<K, V, S> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> Truthy for BTreeMap<K, V> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Rc<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Arc<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
