//! The renderer.
//!
//! [`Render`] ties a type to its [`Layout`], and the layouts in turn call the
//! two write algorithms in this module:
//!
//! - **Iteration** (sequences, sets, arrays): prefix, elements with the
//!   separator only between neighbours, suffix.
//! - **Fixed arity** (pairs, tuples): the same shape, with positions unrolled
//!   at compile time.
//!
//! Elements are rendered through their own `Render` impl, so a tuple inside a
//! vector keeps its parentheses and a set inside a tuple keeps its braces.
//! Output goes straight to the sink; nothing is buffered beyond the current
//! scalar.
//!
//! ## Implementing `Render` for your own types
//!
//! A container only needs shared-reference iteration:
//!
//! ```rust
//! use pprint::{to_string, Render, Sequence};
//!
//! struct Bag(Vec<u32>);
//!
//! impl<'a> IntoIterator for &'a Bag {
//!     type Item = &'a u32;
//!     type IntoIter = std::slice::Iter<'a, u32>;
//!
//!     fn into_iter(self) -> Self::IntoIter {
//!         self.0.iter()
//!     }
//! }
//!
//! impl Render for Bag {
//!     type Kind = Sequence;
//! }
//!
//! assert_eq!(to_string(&Bag(vec![1, 2])).unwrap(), "[1, 2]");
//! ```
//!
//! Declaring `type Kind = Registered` instead renders with the type's own
//! [`Delimited`](crate::Delimited) entry.
//!
//! A leaf type only needs `Display`:
//!
//! ```rust
//! use pprint::{to_string, Render, Scalar};
//! use std::fmt;
//!
//! struct Celsius(f32);
//!
//! impl fmt::Display for Celsius {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "{}°C", self.0)
//!     }
//! }
//!
//! impl Render for Celsius {
//!     type Kind = Scalar;
//! }
//!
//! assert_eq!(to_string(&vec![Celsius(21.5)]).unwrap(), "[21.5°C]");
//! ```

use crate::classify::{
    Category, FixedArray, Iterated, Layout, Pair, Rebracket, Registered, Scalar, Sequence, Set,
    Transparent, Tuple,
};
use crate::error::Result;
use crate::options::{DelimiterSet, Delimiters};
use crate::registry::Delimited;
use crate::sink::Sink;
use crate::width::CharWidth;
use indexmap::{IndexMap, IndexSet};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// A type that can be rendered into a [`Sink`].
pub trait Render {
    /// The layout marker naming this type's structure.
    type Kind: Layout<Self>;

    /// Writes `self` into `sink`.
    fn render<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        <Self::Kind as Layout<Self>>::render(self, sink)
    }

    #[doc(hidden)]
    const TEXT_ARRAY: bool = false;

    #[doc(hidden)]
    fn render_array<S: Sink + ?Sized, const N: usize>(items: &[Self; N], sink: &mut S) -> Result<()>
    where
        Self: Sized,
    {
        let set = <[Self; N] as Delimited>::DELIMITERS;
        write_iter(items, <S::Width as CharWidth>::select(&set), sink)
    }
}

#[inline]
fn write_token<S: Sink + ?Sized>(
    sink: &mut S,
    token: &Option<<S::Width as CharWidth>::Token>,
) -> Result<()> {
    match token {
        Some(token) => sink.write_token(token),
        None => Ok(()),
    }
}

/// Writes `items` bracketed and separated by `delimiters`.
fn write_iter<I, S>(items: I, delimiters: &Delimiters<S::Width>, sink: &mut S) -> Result<()>
where
    I: IntoIterator,
    I::Item: Render,
    S: Sink + ?Sized,
{
    write_token(sink, &delimiters.prefix)?;
    let mut items = items.into_iter().peekable();
    while let Some(item) = items.next() {
        item.render(sink)?;
        if items.peek().is_some() {
            write_token(sink, &delimiters.separator)?;
        }
    }
    write_token(sink, &delimiters.suffix)
}

impl<T: fmt::Display + ?Sized> Layout<T> for Scalar {
    fn category() -> Category {
        Category::Scalar
    }

    fn render<S: Sink + ?Sized>(value: &T, sink: &mut S) -> Result<()> {
        sink.write_display(&value)
    }
}

macro_rules! iterated_layouts {
    ($($kind:ident => $set:ident),+ $(,)?) => {$(
        impl<C> Layout<C> for $kind
        where
            C: ?Sized,
            for<'a> &'a C: IntoIterator,
            for<'a> <&'a C as IntoIterator>::Item: Render,
        {
            fn category() -> Category {
                <$kind as Iterated>::CATEGORY
            }

            fn render<S: Sink + ?Sized>(value: &C, sink: &mut S) -> Result<()> {
                let set = DelimiterSet::$set;
                write_iter(value, <S::Width as CharWidth>::select(&set), sink)
            }
        }

        impl<C> Rebracket<C> for $kind
        where
            C: ?Sized,
            for<'a> &'a C: IntoIterator,
            for<'a> <&'a C as IntoIterator>::Item: Render,
        {
            fn render_with<S: Sink + ?Sized>(
                value: &C,
                delimiters: &Delimiters<S::Width>,
                sink: &mut S,
            ) -> Result<()> {
                write_iter(value, delimiters, sink)
            }
        }
    )+};
}

iterated_layouts!(Sequence => SEQUENCE, Set => SET);

impl<C, K> Layout<C> for Registered<K>
where
    C: Delimited + ?Sized,
    K: Iterated,
    for<'a> &'a C: IntoIterator,
    for<'a> <&'a C as IntoIterator>::Item: Render,
{
    fn category() -> Category {
        K::CATEGORY
    }

    fn render<S: Sink + ?Sized>(value: &C, sink: &mut S) -> Result<()> {
        let set = C::DELIMITERS;
        write_iter(value, <S::Width as CharWidth>::select(&set), sink)
    }
}

impl<C, K> Rebracket<C> for Registered<K>
where
    C: Delimited + ?Sized,
    K: Iterated,
    for<'a> &'a C: IntoIterator,
    for<'a> <&'a C as IntoIterator>::Item: Render,
{
    fn render_with<S: Sink + ?Sized>(
        value: &C,
        delimiters: &Delimiters<S::Width>,
        sink: &mut S,
    ) -> Result<()> {
        write_iter(value, delimiters, sink)
    }
}

impl<T: Render, const N: usize> Layout<[T; N]> for FixedArray {
    fn category() -> Category {
        if T::TEXT_ARRAY {
            Category::Scalar
        } else {
            Category::FixedArray
        }
    }

    fn render<S: Sink + ?Sized>(value: &[T; N], sink: &mut S) -> Result<()> {
        T::render_array(value, sink)
    }
}

// Character arrays are text, so they keep ignoring delimiters.
impl<T: Render, const N: usize> Rebracket<[T; N]> for FixedArray {
    fn render_with<S: Sink + ?Sized>(
        value: &[T; N],
        delimiters: &Delimiters<S::Width>,
        sink: &mut S,
    ) -> Result<()> {
        if T::TEXT_ARRAY {
            T::render_array(value, sink)
        } else {
            write_iter(value, delimiters, sink)
        }
    }
}

macro_rules! transparent_impls {
    ($(<$($lt:lifetime),*> $ptr:ty),+ $(,)?) => {$(
        impl<$($lt,)* T: Render + ?Sized> Render for $ptr {
            type Kind = Transparent;
        }

        impl<$($lt,)* T: Render + ?Sized> Layout<$ptr> for Transparent {
            fn category() -> Category {
                <T::Kind as Layout<T>>::category()
            }

            fn render<S: Sink + ?Sized>(value: &$ptr, sink: &mut S) -> Result<()> {
                T::render(value, sink)
            }
        }

        impl<$($lt,)* T> Rebracket<$ptr> for Transparent
        where
            T: Render + ?Sized,
            T::Kind: Rebracket<T>,
        {
            fn render_with<S: Sink + ?Sized>(
                value: &$ptr,
                delimiters: &Delimiters<S::Width>,
                sink: &mut S,
            ) -> Result<()> {
                <T::Kind as Rebracket<T>>::render_with(value, delimiters, sink)
            }
        }
    )+};
}

transparent_impls!(<'p> &'p T, <'p> &'p mut T, <> Box<T>, <> Rc<T>, <> Arc<T>);

impl<'p, B> Render for Cow<'p, B>
where
    B: Render + ToOwned + ?Sized,
{
    type Kind = Transparent;
}

impl<'p, B> Layout<Cow<'p, B>> for Transparent
where
    B: Render + ToOwned + ?Sized,
{
    fn category() -> Category {
        <B::Kind as Layout<B>>::category()
    }

    fn render<S: Sink + ?Sized>(value: &Cow<'p, B>, sink: &mut S) -> Result<()> {
        B::render(value, sink)
    }
}

impl<'p, B> Rebracket<Cow<'p, B>> for Transparent
where
    B: Render + ToOwned + ?Sized,
    B::Kind: Rebracket<B>,
{
    fn render_with<S: Sink + ?Sized>(
        value: &Cow<'p, B>,
        delimiters: &Delimiters<S::Width>,
        sink: &mut S,
    ) -> Result<()> {
        <B::Kind as Rebracket<B>>::render_with(value, delimiters, sink)
    }
}

macro_rules! scalar_impls {
    ($($ty:ty),+ $(,)?) => {$(
        impl Render for $ty {
            type Kind = Scalar;
        }
    )+};
}

scalar_impls!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, str, String,
);

scalar_impls!(
    num_bigint::BigInt,
    num_bigint::BigUint,
    chrono::NaiveDate,
    chrono::NaiveTime,
    chrono::NaiveDateTime,
    chrono::Duration,
);

impl<Tz> Render for chrono::DateTime<Tz>
where
    Tz: chrono::TimeZone,
    Tz::Offset: fmt::Display,
{
    type Kind = Scalar;
}

impl Render for char {
    type Kind = Scalar;

    const TEXT_ARRAY: bool = true;

    // Fixed character buffers are NUL-padded; the text ends at the first NUL.
    fn render_array<S: Sink + ?Sized, const N: usize>(items: &[char; N], sink: &mut S) -> Result<()> {
        for c in items.iter().take_while(|c| **c != '\0') {
            sink.write_display(c)?;
        }
        Ok(())
    }
}

macro_rules! sequence_impls {
    ($kind:ty => $($ty:ident<$($param:ident),+>),+ $(,)?) => {$(
        impl<$($param),+> Render for $ty<$($param),+>
        where
            Self: Delimited,
            for<'a> &'a Self: IntoIterator,
            for<'a> <&'a Self as IntoIterator>::Item: Render,
        {
            type Kind = $kind;
        }
    )+};
}

sequence_impls!(Registered =>
    Vec<T>, VecDeque<T>, LinkedList<T>, BinaryHeap<T>,
    BTreeMap<K, V>, HashMap<K, V, H>, IndexMap<K, V, H>,
);

sequence_impls!(Registered<Set> => BTreeSet<T>, HashSet<T, H>, IndexSet<T, H>);

impl<T: Render> Render for [T] {
    type Kind = Registered;
}

impl<T: Render, const N: usize> Render for [T; N] {
    type Kind = FixedArray;
}

macro_rules! tuple_impls {
    ($($kind:ident $category:expr => ($first_idx:tt $first:ident $($idx:tt $name:ident)*))+) => {$(
        impl<$first: Render, $($name: Render),*> Render for ($first, $($name,)*) {
            type Kind = $kind;
        }

        impl<$first: Render, $($name: Render),*> Layout<($first, $($name,)*)> for $kind {
            fn category() -> Category {
                $category
            }

            fn render<S: Sink + ?Sized>(value: &($first, $($name,)*), sink: &mut S) -> Result<()> {
                let set = <($first, $($name,)*) as Delimited>::DELIMITERS;
                <Self as Rebracket<($first, $($name,)*)>>::render_with(
                    value,
                    <S::Width as CharWidth>::select(&set),
                    sink,
                )
            }
        }

        impl<$first: Render, $($name: Render),*> Rebracket<($first, $($name,)*)> for $kind {
            fn render_with<S: Sink + ?Sized>(
                value: &($first, $($name,)*),
                delimiters: &Delimiters<S::Width>,
                sink: &mut S,
            ) -> Result<()> {
                write_token(sink, &delimiters.prefix)?;
                value.$first_idx.render(sink)?;
                $(
                    write_token(sink, &delimiters.separator)?;
                    value.$idx.render(sink)?;
                )*
                write_token(sink, &delimiters.suffix)
            }
        }
    )+};
}

tuple_impls! {
    Tuple Category::FixedArity(1) => (0 T0)
    Pair Category::PairLike => (0 T0 1 T1)
    Tuple Category::FixedArity(3) => (0 T0 1 T1 2 T2)
    Tuple Category::FixedArity(4) => (0 T0 1 T1 2 T2 3 T3)
    Tuple Category::FixedArity(5) => (0 T0 1 T1 2 T2 3 T3 4 T4)
    Tuple Category::FixedArity(6) => (0 T0 1 T1 2 T2 3 T3 4 T4 5 T5)
    Tuple Category::FixedArity(7) => (0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6)
    Tuple Category::FixedArity(8) => (0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7)
    Tuple Category::FixedArity(9) => (0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8)
    Tuple Category::FixedArity(10) => (0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8 9 T9)
    Tuple Category::FixedArity(11) => (0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8 9 T9 10 T10)
    Tuple Category::FixedArity(12) => (0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8 9 T9 10 T10 11 T11)
}

/// Renders any `Display` value as a scalar leaf.
///
/// Created by [`display`]. Useful for types that implement `Display` but
/// have no `Render` impl of their own.
pub struct Displayed<'a, T: ?Sized>(&'a T);

/// Wraps `value` so it renders through its `Display` impl.
///
/// # Examples
///
/// ```rust
/// use pprint::{display, to_string};
/// use std::net::Ipv4Addr;
///
/// let hosts = vec![display(&Ipv4Addr::LOCALHOST)];
/// assert_eq!(to_string(&hosts).unwrap(), "[127.0.0.1]");
/// ```
pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Displayed<'_, T> {
    Displayed(value)
}

impl<T: fmt::Display + ?Sized> fmt::Display for Displayed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl<T: fmt::Display + ?Sized> Render for Displayed<'_, T> {
    type Kind = Scalar;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_string;

    #[test]
    fn test_separator_only_between_elements() {
        assert_eq!(to_string(&Vec::<i32>::new()).unwrap(), "[]");
        assert_eq!(to_string(&vec![5]).unwrap(), "[5]");
        assert_eq!(to_string(&vec![1, 2, 3]).unwrap(), "[1, 2, 3]");
    }

    #[test]
    fn test_tuple_positions() {
        assert_eq!(to_string(&(7,)).unwrap(), "(7)");
        assert_eq!(to_string(&(1, "a")).unwrap(), "(1, a)");
        assert_eq!(to_string(&(1, 2.5, 'x', true)).unwrap(), "(1, 2.5, x, true)");
    }

    #[test]
    fn test_nested_elements_keep_their_convention() {
        let set: BTreeSet<i32> = [2, 1].into_iter().collect();
        assert_eq!(to_string(&(vec![1], set)).unwrap(), "([1], {1, 2})");
    }

    #[test]
    fn test_char_arrays_are_text() {
        assert_eq!(to_string(&['h', 'i', '\0', '\0']).unwrap(), "hi");
        assert_eq!(to_string(&vec![['o', 'k']]).unwrap(), "[ok]");
        assert_eq!(to_string(&vec!['o', 'k']).unwrap(), "[o, k]");
    }

    #[test]
    fn test_byte_arrays_are_numbers() {
        assert_eq!(to_string(&[104u8, 105]).unwrap(), "[104, 105]");
    }

    #[test]
    fn test_pointers_are_transparent() {
        let shared: Rc<[i32]> = Rc::from(vec![1, 2]);
        assert_eq!(to_string(&shared).unwrap(), "[1, 2]");
        assert_eq!(to_string(&Box::new((1, 2))).unwrap(), "(1, 2)");
        let cow: Cow<'_, str> = Cow::Borrowed("text");
        assert_eq!(to_string(&vec![cow]).unwrap(), "[text]");
    }

    #[test]
    fn test_ecosystem_scalars() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(to_string(&vec![date]).unwrap(), "[2024-01-15]");

        let big: num_bigint::BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(
            to_string(&(big, 1)).unwrap(),
            "(123456789012345678901234567890, 1)"
        );
    }
}
