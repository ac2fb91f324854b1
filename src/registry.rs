//! The delimiter registry.
//!
//! A type registers its delimiter convention through [`Delimited`]. The
//! trait's single entry defaults to the sequence convention. Set-like types
//! and tuples override the entry here; downstream crates add entries for
//! their own types the same way, without touching anything in this module.
//!
//! Registration is optional. A container rendered with the
//! [`Sequence`](crate::Sequence) or [`Set`](crate::Set) layout has no entry
//! and falls back to the default triple; only the
//! [`Registered`](crate::Registered) layout reads the entry.
//!
//! ```rust
//! use pprint::{delimiters, resolve, DelimiterSet, Delimited, Narrow};
//!
//! struct Ring;
//!
//! impl Delimited for Ring {
//!     const DELIMITERS: DelimiterSet = delimiters!("<", " ", ">");
//! }
//!
//! assert_eq!(resolve::<Ring, Narrow>().prefix.as_deref(), Some("<"));
//! assert_eq!(resolve::<Vec<u8>, Narrow>().prefix.as_deref(), Some("["));
//! ```

use crate::options::{DelimiterSet, Delimiters};
use crate::width::CharWidth;
use indexmap::{IndexMap, IndexSet};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

/// A registry entry: the delimiter convention of a type.
pub trait Delimited {
    const DELIMITERS: DelimiterSet = DelimiterSet::SEQUENCE;
}

/// Looks up the triple registered for `T` in width `W`.
pub fn resolve<T, W>() -> Delimiters<W>
where
    T: Delimited + ?Sized,
    W: CharWidth,
{
    W::select(&T::DELIMITERS).clone()
}

impl<T> Delimited for [T] {}
impl<T, const N: usize> Delimited for [T; N] {}
impl<T> Delimited for Vec<T> {}
impl<T> Delimited for VecDeque<T> {}
impl<T> Delimited for LinkedList<T> {}
impl<T> Delimited for BinaryHeap<T> {}
impl<K, V> Delimited for BTreeMap<K, V> {}
impl<K, V, S> Delimited for HashMap<K, V, S> {}
impl<K, V, S> Delimited for IndexMap<K, V, S> {}

impl<T> Delimited for BTreeSet<T> {
    const DELIMITERS: DelimiterSet = DelimiterSet::SET;
}

impl<T, S> Delimited for HashSet<T, S> {
    const DELIMITERS: DelimiterSet = DelimiterSet::SET;
}

impl<T, S> Delimited for IndexSet<T, S> {
    const DELIMITERS: DelimiterSet = DelimiterSet::SET;
}

macro_rules! tuple_delimiters {
    ($(($($name:ident),+))+) => {$(
        impl<$($name),+> Delimited for ($($name,)+) {
            const DELIMITERS: DelimiterSet = DelimiterSet::TUPLE;
        }
    )+};
}

tuple_delimiters! {
    (T0)
    (T0, T1)
    (T0, T1, T2)
    (T0, T1, T2, T3)
    (T0, T1, T2, T3, T4)
    (T0, T1, T2, T3, T4, T5)
    (T0, T1, T2, T3, T4, T5, T6)
    (T0, T1, T2, T3, T4, T5, T6, T7)
    (T0, T1, T2, T3, T4, T5, T6, T7, T8)
    (T0, T1, T2, T3, T4, T5, T6, T7, T8, T9)
    (T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10)
    (T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11)
}
