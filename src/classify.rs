//! Structural classification.
//!
//! A renderable type names its structure through [`Render::Kind`]: one of the
//! layout markers below. The marker implements [`Layout`] for the type only
//! when the type actually has that structure, so a wrong declaration is a
//! build error rather than a runtime surprise:
//!
//! | Marker | Requirement | [`Category`] |
//! |---|---|---|
//! | [`Scalar`] | `T: Display` | `Scalar` |
//! | [`Sequence`] | `&T: IntoIterator`, items renderable | `Sequence` |
//! | [`Set`] | as `Sequence` | `Set` |
//! | [`Registered<K>`](Registered) | as `Sequence`, plus `T: Delimited` | `K`'s |
//! | [`Pair`] | two-element tuple | `PairLike` |
//! | [`Tuple`] | tuple of any other arity up to 12 | `FixedArity(n)` |
//! | [`FixedArray`] | `[T; N]` | `FixedArray`, or `Scalar` for character arrays |
//! | [`Transparent`] | reference or smart pointer | the pointee's |
//! | [`Overridden`] | [`WithDelimiters`](crate::WithDelimiters) | the wrapped value's |
//!
//! `Sequence` and `Set` need no registry entry: they write the default
//! `[a, b]` and `{a, b}` triples. `Registered` looks the triple up in the
//! type's [`Delimited`](crate::Delimited) entry instead.
//!
//! [`Render::Kind`]: crate::Render::Kind

use crate::error::Result;
use crate::options::Delimiters;
use crate::render::Render;
use crate::sink::Sink;
use std::marker::PhantomData;

/// The structural category of a type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Rendered through the sink's native formatting, no recursion.
    Scalar,
    /// Iterable, bracketed by the registry entry (`[a, b]` by default).
    Sequence,
    /// Iterable with set semantics (`{a, b}`).
    Set,
    /// Two positional elements (`(a, b)`).
    PairLike,
    /// A fixed number of positional elements.
    FixedArity(usize),
    /// A fixed-size array, bracketed like a sequence.
    FixedArray,
}

impl Category {
    /// Whether values of this category are walked with a cursor.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Category::Sequence | Category::Set | Category::FixedArray)
    }

    /// Whether values of this category have a compile-time arity.
    #[must_use]
    pub const fn is_product(&self) -> bool {
        matches!(self, Category::PairLike | Category::FixedArity(_))
    }

    /// Number of positions of a product category.
    #[must_use]
    pub const fn arity(&self) -> Option<usize> {
        match self {
            Category::PairLike => Some(2),
            Category::FixedArity(n) => Some(*n),
            _ => None,
        }
    }
}

/// How values of `T` are written.
pub trait Layout<T: ?Sized> {
    fn category() -> Category;

    fn render<S: Sink + ?Sized>(value: &T, sink: &mut S) -> Result<()>;
}

/// Layouts that can write a value with caller-supplied delimiters.
///
/// Every structured layout implements this; scalars do not. Used by
/// [`WithDelimiters`](crate::WithDelimiters).
pub trait Rebracket<T: ?Sized>: Layout<T> {
    fn render_with<S: Sink + ?Sized>(
        value: &T,
        delimiters: &Delimiters<S::Width>,
        sink: &mut S,
    ) -> Result<()>;
}

/// The category a [`Registered`] container reports.
pub trait Iterated {
    const CATEGORY: Category;
}

/// Native scalar formatting.
#[derive(Debug)]
pub enum Scalar {}

/// Iteration with the default sequence triple.
#[derive(Debug)]
pub enum Sequence {}

/// Iteration with the default set triple.
#[derive(Debug)]
pub enum Set {}

impl Iterated for Sequence {
    const CATEGORY: Category = Category::Sequence;
}

impl Iterated for Set {
    const CATEGORY: Category = Category::Set;
}

/// Iteration with the type's own [`Delimited`](crate::Delimited) entry,
/// reported as `K` (a sequence unless stated otherwise).
#[derive(Debug)]
pub struct Registered<K = Sequence> {
    _kind: PhantomData<fn() -> K>,
}

/// Two-element tuples.
#[derive(Debug)]
pub enum Pair {}

/// Tuples of every other arity.
#[derive(Debug)]
pub enum Tuple {}

/// Fixed-size arrays.
#[derive(Debug)]
pub enum FixedArray {}

/// References and smart pointers, rendered as their target.
#[derive(Debug)]
pub enum Transparent {}

/// A value paired with caller-supplied delimiters.
#[derive(Debug)]
pub enum Overridden {}

/// Returns the structural category of `T`.
///
/// # Examples
///
/// ```rust
/// use pprint::{classify, Category};
/// use std::collections::BTreeSet;
///
/// assert_eq!(classify::<i32>(), Category::Scalar);
/// assert_eq!(classify::<Vec<i32>>(), Category::Sequence);
/// assert_eq!(classify::<BTreeSet<i32>>(), Category::Set);
/// assert_eq!(classify::<(i32, &str)>(), Category::PairLike);
/// assert_eq!(classify::<(i32, i32, i32)>(), Category::FixedArity(3));
/// assert_eq!(classify::<[u8; 4]>(), Category::FixedArray);
/// assert_eq!(classify::<[char; 4]>(), Category::Scalar);
/// ```
#[must_use]
pub fn classify<T: Render + ?Sized>() -> Category {
    <T::Kind as Layout<T>>::category()
}
