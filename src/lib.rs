//! # pprint
//!
//! Structural pretty-printing for Rust values.
//!
//! `pprint` looks at the *shape* of a type and writes it with the bracket
//! convention that shape calls for, recursing into every element:
//!
//! | Shape | Example output |
//! |---|---|
//! | Sequence (`Vec`, `VecDeque`, slices, maps as lists of pairs) | `[1, 2, 3]` |
//! | Set (`BTreeSet`, `HashSet`, `IndexSet`) | `{1, 2, 3}` |
//! | Pair / tuple | `(1, a)` |
//! | Fixed-size array | `[1, 2, 4]` |
//! | Scalar (numbers, text, dates, big integers) | native `Display` output |
//!
//! ## Quick Start
//!
//! ```rust
//! use pprint::{pretty, to_string};
//! use std::collections::BTreeMap;
//!
//! let pairs = vec![(1, 2), (3, 4)];
//! assert_eq!(to_string(&pairs).unwrap(), "[(1, 2), (3, 4)]");
//!
//! let mut index = BTreeMap::new();
//! index.insert("a", vec![1]);
//! index.insert("b", vec![]);
//! assert_eq!(format!("{}", pretty(&index)), "[(a, [1]), (b, [])]");
//! ```
//!
//! ## Narrow and wide output
//!
//! Every delimiter convention exists in UTF-8 and UTF-16. [`to_string`] and
//! [`to_writer`] produce UTF-8; [`to_wide`] produces UTF-16 code units. The
//! rendering algorithm is the same for both.
//!
//! ## Extending
//!
//! - New container types implement [`Render`] with `type Kind = Sequence` (or
//!   `Set`). To use their own brackets they declare `type Kind = Registered`
//!   and add a [`Delimited`] registry entry.
//! - [`with_delimiters`] overrides the convention for a single render.
//! - [`wrap_array`] renders raw pointer + length memory.
//! - [`display`] renders any `Display` type as a scalar leaf.
//!
//! ## Guarantees
//!
//! - Classification and delimiter lookup are resolved at compile time
//! - Rendering never mutates its input and holds no global state
//! - Output is written incrementally; memory use grows with nesting depth only
//! - Sink failures are returned as [`Error`], never panics

#[macro_use]
mod macros;

pub mod array;
pub mod classify;
pub mod custom;
pub mod error;
pub mod options;
pub mod registry;
pub mod render;
pub mod sink;
pub mod width;

pub use array::{wrap_array, ArrayView};
pub use classify::{
    classify, Category, FixedArray, Iterated, Layout, Overridden, Pair, Rebracket, Registered,
    Scalar, Sequence, Set, Transparent, Tuple,
};
pub use custom::{custom_delimiters, with_delimiters, WithDelimiters};
pub use error::{Error, Result};
pub use options::{DelimiterConfig, DelimiterSet, Delimiters};
pub use registry::{resolve, Delimited};
pub use render::{display, Displayed, Render};
pub use sink::{IoSink, Sink};
pub use width::{CharWidth, Narrow, Wide};

use std::fmt;
use std::io;

/// Renders `value` into `sink`.
///
/// # Errors
///
/// Returns an error if the sink rejects output.
pub fn render<T, S>(value: &T, sink: &mut S) -> Result<()>
where
    T: Render + ?Sized,
    S: Sink + ?Sized,
{
    value.render(sink)
}

/// Renders `value` to a new `String`.
///
/// # Examples
///
/// ```rust
/// use pprint::to_string;
/// use std::collections::BTreeSet;
///
/// let set: BTreeSet<_> = [3, 1, 2].into_iter().collect();
/// assert_eq!(to_string(&set).unwrap(), "{1, 2, 3}");
/// ```
///
/// # Errors
///
/// Rendering into a `String` cannot fail unless a `Display` impl of an
/// element reports an error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: Render + ?Sized,
{
    let mut output = String::with_capacity(64);
    value.render(&mut output)?;
    Ok(output)
}

/// Renders `value` as UTF-16 code units using the wide delimiter entries.
///
/// # Examples
///
/// ```rust
/// use pprint::to_wide;
///
/// let units = to_wide(&(1, "a")).unwrap();
/// assert_eq!(String::from_utf16(&units).unwrap(), "(1, a)");
/// ```
///
/// # Errors
///
/// Fails only if a `Display` impl of an element reports an error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_wide<T>(value: &T) -> Result<Vec<u16>>
where
    T: Render + ?Sized,
{
    let mut output = Vec::with_capacity(64);
    value.render(&mut output)?;
    Ok(output)
}

/// Renders `value` with `delimiters` in place of its registry entry.
///
/// # Examples
///
/// ```rust
/// use pprint::{to_string_with_delimiters, DelimiterSet};
///
/// let set = DelimiterSet::new().with_separator("; ");
/// assert_eq!(to_string_with_delimiters(&[1, 2], set.clone()).unwrap(), "[1; 2]");
/// assert_eq!(to_string_with_delimiters(&(1, 2), set).unwrap(), "[1; 2]");
/// ```
///
/// # Errors
///
/// Fails only if a `Display` impl of an element reports an error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_delimiters<T>(value: &T, delimiters: DelimiterSet) -> Result<String>
where
    T: Render + ?Sized,
    T::Kind: Rebracket<T>,
{
    to_string(&with_delimiters(value, delimiters))
}

/// Renders `value` into a writer, streaming tokens as they are produced.
///
/// # Examples
///
/// ```rust
/// use pprint::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec![(1, 2)]).unwrap();
/// assert_eq!(buffer, b"[(1, 2)]");
/// ```
///
/// # Errors
///
/// Returns an error if writing to or flushing the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: Render + ?Sized,
{
    let _span = tracing::trace_span!("to_writer", category = ?classify::<T>()).entered();
    let mut sink = IoSink::new(writer);
    value.render(&mut sink)?;
    sink.flush()
}

/// `Display` adapter returned by [`pretty`].
pub struct Pretty<'a, T: ?Sized>(&'a T);

/// Wraps `value` so it can be used with `format!`, `write!` and `println!`.
///
/// # Examples
///
/// ```rust
/// use pprint::pretty;
///
/// let nested = vec![vec![1], vec![2, 3]];
/// assert_eq!(pretty(&nested).to_string(), "[[1], [2, 3]]");
/// ```
pub fn pretty<T: Render + ?Sized>(value: &T) -> Pretty<'_, T> {
    Pretty(value)
}

impl<T: Render + ?Sized> fmt::Display for Pretty<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f).map_err(|_| fmt::Error)
    }
}

impl<T: Render + ?Sized> fmt::Debug for Pretty<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
