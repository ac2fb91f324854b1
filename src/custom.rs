//! Per-call delimiter overrides.
//!
//! [`WithDelimiters`] pairs a container with an explicit [`DelimiterSet`].
//! Rendering it walks the value exactly as its own layout does (containers,
//! fixed arrays, pairs and tuples alike), but brackets and separates with the
//! supplied tokens. Because the set holds
//! both widths, one wrapper can be written into a narrow and a wide sink; the
//! sink picks its half at the call site.
//!
//! ## Examples
//!
//! ```rust
//! use pprint::{delimiters, to_string, to_wide, with_delimiters};
//!
//! let values = vec![1, 2, 3];
//! let piped = with_delimiters(&values, delimiters!("|", "|", "|"));
//!
//! assert_eq!(to_string(&piped).unwrap(), "|1|2|3|");
//! assert_eq!(String::from_utf16(&to_wide(&piped).unwrap()).unwrap(), "|1|2|3|");
//!
//! // The registry entry for `Vec` is untouched.
//! assert_eq!(to_string(&values).unwrap(), "[1, 2, 3]");
//! ```

use crate::classify::{classify, Category, Layout, Overridden, Rebracket};
use crate::error::Result;
use crate::options::DelimiterSet;
use crate::registry::Delimited;
use crate::render::Render;
use crate::sink::Sink;
use crate::width::CharWidth;

/// A container rendered with caller-supplied delimiters.
#[derive(Debug)]
pub struct WithDelimiters<'a, T: ?Sized> {
    value: &'a T,
    delimiters: DelimiterSet,
}

impl<'a, T: ?Sized> WithDelimiters<'a, T> {
    /// The wrapped value, rendered with [`delimiters`](Self::delimiters).
    pub fn value(&self) -> &'a T {
        self.value
    }

    /// The delimiters used in place of the value's own convention.
    pub fn delimiters(&self) -> &DelimiterSet {
        &self.delimiters
    }
}

/// Renders `value` with `delimiters` instead of its registry entry.
pub fn with_delimiters<T: ?Sized>(value: &T, delimiters: DelimiterSet) -> WithDelimiters<'_, T> {
    WithDelimiters { value, delimiters }
}

/// Renders `value` with the registry entry of the key type `D`.
///
/// # Examples
///
/// ```rust
/// use pprint::{custom_delimiters, to_string};
/// use std::collections::BTreeSet;
///
/// // Borrow the set convention for a plain vector.
/// let text = to_string(&custom_delimiters::<BTreeSet<()>, _>(&vec![1, 2])).unwrap();
/// assert_eq!(text, "{1, 2}");
/// ```
pub fn custom_delimiters<D, T>(value: &T) -> WithDelimiters<'_, T>
where
    D: Delimited + ?Sized,
    T: ?Sized,
{
    with_delimiters(value, D::DELIMITERS)
}

impl<'a, T> Render for WithDelimiters<'a, T>
where
    T: Render + ?Sized,
    T::Kind: Rebracket<T>,
{
    type Kind = Overridden;
}

impl<'a, T> Layout<WithDelimiters<'a, T>> for Overridden
where
    T: Render + ?Sized,
    T::Kind: Rebracket<T>,
{
    fn category() -> Category {
        classify::<T>()
    }

    fn render<S: Sink + ?Sized>(value: &WithDelimiters<'a, T>, sink: &mut S) -> Result<()> {
        let delimiters = <S::Width as CharWidth>::select(&value.delimiters);
        <T::Kind as Rebracket<T>>::render_with(value.value, delimiters, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{to_string, to_wide, Delimiters, Wide};
    use std::collections::BTreeSet;

    #[test]
    fn test_override_replaces_triple() {
        let values = vec![1, 2, 3];
        let text = to_string(&with_delimiters(&values, delimiters!("<", "; ", ">"))).unwrap();
        assert_eq!(text, "<1; 2; 3>");
    }

    #[test]
    fn test_override_does_not_leak() {
        let first = vec![1, 2];
        let second = vec![1, 2];
        let _ = to_string(&with_delimiters(&first, DelimiterSet::NONE)).unwrap();
        assert_eq!(to_string(&second).unwrap(), "[1, 2]");
    }

    #[test]
    fn test_absent_tokens_write_nothing() {
        let values = [1, 2, 3];
        let spaced = with_delimiters(&values, delimiters!(_, " ", _));
        assert_eq!(to_string(&spaced).unwrap(), "1 2 3");
        let empty = with_delimiters(&values, delimiters!("", "", ""));
        assert_eq!(to_string(&empty).unwrap(), "123");
    }

    #[test]
    fn test_nested_elements_use_registry() {
        let pairs = vec![(1, 2), (3, 4)];
        let text = to_string(&with_delimiters(&pairs, delimiters!(_, " / ", _))).unwrap();
        assert_eq!(text, "(1, 2) / (3, 4)");
    }

    #[test]
    fn test_one_override_both_widths() {
        let set: BTreeSet<u8> = [1, 2].into_iter().collect();
        let custom = with_delimiters(
            &set,
            DelimiterSet::new()
                .with_narrow(Delimiters::from_text(Some("<"), Some(","), Some(">")))
                .with_wide(Delimiters::<Wide>::from_text(Some("«"), Some(";"), Some("»"))),
        );
        assert_eq!(to_string(&custom).unwrap(), "<1,2>");
        assert_eq!(String::from_utf16(&to_wide(&custom).unwrap()).unwrap(), "«1;2»");
        assert_eq!(classify::<WithDelimiters<'_, BTreeSet<u8>>>(), Category::Set);
    }

    #[test]
    fn test_override_reaches_pairs_and_tuples() {
        let pair = with_delimiters(&(1, 2), delimiters!("<", ":", ">"));
        assert_eq!(to_string(&pair).unwrap(), "<1:2>");
        assert_eq!(String::from_utf16(&to_wide(&pair).unwrap()).unwrap(), "<1:2>");

        let triple = (1, "a", 'b');
        let bare = with_delimiters(&triple, delimiters!(_, " ", _));
        assert_eq!(to_string(&bare).unwrap(), "1 a b");
        assert_eq!(classify::<WithDelimiters<'_, (u8, u8, u8)>>(), Category::FixedArity(3));

        assert_eq!(to_string(&(1, 2)).unwrap(), "(1, 2)");
    }

    #[test]
    fn test_key_type_override_on_tuple() {
        let text = to_string(&custom_delimiters::<Vec<()>, _>(&(1, (2, 3)))).unwrap();
        assert_eq!(text, "[1, (2, 3)]");
    }

    #[test]
    fn test_char_array_stays_text_under_override() {
        let name = ['o', 'k', '\0'];
        let custom = with_delimiters(&name, delimiters!("<", "|", ">"));
        assert_eq!(to_string(&custom).unwrap(), "ok");
        let numbers = with_delimiters(&[1u8, 2], delimiters!("<", "|", ">"));
        assert_eq!(to_string(&numbers).unwrap(), "<1|2>");
    }

    #[test]
    fn test_accessors() {
        let values = vec![1, 2];
        let custom = with_delimiters(&values, DelimiterSet::TUPLE);
        assert!(std::ptr::eq(custom.value(), &values));
        assert_eq!(custom.delimiters(), &DelimiterSet::TUPLE);
    }
}
