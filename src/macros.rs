/// Encodes a string literal as a `&'static [u16]` at compile time.
///
/// ```rust
/// let units: &'static [u16] = pprint::wide!("[");
/// assert_eq!(units, &[b'[' as u16]);
/// ```
#[macro_export]
macro_rules! wide {
    ($text:literal) => {{
        const UNITS: [u16; $crate::width::utf16_len($text)] = $crate::width::encode_utf16($text);
        &UNITS
    }};
}

/// Builds a [`DelimiterSet`](crate::DelimiterSet) from three literals, usable
/// in `const` position. Write `_` for an absent token.
///
/// ```rust
/// use pprint::{delimiters, DelimiterSet};
///
/// const ANGLE: DelimiterSet = delimiters!("<", "; ", ">");
/// const BARE: DelimiterSet = delimiters!(_, " ", _);
///
/// assert_eq!(ANGLE.narrow.prefix.as_deref(), Some("<"));
/// assert!(BARE.narrow.prefix.is_none());
/// ```
#[macro_export]
macro_rules! delimiters {
    ($prefix:tt, $separator:tt, $suffix:tt $(,)?) => {
        $crate::DelimiterSet {
            narrow: $crate::Delimiters {
                prefix: $crate::__delimiter_token!(narrow $prefix),
                separator: $crate::__delimiter_token!(narrow $separator),
                suffix: $crate::__delimiter_token!(narrow $suffix),
            },
            wide: $crate::Delimiters {
                prefix: $crate::__delimiter_token!(wide $prefix),
                separator: $crate::__delimiter_token!(wide $separator),
                suffix: $crate::__delimiter_token!(wide $suffix),
            },
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __delimiter_token {
    (narrow _) => {
        ::core::option::Option::None
    };
    (wide _) => {
        ::core::option::Option::None
    };
    (narrow $text:literal) => {
        ::core::option::Option::Some(::std::borrow::Cow::<'static, str>::Borrowed($text))
    };
    (wide $text:literal) => {
        ::core::option::Option::Some(::std::borrow::Cow::<'static, [u16]>::Borrowed(
            $crate::wide!($text),
        ))
    };
}
