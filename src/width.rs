//! Character widths.
//!
//! Every delimiter entry exists twice: once for narrow (UTF-8) sinks and once
//! for wide (UTF-16) sinks. A [`CharWidth`] names one of the two and knows how
//! to pick its half out of a [`DelimiterSet`].
//!
//! The `const fn` helpers here back the [`wide!`](crate::wide) macro, which
//! turns a string literal into a `&'static [u16]` at compile time.

use crate::options::{DelimiterSet, Delimiters};
use std::borrow::Cow;
use std::fmt;

/// A character width that sinks are written in.
pub trait CharWidth: Clone + fmt::Debug + PartialEq + 'static {
    /// A delimiter token in this width.
    type Token: Clone + fmt::Debug + PartialEq + 'static;

    /// Picks this width's triple out of a two-width set.
    fn select(set: &DelimiterSet) -> &Delimiters<Self>;

    /// Encodes text as a token of this width.
    fn encode(text: &str) -> Self::Token;
}

/// UTF-8 output (`String`, `fmt::Formatter`, `io::Write`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Narrow;

/// UTF-16 output (`Vec<u16>`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Wide;

impl CharWidth for Narrow {
    type Token = Cow<'static, str>;

    #[inline]
    fn select(set: &DelimiterSet) -> &Delimiters<Self> {
        &set.narrow
    }

    fn encode(text: &str) -> Self::Token {
        Cow::Owned(text.to_string())
    }
}

impl CharWidth for Wide {
    type Token = Cow<'static, [u16]>;

    #[inline]
    fn select(set: &DelimiterSet) -> &Delimiters<Self> {
        &set.wide
    }

    fn encode(text: &str) -> Self::Token {
        Cow::Owned(text.encode_utf16().collect())
    }
}

const fn utf8_width(lead: u8) -> usize {
    if lead < 0x80 {
        1
    } else if lead < 0xE0 {
        2
    } else if lead < 0xF0 {
        3
    } else {
        4
    }
}

/// Number of UTF-16 code units needed to encode `text`.
#[doc(hidden)]
pub const fn utf16_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;
    let mut units = 0;
    while i < bytes.len() {
        let width = utf8_width(bytes[i]);
        units += if width == 4 { 2 } else { 1 };
        i += width;
    }
    units
}

/// Encodes `text` as UTF-16. `N` must equal [`utf16_len`] of `text`.
///
/// # Panics
///
/// Panics (or fails const evaluation) when `N` is not the encoded length.
#[doc(hidden)]
pub const fn encode_utf16<const N: usize>(text: &str) -> [u16; N] {
    assert!(utf16_len(text) == N, "array length does not match the UTF-16 length");
    let bytes = text.as_bytes();
    let mut out = [0u16; N];
    let mut i = 0;
    let mut j = 0;
    while i < bytes.len() {
        let lead = bytes[i] as u32;
        let width = utf8_width(bytes[i]);
        let code = match width {
            1 => lead,
            2 => ((lead & 0x1F) << 6) | (bytes[i + 1] as u32 & 0x3F),
            3 => {
                ((lead & 0x0F) << 12)
                    | ((bytes[i + 1] as u32 & 0x3F) << 6)
                    | (bytes[i + 2] as u32 & 0x3F)
            }
            _ => {
                ((lead & 0x07) << 18)
                    | ((bytes[i + 1] as u32 & 0x3F) << 12)
                    | ((bytes[i + 2] as u32 & 0x3F) << 6)
                    | (bytes[i + 3] as u32 & 0x3F)
            }
        };
        if code >= 0x1_0000 {
            let offset = code - 0x1_0000;
            out[j] = 0xD800 | (offset >> 10) as u16;
            out[j + 1] = 0xDC00 | (offset & 0x3FF) as u16;
            j += 2;
        } else {
            out[j] = code as u16;
            j += 1;
        }
        i += width;
    }
    out
}
