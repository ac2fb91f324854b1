//! Delimiter configuration.
//!
//! This module provides the types describing how a container is bracketed:
//!
//! - [`Delimiters`]: prefix, separator and suffix tokens for one character width
//! - [`DelimiterSet`]: the narrow and wide triples of one convention
//! - [`DelimiterConfig`]: a serde-loadable form of a [`DelimiterSet`]
//!
//! Each token is an `Option`: `None` means the position is absent and nothing
//! is written there. `Some("")` is a present but empty token, which also
//! writes nothing but is kept distinct.
//!
//! ## Examples
//!
//! ```rust
//! use pprint::{to_string_with_delimiters, DelimiterSet};
//!
//! let set = DelimiterSet::new()
//!     .with_prefix("<")
//!     .with_separator(" | ")
//!     .with_suffix(">");
//!
//! let text = to_string_with_delimiters(&vec![1, 2, 3], set).unwrap();
//! assert_eq!(text, "<1 | 2 | 3>");
//! ```

use crate::width::{CharWidth, Narrow, Wide};
use serde::{Deserialize, Serialize};

/// Prefix, separator and suffix tokens for one character width.
#[derive(Clone, Debug, PartialEq)]
pub struct Delimiters<W: CharWidth> {
    pub prefix: Option<W::Token>,
    pub separator: Option<W::Token>,
    pub suffix: Option<W::Token>,
}

impl<W: CharWidth> Delimiters<W> {
    /// A triple with every position absent.
    pub const NONE: Self = Delimiters {
        prefix: None,
        separator: None,
        suffix: None,
    };

    /// Builds a triple from text, encoding each present token for this width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pprint::{Delimiters, Narrow};
    ///
    /// let d = Delimiters::<Narrow>::from_text(Some("<"), None, Some(">"));
    /// assert_eq!(d.prefix.as_deref(), Some("<"));
    /// assert!(d.separator.is_none());
    /// ```
    #[must_use]
    pub fn from_text(prefix: Option<&str>, separator: Option<&str>, suffix: Option<&str>) -> Self {
        Delimiters {
            prefix: prefix.map(W::encode),
            separator: separator.map(W::encode),
            suffix: suffix.map(W::encode),
        }
    }
}

/// One delimiter convention in both character widths.
///
/// The two halves are independent: a narrow sink only ever sees `narrow`, a
/// wide sink only ever sees `wide`.
///
/// # Examples
///
/// ```rust
/// use pprint::DelimiterSet;
///
/// let set = DelimiterSet::SET;
/// assert_eq!(set.narrow.prefix.as_deref(), Some("{"));
/// assert_eq!(set.narrow.separator.as_deref(), Some(", "));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DelimiterSet {
    pub narrow: Delimiters<Narrow>,
    pub wide: Delimiters<Wide>,
}

impl DelimiterSet {
    /// `[a, b, c]`, the fallback for every container.
    pub const SEQUENCE: DelimiterSet = crate::delimiters!("[", ", ", "]");

    /// `{a, b, c}`, used by set-like containers.
    pub const SET: DelimiterSet = crate::delimiters!("{", ", ", "}");

    /// `(a, b)`, shared by pairs and tuples.
    pub const TUPLE: DelimiterSet = crate::delimiters!("(", ", ", ")");

    /// Every position absent in both widths.
    pub const NONE: DelimiterSet = crate::delimiters!(_, _, _);

    /// Creates a set starting from the sequence convention.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pprint::DelimiterSet;
    ///
    /// assert_eq!(DelimiterSet::new(), DelimiterSet::SEQUENCE);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix in both widths.
    #[must_use]
    pub fn with_prefix(mut self, token: &str) -> Self {
        self.narrow.prefix = Some(Narrow::encode(token));
        self.wide.prefix = Some(Wide::encode(token));
        self
    }

    /// Sets the separator in both widths.
    #[must_use]
    pub fn with_separator(mut self, token: &str) -> Self {
        self.narrow.separator = Some(Narrow::encode(token));
        self.wide.separator = Some(Wide::encode(token));
        self
    }

    /// Sets the suffix in both widths.
    #[must_use]
    pub fn with_suffix(mut self, token: &str) -> Self {
        self.narrow.suffix = Some(Narrow::encode(token));
        self.wide.suffix = Some(Wide::encode(token));
        self
    }

    /// Makes the prefix absent in both widths.
    #[must_use]
    pub fn without_prefix(mut self) -> Self {
        self.narrow.prefix = None;
        self.wide.prefix = None;
        self
    }

    /// Makes the separator absent in both widths.
    #[must_use]
    pub fn without_separator(mut self) -> Self {
        self.narrow.separator = None;
        self.wide.separator = None;
        self
    }

    /// Makes the suffix absent in both widths.
    #[must_use]
    pub fn without_suffix(mut self) -> Self {
        self.narrow.suffix = None;
        self.wide.suffix = None;
        self
    }

    /// Replaces the narrow triple, leaving the wide one untouched.
    #[must_use]
    pub fn with_narrow(mut self, narrow: Delimiters<Narrow>) -> Self {
        self.narrow = narrow;
        self
    }

    /// Replaces the wide triple, leaving the narrow one untouched.
    #[must_use]
    pub fn with_wide(mut self, wide: Delimiters<Wide>) -> Self {
        self.wide = wide;
        self
    }
}

impl Default for DelimiterSet {
    fn default() -> Self {
        Self::SEQUENCE
    }
}

/// Serializable delimiter convention.
///
/// A missing field is an absent token. Converting into a [`DelimiterSet`]
/// encodes the same text for both widths.
///
/// # Examples
///
/// ```rust
/// use pprint::{DelimiterConfig, DelimiterSet};
///
/// let config = DelimiterConfig {
///     prefix: Some("<".to_string()),
///     separator: Some(" ".to_string()),
///     suffix: Some(">".to_string()),
/// };
/// let set = DelimiterSet::from(config);
/// assert_eq!(set.narrow.separator.as_deref(), Some(" "));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl From<DelimiterConfig> for DelimiterSet {
    fn from(config: DelimiterConfig) -> Self {
        let prefix = config.prefix.as_deref();
        let separator = config.separator.as_deref();
        let suffix = config.suffix.as_deref();
        DelimiterSet {
            narrow: Delimiters::from_text(prefix, separator, suffix),
            wide: Delimiters::from_text(prefix, separator, suffix),
        }
    }
}

impl From<&DelimiterSet> for DelimiterConfig {
    fn from(set: &DelimiterSet) -> Self {
        DelimiterConfig {
            prefix: set.narrow.prefix.as_deref().map(str::to_string),
            separator: set.narrow.separator.as_deref().map(str::to_string),
            suffix: set.narrow.suffix.as_deref().map(str::to_string),
        }
    }
}
