//! Error types for rendering.
//!
//! Classification and delimiter resolution are checked at compile time, so the
//! only failures left at runtime come from the sink being written to. This
//! module wraps those failures in a single [`Error`] type.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: an [`std::io::Write`] sink rejected output
//! - **Formatter Errors**: a [`std::fmt::Write`] sink or `Formatter` failed
//! - **Custom Errors**: raised by user-provided sinks
//!
//! ## Examples
//!
//! ```rust
//! use pprint::Error;
//!
//! let err = Error::io("broken pipe");
//! assert!(err.to_string().contains("broken pipe"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while rendering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error while writing to an [`std::io::Write`] sink
    #[error("IO error: {0}")]
    Io(String),

    /// A `fmt::Write` sink or formatter reported failure
    #[error("formatter error")]
    Fmt(#[from] fmt::Error),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// Intended for [`Sink`](crate::Sink) implementations outside this crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pprint::Error;
    ///
    /// let err = Error::custom("sink closed");
    /// assert_eq!(err.to_string(), "Error: sink closed");
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
