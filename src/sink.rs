//! Text sinks.
//!
//! A [`Sink`] is anything rendered output can be written to. Its
//! [`Width`](Sink::Width) decides which half of a
//! [`DelimiterSet`](crate::DelimiterSet) is used, so the same value renders
//! through the same algorithm into narrow and wide sinks alike.
//!
//! | Sink | Width |
//! |---|---|
//! | `String` | [`Narrow`] |
//! | `fmt::Formatter` | [`Narrow`] |
//! | [`IoSink<W: io::Write>`](IoSink) | [`Narrow`] |
//! | `Vec<u16>` | [`Wide`] |

use crate::error::{Error, Result};
use crate::render::Render;
use crate::width::{CharWidth, Narrow, Wide};
use std::fmt::{self, Write as _};
use std::io;

/// Destination of rendered text.
pub trait Sink {
    type Width: CharWidth;

    /// Writes a delimiter token.
    fn write_token(&mut self, token: &<Self::Width as CharWidth>::Token) -> Result<()>;

    /// Writes a scalar using its `Display` formatting.
    fn write_display(&mut self, value: &dyn fmt::Display) -> Result<()>;

    /// Renders `value` into this sink, returning the sink for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pprint::Sink;
    ///
    /// let mut out = String::new();
    /// out.write_value(&vec![1, 2])?.write_value(&" and ")?.write_value(&(3, 4))?;
    /// assert_eq!(out, "[1, 2] and (3, 4)");
    /// # Ok::<(), pprint::Error>(())
    /// ```
    fn write_value<T: Render + ?Sized>(&mut self, value: &T) -> Result<&mut Self>
    where
        Self: Sized,
    {
        value.render(self)?;
        Ok(self)
    }
}

impl Sink for String {
    type Width = Narrow;

    #[inline]
    fn write_token(&mut self, token: &<Narrow as CharWidth>::Token) -> Result<()> {
        self.push_str(token);
        Ok(())
    }

    fn write_display(&mut self, value: &dyn fmt::Display) -> Result<()> {
        write!(self, "{}", value)?;
        Ok(())
    }
}

impl Sink for fmt::Formatter<'_> {
    type Width = Narrow;

    #[inline]
    fn write_token(&mut self, token: &<Narrow as CharWidth>::Token) -> Result<()> {
        self.write_str(token)?;
        Ok(())
    }

    // A fresh `{}` keeps the caller's width/fill flags from applying to every leaf.
    fn write_display(&mut self, value: &dyn fmt::Display) -> Result<()> {
        write!(self, "{}", value)?;
        Ok(())
    }
}

impl Sink for Vec<u16> {
    type Width = Wide;

    #[inline]
    fn write_token(&mut self, token: &<Wide as CharWidth>::Token) -> Result<()> {
        self.extend_from_slice(token);
        Ok(())
    }

    fn write_display(&mut self, value: &dyn fmt::Display) -> Result<()> {
        write!(Utf16Writer(self), "{}", value)?;
        Ok(())
    }
}

struct Utf16Writer<'a>(&'a mut Vec<u16>);

impl fmt::Write for Utf16Writer<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.extend(s.encode_utf16());
        Ok(())
    }
}

/// Narrow sink over any [`io::Write`].
///
/// Tokens and scalars are written straight through; wrap the writer in a
/// `BufWriter` when it is unbuffered.
///
/// # Examples
///
/// ```rust
/// use pprint::{render, IoSink};
///
/// let mut sink = IoSink::new(Vec::new());
/// render(&[1, 2, 3], &mut sink).unwrap();
/// assert_eq!(sink.into_inner(), b"[1, 2, 3]");
/// ```
#[derive(Debug)]
pub struct IoSink<W> {
    writer: W,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        IoSink { writer }
    }

    /// The underlying writer, for inspecting what has been written so far.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(io_error)
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    type Width = Narrow;

    fn write_token(&mut self, token: &<Narrow as CharWidth>::Token) -> Result<()> {
        self.writer.write_all(token.as_bytes()).map_err(io_error)
    }

    fn write_display(&mut self, value: &dyn fmt::Display) -> Result<()> {
        io::Write::write_fmt(&mut self.writer, format_args!("{}", value)).map_err(io_error)
    }
}

fn io_error(err: io::Error) -> Error {
    tracing::debug!(kind = ?err.kind(), error = %err, "writer rejected rendered output");
    Error::io(&err.to_string())
}
