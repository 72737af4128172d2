//! Streaming tokenizer over a raw byte source.
//!
//! Overview
//! - `bytes: ByteBuffer` owns the source and a fixed-capacity window into
//!   it. It is refilled with one `read` call whenever a scan reaches the end
//!   of the window, including in the middle of a token.
//! - `staging: Staging` is the per-token scratch buffer that string reads
//!   copy into. It is reused across calls and grows by doubling.
//!
//! Delimiters
//! - Numeric and token reads treat every byte `<= b' '` as a delimiter and
//!   skip runs of them before the value starts.
//! - Line reads treat only `b'\n'` as a delimiter and skip nothing.
//! - Every read consumes the single delimiter byte that ended it, so a
//!   following line read starts immediately after the value.
//!
//! End of stream
//! - Numeric reads fail with [`ReadError::EndOfStream`].
//! - Token and line reads return `Ok(None)`, because an empty line is a
//!   valid result.

mod byte_buffer;
mod iter;
mod numbers;
mod staging;
mod tables;


use std::io::{self, Read};

use bstr::{BStr, ByteSlice};
use byte_buffer::{ByteBuffer, Skip};
pub use iter::{Lines, Tokens};
use staging::Staging;
pub use tables::MAX_DECIMAL_PRECISION;
use tracing::debug;

use crate::{ReadError, ReaderOptions};

/// Bytes at or below this value separate tokens and numbers.
pub const SPACE: u8 = b' ';
/// The only byte that ends a line.
pub const NEWLINE: u8 = b'\n';
/// Marks a negative number.
pub const SIGN: u8 = b'-';
/// Separates the integral and fractional parts of a float.
pub const DECIMAL_POINT: u8 = b'.';

/// A buffered reader that pulls integers, floats, whitespace-delimited
/// tokens and lines out of any [`Read`] source.
///
/// Input is trusted: numbers are not validated, and malformed numeric tokens
/// produce unspecified values rather than errors. A reader is meant to be
/// driven from a single thread.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// use fastread::InputReader;
///
/// let mut reader = InputReader::new(Cursor::new("123 3.14 abc\nrest of line"));
/// assert_eq!(reader.next_int()?, 123);
/// assert!((reader.next_double()? - 3.14).abs() < 1e-12);
/// assert_eq!(reader.next_token()?.as_deref(), Some("abc"));
/// assert_eq!(reader.next_line()?.as_deref(), Some("rest of line"));
/// assert_eq!(reader.next_line()?, None);
/// # Ok::<(), fastread::ReadError>(())
/// ```
#[derive(Debug)]
pub struct InputReader<R> {
    bytes: ByteBuffer<R>,
    staging: Staging,
}

impl InputReader<io::StdinLock<'static>> {
    /// Creates a reader over the process's standard input with the default
    /// buffer capacity.
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: Read> InputReader<R> {
    /// Creates a reader with a
    /// [`DEFAULT_BUFFER_CAPACITY`](crate::DEFAULT_BUFFER_CAPACITY) byte buffer.
    pub fn new(source: R) -> Self {
        Self::build(source, ReaderOptions::default())
    }

    /// Creates a reader that requests `buffer_capacity` bytes per refill.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::InvalidArgument`] if `buffer_capacity` is zero.
    pub fn with_capacity(source: R, buffer_capacity: usize) -> Result<Self, ReadError> {
        Self::with_options(
            source,
            ReaderOptions {
                buffer_capacity,
                ..ReaderOptions::default()
            },
        )
    }

    /// Creates a reader from explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::InvalidArgument`] if the options are rejected by
    /// [`ReaderOptions::validate`].
    pub fn with_options(source: R, options: ReaderOptions) -> Result<Self, ReadError> {
        options.validate()?;
        Ok(Self::build(source, options))
    }

    fn build(source: R, options: ReaderOptions) -> Self {
        debug!(
            buffer_capacity = options.buffer_capacity,
            staging_capacity = options.staging_capacity,
            "created input reader"
        );
        Self {
            bytes: ByteBuffer::new(source, options.buffer_capacity),
            staging: Staging::with_capacity(options.staging_capacity),
        }
    }

    /// Returns the next raw byte, or `None` when the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::EndOfStream`] when called again after end of
    /// stream has been observed by any read, and [`ReadError::Io`] if the
    /// source fails.
    #[inline]
    pub fn next_byte(&mut self) -> Result<Option<u8>, ReadError> {
        self.bytes.next_byte()
    }

    /// Reads a signed 32-bit integer.
    ///
    /// Leading delimiters are skipped. Values outside the `i32` range wrap,
    /// and a lone `-` reads as zero.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::EndOfStream`] if only delimiters remain.
    #[expect(clippy::cast_possible_truncation)]
    #[inline]
    pub fn next_int(&mut self) -> Result<i32, ReadError> {
        numbers::scan_integer(&mut self.bytes).map(|value| value as i32)
    }

    /// Reads a signed 64-bit integer.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::EndOfStream`] if only delimiters remain.
    #[inline]
    pub fn next_long(&mut self) -> Result<i64, ReadError> {
        numbers::scan_integer(&mut self.bytes)
    }

    /// Reads an integer token and truncates it to a signed byte, so
    /// `"-128"` and `"255"` read as `-128` and `-1`.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::EndOfStream`] if only delimiters remain.
    #[expect(clippy::cast_possible_truncation)]
    pub fn next_i8(&mut self) -> Result<i8, ReadError> {
        numbers::scan_integer(&mut self.bytes).map(|value| value as i8)
    }

    /// Reads the next whitespace-delimited token into the staging buffer and
    /// borrows it without allocating.
    ///
    /// Returns `None` when only delimiters remain. A returned token is never
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Io`] if the source fails.
    pub fn next_token_bytes(&mut self) -> Result<Option<&BStr>, ReadError> {
        if self.bytes.skip_until_above(SPACE)? == Skip::EndOfStream {
            return Ok(None);
        }
        self.staging.clear();
        self.bytes.copy_until(&mut self.staging, |b| b <= SPACE)?;
        Ok(Some(self.staging.as_bstr()))
    }

    /// Reads the next whitespace-delimited token.
    ///
    /// Bytes that are not valid UTF-8 are replaced with `U+FFFD`.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Io`] if the source fails.
    pub fn next_token(&mut self) -> Result<Option<String>, ReadError> {
        Ok(self
            .next_token_bytes()?
            .map(|token| token.to_str_lossy().into_owned()))
    }

    /// Reads up to the next `\n` and borrows the line, without the newline,
    /// from the staging buffer.
    ///
    /// The final line of the input is returned even when it has no trailing
    /// newline. Once the source is exhausted every call returns `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Io`] if the source fails.
    pub fn next_line_bytes(&mut self) -> Result<Option<&BStr>, ReadError> {
        let first = match self.bytes.next_byte() {
            Ok(Some(byte)) => byte,
            Ok(None) | Err(ReadError::EndOfStream) => return Ok(None),
            Err(err) => return Err(err),
        };
        self.staging.clear();
        if first != NEWLINE {
            self.staging.push(first);
            self.bytes.copy_until(&mut self.staging, |b| b == NEWLINE)?;
        }
        Ok(Some(self.staging.as_bstr()))
    }

    /// Reads up to the next `\n` and returns the line without the newline.
    ///
    /// A carriage return before the newline is kept. Bytes that are not
    /// valid UTF-8 are replaced with `U+FFFD`.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Io`] if the source fails.
    pub fn next_line(&mut self) -> Result<Option<String>, ReadError> {
        Ok(self
            .next_line_bytes()?
            .map(|line| line.to_str_lossy().into_owned()))
    }

    /// Reads a token and converts it with the standard library's correctly
    /// rounded decimal parser.
    ///
    /// Slower than [`next_double_fast`](Self::next_double_fast) but exact.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::EndOfStream`] if only delimiters remain and
    /// [`ReadError::MalformedFloat`] if the token is not a float literal.
    pub fn next_double(&mut self) -> Result<f64, ReadError> {
        let token = self.next_token_bytes()?.ok_or(ReadError::EndOfStream)?;
        let text = token.to_str_lossy();
        text.parse().map_err(|source| ReadError::MalformedFloat {
            token: text.into_owned(),
            source,
        })
    }

    /// Reads a float by summing digits straight out of the buffer, without
    /// staging the token.
    ///
    /// Exponents are not understood, and at most
    /// [`MAX_DECIMAL_PRECISION`] fractional digits contribute to the result.
    /// Each digit adds its own rounding error, so values with many
    /// significant digits can be off in the last few bits compared to
    /// [`next_double`](Self::next_double).
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::EndOfStream`] if only delimiters remain.
    #[inline]
    pub fn next_double_fast(&mut self) -> Result<f64, ReadError> {
        numbers::scan_double_fast(&mut self.bytes)
    }

    /// Returns an iterator over the remaining tokens.
    pub fn tokens(&mut self) -> Tokens<'_, R> {
        Tokens::new(self)
    }

    /// Returns an iterator over the remaining lines.
    pub fn lines(&mut self) -> Lines<'_, R> {
        Lines::new(self)
    }
}

impl<R> InputReader<R> {
    /// Capacity of the byte buffer, the most bytes requested per refill.
    #[must_use]
    pub fn buffer_capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Whether end of stream has been recorded. Once it has, the source is
    /// never read again.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.bytes.is_eof()
    }

    /// Consumes the reader and returns the source. Bytes still held in the
    /// buffer are lost.
    pub fn into_inner(self) -> R {
        self.bytes.into_inner()
    }

    /// Closes the reader, dropping the source.
    pub fn close(self) {
        debug!("closing input reader");
        drop(self.into_inner());
    }
}
