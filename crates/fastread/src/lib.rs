//! A byte-buffered streaming tokenizer.
//!
//! [`InputReader`] pulls signed integers, floats, whitespace-delimited tokens
//! and newline-delimited lines straight out of a fixed-size byte buffer over
//! any [`std::io::Read`] source, without decoding the input as text first.
//! It is built for large volumes of trusted, whitespace-structured input:
//! numbers are not validated, and only ASCII delimiters are recognized.
//!
//! Two float readers are offered on purpose:
//! [`next_double`](InputReader::next_double) is exact,
//! [`next_double_fast`](InputReader::next_double_fast) avoids staging the
//! token and may be off in the last few bits.
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use fastread::InputReader;
//!
//! let mut reader = InputReader::with_capacity(Cursor::new("3\n10 -20 30\n"), 4)?;
//! let count = reader.next_int()?;
//! let values = reader.next_ints(count as usize)?;
//! assert_eq!(values, [10, -20, 30]);
//! assert!(reader.next_int().unwrap_err().is_end_of_stream());
//! # Ok::<(), fastread::ReadError>(())
//! ```

mod error;
mod options;
mod reader;
mod repeat;

#[cfg(test)]
mod tests;

pub use error::ReadError;
pub use options::{DEFAULT_BUFFER_CAPACITY, DEFAULT_STAGING_CAPACITY, ReaderOptions};
pub use reader::{
    DECIMAL_POINT, InputReader, Lines, MAX_DECIMAL_PRECISION, NEWLINE, SIGN, SPACE, Tokens,
};
