use std::{io, num::ParseFloatError};

use thiserror::Error;

/// Errors surfaced by [`InputReader`](crate::InputReader).
///
/// Token and line reads never report running out of input as an error; they
/// return `Ok(None)` instead, because empty tokens and lines are valid
/// results that must stay distinguishable from exhaustion.
#[derive(Error, Debug)]
pub enum ReadError {
    /// A construction argument was rejected before any byte was read.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A numeric read found no further data, or a byte was requested after
    /// end of stream had already been reported.
    #[error("unexpected end of stream")]
    EndOfStream,
    /// The exact floating-point path could not convert the token.
    #[error("malformed floating-point token {token:?}")]
    MalformedFloat {
        /// The offending token, decoded lossily.
        token: String,
        /// The conversion failure.
        #[source]
        source: ParseFloatError,
    },
    /// The underlying source failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ReadError {
    /// Returns `true` for [`ReadError::EndOfStream`], the signal callers use
    /// to stop reading a sequence of unknown length.
    #[must_use]
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, ReadError::EndOfStream)
    }
}
