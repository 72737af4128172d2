//! Fixed-capacity byte window over an [`io::Read`] source.
//!
//! Every read operation of the reader goes through this type. It owns the
//! only blocking point in the crate: [`ByteBuffer::refill`], which makes
//! exactly one `read` call on the source, asking for at most the buffer's
//! capacity.
//!
//! Invariants
//! - `cursor <= filled <= buf.len()`.
//! - Once `eof` is set it is never cleared, and the source is never called
//!   again.
//! - Bytes in `buf[cursor..filled]` are unread; everything before `cursor`
//!   has been handed out or skipped.
#![expect(clippy::inline_always)]

use core::fmt;
use std::io::Read;

use tracing::{debug, trace};

use super::staging::Staging;
use crate::ReadError;

/// Outcome of skipping delimiter bytes ahead of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub(crate) enum Skip {
    /// The cursor points at a byte above the threshold.
    Found,
    /// The source ran dry first.
    EndOfStream,
}

pub(crate) struct ByteBuffer<R> {
    source: R,
    buf: Box<[u8]>,
    cursor: usize,
    filled: usize,
    eof: bool,
}

impl<R> fmt::Debug for ByteBuffer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("capacity", &self.buf.len())
            .field("cursor", &self.cursor)
            .field("filled", &self.filled)
            .field("eof", &self.eof)
            .finish_non_exhaustive()
    }
}

impl<R> ByteBuffer<R> {
    pub(crate) fn new(source: R, capacity: usize) -> Self {
        debug_assert!(capacity > 0, "capacity is validated by ReaderOptions");
        Self {
            source,
            buf: vec![0; capacity].into_boxed_slice(),
            cursor: 0,
            filled: 0,
            eof: false,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.eof
    }

    pub(crate) fn into_inner(self) -> R {
        self.source
    }

    /// Unread bytes currently held in the buffer.
    #[inline(always)]
    pub(crate) fn unread(&self) -> &[u8] {
        &self.buf[self.cursor..self.filled]
    }

    #[inline(always)]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.unread().first().copied()
    }

    #[inline(always)]
    pub(crate) fn consume(&mut self, count: usize) {
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(
            self.cursor + count <= self.filled,
            "consumed past the filled window"
        );
        self.cursor += count;
    }
}

impl<R: Read> ByteBuffer<R> {
    /// Replaces the buffer contents with the next chunk of the source.
    ///
    /// Returns `false` and records end of stream when the source yields
    /// nothing.
    fn refill(&mut self) -> Result<bool, ReadError> {
        debug_assert!(!self.eof, "refill after end of stream");
        self.cursor = 0;
        self.filled = 0;
        let count = self.source.read(&mut self.buf)?;
        if count == 0 {
            self.eof = true;
            debug!("end of stream reached");
            return Ok(false);
        }
        // A misbehaving `Read` could report more than it was given room for.
        self.filled = count.min(self.buf.len());
        trace!(
            bytes = self.filled,
            capacity = self.buf.len(),
            "refilled input buffer"
        );
        Ok(true)
    }

    /// Refills once the unread window is empty. Returns `false` at end of
    /// stream without touching the source again.
    #[inline]
    pub(crate) fn fill_more(&mut self) -> Result<bool, ReadError> {
        debug_assert!(self.unread().is_empty());
        if self.eof {
            return Ok(false);
        }
        self.refill()
    }

    /// Returns the next raw byte, or `None` the first time the source is
    /// found to be exhausted.
    ///
    /// Calling this again after `None` has been returned is an error.
    #[inline]
    pub(crate) fn next_byte(&mut self) -> Result<Option<u8>, ReadError> {
        if self.eof {
            return Err(ReadError::EndOfStream);
        }
        if self.cursor >= self.filled && !self.refill()? {
            return Ok(None);
        }
        let byte = self.buf[self.cursor];
        self.cursor += 1;
        Ok(Some(byte))
    }

    /// Advances past every byte `<= threshold`, refilling as needed, and
    /// leaves the cursor on the first byte above it.
    pub(crate) fn skip_until_above(&mut self, threshold: u8) -> Result<Skip, ReadError> {
        loop {
            if let Some(offset) = self.unread().iter().position(|&b| b > threshold) {
                self.cursor += offset;
                return Ok(Skip::Found);
            }
            self.cursor = self.filled;
            if !self.fill_more()? {
                return Ok(Skip::EndOfStream);
            }
        }
    }

    /// Copies bytes into `dst` up to the first byte matching `is_delimiter`.
    /// The delimiter is consumed but not copied. Reaching end of stream
    /// first is not an error; the partial copy stays in `dst`.
    pub(crate) fn copy_until<F>(
        &mut self,
        dst: &mut Staging,
        is_delimiter: F,
    ) -> Result<(), ReadError>
    where
        F: Fn(u8) -> bool,
    {
        loop {
            let window = &self.buf[self.cursor..self.filled];
            if let Some(offset) = window.iter().position(|&b| is_delimiter(b)) {
                dst.extend_from_slice(&window[..offset]);
                self.cursor += offset + 1;
                return Ok(());
            }
            dst.extend_from_slice(window);
            self.cursor = self.filled;
            if !self.fill_more()? {
                return Ok(());
            }
        }
    }
}
