use crate::ReadError;

/// Default size of the reader's byte buffer, 2<sup>16</sup> bytes.
pub const DEFAULT_BUFFER_CAPACITY: usize = 1 << 16;

/// Default initial size of the buffer used to stage tokens and lines.
pub const DEFAULT_STAGING_CAPACITY: usize = 128;

/// Configuration for an [`InputReader`](crate::InputReader).
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// use fastread::{InputReader, ReaderOptions};
///
/// let options = ReaderOptions {
///     buffer_capacity: 16,
///     ..Default::default()
/// };
/// let mut reader = InputReader::with_options(Cursor::new("1 2 3"), options)?;
/// assert_eq!(reader.next_int()?, 1);
/// # Ok::<(), fastread::ReadError>(())
/// ```
///
/// # Default
///
/// A 64 KiB byte buffer and a 128 byte staging buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderOptions {
    /// Number of bytes requested from the source on every refill.
    ///
    /// Must be greater than zero.
    ///
    /// # Default
    ///
    /// [`DEFAULT_BUFFER_CAPACITY`]
    pub buffer_capacity: usize,

    /// Initial capacity of the staging buffer that tokens and lines are
    /// copied into. The buffer doubles whenever a token outgrows it, so this
    /// only matters for avoiding the first few reallocations.
    ///
    /// # Default
    ///
    /// [`DEFAULT_STAGING_CAPACITY`]
    pub staging_capacity: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            staging_capacity: DEFAULT_STAGING_CAPACITY,
        }
    }
}

impl ReaderOptions {
    /// Checks the options, failing with [`ReadError::InvalidArgument`] when
    /// the buffer capacity is zero.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::InvalidArgument`] for a zero `buffer_capacity`.
    pub fn validate(&self) -> Result<(), ReadError> {
        if self.buffer_capacity == 0 {
            return Err(ReadError::InvalidArgument(
                "buffer capacity must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_64k() {
        let options = ReaderOptions::default();
        assert_eq!(options.buffer_capacity, 65536);
        assert_eq!(options.staging_capacity, 128);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let options = ReaderOptions {
            buffer_capacity: 0,
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(ReadError::InvalidArgument(_))
        ));
    }

    #[test]
    fn zero_staging_capacity_is_accepted() {
        let options = ReaderOptions {
            staging_capacity: 0,
            ..Default::default()
        };
        assert!(options.validate().is_ok());
    }
}
