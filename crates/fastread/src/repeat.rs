//! Fixed-count reads built from the single-value operations.
//!
//! Each method stops at the first error; values read before it are lost.

use std::io::Read;

use crate::{InputReader, ReadError};

fn collect_n<T, F>(count: usize, mut read: F) -> Result<Vec<T>, ReadError>
where
    F: FnMut() -> Result<T, ReadError>,
{
    (0..count).map(|_| read()).collect()
}

fn collect_matrix<T, F>(rows: usize, cols: usize, mut read: F) -> Result<Vec<Vec<T>>, ReadError>
where
    F: FnMut() -> Result<T, ReadError>,
{
    (0..rows).map(|_| collect_n(cols, &mut read)).collect()
}

impl<R: Read> InputReader<R> {
    /// Reads `count` values with [`next_int`](Self::next_int).
    ///
    /// # Errors
    ///
    /// Fails like [`next_int`](Self::next_int).
    pub fn next_ints(&mut self, count: usize) -> Result<Vec<i32>, ReadError> {
        collect_n(count, || self.next_int())
    }

    /// Reads `count` values with [`next_long`](Self::next_long).
    ///
    /// # Errors
    ///
    /// Fails like [`next_long`](Self::next_long).
    pub fn next_longs(&mut self, count: usize) -> Result<Vec<i64>, ReadError> {
        collect_n(count, || self.next_long())
    }

    /// Reads `count` values with [`next_i8`](Self::next_i8).
    ///
    /// # Errors
    ///
    /// Fails like [`next_i8`](Self::next_i8).
    pub fn next_i8s(&mut self, count: usize) -> Result<Vec<i8>, ReadError> {
        collect_n(count, || self.next_i8())
    }

    /// Reads `count` values with [`next_double`](Self::next_double).
    ///
    /// # Errors
    ///
    /// Fails like [`next_double`](Self::next_double).
    pub fn next_doubles(&mut self, count: usize) -> Result<Vec<f64>, ReadError> {
        collect_n(count, || self.next_double())
    }

    /// Reads `count` values with [`next_double_fast`](Self::next_double_fast).
    ///
    /// # Errors
    ///
    /// Fails like [`next_double_fast`](Self::next_double_fast).
    pub fn next_doubles_fast(&mut self, count: usize) -> Result<Vec<f64>, ReadError> {
        collect_n(count, || self.next_double_fast())
    }

    /// Reads `count` tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::EndOfStream`] if fewer than `count` tokens
    /// remain.
    pub fn next_tokens(&mut self, count: usize) -> Result<Vec<String>, ReadError> {
        collect_n(count, || self.next_token()?.ok_or(ReadError::EndOfStream))
    }

    /// Reads a `rows × cols` matrix in row-major order with
    /// [`next_int`](Self::next_int).
    ///
    /// # Errors
    ///
    /// Fails like [`next_int`](Self::next_int).
    pub fn next_int_matrix(
        &mut self,
        rows: usize,
        cols: usize,
    ) -> Result<Vec<Vec<i32>>, ReadError> {
        collect_matrix(rows, cols, || self.next_int())
    }

    /// Reads a `rows × cols` matrix with [`next_long`](Self::next_long).
    ///
    /// # Errors
    ///
    /// Fails like [`next_long`](Self::next_long).
    pub fn next_long_matrix(
        &mut self,
        rows: usize,
        cols: usize,
    ) -> Result<Vec<Vec<i64>>, ReadError> {
        collect_matrix(rows, cols, || self.next_long())
    }

    /// Reads a `rows × cols` matrix with [`next_double`](Self::next_double).
    ///
    /// # Errors
    ///
    /// Fails like [`next_double`](Self::next_double).
    pub fn next_double_matrix(
        &mut self,
        rows: usize,
        cols: usize,
    ) -> Result<Vec<Vec<f64>>, ReadError> {
        collect_matrix(rows, cols, || self.next_double())
    }

    /// Reads a `rows × cols` matrix with
    /// [`next_double_fast`](Self::next_double_fast).
    ///
    /// # Errors
    ///
    /// Fails like [`next_double_fast`](Self::next_double_fast).
    pub fn next_double_matrix_fast(
        &mut self,
        rows: usize,
        cols: usize,
    ) -> Result<Vec<Vec<f64>>, ReadError> {
        collect_matrix(rows, cols, || self.next_double_fast())
    }

    /// Reads a `rows × cols` matrix of tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::EndOfStream`] if too few tokens remain.
    pub fn next_token_matrix(
        &mut self,
        rows: usize,
        cols: usize,
    ) -> Result<Vec<Vec<String>>, ReadError> {
        collect_matrix(rows, cols, || {
            self.next_token()?.ok_or(ReadError::EndOfStream)
        })
    }
}
