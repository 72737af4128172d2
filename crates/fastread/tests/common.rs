#![allow(missing_docs)]
#![allow(dead_code)]

use core::fmt::Debug;
use std::io::{self, Read};

use fastread::ReadError;

/// A small problem input: a matrix with its dimensions, floats, a malformed
/// float, tokens mixed with lines, a blank line and no final newline.
pub const PROBLEM: &str =
    "2 3\n1 -2 3\n4 5 -6\n-0.5 1e3 abc\nalpha beta\nthe last line\r\n\nno newline";

/// Renders one read for a transcript.
pub fn show<T: Debug>(result: Result<T, ReadError>) -> String {
    match result {
        Ok(value) => format!("{value:?}"),
        Err(err) => format!("error: {err}"),
    }
}

/// Wraps a source and counts how often it is read and the largest request.
#[derive(Debug)]
pub struct Counting<R> {
    pub inner: R,
    pub calls: usize,
    pub largest_request: usize,
}

impl<R> Counting<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: 0,
            largest_request: 0,
        }
    }
}

impl<R: Read> Read for Counting<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.calls += 1;
        self.largest_request = self.largest_request.max(buf.len());
        self.inner.read(buf)
    }
}

/// Yields `data` on the first read, then fails with `kind` on every read.
#[derive(Debug)]
pub struct FailsAfter {
    data: Option<Vec<u8>>,
    kind: io::ErrorKind,
}

impl FailsAfter {
    pub fn new(data: &str, kind: io::ErrorKind) -> Self {
        Self {
            data: Some(data.as_bytes().to_vec()),
            kind,
        }
    }
}

impl Read for FailsAfter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.take() {
            Some(data) => {
                let n = data.len().min(buf.len());
                buf[..n].copy_from_slice(&data[..n]);
                Ok(n)
            }
            None => Err(io::Error::new(self.kind, "source failed")),
        }
    }
}
