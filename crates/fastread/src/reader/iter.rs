use core::iter::FusedIterator;
use std::io::Read;

use super::InputReader;
use crate::ReadError;

/// Iterator over the remaining whitespace-delimited tokens of a reader,
/// created by [`InputReader::tokens`].
///
/// Stops at end of stream. After yielding an error it yields nothing more.
#[derive(Debug)]
pub struct Tokens<'a, R> {
    reader: &'a mut InputReader<R>,
    done: bool,
}

impl<'a, R: Read> Tokens<'a, R> {
    pub(super) fn new(reader: &'a mut InputReader<R>) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: Read> Iterator for Tokens<'_, R> {
    type Item = Result<String, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.reader.next_token().transpose();
        self.done = !matches!(item, Some(Ok(_)));
        item
    }
}

impl<R: Read> FusedIterator for Tokens<'_, R> {}

/// Iterator over the remaining lines of a reader, created by
/// [`InputReader::lines`].
///
/// Stops at end of stream. After yielding an error it yields nothing more.
#[derive(Debug)]
pub struct Lines<'a, R> {
    reader: &'a mut InputReader<R>,
    done: bool,
}

impl<'a, R: Read> Lines<'a, R> {
    pub(super) fn new(reader: &'a mut InputReader<R>) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: Read> Iterator for Lines<'_, R> {
    type Item = Result<String, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.reader.next_line().transpose();
        self.done = !matches!(item, Some(Ok(_)));
        item
    }
}

impl<R: Read> FusedIterator for Lines<'_, R> {}
