#![no_main]
use std::io::{self, Read};

use arbitrary::Arbitrary;
use fastread::{InputReader, ReadError};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Copy, Arbitrary)]
enum Op {
    Byte,
    Int,
    Long,
    I8,
    Token,
    Line,
    Double,
    DoubleFast,
}

#[derive(Debug, Arbitrary)]
struct Input {
    capacity: u8,
    max_chunk: u8,
    ops: Vec<Op>,
    data: Vec<u8>,
}

/// Hands out at most `max_chunk` bytes per read.
struct Chunked<'a> {
    data: &'a [u8],
    max_chunk: usize,
}

impl Read for Chunked<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.data.len().min(buf.len()).min(self.max_chunk);
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[derive(Debug, PartialEq)]
enum Outcome {
    Byte(Option<u8>),
    Int(i64),
    Float(u64),
    Text(Option<Vec<u8>>),
    EndOfStream,
    Malformed,
}

fn apply<R: Read>(reader: &mut InputReader<R>, op: Op) -> Outcome {
    let result = match op {
        Op::Byte => reader.next_byte().map(Outcome::Byte),
        Op::Int => reader.next_int().map(|v| Outcome::Int(v.into())),
        Op::Long => reader.next_long().map(Outcome::Int),
        Op::I8 => reader.next_i8().map(|v| Outcome::Int(v.into())),
        Op::Token => reader
            .next_token_bytes()
            .map(|t| Outcome::Text(t.map(|t| t.to_vec()))),
        Op::Line => reader
            .next_line_bytes()
            .map(|l| Outcome::Text(l.map(|l| l.to_vec()))),
        Op::Double => reader.next_double().map(|v| Outcome::Float(v.to_bits())),
        Op::DoubleFast => reader.next_double_fast().map(|v| Outcome::Float(v.to_bits())),
    };
    match result {
        Ok(outcome) => outcome,
        Err(ReadError::EndOfStream) => Outcome::EndOfStream,
        Err(ReadError::MalformedFloat { .. }) => Outcome::Malformed,
        Err(err) => panic!("in-memory source failed: {err}"),
    }
}

// Whatever the buffer capacity and read sizes, the same operations must
// produce the same outcomes as a reader that sees the whole input at once.
fuzz_target!(|input: Input| {
    let capacity = 1 + usize::from(input.capacity);
    let max_chunk = 1 + usize::from(input.max_chunk);

    let mut small = InputReader::with_capacity(
        Chunked {
            data: &input.data,
            max_chunk,
        },
        capacity,
    )
    .unwrap();
    let mut whole = InputReader::new(input.data.as_slice());

    for &op in &input.ops {
        assert_eq!(apply(&mut small, op), apply(&mut whole, op), "{op:?}");
    }
});
