//! Values must not depend on buffer capacity or on how the source splits
//! its reads.

use quickcheck::QuickCheck;

use super::chunk_helpers::{ChunkedSource, quickcheck_tests};
use crate::InputReader;

const SEPARATORS: [&str; 5] = [" ", "\n", "\t", "  \n ", "\r\n"];

#[derive(Debug, Clone, PartialEq)]
enum Item {
    Long(i64),
    Token(String),
}

fn render(items: &[Item], seps: &[u8]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            let pick = seps.get(i).copied().unwrap_or(0);
            out.push_str(SEPARATORS[usize::from(pick) % SEPARATORS.len()]);
        }
        match item {
            Item::Long(n) => out.push_str(&n.to_string()),
            Item::Token(t) => out.push_str(t),
        }
    }
    out
}

fn read_back<R: std::io::Read>(reader: &mut InputReader<R>, shape: &[Item]) -> Vec<Item> {
    shape
        .iter()
        .map(|item| match item {
            Item::Long(_) => Item::Long(reader.next_long().unwrap()),
            Item::Token(_) => Item::Token(reader.next_token().unwrap().unwrap()),
        })
        .collect()
}

/// Property: reading a sequence of integers and tokens yields the same values
/// whatever the buffer capacity and however the source splits its reads.
#[test]
fn capacity_and_chunking_do_not_change_values() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(
        numbers: Vec<i64>,
        words: Vec<String>,
        seps: Vec<u8>,
        capacity: u8,
        chunk: u8,
    ) -> bool {
        let mut words = words
            .iter()
            .map(|w| w.chars().filter(|&c| c > ' ').collect::<String>())
            .filter(|w| !w.is_empty());
        let mut items = Vec::new();
        for n in &numbers {
            items.push(Item::Long(*n));
            if let Some(word) = words.next() {
                items.push(Item::Token(word));
            }
        }
        items.extend(words.map(Item::Token));

        let text = render(&items, &seps);
        let capacity = 1 + usize::from(capacity) % 128;
        let chunk = 1 + usize::from(chunk) % 17;

        let source = ChunkedSource::new(text, chunk);
        let mut reader = InputReader::with_capacity(source, capacity).unwrap();
        let got = read_back(&mut reader, &items);
        got == items && reader.next_token().unwrap().is_none()
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<i64>, Vec<String>, Vec<u8>, u8, u8) -> bool);
}

/// Property: splitting any text into lines agrees with `str::split`, except
/// that a trailing newline does not produce a final empty line.
#[test]
fn lines_match_split_on_newline() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, capacity: u8, chunk: u8) -> bool {
        let mut expected: Vec<&str> = text.split('\n').collect();
        if text.is_empty() || text.ends_with('\n') {
            expected.pop();
        }

        let capacity = 1 + usize::from(capacity) % 64;
        let chunk = 1 + usize::from(chunk) % 9;
        let source = ChunkedSource::new(text.as_bytes(), chunk);
        let mut reader = InputReader::with_capacity(source, capacity).unwrap();

        let got: Vec<String> = reader.lines().map(Result::unwrap).collect();
        got == expected && reader.next_line().unwrap().is_none()
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(String, u8, u8) -> bool);
}
