//! Numeric scanning straight out of the byte buffer.
//!
//! Neither routine validates its input: a non-digit byte inside a number
//! contributes zero, and integers wrap on overflow.

use std::io::Read;

use super::{
    DECIMAL_POINT, SIGN, SPACE,
    byte_buffer::{ByteBuffer, Skip},
    tables::{FRACTIONS, MAX_DECIMAL_PRECISION, digit_value},
};
use crate::ReadError;

/// Reads one signed decimal integer, accumulating in 64 bits.
///
/// Narrower results are obtained by truncation, which is exact for any value
/// that fits: wrapping arithmetic modulo 2<sup>64</sup> agrees with the same
/// arithmetic modulo 2<sup>32</sup> on the low bits.
pub(crate) fn scan_integer<R: Read>(bytes: &mut ByteBuffer<R>) -> Result<i64, ReadError> {
    if bytes.skip_until_above(SIGN - 1)? == Skip::EndOfStream {
        return Err(ReadError::EndOfStream);
    }

    let negative = bytes.peek() == Some(SIGN);
    if negative {
        bytes.consume(1);
    }

    let mut value: i64 = 0;
    loop {
        let window = bytes.unread();
        let (digits, delimited) = match window.iter().position(|&b| b <= SPACE) {
            Some(end) => (&window[..end], true),
            None => (window, false),
        };
        for &byte in digits {
            value = value
                .wrapping_mul(10)
                .wrapping_add(i64::from(digit_value(byte)));
        }
        let used = digits.len() + usize::from(delimited);
        bytes.consume(used);

        if delimited || !bytes.fill_more()? {
            break;
        }
    }

    Ok(if negative { value.wrapping_neg() } else { value })
}

/// Reads one floating-point number by summing digits.
///
/// The integral part is built as `value * 10 + digit`; each fractional digit
/// adds a precomputed `digit × 10^-(position + 1)`. Only the first
/// [`MAX_DECIMAL_PRECISION`] fractional digits are added, the rest are read
/// and dropped. Rounding error accumulates with every addition, so results
/// may differ from the correctly rounded value in the last few bits.
pub(crate) fn scan_double_fast<R: Read>(bytes: &mut ByteBuffer<R>) -> Result<f64, ReadError> {
    let first = loop {
        match bytes.next_byte()? {
            Some(byte) if byte <= SPACE => {}
            Some(byte) => break byte,
            None => return Err(ReadError::EndOfStream),
        }
    };

    let negative = first == SIGN;
    let mut current = if negative {
        bytes.next_byte()?
    } else {
        Some(first)
    };

    let mut value = 0.0_f64;
    while let Some(byte) = current.filter(|&b| b > DECIMAL_POINT) {
        value = value * 10.0 + f64::from(digit_value(byte));
        current = bytes.next_byte()?;
    }

    if current == Some(DECIMAL_POINT) {
        let mut position = 0;
        current = bytes.next_byte()?;
        while let Some(byte) = current.filter(|&b| b > SPACE) {
            if position < MAX_DECIMAL_PRECISION {
                value += FRACTIONS[usize::from(digit_value(byte))][position];
                position += 1;
            }
            current = bytes.next_byte()?;
        }
    }

    Ok(if negative { -value } else { value })
}
