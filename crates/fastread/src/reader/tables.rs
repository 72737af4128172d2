//! Lookup tables shared by every reader, computed at compile time.
#![expect(clippy::inline_always)]

/// Maximum number of fractional digits [`next_double_fast`] accumulates.
///
/// Further digits are consumed and dropped.
///
/// [`next_double_fast`]: crate::InputReader::next_double_fast
pub const MAX_DECIMAL_PRECISION: usize = 21;

/// Digit value for each byte. Non-digit bytes map to zero, so malformed
/// numbers produce garbage instead of a panic.
pub(crate) static DIGIT_VALUES: [u8; 256] = build_digit_values();

/// `FRACTIONS[d][p]` is `d × 10^-(p + 1)`.
pub(crate) static FRACTIONS: [[f64; MAX_DECIMAL_PRECISION]; 10] = build_fractions();

const fn build_digit_values() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut byte = b'0';
    while byte <= b'9' {
        table[byte as usize] = byte - b'0';
        byte += 1;
    }
    table
}

// Powers of ten up to 10^22 are exact in an f64, so each entry is a single
// correctly rounded division, the same value the decimal literal would give.
const fn build_fractions() -> [[f64; MAX_DECIMAL_PRECISION]; 10] {
    let mut table = [[0.0; MAX_DECIMAL_PRECISION]; 10];
    let mut digit: u8 = 0;
    while digit < 10 {
        let mut scale = 10.0;
        let mut position = 0;
        while position < MAX_DECIMAL_PRECISION {
            table[digit as usize][position] = digit as f64 / scale;
            scale *= 10.0;
            position += 1;
        }
        digit += 1;
    }
    table
}

#[inline(always)]
pub(crate) fn digit_value(byte: u8) -> u8 {
    DIGIT_VALUES[usize::from(byte)]
}
