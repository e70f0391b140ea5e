//! Conversion between ASCII and Persian digits.

use crate::consts::PERSIAN_ZERO;

const PERSIAN_NINE: char = '\u{06F9}';

/// Replaces every ASCII digit with the matching Persian digit.
///
/// ```
/// assert_eq!(dualcal::to_local_digits("1403-03-30"), "۱۴۰۳-۰۳-۳۰");
/// ```
pub fn to_local_digits(s: &str) -> String {
    s.chars()
        .map(|c| c.to_digit(10).map_or(c, |d| shift(PERSIAN_ZERO, d)))
        .collect()
}

/// Replaces every Persian digit with the matching ASCII digit.
pub fn to_ascii_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            PERSIAN_ZERO..=PERSIAN_NINE => shift('0', u32::from(c) - u32::from(PERSIAN_ZERO)),
            _ => c,
        })
        .collect()
}

fn shift(zero: char, digit: u32) -> char {
    char::from_u32(u32::from(zero) + digit).unwrap_or(zero)
}
