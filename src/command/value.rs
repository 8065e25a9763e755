//! Lenient value parsing
//!
//! Malformed input never fails: numbers fall back to 0 and triples to all
//! zeros, out-of-range numbers saturate to the target type.

use crate::color::{BLACK, Rgb, SignedColor};

/// Parse the leading integer of `text`
///
/// Leading whitespace and one sign are accepted, parsing stops at the first
/// non-digit. No digits yields 0.
pub fn parse_i32(text: &str) -> i32 {
    let text = text.trim_start();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let limit = i64::from(i32::MAX) + 1;
    let mut value: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        value = (value * 10 + i64::from(byte - b'0')).min(limit);
    }
    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

pub fn parse_u8(text: &str) -> u8 {
    parse_i32(text).clamp(0, i32::from(u8::MAX)) as u8
}

pub fn parse_i8(text: &str) -> i8 {
    parse_i32(text).clamp(i32::from(i8::MIN), i32::from(i8::MAX)) as i8
}

pub fn parse_u32(text: &str) -> u32 {
    u32::try_from(parse_i32(text)).unwrap_or(0)
}

/// `true` or any nonzero integer
pub fn parse_bool(text: &str) -> bool {
    text == "true" || parse_i32(text) != 0
}

/// Exactly three `;`-separated integers, empty tokens skipped
fn parse_triple(text: &str) -> Option<[i32; 3]> {
    let mut values = [0; 3];
    let mut count = 0;
    for token in text.split(';').filter(|token| !token.is_empty()) {
        if let Some(slot) = values.get_mut(count) {
            *slot = parse_i32(token);
        }
        count += 1;
    }
    (count == 3).then_some(values)
}

/// `R;G;B`, each channel saturated to `0..=255`
pub fn parse_color(text: &str) -> Rgb {
    parse_triple(text).map_or(BLACK, |[r, g, b]| {
        let channel = |value: i32| value.clamp(0, i32::from(u8::MAX)) as u8;
        Rgb {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    })
}

/// Signed `R;G;B` triple
pub fn parse_signed(text: &str) -> SignedColor {
    parse_triple(text).map_or_else(SignedColor::default, |[r, g, b]| {
        let channel = |value: i32| value.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16;
        SignedColor::new(channel(r), channel(g), channel(b))
    })
}
