//! String/number conversions needed to recognise array index names

use crate::prelude::*;

/// 2^32, the modulus of ToUint32
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Integral values below this print as plain digits
const MAX_PLAIN_INTEGER: f64 = 1e21;

fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000B}'
            | '\u{000C}'
            | ' '
            | '\u{00A0}'
            | '\u{FEFF}'
            | '\n'
            | '\r'
            | '\u{2028}'
            | '\u{2029}'
    ) || c.is_whitespace()
}

/// StringToNumber for the subset of numeric literal syntax script strings use.
///
/// Surrounding whitespace is ignored and an empty string is 0. Anything that
/// is not a complete numeric literal is NaN.
pub fn string_to_number(s: &str) -> f64 {
    let s = s.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s.strip_prefix('+').unwrap_or(s)),
    };
    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }
    if !is_decimal_literal(unsigned) {
        return f64::NAN;
    }
    unsigned.parse::<f64>().map_or(f64::NAN, |n| sign * n)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut value = 0.0;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    value
}

/// Digits with an optional fraction and exponent; rejects the spellings
/// Rust's float parser accepts but script syntax does not ("inf", "nan").
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut digits = 0;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
        digits += 1;
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return false;
    }
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        let start = i;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        if i == start {
            return false;
        }
    }
    i == bytes.len()
}

/// ToUint32: NaN and infinities map to 0, everything else is truncated and
/// wrapped modulo 2^32.
pub fn number_to_uint32(n: f64) -> u32 {
    if !n.is_finite() {
        return 0;
    }
    let wrapped = math::rem_euclid(math::trunc(n), TWO_POW_32);
    wrapped as u32
}

/// Number to its canonical string form.
///
/// Integral values print as plain decimal digits ("0" for negative zero);
/// other finite values use the shortest round-trip representation.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return String::from("NaN");
    }
    if n.is_infinite() {
        return String::from(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if n == 0.0 {
        return String::from("0");
    }
    if math::trunc(n) == n && n.abs() < MAX_PLAIN_INTEGER {
        return format!("{:.0}", n);
    }
    format!("{}", n)
}

/// The array index named by `name`, if `name` is the canonical decimal text
/// of a uint32 ("7" yes; "07", "7.0", "+7" and "4294967296" no).
pub fn canonical_index(name: &str) -> Option<u32> {
    let index = number_to_uint32(string_to_number(name));
    (number_to_string(index as f64) == name).then_some(index)
}
