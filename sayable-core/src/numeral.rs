//! Integer and decimal to English words
//!
//! The converter reads integers by recursive grouping (hundreds, thousands,
//! millions, billions) and reads fractional digits one by one. Tokens outside
//! the exact `i64` range are returned as written.

use regex::{Captures, Regex};
use std::sync::LazyLock;

const UNITS: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const DIGITS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

static NUMERAL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+(?:\.\d+)?\b").expect("numeral token pattern is valid"));

/// Convert a signed integer to words.
///
/// ```
/// use sayable_core::numeral::convert;
///
/// assert_eq!(convert(0), "zero");
/// assert_eq!(convert(-42), "minus forty two");
/// assert_eq!(convert(1_205), "one thousand two hundred five");
/// ```
pub fn convert(n: i64) -> String {
    if n < 0 {
        return format!("minus {}", convert_unsigned(n.unsigned_abs()));
    }
    convert_unsigned(n.unsigned_abs())
}

fn convert_unsigned(n: u64) -> String {
    match n {
        0 => "zero".to_string(),
        1..=19 => UNITS[n as usize].to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                ones => format!("{tens} {}", UNITS[ones as usize]),
            }
        }
        100..=999 => with_remainder(format!("{} hundred", UNITS[(n / 100) as usize]), n % 100),
        1_000..=999_999 => scaled(n, 1_000, "thousand"),
        1_000_000..=999_999_999 => scaled(n, 1_000_000, "million"),
        _ => scaled(n, 1_000_000_000, "billion"),
    }
}

fn scaled(n: u64, divisor: u64, word: &str) -> String {
    with_remainder(format!("{} {word}", convert_unsigned(n / divisor)), n % divisor)
}

fn with_remainder(head: String, remainder: u64) -> String {
    if remainder == 0 {
        head
    } else {
        format!("{head} {}", convert_unsigned(remainder))
    }
}

/// Name of a single decimal digit, `None` for anything else.
pub fn digit_word(ch: char) -> Option<&'static str> {
    ch.to_digit(10).map(|d| DIGITS[d as usize])
}

/// Read a run of digits one by one (`"911"` -> `"nine one one"`).
pub fn spell_digits(digits: &str) -> String {
    digits
        .chars()
        .filter_map(digit_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert a decimal token such as `"3.14"`, `"-2.50"` or `"12"` to words.
///
/// A fractional part made only of zeros is dropped; otherwise every
/// fractional digit is read by name, trailing zeros included. Tokens that
/// are not plain decimals, or whose integer part overflows `i64`, are
/// returned unchanged.
pub fn convert_decimal(token: &str) -> String {
    let (negative, unsigned) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return token.to_string();
    }
    let Ok(value) = int_part.parse::<u64>() else {
        return token.to_string();
    };
    if value > i64::MAX as u64 {
        return token.to_string();
    }

    let int_words = convert_unsigned(value);
    let spoken = match frac_part {
        None => int_words,
        Some(frac) if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) => {
            return token.to_string();
        }
        Some(frac) if frac.bytes().all(|b| b == b'0') => int_words,
        Some(frac) => format!("{int_words} point {}", spell_digits(frac)),
    };

    if negative {
        format!("minus {spoken}")
    } else {
        spoken
    }
}

/// Convert a floating point value to words using its shortest decimal form.
///
/// ```
/// use sayable_core::numeral::convert_f64;
///
/// assert_eq!(convert_f64(3.14), "three point one four");
/// assert_eq!(convert_f64(7.0), "seven");
/// ```
pub fn convert_f64(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        return convert(value as i64);
    }
    convert_decimal(&format!("{value}"))
}

/// Render a decimal amount with a spoken point, keeping the digits
/// (`"2.5"` -> `"2 point 5"`, `"1.08"` -> `"1 point 0 8"`).
///
/// Fraction digits are separated so the numeral pass reads them one by one
/// instead of as a number.
pub fn spoken_decimal(amount: &str) -> String {
    match amount.split_once('.') {
        Some((whole, frac)) if !frac.is_empty() => {
            let digits: Vec<String> = frac.chars().map(String::from).collect();
            format!("{whole} point {}", digits.join(" "))
        }
        _ => amount.to_string(),
    }
}

/// Replace every remaining integer/decimal token in `text` with words.
pub fn expand_numerals(text: &str) -> String {
    NUMERAL_TOKEN
        .replace_all(text, |caps: &Captures<'_>| convert_decimal(&caps[0]))
        .into_owned()
}
