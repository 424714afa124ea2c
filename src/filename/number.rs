// src/filename/number.rs

//! Locating and incrementing the last run of digits in a name.

use std::sync::LazyLock;

use regex::Regex;

/// The last run of ASCII digits: digits followed only by non-digits until the
/// end of the string. `\d` would also accept non-ASCII digits, hence `[0-9]`.
static LAST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)[^0-9]*$").expect("static regex is valid"));

/// The last run of digits in a token, with its byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber<'a> {
    pub digits: &'a str,
    pub leading_zeros: usize,
    pub start: usize,
    pub end: usize,
}

impl<'a> ParsedNumber<'a> {
    /// The run with its zero padding removed; `"0"` for an all-zero run.
    pub fn unpadded(&self) -> &'a str {
        let trimmed = self.digits.trim_start_matches('0');
        if trimmed.is_empty() {
            &self.digits[self.digits.len() - 1..]
        } else {
            trimmed
        }
    }

    pub fn is_all_zeros(&self) -> bool {
        self.leading_zeros > 0 && self.digits.len() == self.leading_zeros
    }
}

pub fn find_last_number(name: &str) -> Option<ParsedNumber<'_>> {
    let m = LAST_NUMBER.captures(name)?.get(1)?;
    Some(ParsedNumber {
        digits: m.as_str(),
        leading_zeros: count_leading_zeros(m.as_str()),
        start: m.start(),
        end: m.end(),
    })
}

/// Number of leading `0`s. A lone `"0"` is the value zero, not padding.
pub fn count_leading_zeros(digits: &str) -> usize {
    if digits.len() <= 1 || !digits.starts_with('0') {
        return 0;
    }
    digits.bytes().take_while(|&b| b == b'0').count()
}

/// Add one to a decimal digit string, carrying as far as needed.
///
/// Returns `None` if `digits` is empty or contains anything but ASCII digits.
pub fn increment_digits(digits: &str) -> Option<String> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut out = digits.as_bytes().to_vec();
    let mut carry = true;
    for byte in out.iter_mut().rev() {
        if !carry {
            break;
        }
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            carry = false;
        }
    }
    if carry {
        out.insert(0, b'1');
    }

    String::from_utf8(out).ok()
}
