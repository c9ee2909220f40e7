//! Signed amount strings: parsing, thousands formatting and sign inversion.
//!
//! Amounts travel as text so that whatever the statement printed survives to
//! the sink untouched. Arithmetic only happens on inversion.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse `-1,234.56` style text into a decimal. Thousands separators and
/// surrounding whitespace are ignored.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let clean: String = s.trim().chars().filter(|c| *c != ',').collect();
    if clean.is_empty() {
        return None;
    }
    Decimal::from_str(&clean).ok()
}

/// Format with two decimal places and comma thousands separators.
/// Negative zero prints as `0.00`.
pub fn format_amount(value: Decimal) -> String {
    let value = value.round_dp(2);
    let negative = value.is_sign_negative() && !value.is_zero();
    let digits = format!("{:.2}", value.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped}.{frac_part}")
    } else {
        format!("{grouped}.{frac_part}")
    }
}

/// Flip the sign of an amount string. Text that does not parse as a number is
/// returned unchanged.
pub fn invert_amount(s: &str) -> String {
    match parse_amount(s) {
        Some(value) => format_amount(-value),
        None => s.to_string(),
    }
}

/// Prefix a bare column value with a minus sign. Zero stays unsigned.
pub fn debit(s: &str) -> String {
    let bare = s.trim_start_matches('-');
    if parse_amount(bare).is_some_and(|v| v.is_zero()) {
        return bare.to_string();
    }
    format!("-{bare}")
}
