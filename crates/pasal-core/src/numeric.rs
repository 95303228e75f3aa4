//! # Numeric Module
//!
//! Defensive parsing and display formatting for every number the cart
//! touches.
//!
//! ## Why Defensive Parsing?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FREE-TEXT PROBLEM                                                  │
//! │                                                                         │
//! │  Every numeric value on the page lives in a text field or a display    │
//! │  cell. Users paste, typos happen, cells can be empty:                   │
//! │                                                                         │
//! │    "12.5"      →  12.5                                                  │
//! │    "12.5 kg"   →  12.5   (trailing junk ignored)                        │
//! │    ""          →  0.0                                                   │
//! │    "abc"       →  0.0                                                   │
//! │                                                                         │
//! │  A malformed field must never abort a totals recompute. Anything       │
//! │  unparsable contributes zero and the sums stay well-defined.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pasal_core::numeric::{parse_num, format_amount};
//!
//! let qty = parse_num("2.5");
//! let price = parse_num("10");
//! assert_eq!(format_amount(price * qty), "25.00");
//!
//! // Garbage never panics, it just counts as zero
//! assert_eq!(parse_num("n/a"), 0.0);
//! ```

// =============================================================================
// Parsing
// =============================================================================

/// Parses the longest leading decimal-number prefix of `text` as an `f64`.
///
/// Mirrors how browsers read numbers out of form fields: leading whitespace
/// is skipped, an optional sign, digits, one decimal point, and a complete
/// exponent are consumed, and everything after the prefix is ignored. If no
/// digits are found at all the result is `0.0`, never an error.
///
/// ## Example
/// ```rust
/// use pasal_core::numeric::parse_num;
///
/// assert_eq!(parse_num("12.5"), 12.5);
/// assert_eq!(parse_num("  -3"), -3.0);
/// assert_eq!(parse_num(".5"), 0.5);
/// assert_eq!(parse_num("2.5 boxes"), 2.5);
/// assert_eq!(parse_num(""), 0.0);
/// assert_eq!(parse_num("oops"), 0.0);
/// ```
pub fn parse_num(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return 0.0;
    }

    // An exponent only counts when it is complete ("1e" stays 1, "1e3" is 1000)
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut cursor = end + 1;
        if cursor < bytes.len() && (bytes[cursor] == b'+' || bytes[cursor] == b'-') {
            cursor += 1;
        }
        let exponent_digits = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exponent_digits {
            end = cursor;
        }
    }

    s[..end].parse::<f64>().unwrap_or(0.0)
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats a monetary or total value with exactly two decimal places.
///
/// This is the display format of every price cell, tax cell, and totals
/// field on the cart page.
///
/// ## Example
/// ```rust
/// use pasal_core::numeric::format_amount;
///
/// assert_eq!(format_amount(21.0), "21.00");
/// assert_eq!(format_amount(47.5), "47.50");
/// assert_eq!(format_amount(-5.5), "-5.50");
/// ```
pub fn format_amount(value: f64) -> String {
    // Negative zero renders as plain zero
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.2}", value)
}

/// Formats a quantity the way it is written back into its input field:
/// the shortest plain representation, with no forced decimals.
///
/// ## Example
/// ```rust
/// use pasal_core::numeric::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(2.5), "2.5");
/// ```
pub fn format_number(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_string()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_num("0"), 0.0);
        assert_eq!(parse_num("12"), 12.0);
        assert_eq!(parse_num("12.5"), 12.5);
        assert_eq!(parse_num("-3"), -3.0);
        assert_eq!(parse_num("+4.25"), 4.25);
    }

    #[test]
    fn test_parse_skips_leading_whitespace() {
        assert_eq!(parse_num("  7.5"), 7.5);
        assert_eq!(parse_num("\t-2"), -2.0);
    }

    #[test]
    fn test_parse_partial_forms() {
        assert_eq!(parse_num(".5"), 0.5);
        assert_eq!(parse_num("5."), 5.0);
        assert_eq!(parse_num("1.2.3"), 1.2);
    }

    #[test]
    fn test_parse_ignores_trailing_junk() {
        assert_eq!(parse_num("12.5abc"), 12.5);
        assert_eq!(parse_num("3 boxes"), 3.0);
        assert_eq!(parse_num("10%"), 10.0);
    }

    #[test]
    fn test_parse_invalid_is_zero() {
        assert_eq!(parse_num(""), 0.0);
        assert_eq!(parse_num("   "), 0.0);
        assert_eq!(parse_num("abc"), 0.0);
        assert_eq!(parse_num("-"), 0.0);
        assert_eq!(parse_num("."), 0.0);
        assert_eq!(parse_num("e5"), 0.0);
    }

    #[test]
    fn test_parse_exponents() {
        assert_eq!(parse_num("1e3"), 1000.0);
        assert_eq!(parse_num("2.5e-1"), 0.25);
        // Incomplete exponent backtracks to the mantissa
        assert_eq!(parse_num("1e"), 1.0);
        assert_eq!(parse_num("1e+"), 1.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(21.0), "21.00");
        assert_eq!(format_amount(47.5), "47.50");
        assert_eq!(format_amount(-5.5), "-5.50");
        // 2.9375 and 2.0625 are exact in binary, so rounding is unambiguous
        assert_eq!(format_amount(2.9375), "2.94");
        assert_eq!(format_amount(2.0625), "2.06");
    }

    #[test]
    fn test_format_amount_negative_zero() {
        assert_eq!(format_amount(-0.0), "0.00");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_parse_format_round_trip_for_display_cells() {
        // Display cells are written with format_amount and read back with
        // parse_num on every recompute; the value must survive.
        for value in [0.0, 10.0, 10.99, 123.45] {
            assert_eq!(parse_num(&format_amount(value)), value);
        }
    }
}
