//! # Number Formatting and Parsing
//!
//! Display strings for conversion results, and the lenient parser used for
//! text the user types into either field.
//!
//! ## Precision bands
//!
//! | `abs(value)` | Fraction digits |
//! |--------------|-----------------|
//! | `< 1`        | 6               |
//! | `< 100`      | 4               |
//! | otherwise    | 2               |
//!
//! Values exactly halfway between two display values round away from zero
//! (`1.03125` shows as `1.0313`). The fixed-precision string is re-parsed and printed again, which drops
//! trailing zeros. Formatted strings are for display only; never feed them
//! back into arithmetic.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::format::{format_number, parse_number};
//!
//! assert_eq!(format_number(2.5), "2.5");
//! assert_eq!(format_number(0.123456789), "0.123457");
//! assert_eq!(format_number(f64::NAN), "");
//!
//! assert_eq!(parse_number(" 12.5kg").unwrap(), 12.5);
//! assert!(parse_number("-").is_err());
//! ```

use crate::errors::{ConvertError, ConvertResult};

/// Values at or above this magnitude print in exponent form.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Number of fraction digits used for a value of this magnitude
pub fn precision_for(value: f64) -> usize {
    let abs = value.abs();
    if abs < 1.0 {
        6
    } else if abs < 100.0 {
        4
    } else {
        2
    }
}

/// Enough fraction digits to print any `f64` exactly (subnormals need 1074).
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Move `value` off an exact decimal tie at `precision` digits, away from
/// zero, so fixed formatting rounds `1.03125` to `1.0313` and not `1.0312`.
///
/// Values that are not exactly halfway are returned unchanged.
fn round_ties_away(value: f64, precision: usize) -> f64 {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value);
    let Some((_, fraction)) = exact.split_once('.') else {
        return value;
    };

    let tail = &fraction[precision..];
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return value;
    }

    let truncated = &exact[..exact.len() - tail.len()];
    match truncated.parse::<f64>() {
        Ok(kept) => kept + 10f64.powi(-(precision as i32)).copysign(value),
        Err(_) => value,
    }
}

/// Format a conversion result for display.
///
/// Non-finite values format to an empty string, which front ends treat as
/// "no result".
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let precision = precision_for(value);
    let fixed = format!("{:.*}", precision, round_ties_away(value, precision));
    let rounded: f64 = match fixed.parse() {
        Ok(v) => v,
        Err(_) => return fixed,
    };

    // "-0.000000" rounds to negative zero
    if rounded == 0.0 {
        return "0".to_string();
    }

    if rounded.abs() >= EXPONENT_THRESHOLD {
        return format!("{:e}", rounded).replacen("e", "e+", 1);
    }

    rounded.to_string()
}

/// Parse the leading number of `text`.
///
/// Leading whitespace is skipped and anything after the number is ignored,
/// so `"12abc"` is 12 and `"1e3"` is 1000. `"Infinity"` (optionally signed)
/// is accepted. Text without a numeric prefix (`""`, `"-"`, `"."`, `"abc"`,
/// `"nan"`) is an [`ConvertError::InvalidNumber`].
pub fn parse_number(text: &str) -> ConvertResult<f64> {
    let trimmed = text.trim_start();

    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned.starts_with("Infinity") {
        return Ok(if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let end = numeric_prefix_len(trimmed);
    if end == 0 {
        return Err(ConvertError::invalid_number(text));
    }

    trimmed[..end]
        .parse()
        .map_err(|_| ConvertError::invalid_number(text))
}

/// Length in bytes of the longest decimal literal at the start of `s`:
/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let integer_digits = digits_from(end);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = digits_from(end + 1);
        if integer_digits + fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if integer_digits + fraction_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = digits_from(exponent);
        if exponent_digits > 0 {
            end = exponent + exponent_digits;
        }
    }

    end
}
