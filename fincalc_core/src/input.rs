//! # Input Parsing
//!
//! String handling at the boundary between a text field and the calculators.
//! Calculators only ever see parsed numbers; everything in this module deals
//! with what a user can type.
//!
//! - [`format_for_display`] echoes a value back with thousands separators
//! - [`parse_for_calculation`] strips everything but digits and one decimal point
//! - [`parse_optional_decimal`], [`parse_required_decimal`] and
//!   [`parse_whole_number`] turn sanitised text into numbers with a uniform
//!   blank-field policy
//!
//! ## Example
//!
//! ```rust
//! use fincalc_core::input::{format_for_display, parse_for_calculation};
//!
//! assert_eq!(format_for_display("1234567.891"), "1,234,567.891");
//! assert_eq!(parse_for_calculation("$1,234.5.6"), "1234.56");
//! ```

use crate::errors::{CalcError, CalcResult};

/// Insert `,` thousands separators into the integer part of a numeric string.
///
/// The fractional part (from the first `.`) is left untouched and existing
/// commas in the integer part are dropped before regrouping.
pub fn format_for_display(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let (integer_part, fraction_part) = match value.find('.') {
        Some(idx) => value.split_at(idx),
        None => (value, ""),
    };

    let integer: Vec<char> = integer_part.chars().filter(|c| *c != ',').collect();
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + fraction_part.len());
    for (i, c) in integer.iter().enumerate() {
        let remaining = integer.len() - i;
        // Separators only go between two digits
        if i > 0 && remaining % 3 == 0 && c.is_ascii_digit() && integer[i - 1].is_ascii_digit() {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    grouped.push_str(fraction_part);
    grouped
}

/// Keep only ASCII digits and the first decimal point.
pub fn parse_for_calculation(value: &str) -> String {
    let mut seen_point = false;
    value
        .chars()
        .filter(|c| match c {
            '0'..='9' => true,
            '.' if !seen_point => {
                seen_point = true;
                true
            }
            _ => false,
        })
        .collect()
}

/// Parse a decimal field, returning `default` when the field is blank.
///
/// Blank means nothing is left after [`parse_for_calculation`]. Anything else
/// must parse as a number (a lone `.` does not).
pub fn parse_optional_decimal(field: &str, raw: &str, default: f64) -> CalcResult<f64> {
    let cleaned = parse_for_calculation(raw);
    if cleaned.is_empty() {
        return Ok(default);
    }
    cleaned
        .parse::<f64>()
        .map_err(|_| CalcError::parse_error(field, raw))
}

/// Parse a decimal field that must not be blank.
pub fn parse_required_decimal(field: &str, raw: &str) -> CalcResult<f64> {
    let cleaned = parse_for_calculation(raw);
    if cleaned.is_empty() {
        return Err(CalcError::missing_field(field));
    }
    cleaned
        .parse::<f64>()
        .map_err(|_| CalcError::parse_error(field, raw))
}

/// Parse a whole-number field (month counts, ages).
///
/// Any fractional part is truncated, the way an integer field reads `"12.7"` as 12.
pub fn parse_whole_number(field: &str, raw: &str) -> CalcResult<u32> {
    let cleaned = parse_for_calculation(raw);
    if cleaned.is_empty() {
        return Err(CalcError::missing_field(field));
    }
    let integer_part = cleaned.split('.').next().unwrap_or_default();
    if integer_part.is_empty() {
        return Err(CalcError::parse_error(field, raw));
    }
    integer_part.parse::<u32>().map_err(|_| {
        // Only digits remain, so the only failure is overflow
        CalcError::out_of_range(field, integer_part, u32::MAX.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_for_display() {
        assert_eq!(format_for_display(""), "");
        assert_eq!(format_for_display("1"), "1");
        assert_eq!(format_for_display("123"), "123");
        assert_eq!(format_for_display("1234"), "1,234");
        assert_eq!(format_for_display("1234567"), "1,234,567");
        assert_eq!(format_for_display("1234.5678"), "1,234.5678");
        assert_eq!(format_for_display("1,23,4567"), "1,234,567");
        assert_eq!(format_for_display(".5"), ".5");
        assert_eq!(format_for_display("1000."), "1,000.");
    }

    #[test]
    fn test_parse_for_calculation() {
        assert_eq!(parse_for_calculation("1,234.56"), "1234.56");
        assert_eq!(parse_for_calculation("$ 1 000"), "1000");
        assert_eq!(parse_for_calculation("1.2.3.4"), "1.234");
        assert_eq!(parse_for_calculation("-50"), "50");
        assert_eq!(parse_for_calculation("abc"), "");
    }

    #[test]
    fn test_parse_optional_decimal() {
        assert_eq!(parse_optional_decimal("principal", "", 0.0), Ok(0.0));
        assert_eq!(parse_optional_decimal("principal", "  ", 0.0), Ok(0.0));
        assert_eq!(parse_optional_decimal("principal", "1,500.25", 0.0), Ok(1500.25));
        assert_eq!(
            parse_optional_decimal("principal", ".", 0.0),
            Err(CalcError::parse_error("principal", "."))
        );
    }

    #[test]
    fn test_parse_required_decimal() {
        assert_eq!(
            parse_required_decimal("rate", ""),
            Err(CalcError::missing_field("rate"))
        );
        assert_eq!(parse_required_decimal("rate", "5.5%"), Ok(5.5));
    }

    #[test]
    fn test_parse_whole_number() {
        assert_eq!(parse_whole_number("months", "12"), Ok(12));
        assert_eq!(parse_whole_number("months", "12.9"), Ok(12));
        assert_eq!(parse_whole_number("months", "1,200"), Ok(1200));
        assert_eq!(
            parse_whole_number("months", ""),
            Err(CalcError::missing_field("months"))
        );
        assert_eq!(
            parse_whole_number("months", ".5"),
            Err(CalcError::parse_error("months", ".5"))
        );
        assert!(matches!(
            parse_whole_number("months", "99999999999"),
            Err(CalcError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_display_then_parse_recovers_value() {
        for raw in ["0", "12", "1234", "1234567.89", "1000.", ".25"] {
            assert_eq!(
                parse_for_calculation(&format_for_display(raw)),
                parse_for_calculation(raw)
            );
        }
    }
}
