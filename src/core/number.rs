//! Conversions between display text and numbers.
//!
//! Parsing is total: anything that is not a float literal reads as zero.
//! Formatting produces the shortest text that reads back to the same
//! value, switching to exponent notation for very large and very small
//! magnitudes.

/// Magnitude at and above which results are shown in exponent notation.
const EXPONENT_ABOVE: f64 = 1e21;

/// Magnitude below which non-zero results are shown in exponent notation.
const EXPONENT_BELOW: f64 = 1e-6;

/// Read the numeric value behind a display text.
///
/// `"5."` reads as 5 and an operator symbol such as `"+"` reads as 0.
///
/// # Example
///
/// ```rust
/// use tally::core::parse_display;
///
/// assert_eq!(parse_display("0.5"), 0.5);
/// assert_eq!(parse_display("5."), 5.0);
/// assert_eq!(parse_display("+"), 0.0);
/// ```
pub fn parse_display(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

/// Render a number the way the display shows results.
///
/// With `precision` set, the value is first rounded to that many
/// significant digits.
///
/// # Example
///
/// ```rust
/// use tally::core::format_number;
///
/// assert_eq!(format_number(8.0, None), "8");
/// assert_eq!(format_number(0.1 + 0.2, None), "0.30000000000000004");
/// assert_eq!(format_number(0.1 + 0.2, Some(10)), "0.3");
/// assert_eq!(format_number(1e21, None), "1e+21");
/// ```
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    let value = match precision {
        Some(digits) => round_significant(value, digits),
        None => value,
    };

    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers negative zero as well.
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        exponent_form(value)
    } else {
        value.to_string()
    }
}

fn round_significant(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || digits == 0 {
        return value;
    }
    format!("{:.*e}", digits - 1, value)
        .parse::<f64>()
        .unwrap_or(value)
}

/// `1.5e-7` stays as is, `1e21` becomes `1e+21`.
fn exponent_form(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_partial_literals() {
        assert_eq!(parse_display("0"), 0.0);
        assert_eq!(parse_display("0."), 0.0);
        assert_eq!(parse_display("12.5"), 12.5);
        assert_eq!(parse_display(".25"), 0.25);
        assert_eq!(parse_display("-3"), -3.0);
    }

    #[test]
    fn parse_failure_is_zero() {
        assert_eq!(parse_display("+"), 0.0);
        assert_eq!(parse_display("-"), 0.0);
        assert_eq!(parse_display("*"), 0.0);
        assert_eq!(parse_display("/"), 0.0);
        assert_eq!(parse_display(""), 0.0);
        assert_eq!(parse_display("1.2.3"), 0.0);
    }

    #[test]
    fn parse_reads_formatted_specials() {
        assert_eq!(parse_display("Infinity"), f64::INFINITY);
        assert_eq!(parse_display("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_display("1e+21"), 1e21);
    }

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(format_number(42.0, None), "42");
        assert_eq!(format_number(-7.0, None), "-7");
        assert_eq!(format_number(-0.0, None), "0");
    }

    #[test]
    fn fractions_use_shortest_form() {
        assert_eq!(format_number(0.5, None), "0.5");
        assert_eq!(format_number(2.0 / 3.0, None), "0.6666666666666666");
    }

    #[test]
    fn extreme_magnitudes_use_exponent() {
        assert_eq!(format_number(1e21, None), "1e+21");
        assert_eq!(format_number(-2.5e30, None), "-2.5e+30");
        assert_eq!(format_number(1.5e-7, None), "1.5e-7");
        assert_eq!(format_number(1e20, None), "100000000000000000000");
        assert_eq!(format_number(0.000001, None), "0.000001");
    }

    #[test]
    fn specials_are_named() {
        assert_eq!(format_number(f64::INFINITY, None), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY, None), "-Infinity");
        assert_eq!(format_number(f64::NAN, None), "NaN");
    }

    #[test]
    fn precision_rounds_significant_digits() {
        assert_eq!(format_number(2.0 / 3.0, Some(4)), "0.6667");
        assert_eq!(format_number(123456.0, Some(3)), "123000");
        assert_eq!(format_number(8.0, Some(5)), "8");
    }
}
