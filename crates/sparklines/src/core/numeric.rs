//! Number parsing and formatting with browser semantics
//!
//! Attribute values are parsed the way `parseInt(value, 10)` reads them, and
//! every number written back into the host is formatted the way a browser
//! stringifies it. Keeping both sides identical means a chart drawn here is
//! attribute-for-attribute the chart a page script would draw.

/// Parse the leading decimal integer of `input`
///
/// Leading whitespace is skipped, one optional sign is accepted, then the
/// longest run of ASCII digits is taken. Anything after the digits is
/// ignored. Returns `None` when no digit follows.
///
/// ```rust
/// use sparklines::core::parse_int_prefix;
///
/// assert_eq!(parse_int_prefix(" 42px"), Some(42.0));
/// assert_eq!(parse_int_prefix("-3.9"), Some(-3.0));
/// assert_eq!(parse_int_prefix("px42"), None);
/// ```
pub fn parse_int_prefix(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let run = digits.bytes().take_while(u8::is_ascii_digit).count();
    if run == 0 {
        return None;
    }

    // Correctly rounded, so long digit runs land on the nearest double
    let magnitude: f64 = digits[..run].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse an integer attribute, substituting `default` on any failure
///
/// The result stays a double, so digits beyond `i64` keep the magnitude a
/// page script would see.
pub fn parse_int_with_default(value: Option<&str>, default: f64) -> f64 {
    value.and_then(parse_int_prefix).unwrap_or(default)
}

/// Split a comma-separated series, mapping unparsable entries to `NaN`
pub fn parse_series(raw: &str) -> Vec<f64> {
    raw.split(',')
        .map(|entry| parse_int_prefix(entry).unwrap_or(f64::NAN))
        .collect()
}

/// Largest value of the series; `NaN` if any entry is `NaN`
///
/// An empty series yields negative infinity.
pub fn series_max(series: &[f64]) -> f64 {
    series.iter().fold(f64::NEG_INFINITY, |max, &value| {
        if max.is_nan() || value.is_nan() {
            f64::NAN
        } else if value > max {
            value
        } else {
            max
        }
    })
}

/// Sum of the series; `NaN` propagates
pub fn series_total(series: &[f64]) -> f64 {
    series.iter().sum()
}

/// Format a number the way the browser writes it into an attribute
///
/// Integral values carry no decimal point, `NaN` and the infinities are
/// spelled out, and negative zero prints as `0`. Magnitudes of `1e21` and
/// above or below `1e-6` switch to exponent form (`1e+21`, `3e-10`).
///
/// ```rust
/// use sparklines::core::format_number;
///
/// assert_eq!(format_number(1e20), "100000000000000000000");
/// assert_eq!(format_number(1.5e21), "1.5e+21");
/// assert_eq!(format_number(0.000001), "0.000001");
/// assert_eq!(format_number(-2.5e-7), "-2.5e-7");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        exponent_form(value)
    } else {
        format!("{}", value)
    }
}

/// Shortest digits in exponent form, with an explicit `+` on positive exponents
fn exponent_form(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Format a percentage with two decimals, halves rounded away from zero
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return format_number(value);
    }
    if value == 0.0 {
        return "0.00".to_string();
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("{:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_int_prefix_plain() {
        assert_eq!(parse_int_prefix("100"), Some(100.0));
        assert_eq!(parse_int_prefix("+7"), Some(7.0));
        assert_eq!(parse_int_prefix("-12"), Some(-12.0));
        assert_eq!(parse_int_prefix("007"), Some(7.0));
    }

    #[test]
    fn test_parse_int_prefix_lenient() {
        assert_eq!(parse_int_prefix("  12px"), Some(12.0));
        assert_eq!(parse_int_prefix("3.9"), Some(3.0));
        assert_eq!(parse_int_prefix("0x10"), Some(0.0));
        assert_eq!(parse_int_prefix("1e3"), Some(1.0));
    }

    #[test]
    fn test_parse_int_prefix_rejects() {
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("   "), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("+-1"), None);
        assert_eq!(parse_int_prefix(".5"), None);
    }

    #[test]
    fn test_parse_int_with_default() {
        assert_eq!(parse_int_with_default(Some("250"), 100.0), 250.0);
        assert_eq!(parse_int_with_default(Some("wide"), 100.0), 100.0);
        assert_eq!(parse_int_with_default(None, 30.0), 30.0);
        assert_eq!(parse_int_with_default(Some("-4"), 5.0), -4.0);
    }

    #[test]
    fn test_parse_int_with_default_keeps_large_magnitudes() {
        let width = parse_int_with_default(Some("100000000000000000000"), 100.0);
        assert_eq!(width, 1e20);
        assert_eq!(format_number(width), "100000000000000000000");

        let huge = parse_int_with_default(Some("1000000000000000000000"), 100.0);
        assert_eq!(format_number(huge), "1e+21");
    }

    #[test]
    fn test_parse_series_keeps_nan() {
        let series = parse_series("1,x,3");
        assert_eq!(series.len(), 3);
        assert_eq!(series[0], 1.0);
        assert!(series[1].is_nan());
        assert_eq!(series[2], 3.0);
    }

    #[test]
    fn test_parse_series_trailing_comma() {
        let series = parse_series("4,5,");
        assert_eq!(series.len(), 3);
        assert!(series[2].is_nan());
    }

    #[test]
    fn test_series_max() {
        assert_eq!(series_max(&[1.0, 5.0, 3.0]), 5.0);
        assert_eq!(series_max(&[-4.0, -2.0]), -2.0);
        assert!(series_max(&[1.0, f64::NAN, 3.0]).is_nan());
        assert!(series_max(&[f64::NAN, 1.0]).is_nan());
        assert_eq!(series_max(&[]), f64::NEG_INFINITY);
    }

    #[test]
    fn test_series_total() {
        assert_eq!(series_total(&[1.0, 1.0, 2.0]), 4.0);
        assert!(series_total(&[1.0, f64::NAN]).is_nan());
        assert_eq!(series_total(&[]), 0.0);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(30.0), "30");
        assert_eq!(format_number(47.5), "47.5");
        assert_eq!(format_number(-2.25), "-2.25");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_number_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-1e21), "-1e+21");
        assert_eq!(format_number(1.2345e25), "1.2345e+25");
        assert_eq!(format_number(3e-10), "3e-10");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-4.5e-9), "-4.5e-9");
    }

    #[test]
    fn test_format_number_fixed_form_boundaries() {
        assert_eq!(format_number(999999999999999900000.0), "999999999999999900000");
        assert_eq!(format_number(1e-6), "0.000001");
        assert_eq!(format_number(1.5e-6), "0.0000015");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(25.0), "25.00");
        assert_eq!(format_percent(100.0 / 3.0), "33.33");
        assert_eq!(format_percent(200.0 / 3.0), "66.67");
        assert_eq!(format_percent(12.125), "12.13");
        assert_eq!(format_percent(0.0), "0.00");
        assert_eq!(format_percent(f64::NAN), "NaN");
    }

    proptest! {
        #[test]
        fn prop_integer_strings_parse_exactly(n in -1_000_000i64..1_000_000) {
            prop_assert_eq!(parse_int_with_default(Some(&n.to_string()), 7.0), n as f64);
        }

        #[test]
        fn prop_non_numeric_falls_back(s in "[a-zA-Z_#%]{0,12}") {
            prop_assert_eq!(parse_int_with_default(Some(&s), 42.0), 42.0);
        }

        #[test]
        fn prop_integral_numbers_format_without_point(n in -1_000_000i64..1_000_000) {
            prop_assert_eq!(format_number(n as f64), n.to_string());
        }
    }
}
