//! Conversions between the display text and `f64`

use crate::error::{CalcError, CalcResult};

/// 2^63: integral values below this in magnitude fit an `i64` exactly.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Render a value for the display.
///
/// Integral values print without a decimal point (`5.0` → `"5"`); anything
/// else uses the default `f64` formatting. Negative zero prints as `"0"`.
pub fn format_number(n: f64) -> String {
    if n == n.trunc() && n.abs() < I64_LIMIT {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Parse the display text back into a number.
pub fn parse_display(text: &str) -> CalcResult<f64> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CalcError::InvalidNumber(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values_drop_the_point() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1e15), "1000000000000000");
    }

    #[test]
    fn test_fractional_values_use_default_formatting() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.125), "-0.125");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_huge_integral_values_stay_integral() {
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_parse_accepts_partial_entry() {
        assert_eq!(parse_display("0."), Ok(0.0));
        assert_eq!(parse_display("-3.5"), Ok(-3.5));
        assert_eq!(parse_display("12."), Ok(12.0));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        for bad in ["Error", "-", "", "inf", "NaN"] {
            assert_eq!(
                parse_display(bad),
                Err(CalcError::InvalidNumber(bad.to_string()))
            );
        }
    }
}
