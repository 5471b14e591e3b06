//! Arithmetic evaluation and result formatting.
//!
//! `operate` performs one binary operation; `format_result` turns the value
//! into display text that fits the configured width.

use super::Operator;
use thiserror::Error;

/// Default number of characters a result may occupy on the display.
pub const DEFAULT_MAX_CHARS: usize = 9;

/// Reasons an operation produces the error sentinel instead of a number.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not a finite number")]
    NonFinite,
}

/// Apply `op` to `a` and `b`.
pub fn operate(op: Operator, a: f64, b: f64) -> Result<f64, ArithmeticError> {
    let value = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(ArithmeticError::DivisionByZero);
            }
            a / b
        }
        Operator::Power => a.powf(b),
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ArithmeticError::NonFinite)
    }
}

/// Format a result for the display.
///
/// Integers wider than `max_chars` switch to exponential notation with
/// `max_chars - 2` significant digits. Fractions wider than `max_chars` are
/// rounded to `max_chars` fractional digits, trailing zeros dropped. That
/// branch does not bound the integer part, so fractions of 1e8 and above
/// (e.g. `123456789.5`) stay wider than `max_chars`.
pub fn format_result(value: f64, max_chars: usize) -> String {
    let text = number_text(value);
    if text.len() <= max_chars {
        return text;
    }

    if value.fract() == 0.0 {
        let significant = max_chars.saturating_sub(2).max(1);
        to_exponential(value, significant - 1)
    } else {
        let fixed = format!("{:.*}", max_chars, value);
        // Reparse to drop trailing zeros.
        let trimmed: f64 = fixed.parse().unwrap_or(value);
        number_text(trimmed)
    }
}

/// Render a number the way a browser's `Number#toString` does.
///
/// Integral values have no fraction, negative zero prints as `0`, and very
/// large or very small magnitudes use `e+`/`e-` notation.
pub fn number_text(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        }
        .to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        signed_exponent(&format!("{:e}", value))
    } else {
        format!("{}", value)
    }
}

/// Exponential notation with `fraction_digits` digits after the point.
fn to_exponential(value: f64, fraction_digits: usize) -> String {
    signed_exponent(&format!("{:.*e}", fraction_digits, value))
}

/// Rust prints `1.5e10`/`1.5e-10`; the display wants `1.5e+10`/`1.5e-10`.
fn signed_exponent(formatted: &str) -> String {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(operate(Operator::Add, 5.0, 3.0), Ok(8.0));
        assert_eq!(operate(Operator::Subtract, 5.0, 8.0), Ok(-3.0));
        assert_eq!(operate(Operator::Multiply, 4.0, 2.5), Ok(10.0));
        assert_eq!(operate(Operator::Divide, 9.0, 3.0), Ok(3.0));
        assert_eq!(operate(Operator::Power, 2.0, 10.0), Ok(1024.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            operate(Operator::Divide, 42.0, 0.0),
            Err(ArithmeticError::DivisionByZero)
        );
        assert_eq!(
            operate(Operator::Divide, 0.0, -0.0),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow_is_not_finite() {
        assert_eq!(
            operate(Operator::Power, 10.0, 400.0),
            Err(ArithmeticError::NonFinite)
        );
        assert_eq!(
            operate(Operator::Power, -8.0, 0.5),
            Err(ArithmeticError::NonFinite)
        );
    }

    #[test]
    fn test_short_results_unchanged() {
        assert_eq!(format_result(8.0, 9), "8");
        assert_eq!(format_result(-3.0, 9), "-3");
        assert_eq!(format_result(2.5, 9), "2.5");
        assert_eq!(format_result(123456789.0, 9), "123456789");
        assert_eq!(format_result(-0.0, 9), "0");
    }

    #[test]
    fn test_long_integer_goes_exponential() {
        assert_eq!(format_result(123456789012.0, 9), "1.234568e+11");
        assert_eq!(format_result(-1234567890.0, 9), "-1.234568e+9");
        assert_eq!(format_result(1e20, 9), "1.000000e+20");
        // Already short in browser notation.
        assert_eq!(format_result(1e21, 9), "1e+21");
    }

    #[test]
    fn test_long_fraction_is_truncated() {
        assert_eq!(format_result(1.0 / 3.0, 9), "0.333333333");
        assert_eq!(format_result(2.0 / 3.0, 9), "0.666666667");
        assert_eq!(format_result(0.1 + 0.2, 9), "0.3");
    }

    #[test]
    fn test_number_text_matches_browser_rendering() {
        assert_eq!(number_text(1e21), "1e+21");
        assert_eq!(number_text(1.5e-7), "1.5e-7");
        assert_eq!(number_text(0.000001), "0.000001");
        assert_eq!(number_text(f64::INFINITY), "Infinity");
    }

    #[test]
    fn test_narrow_width() {
        assert_eq!(format_result(12345.0, 4), "1.2e+4");
    }
}
