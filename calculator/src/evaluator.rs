//! Expression evaluation backed by `evalexpr`.
//!
//! Display texts only contain digits, `.` and `+ - * /`, but [`evaluate`] accepts anything `evalexpr`
//! parses (parentheses included). Integer literals are promoted to floats first so `/` is true division.

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("invalid expression: {0}")]
    Invalid(String),

    #[error("expression does not produce a number")]
    NotANumber,

    #[error("result is not finite: {0}")]
    NotFinite(f64),
}

/// Evaluates an arithmetic expression to a finite `f64`.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let prepared = promote_integer_literals(expression.trim());
    debug!(expression = %expression, prepared = %prepared, "Evaluating expression");

    let value = evalexpr::eval(&prepared).map_err(|e| EvalError::Invalid(e.to_string()))?;
    let number = value.as_number().map_err(|_| EvalError::NotANumber)?;

    if number.is_finite() {
        Ok(number)
    } else {
        Err(EvalError::NotFinite(number))
    }
}

/// Shortest decimal text for a result: `3`, `3.5`, `-0.25`. Negative zero prints as `0`.
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Rewrites every numeric literal without a `.` as a float literal (`7/2` → `7.0/2.0`).
fn promote_integer_literals(expression: &str) -> String {
    let mut prepared = String::with_capacity(expression.len() + 8);
    let mut literal = String::new();

    for c in expression.chars() {
        if c.is_ascii_digit() || c == '.' {
            literal.push(c);
            continue;
        }
        flush_literal(&mut prepared, &mut literal);
        prepared.push(c);
    }
    flush_literal(&mut prepared, &mut literal);

    prepared
}

fn flush_literal(prepared: &mut String, literal: &mut String) {
    if literal.is_empty() {
        return;
    }
    prepared.push_str(literal);
    if !literal.contains('.') {
        prepared.push_str(".0");
    }
    literal.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promote_integer_literals() {
        assert_eq!(promote_integer_literals("7/2"), "7.0/2.0");
        assert_eq!(promote_integer_literals("1.5+2"), "1.5+2.0");
        assert_eq!(promote_integer_literals("-3."), "-3.");
        assert_eq!(promote_integer_literals("(1+2)*3"), "(1.0+2.0)*3.0");
    }

    #[test]
    fn test_evaluate_basic_arithmetic() {
        assert_eq!(evaluate("1+2"), Ok(3.0));
        assert_eq!(evaluate("7/2"), Ok(3.5));
        assert_eq!(evaluate("2+3*4"), Ok(14.0));
        assert_eq!(evaluate("-5+2"), Ok(-3.0));
        assert_eq!(evaluate("(1+2)*3"), Ok(9.0));
    }

    #[test]
    fn test_evaluate_trailing_dot_literal() {
        assert_eq!(evaluate("3.+1"), Ok(4.0));
    }

    #[test]
    fn test_evaluate_division_by_zero_fails() {
        assert!(evaluate("1/0").is_err());
        assert!(evaluate("0/0").is_err());
    }

    #[test]
    fn test_evaluate_malformed() {
        assert!(matches!(evaluate("1+"), Err(EvalError::Invalid(_))));
        assert!(matches!(evaluate("Error"), Err(EvalError::Invalid(_))));
        assert!(evaluate("1..2").is_err());
    }

    #[test]
    fn test_evaluate_non_numeric() {
        assert_eq!(evaluate("1 == 1"), Err(EvalError::NotANumber));
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(3.0), "3");
        assert_eq!(format_result(3.5), "3.5");
        assert_eq!(format_result(-0.25), "-0.25");
        assert_eq!(format_result(-0.0), "0");
    }
}
