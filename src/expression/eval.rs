use log::trace;

use crate::expression::ast::{Equation, Expression};
use crate::expression::errors::ExpressionError;
use crate::solver::constants::{EPSILON, MAX_FACTORIAL_OPERAND};

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

#[inline]
fn is_integer(value: f64) -> bool {
    if value.abs() > 2_f64.powi(52) {
        true
    } else {
        (value - value.round()).abs() < f64::EPSILON
    }
}

/// Floored modulo: the result takes the sign of the divisor.
#[inline]
fn floored_mod(left: f64, right: f64) -> f64 {
    let rem = left % right;
    if !is_zero(rem) && (rem < 0.0) != (right < 0.0) {
        rem + right
    } else {
        rem
    }
}

fn factorial(value: f64) -> Result<f64, ExpressionError> {
    if value < 0.0 || !is_integer(value) {
        return Err(ExpressionError::FactorialDomain(value));
    }
    let n = value.round();
    if n > MAX_FACTORIAL_OPERAND {
        return Err(ExpressionError::FactorialOverflow(value));
    }
    Ok((2..=n as u32).fold(1.0, |acc, k| acc * f64::from(k)))
}

fn finite(value: f64) -> Result<f64, ExpressionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExpressionError::NonFinite)
    }
}

impl Expression {
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division or modulo by zero
    /// - Factorial of a negative or non-integer value, or one that overflows
    /// - Square root of a negative number
    /// - Any operation producing a non-finite value
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => finite(l.evaluate()? + r.evaluate()?),
            Expression::Sub(l, r) => finite(l.evaluate()? - r.evaluate()?),
            Expression::Mul(l, r) => finite(l.evaluate()? * r.evaluate()?),
            Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if is_zero(right) {
                    Err(ExpressionError::DivisionByZero)
                } else {
                    finite(left / right)
                }
            }
            Expression::Mod(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if is_zero(right) {
                    Err(ExpressionError::ModuloByZero)
                } else {
                    finite(floored_mod(left, right))
                }
            }
            Expression::Paren(e) => e.evaluate(),
            Expression::Sqrt(e) => {
                let val = e.evaluate()?;
                if val < 0.0 {
                    Err(ExpressionError::NegativeSqrt(val))
                } else {
                    Ok(val.sqrt())
                }
            }
            Expression::Factorial(e) => factorial(e.evaluate()?).and_then(finite),
        };

        if let Err(e) = &result {
            trace!("Evaluation of {} failed: {}", self, e);
        }

        result
    }
}

impl Equation {
    /// Evaluate both sides independently.
    ///
    /// # Errors
    ///
    /// Returns the first evaluation error from either side.
    pub fn evaluate(&self) -> Result<(f64, f64), ExpressionError> {
        Ok((self.lhs.evaluate()?, self.rhs.evaluate()?))
    }

    /// True when both sides evaluate to values within `EPSILON` of each other.
    ///
    /// # Errors
    ///
    /// Returns the first evaluation error from either side.
    pub fn holds(&self) -> Result<bool, ExpressionError> {
        let (left, right) = self.evaluate()?;
        Ok((left - right).abs() < EPSILON)
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::{factorial, floored_mod, is_integer, is_zero};
    use crate::expression::errors::ExpressionError;

    #[test]
    fn test_is_zero() {
        assert!(is_zero(0.0));
        assert!(is_zero(f64::EPSILON / 2.0));
        assert!(!is_zero(f64::EPSILON * 2.0));
        assert!(!is_zero(1.0));
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer(1.0));
        assert!(is_integer(-17.0));
        assert!(is_integer(9_f64.sqrt()));
        assert!(!is_integer(1.5));
        assert!(!is_integer(2_f64.sqrt()));
        assert!(is_integer(2_f64.powi(53)));
    }

    #[test]
    fn test_floored_mod_follows_divisor_sign() {
        assert_eq!(floored_mod(7.0, 3.0), 1.0);
        assert_eq!(floored_mod(-7.0, 3.0), 2.0);
        assert_eq!(floored_mod(7.0, -3.0), -2.0);
        assert_eq!(floored_mod(6.0, 3.0), 0.0);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0.0), Ok(1.0));
        assert_eq!(factorial(1.0), Ok(1.0));
        assert_eq!(factorial(5.0), Ok(120.0));
        assert_eq!(factorial(-1.0), Err(ExpressionError::FactorialDomain(-1.0)));
        assert_eq!(factorial(2.5), Err(ExpressionError::FactorialDomain(2.5)));
        assert_eq!(
            factorial(171.0),
            Err(ExpressionError::FactorialOverflow(171.0))
        );
        assert!(factorial(170.0).is_ok_and(f64::is_finite));
    }
}
