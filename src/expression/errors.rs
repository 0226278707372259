use thiserror::Error;

/// How a failed candidate is classified by the search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidOperand,
    InvalidExpression,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Modulo by zero")]
    ModuloByZero,
    #[error("Factorial is only defined for non-negative integers, got {0}")]
    FactorialDomain(f64),
    #[error("Factorial of {0} overflows")]
    FactorialOverflow(f64),
    #[error("Square root of negative number {0}")]
    NegativeSqrt(f64),
    #[error("Non-finite intermediate result")]
    NonFinite,
}

impl ExpressionError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ExpressionError::NonFinite => FailureKind::InvalidExpression,
            _ => FailureKind::InvalidOperand,
        }
    }
}

/// Errors produced while reading the textual equation form
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },
    #[error("Unknown function '{0}'")]
    UnknownFunction(String),
    #[error("Expected exactly one '==' in equation")]
    MissingEquality,
}
