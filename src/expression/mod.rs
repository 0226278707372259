//! Expression module split into submodules for clarity

mod ast;
mod display;
mod errors;
mod eval;
mod parse;

pub use ast::{Equation, Expression};
pub use errors::{ExpressionError, FailureKind, ParseError};

#[cfg(test)]
mod tests;
