//! Fourfold - find a true equation for every 4-digit number
//!
//! Each number's digits are kept in order and joined by operators from a fixed
//! catalog, with one equality and optional parentheses, square roots and
//! factorials. The first equation that holds under a fixed search order is
//! kept for each number.

pub mod catalog;
pub mod expression;
pub mod iterator;
pub mod solutions;
pub mod solver;
pub mod template;
pub mod utils;

// Re-export the main public API
pub use catalog::{BaseOperator, CatalogError, Modifier, OperatorCatalog, OperatorToken};
pub use expression::{Equation, Expression, ExpressionError, FailureKind, ParseError};
pub use solutions::{
    BuildConfig, LogObserver, NoopObserver, ProgressObserver, SolutionMap, SolutionMapBuilder,
    Summary, build,
};
pub use solver::{EquationSearcher, SolverError};
pub use template::{Template, TemplateSet};
pub use utils::UtilsError;

/// Find the first equation for a single 4-digit number
///
/// This is a convenience function that creates a default searcher.
///
/// # Returns
///
/// * `Ok(Some(Equation))` - The first equation, in search order, that holds
/// * `Ok(None)` - No template and operator assignment yields a true equation
/// * `Err(SolverError)` - The number does not have exactly four digits
///
/// # Errors
///
/// Returns an error if `number` is outside `1000..=9999`.
///
/// # Examples
///
/// ```
/// use fourfold::search;
///
/// match search(1234) {
///     Ok(Some(eq)) => println!("Found: {}", eq),
///     Ok(None) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn search(number: u32) -> Result<Option<Equation>, SolverError> {
    EquationSearcher::new().search(number)
}
