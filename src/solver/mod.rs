pub mod constants;
mod core;
mod errors;

pub use self::core::EquationSearcher;
pub use errors::SolverError;

mod proptests;
