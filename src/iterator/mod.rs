pub mod core;
pub mod types;

pub use self::core::{AssignmentIterator, CandidateIterator};
pub use types::Candidate;

#[cfg(test)]
mod tests;
