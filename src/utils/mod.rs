//! Utils module split into submodules

mod digits;
mod errors;
mod validation;

pub use digits::{number_range, split_digits};
pub use errors::UtilsError;
pub use validation::validate_num_digits;
