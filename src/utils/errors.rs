use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Only {supported}-digit numbers are supported, got {requested}")]
    UnsupportedDigitCount { requested: usize, supported: usize },
    #[error("Number {number} does not have exactly {digits} digits")]
    NumberOutOfRange { number: u32, digits: usize },
}
