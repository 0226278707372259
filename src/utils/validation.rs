use log::{debug, warn};

use crate::solver::constants::NUM_DIGITS;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error unless `num_digits` is the one supported digit count.
pub fn validate_num_digits(num_digits: usize) -> Result<(), UtilsError> {
    debug!("Validating digit count: {}", num_digits);

    if num_digits != NUM_DIGITS {
        warn!(
            "Unsupported digit count {}, only {} is implemented",
            num_digits, NUM_DIGITS
        );
        return Err(UtilsError::UnsupportedDigitCount {
            requested: num_digits,
            supported: NUM_DIGITS,
        });
    }

    Ok(())
}
