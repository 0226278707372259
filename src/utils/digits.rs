use log::{debug, warn};

use crate::solver::constants::NUM_DIGITS;
use crate::utils::errors::UtilsError;

/// Smallest and largest numbers with exactly `NUM_DIGITS` decimal digits
pub fn number_range() -> (u32, u32) {
    let low = 10_u32.pow(NUM_DIGITS as u32 - 1);
    let high = 10_u32.pow(NUM_DIGITS as u32) - 1;
    (low, high)
}

/// # Errors
///
/// Returns an error if `number` does not have exactly `NUM_DIGITS` decimal digits.
pub fn split_digits(number: u32) -> Result<[u8; NUM_DIGITS], UtilsError> {
    let (low, high) = number_range();
    if number < low || number > high {
        warn!("Number {} is outside {}..={}", number, low, high);
        return Err(UtilsError::NumberOutOfRange {
            number,
            digits: NUM_DIGITS,
        });
    }

    let mut digits = [0_u8; NUM_DIGITS];
    let mut rest = number;
    for slot in digits.iter_mut().rev() {
        *slot = (rest % 10) as u8;
        rest /= 10;
    }

    debug!("Split {} into digits {:?}", number, digits);
    Ok(digits)
}
