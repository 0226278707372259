// Search configuration constants
pub const NUM_DIGITS: usize = 4;
pub const SLOTS: usize = NUM_DIGITS - 1;
pub const EPSILON: f64 = 1e-9;
/// Largest factorial operand that still fits in an `f64` (170! ≈ 7.3e306)
pub const MAX_FACTORIAL_OPERAND: f64 = 170.0;
