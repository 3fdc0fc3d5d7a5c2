//! Floating-point-safe multiplication and division
//!
//! Binary floats turn `0.1 * 0.1` into `0.010000000000000002` and `0.3 / 0.05` into
//! `5.999999999999999`. These helpers round the raw result back to the number of decimal
//! places the operands actually carried.

use crate::error::{QtyError, Result};

/// Largest integer an f64 holds exactly (2^53).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Largest power of ten an f64 holds exactly.
const MAX_EXACT_POW10: u32 = 22;

/// Multiply all factors, then round to the combined decimal precision of the operands.
pub fn mul_safe(factors: &[f64]) -> f64 {
    let mut result = 1.0;
    let mut decimals = 0;
    for &f in factors {
        decimals += fraction_digits(f);
        result *= f;
    }
    if decimals == 0 {
        result
    } else {
        round_to(result, decimals)
    }
}

/// Divide `num` by `den` through [`mul_safe`].
pub fn div_safe(num: f64, den: f64) -> Result<f64> {
    if den == 0.0 {
        return Err(QtyError::DivideByZero);
    }

    let factor = pow10(fraction_digits(den));
    let inverse = factor / (factor * den);
    Ok(mul_safe(&[num, inverse]))
}

/// Number of digits after the decimal point in the shortest representation of `f`.
pub fn fraction_digits(f: f64) -> u32 {
    if !f.is_finite() {
        return 0;
    }
    // Display never uses exponent notation and prints the shortest round-trip form
    let repr = f.to_string();
    repr.split_once('.')
        .map_or(0, |(_, fraction)| fraction.len() as u32)
}

/// Round `value` to `decimals` places.
///
/// Returns `value` untouched when the scaled value can no longer be held as an exact
/// integer, since rounding would only add error there.
fn round_to(value: f64, decimals: u32) -> f64 {
    if decimals > MAX_EXACT_POW10 {
        return value;
    }
    let factor = pow10(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_INT {
        return value;
    }
    scaled.round() / factor
}

fn pow10(exp: u32) -> f64 {
    10f64.powi(exp as i32)
}
