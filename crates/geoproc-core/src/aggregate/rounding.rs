//! Fixed-precision rounding for output coordinates.

/// Decimal places kept on every output coordinate.
pub const COORDINATE_DECIMALS: usize = 4;

/// Magnitude from which every `f64` is an integer (2^52).
const INTEGRAL_MAGNITUDE: f64 = 4_503_599_627_370_496.0;

/// Rounds `value` to `decimals` places, half to even on the exact binary
/// value, then returns the nearest `f64` to the rounded decimal.
///
/// Non-finite values and values with no fractional part to round are
/// returned unchanged. `-0.0` results are normalised to `0.0`.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() || value.abs() >= INTEGRAL_MAGNITUDE {
        return value;
    }

    // Float formatting is correctly rounded, so this is exact decimal
    // rounding, not truncation.
    let rounded = format!("{value:.decimals$}")
        .parse::<f64>()
        .unwrap_or(value);
    rounded + 0.0
}
