//! Logarithms and powers.

use crate::errors::{DomainError, Outcome, Saturate};
use crate::math::Scalar;

/// Natural logarithm.
pub fn try_ln(x: Scalar) -> Outcome {
    if x <= 0.0 {
        return Err(DomainError::NonPositiveLogarithm("logarithm::ln"));
    }
    Ok(x.ln())
}

/// Natural logarithm; 0 for `x ≤ 0`.
#[must_use]
pub fn ln(x: Scalar) -> Scalar {
    try_ln(x).or_zero()
}

/// Decimal logarithm.
pub fn try_log10(x: Scalar) -> Outcome {
    if x <= 0.0 {
        return Err(DomainError::NonPositiveLogarithm("logarithm::log10"));
    }
    Ok(x.log10())
}

/// Decimal logarithm; 0 for `x ≤ 0`.
#[must_use]
pub fn log10(x: Scalar) -> Scalar {
    try_log10(x).or_zero()
}

/// Logarithm of `x` in an arbitrary `base`, computed as `ln x / ln base`.
pub fn try_log_base(x: Scalar, base: Scalar) -> Outcome {
    if x <= 0.0 {
        return Err(DomainError::NonPositiveLogarithm("logarithm::log_base"));
    }
    if base <= 0.0 || base == 1.0 {
        return Err(DomainError::InvalidLogBase("logarithm::log_base"));
    }
    Ok(x.ln() / base.ln())
}

/// Logarithm of `x` in `base`; 0 unless `x > 0`, `base > 0` and `base ≠ 1`.
#[must_use]
pub fn log_base(x: Scalar, base: Scalar) -> Scalar {
    try_log_base(x, base).or_zero()
}

/// `base^exponent`, unguarded: a negative base with a fractional exponent
/// yields NaN.
#[must_use]
pub fn power(base: Scalar, exponent: Scalar) -> Scalar {
    base.powf(exponent)
}
