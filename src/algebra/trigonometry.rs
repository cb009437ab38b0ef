//! Trigonometric functions with degrees at the boundary.
//!
//! Inputs are converted to radians right before the primitive is called and
//! inverse results are converted back right after, through
//! [`crate::math::radians`] and [`crate::math::degrees`].

use crate::errors::{DomainError, Outcome, Saturate};
use crate::math::{degrees, radians, Scalar};

/// Sine of an angle in degrees.
#[must_use]
pub fn sin_deg(angle: Scalar) -> Scalar {
    radians(angle).sin()
}

/// Cosine of an angle in degrees.
#[must_use]
pub fn cos_deg(angle: Scalar) -> Scalar {
    radians(angle).cos()
}

/// Tangent of an angle in degrees. Not guarded at odd multiples of 90°,
/// where the result is merely very large.
#[must_use]
pub fn tan_deg(angle: Scalar) -> Scalar {
    radians(angle).tan()
}

fn unit_interval(value: Scalar, formula: &'static str) -> Outcome {
    if !(-1.0..=1.0).contains(&value) {
        return Err(DomainError::OutOfDomain(formula));
    }
    Ok(value)
}

/// Arcsine in degrees.
pub fn try_asin_deg(value: Scalar) -> Outcome {
    unit_interval(value, "trigonometry::asin_deg").map(|v| degrees(v.asin()))
}

/// Arcsine in degrees; 0 outside `[−1, 1]`.
#[must_use]
pub fn asin_deg(value: Scalar) -> Scalar {
    try_asin_deg(value).or_zero()
}

/// Arccosine in degrees.
pub fn try_acos_deg(value: Scalar) -> Outcome {
    unit_interval(value, "trigonometry::acos_deg").map(|v| degrees(v.acos()))
}

/// Arccosine in degrees; 0 outside `[−1, 1]`.
#[must_use]
pub fn acos_deg(value: Scalar) -> Scalar {
    try_acos_deg(value).or_zero()
}

/// Arctangent in degrees.
#[must_use]
pub fn atan_deg(value: Scalar) -> Scalar {
    degrees(value.atan())
}

/// Four-quadrant arctangent of `y / x` in degrees.
#[must_use]
pub fn atan2_deg(y: Scalar, x: Scalar) -> Scalar {
    degrees(y.atan2(x))
}
