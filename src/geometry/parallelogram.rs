//! Parallelograms.

use crate::errors::{checked_div, Outcome, Saturate};
use crate::math::{radians, Scalar};

/// Area `base·height`.
#[must_use]
pub fn area_base_height(base: Scalar, height: Scalar) -> Scalar {
    base * height
}

/// Area from adjacent sides and the angle between them in degrees.
#[must_use]
pub fn area_sides_angle(a: Scalar, b: Scalar, angle_degrees: Scalar) -> Scalar {
    a * b * radians(angle_degrees).sin()
}

/// Perimeter `2(a + b)`.
#[must_use]
pub fn perimeter(a: Scalar, b: Scalar) -> Scalar {
    2.0 * (a + b)
}

/// Height onto `base`.
pub fn try_height_from_area_base(area: Scalar, base: Scalar) -> Outcome {
    checked_div(area, base, "parallelogram::height_from_area_base")
}

/// Height onto `base`; 0 when the base is 0.
#[must_use]
pub fn height_from_area_base(area: Scalar, base: Scalar) -> Scalar {
    try_height_from_area_base(area, base).or_zero()
}
