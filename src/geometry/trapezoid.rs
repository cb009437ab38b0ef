//! Trapezoids with parallel bases `base1`, `base2`.

use crate::errors::{checked_div, Outcome, Saturate};
use crate::math::Scalar;

/// Area `½(b₁ + b₂)·h`.
#[must_use]
pub fn area(base1: Scalar, base2: Scalar, height: Scalar) -> Scalar {
    0.5 * (base1 + base2) * height
}

/// Sum of all four sides.
#[must_use]
pub fn perimeter(base1: Scalar, base2: Scalar, side1: Scalar, side2: Scalar) -> Scalar {
    base1 + base2 + side1 + side2
}

/// Height recovered from area and both bases.
pub fn try_height_from_area_bases(area: Scalar, base1: Scalar, base2: Scalar) -> Outcome {
    checked_div(2.0 * area, base1 + base2, "trapezoid::height_from_area_bases")
}

/// Height from area and bases; 0 when the bases sum to 0.
#[must_use]
pub fn height_from_area_bases(area: Scalar, base1: Scalar, base2: Scalar) -> Scalar {
    try_height_from_area_bases(area, base1, base2).or_zero()
}
