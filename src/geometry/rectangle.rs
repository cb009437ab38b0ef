//! Rectangles.

use crate::errors::{checked_div, Outcome, Saturate};
use crate::math::Scalar;

/// Area `l·w`.
#[must_use]
pub fn area(length: Scalar, width: Scalar) -> Scalar {
    length * width
}

/// Perimeter `2(l + w)`.
#[must_use]
pub fn perimeter(length: Scalar, width: Scalar) -> Scalar {
    2.0 * (length + width)
}

/// Diagonal `√(l² + w²)`.
#[must_use]
pub fn diagonal(length: Scalar, width: Scalar) -> Scalar {
    length.hypot(width)
}

/// Length recovered from area and width.
pub fn try_length_from_area_width(area: Scalar, width: Scalar) -> Outcome {
    checked_div(area, width, "rectangle::length_from_area_width")
}

/// Length recovered from area and width; 0 when the width is 0.
#[must_use]
pub fn length_from_area_width(area: Scalar, width: Scalar) -> Scalar {
    try_length_from_area_width(area, width).or_zero()
}

/// Width recovered from area and length.
pub fn try_width_from_area_length(area: Scalar, length: Scalar) -> Outcome {
    checked_div(area, length, "rectangle::width_from_area_length")
}

/// Width recovered from area and length; 0 when the length is 0.
#[must_use]
pub fn width_from_area_length(area: Scalar, length: Scalar) -> Scalar {
    try_width_from_area_length(area, length).or_zero()
}
