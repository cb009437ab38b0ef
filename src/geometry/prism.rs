//! Rectangular prisms (cuboids).

use crate::errors::{DomainError, Outcome, Saturate};
use crate::math::Scalar;

/// Volume `l·w·h`.
#[must_use]
pub fn volume(length: Scalar, width: Scalar, height: Scalar) -> Scalar {
    length * width * height
}

/// Surface area `2(lw + lh + wh)`.
#[must_use]
pub fn surface_area(length: Scalar, width: Scalar, height: Scalar) -> Scalar {
    2.0 * (length * width + length * height + width * height)
}

/// Space diagonal `√(l² + w² + h²)`.
#[must_use]
pub fn diagonal(length: Scalar, width: Scalar, height: Scalar) -> Scalar {
    (length * length + width * width + height * height).sqrt()
}

/// Height of the prism with the given volume and base.
pub fn try_height_from_volume_length_width(volume: Scalar, length: Scalar, width: Scalar) -> Outcome {
    if length == 0.0 || width == 0.0 {
        return Err(DomainError::DivisionByZero("prism::height_from_volume_length_width"));
    }
    Ok(volume / (length * width))
}

/// Height from volume and base; 0 when either base edge is 0.
#[must_use]
pub fn height_from_volume_length_width(volume: Scalar, length: Scalar, width: Scalar) -> Scalar {
    try_height_from_volume_length_width(volume, length, width).or_zero()
}
