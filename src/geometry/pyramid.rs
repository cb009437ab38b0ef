//! Pyramids: one third of base area times height.

use crate::errors::{checked_div, Outcome, Saturate};
use crate::math::Scalar;

/// Volume over a rectangular base.
#[must_use]
pub fn volume_rectangular_base(length: Scalar, width: Scalar, height: Scalar) -> Scalar {
    (1.0 / 3.0) * length * width * height
}

/// Volume over a square base.
#[must_use]
pub fn volume_square_base(base_side: Scalar, height: Scalar) -> Scalar {
    (1.0 / 3.0) * base_side * base_side * height
}

/// Volume over a triangular (or any) base of known area.
#[must_use]
pub fn volume_triangular_base(base_area: Scalar, height: Scalar) -> Scalar {
    (1.0 / 3.0) * base_area * height
}

/// Height from volume and base area.
pub fn try_height_from_volume_base_area(volume: Scalar, base_area: Scalar) -> Outcome {
    checked_div(3.0 * volume, base_area, "pyramid::height_from_volume_base_area")
}

/// Height from volume and base area; 0 when the base area is 0.
#[must_use]
pub fn height_from_volume_base_area(volume: Scalar, base_area: Scalar) -> Scalar {
    try_height_from_volume_base_area(volume, base_area).or_zero()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn base_shapes_agree() {
        assert_relative_eq!(volume_square_base(3.0, 4.0), volume_rectangular_base(3.0, 3.0, 4.0));
        assert_relative_eq!(volume_triangular_base(9.0, 4.0), 12.0, epsilon = 1.0e-12);
        assert_relative_eq!(height_from_volume_base_area(12.0, 9.0), 4.0, epsilon = 1.0e-12);
        assert_eq!(height_from_volume_base_area(12.0, 0.0), 0.0);
    }
}
