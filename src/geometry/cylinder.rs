//! Right circular cylinders.

use crate::constants::PI;
use crate::errors::{checked_div, Outcome, Saturate};
use crate::math::Scalar;

/// Volume `π·r²·h`.
#[must_use]
pub fn volume(radius: Scalar, height: Scalar) -> Scalar {
    PI * radius * radius * height
}

/// Lateral area `2π·r·h`.
#[must_use]
pub fn lateral_surface_area(radius: Scalar, height: Scalar) -> Scalar {
    2.0 * PI * radius * height
}

/// Total area including both caps, `2π·r(r + h)`.
#[must_use]
pub fn total_surface_area(radius: Scalar, height: Scalar) -> Scalar {
    2.0 * PI * radius * (radius + height)
}

/// Height of the cylinder with the given volume and radius.
pub fn try_height_from_volume_radius(volume: Scalar, radius: Scalar) -> Outcome {
    checked_div(volume, PI * radius * radius, "cylinder::height_from_volume_radius")
}

/// Height from volume and radius; 0 when the radius is 0.
#[must_use]
pub fn height_from_volume_radius(volume: Scalar, radius: Scalar) -> Scalar {
    try_height_from_volume_radius(volume, radius).or_zero()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn areas_add_up() {
        let (r, h) = (2.0, 5.0);
        assert_relative_eq!(
            total_surface_area(r, h),
            lateral_surface_area(r, h) + 2.0 * PI * r * r,
            epsilon = 1.0e-12
        );
    }

    #[test]
    fn height_inverse() {
        assert_relative_eq!(height_from_volume_radius(volume(1.5, 4.0), 1.5), 4.0, epsilon = 1.0e-12);
        assert_eq!(height_from_volume_radius(10.0, 0.0), 0.0);
    }
}
