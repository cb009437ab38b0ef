//! Right circular cones.

use crate::constants::PI;
use crate::errors::{checked_div, Outcome, Saturate};
use crate::math::Scalar;

/// Volume `⅓π·r²·h`.
#[must_use]
pub fn volume(radius: Scalar, height: Scalar) -> Scalar {
    (1.0 / 3.0) * PI * radius * radius * height
}

/// Lateral area `π·r·l` for slant height `l`.
#[must_use]
pub fn lateral_surface_area(radius: Scalar, slant_height: Scalar) -> Scalar {
    PI * radius * slant_height
}

/// Total area including the base, `π·r(r + l)`.
#[must_use]
pub fn total_surface_area(radius: Scalar, slant_height: Scalar) -> Scalar {
    PI * radius * (radius + slant_height)
}

/// Slant height `√(r² + h²)`.
#[must_use]
pub fn slant_height(radius: Scalar, height: Scalar) -> Scalar {
    (radius * radius + height * height).sqrt()
}

/// Height of the cone with the given volume and base radius.
pub fn try_height_from_volume_radius(volume: Scalar, radius: Scalar) -> Outcome {
    checked_div(3.0 * volume, PI * radius * radius, "cone::height_from_volume_radius")
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
    use crate::geometry::cylinder;

    #[test]
    fn cone_is_a_third_of_its_cylinder() {
        assert_relative_eq!(volume(2.0, 6.0) * 3.0, cylinder::volume(2.0, 6.0), epsilon = 1.0e-12);
    }

    #[test]
    fn slant_and_inverse() {
        assert_eq!(slant_height(3.0, 4.0), 5.0);
        assert_relative_eq!(
            total_surface_area(3.0, 5.0),
            lateral_surface_area(3.0, 5.0) + PI * 9.0,
            epsilon = 1.0e-12
        );
        assert_relative_eq!(height_from_volume_radius(volume(3.0, 4.0), 3.0), 4.0, epsilon = 1.0e-12);
        assert_eq!(height_from_volume_radius(5.0, 0.0), 0.0);
    }
}
