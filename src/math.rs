//! Shared numerical primitives: scalar aliases and angle conversion.

use nalgebra::{Vector2, Vector3};

use crate::constants::PI;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for two-dimensional real points/vectors.
pub type R2 = Vector2<Scalar>;
/// Convenient alias for three-dimensional real points/vectors.
pub type R3 = Vector3<Scalar>;
/// Complex scalar used for roots of polynomials.
pub type CScalar = num_complex::Complex<Scalar>;

/// Converts an angle in degrees to radians.
#[inline]
#[must_use]
pub fn radians(degrees: Scalar) -> Scalar {
    degrees * PI / 180.0
}

/// Converts an angle in radians to degrees.
#[inline]
#[must_use]
pub fn degrees(radians: Scalar) -> Scalar {
    radians * 180.0 / PI
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn right_angle_converts_both_ways() {
        assert_relative_eq!(radians(90.0), PI / 2.0, epsilon = 1.0e-15);
        assert_relative_eq!(degrees(PI / 2.0), 90.0, epsilon = 1.0e-12);
    }

    #[test]
    fn conversion_round_trips_negative_angles() {
        assert_relative_eq!(degrees(radians(-135.0)), -135.0, epsilon = 1.0e-12);
    }
}
