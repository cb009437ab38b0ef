//! Circles, sectors and arcs.

use crate::constants::PI;
use crate::errors::{checked_sqrt, DomainError, Outcome, Saturate};
use crate::math::Scalar;

/// Area `π·r²`.
#[must_use]
pub fn area(radius: Scalar) -> Scalar {
    PI * radius * radius
}

/// Circumference `2π·r`.
#[must_use]
pub fn circumference(radius: Scalar) -> Scalar {
    2.0 * PI * radius
}

/// Diameter `2r`.
#[must_use]
pub fn diameter(radius: Scalar) -> Scalar {
    2.0 * radius
}

/// Radius of the circle with the given area.
pub fn try_radius_from_area(area: Scalar) -> Outcome {
    checked_sqrt(area / PI, "circle::radius_from_area")
}

/// Radius of the circle with the given area; 0 for a negative area.
#[must_use]
pub fn radius_from_area(area: Scalar) -> Scalar {
    try_radius_from_area(area).or_zero()
}

/// Radius of the circle with the given circumference.
pub fn try_radius_from_circumference(circumference: Scalar) -> Outcome {
    if circumference < 0.0 {
        return Err(DomainError::NegativeInput("circle::radius_from_circumference"));
    }
    if circumference == 0.0 {
        return Err(DomainError::OutOfDomain("circle::radius_from_circumference"));
    }
    Ok(circumference / (2.0 * PI))
}

/// Radius from circumference; 0 unless the circumference is positive.
#[must_use]
pub fn radius_from_circumference(circumference: Scalar) -> Scalar {
    try_radius_from_circumference(circumference).or_zero()
}

/// Area of a sector spanning `angle_degrees`.
#[must_use]
pub fn sector_area(radius: Scalar, angle_degrees: Scalar) -> Scalar {
    (angle_degrees / 360.0) * PI * radius * radius
}

/// Length of an arc spanning `angle_degrees`.
#[must_use]
pub fn arc_length(radius: Scalar, angle_degrees: Scalar) -> Scalar {
    (angle_degrees / 360.0) * 2.0 * PI * radius
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn unit_circle() {
        assert_relative_eq!(area(1.0), PI);
        assert_relative_eq!(circumference(1.0), 2.0 * PI);
        assert_eq!(diameter(1.5), 3.0);
    }

    #[test]
    fn inverses_round_trip() {
        for &a in &[0.0, 0.5, 3.0, 1.0e6] {
            assert_relative_eq!(area(radius_from_area(a)), a, max_relative = 1.0e-12);
        }
        assert_relative_eq!(radius_from_circumference(circumference(2.5)), 2.5);
    }

    #[test]
    fn invalid_inverse_inputs_saturate() {
        assert_eq!(radius_from_area(-1.0), 0.0);
        assert_eq!(radius_from_circumference(0.0), 0.0);
        assert_eq!(radius_from_circumference(-3.0), 0.0);
    }

    #[test]
    fn zero_and_negative_circumferences_are_told_apart() {
        assert_eq!(
            try_radius_from_circumference(0.0),
            Err(DomainError::OutOfDomain("circle::radius_from_circumference"))
        );
        assert_eq!(
            try_radius_from_circumference(-3.0),
            Err(DomainError::NegativeInput("circle::radius_from_circumference"))
        );
    }

    #[test]
    fn half_circle_sector_and_arc() {
        assert_relative_eq!(sector_area(2.0, 180.0), area(2.0) / 2.0);
        assert_relative_eq!(arc_length(2.0, 90.0), circumference(2.0) / 4.0);
    }
}
