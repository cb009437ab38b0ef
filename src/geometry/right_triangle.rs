//! Right triangles, with legs `a`, `b` and hypotenuse `c`.

use crate::errors::{checked_sqrt, Outcome, Saturate};
use crate::math::Scalar;

/// Hypotenuse `√(a² + b²)`.
#[must_use]
pub fn hypotenuse(a: Scalar, b: Scalar) -> Scalar {
    (a * a + b * b).sqrt()
}

/// Missing leg given the hypotenuse and the other leg.
pub fn try_leg_from_hypotenuse_leg(hypotenuse: Scalar, leg: Scalar) -> Outcome {
    checked_sqrt(
        hypotenuse * hypotenuse - leg * leg,
        "right_triangle::leg_from_hypotenuse_leg",
    )
}

/// Missing leg; 0 when the known leg is longer than the hypotenuse.
#[must_use]
pub fn leg_from_hypotenuse_leg(hypotenuse: Scalar, leg: Scalar) -> Scalar {
    try_leg_from_hypotenuse_leg(hypotenuse, leg).or_zero()
}

/// Area `½·a·b`.
#[must_use]
pub fn area(a: Scalar, b: Scalar) -> Scalar {
    0.5 * a * b
}

/// Perimeter `a + b + c`.
#[must_use]
pub fn perimeter(a: Scalar, b: Scalar) -> Scalar {
    a + b + hypotenuse(a, b)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn three_four_five() {
        assert_eq!(hypotenuse(3.0, 4.0), 5.0);
        assert_relative_eq!(leg_from_hypotenuse_leg(5.0, 3.0), 4.0);
        assert_eq!(area(3.0, 4.0), 6.0);
        assert_eq!(perimeter(3.0, 4.0), 12.0);
    }

    #[test]
    fn leg_longer_than_hypotenuse_saturates() {
        assert_eq!(leg_from_hypotenuse_leg(3.0, 5.0), 0.0);
        assert!(try_leg_from_hypotenuse_leg(3.0, 5.0).is_err());
    }
}
