//! Rhombi.

use crate::math::{radians, Scalar};

/// Area from the diagonals, `½·d₁·d₂`.
#[must_use]
pub fn area_diagonals(d1: Scalar, d2: Scalar) -> Scalar {
    0.5 * d1 * d2
}

/// Area `side·height`.
#[must_use]
pub fn area_side_height(side: Scalar, height: Scalar) -> Scalar {
    side * height
}

/// Area `s²·sin α` with the interior angle in degrees.
#[must_use]
pub fn area_side_angle(side: Scalar, angle_degrees: Scalar) -> Scalar {
    side * side * radians(angle_degrees).sin()
}

/// Perimeter `4s`.
#[must_use]
pub fn perimeter(side: Scalar) -> Scalar {
    4.0 * side
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn square_is_a_rhombus() {
        let side = 2.0;
        let diag = side * std::f64::consts::SQRT_2;
        assert_relative_eq!(area_diagonals(diag, diag), 4.0, epsilon = 1.0e-12);
        assert_relative_eq!(area_side_angle(side, 90.0), 4.0, epsilon = 1.0e-12);
        assert_eq!(area_side_height(side, side), 4.0);
        assert_eq!(perimeter(side), 8.0);
    }
}
