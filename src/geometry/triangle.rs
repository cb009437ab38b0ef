//! General triangles.
//!
//! [`is_valid`] is the explicit validity predicate. [`area_heron`] carries its
//! own independent guard on the semi-perimeter, so it never takes the square
//! root of a negative product even when callers skip [`is_valid`].

use crate::errors::{checked_div, DomainError, Outcome, Saturate};
use crate::math::{radians, Scalar};

/// Area `½·base·height`.
#[must_use]
pub fn area_base_height(base: Scalar, height: Scalar) -> Scalar {
    0.5 * base * height
}

/// Area from three sides by Heron's formula.
pub fn try_area_heron(a: Scalar, b: Scalar, c: Scalar) -> Outcome {
    let s = (a + b + c) / 2.0;
    if s <= 0.0 || s <= a || s <= b || s <= c {
        return Err(DomainError::DegenerateTriangle("triangle::area_heron"));
    }
    Ok((s * (s - a) * (s - b) * (s - c)).sqrt())
}

/// Area from three sides; 0 for degenerate or impossible triangles.
#[must_use]
pub fn area_heron(a: Scalar, b: Scalar, c: Scalar) -> Scalar {
    try_area_heron(a, b, c).or_zero()
}

/// Area from two sides and the included angle in degrees, `½·a·b·sin γ`.
#[must_use]
pub fn area_sides_angle(a: Scalar, b: Scalar, angle_degrees: Scalar) -> Scalar {
    0.5 * a * b * radians(angle_degrees).sin()
}

/// Perimeter `a + b + c`.
#[must_use]
pub fn perimeter(a: Scalar, b: Scalar, c: Scalar) -> Scalar {
    a + b + c
}

/// Height onto `base` for a triangle of the given area.
pub fn try_height_from_area_base(area: Scalar, base: Scalar) -> Outcome {
    checked_div(2.0 * area, base, "triangle::height_from_area_base")
}

/// Height from area and base; 0 when the base is 0.
#[must_use]
pub fn height_from_area_base(area: Scalar, base: Scalar) -> Scalar {
    try_height_from_area_base(area, base).or_zero()
}

/// Strict triangle inequality on all three pairs of sides.
#[must_use]
pub fn is_valid(a: Scalar, b: Scalar, c: Scalar) -> bool {
    (a + b > c) && (a + c > b) && (b + c > a)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn pythagorean_triangle() {
        assert!(is_valid(3.0, 4.0, 5.0));
        assert_relative_eq!(area_heron(3.0, 4.0, 5.0), 6.0, epsilon = 1.0e-12);
        assert_relative_eq!(area_sides_angle(3.0, 4.0, 90.0), 6.0, epsilon = 1.0e-12);
        assert_eq!(perimeter(3.0, 4.0, 5.0), 12.0);
        assert_relative_eq!(height_from_area_base(6.0, 3.0), 4.0);
    }

    #[test]
    fn impossible_triangle_is_rejected_twice() {
        assert!(!is_valid(1.0, 1.0, 5.0));
        assert_eq!(area_heron(1.0, 1.0, 5.0), 0.0);
        assert_eq!(
            try_area_heron(1.0, 1.0, 5.0),
            Err(DomainError::DegenerateTriangle("triangle::area_heron"))
        );
    }

    #[test]
    fn collinear_sides_are_degenerate() {
        assert!(!is_valid(1.0, 2.0, 3.0));
        assert_eq!(area_heron(1.0, 2.0, 3.0), 0.0);
        assert_eq!(area_heron(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn zero_base_saturates() {
        assert_eq!(height_from_area_base(6.0, 0.0), 0.0);
    }
}
