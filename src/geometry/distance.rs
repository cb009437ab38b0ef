//! Euclidean distances between points and from a point to a line.

use crate::errors::{checked_div, Outcome, Saturate};
use crate::math::{Scalar, R2, R3};

/// Distance between `(x1, y1)` and `(x2, y2)`.
#[must_use]
pub fn point_to_point_2d(x1: Scalar, y1: Scalar, x2: Scalar, y2: Scalar) -> Scalar {
    (R2::new(x2, y2) - R2::new(x1, y1)).norm()
}

/// Distance between `(x1, y1, z1)` and `(x2, y2, z2)`.
#[must_use]
pub fn point_to_point_3d(
    x1: Scalar,
    y1: Scalar,
    z1: Scalar,
    x2: Scalar,
    y2: Scalar,
    z2: Scalar,
) -> Scalar {
    between(&R3::new(x1, y1, z1), &R3::new(x2, y2, z2))
}

/// Distance between two points in space.
#[must_use]
pub fn between(a: &R3, b: &R3) -> Scalar {
    (b - a).norm()
}

/// Distance from `(px, py)` to the infinite line through `(x1, y1)` and
/// `(x2, y2)`, written as `A·x + B·y + C = 0`.
pub fn try_point_to_line_2d(
    px: Scalar,
    py: Scalar,
    x1: Scalar,
    y1: Scalar,
    x2: Scalar,
    y2: Scalar,
) -> Outcome {
    let a = y2 - y1;
    let b = x1 - x2;
    let c = x2 * y1 - x1 * y2;
    let norm = R2::new(a, b).norm();
    checked_div((a * px + b * py + c).abs(), norm, "distance::point_to_line_2d")
}

/// Point-to-line distance; 0 when the two line points coincide.
#[must_use]
pub fn point_to_line_2d(
    px: Scalar,
    py: Scalar,
    x1: Scalar,
    y1: Scalar,
    x2: Scalar,
    y2: Scalar,
) -> Scalar {
    try_point_to_line_2d(px, py, x1, y1, x2, y2).or_zero()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn point_distances() {
        assert_relative_eq!(point_to_point_2d(1.0, 1.0, 4.0, 5.0), 5.0);
        assert_relative_eq!(point_to_point_3d(0.0, 0.0, 0.0, 1.0, 2.0, 2.0), 3.0);
    }

    #[test]
    fn distance_to_horizontal_line() {
        assert_relative_eq!(point_to_line_2d(3.0, 5.0, 0.0, 1.0, 10.0, 1.0), 4.0);
        assert_relative_eq!(point_to_line_2d(1.0, 0.0, 0.0, 0.0, 1.0, 1.0), 0.5_f64.sqrt(), epsilon = 1.0e-12);
    }

    #[test]
    fn coincident_line_points_saturate() {
        assert_eq!(point_to_line_2d(3.0, 5.0, 1.0, 1.0, 1.0, 1.0), 0.0);
        assert!(try_point_to_line_2d(3.0, 5.0, 1.0, 1.0, 1.0, 1.0).is_err());
    }
}
