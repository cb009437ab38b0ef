//! Angle sums of simple polygons with `n` vertices, in degrees.

use crate::errors::{DomainError, Outcome, Saturate};
use crate::math::Scalar;

fn polygon_sides(n: i32, formula: &'static str) -> Outcome<Scalar> {
    if n < 3 {
        return Err(DomainError::InvalidCount(formula));
    }
    Ok(Scalar::from(n))
}

/// Sum of interior angles `(n − 2)·180°`.
pub fn try_interior_angle_sum(n: i32) -> Outcome {
    let n = polygon_sides(n, "polygon::interior_angle_sum")?;
    Ok((n - 2.0) * 180.0)
}

/// Sum of interior angles; 0 for fewer than three vertices.
#[must_use]
pub fn interior_angle_sum(n: i32) -> Scalar {
    try_interior_angle_sum(n).or_zero()
}

/// Interior angle of a regular n-gon.
pub fn try_interior_angle_regular(n: i32) -> Outcome {
    let n = polygon_sides(n, "polygon::interior_angle_regular")?;
    Ok((n - 2.0) * 180.0 / n)
}

/// Interior angle of a regular n-gon; 0 for fewer than three vertices.
#[must_use]
pub fn interior_angle_regular(n: i32) -> Scalar {
    try_interior_angle_regular(n).or_zero()
}

/// Sum of exterior angles: 360° for every polygon, independent of `n`.
#[must_use]
pub fn exterior_angle_sum(_n: i32) -> Scalar {
    360.0
}

/// Exterior angle of a regular n-gon, `360° / n`.
pub fn try_exterior_angle_regular(n: i32) -> Outcome {
    if n == 0 {
        return Err(DomainError::DivisionByZero("polygon::exterior_angle_regular"));
    }
    Ok(360.0 / Scalar::from(n))
}

/// Exterior angle of a regular n-gon; 0 only when `n = 0`.
#[must_use]
pub fn exterior_angle_regular(n: i32) -> Scalar {
    try_exterior_angle_regular(n).or_zero()
}
