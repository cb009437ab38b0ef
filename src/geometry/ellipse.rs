//! Ellipses with semi-axes `a` (major) and `b` (minor).

use crate::constants::PI;
use crate::errors::{checked_div, checked_sqrt, Outcome, Saturate};
use crate::math::Scalar;

/// Area `π·a·b`.
#[must_use]
pub fn area(a: Scalar, b: Scalar) -> Scalar {
    PI * a * b
}

/// Perimeter by Ramanujan's second approximation,
/// `π(a + b)(1 + 3h / (10 + √(4 − 3h)))` with `h = ((a − b)/(a + b))²`.
///
/// This is an approximation (relative error below 10⁻⁹ for moderate
/// eccentricities), not the exact elliptic integral.
pub fn try_circumference_approximate(a: Scalar, b: Scalar) -> Outcome {
    const FORMULA: &str = "ellipse::circumference_approximate";
    let h = checked_div(a - b, a + b, FORMULA)?.powi(2);
    let root = checked_sqrt(4.0 - 3.0 * h, FORMULA)?;
    Ok(PI * (a + b) * (1.0 + 3.0 * h / (10.0 + root)))
}

/// Approximate perimeter; 0 when `a + b = 0`.
#[must_use]
pub fn circumference_approximate(a: Scalar, b: Scalar) -> Scalar {
    try_circumference_approximate(a, b).or_zero()
}

/// Eccentricity `√(1 − b²/a²)`.
pub fn try_eccentricity(a: Scalar, b: Scalar) -> Outcome {
    const FORMULA: &str = "ellipse::eccentricity";
    let ratio = checked_div(b * b, a * a, FORMULA)?;
    checked_sqrt(1.0 - ratio, FORMULA)
}

/// Eccentricity; 0 when `a = 0` or the minor semi-axis exceeds the major.
#[must_use]
pub fn eccentricity(a: Scalar, b: Scalar) -> Scalar {
    try_eccentricity(a, b).or_zero()
}
