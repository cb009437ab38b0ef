//! Linear equations and straight lines.

use crate::errors::{checked_div, Outcome, Saturate};
use crate::math::Scalar;

/// Root of `a·x + b = 0`.
pub fn try_solve(a: Scalar, b: Scalar) -> Outcome {
    checked_div(-b, a, "linear::solve")
}

/// Root of `a·x + b = 0`; 0 when `a = 0`, so "no solution" and "x = 0" are
/// indistinguishable here.
#[must_use]
pub fn solve(a: Scalar, b: Scalar) -> Scalar {
    try_solve(a, b).or_zero()
}

/// Slope of the line through two points.
pub fn try_slope(x1: Scalar, y1: Scalar, x2: Scalar, y2: Scalar) -> Outcome {
    checked_div(y2 - y1, x2 - x1, "linear::slope")
}

/// Slope of the line through two points. A vertical line (`x1 == x2`) has
/// slope 0 here, not infinity.
#[must_use]
pub fn slope(x1: Scalar, y1: Scalar, x2: Scalar, y2: Scalar) -> Scalar {
    try_slope(x1, y1, x2, y2).or_zero()
}

/// Intercept `b` of the line `y = slope·x + b` passing through `(x, y)`.
#[must_use]
pub fn y_intercept(x: Scalar, y: Scalar, slope: Scalar) -> Scalar {
    y - slope * x
}

/// `slope·x + intercept`.
#[must_use]
pub fn evaluate(x: Scalar, slope: Scalar, intercept: Scalar) -> Scalar {
    slope * x + intercept
}
