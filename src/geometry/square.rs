//! Squares.

use std::f64::consts::SQRT_2;

use crate::errors::{checked_sqrt, DomainError, Outcome, Saturate};
use crate::math::Scalar;

/// Area `s²`.
#[must_use]
pub fn area(side: Scalar) -> Scalar {
    side * side
}

/// Perimeter `4s`.
#[must_use]
pub fn perimeter(side: Scalar) -> Scalar {
    4.0 * side
}

/// Diagonal `s·√2`.
#[must_use]
pub fn diagonal(side: Scalar) -> Scalar {
    side * SQRT_2
}

/// Side of the square with the given area.
pub fn try_side_from_area(area: Scalar) -> Outcome {
    checked_sqrt(area, "square::side_from_area")
}

/// Side from area; 0 for a negative area.
#[must_use]
pub fn side_from_area(area: Scalar) -> Scalar {
    try_side_from_area(area).or_zero()
}

/// Side of the square with the given diagonal.
pub fn try_side_from_diagonal(diagonal: Scalar) -> Outcome {
    if diagonal < 0.0 {
        return Err(DomainError::NegativeInput("square::side_from_diagonal"));
    }
    if diagonal == 0.0 {
        return Err(DomainError::OutOfDomain("square::side_from_diagonal"));
    }
    Ok(diagonal / SQRT_2)
}

/// Side from diagonal; 0 unless the diagonal is positive.
#[must_use]
pub fn side_from_diagonal(diagonal: Scalar) -> Scalar {
    try_side_from_diagonal(diagonal).or_zero()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn forward_and_inverse() {
        assert_eq!(area(5.0), 25.0);
        assert_eq!(perimeter(5.0), 20.0);
        assert_relative_eq!(side_from_area(25.0), 5.0);
        assert_relative_eq!(side_from_diagonal(diagonal(5.0)), 5.0, epsilon = 1.0e-12);
    }

    #[test]
    fn invalid_inverses_saturate() {
        assert_eq!(side_from_area(-4.0), 0.0);
        assert_eq!(side_from_diagonal(0.0), 0.0);
    }

    #[test]
    fn zero_and_negative_diagonals_are_told_apart() {
        assert_eq!(
            try_side_from_diagonal(0.0),
            Err(DomainError::OutOfDomain("square::side_from_diagonal"))
        );
        assert_eq!(
            try_side_from_diagonal(-2.0),
            Err(DomainError::NegativeInput("square::side_from_diagonal"))
        );
    }
}
