//! Elementary arithmetic and arithmetic means.

use crate::errors::{checked_div, DomainError, Outcome, Saturate};
use crate::math::Scalar;

/// `a + b`.
#[must_use]
pub fn sum(a: Scalar, b: Scalar) -> Scalar {
    a + b
}

/// `a − b`.
#[must_use]
pub fn difference(a: Scalar, b: Scalar) -> Scalar {
    a - b
}

/// `a · b`.
#[must_use]
pub fn product(a: Scalar, b: Scalar) -> Scalar {
    a * b
}

/// `a / b`.
pub fn try_quotient(a: Scalar, b: Scalar) -> Outcome {
    checked_div(a, b, "arithmetic::quotient")
}

/// `a / b`; 0 when `b = 0`.
#[must_use]
pub fn quotient(a: Scalar, b: Scalar) -> Scalar {
    try_quotient(a, b).or_zero()
}

/// Mean of two values.
#[must_use]
pub fn average2(a: Scalar, b: Scalar) -> Scalar {
    (a + b) / 2.0
}

/// Mean of three values.
#[must_use]
pub fn average3(a: Scalar, b: Scalar, c: Scalar) -> Scalar {
    (a + b + c) / 3.0
}

/// Arithmetic mean of a sequence.
pub fn try_average(values: &[Scalar]) -> Outcome {
    if values.is_empty() {
        return Err(DomainError::EmptySequence("arithmetic::average"));
    }
    Ok(values.iter().sum::<Scalar>() / values.len() as Scalar)
}

/// Arithmetic mean of a sequence; 0 for an empty one.
#[must_use]
pub fn average(values: &[Scalar]) -> Scalar {
    try_average(values).or_zero()
}

/// `percent` percent of `number`.
#[must_use]
pub fn percent_of(number: Scalar, percent: Scalar) -> Scalar {
    number * percent / 100.0
}
