//! Geometric means. Negative factors are rejected rather than producing NaN
//! or a sign-dependent real root.

use crate::errors::{DomainError, Outcome, Saturate};
use crate::math::Scalar;

/// `√(a·b)`.
pub fn try_mean2(a: Scalar, b: Scalar) -> Outcome {
    if a < 0.0 || b < 0.0 {
        return Err(DomainError::NegativeInput("geometric::mean2"));
    }
    Ok((a * b).sqrt())
}

/// `√(a·b)`; 0 if either factor is negative.
#[must_use]
pub fn mean2(a: Scalar, b: Scalar) -> Scalar {
    try_mean2(a, b).or_zero()
}

/// `∛(a·b·c)`.
pub fn try_mean3(a: Scalar, b: Scalar, c: Scalar) -> Outcome {
    if a < 0.0 || b < 0.0 || c < 0.0 {
        return Err(DomainError::NegativeInput("geometric::mean3"));
    }
    Ok((a * b * c).cbrt())
}

/// `∛(a·b·c)`; 0 if any factor is negative.
#[must_use]
pub fn mean3(a: Scalar, b: Scalar, c: Scalar) -> Scalar {
    try_mean3(a, b, c).or_zero()
}

/// n-th root of the product of a sequence.
pub fn try_mean(values: &[Scalar]) -> Outcome {
    if values.is_empty() {
        return Err(DomainError::EmptySequence("geometric::mean"));
    }
    if values.iter().any(|&v| v < 0.0) {
        return Err(DomainError::NegativeInput("geometric::mean"));
    }
    let product: Scalar = values.iter().product();
    Ok(product.powf(1.0 / values.len() as Scalar))
}

/// n-th root of the product of a sequence; 0 if it is empty or holds a
/// negative value.
#[must_use]
pub fn mean(values: &[Scalar]) -> Scalar {
    try_mean(values).or_zero()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn means_of_perfect_powers() {
        assert_relative_eq!(mean2(4.0, 9.0), 6.0);
        assert_relative_eq!(mean3(2.0, 4.0, 8.0), 4.0, epsilon = 1.0e-12);
        assert_relative_eq!(mean(&[1.0, 3.0, 9.0, 27.0]), 27.0_f64.sqrt(), epsilon = 1.0e-12);
    }

    #[test]
    fn negative_or_empty_input_saturates() {
        assert_eq!(mean2(-1.0, 4.0), 0.0);
        assert_eq!(mean3(1.0, -4.0, 2.0), 0.0);
        assert_eq!(mean(&[2.0, -8.0]), 0.0);
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(try_mean(&[]), Err(DomainError::EmptySequence("geometric::mean")));
    }
}
