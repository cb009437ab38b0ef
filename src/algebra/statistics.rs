//! Descriptive statistics over a borrowed sequence.
//!
//! Variance is the **population** variance (denominator `n`). Every aggregate
//! of an empty sequence is 0 in the default forms.

use crate::errors::{DomainError, Outcome, Saturate};
use crate::math::Scalar;

fn non_empty<'a>(values: &'a [Scalar], formula: &'static str) -> Outcome<&'a [Scalar]> {
    if values.is_empty() {
        return Err(DomainError::EmptySequence(formula));
    }
    Ok(values)
}

/// Arithmetic mean.
pub fn try_mean(values: &[Scalar]) -> Outcome {
    let values = non_empty(values, "statistics::mean")?;
    Ok(values.iter().sum::<Scalar>() / values.len() as Scalar)
}

/// Arithmetic mean; 0 for an empty sequence.
#[must_use]
pub fn mean(values: &[Scalar]) -> Scalar {
    try_mean(values).or_zero()
}

/// Population variance: mean squared deviation from the mean.
pub fn try_variance(values: &[Scalar]) -> Outcome {
    let values = non_empty(values, "statistics::variance")?;
    let m = try_mean(values)?;
    let squared: Scalar = values.iter().map(|v| (v - m) * (v - m)).sum();
    Ok(squared / values.len() as Scalar)
}

/// Population variance; 0 for an empty sequence.
#[must_use]
pub fn variance(values: &[Scalar]) -> Scalar {
    try_variance(values).or_zero()
}

/// Population standard deviation, `√variance`.
pub fn try_standard_deviation(values: &[Scalar]) -> Outcome {
    let values = non_empty(values, "statistics::standard_deviation")?;
    try_variance(values).map(Scalar::sqrt)
}

/// Population standard deviation; 0 for an empty sequence.
#[must_use]
pub fn standard_deviation(values: &[Scalar]) -> Scalar {
    try_standard_deviation(values).or_zero()
}

/// Smallest value.
pub fn try_min(values: &[Scalar]) -> Outcome {
    let values = non_empty(values, "statistics::min")?;
    Ok(values[1..]
        .iter()
        .fold(values[0], |acc, &v| if v < acc { v } else { acc }))
}

/// Smallest value; 0 for an empty sequence.
#[must_use]
pub fn min(values: &[Scalar]) -> Scalar {
    try_min(values).or_zero()
}

/// Largest value.
pub fn try_max(values: &[Scalar]) -> Outcome {
    let values = non_empty(values, "statistics::max")?;
    Ok(values[1..]
        .iter()
        .fold(values[0], |acc, &v| if v > acc { v } else { acc }))
}

/// Largest value; 0 for an empty sequence.
#[must_use]
pub fn max(values: &[Scalar]) -> Scalar {
    try_max(values).or_zero()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const SAMPLE: [Scalar; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    #[test]
    fn population_moments_of_reference_sample() {
        assert_relative_eq!(mean(&SAMPLE), 5.0);
        assert_relative_eq!(variance(&SAMPLE), 4.0, epsilon = 1.0e-12);
        assert_relative_eq!(standard_deviation(&SAMPLE), 2.0, epsilon = 1.0e-12);
    }

    #[test]
    fn extremes() {
        assert_eq!(min(&SAMPLE), 2.0);
        assert_eq!(max(&SAMPLE), 9.0);
        assert_eq!(min(&[-3.5]), -3.5);
    }

    #[test]
    fn empty_sequence_is_zero_everywhere() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(variance(&[]), 0.0);
        assert_eq!(standard_deviation(&[]), 0.0);
        assert_eq!(min(&[]), 0.0);
        assert_eq!(max(&[]), 0.0);
        assert_eq!(try_min(&[]), Err(DomainError::EmptySequence("statistics::min")));
    }
}
