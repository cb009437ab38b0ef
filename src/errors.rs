//! Domain errors and the sentinel-zero policy shared by every catalog.
//!
//! Every guarded formula exists in two forms. The strict `try_*` form returns an
//! [`Outcome`] and reports the rejected input as a [`DomainError`]. The default
//! form calls the strict one and collapses any error to `0.0` through
//! [`Saturate::or_zero`], so a caller cannot tell "invalid input" from "the
//! answer is zero" unless it opts into the strict form.

use thiserror::Error;

use crate::math::Scalar;

/// Reason a formula rejected its input. Each variant carries the name of the
/// formula that applied the guard (e.g. `"linear::solve"`).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// A divisor evaluated to exactly zero.
    #[error("{0}: division by zero")]
    DivisionByZero(&'static str),
    /// A square root was requested of a negative number.
    #[error("{0}: negative radicand")]
    NegativeRadicand(&'static str),
    /// A logarithm was requested of zero or a negative number.
    #[error("{0}: logarithm of a non-positive value")]
    NonPositiveLogarithm(&'static str),
    /// A logarithm base was non-positive or exactly one.
    #[error("{0}: logarithm base must be positive and different from 1")]
    InvalidLogBase(&'static str),
    /// An aggregate was requested over an empty sequence.
    #[error("{0}: empty sequence")]
    EmptySequence(&'static str),
    /// An input that must be non-negative was negative.
    #[error("{0}: negative input")]
    NegativeInput(&'static str),
    /// Three side lengths do not form a non-degenerate triangle.
    #[error("{0}: sides do not form a triangle")]
    DegenerateTriangle(&'static str),
    /// An argument lies outside the domain of an inverse function.
    #[error("{0}: argument outside the function domain")]
    OutOfDomain(&'static str),
    /// An integer count is negative or otherwise out of range.
    #[error("{0}: invalid count")]
    InvalidCount(&'static str),
    /// An exact integer result does not fit in 64 bits.
    #[error("{0}: integer overflow")]
    Overflow(&'static str),
}

impl DomainError {
    /// Name of the formula that rejected its input.
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match *self {
            Self::DivisionByZero(f)
            | Self::NegativeRadicand(f)
            | Self::NonPositiveLogarithm(f)
            | Self::InvalidLogBase(f)
            | Self::EmptySequence(f)
            | Self::NegativeInput(f)
            | Self::DegenerateTriangle(f)
            | Self::OutOfDomain(f)
            | Self::InvalidCount(f)
            | Self::Overflow(f) => f,
        }
    }
}

/// Result of a strict (validated) formula evaluation.
pub type Outcome<T = Scalar> = Result<T, DomainError>;

/// Collapses a strict result to the library's sentinel value.
pub trait Saturate {
    /// Value produced for rejected input.
    type Value;

    /// Returns the computed value, or zero when the input was rejected.
    fn or_zero(self) -> Self::Value;
}

impl Saturate for Outcome<Scalar> {
    type Value = Scalar;

    #[inline]
    fn or_zero(self) -> Scalar {
        self.unwrap_or(0.0)
    }
}

impl Saturate for Outcome<i64> {
    type Value = i64;

    #[inline]
    fn or_zero(self) -> i64 {
        self.unwrap_or(0)
    }
}

/// Divides `numerator` by `denominator`, rejecting an exactly-zero divisor.
#[inline]
pub fn checked_div(numerator: Scalar, denominator: Scalar, formula: &'static str) -> Outcome {
    if denominator == 0.0 {
        return Err(DomainError::DivisionByZero(formula));
    }
    Ok(numerator / denominator)
}

/// Square root that rejects negative radicands instead of producing NaN.
#[inline]
pub fn checked_sqrt(radicand: Scalar, formula: &'static str) -> Outcome {
    if radicand < 0.0 {
        return Err(DomainError::NegativeRadicand(formula));
    }
    Ok(radicand.sqrt())
}

/// Passes `value` through when it is non-negative.
#[inline]
pub fn non_negative(value: Scalar, formula: &'static str) -> Outcome {
    if value < 0.0 {
        return Err(DomainError::NegativeInput(formula));
    }
    Ok(value)
}
