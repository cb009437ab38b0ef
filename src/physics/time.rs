//! Durations in seconds.

use crate::errors::{checked_div, checked_sqrt, DomainError, Outcome, Saturate};
use crate::math::Scalar;

/// `s / v`.
pub fn try_from_distance_velocity(s: Scalar, v: Scalar) -> Outcome {
    checked_div(s, v, "time::from_distance_velocity")
}

/// `s / v`; 0 when `v = 0`.
#[must_use]
pub fn from_distance_velocity(s: Scalar, v: Scalar) -> Scalar {
    try_from_distance_velocity(s, v).or_zero()
}

/// `(v − v₀) / a`.
pub fn try_from_velocity_acceleration(v: Scalar, v0: Scalar, a: Scalar) -> Outcome {
    checked_div(v - v0, a, "time::from_velocity_acceleration")
}

/// `(v − v₀) / a`; 0 when `a = 0`.
#[must_use]
pub fn from_velocity_acceleration(v: Scalar, v0: Scalar, a: Scalar) -> Scalar {
    try_from_velocity_acceleration(v, v0, a).or_zero()
}

/// Time to cover `s` from rest, `√(2s / a)`.
pub fn try_from_distance_acceleration(s: Scalar, a: Scalar) -> Outcome {
    const FORMULA: &str = "time::from_distance_acceleration";
    if s < 0.0 {
        return Err(DomainError::NegativeInput(FORMULA));
    }
    checked_sqrt(checked_div(2.0 * s, a, FORMULA)?, FORMULA)
}

/// `√(2s / a)`; 0 when `a = 0`, `s < 0`, or `a < 0`.
#[must_use]
pub fn from_distance_acceleration(s: Scalar, a: Scalar) -> Scalar {
    try_from_distance_acceleration(s, a).or_zero()
}

/// `W / P`.
pub fn try_from_work_power(w: Scalar, p: Scalar) -> Outcome {
    checked_div(w, p, "time::from_work_power")
}

/// `W / P`; 0 when `P = 0`.
#[must_use]
pub fn from_work_power(w: Scalar, p: Scalar) -> Scalar {
    try_from_work_power(w, p).or_zero()
}
