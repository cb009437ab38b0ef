//! Speeds in m/s.

use crate::errors::{checked_div, checked_sqrt, DomainError, Outcome, Saturate};
use crate::math::Scalar;

/// Average speed `s / t`.
pub fn try_from_distance_time(s: Scalar, t: Scalar) -> Outcome {
    checked_div(s, t, "velocity::from_distance_time")
}

/// Average speed; 0 when `t = 0`.
#[must_use]
pub fn from_distance_time(s: Scalar, t: Scalar) -> Scalar {
    try_from_distance_time(s, t).or_zero()
}

/// Speed after uniform acceleration, `v₀ + a·t`.
#[must_use]
pub fn from_acceleration_time(v0: Scalar, a: Scalar, t: Scalar) -> Scalar {
    v0 + a * t
}

/// Speed reached from rest over distance `s`, `√(2·a·s)`.
pub fn try_from_acceleration_distance(a: Scalar, s: Scalar) -> Outcome {
    if a < 0.0 || s < 0.0 {
        return Err(DomainError::NegativeInput("velocity::from_acceleration_distance"));
    }
    Ok((2.0 * a * s).sqrt())
}

/// Speed reached from rest; 0 if `a` or `s` is negative.
#[must_use]
pub fn from_acceleration_distance(a: Scalar, s: Scalar) -> Scalar {
    try_from_acceleration_distance(a, s).or_zero()
}

/// Speed after distance `s` from initial speed `v0`, `√(v₀² + 2·a·s)`.
pub fn try_from_acceleration_distance_initial(v0: Scalar, a: Scalar, s: Scalar) -> Outcome {
    checked_sqrt(
        v0 * v0 + 2.0 * a * s,
        "velocity::from_acceleration_distance_initial",
    )
}

/// Speed after distance `s`; 0 when the body would have stopped before
/// covering it.
#[must_use]
pub fn from_acceleration_distance_initial(v0: Scalar, a: Scalar, s: Scalar) -> Scalar {
    try_from_acceleration_distance_initial(v0, a, s).or_zero()
}

/// Speed on a circle of radius `r` under centripetal force `f`, `√(F·r / m)`.
pub fn try_from_centripetal_force(f: Scalar, r: Scalar, m: Scalar) -> Outcome {
    const FORMULA: &str = "velocity::from_centripetal_force";
    if r == 0.0 {
        return Err(DomainError::DivisionByZero(FORMULA));
    }
    checked_sqrt(checked_div(f * r, m, FORMULA)?, FORMULA)
}

/// Speed under a centripetal force; 0 when `m = 0` or `r = 0`.
#[must_use]
pub fn from_centripetal_force(f: Scalar, r: Scalar, m: Scalar) -> Scalar {
    try_from_centripetal_force(f, r, m).or_zero()
}

/// Speed of a body with kinetic energy `e`, `√(2E / m)`.
pub fn try_from_kinetic_energy(e: Scalar, m: Scalar) -> Outcome {
    const FORMULA: &str = "velocity::from_kinetic_energy";
    if e < 0.0 {
        return Err(DomainError::NegativeInput(FORMULA));
    }
    checked_sqrt(checked_div(2.0 * e, m, FORMULA)?, FORMULA)
}

/// Speed from kinetic energy; 0 when `m = 0` or `E < 0`.
#[must_use]
pub fn from_kinetic_energy(e: Scalar, m: Scalar) -> Scalar {
    try_from_kinetic_energy(e, m).or_zero()
}
