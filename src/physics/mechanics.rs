//! General-purpose mechanical relations that do not fit a single derived
//! quantity: efficiency, momentum, and the density/pressure definitions.

use crate::errors::{checked_div, Outcome, Saturate};
use crate::math::Scalar;

/// Efficiency as a ratio `A_useful / A_total`.
pub fn try_efficiency(useful_work: Scalar, total_work: Scalar) -> Outcome {
    checked_div(useful_work, total_work, "mechanics::efficiency")
}

/// `A_useful / A_total`; 0 when no work was done.
#[must_use]
pub fn efficiency(useful_work: Scalar, total_work: Scalar) -> Scalar {
    try_efficiency(useful_work, total_work).or_zero()
}

/// Mean power `A / t`.
pub fn try_power(work: Scalar, time: Scalar) -> Outcome {
    checked_div(work, time, "mechanics::power")
}

/// `A / t`; 0 when `t = 0`.
#[must_use]
pub fn power(work: Scalar, time: Scalar) -> Scalar {
    try_power(work, time).or_zero()
}

/// Work delivered by power `p` over time `t`.
#[must_use]
pub fn work_from_power(p: Scalar, t: Scalar) -> Scalar {
    p * t
}

/// Linear momentum `m·v`.
#[must_use]
pub fn momentum(m: Scalar, v: Scalar) -> Scalar {
    m * v
}

/// Impulse of a constant force `F·t`.
#[must_use]
pub fn impulse(f: Scalar, t: Scalar) -> Scalar {
    f * t
}

/// Pressure `F / S`.
pub fn try_pressure_from_force(f: Scalar, area: Scalar) -> Outcome {
    checked_div(f, area, "mechanics::pressure_from_force")
}

/// `F / S`; 0 when `S = 0`.
#[must_use]
pub fn pressure_from_force(f: Scalar, area: Scalar) -> Scalar {
    try_pressure_from_force(f, area).or_zero()
}

/// Density `m / V`.
pub fn try_density(m: Scalar, v: Scalar) -> Outcome {
    checked_div(m, v, "mechanics::density")
}

/// `m / V`; 0 when `V = 0`.
#[must_use]
pub fn density(m: Scalar, v: Scalar) -> Scalar {
    try_density(m, v).or_zero()
}
