//! Accelerations in m/s².

use crate::errors::{checked_div, Outcome, Saturate};
use crate::math::Scalar;

/// `(v − v₀) / t`.
pub fn try_from_velocity_time(v: Scalar, v0: Scalar, t: Scalar) -> Outcome {
    checked_div(v - v0, t, "acceleration::from_velocity_time")
}

/// `(v − v₀) / t`; 0 when `t = 0`.
#[must_use]
pub fn from_velocity_time(v: Scalar, v0: Scalar, t: Scalar) -> Scalar {
    try_from_velocity_time(v, v0, t).or_zero()
}

/// `F / m`.
pub fn try_from_force_mass(f: Scalar, m: Scalar) -> Outcome {
    checked_div(f, m, "acceleration::from_force_mass")
}

/// `F / m`; 0 when `m = 0`.
#[must_use]
pub fn from_force_mass(f: Scalar, m: Scalar) -> Scalar {
    try_from_force_mass(f, m).or_zero()
}

/// `(v² − v₀²) / 2s`.
pub fn try_from_velocity_distance(v: Scalar, v0: Scalar, s: Scalar) -> Outcome {
    checked_div(v * v - v0 * v0, 2.0 * s, "acceleration::from_velocity_distance")
}

/// `(v² − v₀²) / 2s`; 0 when `s = 0`.
#[must_use]
pub fn from_velocity_distance(v: Scalar, v0: Scalar, s: Scalar) -> Scalar {
    try_from_velocity_distance(v, v0, s).or_zero()
}

/// `2s / t²`, starting from rest.
pub fn try_from_distance_time(s: Scalar, t: Scalar) -> Outcome {
    checked_div(2.0 * s, t * t, "acceleration::from_distance_time")
}

/// `2s / t²` from rest; 0 when `t = 0`.
#[must_use]
pub fn from_distance_time(s: Scalar, t: Scalar) -> Scalar {
    try_from_distance_time(s, t).or_zero()
}

/// Centripetal acceleration `v² / r`.
pub fn try_centripetal(v: Scalar, r: Scalar) -> Outcome {
    checked_div(v * v, r, "acceleration::centripetal")
}

/// Centripetal acceleration; 0 when `r = 0`.
#[must_use]
pub fn centripetal(v: Scalar, r: Scalar) -> Scalar {
    try_centripetal(v, r).or_zero()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn kinematic_accelerations() {
        assert_relative_eq!(from_velocity_time(20.0, 5.0, 3.0), 5.0);
        assert_relative_eq!(from_force_mass(12.0, 4.0), 3.0);
        assert_relative_eq!(from_velocity_distance(10.0, 0.0, 25.0), 2.0);
        assert_relative_eq!(from_distance_time(25.0, 5.0), 2.0);
        assert_relative_eq!(centripetal(3.0, 1.5), 6.0);
    }

    #[test]
    fn zero_divisors_saturate() {
        assert_eq!(from_velocity_time(20.0, 5.0, 0.0), 0.0);
        assert_eq!(from_force_mass(12.0, 0.0), 0.0);
        assert_eq!(from_velocity_distance(10.0, 0.0, 0.0), 0.0);
        assert_eq!(from_distance_time(25.0, 0.0), 0.0);
        assert_eq!(centripetal(3.0, 0.0), 0.0);
    }
}
