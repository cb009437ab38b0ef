//! Distances in metres.

use crate::errors::{checked_div, Outcome, Saturate};
use crate::math::Scalar;

/// `v·t`.
#[must_use]
pub fn from_velocity_time(v: Scalar, t: Scalar) -> Scalar {
    v * t
}

/// `v₀·t + a·t²/2`.
#[must_use]
pub fn from_velocity_acceleration_time(v0: Scalar, a: Scalar, t: Scalar) -> Scalar {
    v0 * t + 0.5 * a * t * t
}

/// Stopping distance `(v² − v₀²) / 2a`.
pub fn try_from_velocity_acceleration(v: Scalar, v0: Scalar, a: Scalar) -> Outcome {
    checked_div(v * v - v0 * v0, 2.0 * a, "distance::from_velocity_acceleration")
}

/// `(v² − v₀²) / 2a`; 0 when `a = 0`.
#[must_use]
pub fn from_velocity_acceleration(v: Scalar, v0: Scalar, a: Scalar) -> Scalar {
    try_from_velocity_acceleration(v, v0, a).or_zero()
}

/// Displacement from the work `w` done by a force `f`, `W / F`.
pub fn try_from_work_force(w: Scalar, f: Scalar) -> Outcome {
    checked_div(w, f, "distance::from_work_force")
}

/// `W / F`; 0 when `F = 0`.
#[must_use]
pub fn from_work_force(w: Scalar, f: Scalar) -> Scalar {
    try_from_work_force(w, f).or_zero()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn kinematic_distances() {
        assert_relative_eq!(from_velocity_time(12.5, 8.0), 100.0);
        assert_relative_eq!(from_velocity_acceleration_time(2.0, 3.0, 4.0), 32.0);
        assert_relative_eq!(from_velocity_acceleration(10.0, 0.0, 2.0), 25.0);
        assert_relative_eq!(from_work_force(500.0, 25.0), 20.0);
    }

    #[test]
    fn zero_divisors_saturate() {
        assert_eq!(from_velocity_acceleration(10.0, 0.0, 0.0), 0.0);
        assert_eq!(from_work_force(500.0, 0.0), 0.0);
        assert!(try_from_work_force(500.0, 0.0).is_err());
    }
}
