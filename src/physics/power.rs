//! Power in watts.

use crate::errors::{checked_div, Outcome, Saturate};
use crate::math::Scalar;

/// Mean power `W / t`.
pub fn try_from_work_time(w: Scalar, t: Scalar) -> Outcome {
    checked_div(w, t, "power::from_work_time")
}

/// `W / t`; 0 when `t = 0`.
#[must_use]
pub fn from_work_time(w: Scalar, t: Scalar) -> Scalar {
    try_from_work_time(w, t).or_zero()
}

/// Mechanical power `F·v`.
#[must_use]
pub fn from_force_velocity(f: Scalar, v: Scalar) -> Scalar {
    f * v
}

/// Electric power `U·I`.
#[must_use]
pub fn from_voltage_current(u: Scalar, i: Scalar) -> Scalar {
    u * i
}

/// Dissipated power `I²·R`.
#[must_use]
pub fn from_current_resistance(i: Scalar, r: Scalar) -> Scalar {
    i * i * r
}

/// Dissipated power `U² / R`.
pub fn try_from_voltage_resistance(u: Scalar, r: Scalar) -> Outcome {
    checked_div(u * u, r, "power::from_voltage_resistance")
}

/// `U² / R`; 0 when `R = 0`.
#[must_use]
pub fn from_voltage_resistance(u: Scalar, r: Scalar) -> Scalar {
    try_from_voltage_resistance(u, r).or_zero()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn electric_forms_agree() {
        let (u, r) = (12.0, 4.0);
        let i = u / r;
        assert_relative_eq!(from_voltage_current(u, i), 36.0);
        assert_relative_eq!(from_current_resistance(i, r), 36.0);
        assert_relative_eq!(from_voltage_resistance(u, r), 36.0);
        assert_eq!(from_voltage_resistance(u, 0.0), 0.0);
    }

    #[test]
    fn mechanical_forms() {
        assert_relative_eq!(from_work_time(1200.0, 3.0), 400.0);
        assert_eq!(from_work_time(1200.0, 0.0), 0.0);
        assert_relative_eq!(from_force_velocity(50.0, 4.0), 200.0);
    }
}
