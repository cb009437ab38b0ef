//! Masses in kilograms.

use crate::constants::STANDARD_GRAVITY;
use crate::errors::{checked_div, DomainError, Outcome, Saturate};
use crate::math::Scalar;

/// `F / a`.
pub fn try_from_force_acceleration(f: Scalar, a: Scalar) -> Outcome {
    checked_div(f, a, "mass::from_force_acceleration")
}

/// `F / a`; 0 when `a = 0`.
#[must_use]
pub fn from_force_acceleration(f: Scalar, a: Scalar) -> Scalar {
    try_from_force_acceleration(f, a).or_zero()
}

/// `ρ·V`.
#[must_use]
pub fn from_density_volume(rho: Scalar, v: Scalar) -> Scalar {
    rho * v
}

/// `2E / v²`.
pub fn try_from_kinetic_energy_velocity(e: Scalar, v: Scalar) -> Outcome {
    checked_div(2.0 * e, v * v, "mass::from_kinetic_energy_velocity")
}

/// `2E / v²`; 0 when `v = 0`.
#[must_use]
pub fn from_kinetic_energy_velocity(e: Scalar, v: Scalar) -> Scalar {
    try_from_kinetic_energy_velocity(e, v).or_zero()
}

/// `Eₚ / (g·h)` under standard gravity.
#[must_use]
pub fn from_potential_energy_height(ep: Scalar, h: Scalar) -> Scalar {
    from_potential_energy_height_with(ep, h, STANDARD_GRAVITY)
}

/// `Eₚ / (g·h)` for an explicit gravitational acceleration.
pub fn try_from_potential_energy_height_with(ep: Scalar, h: Scalar, g: Scalar) -> Outcome {
    const FORMULA: &str = "mass::from_potential_energy_height";
    if g == 0.0 || h == 0.0 {
        return Err(DomainError::DivisionByZero(FORMULA));
    }
    Ok(ep / (g * h))
}

/// `Eₚ / (g·h)`; 0 when `g = 0` or `h = 0`.
#[must_use]
pub fn from_potential_energy_height_with(ep: Scalar, h: Scalar, g: Scalar) -> Scalar {
    try_from_potential_energy_height_with(ep, h, g).or_zero()
}

/// Mass of a body weighing `w` newtons under standard gravity.
#[must_use]
pub fn from_weight_gravity(w: Scalar) -> Scalar {
    from_weight_gravity_with(w, STANDARD_GRAVITY)
}

/// `W / g`.
pub fn try_from_weight_gravity_with(w: Scalar, g: Scalar) -> Outcome {
    checked_div(w, g, "mass::from_weight_gravity")
}

/// `W / g`; 0 when `g = 0`.
#[must_use]
pub fn from_weight_gravity_with(w: Scalar, g: Scalar) -> Scalar {
    try_from_weight_gravity_with(w, g).or_zero()
}

/// Mass held on a circle of radius `r` at speed `v` by force `f`, `F·r / v²`.
pub fn try_from_centripetal_force(f: Scalar, v: Scalar, r: Scalar) -> Outcome {
    checked_div(f * r, v * v, "mass::from_centripetal_force")
}

/// `F·r / v²`; 0 when `v = 0`.
#[must_use]
pub fn from_centripetal_force(f: Scalar, v: Scalar, r: Scalar) -> Scalar {
    try_from_centripetal_force(f, v, r).or_zero()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::LUNAR_GRAVITY;

    #[test]
    fn inverts_force_and_energy() {
        assert_relative_eq!(from_force_acceleration(12.0, 3.0), 4.0);
        assert_relative_eq!(from_density_volume(1000.0, 0.002), 2.0);
        assert_relative_eq!(from_kinetic_energy_velocity(50.0, 5.0), 4.0);
        assert_relative_eq!(from_centripetal_force(12.0, 3.0, 1.5), 2.0);
    }

    #[test]
    fn gravity_overrides() {
        assert_relative_eq!(from_weight_gravity(98.0665), 10.0, epsilon = 1.0e-12);
        assert_relative_eq!(from_weight_gravity_with(16.2, LUNAR_GRAVITY), 10.0, epsilon = 1.0e-12);
        assert_relative_eq!(from_potential_energy_height_with(32.4, 2.0, LUNAR_GRAVITY), 10.0, epsilon = 1.0e-12);
        assert_eq!(from_potential_energy_height(100.0, 0.0), 0.0);
        assert_eq!(from_potential_energy_height_with(100.0, 2.0, 0.0), 0.0);
        assert_eq!(from_weight_gravity_with(100.0, 0.0), 0.0);
    }

    #[test]
    fn zero_divisors_saturate() {
        assert_eq!(from_force_acceleration(12.0, 0.0), 0.0);
        assert_eq!(from_kinetic_energy_velocity(50.0, 0.0), 0.0);
        assert_eq!(from_centripetal_force(12.0, 0.0, 1.5), 0.0);
    }
}
