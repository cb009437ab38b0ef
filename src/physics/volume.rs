//! Volumes in cubic metres.

use crate::constants::STANDARD_GRAVITY;
use crate::errors::{checked_div, DomainError, Outcome, Saturate};
use crate::math::Scalar;

/// `m / ρ`.
pub fn try_from_mass_density(m: Scalar, rho: Scalar) -> Outcome {
    checked_div(m, rho, "volume::from_mass_density")
}

/// `m / ρ`; 0 when `ρ = 0`.
#[must_use]
pub fn from_mass_density(m: Scalar, rho: Scalar) -> Scalar {
    try_from_mass_density(m, rho).or_zero()
}

/// Displaced volume producing buoyant force `f` in a fluid of density `rho`,
/// under standard gravity.
#[must_use]
pub fn from_archimedes_force(f: Scalar, rho: Scalar) -> Scalar {
    from_archimedes_force_with(f, rho, STANDARD_GRAVITY)
}

/// `F / (ρ·g)`.
pub fn try_from_archimedes_force_with(f: Scalar, rho: Scalar, g: Scalar) -> Outcome {
    if rho == 0.0 || g == 0.0 {
        return Err(DomainError::DivisionByZero("volume::from_archimedes_force"));
    }
    Ok(f / (rho * g))
}

/// `F / (ρ·g)`; 0 when `ρ = 0` or `g = 0`.
#[must_use]
pub fn from_archimedes_force_with(f: Scalar, rho: Scalar, g: Scalar) -> Scalar {
    try_from_archimedes_force_with(f, rho, g).or_zero()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::physics::force;

    #[test]
    fn from_mass() {
        assert_relative_eq!(from_mass_density(2.0, 1000.0), 0.002);
        assert_eq!(from_mass_density(2.0, 0.0), 0.0);
    }

    #[test]
    fn inverts_buoyancy() {
        let f = force::archimedes(1000.0, 0.25);
        assert_relative_eq!(from_archimedes_force(f, 1000.0), 0.25, epsilon = 1.0e-12);
        assert_eq!(from_archimedes_force(f, 0.0), 0.0);
        assert_eq!(from_archimedes_force_with(f, 1000.0, 0.0), 0.0);
    }
}
