//! Heights and depths in metres.

use crate::constants::STANDARD_GRAVITY;
use crate::errors::{DomainError, Outcome, Saturate};
use crate::math::Scalar;

/// Height at which a mass `m` stores potential energy `ep`, under standard gravity.
#[must_use]
pub fn from_potential_energy(ep: Scalar, m: Scalar) -> Scalar {
    from_potential_energy_with(ep, m, STANDARD_GRAVITY)
}

/// `Eₚ / (m·g)`.
pub fn try_from_potential_energy_with(ep: Scalar, m: Scalar, g: Scalar) -> Outcome {
    if m == 0.0 || g == 0.0 {
        return Err(DomainError::DivisionByZero("height::from_potential_energy"));
    }
    Ok(ep / (m * g))
}

/// `Eₚ / (m·g)`; 0 when `m = 0` or `g = 0`.
#[must_use]
pub fn from_potential_energy_with(ep: Scalar, m: Scalar, g: Scalar) -> Scalar {
    try_from_potential_energy_with(ep, m, g).or_zero()
}

/// Depth of a fluid column of density `rho` exerting pressure `p`, under standard gravity.
#[must_use]
pub fn from_pressure_density(p: Scalar, rho: Scalar) -> Scalar {
    from_pressure_density_with(p, rho, STANDARD_GRAVITY)
}

/// `p / (ρ·g)`.
pub fn try_from_pressure_density_with(p: Scalar, rho: Scalar, g: Scalar) -> Outcome {
    if rho == 0.0 || g == 0.0 {
        return Err(DomainError::DivisionByZero("height::from_pressure_density"));
    }
    Ok(p / (rho * g))
}

/// `p / (ρ·g)`; 0 when `ρ = 0` or `g = 0`.
#[must_use]
pub fn from_pressure_density_with(p: Scalar, rho: Scalar, g: Scalar) -> Scalar {
    try_from_pressure_density_with(p, rho, g).or_zero()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::MARTIAN_GRAVITY;

    #[test]
    fn inverts_potential_energy() {
        assert_relative_eq!(from_potential_energy(196.133, 10.0), 2.0, epsilon = 1.0e-12);
        assert_relative_eq!(from_potential_energy_with(74.42, 10.0, MARTIAN_GRAVITY), 2.0, epsilon = 1.0e-12);
        assert_eq!(from_potential_energy(196.133, 0.0), 0.0);
    }

    #[test]
    fn inverts_hydrostatic_pressure() {
        assert_relative_eq!(from_pressure_density(98_066.5, 1000.0), 10.0, epsilon = 1.0e-9);
        assert_eq!(from_pressure_density(98_066.5, 0.0), 0.0);
        assert_eq!(from_pressure_density_with(98_066.5, 1000.0, 0.0), 0.0);
    }
}
