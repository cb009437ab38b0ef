//! Energy and work in joules.
//!
//! Work formulas that take an angle expect degrees, like the force formulas
//! in [`crate::physics::force`].

use crate::constants::{GAS_CONSTANT, PLANCK_CONSTANT, SPEED_OF_LIGHT, STANDARD_GRAVITY};
use crate::errors::{checked_div, checked_sqrt, DomainError, Outcome, Saturate};
use crate::math::{radians, Scalar};

/// Translational kinetic energy `m·v²/2`.
#[must_use]
pub fn kinetic(m: Scalar, v: Scalar) -> Scalar {
    0.5 * m * v * v
}

/// Gravitational potential energy `m·g·h` under standard gravity.
#[must_use]
pub fn potential(m: Scalar, h: Scalar) -> Scalar {
    potential_with(m, h, STANDARD_GRAVITY)
}

/// Gravitational potential energy with an explicit `g`.
#[must_use]
pub fn potential_with(m: Scalar, h: Scalar, g: Scalar) -> Scalar {
    m * g * h
}

/// Energy stored in a spring of stiffness `k` stretched by `x`, `k·x²/2`.
#[must_use]
pub fn elastic_potential(k: Scalar, x: Scalar) -> Scalar {
    0.5 * k * x * x
}

/// Rotational kinetic energy `I·ω²/2`.
#[must_use]
pub fn rotational_kinetic(inertia: Scalar, omega: Scalar) -> Scalar {
    0.5 * inertia * omega * omega
}

/// Energy stored in a capacitor `C·U²/2`.
#[must_use]
pub fn capacitor(c: Scalar, u: Scalar) -> Scalar {
    0.5 * c * u * u
}

/// Heat absorbed by mass `m` with specific heat `c` over a temperature change `dt`.
///
/// Specific heats for common materials are in [`crate::materials::specific_heat`].
#[must_use]
pub fn thermal(m: Scalar, c: Scalar, dt: Scalar) -> Scalar {
    m * c * dt
}

/// Heat released by burning mass `m` of fuel with specific heat of combustion `q`.
#[must_use]
pub fn combustion(m: Scalar, q: Scalar) -> Scalar {
    m * q
}

/// Work of a constant force `F·s·cos α`, angle in degrees.
#[must_use]
pub fn work_constant_force(f: Scalar, s: Scalar, angle_degrees: Scalar) -> Scalar {
    f * s * radians(angle_degrees).cos()
}

/// Work of a constant force acting along the displacement.
#[must_use]
pub fn work_constant_force_aligned(f: Scalar, s: Scalar) -> Scalar {
    work_constant_force(f, s, 0.0)
}

/// Work of a force varying linearly from `f_initial` to `f_final`.
#[must_use]
pub fn work_variable_force_linear(f_initial: Scalar, f_final: Scalar, s: Scalar) -> Scalar {
    0.5 * (f_initial + f_final) * s
}

/// Work of a gas expanding at constant pressure, `P·ΔV`.
#[must_use]
pub fn work_gas_isobaric(p: Scalar, dv: Scalar) -> Scalar {
    p * dv
}

/// Work of an electric field moving charge `q` through potential difference `u`.
#[must_use]
pub fn work_electric_field(q: Scalar, u: Scalar) -> Scalar {
    q * u
}

/// Work done against a friction force over distance `s`.
#[must_use]
pub fn work_against_friction(f_friction: Scalar, s: Scalar) -> Scalar {
    f_friction * s
}

/// Share of `total_work` converted at the given efficiency (a ratio, not a percentage).
#[must_use]
pub fn useful_work(total_work: Scalar, efficiency: Scalar) -> Scalar {
    total_work * efficiency
}

/// Work-energy theorem `m·(v₂² − v₁²)/2`.
#[must_use]
pub fn work_kinetic_energy_change(m: Scalar, v_initial: Scalar, v_final: Scalar) -> Scalar {
    0.5 * m * (v_final * v_final - v_initial * v_initial)
}

/// Work to lift mass `m` from `h_initial` to `h_final` under standard gravity.
#[must_use]
pub fn work_potential_energy_change(m: Scalar, h_initial: Scalar, h_final: Scalar) -> Scalar {
    work_potential_energy_change_with(m, h_initial, h_final, STANDARD_GRAVITY)
}

/// `m·g·(h₂ − h₁)` with an explicit `g`.
#[must_use]
pub fn work_potential_energy_change_with(
    m: Scalar,
    h_initial: Scalar,
    h_final: Scalar,
    g: Scalar,
) -> Scalar {
    m * g * (h_final - h_initial)
}

/// Work to stretch a spring from `x_initial` to `x_final`, `k·(x₂² − x₁²)/2`.
#[must_use]
pub fn work_elastic_force(k: Scalar, x_initial: Scalar, x_final: Scalar) -> Scalar {
    0.5 * k * (x_final * x_final - x_initial * x_initial)
}

/// Rest energy `m·c²`.
#[must_use]
pub fn rest_energy(m: Scalar) -> Scalar {
    m * SPEED_OF_LIGHT * SPEED_OF_LIGHT
}

/// Photon energy `h·f`.
#[must_use]
pub fn photon_energy(frequency: Scalar) -> Scalar {
    PLANCK_CONSTANT * frequency
}

/// Energy stored in an inductor `L·I²/2`.
#[must_use]
pub fn magnetic_energy(inductance: Scalar, current: Scalar) -> Scalar {
    0.5 * inductance * current * current
}

/// Energy held in `moles` of bonds of the given molar bond energy.
#[must_use]
pub fn chemical_energy(moles: Scalar, bond_energy_per_mole: Scalar) -> Scalar {
    moles * bond_energy_per_mole
}

/// Arrhenius activation energy `−R·T·ln(k / A)` in J/mol.
pub fn try_activation_energy(pre_exponential: Scalar, rate_constant: Scalar, t: Scalar) -> Outcome {
    const FORMULA: &str = "energy::activation_energy";
    if t <= 0.0 {
        return Err(DomainError::OutOfDomain(FORMULA));
    }
    let ratio = checked_div(rate_constant, pre_exponential, FORMULA)?;
    if rate_constant <= 0.0 || ratio <= 0.0 {
        return Err(DomainError::NonPositiveLogarithm(FORMULA));
    }
    Ok(-GAS_CONSTANT * t * ratio.ln())
}

/// Arrhenius activation energy; 0 when `A = 0`, `k ≤ 0` or `T ≤ 0`.
#[must_use]
pub fn activation_energy(pre_exponential: Scalar, rate_constant: Scalar, t: Scalar) -> Scalar {
    try_activation_energy(pre_exponential, rate_constant, t).or_zero()
}

/// Spring stiffness from stored energy and extension, `2E / x²`.
pub fn try_spring_constant_from_elastic(e: Scalar, x: Scalar) -> Outcome {
    checked_div(2.0 * e, x * x, "energy::spring_constant_from_elastic")
}

/// `2E / x²`; 0 when `x = 0`.
#[must_use]
pub fn spring_constant_from_elastic(e: Scalar, x: Scalar) -> Scalar {
    try_spring_constant_from_elastic(e, x).or_zero()
}

/// Spring extension from stored energy and stiffness, `√(2E / k)`.
pub fn try_deformation_from_elastic(e: Scalar, k: Scalar) -> Outcome {
    const FORMULA: &str = "energy::deformation_from_elastic";
    checked_sqrt(checked_div(2.0 * e, k, FORMULA)?, FORMULA)
}

/// `√(2E / k)`; 0 when `k = 0` or the ratio is negative.
#[must_use]
pub fn deformation_from_elastic(e: Scalar, k: Scalar) -> Scalar {
    try_deformation_from_elastic(e, k).or_zero()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::LUNAR_GRAVITY;

    #[test]
    fn stored_energies() {
        assert_relative_eq!(kinetic(4.0, 5.0), 50.0);
        assert_relative_eq!(potential(10.0, 2.0), 196.133, epsilon = 1.0e-12);
        assert_relative_eq!(potential_with(10.0, 2.0, LUNAR_GRAVITY), 32.4, epsilon = 1.0e-12);
        assert_relative_eq!(elastic_potential(200.0, 0.1), 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(rotational_kinetic(2.0, 3.0), 9.0);
        assert_relative_eq!(capacitor(1.0e-6, 100.0), 5.0e-3, max_relative = 1.0e-12);
        assert_relative_eq!(magnetic_energy(0.5, 4.0), 4.0);
    }

    #[test]
    fn heat_and_chemistry() {
        assert_relative_eq!(thermal(2.0, 4200.0, 10.0), 84_000.0);
        assert_relative_eq!(combustion(0.5, 4.4e7), 2.2e7);
        assert_relative_eq!(chemical_energy(2.0, 4.36e5), 8.72e5);
    }

    #[test]
    fn work_variants() {
        assert_relative_eq!(work_constant_force_aligned(10.0, 5.0), 50.0);
        assert_relative_eq!(work_constant_force(10.0, 5.0, 60.0), 25.0, epsilon = 1.0e-12);
        assert_relative_eq!(work_constant_force(10.0, 5.0, 90.0), 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(work_variable_force_linear(2.0, 6.0, 3.0), 12.0);
        assert_relative_eq!(work_gas_isobaric(1.0e5, 0.002), 200.0, epsilon = 1.0e-9);
        assert_relative_eq!(work_electric_field(2.0e-3, 500.0), 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(work_against_friction(15.0, 4.0), 60.0);
        assert_relative_eq!(useful_work(1000.0, 0.8), 800.0, epsilon = 1.0e-9);
        assert_relative_eq!(work_kinetic_energy_change(2.0, 3.0, 5.0), 16.0);
        assert_relative_eq!(
            work_potential_energy_change_with(10.0, 1.0, 3.0, LUNAR_GRAVITY),
            32.4,
            epsilon = 1.0e-12
        );
        assert_relative_eq!(
            work_potential_energy_change(10.0, 3.0, 1.0),
            -potential(10.0, 2.0),
            epsilon = 1.0e-12
        );
        assert_relative_eq!(work_elastic_force(100.0, 0.1, 0.3), 4.0, epsilon = 1.0e-12);
    }

    #[test]
    fn relativistic_and_quantum() {
        assert_relative_eq!(rest_energy(1.0), 8.987_551_787_368_176e16, max_relative = 1.0e-12);
        assert_relative_eq!(photon_energy(1.0e15), 6.626_070_15e-19, max_relative = 1.0e-12);
    }

    #[test]
    fn activation_energy_follows_arrhenius() {
        let a = 1.0e13;
        let t = 300.0;
        let ea = 50_000.0;
        let k = a * (-ea / (GAS_CONSTANT * t)).exp();
        assert_relative_eq!(activation_energy(a, k, t), ea, max_relative = 1.0e-9);
    }

    #[test]
    fn activation_energy_guards() {
        const F: &str = "energy::activation_energy";
        assert_eq!(try_activation_energy(0.0, 1.0, 300.0), Err(DomainError::DivisionByZero(F)));
        assert_eq!(try_activation_energy(1.0e13, 0.0, 300.0), Err(DomainError::NonPositiveLogarithm(F)));
        assert_eq!(try_activation_energy(1.0e13, 1.0, 0.0), Err(DomainError::OutOfDomain(F)));
        assert_eq!(activation_energy(-1.0e13, 1.0, 300.0), 0.0);
    }

    #[test]
    fn spring_inversions() {
        assert_relative_eq!(spring_constant_from_elastic(1.0, 0.1), 200.0, epsilon = 1.0e-9);
        assert_relative_eq!(deformation_from_elastic(1.0, 200.0), 0.1, epsilon = 1.0e-12);
        assert_eq!(spring_constant_from_elastic(1.0, 0.0), 0.0);
        assert_eq!(deformation_from_elastic(1.0, 0.0), 0.0);
        assert_eq!(deformation_from_elastic(-1.0, 200.0), 0.0);
    }
}
