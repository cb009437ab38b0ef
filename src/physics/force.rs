//! Forces in newtons.

use crate::constants::{COULOMB_CONSTANT, GRAVITATIONAL_CONSTANT, STANDARD_GRAVITY};
use crate::errors::{checked_div, Outcome, Saturate};
use crate::math::{radians, Scalar};

/// Weight `m·g` under standard gravity.
#[must_use]
pub fn gravity(m: Scalar) -> Scalar {
    gravity_with(m, STANDARD_GRAVITY)
}

/// Weight `m·g` for an arbitrary gravitational acceleration.
#[must_use]
pub fn gravity_with(m: Scalar, g: Scalar) -> Scalar {
    m * g
}

/// Newton's second law `F = m·a`.
#[must_use]
pub fn newton_second_law(m: Scalar, a: Scalar) -> Scalar {
    m * a
}

/// Newtonian attraction `G·m₁·m₂ / r²`.
#[must_use]
pub fn universal_gravitation(m1: Scalar, m2: Scalar, r: Scalar) -> Scalar {
    universal_gravitation_with(m1, m2, r, GRAVITATIONAL_CONSTANT)
}

/// Newtonian attraction with an explicit gravitational constant.
pub fn try_universal_gravitation_with(m1: Scalar, m2: Scalar, r: Scalar, big_g: Scalar) -> Outcome {
    checked_div(big_g * (m1 * m2), r * r, "force::universal_gravitation")
}

/// Newtonian attraction with an explicit gravitational constant; 0 at `r = 0`.
#[must_use]
pub fn universal_gravitation_with(m1: Scalar, m2: Scalar, r: Scalar, big_g: Scalar) -> Scalar {
    try_universal_gravitation_with(m1, m2, r, big_g).or_zero()
}

/// Sliding friction `μ·N`.
#[must_use]
pub fn friction(mu: Scalar, normal: Scalar) -> Scalar {
    mu * normal
}

/// Buoyancy `ρ·g·V` on a body displacing volume `v` of fluid with density `rho`.
#[must_use]
pub fn archimedes(rho: Scalar, v: Scalar) -> Scalar {
    archimedes_with(rho, v, STANDARD_GRAVITY)
}

/// Buoyancy with an explicit gravitational acceleration.
#[must_use]
pub fn archimedes_with(rho: Scalar, v: Scalar, g: Scalar) -> Scalar {
    rho * g * v
}

/// Electrostatic force `k·q₁·q₂ / r²`.
#[must_use]
pub fn coulomb(q1: Scalar, q2: Scalar, r: Scalar) -> Scalar {
    coulomb_with(q1, q2, r, COULOMB_CONSTANT)
}

/// Electrostatic force with an explicit Coulomb constant (e.g. in a medium).
pub fn try_coulomb_with(q1: Scalar, q2: Scalar, r: Scalar, k: Scalar) -> Outcome {
    checked_div(k * (q1 * q2), r * r, "force::coulomb")
}

/// Electrostatic force with an explicit Coulomb constant; 0 at `r = 0`.
#[must_use]
pub fn coulomb_with(q1: Scalar, q2: Scalar, r: Scalar, k: Scalar) -> Scalar {
    try_coulomb_with(q1, q2, r, k).or_zero()
}

/// Lorentz force `q·v·B·sin α` on a charge crossing a magnetic field at
/// `angle_degrees`.
#[must_use]
pub fn lorentz(q: Scalar, v: Scalar, b: Scalar, angle_degrees: Scalar) -> Scalar {
    q * v * b * radians(angle_degrees).sin()
}

/// Ampère force `B·I·L·sin α` on a straight conductor.
#[must_use]
pub fn ampere(b: Scalar, current: Scalar, length: Scalar, angle_degrees: Scalar) -> Scalar {
    b * current * length * radians(angle_degrees).sin()
}

/// Centripetal force `m·v² / r`.
pub fn try_centripetal(m: Scalar, v: Scalar, r: Scalar) -> Outcome {
    checked_div(m * v * v, r, "force::centripetal")
}

/// Centripetal force; 0 at `r = 0`.
#[must_use]
pub fn centripetal(m: Scalar, v: Scalar, r: Scalar) -> Scalar {
    try_centripetal(m, v, r).or_zero()
}

/// Orbit radius `m·v² / F` that a centripetal force `f` sustains.
pub fn try_centripetal_radius(f: Scalar, m: Scalar, v: Scalar) -> Outcome {
    checked_div(m * v * v, f, "force::centripetal_radius")
}

/// Orbit radius from centripetal force; 0 when the force is 0.
#[must_use]
pub fn centripetal_radius(f: Scalar, m: Scalar, v: Scalar) -> Scalar {
    try_centripetal_radius(f, m, v).or_zero()
}

/// Force of pressure `P·S` on an area.
#[must_use]
pub fn pressure(p: Scalar, area: Scalar) -> Scalar {
    p * area
}

/// Force of a fluid column `ρ·g·h·S` on an area at depth `h`.
#[must_use]
pub fn hydrostatic(rho: Scalar, h: Scalar, area: Scalar) -> Scalar {
    hydrostatic_with(rho, h, area, STANDARD_GRAVITY)
}

/// Hydrostatic force with an explicit gravitational acceleration.
#[must_use]
pub fn hydrostatic_with(rho: Scalar, h: Scalar, area: Scalar, g: Scalar) -> Scalar {
    rho * g * h * area
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::LUNAR_GRAVITY;

    #[test]
    fn weight_on_earth_and_moon() {
        assert_relative_eq!(gravity(10.0), 98.0665, epsilon = 1.0e-12);
        assert_relative_eq!(gravity_with(10.0, LUNAR_GRAVITY), 16.2, epsilon = 1.0e-12);
    }

    #[test]
    fn earth_moon_attraction() {
        let f = universal_gravitation(5.972e24, 7.348e22, 3.844e8);
        assert_relative_eq!(f, 1.982e20, max_relative = 1.0e-3);
    }

    #[test]
    fn inverse_square_laws_saturate_at_zero_distance() {
        assert_eq!(universal_gravitation(1.0, 1.0, 0.0), 0.0);
        assert_eq!(coulomb(1.0e-6, 1.0e-6, 0.0), 0.0);
        assert!(try_coulomb_with(1.0, 1.0, 0.0, COULOMB_CONSTANT).is_err());
        assert_eq!(centripetal(2.0, 3.0, 0.0), 0.0);
    }

    #[test]
    fn coulomb_between_microcoulomb_charges() {
        assert_relative_eq!(coulomb(1.0e-6, 1.0e-6, 1.0), 8.987_551_789e-3, max_relative = 1.0e-12);
        assert_relative_eq!(coulomb_with(1.0, 1.0, 2.0, 4.0), 1.0);
    }

    #[test]
    fn magnetic_forces_depend_on_angle() {
        assert_relative_eq!(lorentz(2.0, 3.0, 4.0, 90.0), 24.0, epsilon = 1.0e-12);
        assert_relative_eq!(lorentz(2.0, 3.0, 4.0, 0.0), 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(ampere(0.5, 2.0, 3.0, 30.0), 1.5, epsilon = 1.0e-12);
    }

    #[test]
    fn centripetal_pair_inverts() {
        let f = centripetal(2.0, 3.0, 1.5);
        assert_relative_eq!(f, 12.0);
        assert_relative_eq!(centripetal_radius(f, 2.0, 3.0), 1.5);
        assert_eq!(centripetal_radius(0.0, 2.0, 3.0), 0.0);
    }

    #[test]
    fn fluid_forces() {
        assert_relative_eq!(archimedes(1000.0, 0.001), 9.80665, epsilon = 1.0e-12);
        assert_relative_eq!(hydrostatic_with(1000.0, 2.0, 0.5, 10.0), 10_000.0);
        assert_eq!(pressure(101_325.0, 2.0), 202_650.0);
        assert_relative_eq!(friction(0.3, 50.0), 15.0, epsilon = 1.0e-12);
        assert_eq!(newton_second_law(3.0, 4.0), 12.0);
    }
}
