//! Physical environment: the constants a caller may want to override.
//!
//! Every formula that depends on g, G or k has a `_with` variant taking the
//! constant explicitly. [`Environment`] bundles those constants so code that
//! works off-Earth (or with a different unit convention) can configure them
//! once and call the formulas as methods.

use crate::constants::{
    COULOMB_CONSTANT, GRAVITATIONAL_CONSTANT, LUNAR_GRAVITY, MARTIAN_GRAVITY, STANDARD_GRAVITY,
};
use crate::math::Scalar;
use crate::physics::{energy, force, height, mass, volume};

/// Overridable physical constants.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Environment {
    /// Gravitational acceleration in m/s².
    pub gravity: Scalar,
    /// Newtonian constant of gravitation in m³/(kg·s²).
    pub gravitational_constant: Scalar,
    /// Coulomb constant in N·m²/C².
    pub coulomb_constant: Scalar,
}

impl Default for Environment {
    fn default() -> Self {
        Self::earth()
    }
}

impl Environment {
    /// Standard terrestrial values.
    #[must_use]
    pub const fn earth() -> Self {
        Self {
            gravity: STANDARD_GRAVITY,
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            coulomb_constant: COULOMB_CONSTANT,
        }
    }

    /// Lunar surface gravity.
    #[must_use]
    pub const fn moon() -> Self {
        Self::earth().with_gravity(LUNAR_GRAVITY)
    }

    /// Martian surface gravity.
    #[must_use]
    pub const fn mars() -> Self {
        Self::earth().with_gravity(MARTIAN_GRAVITY)
    }

    /// Replaces the gravitational acceleration.
    #[must_use]
    pub const fn with_gravity(mut self, gravity: Scalar) -> Self {
        self.gravity = gravity;
        self
    }

    /// Replaces the gravitational constant.
    #[must_use]
    pub const fn with_gravitational_constant(mut self, gravitational_constant: Scalar) -> Self {
        self.gravitational_constant = gravitational_constant;
        self
    }

    /// Replaces the Coulomb constant.
    #[must_use]
    pub const fn with_coulomb_constant(mut self, coulomb_constant: Scalar) -> Self {
        self.coulomb_constant = coulomb_constant;
        self
    }

    /// Weight of mass `m`.
    #[must_use]
    pub fn weight(&self, m: Scalar) -> Scalar {
        force::gravity_with(m, self.gravity)
    }

    /// Mass of a body of weight `w`; 0 in zero gravity.
    #[must_use]
    pub fn mass_from_weight(&self, w: Scalar) -> Scalar {
        mass::from_weight_gravity_with(w, self.gravity)
    }

    /// Potential energy of mass `m` at height `h`.
    #[must_use]
    pub fn potential_energy(&self, m: Scalar, h: Scalar) -> Scalar {
        energy::potential_with(m, h, self.gravity)
    }

    /// Work to move mass `m` between two heights.
    #[must_use]
    pub fn lift_work(&self, m: Scalar, h_initial: Scalar, h_final: Scalar) -> Scalar {
        energy::work_potential_energy_change_with(m, h_initial, h_final, self.gravity)
    }

    /// Height at which mass `m` stores energy `ep`.
    #[must_use]
    pub fn height_from_potential_energy(&self, ep: Scalar, m: Scalar) -> Scalar {
        height::from_potential_energy_with(ep, m, self.gravity)
    }

    /// Buoyant force on volume `v` submerged in a fluid of density `rho`.
    #[must_use]
    pub fn buoyant_force(&self, rho: Scalar, v: Scalar) -> Scalar {
        force::archimedes_with(rho, v, self.gravity)
    }

    /// Submerged volume producing buoyant force `f`.
    #[must_use]
    pub fn displaced_volume(&self, f: Scalar, rho: Scalar) -> Scalar {
        volume::from_archimedes_force_with(f, rho, self.gravity)
    }

    /// Force of a fluid column of height `h` on area `area`.
    #[must_use]
    pub fn hydrostatic_force(&self, rho: Scalar, h: Scalar, area: Scalar) -> Scalar {
        force::hydrostatic_with(rho, h, area, self.gravity)
    }

    /// Depth at which a fluid of density `rho` exerts pressure `p`.
    #[must_use]
    pub fn depth_from_pressure(&self, p: Scalar, rho: Scalar) -> Scalar {
        height::from_pressure_density_with(p, rho, self.gravity)
    }

    /// Gravitational attraction between two masses.
    #[must_use]
    pub fn gravitation(&self, m1: Scalar, m2: Scalar, r: Scalar) -> Scalar {
        force::universal_gravitation_with(m1, m2, r, self.gravitational_constant)
    }

    /// Electrostatic force between two point charges.
    #[must_use]
    pub fn coulomb(&self, q1: Scalar, q2: Scalar, r: Scalar) -> Scalar {
        force::coulomb_with(q1, q2, r, self.coulomb_constant)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn earth_matches_default_formulas() {
        let env = Environment::default();
        assert_eq!(env, Environment::earth());
        assert_relative_eq!(env.weight(10.0), force::gravity(10.0));
        assert_relative_eq!(env.potential_energy(3.0, 4.0), energy::potential(3.0, 4.0));
        assert_relative_eq!(env.gravitation(1.0e3, 2.0e3, 5.0), force::universal_gravitation(1.0e3, 2.0e3, 5.0));
        assert_relative_eq!(env.coulomb(1.0e-6, 2.0e-6, 0.1), force::coulomb(1.0e-6, 2.0e-6, 0.1));
        assert_relative_eq!(env.hydrostatic_force(1000.0, 2.0, 0.5), force::hydrostatic(1000.0, 2.0, 0.5));
    }

    #[test]
    fn off_world_gravity() {
        let moon = Environment::moon();
        assert_relative_eq!(moon.weight(10.0), 16.2, epsilon = 1.0e-12);
        assert_relative_eq!(moon.mass_from_weight(16.2), 10.0, epsilon = 1.0e-12);
        assert_relative_eq!(Environment::mars().lift_work(1.0, 0.0, 2.0), 7.442, epsilon = 1.0e-12);
        assert_eq!(moon.gravitational_constant, GRAVITATIONAL_CONSTANT);
    }

    #[test]
    fn inverse_forms_round_trip() {
        let env = Environment::mars();
        let ep = env.potential_energy(5.0, 12.0);
        assert_relative_eq!(env.height_from_potential_energy(ep, 5.0), 12.0, epsilon = 1.0e-12);
        let f = env.buoyant_force(1000.0, 0.3);
        assert_relative_eq!(env.displaced_volume(f, 1000.0), 0.3, epsilon = 1.0e-12);
        let p = 1000.0 * env.gravity * 4.0;
        assert_relative_eq!(env.depth_from_pressure(p, 1000.0), 4.0, epsilon = 1.0e-12);
    }

    #[test]
    fn zero_gravity_saturates_inverses() {
        let env = Environment::earth().with_gravity(0.0);
        assert_eq!(env.weight(10.0), 0.0);
        assert_eq!(env.mass_from_weight(10.0), 0.0);
        assert_eq!(env.height_from_potential_energy(10.0, 1.0), 0.0);
    }

    #[test]
    fn constant_overrides() {
        let env = Environment::earth()
            .with_gravitational_constant(1.0)
            .with_coulomb_constant(1.0);
        assert_relative_eq!(env.gravitation(2.0, 3.0, 2.0), 1.5);
        assert_relative_eq!(env.coulomb(2.0, 3.0, 2.0), 1.5);
        assert_eq!(env.coulomb(2.0, 3.0, 0.0), 0.0);
    }
}
