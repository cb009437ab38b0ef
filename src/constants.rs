//! Shared mathematical and physical constants.
//!
//! ## Accuracy
//!
//! Constants marked "exact" have zero uncertainty by SI definition (2019 revision).
//! The gravitational constant and the Coulomb constant are measured/derived values
//! quoted to the precision used by school and engineering reference tables.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - CODATA 2018 values published May 20, 2019 (following 2019 SI redefinition)
//!
//! Every catalog uses the single [`PI`] defined here, including the degree
//! conversions in [`crate::math`].

/// Archimedes' constant π, shared by every formula in the crate.
pub const PI: f64 = std::f64::consts::PI;

/// Newtonian constant of gravitation _G_ in m³/(kg·s²).
/// CODATA 2018 value: 6.67430 × 10⁻¹¹.
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;
/// Coulomb constant _k_ = 1/(4πε₀) in N·m²/C².
pub const COULOMB_CONSTANT: f64 = 8.987_551_789e9;
/// Standard acceleration of gravity _g_ₙ in m/s².
/// Exact by definition (3rd CGPM, 1901): 9.80665 m/s².
pub const STANDARD_GRAVITY: f64 = 9.806_65;
/// Speed of light in vacuum _c_ in meters per second (m/s).
/// Exact value by SI definition (2019): 299,792,458 m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// Planck constant _h_ in joule-seconds (J·s).
/// Exact value by 2019 SI definition: 6.62607015 × 10⁻³⁴ J·s.
pub const PLANCK_CONSTANT: f64 = 6.626_070_15e-34;
/// Molar gas constant _R_ in J/(mol·K).
/// Exact value by 2019 SI definition: 8.314462618... J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314_462_618;

/// Surface gravity of the Moon in m/s².
pub const LUNAR_GRAVITY: f64 = 1.62;
/// Surface gravity of Mars in m/s².
pub const MARTIAN_GRAVITY: f64 = 3.721;

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn coulomb_constant_matches_vacuum_permittivity() {
        let epsilon_0 = 8.854_187_812_8e-12;
        let k = 1.0 / (4.0 * PI * epsilon_0);
        assert_relative_eq!(k, COULOMB_CONSTANT, max_relative = 1.0e-9);
    }
}
