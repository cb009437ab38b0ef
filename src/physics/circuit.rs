//! DC circuit relations: Ohm's law, Joule heating and wire resistance.

use crate::errors::{checked_div, Outcome, Saturate};
use crate::materials::{self, Material};
use crate::math::Scalar;

/// Current through resistance `r` at voltage `u`, `I = U / R`.
pub fn try_ohm_current(u: Scalar, r: Scalar) -> Outcome {
    checked_div(u, r, "circuit::ohm_current")
}

/// `U / R`; 0 when `R = 0`.
#[must_use]
pub fn ohm_current(u: Scalar, r: Scalar) -> Scalar {
    try_ohm_current(u, r).or_zero()
}

/// Voltage drop `U = I·R`.
#[must_use]
pub fn voltage(i: Scalar, r: Scalar) -> Scalar {
    i * r
}

/// Resistance `R = U / I`.
pub fn try_resistance(u: Scalar, i: Scalar) -> Outcome {
    checked_div(u, i, "circuit::resistance")
}

/// `U / I`; 0 when `I = 0`.
#[must_use]
pub fn resistance(u: Scalar, i: Scalar) -> Scalar {
    try_resistance(u, i).or_zero()
}

/// Joule-Lenz heat `Q = I²·R·t`.
#[must_use]
pub fn joule_heat(i: Scalar, r: Scalar, t: Scalar) -> Scalar {
    i * i * r * t
}

/// Resistance of a uniform conductor `ρ·L / S`.
pub fn try_wire_resistance(resistivity: Scalar, length: Scalar, area: Scalar) -> Outcome {
    checked_div(resistivity * length, area, "circuit::wire_resistance")
}

/// `ρ·L / S`; 0 when `S = 0`.
#[must_use]
pub fn wire_resistance(resistivity: Scalar, length: Scalar, area: Scalar) -> Scalar {
    try_wire_resistance(resistivity, length, area).or_zero()
}

/// Resistance of a wire made of a tabulated material, or `None` when the
/// material has no resistivity entry.
#[must_use]
pub fn wire_resistance_of(material: Material, length: Scalar, area: Scalar) -> Option<Scalar> {
    materials::resistivity(material).map(|rho| wire_resistance(rho, length, area))
}
