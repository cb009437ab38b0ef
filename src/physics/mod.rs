//! Physics catalog: kinematics, forces, energy and work, power and circuits.
//!
//! Modules are grouped by the quantity they produce ("solve for X given the
//! others"). Formulas that depend on g, G or k come in pairs: the plain form
//! uses the standard constant from [`crate::constants`], and the `_with` form
//! takes it as an explicit argument.

pub mod acceleration;
pub mod circuit;
pub mod distance;
pub mod energy;
pub mod force;
pub mod height;
pub mod mass;
pub mod mechanics;
pub mod optics;
pub mod power;
pub mod time;
pub mod velocity;
pub mod volume;
