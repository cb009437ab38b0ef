#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Mathematical and physical constants shared by every catalog.
pub mod constants;
/// Scalar aliases and angle conversion.
pub mod math;
/// Domain errors and the sentinel-zero policy.
pub mod errors;
/// Tabulated material properties (specific heat, density, resistivity, phase points).
pub mod materials;
/// Overridable physical constants bundled for off-Earth work.
pub mod environment;
/// Algebra catalog: equations, aggregates, logarithms, combinatorics, trigonometry.
pub mod algebra;
/// Geometry catalog: areas, perimeters, volumes and distances.
pub mod geometry;
/// Physics catalog: kinematics, forces, energy, power, circuits and optics.
pub mod physics;
/// Browsable formula sheet solvable for any of its quantities.
pub mod sheet;

/// Common exports for downstream crates.
pub mod prelude;
