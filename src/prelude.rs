//! Convenience re-exports for formula-heavy code.

pub use crate::algebra::{
    arithmetic, combinatorics, exponential, geometric, linear, logarithm, quadratic, statistics,
    trigonometry,
};
pub use crate::constants::*;
pub use crate::environment::Environment;
pub use crate::errors::{DomainError, Outcome, Saturate};
pub use crate::materials::{Material, MaterialError, Property};
pub use crate::math::{degrees, radians, CScalar, Scalar, R2, R3};
pub use crate::sheet::{FormulaSheet, SheetError};
