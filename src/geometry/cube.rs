//! Cubes.

use crate::errors::{checked_sqrt, non_negative, Outcome, Saturate};
use crate::math::Scalar;

/// Volume `s³`.
#[must_use]
pub fn volume(side: Scalar) -> Scalar {
    side * side * side
}

/// Surface area `6s²`.
#[must_use]
pub fn surface_area(side: Scalar) -> Scalar {
    6.0 * side * side
}

/// Space diagonal `s·√3`.
#[must_use]
pub fn diagonal(side: Scalar) -> Scalar {
    side * 3.0_f64.sqrt()
}

/// Edge of the cube with the given volume.
pub fn try_side_from_volume(volume: Scalar) -> Outcome {
    non_negative(volume, "cube::side_from_volume").map(Scalar::cbrt)
}

/// Edge from volume; 0 for a negative volume.
#[must_use]
pub fn side_from_volume(volume: Scalar) -> Scalar {
    try_side_from_volume(volume).or_zero()
}

/// Edge of the cube with the given surface area.
pub fn try_side_from_surface_area(surface_area: Scalar) -> Outcome {
    checked_sqrt(surface_area / 6.0, "cube::side_from_surface_area")
}

/// Edge from surface area; 0 for a negative area.
#[must_use]
pub fn side_from_surface_area(surface_area: Scalar) -> Scalar {
    try_side_from_surface_area(surface_area).or_zero()
}
