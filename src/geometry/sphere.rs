//! Spheres.

use crate::constants::PI;
use crate::errors::{checked_sqrt, non_negative, Outcome, Saturate};
use crate::math::Scalar;

/// Volume `⁴⁄₃π·r³`.
#[must_use]
pub fn volume(radius: Scalar) -> Scalar {
    (4.0 / 3.0) * PI * radius * radius * radius
}

/// Surface area `4π·r²`.
#[must_use]
pub fn surface_area(radius: Scalar) -> Scalar {
    4.0 * PI * radius * radius
}

/// Radius of the sphere with the given volume, by cube root.
pub fn try_radius_from_volume(volume: Scalar) -> Outcome {
    let volume = non_negative(volume, "sphere::radius_from_volume")?;
    Ok((3.0 * volume / (4.0 * PI)).cbrt())
}

/// Radius from volume; 0 for a negative volume.
#[must_use]
pub fn radius_from_volume(volume: Scalar) -> Scalar {
    try_radius_from_volume(volume).or_zero()
}

/// Radius of the sphere with the given surface area.
pub fn try_radius_from_surface_area(surface_area: Scalar) -> Outcome {
    checked_sqrt(surface_area / (4.0 * PI), "sphere::radius_from_surface_area")
}

/// Radius from surface area; 0 for a negative area.
#[must_use]
pub fn radius_from_surface_area(surface_area: Scalar) -> Scalar {
    try_radius_from_surface_area(surface_area).or_zero()
}
