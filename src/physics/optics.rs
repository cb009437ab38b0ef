//! Thin-lens equation `1/F = 1/d + 1/f`, where `d` is the object distance
//! and `f` the image distance (metres).

use crate::errors::{checked_div, Outcome, Saturate};
use crate::math::Scalar;

/// Focal length `d·f / (d + f)`.
pub fn try_focal_length(d: Scalar, f: Scalar) -> Outcome {
    checked_div(d * f, d + f, "optics::focal_length")
}

/// Focal length; 0 when `d + f = 0`.
#[must_use]
pub fn focal_length(d: Scalar, f: Scalar) -> Scalar {
    try_focal_length(d, f).or_zero()
}

/// Object distance `F·f / (f − F)`.
pub fn try_object_distance(focal: Scalar, f: Scalar) -> Outcome {
    checked_div(focal * f, f - focal, "optics::object_distance")
}

/// Object distance; 0 when the image sits at the focal point.
#[must_use]
pub fn object_distance(focal: Scalar, f: Scalar) -> Scalar {
    try_object_distance(focal, f).or_zero()
}

/// Image distance `F·d / (d − F)`.
pub fn try_image_distance(focal: Scalar, d: Scalar) -> Outcome {
    checked_div(focal * d, d - focal, "optics::image_distance")
}

/// Image distance; 0 when the object sits at the focal point.
#[must_use]
pub fn image_distance(focal: Scalar, d: Scalar) -> Scalar {
    try_image_distance(focal, d).or_zero()
}

/// Optical power `1 / F` in dioptres.
pub fn try_optical_power(focal: Scalar) -> Outcome {
    checked_div(1.0, focal, "optics::optical_power")
}

/// Optical power; 0 for a zero focal length.
#[must_use]
pub fn optical_power(focal: Scalar) -> Scalar {
    try_optical_power(focal).or_zero()
}
