//! Small 2D vector helpers shared by every simulation component
//!
//! Positions are in arena pixels with y pointing down, velocities in m/s with
//! the same axis orientation. [`to_display`] is the only place the y sign is
//! flipped for readouts.

use super::states::NVec2;

/// Euclidean length of `v`
pub fn magnitude(v: &NVec2) -> f64 {
    v.x.hypot(v.y)
}

/// Direction of `v` in radians, `atan2(y, x)`
pub fn angle(v: &NVec2) -> f64 {
    v.y.atan2(v.x)
}

/// `to - from`
pub fn difference(from: &NVec2, to: &NVec2) -> NVec2 {
    to - from
}

/// Vector of length `length` pointing along `angle`
pub fn from_polar(angle: f64, length: f64) -> NVec2 {
    NVec2::new(angle.cos() * length, angle.sin() * length)
}

/// Convert an arena-oriented vector (y down) to the readout convention (y up)
pub fn to_display(v: &NVec2) -> NVec2 {
    NVec2::new(v.x, -v.y)
}
