//! Drag-to-velocity mapping ("slingshot" launch)
//!
//! The drag vector is measured from the point where the drag started to the
//! current pointer position, in arena pixels. Its length is capped at
//! `max_drag`, scaled by `power_scale / unit_scale` into m/s, and the body is
//! launched in the opposite direction of the pull.

use super::params::Parameters;
use super::states::NVec2;
use super::vector::{angle, from_polar, magnitude, to_display};

/// Everything the viewer needs to draw the drag indicator
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchPreview {
    pub origin: NVec2, // body center, arena pixels
    pub tip: NVec2, // arrow tip, origin - direction * clamped distance
    pub clamped_distance: f64, // pixels
    pub speed: f64, // m/s
    pub velocity: NVec2, // launch velocity, arena orientation
    pub displacement: NVec2, // pull in meters, readout convention
}

/// Pull distance after the `max_drag` cap
pub fn clamped_distance(pull: &NVec2, params: &Parameters) -> f64 {
    magnitude(pull).min(params.max_drag)
}

/// Launch speed in m/s for a given capped pull distance
pub fn launch_speed(clamped: f64, params: &Parameters) -> f64 {
    clamped * params.power_scale / params.unit_scale
}

/// Launch velocity for a drag vector, or `None` for pulls inside the deadzone
pub fn launch_velocity(pull: &NVec2, params: &Parameters) -> Option<NVec2> {
    let clamped = clamped_distance(pull, params);
    if clamped <= params.drag_deadzone {
        return None;
    }
    // opposite to the pull
    Some(-from_polar(angle(pull), launch_speed(clamped, params)))
}

/// Indicator data for a drag on a body centered at `origin`
pub fn preview(origin: &NVec2, pull: &NVec2, params: &Parameters) -> LaunchPreview {
    let clamped = clamped_distance(pull, params);
    let arrow = from_polar(angle(pull), clamped);
    let speed = launch_speed(clamped, params);
    LaunchPreview {
        origin: *origin,
        tip: origin - arrow,
        clamped_distance: clamped,
        speed,
        velocity: -from_polar(angle(pull), speed),
        displacement: to_display(&(-arrow * params.power_scale / params.unit_scale)),
    }
}
