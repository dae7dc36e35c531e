//! Per-frame simulation step
//!
//! Advances the system by one already-scaled `dt`: free bodies are integrated
//! and tested for contact, or the locked composite is integrated as a whole.

use super::collision::{overlap_aabb, resolve_inelastic};
use super::integrator::{integrate_body, integrate_composite};
use super::params::Parameters;
use super::states::{CollisionRecord, Mode, System};

/// Playfield, in pixels, origin top left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

/// Advance `sys` by `dt` seconds of simulated time.
/// Returns the collision record if the bodies merged during this step.
pub fn step(sys: &mut System, arena: &Arena, params: &Parameters, dt: f64) -> Option<CollisionRecord> {
    sys.t += dt;

    if let Mode::Locked(composite) = &mut sys.mode {
        integrate_composite(composite, &mut sys.bodies, arena, dt, params.unit_scale);
        return None;
    }

    for body in sys.bodies.iter_mut() {
        integrate_body(body, arena, dt, params.unit_scale);
    }
    if overlap_aabb(&sys.bodies[0], &sys.bodies[1]) {
        return resolve_inelastic(sys);
    }
    None
}
