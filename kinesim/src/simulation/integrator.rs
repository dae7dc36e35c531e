//! Fixed-step kinematic integrators
//!
//! Explicit Euler drift (no forces act on the bodies) followed by wall
//! reflection. `integrate_body` handles one free body, `integrate_composite`
//! moves the locked pair as one rigid unit.

use super::engine::Arena;
use super::states::{Body, CompositeBody, NVec2};

/// Advance one unlocked body by `dt` seconds and bounce it off the arena walls.
/// Each axis is clamped and reflected on its own, so a corner hit flips both.
pub fn integrate_body(body: &mut Body, arena: &Arena, dt: f64, unit_scale: f64) {
    // x_n+1 = x_n + dt v_n, velocity is in m/s so scale to pixels
    body.x += body.v * dt * unit_scale;

    let half = body.half_extent;
    if body.x.x - half < 0.0 {
        body.x.x = half;
        body.v.x = -body.v.x;
    }
    if body.x.x + half > arena.width {
        body.x.x = arena.width - half;
        body.v.x = -body.v.x;
    }
    if body.x.y - half < 0.0 {
        body.x.y = half;
        body.v.y = -body.v.y;
    }
    if body.x.y + half > arena.height {
        body.x.y = arena.height - half;
        body.v.y = -body.v.y;
    }
}

/// Axis-aligned box enclosing both member squares
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: NVec2,
    pub max: NVec2,
}

/// Union box of both footprints at their composite-relative offsets
pub fn composite_bounds(composite: &CompositeBody, half_extents: [f64; 2]) -> Bounds {
    let mut min = NVec2::new(f64::INFINITY, f64::INFINITY);
    let mut max = NVec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for (offset, half) in composite.offsets.iter().zip(half_extents) {
        let p = composite.x + offset;
        min.x = min.x.min(p.x - half);
        min.y = min.y.min(p.y - half);
        max.x = max.x.max(p.x + half);
        max.y = max.y.max(p.y + half);
    }
    Bounds { min, max }
}

/// Advance the locked composite by `dt`, push it back inside the arena by the
/// exact penetration depth, then re-derive both member bodies from it.
pub fn integrate_composite(
    composite: &mut CompositeBody,
    bodies: &mut [Body; 2],
    arena: &Arena,
    dt: f64,
    unit_scale: f64,
) {
    composite.x += composite.v * dt * unit_scale;

    let bounds = composite_bounds(composite, [bodies[0].half_extent, bodies[1].half_extent]);
    if bounds.min.x < 0.0 {
        composite.x.x -= bounds.min.x;
        composite.v.x = -composite.v.x;
    }
    if bounds.max.x > arena.width {
        composite.x.x -= bounds.max.x - arena.width;
        composite.v.x = -composite.v.x;
    }
    if bounds.min.y < 0.0 {
        composite.x.y -= bounds.min.y;
        composite.v.y = -composite.v.y;
    }
    if bounds.max.y > arena.height {
        composite.x.y -= bounds.max.y - arena.height;
        composite.v.y = -composite.v.y;
    }

    for body in bodies.iter_mut() {
        body.x = composite.member_position(body.id);
        body.v = composite.v;
    }
}
