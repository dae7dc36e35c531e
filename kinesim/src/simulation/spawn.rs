//! Respawn both bodies at rest in the middle of the arena
//!
//! Positions are uniform in the central half of each axis. Body B is
//! re-sampled until it no longer overlaps body A.

use bevy::log::{info, warn};
use rand::Rng;

use super::collision::overlap_aabb;
use super::engine::Arena;
use super::params::Parameters;
use super::states::{Mode, NVec2, System};

/// Upper bound on re-samples of body B before falling back to fixed corners
pub const MAX_SPAWN_ATTEMPTS: usize = 10_000;

/// Central region `[0.25, 0.75]` of the arena on each axis, as (min, max)
pub fn central_region(arena: &Arena) -> (NVec2, NVec2) {
    (
        NVec2::new(arena.width * 0.25, arena.height * 0.25),
        NVec2::new(arena.width * 0.75, arena.height * 0.75),
    )
}

fn sample<R: Rng + ?Sized>(rng: &mut R, min: &NVec2, max: &NVec2) -> NVec2 {
    NVec2::new(rng.gen_range(min.x..=max.x), rng.gen_range(min.y..=max.y))
}

/// Put both bodies back at rest at fresh random positions and unlock the system
pub fn respawn<R: Rng + ?Sized>(sys: &mut System, arena: &Arena, params: &Parameters, rng: &mut R) {
    let (min, max) = central_region(arena);

    for body in sys.bodies.iter_mut() {
        body.v = NVec2::zeros();
        body.m = params.mass(body.id);
    }
    sys.mode = Mode::Unlocked;
    sys.t = 0.0;

    sys.bodies[0].x = sample(rng, &min, &max);
    sys.bodies[1].x = sample(rng, &min, &max);

    let mut attempts = 0;
    while overlap_aabb(&sys.bodies[0], &sys.bodies[1]) {
        if attempts == MAX_SPAWN_ATTEMPTS {
            warn!("central region too small to separate the bodies, using its corners");
            sys.bodies[0].x = min;
            sys.bodies[1].x = max;
            break;
        }
        sys.bodies[1].x = sample(rng, &min, &max);
        attempts += 1;
    }

    info!(
        "respawned bodies at ({:.1}, {:.1}) and ({:.1}, {:.1})",
        sys.bodies[0].x.x, sys.bodies[0].x.y, sys.bodies[1].x.x, sys.bodies[1].x.y
    );
}
