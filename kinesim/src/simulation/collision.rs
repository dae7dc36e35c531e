//! Contact detection and perfectly inelastic resolution for the two bodies
//!
//! Detection is a strict axis-aligned overlap test. Resolution conserves
//! momentum, books the kinetic energy lost and freezes the pair into a
//! [`CompositeBody`] with fixed offsets. It only ever happens once per run.

use bevy::log::info;

use super::states::{kinetic_energy, Body, CollisionRecord, CompositeBody, Mode, System};

/// True when the two square footprints overlap strictly on both axes
pub fn overlap_aabb(a: &Body, b: &Body) -> bool {
    let reach = a.half_extent + b.half_extent;
    (a.x.x - b.x.x).abs() < reach && (a.x.y - b.x.y).abs() < reach
}

/// Merge the two bodies into one rigid composite.
///
/// Returns the new [`CollisionRecord`], or `None` if the system is already
/// locked, in which case nothing is changed.
pub fn resolve_inelastic(sys: &mut System) -> Option<CollisionRecord> {
    if sys.is_locked() {
        return None;
    }

    let [a, b] = &sys.bodies;
    let ke_before = a.kinetic_energy() + b.kinetic_energy();
    let total_mass = a.m + b.m;

    // Momentum conservation: (mA vA + mB vB) / (mA + mB)
    let v = (a.momentum() + b.momentum()) / total_mass;
    let ke_after = kinetic_energy(total_mass, &v);
    // float noise can push this slightly below zero
    let lost = (ke_before - ke_after).max(0.0);

    let com = (a.m * a.x + b.m * b.x) / total_mass;
    let offsets = [a.x - com, b.x - com];

    let record = CollisionRecord { ke_before, ke_after, lost, v, t: sys.t };

    info!(
        "inelastic collision at t = {:.3}s: KE {:.3} J -> {:.3} J, {:.3} J lost",
        sys.t, ke_before, ke_after, lost
    );

    for body in sys.bodies.iter_mut() {
        body.v = v;
    }
    sys.mode = Mode::Locked(CompositeBody { x: com, v, total_mass, offsets });

    Some(record)
}
