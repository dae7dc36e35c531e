//! Core state types for the two-body simulation.
//!
//! - `Body`           one square, position in arena pixels, velocity in m/s
//! - `CompositeBody`  the rigid pair that exists after the collision
//! - `Mode`           unlocked (independent bodies) or locked (composite)
//! - `System`         both bodies, the mode and the simulated time `t`
//! - `CollisionRecord` / `DragState` diagnostics and transient input state

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

use super::vector::difference;

/// Identifier of one of the two bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyId {
    A,
    B,
}

impl BodyId {
    pub const ALL: [BodyId; 2] = [BodyId::A, BodyId::B];

    pub fn index(self) -> usize {
        match self {
            BodyId::A => 0,
            BodyId::B => 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub x: NVec2, // position, arena pixels
    pub v: NVec2, // velocity, m/s
    pub m: f64, // mass, kg
    pub half_extent: f64, // half side length, pixels
    pub label: String,
    pub color: [f32; 3],
}

impl Body {
    /// `0.5 m |v|^2`
    pub fn kinetic_energy(&self) -> f64 {
        kinetic_energy(self.m, &self.v)
    }

    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    /// Hit test used when a drag starts, edges count as inside
    pub fn contains(&self, p: &NVec2) -> bool {
        (p.x - self.x.x).abs() <= self.half_extent && (p.y - self.x.y).abs() <= self.half_extent
    }
}

/// Kinetic energy of mass `m` moving at `v`
pub fn kinetic_energy(m: f64, v: &NVec2) -> f64 {
    0.5 * m * v.norm_squared()
}

/// The merged pair after the inelastic collision
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeBody {
    pub x: NVec2, // center of mass, arena pixels
    pub v: NVec2, // shared velocity, m/s
    pub total_mass: f64,
    pub offsets: [NVec2; 2], // member position minus center of mass, fixed at merge
}

impl CompositeBody {
    pub fn member_position(&self, id: BodyId) -> NVec2 {
        self.x + self.offsets[id.index()]
    }

    pub fn kinetic_energy(&self) -> f64 {
        kinetic_energy(self.total_mass, &self.v)
    }
}

/// Unlocked: both bodies move on their own. Locked: they ride the composite.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Mode {
    #[default]
    Unlocked,
    Locked(CompositeBody),
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: [Body; 2],
    pub mode: Mode,
    pub t: f64, // simulated time since the last reset
}

impl System {
    pub fn body(&self, id: BodyId) -> &Body {
        &self.bodies[id.index()]
    }

    pub fn body_mut(&mut self, id: BodyId) -> &mut Body {
        &mut self.bodies[id.index()]
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.mode, Mode::Locked(_))
    }

    pub fn composite(&self) -> Option<&CompositeBody> {
        match &self.mode {
            Mode::Locked(c) => Some(c),
            Mode::Unlocked => None,
        }
    }
}

/// Snapshot of the most recent collision
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionRecord {
    pub ke_before: f64, // J
    pub ke_after: f64,  // J
    pub lost: f64,      // J, never negative
    pub v: NVec2,       // composite velocity right after the merge, m/s
    pub t: f64,         // simulated time of the merge
}

/// Pointer drag in progress on an unlocked body
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub id: BodyId,
    pub start: NVec2,
    pub current: NVec2,
}

impl DragState {
    /// Drag vector, current point minus start point
    pub fn pull(&self) -> NVec2 {
        difference(&self.start, &self.current)
    }
}
