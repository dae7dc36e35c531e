//! Readouts for the sidebar
//!
//! All velocities here use the readout convention (y up), converted once via
//! [`to_display`]. Core state keeps the arena orientation.

use super::states::{Body, CollisionRecord, NVec2};
use super::vector::{magnitude, to_display};

#[derive(Debug, Clone, PartialEq)]
pub struct BodyReadout {
    pub label: String,
    pub mass: f64, // kg
    pub velocity: NVec2, // m/s, y up
    pub speed: f64, // m/s
    pub kinetic_energy: f64, // J
}

impl BodyReadout {
    pub fn from_body(body: &Body) -> Self {
        Self {
            label: body.label.clone(),
            mass: body.m,
            velocity: to_display(&body.v),
            speed: magnitude(&body.v),
            kinetic_energy: body.kinetic_energy(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollisionReadout {
    pub ke_before: f64,
    pub ke_after: f64,
    pub lost: f64,
    pub velocity: NVec2, // m/s, y up
    pub t: f64,
}

impl CollisionReadout {
    pub fn from_record(record: &CollisionRecord) -> Self {
        Self {
            ke_before: record.ke_before,
            ke_after: record.ke_after,
            lost: record.lost,
            velocity: to_display(&record.v),
            t: record.t,
        }
    }
}

impl std::fmt::Display for BodyReadout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Square {}", self.label)?;
        writeln!(f, "  m = {:.2} kg", self.mass)?;
        writeln!(
            f,
            "  v = ({:.2}, {:.2}) m/s  |v| = {:.2}",
            self.velocity.x, self.velocity.y, self.speed
        )?;
        write!(f, "  KE = {:.2} J", self.kinetic_energy)
    }
}

impl std::fmt::Display for CollisionReadout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "KE before = {:.2} J", self.ke_before)?;
        writeln!(f, "KE after  = {:.2} J", self.ke_after)?;
        writeln!(f, "Energy lost to heat = {:.2} J", self.lost)?;
        write!(f, "Velocity after collision = ({:.2}, {:.2}) m/s", self.velocity.x, self.velocity.y)
    }
}
