//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! `Scenario`, which owns everything that changes while the app runs:
//! - arena size (`Arena`)
//! - numerical parameters (`Parameters`)
//! - system state (`System`, both bodies plus the unlocked/locked mode)
//! - the drag in progress, the last collision record and the respawn RNG
//!
//! The scenario is inserted into Bevy as a `Resource`. Input, tick and render
//! systems only touch simulation state through it.

use anyhow::{ensure, Result};
use bevy::log::{debug, info};
use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::diagnostics::{BodyReadout, CollisionReadout};
use crate::simulation::engine::{step, Arena};
use crate::simulation::launch::{launch_velocity, preview, LaunchPreview};
use crate::simulation::params::{parse_number, Parameters};
use crate::simulation::spawn::respawn;
use crate::simulation::states::{Body, BodyId, CollisionRecord, DragState, Mode, NVec2, System};

/// Outcome of a mass edit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MassEdit {
    /// Unlocked: the body now has this mass
    Applied(f64),
    /// Locked: stored for the next reset, the composite is unchanged
    Deferred(f64),
}

/// Bevy resource representing a fully-initialized two-body scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the arena, the parameters, the current system state and the
/// transient interaction state (drag, last collision)
///
/// In Bevy terms, this is inserted as a `Resource` and then read by systems
/// responsible for input, integration, rendering and the sidebar
#[derive(Resource)]
pub struct Scenario {
    pub arena: Arena,
    pub parameters: Parameters,
    pub system: System,
    drag: Option<DragState>,
    last_collision: Option<CollisionRecord>,
    rng: StdRng,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        ensure!(cfg.bodies.len() == 2, "a scenario needs exactly two bodies, got {}", cfg.bodies.len());
        ensure!(
            cfg.arena.width > 0.0 && cfg.arena.height > 0.0,
            "arena must have a positive size, got {} x {}",
            cfg.arena.width,
            cfg.arena.height
        );
        let p_cfg = cfg.parameters;
        ensure!(p_cfg.unit_scale > 0.0, "unit_scale must be positive");
        ensure!(p_cfg.base_dt > 0.0, "base_dt must be positive");
        ensure!(p_cfg.power_scale > 0.0, "power_scale must be positive");
        ensure!(p_cfg.max_drag > p_cfg.drag_deadzone, "max_drag must exceed drag_deadzone");
        ensure!(p_cfg.min_mass > 0.0, "min_mass must be positive");
        for bc in &cfg.bodies {
            ensure!(bc.half_extent > 0.0, "body {} needs a positive half_extent", bc.label);
        }

        // Parameters (runtime) from ParametersConfig, masses are coerced like user edits
        let mut parameters = Parameters {
            unit_scale: p_cfg.unit_scale,
            base_dt: p_cfg.base_dt,
            time_scale: Parameters::coerce_time_scale(p_cfg.time_scale),
            power_scale: p_cfg.power_scale,
            max_drag: p_cfg.max_drag,
            drag_deadzone: p_cfg.drag_deadzone,
            min_mass: p_cfg.min_mass,
            masses: [0.0; 2],
            paused: false,
            seed: p_cfg.seed,
        };
        parameters.masses = [
            parameters.coerce_mass(cfg.bodies[0].mass),
            parameters.coerce_mass(cfg.bodies[1].mass),
        ];

        // Bodies: map `BodyConfig` -> runtime `Body`, positions come from the first respawn
        let body = |id: BodyId, bc: &BodyConfig| Body {
            id,
            x: NVec2::zeros(),
            v: NVec2::zeros(),
            m: parameters.mass(id),
            half_extent: bc.half_extent,
            label: bc.label.clone(),
            color: bc.color,
        };
        let system = System {
            bodies: [body(BodyId::A, &cfg.bodies[0]), body(BodyId::B, &cfg.bodies[1])],
            mode: Mode::Unlocked,
            t: 0.0,
        };

        let rng = match parameters.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut scenario = Self {
            arena: Arena { width: cfg.arena.width, height: cfg.arena.height },
            parameters,
            system,
            drag: None,
            last_collision: None,
            rng,
        };
        scenario.reset();
        Ok(scenario)
    }

    /// Advance one frame: `base_dt * time_scale` of simulated time, unless paused.
    /// Returns the record of a collision that happened during this frame.
    pub fn tick(&mut self) -> Option<CollisionRecord> {
        if self.parameters.paused {
            return None;
        }
        let dt = self.parameters.effective_dt();
        let record = step(&mut self.system, &self.arena, &self.parameters, dt)?;
        // locked bodies can no longer be launched
        self.drag = None;
        self.last_collision = Some(record.clone());
        Some(record)
    }

    // ---------------------------------------------------------------------
    // input
    // ---------------------------------------------------------------------

    /// Start a drag on the body under `point`, body A wins ties
    pub fn begin_drag(&mut self, point: NVec2) -> Option<BodyId> {
        if self.system.is_locked() {
            return None;
        }
        let id = self.system.bodies.iter().find(|b| b.contains(&point))?.id;
        self.drag = Some(DragState { id, start: point, current: point });
        Some(id)
    }

    pub fn update_drag(&mut self, point: NVec2) {
        if let Some(drag) = self.drag.as_mut() {
            drag.current = point;
        }
    }

    /// Release the drag and launch the body. Returns the new velocity, if any.
    pub fn end_drag(&mut self) -> Option<NVec2> {
        let drag = self.drag.take()?;
        if self.system.is_locked() {
            return None;
        }
        let v = launch_velocity(&drag.pull(), &self.parameters)?;
        let body = self.system.body_mut(drag.id);
        body.v = v;
        debug!("launched {} at ({:.2}, {:.2}) m/s", body.label, v.x, v.y);
        Some(v)
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Drag indicator for the body currently being dragged
    pub fn drag_preview(&self) -> Option<LaunchPreview> {
        let drag = self.drag.as_ref()?;
        Some(preview(&self.system.body(drag.id).x, &drag.pull(), &self.parameters))
    }

    // ---------------------------------------------------------------------
    // parameters and controls
    // ---------------------------------------------------------------------

    pub fn set_mass(&mut self, id: BodyId, raw: f64) -> MassEdit {
        let m = self.parameters.coerce_mass(raw);
        self.parameters.masses[id.index()] = m;
        if self.system.is_locked() {
            return MassEdit::Deferred(m);
        }
        self.system.body_mut(id).m = m;
        MassEdit::Applied(m)
    }

    /// Mass edit from a text field, non-numeric input is coerced
    pub fn set_mass_text(&mut self, id: BodyId, text: &str) -> MassEdit {
        self.set_mass(id, parse_number(text))
    }

    pub fn set_time_scale(&mut self, raw: f64) -> f64 {
        self.parameters.time_scale = Parameters::coerce_time_scale(raw);
        self.parameters.time_scale
    }

    pub fn set_time_scale_text(&mut self, text: &str) -> f64 {
        self.set_time_scale(parse_number(text))
    }

    /// Respawn both bodies and forget the collision
    pub fn reset(&mut self) {
        respawn(&mut self.system, &self.arena, &self.parameters, &mut self.rng);
        self.drag = None;
        self.last_collision = None;
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.parameters.paused = !self.parameters.paused;
        info!("simulation {}", if self.parameters.paused { "paused" } else { "resumed" });
        self.parameters.paused
    }

    /// New playfield size, bodies outside it are pushed back on the next tick
    pub fn resize_arena(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.arena = Arena { width, height };
        }
    }

    // ---------------------------------------------------------------------
    // diagnostics
    // ---------------------------------------------------------------------

    pub fn bodies(&self) -> &[Body; 2] {
        &self.system.bodies
    }

    pub fn body(&self, id: BodyId) -> &Body {
        self.system.body(id)
    }

    pub fn is_locked(&self) -> bool {
        self.system.is_locked()
    }

    pub fn is_paused(&self) -> bool {
        self.parameters.paused
    }

    pub fn time_scale(&self) -> f64 {
        self.parameters.time_scale
    }

    pub fn last_collision(&self) -> Option<&CollisionRecord> {
        self.last_collision.as_ref()
    }

    pub fn collision_readout(&self) -> Option<CollisionReadout> {
        self.last_collision.as_ref().map(CollisionReadout::from_record)
    }

    pub fn body_readout(&self, id: BodyId) -> BodyReadout {
        BodyReadout::from_body(self.system.body(id))
    }

    /// Total momentum in kg m/s, arena orientation
    pub fn total_momentum(&self) -> NVec2 {
        match &self.system.mode {
            Mode::Unlocked => self.system.bodies.iter().map(Body::momentum).sum(),
            Mode::Locked(c) => c.total_mass * c.v,
        }
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        match &self.system.mode {
            Mode::Unlocked => self.system.bodies.iter().map(Body::kinetic_energy).sum(),
            Mode::Locked(c) => c.kinetic_energy(),
        }
    }
}
