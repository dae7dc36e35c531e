//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! collision scenario. A scenario consists of:
//!
//! - [`ArenaConfig`]      – size of the playfield in pixels
//! - [`ParametersConfig`] – time step, scales, drag limits and the RNG seed
//! - [`BodyConfig`]       – mass, footprint and look of each of the two bodies
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! arena:
//!   width: 960.0
//!   height: 640.0
//!
//! parameters:
//!   unit_scale: 110.0      # pixels per meter
//!   base_dt: 0.01          # fixed step per frame
//!   time_scale: 1.0        # multiplier on base_dt
//!   power_scale: 4.0       # drag pixels -> launch speed gain
//!   max_drag: 220.0        # pull saturates here
//!   drag_deadzone: 2.0     # pulls at or below this are clicks
//!   min_mass: 0.1          # lower bound for mass edits
//!   seed: 42               # optional, deterministic respawns
//!
//! bodies:
//!   - label: "A"
//!     mass: 1.5
//!     half_extent: 32.0
//!     color: [0.0, 0.0, 0.0]
//!   - label: "B"
//!     mass: 2.5
//!     half_extent: 32.0
//!     color: [0.0, 0.0, 0.0]
//! ```
//!
//! Every field of `parameters` may be omitted and falls back to its default.
//! Body positions are not configurable: they are drawn at random on every reset.

use serde::Deserialize;

/// Playfield size, in pixels
#[derive(Deserialize, Debug, Clone)]
pub struct ArenaConfig {
    pub width: f64,  // arena width in pixels
    pub height: f64, // arena height in pixels
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self { width: 960.0, height: 640.0 }
    }
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub unit_scale: f64,    // pixels per meter
    pub base_dt: f64,       // fixed time step per frame, seconds
    pub time_scale: f64,    // simulation speed multiplier applied to base_dt
    pub power_scale: f64,   // gain from drag pixels to launch speed
    pub max_drag: f64,      // drag distance cap, pixels
    pub drag_deadzone: f64, // drags at or below this distance do not launch, pixels
    pub min_mass: f64,      // smallest accepted mass, kg
    pub seed: Option<u64>,  // deterministic seed to make respawns reproducable
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            unit_scale: 110.0,
            base_dt: 0.01,
            time_scale: 1.0,
            power_scale: 4.0,
            max_drag: 220.0,
            drag_deadzone: 2.0,
            min_mass: 0.1,
            seed: None,
        }
    }
}

/// Configuration for a single body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub label: String,     // text drawn on the square
    pub mass: f64,         // initial mass in kg
    pub half_extent: f64,  // half side length of the square, pixels
    #[serde(default)]
    pub color: [f32; 3],   // sRGB fill color
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub arena: ArenaConfig, // playfield size
    #[serde(default)]
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // exactly two bodies, A then B
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            parameters: ParametersConfig::default(),
            bodies: vec![
                BodyConfig { label: "A".into(), mass: 1.5, half_extent: 32.0, color: [0.0; 3] },
                BodyConfig { label: "B".into(), mass: 2.5, half_extent: 32.0, color: [0.0; 3] },
            ],
        }
    }
}
