//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed step size and the user speed multiplier,
//! - distance and launch scaling, drag cap and deadzone,
//! - configured masses and the mass floor,
//! - pause flag and optional random seed

use super::states::BodyId;

/// Mass used when an edit is not a usable number
pub const FALLBACK_MASS: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub unit_scale: f64, // pixels per meter
    pub base_dt: f64, // fixed step size per frame
    pub time_scale: f64, // speed multiplier on base_dt
    pub power_scale: f64, // drag pixels -> launch speed
    pub max_drag: f64, // drag cap, pixels
    pub drag_deadzone: f64, // no launch at or below this pull, pixels
    pub min_mass: f64, // mass floor, kg
    pub masses: [f64; 2], // configured masses, applied on reset
    pub paused: bool,
    pub seed: Option<u64>, // deterministic seed
}

impl Parameters {
    /// Simulated time advanced by one tick
    pub fn effective_dt(&self) -> f64 {
        self.base_dt * self.time_scale
    }

    pub fn mass(&self, id: BodyId) -> f64 {
        self.masses[id.index()]
    }

    /// Normalize a user supplied mass: unusable or zero input becomes
    /// [`FALLBACK_MASS`], then everything is floored at `min_mass`
    pub fn coerce_mass(&self, raw: f64) -> f64 {
        let m = if !raw.is_finite() || raw == 0.0 { FALLBACK_MASS } else { raw };
        m.max(self.min_mass)
    }

    /// Speed multipliers that are not finite and positive reset to 1
    pub fn coerce_time_scale(raw: f64) -> f64 {
        if raw.is_finite() && raw > 0.0 { raw } else { 1.0 }
    }
}

/// Parse numeric text from an input field, NaN when it is not a number
pub fn parse_number(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}
