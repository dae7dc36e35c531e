pub mod states;
pub mod vector;
pub mod params;
pub mod engine;
pub mod integrator;
pub mod collision;
pub mod launch;
pub mod spawn;
pub mod diagnostics;
pub mod scenario;
