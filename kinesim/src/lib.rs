pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyId, CollisionRecord, CompositeBody, DragState, Mode, NVec2, System};
pub use simulation::engine::{step, Arena};
pub use simulation::params::Parameters;
pub use simulation::launch::LaunchPreview;
pub use simulation::diagnostics::{BodyReadout, CollisionReadout};
pub use simulation::scenario::{MassEdit, Scenario};

pub use configuration::config::{ArenaConfig, BodyConfig, ParametersConfig, ScenarioConfig};

pub use visualization::kinesim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_tick, bench_locked_tick};
