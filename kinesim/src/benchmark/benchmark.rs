use std::time::Instant;

use anyhow::{ensure, Result};

use crate::configuration::config::ScenarioConfig;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

/// Helper to build a scenario with both bodies already launched,
/// B is aimed away from A so the pair stays unlocked for a while
fn make_launched(cfg: &ScenarioConfig) -> Result<Scenario> {
    let mut scenario = Scenario::build_scenario(cfg.clone())?;
    scenario.system.bodies[0].v = NVec2::new(3.1, -1.7);
    scenario.system.bodies[1].v = NVec2::new(-2.3, 2.9);
    Ok(scenario)
}

/// Helper to build a scenario that is already locked into a composite
fn make_locked(cfg: &ScenarioConfig) -> Result<Scenario> {
    let mut scenario = make_launched(cfg)?;
    let center = NVec2::new(scenario.arena.width * 0.5, scenario.arena.height * 0.5);
    let reach = scenario.system.bodies[0].half_extent;
    scenario.system.bodies[0].x = center - NVec2::new(reach * 0.5, 0.0);
    scenario.system.bodies[1].x = center + NVec2::new(reach * 0.5, 0.0);
    scenario.tick();
    ensure!(scenario.is_locked(), "overlapping bodies did not merge");
    Ok(scenario)
}

/// Time free-flight ticks (integration, wall bounces and the overlap test)
/// for growing frame counts
pub fn bench_tick(cfg: &ScenarioConfig) -> Result<()> {
    let frames = [1_000, 10_000, 100_000, 1_000_000];

    for n in frames {
        let mut scenario = make_launched(cfg)?;

        // Warm up
        scenario.tick();

        let t0 = Instant::now();
        let mut merged_at = None;
        for i in 0..n {
            if scenario.tick().is_some() {
                merged_at = Some(i);
            }
        }
        let per_tick = t0.elapsed().as_secs_f64() / n as f64;

        match merged_at {
            Some(i) => println!("frames = {n:8}, tick = {:10.3} ns, merged at frame {i}", per_tick * 1e9),
            None => println!("frames = {n:8}, tick = {:10.3} ns", per_tick * 1e9),
        }
    }

    Ok(())
}

/// Time composite ticks (rigid pair integration and union-box bounces)
pub fn bench_locked_tick(cfg: &ScenarioConfig) -> Result<()> {
    let frames = [1_000, 10_000, 100_000, 1_000_000];

    for n in frames {
        let mut scenario = make_locked(cfg)?;

        let t0 = Instant::now();
        for _ in 0..n {
            scenario.tick();
        }
        let per_tick = t0.elapsed().as_secs_f64() / n as f64;

        println!("locked frames = {n:8}, tick = {:10.3} ns", per_tick * 1e9);
    }

    Ok(())
}
