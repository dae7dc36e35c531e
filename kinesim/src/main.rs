use kinesim::{ScenarioConfig, Scenario};
use kinesim::run_2d;
use kinesim::{bench_tick, bench_locked_tick};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Seed for respawn positions, overrides the scenario file
    #[arg(long)]
    seed: Option<u64>,

    /// Time the tick loop instead of opening the viewer
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if args.seed.is_some() {
        scenario_cfg.parameters.seed = args.seed;
    }

    if args.bench {
        bench_tick(&scenario_cfg)?;
        bench_locked_tick(&scenario_cfg)?;
        return Ok(());
    }

    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;
    run_2d(scenario);

    Ok(())
}
