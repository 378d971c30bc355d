use twostar::{ScenarioConfig, Scenario};
use twostar::{run_2d, run_headless};
use twostar::{bench_gravity, bench_ticks};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "twostar", about = "Gravitating stars with glow and trails")]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "two_star.yaml")]
    file_name: String,

    /// Run without a window and log the final state
    #[arg(long)]
    headless: bool,

    /// Ticks to run in headless mode (overrides the scenario)
    #[arg(long)]
    ticks: Option<u64>,

    /// Run the tick benchmarks instead of a scenario
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

    info!("loaded scenario {}", config_path.display());
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_ticks();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.headless || scenario.engine.headless {
        let ticks = args.ticks.unwrap_or(scenario.engine.ticks);
        run_headless(&mut scenario, ticks);
    } else {
        run_2d(scenario);
    }

    Ok(())
}
