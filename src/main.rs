use orbitsim::{ScenarioConfig, Scenario, Simulator, DAY};
use orbitsim::run_2d;
use orbitsim::{bench_step, bench_trajectory_growth};

use anyhow::{bail, Context, Result};
use bevy::app::AppExit;
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Real-time gravitational simulation of a star and its planets")]
struct Args {
    /// Scenario YAML; the built-in solar system when omitted
    #[arg(short, long)]
    file_name: Option<PathBuf>,

    /// Run STEPS steps without a window and log the distances
    #[arg(long, value_name = "STEPS")]
    headless: Option<u64>,

    /// Log every N steps in headless mode
    #[arg(long, default_value_t = 30)]
    report_every: u64,

    /// Time the integrator instead of simulating a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    match &args.file_name {
        Some(path) => ScenarioConfig::from_path(path)
            .with_context(|| format!("failed to load scenario {}", path.display())),
        None => ScenarioConfig::solar_system().context("built-in scenario is invalid"),
    }
}

fn report(sim: &Simulator) {
    let days = sim.time() / DAY;
    for b in sim.bodies().iter().filter(|b| !b.is_reference()) {
        info!(
            "day {:>7.1}  {:<10} {:>14.1} km from reference",
            days,
            b.name(),
            b.distance_to_reference() / 1000.0
        );
    }
}

fn run_headless(mut sim: Simulator, steps: u64, report_every: u64) -> Result<()> {
    let every = report_every.max(1);
    for _ in 0..steps {
        sim.step()
            .with_context(|| format!("step {} failed", sim.steps() + 1))?;
        if sim.steps() % every == 0 {
            report(&sim);
        }
    }
    if sim.steps() % every != 0 {
        report(&sim);
    }
    info!(
        "finished {} steps, {} trajectory points held",
        sim.steps(),
        sim.trajectory_points()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_step()?;
        bench_trajectory_growth()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario(&args)?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;
    info!("loaded scenario with {} bodies", scenario.simulator.len());

    if let Some(steps) = args.headless {
        return run_headless(scenario.simulator, steps, args.report_every);
    }

    match run_2d(scenario) {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("viewer exited with error code {code}"),
    }
}
