//! Dhwani - sonar mapping with reactive obstacle avoidance.
//!
//! Drives the simulated sonar robot through the control loop until Ctrl-C
//! or the cycle budget, then writes the occupancy map.
//!
//! ```bash
//! dhwani --config configs/dhwani.toml --cycles 5000 --output robot_map.dat
//! RUST_LOG=debug dhwani --seed 7
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dhwani_nav::{ControlLoop, NavConfig, Result, SimulatedRobot, StopSignal};

#[derive(Parser, Debug)]
#[command(name = "dhwani")]
#[command(about = "Fuzzy sonar mapping with reactive obstacle avoidance")]
struct Args {
    /// Configuration file (defaults used if missing)
    #[arg(short, long, default_value = "configs/dhwani.toml")]
    config: PathBuf,

    /// Map output path (overrides [output] map_path)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Cycle budget, 0 runs until Ctrl-C (overrides [control] max_cycles)
    #[arg(long)]
    cycles: Option<u64>,

    /// Simulation seed, 0 for entropy (overrides [simulation] seed)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = match NavConfig::load_or_default(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {}: {}", args.config.display(), e);
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    if let Some(output) = &args.output {
        config.output.map_path = output.display().to_string();
    }
    if let Some(cycles) = args.cycles {
        config.control.max_cycles = cycles;
    }
    if let Some(seed) = args.seed {
        config.simulation.seed = seed;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &NavConfig) -> Result<()> {
    config.validate()?;
    log::info!("Dhwani v{} starting", env!("CARGO_PKG_VERSION"));

    let stop = StopSignal::install_ctrl_c()?;
    let robot = SimulatedRobot::new(&config.simulation)?;

    let mut control = ControlLoop::new(config, robot)?
        .with_export(&config.output.map_path, config.output.field_width);
    let summary = control.run(&stop)?;

    let robot = control.robot();
    log::info!(
        "Run complete: {} cycles ({:?}), {} samples mapped, {} skipped, {} votes dropped",
        summary.cycles,
        summary.stop_reason,
        summary.samples_used,
        summary.beams_skipped,
        summary.merge.votes_dropped
    );
    log::info!(
        "Map: {} occupied of {} touched cells; robot blocked {} of {} steps",
        summary.coverage.occupied_cells,
        summary.coverage.touched_cells,
        robot.collisions(),
        robot.steps()
    );
    if summary.actuator_failures > 0 {
        log::warn!("{} actuator commands failed", summary.actuator_failures);
    }
    if let Some(e) = summary.export_error {
        log::error!("Map was composed but not written to {}", config.output.map_path);
        return Err(e.into());
    }
    Ok(())
}
