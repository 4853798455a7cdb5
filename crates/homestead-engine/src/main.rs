//! Headless engine binary for the Homestead simulation.
//!
//! Loads configuration, builds the initial economy, and runs the simulation
//! for `run.max_ticks` steps, submitting scripted commands along the way and
//! logging JSON snapshots.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `homestead-config.yaml` (or the path given as
//!    the first argument)
//! 2. Initialize structured logging (tracing)
//! 3. Build the economy and the driver, seeding the recurring events
//! 4. Run the scripted loop
//! 5. Log the final snapshot

mod error;
mod script;

use std::path::Path;

use homestead_core::{LoggingConfig, Simulation, SimulationConfig};
use homestead_economy::EconomySnapshot;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::script::Script;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "homestead-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration loading, logging setup, or snapshot
/// serialization fails.
fn main() -> Result<(), EngineError> {
    // 1. Load configuration.
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());
    let (config, from_file) = load_config(Path::new(&path))?;

    // 2. Initialize structured logging.
    init_logging(&config.logging)?;
    info!("homestead-engine starting");
    if from_file {
        info!(path = %path, "Configuration loaded");
    } else {
        info!(path = %path, "Config file not found, using defaults");
    }
    info!(
        world_name = %config.world.name,
        seed = config.world.seed,
        max_ticks = config.run.max_ticks,
        scripted_commands = config.run.script.len(),
        "Run parameters"
    );

    // 3. Build the driver.
    let mut sim = Simulation::new(config.economy(), config.world.seed);
    let mut script = Script::new(config.run.script.clone());

    // 4. Run.
    let interval = config.logging.snapshot_interval_ticks;
    for tick in 0..config.run.max_ticks {
        for entry in script.due(tick) {
            match sim.submit_tagged(&entry.command, entry.arg.as_deref()) {
                Ok(()) => info!(tick, command = %entry.command, arg = ?entry.arg, "Command admitted"),
                Err(err) => warn!(
                    tick,
                    command = %entry.command,
                    arg = ?entry.arg,
                    reason = %err,
                    "Command rejected"
                ),
            }
        }
        let now = sim.step();
        if now.checked_rem(interval) == Some(0) {
            log_snapshot(now, &sim.snapshot())?;
        }
    }
    if script.remaining() > 0 {
        warn!(
            skipped = script.remaining(),
            "Scripted commands scheduled after the last tick were not submitted"
        );
    }

    // 5. Final state.
    let snapshot = sim.snapshot();
    log_snapshot(snapshot.current_time, &snapshot)?;
    info!(
        ticks = snapshot.current_time,
        food = snapshot.food_count,
        gold = snapshot.gold_count,
        population = snapshot.population_count,
        "Simulation complete"
    );
    Ok(())
}

/// Load the simulation configuration, falling back to defaults when the
/// file does not exist. The flag reports whether the file was read.
fn load_config(path: &Path) -> Result<(SimulationConfig, bool), EngineError> {
    if path.exists() {
        let config = SimulationConfig::from_file(path)?;
        Ok((config, true))
    } else {
        Ok((SimulationConfig::default(), false))
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
fn init_logging(logging: &LoggingConfig) -> Result<(), EngineError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    let installed = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| EngineError::Logging {
        message: err.to_string(),
    })
}

fn log_snapshot(tick: u64, snapshot: &EconomySnapshot) -> Result<(), EngineError> {
    let json = serde_json::to_string(snapshot)?;
    info!(tick, snapshot = %json, "Snapshot");
    Ok(())
}
