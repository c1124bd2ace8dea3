//! Engine binary for the Carcel de los Gemelos simulation.
//!
//! Loads configuration, picks a seed, plays the season and the duo dilemma,
//! and narrates everything on stdout. Logs go to stderr.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `$CARCEL_CONFIG` or `carcel-config.yaml`
//! 3. Apply environment overrides (`CARCEL_SEED`)
//! 4. Choose the seed, drawing a fresh one if none is configured
//! 5. Run the simulation with stdout narration
//! 6. Log the result

mod error;
mod narrator;

use std::path::PathBuf;

use carcel_core::{SimulationConfig, runner};
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::narrator::StreamNarrator;

/// Environment variable selecting the configuration file.
const CONFIG_ENV: &str = "CARCEL_CONFIG";

/// Configuration file read when `CARCEL_CONFIG` is unset.
const DEFAULT_CONFIG_PATH: &str = "carcel-config.yaml";

/// Environment variable switching log output to JSON when set to `json`.
const LOG_FORMAT_ENV: &str = "CARCEL_LOG_FORMAT";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration loading, the run, or narration output
/// fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    init_logging();
    info!("carcel-engine starting");

    // 2. Load configuration.
    let mut config = load_config()?;

    // 3. Apply environment overrides.
    config.apply_env_overrides().map_err(EngineError::from)?;
    info!(
        title = config.game.name,
        days = config.game.days,
        players = config.roster.len(),
        scheduled_events = config.schedule.len(),
        format = ?config.narration.format,
        "Configuration loaded"
    );

    // 4. Choose the seed.
    let seed = match config.game.seed {
        Some(seed) => {
            info!(seed, "Using configured seed");
            seed
        }
        None => {
            let seed: u64 = rand::rng().random();
            info!(seed, "No seed configured, drew a fresh one");
            seed
        }
    };

    // 5. Run the simulation.
    let stdout = std::io::stdout().lock();
    let mut narrator = StreamNarrator::new(stdout, config.narration.format);
    let result = runner::simulate(&config, seed, &mut narrator).map_err(EngineError::from)?;
    let lines = narrator.lines();
    narrator.finish()?;

    // 6. Log the result.
    runner::log_simulation_end(&result);
    info!(lines, "carcel-engine finished");

    Ok(())
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` controls the filter (default `info`). Setting
/// `CARCEL_LOG_FORMAT=json` switches to JSON log lines.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Load configuration from the path named by `CARCEL_CONFIG`, falling back
/// to `carcel-config.yaml`.
///
/// A missing default file yields the built-in defaults; a missing file named
/// explicitly is an error.
fn load_config() -> Result<SimulationConfig, EngineError> {
    let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let path = explicit
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    if explicit.is_some() || path.exists() {
        let config = SimulationConfig::from_file(&path)?;
        info!(path = %path.display(), "Config file loaded");
        Ok(config)
    } else {
        info!("Config file not found, using defaults");
        Ok(SimulationConfig::default())
    }
}
