//! Day clock, configuration, and simulation runner for the Carcel de los
//! Gemelos simulation.
//!
//! This crate sequences the pure rules from `carcel-rules` into a full run:
//! spawn the cast, play each day (day effects, then the scheduled events for
//! that day), show the standings, and resolve the duo dilemma.
//!
//! # Modules
//!
//! - [`cast`] -- The ordered set of players and name lookups
//! - [`clock`] -- Day counter bounded by the configured season length
//! - [`config`] -- YAML configuration ([`SimulationConfig`])
//! - [`day`] -- One simulated day ([`run_day`]) and the mutable [`SimulationState`]
//! - [`runner`] -- Whole-run orchestration ([`run_simulation`])

pub mod cast;
pub mod clock;
pub mod config;
pub mod day;
pub mod runner;

pub use cast::{Cast, CastError};
pub use clock::{ClockError, DayClock};
pub use config::{ConfigError, NarrationFormat, ScheduledEvent, SimulationConfig};
pub use day::{DayError, DaySummary, PrivacyBreach, SimulationState, run_day};
pub use runner::{
    RunnerError, SimulationResult, build_state, log_simulation_end, run_simulation, simulate,
};
