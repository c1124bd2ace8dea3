//! Whole-run orchestration.
//!
//! [`build_state`] turns a validated [`SimulationConfig`] and a seed into a
//! fresh [`SimulationState`]; [`run_simulation`] then drives it:
//!
//! - **Opening**: narrate the show title.
//! - **Season**: play [`run_day`] until the clock runs out.
//! - **Standings**: narrate every player's public summary.
//! - **Endgame**: resolve the duo dilemma between the configured duelists.
//!   The run ends here.
//!
//! [`run_day`]: crate::day::run_day

use carcel_rules::{DilemmaResult, Narrator, RuleError, run_duo_dilemma};
use carcel_types::{Narration, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::cast::{Cast, CastError};
use crate::clock::{ClockError, DayClock};
use crate::config::{ConfigError, SimulationConfig};
use crate::day::{self, DayError, SimulationState};

/// Errors that can occur during the simulation run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The configuration is invalid.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The season length is invalid.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },

    /// The cast could not be built or queried.
    #[error("cast error: {source}")]
    Cast {
        /// The underlying cast error.
        #[from]
        source: CastError,
    },

    /// A day failed.
    #[error("day error: {source}")]
    Day {
        /// The underlying day error.
        #[from]
        source: DayError,
    },

    /// The endgame failed.
    #[error("rule error: {source}")]
    Rule {
        /// The underlying rule error.
        #[from]
        source: RuleError,
    },
}

/// Result of a complete run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// Seed the run was played with.
    pub seed: u64,
    /// Number of days played.
    pub days_played: u32,
    /// Every player's final state, in roster order.
    pub standings: Vec<Player>,
    /// The duo dilemma.
    pub dilemma: DilemmaResult,
}

/// Validate the configuration and build the initial state for `seed`.
///
/// The generator is seeded first and the cast drawn from it, so the
/// spawn draws are part of the seeded sequence.
///
/// # Errors
///
/// Returns [`RunnerError::Config`] if validation fails and
/// [`RunnerError::Cast`] if the cast cannot be spawned.
pub fn build_state(config: &SimulationConfig, seed: u64) -> Result<SimulationState, RunnerError> {
    config.validate()?;

    let clock = DayClock::new(config.game.days)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let cast = Cast::spawn(&config.roster, &config.rules, &mut rng)?;

    Ok(SimulationState {
        title: config.game.name.clone(),
        seed,
        clock,
        cast,
        schedule: config.schedule.clone(),
        endgame: config.endgame.clone(),
        endgame_day: config.game.endgame_day,
        rules: config.rules.clone(),
        rng,
    })
}

/// Run the season and the endgame to completion.
///
/// # Errors
///
/// Returns [`RunnerError::Day`] if a day fails, [`RunnerError::Cast`] if a
/// duelist is missing or named twice, and [`RunnerError::Rule`] if the
/// endgame fails.
pub fn run_simulation(
    state: &mut SimulationState,
    narrator: &mut dyn Narrator,
) -> Result<SimulationResult, RunnerError> {
    info!(
        title = state.title,
        seed = state.seed,
        days = state.clock.days(),
        players = state.cast.len(),
        "Simulation starting"
    );
    narrator.narrate(Narration::Opening {
        title: state.title.clone(),
    });

    let mut days_played: u32 = 0;
    while !state.clock.is_finished() {
        let summary = day::run_day(state, narrator)?;
        days_played = days_played.saturating_add(1);
        debug!(
            day = summary.day,
            noise_drains = summary.noise_drains.len(),
            privacy_breaches = summary.privacy_breaches.len(),
            "Day complete"
        );
    }

    narrator.narrate(Narration::StandingsStarted {
        day: state.clock.day(),
    });
    for player in state.cast.players() {
        narrator.narrate(Narration::Standing {
            summary: player.to_string(),
        });
    }

    if state.endgame.first == state.endgame.second {
        return Err(CastError::SamePlayer(state.endgame.first.clone()).into());
    }
    let first = state.cast.require(&state.endgame.first)?;
    let second = state.cast.require(&state.endgame.second)?;
    let dilemma = run_duo_dilemma(
        first,
        second,
        state.endgame_day,
        &state.rules,
        &mut state.rng,
        narrator,
    )?;

    Ok(SimulationResult {
        seed: state.seed,
        days_played,
        standings: state.cast.players().to_vec(),
        dilemma,
    })
}

/// Build the state for `seed` and run it.
///
/// # Errors
///
/// Returns any error from [`build_state`] or [`run_simulation`].
pub fn simulate(
    config: &SimulationConfig,
    seed: u64,
    narrator: &mut dyn Narrator,
) -> Result<SimulationResult, RunnerError> {
    let mut state = build_state(config, seed)?;
    run_simulation(&mut state, narrator)
}

/// Log the simulation end sequence.
pub fn log_simulation_end(result: &SimulationResult) {
    let (first_share_pct, second_share_pct) = result.dilemma.outcome.reward_share_pct();
    info!(
        seed = result.seed,
        days_played = result.days_played,
        first = result.dilemma.first.name,
        first_choice = %result.dilemma.first_choice,
        second = result.dilemma.second.name,
        second_choice = %result.dilemma.second_choice,
        outcome = ?result.dilemma.outcome,
        first_share_pct,
        second_share_pct,
        "Simulation ended"
    );

    for player in &result.standings {
        info!(
            player = player.name,
            archetype = %player.archetype,
            sanity = player.sanity,
            "Final standing"
        );
    }
    if result.standings.iter().any(|p| p.sanity <= 0) {
        warn!("At least one contestant finished with no sanity left");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use carcel_rules::SilentNarrator;
    use carcel_types::{Archetype, DilemmaOutcome};

    use super::*;
    use crate::config::{RosterEntry, ScheduledEvent};

    #[test]
    fn build_state_spawns_from_the_seed() {
        let config = SimulationConfig::default();
        let state = build_state(&config, 42).unwrap();
        let again = build_state(&config, 42).unwrap();

        assert_eq!(state.seed, 42);
        assert_eq!(state.clock.day(), 0);
        assert_eq!(state.clock.days(), 6);
        assert_eq!(state.cast, again.cast);
        assert_eq!(state.title, "Cárcel de los Gemelos");
    }

    #[test]
    fn build_state_rejects_invalid_config() {
        let mut config = SimulationConfig::default();
        config.game.days = 0;
        assert!(matches!(
            build_state(&config, 1),
            Err(RunnerError::Config { .. })
        ));
    }

    #[test]
    fn default_run_plays_six_days_then_the_dilemma() {
        let config = SimulationConfig::default();
        let mut lines: Vec<Narration> = Vec::new();
        let result = simulate(&config, 7, &mut lines).unwrap();

        assert_eq!(result.seed, 7);
        assert_eq!(result.days_played, 6);
        assert_eq!(result.standings.len(), 2);
        assert!(result.standings.iter().all(|p| p.day == 6));
        assert_eq!(result.dilemma.first.name, "Frank");
        assert_eq!(result.dilemma.second.name, "Simón");

        assert!(matches!(lines.first(), Some(Narration::Opening { .. })));
        let days = lines
            .iter()
            .filter(|l| matches!(l, Narration::DayStarted { .. }))
            .count();
        assert_eq!(days, 6);
        assert_eq!(
            lines
                .iter()
                .filter(|l| matches!(l, Narration::NoiseStarted { .. }))
                .count(),
            1
        );
        assert!(matches!(lines.last(), Some(Narration::DilemmaResolved { .. })));

        let standings = lines
            .iter()
            .position(|l| matches!(l, Narration::StandingsStarted { day: 6 }))
            .unwrap();
        let endgame = lines
            .iter()
            .position(|l| matches!(l, Narration::EndgameStarted { day: 21 }))
            .unwrap();
        assert!(standings < endgame);
    }

    #[test]
    fn same_seed_same_run() {
        let config = SimulationConfig::default();
        let a = simulate(&config, 1234, &mut SilentNarrator).unwrap();
        let b = simulate(&config, 1234, &mut SilentNarrator).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn redeemed_ends_with_clarity_on_day_six() {
        let config = SimulationConfig::default();
        let result = simulate(&config, 99, &mut SilentNarrator).unwrap();
        let simon = result
            .standings
            .iter()
            .find(|p| p.name == "Simón")
            .unwrap();
        // Five withdrawals, one clarity, the privacy witness penalty, one noise drain.
        assert!((72..=82).contains(&simon.sanity));
        assert_eq!(
            result.dilemma.second.threshold,
            simon.empathy + (100 - simon.sanity)
        );
    }

    #[test]
    fn custom_cast_and_duelists() {
        let mut config = SimulationConfig::default();
        config.roster = vec![
            RosterEntry::new("Tartaria", Archetype::Mystic),
            RosterEntry::new("Aída", Archetype::Chaos),
        ];
        config.schedule = vec![ScheduledEvent::Noise {
            day: 1,
            noise: carcel_types::NoiseType::Siren,
        }];
        config.endgame.first = String::from("Aída");
        config.endgame.second = String::from("Tartaria");
        config.game.days = 2;

        let result = simulate(&config, 3, &mut SilentNarrator).unwrap();
        assert_eq!(result.days_played, 2);
        assert_eq!(result.dilemma.first.name, "Aída");
        let tartaria = result.standings.first().unwrap();
        assert!((90..=95).contains(&tartaria.sanity));
        let aida = result.standings.get(1).unwrap();
        assert!((80..=90).contains(&aida.sanity));
        assert!(matches!(
            result.dilemma.outcome,
            DilemmaOutcome::SplitReward
                | DilemmaOutcome::FirstTakesAll
                | DilemmaOutcome::SecondTakesAll
                | DilemmaOutcome::BothLose
        ));
    }

    #[test]
    fn missing_duelist_is_a_cast_error() {
        let config = SimulationConfig::default();
        let mut state = build_state(&config, 5).unwrap();
        state.endgame.second = String::from("Dakota");
        assert!(matches!(
            run_simulation(&mut state, &mut SilentNarrator),
            Err(RunnerError::Cast { .. })
        ));
    }
}
