//! Day cycle: one simulated day of the season.
//!
//! Each day runs through these phases:
//!
//! 1. **Wake** -- advance the clock and announce the day.
//! 2. **Routine** -- stamp every player with the new day and apply their
//!    archetype's day effect, in roster order.
//! 3. **Events** -- run every scheduled event pinned to this day, in schedule
//!    order. Noise tortures hit the whole cast; privacy breaches hit a named
//!    pair.
//!
//! All randomness comes from the state's single generator, so the day is
//! deterministic given the state it starts from.

use carcel_rules::{
    DayEffect, NoiseDrain, Narrator, RuleError, RulesConfig, apply_day_effect, apply_noise_event,
    apply_privacy_drain,
};
use carcel_types::Narration;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::cast::{Cast, CastError};
use crate::clock::{ClockError, DayClock};
use crate::config::{EndgameConfig, ScheduledEvent};

/// Errors that can occur while playing a day.
#[derive(Debug, thiserror::Error)]
pub enum DayError {
    /// A clock operation failed.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },

    /// A rule application failed.
    #[error("rule error: {source}")]
    Rule {
        /// The underlying rule error.
        #[from]
        source: RuleError,
    },

    /// A scheduled event referenced the cast incorrectly.
    #[error("cast error: {source}")]
    Cast {
        /// The underlying cast error.
        #[from]
        source: CastError,
    },
}

/// The complete mutable state of a run.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Show title for the opening banner.
    pub title: String,
    /// Seed the generator was built from.
    pub seed: u64,
    /// Day counter.
    pub clock: DayClock,
    /// Every contestant, in roster order.
    pub cast: Cast,
    /// Mid-run events.
    pub schedule: Vec<ScheduledEvent>,
    /// The two duelists.
    pub endgame: EndgameConfig,
    /// In-fiction day label of the endgame heading.
    pub endgame_day: u32,
    /// Rule tunables.
    pub rules: RulesConfig,
    /// The run's only source of randomness.
    pub rng: StdRng,
}

/// A privacy breach that happened during a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivacyBreach {
    /// Player who used the toilet.
    pub actor: String,
    /// Player forced to watch.
    pub witness: String,
}

/// Summary of a single day's execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    /// The day that was played.
    pub day: u32,
    /// Day effect per player, in roster order.
    pub day_effects: Vec<(String, DayEffect)>,
    /// Drains from every noise event of the day, in draw order.
    pub noise_drains: Vec<NoiseDrain>,
    /// Privacy breaches of the day, in schedule order.
    pub privacy_breaches: Vec<PrivacyBreach>,
}

/// Play one day.
///
/// # Errors
///
/// Returns [`DayError::Clock`] if the season is already over,
/// [`DayError::Cast`] if a privacy event names an unknown player, and
/// [`DayError::Rule`] if a rule fails.
pub fn run_day(
    state: &mut SimulationState,
    narrator: &mut dyn Narrator,
) -> Result<DaySummary, DayError> {
    // --- Wake ---
    let day = state.clock.advance()?;
    info!(day, remaining = state.clock.remaining(), "Day started");
    narrator.narrate(Narration::DayStarted { day });

    // --- Routine ---
    let mut day_effects = Vec::with_capacity(state.cast.len());
    for player in state.cast.players_mut() {
        player.day = day;
        let effect = apply_day_effect(player, &state.rules, &mut state.rng, narrator)?;
        day_effects.push((player.name.clone(), effect));
    }

    // --- Events ---
    let mut noise_drains = Vec::new();
    let mut privacy_breaches = Vec::new();
    for event in state.schedule.iter().filter(|e| e.day() == day) {
        match event {
            ScheduledEvent::Noise { noise, .. } => {
                info!(day, %noise, "Noise torture");
                let drains = apply_noise_event(
                    state.cast.players_mut(),
                    *noise,
                    &state.rules,
                    &mut state.rng,
                    narrator,
                )?;
                noise_drains.extend(drains);
            }
            ScheduledEvent::Privacy { actor, witness, .. } => {
                info!(day, actor, witness, "Privacy breach");
                let (actor_player, witness_player) = state.cast.pair_mut(actor, witness)?;
                apply_privacy_drain(actor_player, witness_player, &state.rules, narrator)?;
                privacy_breaches.push(PrivacyBreach {
                    actor: actor.clone(),
                    witness: witness.clone(),
                });
            }
        }
    }

    for player in state.cast.players() {
        debug!(day, player = player.name, sanity = player.sanity, "End of day");
    }

    Ok(DaySummary {
        day,
        day_effects,
        noise_drains,
        privacy_breaches,
    })
}
