//! Privacy breach: the open-air toilet.
//!
//! Deterministic two-party drain. The actor loses dignity, the witness takes
//! the stress of watching. No randomness and no archetype dependence.

use carcel_types::{Narration, Player};
use tracing::debug;

use crate::config::RulesConfig;
use crate::error::{RuleError, shift};
use crate::narrator::Narrator;

/// Apply the privacy drain to an (actor, witness) pair.
///
/// Both deltas are computed before either player is touched, so an overflow
/// leaves both unchanged.
///
/// # Errors
///
/// Returns [`RuleError::ArithmeticOverflow`] if either sanity would leave the
/// `i32` range.
pub fn apply_privacy_drain(
    actor: &mut Player,
    witness: &mut Player,
    config: &RulesConfig,
    narrator: &mut dyn Narrator,
) -> Result<(), RuleError> {
    let actor_sanity = shift(actor.sanity, config.privacy_actor_delta, "privacy actor")?;
    let witness_sanity = shift(witness.sanity, config.privacy_witness_delta, "privacy witness")?;

    narrator.narrate(Narration::PrivacyBreachStarted);
    narrator.narrate(Narration::ToiletUsed {
        actor: actor.name.clone(),
    });

    actor.sanity = actor_sanity;
    witness.sanity = witness_sanity;

    debug!(
        actor = actor.name,
        witness = witness.name,
        actor_sanity,
        witness_sanity,
        "privacy drain applied"
    );
    narrator.narrate(Narration::PrivacyDrained {
        actor: actor.name.clone(),
        witness: witness.name.clone(),
        actor_delta: config.privacy_actor_delta,
        witness_delta: config.privacy_witness_delta,
    });

    Ok(())
}
