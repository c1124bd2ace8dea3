//! Player creation.
//!
//! Every contestant starts from the configured sanity and loyalty and gets
//! one hidden empathy draw. The draw happens here, at creation, and never
//! again.

use carcel_types::{Archetype, Player};
use rand::Rng;
use tracing::debug;

use crate::config::RulesConfig;
use crate::error::RuleError;

/// Create a player with starting stats and a uniformly drawn empathy in
/// `empathy_min..=empathy_max`.
///
/// # Errors
///
/// Returns [`RuleError::InvalidConfig`] if the empathy range is empty.
pub fn spawn_player(
    name: &str,
    archetype: Archetype,
    config: &RulesConfig,
    rng: &mut impl Rng,
) -> Result<Player, RuleError> {
    if config.empathy_min > config.empathy_max {
        return Err(RuleError::InvalidConfig {
            reason: format!(
                "empathy_min ({}) exceeds empathy_max ({})",
                config.empathy_min, config.empathy_max
            ),
        });
    }

    let empathy: i32 = rng.random_range(config.empathy_min..=config.empathy_max);
    debug!(player = name, %archetype, "player spawned");

    Ok(Player::new(
        name,
        archetype,
        config.starting_sanity,
        config.starting_loyalty,
        empathy,
    ))
}
