//! Cold-blood check for the endgame.
//!
//! ```text
//! threshold = empathy + (100 - sanity)
//! roll      = uniform(0..=betrayal_roll_max)
//! betrays   = roll > threshold
//! ```
//!
//! Lower sanity and higher empathy both raise the threshold, so distressed
//! or empathetic players betray less often. The roll range is fixed and not
//! scaled to the threshold's own range, so this is not a calibrated
//! probability curve: a threshold at or above the roll max can never betray,
//! and a negative threshold always does.

use carcel_types::{Narration, Player};
use rand::Rng;
use tracing::debug;

use crate::config::RulesConfig;
use crate::error::RuleError;
use crate::narrator::Narrator;

/// Sanity level the threshold measures distress against.
pub const SANITY_BASELINE: i32 = 100;

/// Outcome of one betrayal check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetrayalRoll {
    /// Rolling player.
    pub name: String,
    /// Uniform roll.
    pub roll: i32,
    /// Threshold derived from the player's empathy and sanity.
    pub threshold: i32,
    /// Whether the roll exceeded the threshold.
    pub betrays: bool,
}

/// Compute `empathy + (100 - sanity)`.
///
/// # Errors
///
/// Returns [`RuleError::ArithmeticOverflow`] for extreme stat values.
pub fn betrayal_threshold(player: &Player) -> Result<i32, RuleError> {
    SANITY_BASELINE
        .checked_sub(player.sanity)
        .and_then(|distress| player.empathy.checked_add(distress))
        .ok_or_else(|| RuleError::ArithmeticOverflow {
            context: format!("betrayal threshold for {}", player.name),
        })
}

/// A player betrays iff the roll is strictly greater than the threshold.
pub const fn decide_betrayal(roll: i32, threshold: i32) -> bool {
    roll > threshold
}

/// Roll the cold-blood check for one player.
///
/// # Errors
///
/// Returns [`RuleError::InvalidConfig`] if `betrayal_roll_max` is negative
/// and [`RuleError::ArithmeticOverflow`] if the threshold overflows.
pub fn betrayal_check(
    player: &Player,
    config: &RulesConfig,
    rng: &mut impl Rng,
    narrator: &mut dyn Narrator,
) -> Result<BetrayalRoll, RuleError> {
    if config.betrayal_roll_max < 0 {
        return Err(RuleError::InvalidConfig {
            reason: format!(
                "betrayal_roll_max must not be negative, got {}",
                config.betrayal_roll_max
            ),
        });
    }

    let threshold = betrayal_threshold(player)?;
    let roll: i32 = rng.random_range(0..=config.betrayal_roll_max);
    let betrays = decide_betrayal(roll, threshold);

    debug!(player = player.name, roll, threshold, betrays, "betrayal check");
    narrator.narrate(Narration::BetrayalRoll {
        name: player.name.clone(),
        roll,
        threshold,
    });

    Ok(BetrayalRoll {
        name: player.name.clone(),
        roll,
        threshold,
        betrays,
    })
}
