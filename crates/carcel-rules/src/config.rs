//! Tunable constants for the stat-update rules.
//!
//! The [`RulesConfig`] struct bundles every number the rules use so that the
//! day cycle and tests can override defaults. It is read from the `rules`
//! section of `carcel-config.yaml`; any field left out keeps its default,
//! and the defaults reproduce the canonical prototype exactly.
//!
//! Sanity deltas are stored signed (a penalty is negative) so the rules can
//! apply them with a single checked addition.

use serde::Deserialize;

use crate::error::RuleError;

/// Configuration for the stat-update rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Sanity every player starts with (default: 100).
    pub starting_sanity: i32,

    /// Loyalty every player starts with (default: 50).
    pub starting_loyalty: i32,

    /// Lowest hidden empathy a player can be created with (default: 30).
    pub empathy_min: i32,

    /// Highest hidden empathy a player can be created with (default: 70).
    pub empathy_max: i32,

    /// Last day of the Redeemed withdrawal (default: 5).
    pub withdrawal_days: u32,

    /// Sanity change during withdrawal (default: -5).
    pub withdrawal_delta: i32,

    /// Sanity change once withdrawal ends and clarity sets in (default: +20).
    pub clarity_delta: i32,

    /// Sanity change when a Veteran had to socialize (default: -10).
    pub small_talk_delta: i32,

    /// Sanity change when a Veteran enjoyed the silence (default: +5).
    pub silence_delta: i32,

    /// Smallest noise drain, inclusive (default: 10).
    pub noise_drain_min: i32,

    /// Largest noise drain, inclusive (default: 20).
    pub noise_drain_max: i32,

    /// Divisor applied to a Mystic's noise drain, floor division (default: 2).
    pub mystic_drain_divisor: i32,

    /// Sanity change for the player using the toilet (default: -5).
    pub privacy_actor_delta: i32,

    /// Sanity change for the player forced to watch (default: -3).
    pub privacy_witness_delta: i32,

    /// Highest possible betrayal roll; rolls are uniform in `0..=max`
    /// (default: 150).
    pub betrayal_roll_max: i32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_sanity: 100,
            starting_loyalty: 50,
            empathy_min: 30,
            empathy_max: 70,
            withdrawal_days: 5,
            withdrawal_delta: -5,
            clarity_delta: 20,
            small_talk_delta: -10,
            silence_delta: 5,
            noise_drain_min: 10,
            noise_drain_max: 20,
            mystic_drain_divisor: 2,
            privacy_actor_delta: -5,
            privacy_witness_delta: -3,
            betrayal_roll_max: 150,
        }
    }
}

impl RulesConfig {
    /// Check that every random range is non-empty and the Mystic divisor is
    /// usable.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> Result<(), RuleError> {
        if self.empathy_min > self.empathy_max {
            return Err(RuleError::InvalidConfig {
                reason: format!(
                    "empathy_min ({}) exceeds empathy_max ({})",
                    self.empathy_min, self.empathy_max
                ),
            });
        }
        if self.noise_drain_min > self.noise_drain_max {
            return Err(RuleError::InvalidConfig {
                reason: format!(
                    "noise_drain_min ({}) exceeds noise_drain_max ({})",
                    self.noise_drain_min, self.noise_drain_max
                ),
            });
        }
        if self.mystic_drain_divisor <= 0 {
            return Err(RuleError::InvalidConfig {
                reason: format!(
                    "mystic_drain_divisor must be positive, got {}",
                    self.mystic_drain_divisor
                ),
            });
        }
        if self.betrayal_roll_max < 0 {
            return Err(RuleError::InvalidConfig {
                reason: format!(
                    "betrayal_roll_max must not be negative, got {}",
                    self.betrayal_roll_max
                ),
            });
        }
        Ok(())
    }
}
