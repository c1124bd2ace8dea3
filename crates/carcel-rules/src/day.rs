//! Archetype-specific day effects, applied once per player per simulated day.
//!
//! - **Redeemed**: withdrawal penalty through `withdrawal_days`, then the
//!   clarity bonus on every later day while `has_consumed` is false. No rule
//!   ever sets that flag, so the bonus repeats daily.
//! - **Veteran**: a fair coin each day. Heads the small talk hurts, tails the
//!   silence heals.
//! - **Everyone else**: nothing happens and no random draw is consumed.
//!
//! The caller sets `player.day` before invoking [`apply_day_effect`].

use carcel_types::{Archetype, Narration, Player};
use rand::Rng;
use tracing::debug;

use crate::config::RulesConfig;
use crate::error::{RuleError, shift};
use crate::narrator::Narrator;

/// Which day effect was applied and by how much sanity moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayEffect {
    /// Redeemed withdrawal penalty.
    Withdrawal {
        /// Sanity change applied.
        delta: i32,
    },
    /// Redeemed clarity bonus.
    Clarity {
        /// Sanity change applied.
        delta: i32,
    },
    /// Veteran coin came up heads.
    SmallTalk {
        /// Sanity change applied.
        delta: i32,
    },
    /// Veteran coin came up tails.
    Silence {
        /// Sanity change applied.
        delta: i32,
    },
    /// The archetype has no day rule.
    Unaffected,
}

impl DayEffect {
    /// Sanity change carried by the effect.
    pub const fn sanity_delta(self) -> i32 {
        match self {
            Self::Withdrawal { delta }
            | Self::Clarity { delta }
            | Self::SmallTalk { delta }
            | Self::Silence { delta } => delta,
            Self::Unaffected => 0,
        }
    }
}

/// Apply the day effect for the player's archetype and current `day`.
///
/// # Errors
///
/// Returns [`RuleError::ArithmeticOverflow`] if sanity would leave the `i32`
/// range.
pub fn apply_day_effect(
    player: &mut Player,
    config: &RulesConfig,
    rng: &mut impl Rng,
    narrator: &mut dyn Narrator,
) -> Result<DayEffect, RuleError> {
    let effect = match player.archetype {
        Archetype::Redeemed => redeemed_effect(player, config),
        Archetype::Veteran => {
            if rng.random_bool(0.5) {
                DayEffect::SmallTalk {
                    delta: config.small_talk_delta,
                }
            } else {
                DayEffect::Silence {
                    delta: config.silence_delta,
                }
            }
        }
        Archetype::Mystic
        | Archetype::Chaos
        | Archetype::Toxic
        | Archetype::Explosive
        | Archetype::Deceiver
        | Archetype::Unrecognized => DayEffect::Unaffected,
    };

    let name = player.name.clone();
    let line = match effect {
        DayEffect::Withdrawal { delta } => Narration::Withdrawal {
            name,
            day: player.day,
            delta,
        },
        DayEffect::Clarity { delta } => Narration::Clarity { name, delta },
        DayEffect::SmallTalk { delta } => Narration::SmallTalk { name, delta },
        DayEffect::Silence { delta } => Narration::Silence { name, delta },
        DayEffect::Unaffected => return Ok(effect),
    };

    player.sanity = shift(player.sanity, effect.sanity_delta(), "day effect")?;
    debug!(
        player = player.name,
        day = player.day,
        delta = effect.sanity_delta(),
        sanity = player.sanity,
        "day effect applied"
    );
    narrator.narrate(line);

    Ok(effect)
}

const fn redeemed_effect(player: &Player, config: &RulesConfig) -> DayEffect {
    if player.day <= config.withdrawal_days {
        DayEffect::Withdrawal {
            delta: config.withdrawal_delta,
        }
    } else if !player.has_consumed {
        DayEffect::Clarity {
            delta: config.clarity_delta,
        }
    } else {
        DayEffect::Unaffected
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::narrator::SilentNarrator;

    fn player(archetype: Archetype, day: u32) -> Player {
        let mut p = Player::new("Test", archetype, 100, 50, 50);
        p.day = day;
        p
    }

    #[test]
    fn redeemed_withdrawal_days_one_to_five() {
        let config = RulesConfig::default();
        let mut rng = StdRng::seed_from_u64(0);
        for day in 1..=5 {
            let mut p = player(Archetype::Redeemed, day);
            let effect = apply_day_effect(&mut p, &config, &mut rng, &mut SilentNarrator);
            assert_eq!(effect, Ok(DayEffect::Withdrawal { delta: -5 }));
            assert_eq!(p.sanity, 95);
        }
    }

    #[test]
    fn redeemed_clarity_repeats_after_withdrawal() {
        let config = RulesConfig::default();
        let mut rng = StdRng::seed_from_u64(0);
        let mut p = player(Archetype::Redeemed, 6);
        for day in 6..=9 {
            p.day = day;
            let effect = apply_day_effect(&mut p, &config, &mut rng, &mut SilentNarrator);
            assert_eq!(effect, Ok(DayEffect::Clarity { delta: 20 }));
        }
        assert_eq!(p.sanity, 180);
        assert!(!p.has_consumed);
    }

    #[test]
    fn redeemed_without_bonus_once_consumed() {
        let config = RulesConfig::default();
        let mut rng = StdRng::seed_from_u64(0);
        let mut p = player(Archetype::Redeemed, 6);
        p.has_consumed = true;
        let effect = apply_day_effect(&mut p, &config, &mut rng, &mut SilentNarrator);
        assert_eq!(effect, Ok(DayEffect::Unaffected));
        assert_eq!(p.sanity, 100);
    }

    #[test]
    fn veteran_only_moves_by_plus_five_or_minus_ten() {
        let config = RulesConfig::default();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut p = player(Archetype::Veteran, 1);
            let effect = apply_day_effect(&mut p, &config, &mut rng, &mut SilentNarrator);
            assert!(effect.is_ok());
            assert!(p.sanity == 105 || p.sanity == 90, "unexpected sanity {}", p.sanity);
        }
    }

    #[test]
    fn veteran_sees_both_outcomes() {
        let config = RulesConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut p = player(Archetype::Veteran, 1);
        let mut small_talk = 0_u32;
        let mut silence = 0_u32;
        for _ in 0..100 {
            match apply_day_effect(&mut p, &config, &mut rng, &mut SilentNarrator) {
                Ok(DayEffect::SmallTalk { .. }) => small_talk = small_talk.saturating_add(1),
                Ok(DayEffect::Silence { .. }) => silence = silence.saturating_add(1),
                other => assert!(other.is_err(), "unexpected effect {other:?}"),
            }
        }
        assert!(small_talk > 0);
        assert!(silence > 0);
    }

    #[test]
    fn veteran_coin_matches_replay() {
        let config = RulesConfig::default();
        let mut rng = StdRng::seed_from_u64(21);
        let mut replay = StdRng::seed_from_u64(21);
        let mut p = player(Archetype::Veteran, 2);
        let heads = replay.random_bool(0.5);
        let _ = apply_day_effect(&mut p, &config, &mut rng, &mut SilentNarrator);
        assert_eq!(p.sanity, if heads { 90 } else { 105 });
    }

    #[test]
    fn other_archetypes_unaffected_and_draw_nothing() {
        let config = RulesConfig::default();
        for archetype in [
            Archetype::Mystic,
            Archetype::Chaos,
            Archetype::Toxic,
            Archetype::Explosive,
            Archetype::Deceiver,
            Archetype::Unrecognized,
        ] {
            let mut rng = StdRng::seed_from_u64(5);
            let mut untouched = StdRng::seed_from_u64(5);
            let mut p = player(archetype, 3);
            let mut lines: Vec<Narration> = Vec::new();
            let effect = apply_day_effect(&mut p, &config, &mut rng, &mut lines);
            assert_eq!(effect, Ok(DayEffect::Unaffected));
            assert_eq!(p.sanity, 100);
            assert!(lines.is_empty());
            assert_eq!(rng.random::<u64>(), untouched.random::<u64>());
        }
    }

    #[test]
    fn narrates_withdrawal_with_day() {
        let config = RulesConfig::default();
        let mut rng = StdRng::seed_from_u64(0);
        let mut p = player(Archetype::Redeemed, 4);
        let mut lines: Vec<Narration> = Vec::new();
        let _ = apply_day_effect(&mut p, &config, &mut rng, &mut lines);
        assert_eq!(
            lines,
            vec![Narration::Withdrawal {
                name: String::from("Test"),
                day: 4,
                delta: -5,
            }]
        );
    }

    #[test]
    fn overflow_is_reported() {
        let config = RulesConfig::default();
        let mut rng = StdRng::seed_from_u64(0);
        let mut p = player(Archetype::Redeemed, 1);
        p.sanity = i32::MIN;
        let effect = apply_day_effect(&mut p, &config, &mut rng, &mut SilentNarrator);
        assert!(matches!(effect, Err(RuleError::ArithmeticOverflow { .. })));
        assert_eq!(p.sanity, i32::MIN);
    }
}
