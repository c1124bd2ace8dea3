//! Group-wide audio torture.
//!
//! Each player draws an independent drain, uniform in
//! `noise_drain_min..=noise_drain_max`. A Mystic floor-divides the drain by
//! `mystic_drain_divisor` before it lands. Draws happen in sequence order,
//! one per player.

use carcel_types::{Archetype, Narration, NoiseType, Player};
use rand::Rng;
use tracing::debug;

use crate::config::RulesConfig;
use crate::error::{RuleError, shift};
use crate::narrator::Narrator;

/// The drain one player took from a noise event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseDrain {
    /// Affected player.
    pub name: String,
    /// Uniform draw before any Mystic mitigation.
    pub rolled: i32,
    /// Sanity actually removed.
    pub applied: i32,
}

/// Run a noise torture over every player.
///
/// Every drain is rolled and every new sanity computed before any player is
/// touched or any line narrated, so an error leaves the cast unchanged.
///
/// # Errors
///
/// Returns [`RuleError::InvalidConfig`] if the drain range is empty or the
/// Mystic divisor is not positive, and [`RuleError::ArithmeticOverflow`] if
/// a player's sanity would leave the `i32` range.
pub fn apply_noise_event(
    players: &mut [Player],
    noise: NoiseType,
    config: &RulesConfig,
    rng: &mut impl Rng,
    narrator: &mut dyn Narrator,
) -> Result<Vec<NoiseDrain>, RuleError> {
    if config.noise_drain_min > config.noise_drain_max {
        return Err(RuleError::InvalidConfig {
            reason: format!(
                "noise_drain_min ({}) exceeds noise_drain_max ({})",
                config.noise_drain_min, config.noise_drain_max
            ),
        });
    }
    if config.mystic_drain_divisor <= 0 {
        return Err(RuleError::InvalidConfig {
            reason: format!(
                "mystic_drain_divisor must be positive, got {}",
                config.mystic_drain_divisor
            ),
        });
    }

    let mut drains = Vec::with_capacity(players.len());
    let mut sanities = Vec::with_capacity(players.len());
    for player in players.iter() {
        let rolled: i32 = rng.random_range(config.noise_drain_min..=config.noise_drain_max);
        let applied = if player.archetype == Archetype::Mystic {
            floor_div(rolled, config.mystic_drain_divisor)?
        } else {
            rolled
        };
        let delta = 0_i32
            .checked_sub(applied)
            .ok_or_else(|| RuleError::ArithmeticOverflow {
                context: String::from("noise drain negation"),
            })?;
        sanities.push(shift(player.sanity, delta, "noise drain")?);
        drains.push(NoiseDrain {
            name: player.name.clone(),
            rolled,
            applied,
        });
    }

    narrator.narrate(Narration::NoiseStarted { noise });
    for ((player, sanity), drain) in players.iter_mut().zip(sanities).zip(&drains) {
        if player.archetype == Archetype::Mystic {
            narrator.narrate(Narration::NoiseDoubted {
                name: player.name.clone(),
            });
        }
        player.sanity = sanity;

        debug!(
            player = player.name,
            %noise,
            rolled = drain.rolled,
            applied = drain.applied,
            sanity,
            "noise drain applied"
        );
        narrator.narrate(Narration::SanityDrained {
            name: player.name.clone(),
            sanity,
        });
    }

    Ok(drains)
}

/// Floor division, so a negative configured drain still rounds down.
fn floor_div(value: i32, divisor: i32) -> Result<i32, RuleError> {
    value
        .checked_div_euclid(divisor)
        .ok_or_else(|| RuleError::ArithmeticOverflow {
            context: String::from("mystic drain division"),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::narrator::SilentNarrator;

    fn cast() -> Vec<Player> {
        vec![
            Player::new("Frank", Archetype::Veteran, 100, 50, 40),
            Player::new("Tartaria", Archetype::Mystic, 100, 50, 60),
            Player::new("Aída", Archetype::Chaos, 100, 50, 35),
        ]
    }

    #[test]
    fn drains_stay_in_range() {
        let config = RulesConfig::default();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut players = cast();
            let drains =
                apply_noise_event(&mut players, NoiseType::Siren, &config, &mut rng, &mut SilentNarrator)
                    .unwrap();
            for (player, drain) in players.iter().zip(&drains) {
                let lost = 100_i32.saturating_sub(player.sanity);
                assert_eq!(lost, drain.applied);
                if player.archetype == Archetype::Mystic {
                    assert!((5..=10).contains(&lost), "mystic lost {lost}");
                } else {
                    assert!((10..=20).contains(&lost), "{} lost {lost}", player.name);
                }
            }
        }
    }

    #[test]
    fn mystic_drain_is_floor_half_of_roll() {
        let config = RulesConfig::default();
        let mut rng = StdRng::seed_from_u64(8);
        let mut players = cast();
        let drains =
            apply_noise_event(&mut players, NoiseType::Alarm, &config, &mut rng, &mut SilentNarrator)
                .unwrap();
        let mystic = drains.iter().find(|d| d.name == "Tartaria").unwrap();
        assert_eq!(mystic.applied, mystic.rolled.div_euclid(2));
    }

    #[test]
    fn draws_follow_sequence_order() {
        let config = RulesConfig::default();
        let mut rng = StdRng::seed_from_u64(13);
        let mut replay = StdRng::seed_from_u64(13);
        let mut players = cast();
        let drains = apply_noise_event(
            &mut players,
            NoiseType::CryingBaby,
            &config,
            &mut rng,
            &mut SilentNarrator,
        )
        .unwrap();
        for drain in &drains {
            let expected: i32 = replay.random_range(10..=20);
            assert_eq!(drain.rolled, expected);
        }
    }

    #[test]
    fn narrates_heading_mystic_and_every_player() {
        let config = RulesConfig::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut players = cast();
        let mut lines: Vec<Narration> = Vec::new();
        let _ = apply_noise_event(&mut players, NoiseType::Siren, &config, &mut rng, &mut lines);

        assert_eq!(
            lines.first(),
            Some(&Narration::NoiseStarted {
                noise: NoiseType::Siren
            })
        );
        let doubted = lines
            .iter()
            .filter(|l| matches!(l, Narration::NoiseDoubted { .. }))
            .count();
        let drained = lines
            .iter()
            .filter(|l| matches!(l, Narration::SanityDrained { .. }))
            .count();
        assert_eq!(doubted, 1);
        assert_eq!(drained, 3);
    }

    #[test]
    fn empty_cast_only_narrates_heading() {
        let config = RulesConfig::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut lines: Vec<Narration> = Vec::new();
        let drains = apply_noise_event(&mut [], NoiseType::Siren, &config, &mut rng, &mut lines);
        assert_eq!(drains, Ok(Vec::new()));
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn empty_range_rejected_before_any_drain() {
        let config = RulesConfig {
            noise_drain_min: 30,
            ..RulesConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(2);
        let mut players = cast();
        let result =
            apply_noise_event(&mut players, NoiseType::Siren, &config, &mut rng, &mut SilentNarrator);
        assert!(matches!(result, Err(RuleError::InvalidConfig { .. })));
        assert!(players.iter().all(|p| p.sanity == 100));
    }

    #[test]
    fn zero_divisor_leaves_cast_untouched_and_silent() {
        let config = RulesConfig {
            mystic_drain_divisor: 0,
            ..RulesConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let mut players = vec![
            Player::new("Frank", Archetype::Veteran, 100, 50, 40),
            Player::new("Tartaria", Archetype::Mystic, 100, 50, 60),
        ];
        let mut lines: Vec<Narration> = Vec::new();
        let result = apply_noise_event(&mut players, NoiseType::Siren, &config, &mut rng, &mut lines);

        assert!(matches!(result, Err(RuleError::InvalidConfig { .. })));
        assert!(players.iter().all(|p| p.sanity == 100));
        assert!(lines.is_empty());
    }

    #[test]
    fn overflow_on_a_later_player_leaves_earlier_players_untouched() {
        let config = RulesConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut players = vec![
            Player::new("Frank", Archetype::Veteran, 100, 50, 40),
            Player::new("Abyss", Archetype::Chaos, i32::MIN, 50, 40),
        ];
        let mut lines: Vec<Narration> = Vec::new();
        let result = apply_noise_event(&mut players, NoiseType::Siren, &config, &mut rng, &mut lines);

        assert!(matches!(result, Err(RuleError::ArithmeticOverflow { .. })));
        assert_eq!(players.first().map(|p| p.sanity), Some(100));
        assert!(lines.is_empty());
    }
}
