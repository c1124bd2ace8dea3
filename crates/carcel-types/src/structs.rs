//! Core entity structs for the Carcel de los Gemelos simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::Archetype;

/// Mutable simulation state for one contestant.
///
/// One instance exists per character for the whole run. `name` and
/// `archetype` never change after creation; every rule mutates `sanity`.
/// Stats are plain signed integers with no floor or ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Identifying display name.
    pub name: String,
    /// Behavioral category selecting which rules apply.
    pub archetype: Archetype,
    /// Psychological state. Lower is worse. Never clamped.
    pub sanity: i32,
    /// Loyalty towards the cellmate. Not read by any rule yet.
    pub loyalty: i32,
    /// Current simulated day, set by the day cycle.
    pub day: u32,
    /// Gate for the Redeemed clarity bonus. No rule sets it.
    pub has_consumed: bool,
    /// Hidden stat feeding the betrayal threshold. Fixed at creation.
    pub empathy: i32,
}

impl Player {
    /// Build a player on day 1 with the given starting stats.
    pub fn new(
        name: impl Into<String>,
        archetype: Archetype,
        sanity: i32,
        loyalty: i32,
        empathy: i32,
    ) -> Self {
        Self {
            name: name.into(),
            archetype,
            sanity,
            loyalty,
            day: 1,
            has_consumed: false,
            empathy,
        }
    }
}

/// Public summary line. Empathy is hidden.
impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) | Sanity: {} | Loyalty: {} | Day: {}",
            self.name, self.archetype, self.sanity, self.loyalty, self.day
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_starts_on_day_one() {
        let p = Player::new("Frank", Archetype::Veteran, 100, 50, 42);
        assert_eq!(p.day, 1);
        assert!(!p.has_consumed);
        assert_eq!(p.empathy, 42);
    }

    #[test]
    fn display_hides_empathy() {
        let p = Player::new("Simón", Archetype::Redeemed, 95, 50, 61);
        let line = p.to_string();
        assert_eq!(line, "Simón (Redeemed) | Sanity: 95 | Loyalty: 50 | Day: 1");
        assert!(!line.contains("61"));
    }
}
