//! The cast: every contestant, in roster order.
//!
//! At simulation start the cast is spawned from the roster, drawing each
//! player's hidden empathy from the run's generator in roster order. After
//! that the order never changes: day effects and noise drains walk the cast
//! front to back, and scheduled events look players up by name.

use std::cmp::Ordering;

use carcel_rules::{RuleError, RulesConfig, spawn_player};
use carcel_types::Player;
use rand::Rng;
use tracing::info;

use crate::config::RosterEntry;

/// Errors from building or querying the cast.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CastError {
    /// No player with this name is in the cast.
    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    /// Two roster entries share a name.
    #[error("duplicate player name: {0}")]
    DuplicateName(String),

    /// A two-party lookup named the same player twice.
    #[error("{0} cannot be paired with themselves")]
    SamePlayer(String),

    /// Spawning a player failed.
    #[error("spawn failed: {source}")]
    Spawn {
        /// The underlying rule error.
        #[from]
        source: RuleError,
    },
}

/// Ordered, name-unique set of players.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cast {
    players: Vec<Player>,
}

impl Cast {
    /// Spawn one player per roster entry, in roster order.
    ///
    /// # Errors
    ///
    /// Returns [`CastError::DuplicateName`] if two entries share a name and
    /// [`CastError::Spawn`] if the empathy range is empty.
    pub fn spawn(
        roster: &[RosterEntry],
        rules: &RulesConfig,
        rng: &mut impl Rng,
    ) -> Result<Self, CastError> {
        let mut cast = Self {
            players: Vec::with_capacity(roster.len()),
        };
        for entry in roster {
            if cast.get(&entry.name).is_some() {
                return Err(CastError::DuplicateName(entry.name.clone()));
            }
            let player = spawn_player(&entry.name, entry.archetype, rules, rng)?;
            info!(
                player = player.name,
                archetype = %player.archetype,
                sanity = player.sanity,
                "Contestant entered the prison"
            );
            cast.players.push(player);
        }
        Ok(cast)
    }

    /// Wrap an existing list of players.
    ///
    /// # Errors
    ///
    /// Returns [`CastError::DuplicateName`] if two players share a name.
    pub fn from_players(players: Vec<Player>) -> Result<Self, CastError> {
        for (i, player) in players.iter().enumerate() {
            if players.iter().skip(i.saturating_add(1)).any(|p| p.name == player.name) {
                return Err(CastError::DuplicateName(player.name.clone()));
            }
        }
        Ok(Self { players })
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the cast has no players.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players in roster order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Mutable players in roster order.
    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    /// Look a player up by name.
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Look a player up by name, failing if absent.
    ///
    /// # Errors
    ///
    /// Returns [`CastError::UnknownPlayer`] if no player has this name.
    pub fn require(&self, name: &str) -> Result<&Player, CastError> {
        self.get(name)
            .ok_or_else(|| CastError::UnknownPlayer(name.to_owned()))
    }

    fn index_of(&self, name: &str) -> Result<usize, CastError> {
        self.players
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| CastError::UnknownPlayer(name.to_owned()))
    }

    /// Borrow two different players mutably at once, in the order asked.
    ///
    /// # Errors
    ///
    /// Returns [`CastError::UnknownPlayer`] if either name is absent and
    /// [`CastError::SamePlayer`] if both names are the same.
    pub fn pair_mut(
        &mut self,
        first: &str,
        second: &str,
    ) -> Result<(&mut Player, &mut Player), CastError> {
        let a = self.index_of(first)?;
        let b = self.index_of(second)?;
        let pair = match a.cmp(&b) {
            Ordering::Equal => return Err(CastError::SamePlayer(first.to_owned())),
            Ordering::Less => {
                let (left, right) = self.players.split_at_mut(b);
                left.get_mut(a).zip(right.first_mut())
            }
            Ordering::Greater => {
                let (left, right) = self.players.split_at_mut(a);
                right.first_mut().zip(left.get_mut(b))
            }
        };
        pair.ok_or_else(|| CastError::UnknownPlayer(second.to_owned()))
    }
}
