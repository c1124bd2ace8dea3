//! Enumeration types for the Carcel de los Gemelos simulation.
//!
//! Archetypes select which day and event rules apply to a player, noise
//! types label the Twins' audio tortures, and the dilemma enums describe the
//! endgame's choices and fixed payoff outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Archetype
// ---------------------------------------------------------------------------

/// A player's behavioral category.
///
/// Only [`Archetype::Veteran`], [`Archetype::Redeemed`] and
/// [`Archetype::Mystic`] carry rules today. Every other variant, including
/// [`Archetype::Unrecognized`], falls through the rule dispatch as a no-op.
///
/// Deserialization never fails: an unknown name maps to
/// [`Archetype::Unrecognized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Archetype {
    /// Asocial survivor. Flips a coin every day between hating the small
    /// talk and enjoying the silence.
    Veteran,
    /// Former addict on a cold-turkey withdrawal.
    Redeemed,
    /// Doubts reality; halves noise drain.
    Mystic,
    /// Restless insomniac.
    Chaos,
    /// Thrives on conflict.
    Toxic,
    /// Short fuse under pressure.
    Explosive,
    /// Smooth talker.
    Deceiver,
    /// Any archetype name the simulation does not know.
    Unrecognized,
}

impl Archetype {
    /// Every known archetype, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Veteran,
        Self::Redeemed,
        Self::Mystic,
        Self::Chaos,
        Self::Toxic,
        Self::Explosive,
        Self::Deceiver,
    ];

    /// Canonical display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Veteran => "Veteran",
            Self::Redeemed => "Redeemed",
            Self::Mystic => "Mystic",
            Self::Chaos => "Chaos",
            Self::Toxic => "Toxic",
            Self::Explosive => "Explosive",
            Self::Deceiver => "Deceiver",
            Self::Unrecognized => "Unrecognized",
        }
    }

    /// Look up an archetype by name, ignoring ASCII case.
    ///
    /// Unknown names yield [`Archetype::Unrecognized`].
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(Self::Unrecognized)
    }
}

impl From<String> for Archetype {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// NoiseType
// ---------------------------------------------------------------------------

/// The category of audio torture the Twins can trigger.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum NoiseType {
    /// The default torture.
    #[default]
    Siren,
    /// A recording of a crying baby.
    CryingBaby,
    /// Nails on metal.
    Scratching,
    /// Constant hiss.
    WhiteNoise,
    /// Intermittent alarm bell.
    Alarm,
}

impl NoiseType {
    /// Human-readable label used in narration headings.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Siren => "Siren",
            Self::CryingBaby => "Crying Baby",
            Self::Scratching => "Scratching",
            Self::WhiteNoise => "White Noise",
            Self::Alarm => "Alarm",
        }
    }
}

impl fmt::Display for NoiseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Duo dilemma
// ---------------------------------------------------------------------------

/// A player's simultaneous choice in the duo dilemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    /// Keep the pact and split the reward.
    Cooperate,
    /// Break the pact to take everything.
    Betray,
}

impl Choice {
    /// Map a betrayal decision to a choice.
    pub const fn from_betrayal(betrays: bool) -> Self {
        if betrays { Self::Betray } else { Self::Cooperate }
    }

    /// Whether this choice is a betrayal.
    pub const fn is_betrayal(self) -> bool {
        matches!(self, Self::Betray)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cooperate => f.write_str("Cooperate"),
            Self::Betray => f.write_str("Betray"),
        }
    }
}

/// The fixed payoff of a resolved duo dilemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DilemmaOutcome {
    /// Both cooperated: the reward is split, unless the Twins prohibit it.
    SplitReward,
    /// The first player betrayed a cooperating partner and takes everything.
    FirstTakesAll,
    /// The second player betrayed a cooperating partner and takes everything.
    SecondTakesAll,
    /// Both betrayed: all rewards are lost.
    BothLose,
}

impl DilemmaOutcome {
    /// Percentage of the reward each side receives, as `(first, second)`.
    ///
    /// The split is nominal: the Twins may still void it.
    pub const fn reward_share_pct(self) -> (u32, u32) {
        match self {
            Self::SplitReward => (50, 50),
            Self::FirstTakesAll => (100, 0),
            Self::SecondTakesAll => (0, 100),
            Self::BothLose => (0, 0),
        }
    }
}
