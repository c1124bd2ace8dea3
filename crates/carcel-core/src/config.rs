//! Configuration loading and typed config structures for the simulation.
//!
//! The canonical configuration lives in `carcel-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure and a loader that reads and validates the file. Every section
//! has defaults, and the defaults are the canonical prototype run: Frank
//! (Veteran) and Simón (Redeemed), six days, a crying-baby torture and a
//! privacy breach on day 3, then the duo dilemma.

use std::collections::BTreeSet;
use std::path::Path;

use carcel_rules::{RuleError, RulesConfig};
use carcel_types::{Archetype, NoiseType};
use serde::Deserialize;

/// Environment variable overriding `game.seed`.
pub const SEED_ENV: &str = "CARCEL_SEED";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but describes an impossible run.
    #[error("invalid config: {reason}")]
    Invalid {
        /// Explanation of what is wrong.
        reason: String,
    },

    /// The `rules` section is inconsistent.
    #[error("invalid rules section: {source}")]
    Rules {
        /// The underlying rule error.
        #[from]
        source: RuleError,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `carcel-config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Run-level settings (title, seed, length).
    #[serde(default)]
    pub game: GameConfig,

    /// Contestants, in the order rules are applied to them.
    #[serde(default = "default_roster")]
    pub roster: Vec<RosterEntry>,

    /// Mid-run events, applied in list order after the day effects of their day.
    #[serde(default = "default_schedule")]
    pub schedule: Vec<ScheduledEvent>,

    /// The two duelists of the duo dilemma.
    #[serde(default)]
    pub endgame: EndgameConfig,

    /// Rule tunables.
    #[serde(default)]
    pub rules: RulesConfig,

    /// Output rendering.
    #[serde(default)]
    pub narration: NarrationConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            roster: default_roster(),
            schedule: default_schedule(),
            endgame: EndgameConfig::default(),
            rules: RulesConfig::default(),
            narration: NarrationConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Load and validate configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, and
    /// [`ConfigError::Invalid`] or [`ConfigError::Rules`] if validation fails.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, and
    /// [`ConfigError::Invalid`] or [`ConfigError::Rules`] if validation fails.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides:
    /// - `CARCEL_SEED` overrides `game.seed`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the variable is set but is not a
    /// `u64`.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        let seed = std::env::var(SEED_ENV).ok();
        self.apply_seed_override(seed.as_deref())
    }

    /// Override `game.seed` from a raw string, if one is given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the string is not a `u64`.
    pub fn apply_seed_override(&mut self, raw: Option<&str>) -> Result<(), ConfigError> {
        if let Some(raw) = raw {
            let seed = raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                reason: format!("{SEED_ENV} must be an unsigned integer, got {raw:?}: {e}"),
            })?;
            self.game.seed = Some(seed);
        }
        Ok(())
    }

    /// Check that the configuration describes a playable run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Rules`] for inconsistent rule tunables and
    /// [`ConfigError::Invalid`] for everything else: zero days, an empty or
    /// duplicated roster, events outside the season, or references to
    /// unknown players.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rules.validate()?;

        if self.game.days == 0 {
            return Err(invalid("game.days must be at least 1"));
        }

        let mut names = BTreeSet::new();
        for entry in &self.roster {
            if entry.name.trim().is_empty() {
                return Err(invalid("roster entries need a non-empty name"));
            }
            if !names.insert(entry.name.as_str()) {
                return Err(invalid(&format!("duplicate roster name {:?}", entry.name)));
            }
        }
        if names.len() < 2 {
            return Err(invalid("the duo dilemma needs at least two roster entries"));
        }

        let known = |name: &str, field: &str| -> Result<(), ConfigError> {
            if names.contains(name) {
                Ok(())
            } else {
                Err(invalid(&format!("{field} names unknown player {name:?}")))
            }
        };

        for event in &self.schedule {
            let day = event.day();
            if day == 0 || day > self.game.days {
                return Err(invalid(&format!(
                    "scheduled event on day {day} is outside 1..={}",
                    self.game.days
                )));
            }
            if let ScheduledEvent::Privacy { actor, witness, .. } = event {
                known(actor, "schedule.privacy.actor")?;
                known(witness, "schedule.privacy.witness")?;
                if actor == witness {
                    return Err(invalid(&format!(
                        "privacy event on day {day} uses {actor:?} as both actor and witness"
                    )));
                }
            }
        }

        known(&self.endgame.first, "endgame.first")?;
        known(&self.endgame.second, "endgame.second")?;
        if self.endgame.first == self.endgame.second {
            return Err(invalid("endgame duelists must be two different players"));
        }

        Ok(())
    }
}

fn invalid(reason: &str) -> ConfigError {
    ConfigError::Invalid {
        reason: reason.to_owned(),
    }
}

/// Run-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Show title used in the opening banner.
    #[serde(default = "default_game_name")]
    pub name: String,

    /// Random seed for reproducibility. `None` draws a fresh seed per run.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Number of simulated days before the endgame.
    #[serde(default = "default_days")]
    pub days: u32,

    /// In-fiction day label of the endgame heading.
    #[serde(default = "default_endgame_day")]
    pub endgame_day: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            name: default_game_name(),
            seed: None,
            days: default_days(),
            endgame_day: default_endgame_day(),
        }
    }
}

/// One contestant in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterEntry {
    /// Display name, unique within the roster.
    pub name: String,
    /// Archetype name. Unknown names become [`Archetype::Unrecognized`].
    pub archetype: Archetype,
}

impl RosterEntry {
    /// Build a roster entry.
    pub fn new(name: &str, archetype: Archetype) -> Self {
        Self {
            name: name.to_owned(),
            archetype,
        }
    }
}

/// A mid-run event pinned to a specific day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduledEvent {
    /// A group-wide noise torture.
    Noise {
        /// Day the torture happens.
        day: u32,
        /// Torture category (default: siren).
        #[serde(default)]
        noise: NoiseType,
    },
    /// A privacy breach between two players.
    Privacy {
        /// Day the breach happens.
        day: u32,
        /// Player using the toilet.
        actor: String,
        /// Player forced to watch.
        witness: String,
    },
}

impl ScheduledEvent {
    /// Day the event is pinned to.
    pub const fn day(&self) -> u32 {
        match self {
            Self::Noise { day, .. } | Self::Privacy { day, .. } => *day,
        }
    }
}

/// The two duelists of the duo dilemma, by roster name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndgameConfig {
    /// First duelist; rolls first.
    #[serde(default = "default_first_duelist")]
    pub first: String,
    /// Second duelist.
    #[serde(default = "default_second_duelist")]
    pub second: String,
}

impl Default for EndgameConfig {
    fn default() -> Self {
        Self {
            first: default_first_duelist(),
            second: default_second_duelist(),
        }
    }
}

/// How narration is rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrationFormat {
    /// Human-readable lines with blank lines before headings.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Narration configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NarrationConfig {
    /// Output rendering.
    #[serde(default)]
    pub format: NarrationFormat,
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_game_name() -> String {
    "Cárcel de los Gemelos".to_owned()
}

const fn default_days() -> u32 {
    6
}

const fn default_endgame_day() -> u32 {
    21
}

fn default_roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry::new("Frank", Archetype::Veteran),
        RosterEntry::new("Simón", Archetype::Redeemed),
    ]
}

fn default_schedule() -> Vec<ScheduledEvent> {
    vec![
        ScheduledEvent::Noise {
            day: 3,
            noise: NoiseType::CryingBaby,
        },
        ScheduledEvent::Privacy {
            day: 3,
            actor: default_first_duelist(),
            witness: default_second_duelist(),
        },
    ]
}

fn default_first_duelist() -> String {
    "Frank".to_owned()
}

fn default_second_duelist() -> String {
    "Simón".to_owned()
}
