//! Rule logic for the Carcel de los Gemelos simulation.
//!
//! This crate contains the pure stat-update rules -- everything that mutates
//! player state without touching I/O. It sits between `carcel-types` (which
//! defines the data) and `carcel-core` (which sequences days and events).
//!
//! Every rule that needs randomness takes the generator as an explicit
//! `&mut impl Rng` argument so that seeded runs are reproducible. Every rule
//! that narrates takes a [`Narrator`] sink.
//!
//! # Modules
//!
//! - [`betrayal`] -- Betrayal threshold and roll for the endgame
//! - [`config`] -- Tunable rule constants ([`RulesConfig`])
//! - [`day`] -- Archetype-specific day effects
//! - [`dilemma`] -- Duo dilemma resolution and payoff table
//! - [`error`] -- Error types for rule evaluation ([`RuleError`])
//! - [`narrator`] -- The narration sink trait
//! - [`noise`] -- Group-wide noise torture drain
//! - [`player`] -- Player creation with hidden empathy
//! - [`privacy`] -- Two-party privacy breach drain

pub mod betrayal;
pub mod config;
pub mod day;
pub mod dilemma;
pub mod error;
pub mod narrator;
pub mod noise;
pub mod player;
pub mod privacy;

// Re-export primary types at crate root for convenience.
pub use betrayal::{BetrayalRoll, betrayal_check, betrayal_threshold, decide_betrayal};
pub use config::RulesConfig;
pub use day::{DayEffect, apply_day_effect};
pub use dilemma::{DilemmaResult, resolve_dilemma, run_duo_dilemma};
pub use error::RuleError;
pub use narrator::{Narrator, SilentNarrator};
pub use noise::{NoiseDrain, apply_noise_event};
pub use player::spawn_player;
pub use privacy::apply_privacy_drain;
