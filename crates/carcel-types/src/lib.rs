//! Shared type definitions for the Carcel de los Gemelos simulation.
//!
//! This crate is the single source of truth for the data passed between the
//! rule functions, the day cycle, and the engine binary. It holds no logic
//! beyond rendering and small lookups.
//!
//! # Modules
//!
//! - [`enums`] -- Archetypes, noise tortures, dilemma choices and outcomes
//! - [`structs`] -- The mutable [`Player`] record
//! - [`narration`] -- Typed play-by-play lines emitted by the rules

pub mod enums;
pub mod narration;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Archetype, Choice, DilemmaOutcome, NoiseType};
pub use narration::Narration;
pub use structs::Player;
