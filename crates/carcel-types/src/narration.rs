//! Typed play-by-play narration.
//!
//! Rules never print. They emit [`Narration`] values into a sink, and the
//! engine decides how to render them: plain text through [`fmt::Display`]
//! or one JSON object per line through `serde`.

use std::fmt;

use serde::Serialize;

use crate::enums::{Choice, DilemmaOutcome, NoiseType};

/// One line of the run's narrated trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Narration {
    /// Banner printed before day 1.
    Opening {
        /// Show title.
        title: String,
    },
    /// A new simulated day begins.
    DayStarted {
        /// Day number, starting at 1.
        day: u32,
    },
    /// Redeemed withdrawal penalty applied.
    Withdrawal {
        /// Affected player.
        name: String,
        /// Day of the withdrawal.
        day: u32,
        /// Sanity change applied.
        delta: i32,
    },
    /// Redeemed clarity bonus applied.
    Clarity {
        /// Affected player.
        name: String,
        /// Sanity change applied.
        delta: i32,
    },
    /// Veteran disliked socializing.
    SmallTalk {
        /// Affected player.
        name: String,
        /// Sanity change applied.
        delta: i32,
    },
    /// Veteran enjoyed the silence.
    Silence {
        /// Affected player.
        name: String,
        /// Sanity change applied.
        delta: i32,
    },
    /// The Twins start an audio torture.
    NoiseStarted {
        /// Torture category.
        noise: NoiseType,
    },
    /// A Mystic halves the incoming noise drain.
    NoiseDoubted {
        /// Mystic player.
        name: String,
    },
    /// Sanity after a noise drain.
    SanityDrained {
        /// Affected player.
        name: String,
        /// Sanity after the drain.
        sanity: i32,
    },
    /// Heading for the privacy breach mechanic.
    PrivacyBreachStarted,
    /// The actor uses the open-air toilet.
    ToiletUsed {
        /// Player using the toilet.
        actor: String,
    },
    /// Both parties of a privacy breach lose sanity.
    PrivacyDrained {
        /// Player who lost dignity.
        actor: String,
        /// Player who had to watch.
        witness: String,
        /// Sanity change applied to the actor.
        actor_delta: i32,
        /// Sanity change applied to the witness.
        witness_delta: i32,
    },
    /// Heading for the pre-endgame standings block.
    StandingsStarted {
        /// Last day played.
        day: u32,
    },
    /// One player's public summary line.
    Standing {
        /// Rendered player summary (empathy excluded).
        summary: String,
    },
    /// The duo dilemma begins.
    EndgameStarted {
        /// In-fiction day label of the endgame.
        day: u32,
    },
    /// One player's betrayal roll against their threshold.
    BetrayalRoll {
        /// Rolling player.
        name: String,
        /// Uniform roll.
        roll: i32,
        /// Threshold the roll must exceed to betray.
        threshold: i32,
    },
    /// A player's choice is revealed.
    ChoiceRevealed {
        /// Choosing player.
        name: String,
        /// The choice.
        choice: Choice,
    },
    /// Final payoff of the dilemma.
    DilemmaResolved {
        /// First duelist.
        first: String,
        /// Second duelist.
        second: String,
        /// Resolved outcome.
        outcome: DilemmaOutcome,
    },
}

impl Narration {
    /// Whether the line opens a new block of the trace.
    ///
    /// Text renderers put a blank line before headings.
    pub const fn is_heading(&self) -> bool {
        matches!(
            self,
            Self::Opening { .. }
                | Self::DayStarted { .. }
                | Self::NoiseStarted { .. }
                | Self::PrivacyBreachStarted
                | Self::StandingsStarted { .. }
                | Self::EndgameStarted { .. }
        )
    }
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opening { title } => write!(f, "=== {title} ==="),
            Self::DayStarted { day } => write!(f, "--- DAY {day} ---"),
            Self::Withdrawal { name, day, delta } => write!(
                f,
                "> [DEBUFF] {name} is in WITHDRAWAL (Day {day}). Sanity {delta:+}, stamina low."
            ),
            Self::Clarity { name, delta } => write!(
                f,
                "> [BUFF] {name} attained CLARITY. Sanity {delta:+}, stat multiplier active."
            ),
            Self::SmallTalk { name, delta } => write!(
                f,
                "> [TRAIT] {name} (Veteran) hated the small talk. Sanity {delta:+}."
            ),
            Self::Silence { name, delta } => write!(
                f,
                "> [TRAIT] {name} (Veteran) enjoyed the silence. Sanity {delta:+}."
            ),
            Self::NoiseStarted { noise } => write!(
                f,
                "--- [EVENT] THE TWINS ACTIVATE: {} TORTURE ---",
                noise.label().to_uppercase()
            ),
            Self::NoiseDoubted { name } => write!(
                f,
                "> {name} (Mystic) uses 'Reality Distortion' to doubt the noise. Drain halved."
            ),
            Self::SanityDrained { name, sanity } => {
                write!(f, "> {name} sanity drained to {sanity}.")
            }
            Self::PrivacyBreachStarted => {
                f.write_str("--- [MECHANIC] PRIVACY BREACH: TOILET USE ---")
            }
            Self::ToiletUsed { actor } => write!(f, "{actor} is using the open-air toilet."),
            Self::PrivacyDrained {
                actor,
                witness,
                actor_delta,
                witness_delta,
            } => write!(
                f,
                "> {actor} (User) loses dignity, sanity {actor_delta:+}. \
                 {witness} (Witness) stress, sanity {witness_delta:+}."
            ),
            Self::StandingsStarted { day } => write!(f, "--- STANDINGS AFTER DAY {day} ---"),
            Self::Standing { summary } => write!(f, "  {summary}"),
            Self::EndgameStarted { day } => {
                write!(f, "--- [ENDGAME] DAY {day}: THE DUO DILEMMA ---")
            }
            Self::BetrayalRoll {
                name,
                roll,
                threshold,
            } => write!(f, "> {name} betrayal roll: {roll} vs threshold: {threshold}"),
            Self::ChoiceRevealed { name, choice } => write!(f, "{name} chooses to {choice}"),
            Self::DilemmaResolved {
                first,
                second,
                outcome,
            } => {
                let (first_pct, second_pct) = outcome.reward_share_pct();
                match outcome {
                    DilemmaOutcome::SplitReward => write!(
                        f,
                        "RESULT: Both split the reward {first_pct}/{second_pct}. VICTORY (unless the Twins prohibit)."
                    ),
                    DilemmaOutcome::FirstTakesAll => {
                        write!(f, "RESULT: {first} BETRAYS! {first} wins {first_pct}%.")
                    }
                    DilemmaOutcome::SecondTakesAll => {
                        write!(f, "RESULT: {second} BETRAYS! {second} wins {second_pct}%.")
                    }
                    DilemmaOutcome::BothLose => {
                        f.write_str("RESULT: BOTH BETRAY. Total rewards lost.")
                    }
                }
            }
        }
    }
}
