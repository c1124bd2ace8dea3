//! The duo dilemma: a one-shot simultaneous cooperate/betray decision.
//!
//! Each duelist rolls an independent betrayal check (first duelist first),
//! and the pair of choices maps onto a fixed payoff table:
//!
//! | first     | second    | outcome                          |
//! |-----------|-----------|----------------------------------|
//! | Cooperate | Cooperate | split (unless the Twins prohibit) |
//! | Betray    | Cooperate | first takes 100%                 |
//! | Cooperate | Betray    | second takes 100%                |
//! | Betray    | Betray    | both lose everything             |

use carcel_types::{Choice, DilemmaOutcome, Narration, Player};
use rand::Rng;
use tracing::info;

use crate::betrayal::{BetrayalRoll, betrayal_check};
use crate::config::RulesConfig;
use crate::error::RuleError;
use crate::narrator::Narrator;

/// Everything that happened in a resolved duo dilemma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DilemmaResult {
    /// First duelist's betrayal check.
    pub first: BetrayalRoll,
    /// Second duelist's betrayal check.
    pub second: BetrayalRoll,
    /// First duelist's choice.
    pub first_choice: Choice,
    /// Second duelist's choice.
    pub second_choice: Choice,
    /// Payoff from the table.
    pub outcome: DilemmaOutcome,
}

/// Map a pair of choices onto the payoff table.
pub const fn resolve_dilemma(first: Choice, second: Choice) -> DilemmaOutcome {
    match (first.is_betrayal(), second.is_betrayal()) {
        (false, false) => DilemmaOutcome::SplitReward,
        (true, false) => DilemmaOutcome::FirstTakesAll,
        (false, true) => DilemmaOutcome::SecondTakesAll,
        (true, true) => DilemmaOutcome::BothLose,
    }
}

/// Run the endgame between two players.
///
/// `endgame_day` only labels the narration heading.
///
/// # Errors
///
/// Propagates any [`RuleError`] from the betrayal checks.
pub fn run_duo_dilemma(
    first: &Player,
    second: &Player,
    endgame_day: u32,
    config: &RulesConfig,
    rng: &mut impl Rng,
    narrator: &mut dyn Narrator,
) -> Result<DilemmaResult, RuleError> {
    narrator.narrate(Narration::EndgameStarted { day: endgame_day });

    let first_roll = betrayal_check(first, config, rng, narrator)?;
    let second_roll = betrayal_check(second, config, rng, narrator)?;

    let first_choice = Choice::from_betrayal(first_roll.betrays);
    let second_choice = Choice::from_betrayal(second_roll.betrays);

    narrator.narrate(Narration::ChoiceRevealed {
        name: first.name.clone(),
        choice: first_choice,
    });
    narrator.narrate(Narration::ChoiceRevealed {
        name: second.name.clone(),
        choice: second_choice,
    });

    let outcome = resolve_dilemma(first_choice, second_choice);
    info!(
        first = first.name,
        second = second.name,
        %first_choice,
        %second_choice,
        ?outcome,
        "duo dilemma resolved"
    );
    narrator.narrate(Narration::DilemmaResolved {
        first: first.name.clone(),
        second: second.name.clone(),
        outcome,
    });

    Ok(DilemmaResult {
        first: first_roll,
        second: second_roll,
        first_choice,
        second_choice,
        outcome,
    })
}
