//! Turn result types.

use core::fmt;

use alloc::string::String;

use crate::card::Card;

/// How a claim was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// The target believed the claim and drinks one.
    Believed,
    /// The target challenged and the claimer held a matching rank.
    ClaimUpheld,
    /// The target challenged and caught the claimer bluffing.
    BluffCaught,
}

impl OutcomeKind {
    /// Number of drinks this outcome hands out.
    #[must_use]
    pub const fn drinks(self) -> u32 {
        match self {
            Self::Believed => 1,
            Self::ClaimUpheld | Self::BluffCaught => 2,
        }
    }
}

/// Result of a resolved claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// How the claim was resolved.
    pub kind: OutcomeKind,
    /// Index of the player who drinks.
    pub drinker: usize,
    /// Name of the player who drinks.
    pub drinker_name: String,
    /// Number of drinks taken.
    pub drinks: u32,
    /// The card the claimer showed, if the claim was challenged.
    pub shown: Option<Card>,
}

impl fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} drinks {}", self.drinker_name, self.drinks)
    }
}

/// Result of a single turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    /// The pyramid card revealed this turn.
    pub card: Card,
    /// The claim resolution, or `None` if nobody made a claim.
    pub outcome: Option<TurnOutcome>,
}
