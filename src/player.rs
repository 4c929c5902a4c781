//! Player state: hand, revealed cards and drinks.

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::Card;
use crate::error::RevealError;

/// A player taking part in the game.
#[derive(Debug, Clone)]
pub struct Player {
    /// Display name. Names are expected to be unique but this is not enforced.
    name: String,
    /// Cards dealt to the player.
    hand: Vec<Card>,
    /// Indices into `hand` that have been shown to the table.
    revealed: HashSet<usize>,
    /// Total drinks taken so far.
    drinks_taken: u32,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            revealed: HashSet::new(),
            drinks_taken: 0,
        }
    }

    /// Adds dealt cards to the hand.
    pub fn receive(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    /// Shows the card at `index` and returns it.
    ///
    /// Revealing an already revealed card is allowed and returns it again.
    ///
    /// # Errors
    ///
    /// Returns [`RevealError::IndexOutOfBounds`] if `index` is not a hand
    /// position.
    pub fn reveal(&mut self, index: usize) -> Result<Card, RevealError> {
        let card = self.card(index)?;
        self.revealed.insert(index);
        Ok(card)
    }

    /// Returns the card at `index` without revealing it.
    ///
    /// # Errors
    ///
    /// Returns [`RevealError::IndexOutOfBounds`] if `index` is not a hand
    /// position.
    pub fn card(&self, index: usize) -> Result<Card, RevealError> {
        self.hand
            .get(index)
            .copied()
            .ok_or(RevealError::IndexOutOfBounds {
                index,
                hand_size: self.hand.len(),
            })
    }

    /// Adds `amount` to the drink count.
    pub const fn drink(&mut self, amount: u32) {
        self.drinks_taken = self.drinks_taken.saturating_add(amount);
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the revealed hand indices in ascending order.
    #[must_use]
    pub fn revealed(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.revealed.iter().copied().collect();
        indices.sort_unstable();
        indices
    }

    /// Returns whether the card at `index` has been revealed.
    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    /// Returns the number of drinks taken.
    #[must_use]
    pub const fn drinks_taken(&self) -> u32 {
        self.drinks_taken
    }

    /// Replaces the whole player state with saved values.
    pub(crate) fn restore(
        &mut self,
        hand: Vec<Card>,
        revealed: impl IntoIterator<Item = usize>,
        drinks_taken: u32,
    ) {
        self.hand = hand;
        self.revealed = revealed.into_iter().collect();
        self.drinks_taken = drinks_taken;
    }
}
