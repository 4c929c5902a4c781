//! The 52-card deck used during setup.

use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;

/// A standard deck of 52 playing cards.
///
/// The deck only lives while a game is being set up: it is shuffled once and
/// then dealt out completely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck, suit by suit, Ace to King.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidSize`] if the built deck does not hold
    /// exactly [`DECK_SIZE`] cards.
    pub fn new() -> Result<Self, DeckError> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        if cards.len() != DECK_SIZE {
            return Err(DeckError::InvalidSize { found: cards.len() });
        }

        Ok(Self { cards })
    }

    /// Shuffles the remaining cards using the given random source.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes the top `n` cards and returns them in deck order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] if fewer than `n` cards
    /// remain. The deck is left untouched in that case.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }

        Ok(self.cards.drain(..n).collect())
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has been dealt out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
