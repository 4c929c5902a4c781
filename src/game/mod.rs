//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use crate::deck::Deck;
use crate::error::SetupError;
use crate::player::Player;
use crate::pyramid::{Pyramid, max_rows, triangular};

pub mod state;
mod turn;

pub use state::GameState;

/// A pyramid drinking game.
///
/// The game owns the players, the pyramid and the rest stack. The deck only
/// exists during construction: it is shuffled once, dealt out completely and
/// dropped.
#[derive(Debug, Clone)]
pub struct Game {
    /// Players in seating order.
    pub(crate) players: Vec<Player>,
    /// Face-down pyramid.
    pub(crate) pyramid: Pyramid,
    /// Cards left over after the pyramid was built. Never drawn from.
    pub(crate) rest_stack: Vec<Card>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidPlayerCount`] unless there are 2 to 12
    /// players.
    ///
    /// # Example
    ///
    /// ```
    /// use pyramid_game::Game;
    ///
    /// let game = Game::new(["A", "B", "C"], 42).unwrap();
    /// assert_eq!(game.pyramid().height(), 8);
    /// assert_eq!(game.rest_stack().len(), 4);
    /// ```
    pub fn new<I, S>(names: I, seed: u64) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(names, &mut rng)
    }

    /// Creates a new game, shuffling with the given random source.
    ///
    /// Each player is dealt four cards in seating order. The largest pyramid
    /// that fits in the remaining cards is built next, and whatever is left
    /// becomes the rest stack.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidPlayerCount`] unless there are 2 to 12
    /// players.
    pub fn with_rng<I, S, R>(names: I, rng: &mut R) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: Rng + ?Sized,
    {
        let mut players: Vec<Player> = names.into_iter().map(Player::new).collect();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
            return Err(SetupError::InvalidPlayerCount(players.len()));
        }

        let mut deck = Deck::new()?;
        deck.shuffle(rng);

        for player in &mut players {
            player.receive(deck.deal(HAND_SIZE)?);
        }

        let rows = max_rows(deck.len());
        let pyramid = Pyramid::new(deck.deal(triangular(rows))?, rows);
        let rest_stack = deck.deal(deck.len())?;

        debug!(
            "game set up: {} players, {} pyramid rows, {} rest cards",
            players.len(),
            rows,
            rest_stack.len()
        );

        Ok(Self {
            players,
            pyramid,
            rest_stack,
        })
    }

    /// Reveals the next pyramid card.
    ///
    /// Returns `None` once the pyramid is exhausted; this ends the game.
    pub fn reveal_next_card(&mut self) -> Option<Card> {
        let card = self.pyramid.next_card();
        if let Some(card) = card {
            trace!("revealed {card}");
        }
        card
    }

    /// Returns the next pyramid card without revealing it.
    #[must_use]
    pub fn peek_next_card(&self) -> Option<Card> {
        self.pyramid.peek()
    }

    /// Returns the players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `index`.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the index of the first player called `name`.
    #[must_use]
    pub fn find_player(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|player| player.name() == name)
    }

    /// Returns player indices ordered by drinks taken, most first.
    ///
    /// Ties keep seating order.
    #[must_use]
    pub fn standings(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.players.len()).collect();
        order.sort_by_key(|&index| core::cmp::Reverse(self.players[index].drinks_taken()));
        order
    }

    /// Returns the pyramid.
    #[must_use]
    pub const fn pyramid(&self) -> &Pyramid {
        &self.pyramid
    }

    /// Returns the rest stack.
    #[must_use]
    pub fn rest_stack(&self) -> &[Card] {
        &self.rest_stack
    }

    /// Returns the number of pyramid cards not yet revealed.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.pyramid.remaining()
    }

    /// Returns the current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.pyramid.is_exhausted() {
            GameState::Finished
        } else {
            GameState::InProgress
        }
    }

    /// Returns whether every pyramid card has been revealed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.pyramid.is_exhausted()
    }
}
