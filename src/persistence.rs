//! Saving and loading games as JSON.
//!
//! A saved game holds every player's hand, revealed indices and drink count,
//! the pyramid rows with the cursor, and the rest stack:
//!
//! ```json
//! {
//!   "players": [{"name": "A", "hand": [["7", "hearts"], ...], "revealed": [1], "drinks_taken": 3}],
//!   "pyramid": {"rows": [[["Q", "clubs"], ...], ...], "pos": {"row": 0, "col": 2}},
//!   "rest_stapel": [["2", "spades"]]
//! }
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::card::{Card, HAND_SIZE};
use crate::error::PersistenceError;
use crate::game::Game;
use crate::pyramid::{Pyramid, PyramidPosition};

/// Saved state of a single player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Player name.
    pub name: String,
    /// Cards in hand.
    pub hand: Vec<Card>,
    /// Revealed hand indices, ascending.
    pub revealed: Vec<usize>,
    /// Drinks taken so far.
    pub drinks_taken: u32,
}

/// Saved state of the pyramid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PyramidSnapshot {
    /// Rows, bottom row first.
    pub rows: Vec<Vec<Card>>,
    /// Next card to reveal.
    pub pos: PyramidPosition,
}

/// Saved state of a whole game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Players in seating order.
    pub players: Vec<PlayerSnapshot>,
    /// The pyramid.
    pub pyramid: PyramidSnapshot,
    /// Leftover cards.
    #[serde(rename = "rest_stapel")]
    pub rest_stack: Vec<Card>,
}

// Only the shuffle of the throwaway setup deal uses this; its cards are all
// replaced by the snapshot.
const RESTORE_SEED: u64 = 0;

impl Game {
    /// Captures the full game state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let players = self
            .players()
            .iter()
            .map(|player| PlayerSnapshot {
                name: player.name().to_string(),
                hand: player.hand().to_vec(),
                revealed: player.revealed(),
                drinks_taken: player.drinks_taken(),
            })
            .collect();

        GameSnapshot {
            players,
            pyramid: PyramidSnapshot {
                rows: self.pyramid().rows().to_vec(),
                pos: self.pyramid().position(),
            },
            rest_stack: self.rest_stack().to_vec(),
        }
    }

    /// Rebuilds a game from a snapshot.
    ///
    /// A normal setup runs first with the saved player names, then every
    /// hand, the pyramid with its cursor and the rest stack are replaced by
    /// the saved values.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Setup`] if the saved player count is
    /// invalid, [`PersistenceError::InvalidHand`] if a saved hand does not
    /// hold four cards, [`PersistenceError::Pyramid`] if the saved pyramid is
    /// not a triangle or its cursor lies outside it, and
    /// [`PersistenceError::InvalidRevealed`] if a revealed index is not a
    /// position in the saved hand.
    pub fn from_snapshot(snapshot: GameSnapshot) -> Result<Self, PersistenceError> {
        let GameSnapshot {
            players,
            pyramid,
            rest_stack,
        } = snapshot;

        for (player, saved) in players.iter().enumerate() {
            if saved.hand.len() != HAND_SIZE {
                return Err(PersistenceError::InvalidHand {
                    player,
                    found: saved.hand.len(),
                });
            }
            if let Some(&index) = saved.revealed.iter().find(|&&i| i >= saved.hand.len()) {
                return Err(PersistenceError::InvalidRevealed {
                    player,
                    index,
                    hand_size: saved.hand.len(),
                });
            }
        }
        let pyramid = Pyramid::restore(pyramid.rows, pyramid.pos)?;

        let mut rng = ChaCha8Rng::seed_from_u64(RESTORE_SEED);
        let mut game = Self::with_rng(players.iter().map(|p| p.name.clone()), &mut rng)?;

        for (player, saved) in game.players.iter_mut().zip(players) {
            player.restore(saved.hand, saved.revealed, saved.drinks_taken);
        }
        game.pyramid = pyramid;
        game.rest_stack = rest_stack;

        debug!(
            "game restored: {} players, {} pyramid cards remaining",
            game.players.len(),
            game.cards_remaining()
        );

        Ok(game)
    }
}

/// Serializes a game to JSON.
///
/// # Errors
///
/// Returns [`PersistenceError::Json`] if serialization fails.
pub fn to_json(game: &Game) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(&game.snapshot())?)
}

/// Rebuilds a game from JSON produced by [`to_json`].
///
/// # Errors
///
/// Returns [`PersistenceError::Json`] for malformed input and any error of
/// [`Game::from_snapshot`].
pub fn from_json(json: &str) -> Result<Game, PersistenceError> {
    let snapshot: GameSnapshot = serde_json::from_str(json)?;
    Game::from_snapshot(snapshot)
}

/// Writes a game to `path` as JSON.
///
/// # Errors
///
/// Returns [`PersistenceError::Io`] if the file cannot be written.
#[cfg(feature = "std")]
pub fn save_game(game: &Game, path: impl AsRef<std::path::Path>) -> Result<(), PersistenceError> {
    std::fs::write(path, to_json(game)?)?;
    Ok(())
}

/// Loads a game written by [`save_game`].
///
/// # Errors
///
/// Returns [`PersistenceError::Io`] if the file cannot be read, and any error
/// of [`from_json`].
#[cfg(feature = "std")]
pub fn load_game(path: impl AsRef<std::path::Path>) -> Result<Game, PersistenceError> {
    let json = std::fs::read_to_string(path)?;
    from_json(&json)
}
