//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while building or dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The freshly built deck does not hold exactly 52 cards.
    #[error("deck must contain 52 cards, found {found}")]
    InvalidSize {
        /// Number of cards actually built.
        found: usize,
    },
    /// Not enough cards left to deal.
    #[error("not enough cards to deal: requested {requested}, {remaining} remaining")]
    InsufficientCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Player count outside 2..=12.
    #[error("a game needs between 2 and 12 players, got {0}")]
    InvalidPlayerCount(usize),
    /// Dealing failed.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur when revealing a card from a player's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RevealError {
    /// Hand index out of bounds.
    #[error("hand index {index} out of bounds for a hand of {hand_size} cards")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of cards in the hand.
        hand_size: usize,
    },
}

/// Errors that can occur while playing a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The pyramid has no cards left.
    #[error("no cards remaining in the pyramid")]
    NoCardsRemaining,
    /// Player not found.
    #[error("player {0} not found")]
    PlayerNotFound(usize),
    /// The chosen hand card does not exist.
    #[error(transparent)]
    Reveal(#[from] RevealError),
}

/// Errors that can occur when restoring a pyramid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PyramidError {
    /// A row does not have the size a triangle requires.
    #[error("row {row} has {found} cards, expected {expected}")]
    InvalidRow {
        /// Row index (bottom row is 0).
        row: usize,
        /// Expected number of cards.
        expected: usize,
        /// Actual number of cards.
        found: usize,
    },
    /// The cursor does not point inside the pyramid.
    #[error("cursor ({row}, {col}) is outside the pyramid")]
    InvalidPosition {
        /// Cursor row.
        row: usize,
        /// Cursor column.
        col: usize,
    },
}

/// Errors that can occur when saving or loading a game.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The saved data is not valid JSON or has the wrong shape.
    #[error("invalid saved game: {0}")]
    Json(#[from] serde_json::Error),
    /// Rebuilding the game from the saved player names failed.
    #[error(transparent)]
    Setup(#[from] SetupError),
    /// The saved pyramid is malformed.
    #[error(transparent)]
    Pyramid(#[from] PyramidError),
    /// A saved player does not hold exactly four cards.
    #[error("player {player} has {found} cards in hand, expected 4")]
    InvalidHand {
        /// Player index.
        player: usize,
        /// Number of cards in the saved hand.
        found: usize,
    },
    /// A saved player marks a hand index that does not exist.
    #[error("player {player} has revealed index {index} outside a hand of {hand_size} cards")]
    InvalidRevealed {
        /// Player index.
        player: usize,
        /// Offending revealed index.
        index: usize,
        /// Number of cards in the saved hand.
        hand_size: usize,
    },
    /// Reading or writing the save file failed.
    #[cfg(feature = "std")]
    #[error("save file i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
