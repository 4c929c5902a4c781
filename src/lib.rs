//! A pyramid drinking game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals four cards to every player,
//! builds the largest pyramid the remaining cards allow, and resolves
//! claim/challenge turns as the pyramid is revealed card by card.
//!
//! # Example
//!
//! ```
//! use pyramid_game::Game;
//!
//! let mut game = Game::new(["Ann", "Bob"], 42).unwrap();
//! while let Some(card) = game.reveal_next_card() {
//!     println!("{card}");
//! }
//! assert!(game.is_finished());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod persistence;
pub mod player;
pub mod pyramid;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS, Suit};
pub use deck::Deck;
pub use error::{DeckError, PersistenceError, PyramidError, RevealError, SetupError, TurnError};
pub use game::{Game, GameState};
pub use persistence::{GameSnapshot, PlayerSnapshot, PyramidSnapshot, from_json, to_json};
#[cfg(feature = "std")]
pub use persistence::{load_game, save_game};
pub use player::Player;
pub use pyramid::{Pyramid, PyramidPosition};
pub use result::{OutcomeKind, TurnOutcome, TurnResult};
