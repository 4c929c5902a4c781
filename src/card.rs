//! Card types and deck constants.

use core::fmt;

use alloc::string::String;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the lowercase name used in saved games.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
            Self::Spades => "spades",
        }
    }

    /// Parses a suit from its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|suit| suit.name() == name)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const RANK_SYMBOLS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// have no symbol and render as `?`.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the rank symbol (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        (self.rank as usize)
            .checked_sub(1)
            .and_then(|index| RANK_SYMBOLS.get(index))
            .copied()
            .unwrap_or("?")
    }

    /// Parses a card from a rank symbol and a suit name.
    ///
    /// ```
    /// use pyramid_game::{Card, Suit};
    ///
    /// assert_eq!(Card::from_symbols("Q", "clubs"), Some(Card::new(Suit::Clubs, 12)));
    /// assert_eq!(Card::from_symbols("1", "clubs"), None);
    /// ```
    #[must_use]
    pub fn from_symbols(rank: &str, suit: &str) -> Option<Self> {
        let index = RANK_SYMBOLS.iter().position(|symbol| *symbol == rank)?;
        let suit = Suit::from_name(suit)?;
        Some(Self::new(suit, index as u8 + 1))
    }

    /// Returns whether both cards share a rank. Suits are ignored by the game.
    #[must_use]
    pub const fn same_rank(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.symbol(), self.suit)
    }
}

// Saved games store cards as `[rank, suit]` pairs.
impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.symbol(), self.suit.name()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (rank, suit) = <(String, String)>::deserialize(deserializer)?;
        Self::from_symbols(&rank, &suit)
            .ok_or_else(|| D::Error::custom(format_args!("invalid card [{rank:?}, {suit:?}]")))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards dealt to each player.
pub const HAND_SIZE: usize = 4;

/// Fewest players a game accepts.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game accepts (12 hands of four still leave a pyramid).
pub const MAX_PLAYERS: usize = 12;
