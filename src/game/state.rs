//! Game state types.

/// Game state.
///
/// Setup happens inside construction, so a [`Game`](super::Game) is always
/// observed in one of these two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Pyramid cards remain to be revealed.
    InProgress,
    /// Every pyramid card has been revealed.
    Finished,
}
