use alloc::string::ToString;
use log::debug;

use crate::error::TurnError;
use crate::result::{OutcomeKind, TurnOutcome, TurnResult};

use super::Game;

impl Game {
    fn ensure_player(&self, index: usize) -> Result<(), TurnError> {
        if index < self.players.len() {
            Ok(())
        } else {
            Err(TurnError::PlayerNotFound(index))
        }
    }

    /// Plays one turn.
    ///
    /// The next pyramid card is always revealed first. If `claimer`, `target`
    /// or `chosen_index` is `None` the turn is a pass and no outcome is
    /// returned. Otherwise the claimer says they hold the revealed rank at
    /// hand position `chosen_index`:
    ///
    /// - if the target believes it, the target drinks 1;
    /// - if the target challenges, the claimer reveals that card. A matching
    ///   rank makes the target drink 2, anything else makes the claimer
    ///   drink 2.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::NoCardsRemaining`] if the pyramid is exhausted,
    /// [`TurnError::PlayerNotFound`] for an unknown player index and
    /// [`TurnError::Reveal`] if a challenged `chosen_index` is not in the
    /// claimer's hand. A believed claim never looks at the hand.
    /// Nothing is changed when an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use pyramid_game::Game;
    ///
    /// let mut game = Game::new(["Ann", "Bob"], 7).unwrap();
    /// let turn = game.play_turn(Some(0), Some(1), Some(0), true).unwrap();
    /// assert_eq!(turn.outcome.unwrap().to_string(), "Bob drinks 1");
    /// assert_eq!(game.players()[1].drinks_taken(), 1);
    /// ```
    pub fn play_turn(
        &mut self,
        claimer: Option<usize>,
        target: Option<usize>,
        chosen_index: Option<usize>,
        target_believes: bool,
    ) -> Result<TurnResult, TurnError> {
        if self.pyramid.is_exhausted() {
            return Err(TurnError::NoCardsRemaining);
        }

        let claim = match (claimer, target, chosen_index) {
            (Some(claimer), Some(target), Some(index)) => {
                self.ensure_player(claimer)?;
                self.ensure_player(target)?;
                if !target_believes {
                    self.players[claimer].card(index)?;
                }
                Some((claimer, target, index))
            }
            _ => None,
        };

        let card = self
            .reveal_next_card()
            .ok_or(TurnError::NoCardsRemaining)?;

        let Some((claimer, target, index)) = claim else {
            return Ok(TurnResult {
                card,
                outcome: None,
            });
        };

        let (kind, drinker, shown) = if target_believes {
            (OutcomeKind::Believed, target, None)
        } else {
            let shown = self.players[claimer].reveal(index)?;
            if shown.same_rank(&card) {
                (OutcomeKind::ClaimUpheld, target, Some(shown))
            } else {
                (OutcomeKind::BluffCaught, claimer, Some(shown))
            }
        };

        let drinks = kind.drinks();
        let player = &mut self.players[drinker];
        player.drink(drinks);

        let outcome = TurnOutcome {
            kind,
            drinker,
            drinker_name: player.name().to_string(),
            drinks,
            shown,
        };
        debug!("turn on {card}: {kind:?}, {outcome}");

        Ok(TurnResult {
            card,
            outcome: Some(outcome),
        })
    }
}
