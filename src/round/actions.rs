//! Player actions: hit and stand.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::RoundError;

use super::{Outcome, Phase, RoundState};

impl RoundState {
    /// Player action: Hit (draw a card).
    ///
    /// Valid only during [`Phase::PlayerTurn`]. If the drawn card busts the
    /// hand the round resolves with [`Outcome::DealerWin`]; otherwise the
    /// player may act again.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidTransition`] outside the player's turn
    /// and [`RoundError::EmptyDeck`] if no cards remain. The state is
    /// unchanged on error.
    pub fn hit(&mut self) -> Result<Card, RoundError> {
        if self.phase != Phase::PlayerTurn {
            return Err(RoundError::InvalidTransition);
        }

        let card = self.deck.draw()?;
        self.player.add_card(card);

        if self.player.is_bust() {
            self.resolve(Outcome::DealerWin);
        }

        Ok(card)
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// Valid only during [`Phase::PlayerTurn`]. The dealer's play resolves
    /// in the same call: the dealer draws until reaching 17 (soft 17 per
    /// [`RoundOptions::dealer_hits_soft_17`]), the winner is settled, and
    /// the phase becomes [`Phase::Resolved`]. Returns the cards the dealer
    /// drew.
    ///
    /// [`RoundOptions::dealer_hits_soft_17`]: crate::RoundOptions#structfield.dealer_hits_soft_17
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidTransition`] outside the player's turn
    /// and [`RoundError::EmptyDeck`] if the deck empties while the dealer
    /// must draw. The state is unchanged on error.
    pub fn stand(&mut self) -> Result<Vec<Card>, RoundError> {
        if self.phase != Phase::PlayerTurn {
            return Err(RoundError::InvalidTransition);
        }

        // Dealer play commits only on success, so the error path leaves
        // the round still in the player's turn.
        let drawn = self.play_dealer()?;
        self.phase = Phase::DealerTurn;
        self.settle();

        Ok(drawn)
    }
}
