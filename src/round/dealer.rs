//! Dealer play and settlement.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::RoundError;
use crate::hand::evaluate;

use super::{Outcome, RoundState};

impl RoundState {
    /// Plays out the dealer's hand according to the rules.
    ///
    /// The dealer draws until reaching 17 or higher. On a soft 17 the
    /// dealer draws once more only when `dealer_hits_soft_17` is set.
    ///
    /// The draw loop runs on owned copies of the dealer hand and deck and
    /// commits them only on success, so an exhausted deck cannot leave a
    /// half-played dealer hand behind.
    pub(super) fn play_dealer(&mut self) -> Result<Vec<Card>, RoundError> {
        let mut dealer = self.dealer.clone();
        let mut deck = self.deck.clone();
        let mut drawn = Vec::new();

        loop {
            let (value, is_soft) = evaluate(dealer.cards());

            if value > 17 {
                break;
            }
            if value == 17 && !(is_soft && self.options.dealer_hits_soft_17) {
                break;
            }

            let card = deck.draw()?;
            dealer.add_card(card);
            drawn.push(card);
        }

        self.dealer = dealer;
        self.deck = deck;

        Ok(drawn)
    }

    /// Compares the final hands and resolves the round.
    ///
    /// A dealer bust is a player win. On equal values a two-card 21
    /// outranks a 21 reached with more cards; otherwise equal values push.
    pub(super) fn settle(&mut self) {
        let outcome = if self.dealer.is_bust() {
            Outcome::PlayerWin
        } else {
            let player = self.player.value();
            let dealer = self.dealer.value();

            if player > dealer {
                Outcome::PlayerWin
            } else if player < dealer {
                Outcome::DealerWin
            } else {
                match (self.player.is_blackjack(), self.dealer.is_blackjack()) {
                    (true, false) => Outcome::PlayerWin,
                    (false, true) => Outcome::DealerWin,
                    _ => Outcome::Push,
                }
            }
        };

        self.resolve(outcome);
    }
}
