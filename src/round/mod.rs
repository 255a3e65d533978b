//! Round state machine.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::options::RoundOptions;

mod actions;
mod dealer;
pub mod phase;

pub use phase::{Outcome, Phase};

/// The full state of one blackjack round.
///
/// A round is created by dealing, advanced by [`hit`](Self::hit) and
/// [`stand`](Self::stand), and becomes immutable once resolved. The state
/// is a plain value: cloning it snapshots the round, and with the `serde`
/// feature it serializes to a flat record (`player_cards`, `dealer_cards`,
/// `deck`, `phase`, `outcome`) that a caller can persist and reload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundState {
    /// The player's hand.
    #[cfg_attr(feature = "serde", serde(rename = "player_cards"))]
    player: Hand,
    /// The dealer's hand.
    #[cfg_attr(feature = "serde", serde(rename = "dealer_cards"))]
    dealer: Hand,
    /// Cards remaining for this round.
    deck: Deck,
    /// Round configuration.
    #[cfg_attr(feature = "serde", serde(default))]
    options: RoundOptions,
    /// Current phase.
    phase: Phase,
    /// Final outcome; set exactly when the phase is [`Phase::Resolved`].
    outcome: Option<Outcome>,
}

impl RoundState {
    /// Starts a round from a seeded deck with default options.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::EmptyDeck`] if the deck runs out during the
    /// deal (cannot happen with a full 52-card deck).
    pub fn start(seed: u64) -> Result<Self, RoundError> {
        Self::deal(Deck::shuffled(seed), RoundOptions::default())
    }

    /// Starts a round from a randomly seeded deck with default options.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::EmptyDeck`] if the deck runs out during the
    /// deal (cannot happen with a full 52-card deck).
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn start_random() -> Result<Self, RoundError> {
        Self::deal(Deck::random(), RoundOptions::default())
    }

    /// Deals the opening hands from the given deck.
    ///
    /// Two cards go to each party, alternating player, dealer, player,
    /// dealer. If the player's opening hand is a blackjack the round
    /// resolves immediately: a matching dealer blackjack is a push,
    /// otherwise the player wins with [`Outcome::PlayerBlackjack`].
    /// Otherwise the round enters [`Phase::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::EmptyDeck`] if the deck holds fewer than four
    /// cards.
    pub fn deal(mut deck: Deck, options: RoundOptions) -> Result<Self, RoundError> {
        let mut player = Hand::new();
        let mut dealer = Hand::new();

        player.add_card(deck.draw()?);
        dealer.add_card(deck.draw()?);
        player.add_card(deck.draw()?);
        dealer.add_card(deck.draw()?);

        let mut state = Self {
            player,
            dealer,
            deck,
            options,
            phase: Phase::Dealing,
            outcome: None,
        };

        if state.player.is_blackjack() {
            let outcome = if state.dealer.is_blackjack() {
                Outcome::Push
            } else {
                Outcome::PlayerBlackjack
            };
            state.resolve(outcome);
        } else {
            state.phase = Phase::PlayerTurn;
        }

        Ok(state)
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the outcome, if the round has resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the dealer's visible card (the first one dealt).
    ///
    /// Front ends typically show only this card until the player stands.
    #[must_use]
    pub fn dealer_upcard(&self) -> Option<&Card> {
        self.dealer.cards().first()
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> RoundOptions {
        self.options
    }

    /// Sets the outcome and moves to the terminal phase.
    const fn resolve(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.phase = Phase::Resolved;
    }
}
