//! A shuffled single deck of 52 cards.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;

/// A finite, non-replenished sequence of shuffled cards.
///
/// Cards are stored bottom-to-top: the last element is drawn next. A deck
/// is consumed strictly in order and is never refilled; a new round gets a
/// new deck.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a shuffled 52-card deck from the given seed.
    ///
    /// The same seed always yields the same card order, so tests and
    /// replays are deterministic.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::Deck;
    ///
    /// assert_eq!(Deck::shuffled(7), Deck::shuffled(7));
    /// ```
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(&mut rng);
        Self { cards }
    }

    /// Creates a shuffled 52-card deck from a random seed.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn random() -> Self {
        Self::shuffled(rand::random())
    }

    /// Creates a deck from an explicit card sequence.
    ///
    /// The first element of `draws` is drawn first. Intended for stacking
    /// the deck in tests; no uniqueness check is performed.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain. The deck is
    /// unchanged on failure.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the remaining cards, bottom-to-top (the last is drawn next).
    #[must_use]
    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
