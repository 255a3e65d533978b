//! Error types for deck and round operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards remain in the deck.
    #[error("no cards remain in the deck")]
    Empty,
}

/// Errors that can occur during round transitions.
///
/// Both variants leave the round state exactly as it was: a failed
/// operation never commits a partial mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A draw was required but no cards remain; the round is aborted.
    #[error("no cards remain in the deck")]
    EmptyDeck,
    /// The requested action is not valid in the current phase.
    #[error("action is not valid in the current phase")]
    InvalidTransition,
}

impl From<DeckError> for RoundError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Empty => Self::EmptyDeck,
        }
    }
}
