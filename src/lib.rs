//! A blackjack round-resolution engine with optional `no_std` support.
//!
//! The crate provides a [`RoundState`] value that carries one round from the
//! opening deal through the player's turn, the dealer's forced play, and the
//! final outcome. There is no table, no betting, and no shared state: every
//! operation takes the state by `&mut self` and either succeeds fully or
//! leaves it untouched, so a caller (web session, CLI, test) can persist a
//! snapshot between actions and replay it later.
//!
//! # Example
//!
//! ```
//! use bjround::{Phase, RoundState};
//!
//! let mut round = RoundState::start(42)?;
//! while round.phase() == Phase::PlayerTurn && round.player().value() < 17 {
//!     round.hit()?;
//! }
//! if round.phase() == Phase::PlayerTurn {
//!     round.stand()?;
//! }
//! assert_eq!(round.phase(), Phase::Resolved);
//! assert!(round.outcome().is_some());
//! # Ok::<(), bjround::RoundError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{DeckError, RoundError};
pub use hand::{Hand, evaluate};
pub use options::RoundOptions;
pub use round::{Outcome, Phase, RoundState};
