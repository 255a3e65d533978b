//! Round phase and outcome types.

/// Phase of a round.
///
/// Phases only ever move forward; [`Resolved`](Self::Resolved) is terminal
/// and a new round requires a new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Phase {
    /// Initial cards are being dealt.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the outcome is set.
    Resolved,
}

/// Final outcome of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Outcome {
    /// Player wins with an opening blackjack.
    PlayerBlackjack,
    /// Player wins (dealer busts or player has the higher value).
    PlayerWin,
    /// Dealer wins (player busts or dealer has the higher value).
    DealerWin,
    /// Push (tie).
    Push,
}
