//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for a bet to be placed and the cards to be dealt.
    AwaitingBet,
    /// Waiting for player actions on the active hand.
    PlayerTurn,
    /// Round has ended and the settlement is available.
    RoundOver,
}
