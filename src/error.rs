//! Error types for game operations.
//!
//! Nothing in the engine is fatal: every guard violation is reported as an
//! `Err` with no state mutated, so a display layer can translate declined
//! actions into messages without the engine ever entering an invalid state.

use thiserror::Error;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// A round is currently being played.
    #[error("a round is currently being played")]
    RoundInProgress,
}

/// Errors that can occur when dealing the initial cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBet,
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round is in play.
    #[error("no round is in play")]
    NotInPlay,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
}
