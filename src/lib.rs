//! A single-player blackjack rules engine with a Hi-Lo card counting readout.
//!
//! The crate provides a [`GameRound`] type that drives the full round flow:
//! betting, dealing, player actions (hit, stand, double down, split), dealer
//! playout, and per-hand settlement. The [`Shoe`] reshuffles itself at 50%
//! penetration and keeps a Hi-Lo running/true count for display.
//!
//! # Example
//!
//! ```
//! use hilo21::GameRound;
//!
//! let mut game = GameRound::new(42);
//! game.place_bet(10).unwrap();
//! game.deal_initial_cards().unwrap();
//! while !game.round_over() {
//!     let _ = game.stand();
//! }
//! let result = game.last_round().unwrap();
//! println!("payout: {}", result.total_payout);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, BetError, DealError};
pub use game::{BLACKJACK_PAYS, DEALER_STANDS_AT, GameRound, MAX_SPLITS_PER_ROUND, RoundState};
pub use hand::{DealerHand, Hand, HandStatus, PlayerHands};
pub use result::{HandOutcome, HandResult, RoundResult, SessionStats};
pub use shoe::{RESHUFFLE_AT, Shoe};
