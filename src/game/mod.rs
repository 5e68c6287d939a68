//! Game engine and round orchestration.

use crate::hand::{DealerHand, PlayerHands};
use crate::result::{RoundResult, SessionStats};
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::RoundState;

/// Maximum number of splits per round. Re-splitting is not supported: a split
/// hand that pairs up again stays split-ineligible for the rest of the round.
pub const MAX_SPLITS_PER_ROUND: usize = 1;

/// The dealer draws while below this value, with no soft-17 distinction.
pub const DEALER_STANDS_AT: u8 = 17;

/// Payout ratio for a natural blackjack (3:2). Fractional payouts round down.
pub const BLACKJACK_PAYS: f64 = 1.5;

/// A single-player blackjack round engine.
///
/// The engine owns the shoe, the player's hands, the dealer's hand, and the
/// cumulative session statistics. It drives the round flow bet → deal →
/// hit/stand/double/split → dealer playout → settlement, and exposes
/// read-only projections for a display layer.
///
/// Every method runs to completion before the next call; there is no interior
/// mutability and no background work.
#[derive(Debug, Clone)]
pub struct GameRound {
    /// The shoe, including the Hi-Lo count state.
    shoe: Shoe,
    /// The player's hands for the current round.
    hands: PlayerHands,
    /// The dealer's hand for the current round.
    dealer: DealerHand,
    /// Current round state.
    state: RoundState,
    /// Whether the active hand may double down.
    can_double: bool,
    /// Whether the active hand may split.
    can_split: bool,
    /// Cumulative win/loss/tie counters and bankroll delta.
    stats: SessionStats,
    /// Settlement of the most recently finished round.
    last_result: Option<RoundResult>,
}

impl GameRound {
    /// Creates a new engine with a freshly shuffled shoe.
    ///
    /// The seed fully determines the shuffle sequence, which makes play
    /// reproducible for tests; derive the seed from entropy for real play.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo21::{GameRound, RoundState};
    ///
    /// let game = GameRound::new(42);
    /// assert_eq!(game.state(), RoundState::AwaitingBet);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            shoe: Shoe::new(seed),
            hands: PlayerHands::new(),
            dealer: DealerHand::new(),
            state: RoundState::AwaitingBet,
            can_double: false,
            can_split: false,
            stats: SessionStats::default(),
            last_result: None,
        }
    }

    /// Discards the current round and returns to the betting phase,
    /// reshuffling the shoe eagerly if the penetration threshold has been
    /// reached.
    ///
    /// Returns `true` if the shoe was reshuffled, so the display layer can
    /// show a shuffle notice. Callable at any time.
    pub fn start_new_game(&mut self) -> bool {
        let reshuffled = self.shoe.check_and_reshuffle();

        self.hands.clear();
        self.dealer.clear();
        self.can_double = false;
        self.can_split = false;
        self.last_result = None;
        self.state = RoundState::AwaitingBet;

        reshuffled
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns whether the round has ended.
    ///
    /// Full disclosure of the dealer's hand is permitted exactly when this
    /// returns `true`.
    #[must_use]
    pub fn round_over(&self) -> bool {
        self.state == RoundState::RoundOver
    }

    /// Returns whether the active hand may double down.
    #[must_use]
    pub const fn can_double(&self) -> bool {
        self.can_double
    }

    /// Returns whether the active hand may split.
    #[must_use]
    pub const fn can_split(&self) -> bool {
        self.can_split
    }

    /// Returns the shoe, for its remaining-card and count projections.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe mutably.
    ///
    /// Intended for rigging deterministic deals in tests and demos via
    /// [`Shoe::set_cards`].
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Returns the player's hands for the current round.
    #[must_use]
    pub const fn player_hands(&self) -> &PlayerHands {
        &self.hands
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the settlement of the most recently finished round, if any.
    #[must_use]
    pub const fn last_round(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the cumulative session statistics.
    #[must_use]
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }
}
