//! Round result and session statistics types.

use core::fmt;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has the higher value).
    Win,
    /// Player loses (dealer has the higher value or a natural).
    Lose,
    /// Push (tie).
    Push,
    /// Player busted.
    Bust,
    /// Player has a natural blackjack, paid at 3:2.
    Blackjack,
}

impl HandOutcome {
    /// Returns the display label for the outcome.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "WIN",
            Self::Lose => "LOSE",
            Self::Push => "TIE",
            Self::Bust => "BUST",
            Self::Blackjack => "BLACKJACK",
        }
    }
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Settlement of a single player hand against the final dealer hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (relevant for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The wager that rode on the hand (doubled hands carry the doubled
    /// wager here).
    pub wager: usize,
    /// The payout for the hand: positive for a win, negative for a loss,
    /// zero for a push.
    pub payout: isize,
    /// The player's final hand value.
    pub player_value: u8,
}

/// Settlement of an entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player hand, in play order.
    pub hands: Vec<HandResult>,
    /// Sum of the per-hand payouts.
    pub total_payout: isize,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had a natural blackjack.
    pub dealer_blackjack: bool,
}

/// Cumulative session statistics, reset only when the engine is created.
///
/// Each settled hand increments exactly one counter; natural blackjacks and
/// no-bonus 21s count as player wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    /// Hands the player won.
    pub player_wins: u32,
    /// Hands the dealer won.
    pub dealer_wins: u32,
    /// Hands that pushed.
    pub ties: u32,
    /// Cumulative bankroll delta over all settled rounds.
    pub bankroll: isize,
}
