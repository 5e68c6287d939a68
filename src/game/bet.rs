use crate::error::{BetError, DealError};
use crate::hand::Hand;

use super::{GameRound, RoundState};

impl GameRound {
    /// Places the wager for the next round.
    ///
    /// On success the player's hands are reset to a single empty hand
    /// carrying the wager, the dealer's hand is cleared, and the engine waits
    /// for [`deal_initial_cards`](Self::deal_initial_cards).
    ///
    /// # Errors
    ///
    /// Returns an error, mutating nothing, if the amount is zero or a round
    /// is currently being played.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo21::GameRound;
    ///
    /// let mut game = GameRound::new(42);
    /// assert!(game.place_bet(25).is_ok());
    /// assert_eq!(game.player_hands().hands()[0].wager(), 25);
    /// ```
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        if self.state == RoundState::PlayerTurn {
            return Err(BetError::RoundInProgress);
        }

        self.hands.reset(amount);
        self.dealer.clear();
        self.can_double = false;
        self.can_split = false;
        self.last_result = None;
        self.state = RoundState::AwaitingBet;

        Ok(())
    }

    /// Deals the opening cards: player, dealer, player, dealer.
    ///
    /// The exact order matters for the count trajectory, not for valuation.
    /// If either side holds a natural blackjack the round settles immediately
    /// with no further player action; otherwise doubling is enabled, and
    /// splitting is enabled when the two player cards share a point value
    /// (ten-value cards of different ranks are split-eligible).
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed or a round is already
    /// dealt.
    pub fn deal_initial_cards(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::AwaitingBet {
            return Err(DealError::InvalidState);
        }

        if self.hands.is_empty() {
            return Err(DealError::NoBet);
        }

        for _ in 0..2 {
            let card = self.shoe.deal();
            if let Some(hand) = self.hands.active_mut() {
                hand.add_card(card);
            }
            let card = self.shoe.deal();
            self.dealer.add_card(card);
        }

        let player_blackjack = self.hands.active().is_some_and(Hand::is_blackjack);
        if player_blackjack || self.dealer.is_blackjack() {
            self.finish_round();
            return Ok(());
        }

        // Any fresh two-card hand may double.
        self.can_double = true;
        self.can_split = self.hands.active().is_some_and(Hand::is_pair);
        self.state = RoundState::PlayerTurn;

        Ok(())
    }
}
