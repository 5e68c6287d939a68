use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{Hand, HandStatus};

use super::{GameRound, MAX_SPLITS_PER_ROUND, RoundState};

impl GameRound {
    fn ensure_in_play(&self) -> Result<(), ActionError> {
        if self.state == RoundState::PlayerTurn {
            Ok(())
        } else {
            Err(ActionError::NotInPlay)
        }
    }

    /// Moves on from the active hand: to the next unresolved hand if one
    /// remains, otherwise into dealer playout and settlement.
    fn advance_or_finish(&mut self, reenable_double: bool) {
        if self.hands.advance_to_next_active() {
            self.can_double = reenable_double;
        } else {
            self.finish_round();
        }
    }

    /// Player action: Hit (draw a card for the active hand).
    ///
    /// Doubling is no longer available on this hand afterwards. If the hand
    /// busts, play moves to the next unresolved hand or the round ends.
    ///
    /// Returns the drawn card.
    ///
    /// # Errors
    ///
    /// Returns an error, mutating nothing, if no round is in play.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_in_play()?;

        let card = self.shoe.deal();
        // While in play, the cursor always points at an unresolved hand.
        if let Some(hand) = self.hands.active_mut() {
            hand.add_card(card);
        }
        self.can_double = false;

        if self.hands.active().is_some_and(Hand::is_bust) {
            self.advance_or_finish(false);
        }

        Ok(card)
    }

    /// Player action: Stand (resolve the active hand as-is).
    ///
    /// Play moves to the next unresolved hand, which may double again, or the
    /// dealer plays out and the round settles.
    ///
    /// # Errors
    ///
    /// Returns an error, mutating nothing, if no round is in play.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_in_play()?;

        if let Some(hand) = self.hands.active_mut() {
            hand.set_status(HandStatus::Stand);
        }
        self.can_double = false;

        self.advance_or_finish(true);

        Ok(())
    }

    /// Player action: Double down (double the wager, draw exactly one card,
    /// then stand).
    ///
    /// The doubled wager rides into settlement unchanged, so a doubled win or
    /// loss is automatically worth twice the original stake.
    ///
    /// Returns the drawn card.
    ///
    /// # Errors
    ///
    /// Returns an error, mutating nothing, if no round is in play or the
    /// active hand is not eligible to double.
    pub fn double(&mut self) -> Result<Card, ActionError> {
        self.ensure_in_play()?;

        if !self.can_double {
            return Err(ActionError::CannotDouble);
        }

        let card = self.shoe.deal();
        self.can_double = false;

        if let Some(hand) = self.hands.active_mut() {
            hand.double_wager();
            hand.add_card(card);

            // A double that survives is forced to stand.
            if hand.status() == HandStatus::Active {
                hand.set_status(HandStatus::Stand);
            }
        }

        self.advance_or_finish(false);

        Ok(card)
    }

    /// Player action: Split (turn a two-card pair into two hands).
    ///
    /// The active hand is replaced by two new hands, each holding one of the
    /// original cards plus one freshly dealt card and inheriting the original
    /// wager. Play restarts on the first new hand with doubling enabled;
    /// splitting stays off for the rest of the round.
    ///
    /// # Errors
    ///
    /// Returns an error, mutating nothing, if no round is in play or the
    /// active hand is not eligible to split.
    pub fn split(&mut self) -> Result<(), ActionError> {
        self.ensure_in_play()?;

        if !self.can_split {
            return Err(ActionError::CannotSplit);
        }

        if self.hands.len() > MAX_SPLITS_PER_ROUND {
            return Err(ActionError::CannotSplit);
        }

        if self.hands.active().is_none_or(|hand| hand.len() != 2) {
            return Err(ActionError::CannotSplit);
        }

        let first_draw = self.shoe.deal();
        let second_draw = self.shoe.deal();
        self.hands.split_active(first_draw, second_draw);

        self.can_split = false;
        self.can_double = true;

        Ok(())
    }
}
