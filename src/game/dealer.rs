use crate::result::{HandOutcome, HandResult, RoundResult};

use super::{BLACKJACK_PAYS, DEALER_STANDS_AT, GameRound, RoundState};

impl GameRound {
    /// Ends the round: reveals the hole card, plays out the dealer's hand
    /// where required, settles every player hand, and updates the session
    /// statistics.
    pub(super) fn finish_round(&mut self) {
        self.dealer.reveal_hole();

        // The dealer only draws against hands that stood. A round ended by
        // busting every hand, or by an immediate natural, leaves the dealer
        // pat, so a busted player hand never faces a dealer bust.
        if self.hands.any_standing() {
            while self.dealer.value() < DEALER_STANDS_AT {
                let card = self.shoe.deal();
                self.dealer.add_card(card);
            }
        }

        self.settle();
        self.can_double = false;
        self.can_split = false;
        self.state = RoundState::RoundOver;
    }

    /// Settles every player hand independently against the final dealer hand
    /// and accumulates the round payout into the bankroll.
    #[expect(
        clippy::cast_possible_wrap,
        reason = "payout values fit in isize"
    )]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for wager values"
    )]
    fn settle(&mut self) {
        let dealer_value = self.dealer.value();
        let dealer_bust = self.dealer.is_bust();
        let dealer_blackjack = self.dealer.is_blackjack();

        let mut hand_results = Vec::new();
        let mut total_payout: isize = 0;

        for (hand_index, hand) in self.hands.hands().iter().enumerate() {
            let wager = hand.wager();
            let stake = wager as isize;
            let player_value = hand.value();

            let (outcome, payout) = if hand.is_bust() {
                (HandOutcome::Bust, -stake)
            } else if dealer_bust {
                (HandOutcome::Win, stake)
            } else if hand.is_blackjack() && !dealer_blackjack {
                let winnings = (wager as f64 * BLACKJACK_PAYS).floor() as isize;
                (HandOutcome::Blackjack, winnings)
            } else if player_value == 21 && !hand.is_blackjack() && !dealer_blackjack {
                // A split hand can hold a two-card 21; it pays even money,
                // never the 3:2 bonus.
                (HandOutcome::Win, stake)
            } else if dealer_blackjack && !hand.is_blackjack() {
                (HandOutcome::Lose, -stake)
            } else if player_value > dealer_value {
                (HandOutcome::Win, stake)
            } else if dealer_value > player_value {
                (HandOutcome::Lose, -stake)
            } else {
                (HandOutcome::Push, 0)
            };

            match outcome {
                HandOutcome::Win | HandOutcome::Blackjack => self.stats.player_wins += 1,
                HandOutcome::Lose | HandOutcome::Bust => self.stats.dealer_wins += 1,
                HandOutcome::Push => self.stats.ties += 1,
            }

            total_payout += payout;

            hand_results.push(HandResult {
                hand_index,
                outcome,
                wager,
                payout,
                player_value,
            });
        }

        self.stats.bankroll += total_payout;

        self.last_result = Some(RoundResult {
            hands: hand_results,
            total_payout,
            dealer_value,
            dealer_bust,
            dealer_blackjack,
        });
    }
}
