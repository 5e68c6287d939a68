//! Game integration tests.

use std::collections::HashSet;

use hilo21::{
    ActionError, BetError, Card, DECK_SIZE, DealError, DealerHand, GameRound, Hand, HandOutcome,
    HandStatus, RoundState, Shoe, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Loads scripted draws into the shoe, padded with filler below them so the
/// penetration check never fires while the script plays out.
fn rig_shoe(game: &mut GameRound, draws: &[Card]) {
    let mut cards = vec![card(Suit::Clubs, 2); 40];
    let mut scripted: Vec<Card> = draws.to_vec();
    scripted.reverse();
    cards.extend(scripted);
    game.shoe_mut().set_cards(cards);
}

#[test]
fn hand_valuation_handles_soft_aces() {
    let mut hand = Hand::new(10);
    hand.add_card(card(Suit::Hearts, 1));
    hand.add_card(card(Suit::Spades, 1));
    assert_eq!(hand.value(), 12);
    assert!(hand.is_soft());

    hand.add_card(card(Suit::Diamonds, 1));
    hand.add_card(card(Suit::Clubs, 8));
    assert_eq!(hand.value(), 11);
    assert!(!hand.is_bust());
    assert!(!hand.is_soft());
}

#[test]
fn hand_bust_iff_over_21() {
    let mut hand = Hand::new(5);
    hand.add_card(card(Suit::Hearts, 10));
    hand.add_card(card(Suit::Spades, 10));
    assert!(!hand.is_bust());

    hand.add_card(card(Suit::Diamonds, 2));
    assert!(hand.is_bust());
    assert_eq!(hand.status(), HandStatus::Bust);
}

#[test]
fn natural_blackjack_requires_unsplit_two_card_21() {
    let mut hand = Hand::new(10);
    hand.add_card(card(Suit::Hearts, 1));
    hand.add_card(card(Suit::Spades, 13));
    assert_eq!(hand.value(), 21);
    assert!(hand.is_blackjack());
    assert_eq!(hand.status(), HandStatus::Blackjack);

    let mut split_hand = Hand::from_split(card(Suit::Hearts, 1), 10);
    split_hand.add_card(card(Suit::Clubs, 13));
    assert_eq!(split_hand.value(), 21);
    assert!(!split_hand.is_blackjack());
    assert_eq!(split_hand.status(), HandStatus::Active);
}

#[test]
fn pairs_compare_point_values_not_ranks() {
    let mut hand = Hand::new(10);
    hand.add_card(card(Suit::Hearts, 10));
    hand.add_card(card(Suit::Spades, 13));
    assert!(hand.is_pair());

    let mut other = Hand::new(10);
    other.add_card(card(Suit::Hearts, 9));
    other.add_card(card(Suit::Spades, 10));
    assert!(!other.is_pair());
}

#[test]
fn dealer_hand_conceals_first_card_until_revealed() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Suit::Hearts, 1));
    dealer.add_card(card(Suit::Clubs, 6));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_cards(), &[card(Suit::Clubs, 6)]);
    assert_eq!(dealer.visible_value(), 6);
    assert_eq!(dealer.value(), 17);

    dealer.reveal_hole();
    assert_eq!(dealer.visible_cards().len(), 2);
    assert_eq!(dealer.visible_value(), 17);
    assert!(dealer.is_soft());
}

#[test]
fn shoe_reshuffles_at_penetration_with_no_duplicates() {
    let mut shoe = Shoe::new(1);
    assert_eq!(shoe.remaining(), DECK_SIZE);

    let mut dealt = HashSet::new();
    for _ in 0..26 {
        assert!(dealt.insert(shoe.deal()));
    }
    assert_eq!(shoe.remaining(), 26);

    // The next deal crosses the 50% penetration threshold.
    let first_of_new_deck = shoe.deal();
    assert_eq!(shoe.remaining(), DECK_SIZE - 1);
    assert_eq!(
        shoe.running_count(),
        first_of_new_deck.count_value(),
        "the running count restarts with the fresh deck"
    );
}

#[test]
fn shoe_true_count_tracks_decks_remaining() {
    let mut shoe = Shoe::new(3);
    assert_eq!(shoe.running_count(), 0);
    assert!(shoe.true_count().abs() < f64::EPSILON);

    // 51 filler low cards under a king on top.
    let mut cards = vec![card(Suit::Clubs, 7); 51];
    cards.push(card(Suit::Spades, 13));
    shoe.set_cards(cards);

    let dealt = shoe.deal();
    assert_eq!(dealt.rank, 13);
    assert_eq!(shoe.running_count(), -1);
    let expected = -1.0 / (51.0 / 52.0);
    assert!((shoe.true_count() - expected).abs() < 1e-9);
}

#[test]
fn empty_shoe_true_count_is_zero_and_dealing_reshuffles() {
    let mut shoe = Shoe::new(5);
    shoe.set_cards(Vec::new());
    assert!(shoe.true_count().abs() < f64::EPSILON);

    let _ = shoe.deal();
    assert_eq!(shoe.remaining(), DECK_SIZE - 1);
}

#[test]
fn bet_and_deal_guards_decline_without_mutation() {
    let mut game = GameRound::new(9);

    assert_eq!(game.place_bet(0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(game.deal_initial_cards().unwrap_err(), DealError::NoBet);
    assert_eq!(game.hit().unwrap_err(), ActionError::NotInPlay);
    assert_eq!(game.stand().unwrap_err(), ActionError::NotInPlay);
    assert_eq!(game.double().unwrap_err(), ActionError::NotInPlay);
    assert_eq!(game.split().unwrap_err(), ActionError::NotInPlay);
    assert!(game.player_hands().is_empty());

    game.place_bet(10).unwrap();
    rig_shoe(
        &mut game,
        &[
            card(Suit::Hearts, 8),   // player
            card(Suit::Clubs, 6),    // dealer hole
            card(Suit::Diamonds, 7), // player
            card(Suit::Spades, 10),  // dealer
        ],
    );
    game.deal_initial_cards().unwrap();

    assert_eq!(game.place_bet(5).unwrap_err(), BetError::RoundInProgress);
    assert_eq!(
        game.deal_initial_cards().unwrap_err(),
        DealError::InvalidState
    );
    assert_eq!(game.player_hands().hands()[0].wager(), 10);
}

#[test]
fn double_unavailable_after_hit() {
    let mut game = GameRound::new(10);
    game.place_bet(10).unwrap();
    rig_shoe(
        &mut game,
        &[
            card(Suit::Hearts, 5),   // player
            card(Suit::Clubs, 9),    // dealer hole
            card(Suit::Diamonds, 4), // player
            card(Suit::Spades, 8),   // dealer
            card(Suit::Hearts, 2),   // player hit
        ],
    );
    game.deal_initial_cards().unwrap();
    assert!(game.can_double());

    game.hit().unwrap();
    assert!(!game.can_double());
    assert_eq!(game.double().unwrap_err(), ActionError::CannotDouble);

    let hand = &game.player_hands().hands()[0];
    assert_eq!(hand.len(), 3);
    assert_eq!(hand.wager(), 10);
}

#[test]
fn natural_blackjack_pays_three_to_two() {
    let mut game = GameRound::new(7);
    game.place_bet(10).unwrap();
    rig_shoe(
        &mut game,
        &[
            card(Suit::Hearts, 1),  // player
            card(Suit::Clubs, 9),   // dealer hole
            card(Suit::Spades, 13), // player
            card(Suit::Clubs, 7),   // dealer
        ],
    );
    game.deal_initial_cards().unwrap();

    assert_eq!(game.state(), RoundState::RoundOver);
    assert!(game.dealer_hand().is_hole_revealed());
    // An immediate natural ends the round without dealer draws.
    assert_eq!(game.dealer_hand().len(), 2);

    let result = game.last_round().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[0].payout, 15);
    assert_eq!(result.total_payout, 15);
    assert_eq!(game.stats().player_wins, 1);
    assert_eq!(game.stats().bankroll, 15);
}

#[test]
fn both_naturals_push() {
    let mut game = GameRound::new(8);
    game.place_bet(10).unwrap();
    rig_shoe(
        &mut game,
        &[
            card(Suit::Hearts, 1),  // player
            card(Suit::Spades, 1),  // dealer hole
            card(Suit::Hearts, 13), // player
            card(Suit::Spades, 13), // dealer
        ],
    );
    game.deal_initial_cards().unwrap();

    let result = game.last_round().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(result.total_payout, 0);
    assert_eq!(game.stats().ties, 1);
}

#[test]
fn dealer_natural_beats_unplayed_hand() {
    let mut game = GameRound::new(12);
    game.place_bet(10).unwrap();
    rig_shoe(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Spades, 1),   // dealer hole
            card(Suit::Diamonds, 9), // player
            card(Suit::Spades, 13),  // dealer
        ],
    );
    game.deal_initial_cards().unwrap();

    assert_eq!(game.state(), RoundState::RoundOver);
    let result = game.last_round().unwrap();
    assert!(result.dealer_blackjack);
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(result.total_payout, -10);
    assert_eq!(game.stats().dealer_wins, 1);
}

#[test]
fn split_busted_hand_loses_before_dealer_plays() {
    let mut game = GameRound::new(20);
    game.place_bet(10).unwrap();
    rig_shoe(
        &mut game,
        &[
            card(Suit::Hearts, 8),    // player
            card(Suit::Clubs, 5),     // dealer hole
            card(Suit::Diamonds, 8),  // player
            card(Suit::Clubs, 9),     // dealer
            card(Suit::Hearts, 10),   // split hand 1 draw
            card(Suit::Diamonds, 3),  // split hand 2 draw
            card(Suit::Spades, 10),   // hand 1 hit (bust)
            card(Suit::Diamonds, 10), // dealer draw (bust)
        ],
    );
    game.deal_initial_cards().unwrap();
    assert!(game.can_split());

    game.split().unwrap();
    let hands = game.player_hands();
    assert_eq!(hands.len(), 2);
    assert_eq!(hands.hands()[0].wager(), 10);
    assert_eq!(hands.hands()[1].wager(), 10);
    assert!(hands.hands().iter().all(Hand::is_from_split));

    game.hit().unwrap();
    let hands = game.player_hands();
    assert_eq!(hands.hands()[0].status(), HandStatus::Bust);
    assert_eq!(hands.active_index(), 1);
    assert_eq!(game.state(), RoundState::PlayerTurn);
    // Advancing past a bust does not restore doubling.
    assert!(!game.can_double());

    game.stand().unwrap();

    let result = game.last_round().unwrap();
    assert!(result.dealer_bust);
    // The busted hand loses its wager even though the dealer busted.
    assert_eq!(result.hands[0].outcome, HandOutcome::Bust);
    assert_eq!(result.hands[0].payout, -10);
    assert_eq!(result.hands[1].outcome, HandOutcome::Win);
    assert_eq!(result.hands[1].payout, 10);
    assert_eq!(result.total_payout, 0);
    assert_eq!(game.stats().player_wins, 1);
    assert_eq!(game.stats().dealer_wins, 1);
}

#[test]
fn double_draws_once_doubles_wager_and_stands() {
    let mut game = GameRound::new(30);
    game.place_bet(20).unwrap();
    rig_shoe(
        &mut game,
        &[
            card(Suit::Hearts, 5),   // player
            card(Suit::Clubs, 9),    // dealer hole
            card(Suit::Diamonds, 6), // player
            card(Suit::Clubs, 7),    // dealer
            card(Suit::Spades, 10),  // double draw
            card(Suit::Hearts, 10),  // dealer draw (bust)
        ],
    );
    game.deal_initial_cards().unwrap();

    let drawn = game.double().unwrap();
    assert_eq!(drawn.rank, 10);
    assert_eq!(game.state(), RoundState::RoundOver);

    let result = game.last_round().unwrap();
    assert_eq!(result.hands[0].wager, 40);
    assert_eq!(result.hands[0].player_value, 21);
    assert!(result.dealer_bust);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.total_payout, 40);
    assert_eq!(game.stats().bankroll, 40);
}

#[test]
fn doubled_bust_loses_doubled_wager() {
    let mut game = GameRound::new(31);
    game.place_bet(10).unwrap();
    rig_shoe(
        &mut game,
        &[
            card(Suit::Hearts, 9),   // player
            card(Suit::Clubs, 9),    // dealer hole
            card(Suit::Diamonds, 7), // player
            card(Suit::Clubs, 8),    // dealer
            card(Suit::Spades, 10),  // double draw (bust)
        ],
    );
    game.deal_initial_cards().unwrap();

    game.double().unwrap();
    assert_eq!(game.state(), RoundState::RoundOver);

    let result = game.last_round().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Bust);
    assert_eq!(result.hands[0].payout, -20);
    // All hands busted, so the dealer stayed pat on two cards.
    assert_eq!(game.dealer_hand().len(), 2);
}

#[test]
fn split_hand_twenty_one_pays_even_money() {
    let mut game = GameRound::new(40);
    game.place_bet(10).unwrap();
    rig_shoe(
        &mut game,
        &[
            card(Suit::Hearts, 1),   // player
            card(Suit::Clubs, 9),    // dealer hole
            card(Suit::Diamonds, 1), // player
            card(Suit::Clubs, 7),    // dealer
            card(Suit::Hearts, 13),  // split hand 1 draw (21)
            card(Suit::Diamonds, 5), // split hand 2 draw
            card(Suit::Clubs, 4),    // dealer draw
        ],
    );
    game.deal_initial_cards().unwrap();

    game.split().unwrap();
    // Standing re-enables doubling for the next split hand.
    game.stand().unwrap();
    assert!(game.can_double());
    game.stand().unwrap();

    let result = game.last_round().unwrap();
    assert_eq!(result.hands[0].player_value, 21);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[0].payout, 10, "split 21 gets no 3:2 bonus");
    assert_eq!(result.hands[1].outcome, HandOutcome::Lose);
    assert_eq!(result.dealer_value, 20);
    assert_eq!(result.total_payout, 0);
}

#[test]
fn no_resplitting_within_a_round() {
    let mut game = GameRound::new(41);
    game.place_bet(10).unwrap();
    rig_shoe(
        &mut game,
        &[
            card(Suit::Hearts, 8),   // player
            card(Suit::Clubs, 9),    // dealer hole
            card(Suit::Diamonds, 8), // player
            card(Suit::Clubs, 7),    // dealer
            card(Suit::Clubs, 8),    // split hand 1 draw
            card(Suit::Spades, 8),   // split hand 2 draw
        ],
    );
    game.deal_initial_cards().unwrap();

    game.split().unwrap();
    // The first split hand paired up again, but one split per round is the
    // limit.
    assert!(game.player_hands().hands()[0].is_pair());
    assert!(!game.can_split());
    assert_eq!(game.split().unwrap_err(), ActionError::CannotSplit);
}

#[test]
fn start_new_game_reports_reshuffle_and_clears_round() {
    let mut game = GameRound::new(50);
    game.place_bet(10).unwrap();
    rig_shoe(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 9),    // dealer hole
            card(Suit::Diamonds, 9), // player
            card(Suit::Clubs, 7),    // dealer
        ],
    );
    game.deal_initial_cards().unwrap();
    game.stand().unwrap();
    assert!(game.round_over());

    // Force the shoe below the penetration threshold.
    game.shoe_mut().set_cards(vec![card(Suit::Clubs, 2); 20]);
    assert!(game.start_new_game());
    assert_eq!(game.shoe().remaining(), DECK_SIZE);
    assert_eq!(game.state(), RoundState::AwaitingBet);
    assert!(game.player_hands().is_empty());
    assert!(game.dealer_hand().is_empty());
    assert!(game.last_round().is_none());

    // A full shoe does not reshuffle.
    assert!(!game.start_new_game());
}

#[test]
fn standing_plays_dealer_to_seventeen() {
    let mut game = GameRound::new(60);
    game.place_bet(10).unwrap();
    rig_shoe(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 2),    // dealer hole
            card(Suit::Diamonds, 9), // player
            card(Suit::Clubs, 4),    // dealer
            card(Suit::Spades, 5),   // dealer draw (11)
            card(Suit::Hearts, 6),   // dealer draw (17)
        ],
    );
    game.deal_initial_cards().unwrap();
    game.stand().unwrap();

    let result = game.last_round().unwrap();
    assert_eq!(result.dealer_value, 17);
    assert_eq!(game.dealer_hand().len(), 4);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.total_payout, 10);
}

#[test]
fn running_count_follows_the_deal_order() {
    let mut game = GameRound::new(70);
    game.place_bet(10).unwrap();
    rig_shoe(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // player: -1
            card(Suit::Clubs, 13),   // dealer hole: -1
            card(Suit::Diamonds, 9), // player: 0
            card(Suit::Clubs, 7),    // dealer: 0
        ],
    );
    game.deal_initial_cards().unwrap();

    assert_eq!(game.shoe().running_count(), -2);
    // 40 cards remain of the rigged 44-card stack.
    assert_eq!(game.shoe().remaining(), 40);
    let expected = -2.0 / (40.0 / 52.0);
    assert!((game.shoe().true_count() - expected).abs() < 1e-9);
}
