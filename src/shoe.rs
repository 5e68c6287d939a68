//! Shoe management and the Hi-Lo count.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// Remaining-card threshold at or below which the shoe reshuffles before the
/// next deal (50% penetration of the single deck).
pub const RESHUFFLE_AT: usize = DECK_SIZE / 2;

/// A single-deck shoe with a Hi-Lo running count.
///
/// The shoe reshuffles itself lazily: the penetration threshold is checked at
/// each [`deal`](Self::deal), never between deals. A reshuffle repopulates the
/// full 52-card deck, randomizes the order, and resets the running count.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Cards in the shoe; the top of the shoe is the end of the vector.
    cards: Vec<Card>,
    /// Hi-Lo running count over all cards dealt since the last reshuffle.
    running_count: i32,
    /// Random number generator for shuffling.
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a new shuffled shoe with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::fresh_deck(&mut rng);
        Self {
            cards,
            running_count: 0,
            rng,
        }
    }

    /// Creates and shuffles one full 52-card deck.
    fn fresh_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades] {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Returns whether the penetration threshold has been reached.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.cards.len() <= RESHUFFLE_AT
    }

    /// Refills the shoe with a fresh shuffled deck and resets the running
    /// count to zero.
    pub fn reshuffle(&mut self) {
        self.cards = Self::fresh_deck(&mut self.rng);
        self.running_count = 0;
    }

    /// Reshuffles if the penetration threshold has been reached.
    ///
    /// Returns `true` if a reshuffle was performed.
    pub fn check_and_reshuffle(&mut self) -> bool {
        if self.needs_reshuffle() {
            self.reshuffle();
            true
        } else {
            false
        }
    }

    /// Deals one card from the top of the shoe, updating the running count.
    ///
    /// Reshuffles first when the penetration threshold has been reached, so
    /// dealing never fails.
    #[expect(
        clippy::missing_panics_doc,
        reason = "the shoe is refilled before the pop"
    )]
    pub fn deal(&mut self) -> Card {
        if self.needs_reshuffle() {
            self.reshuffle();
        }

        let card = self
            .cards
            .pop()
            .expect("a reshuffled shoe holds a full deck");
        self.running_count += card.count_value();
        card
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the percentage of the deck remaining in the shoe.
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    #[must_use]
    pub fn remaining_percentage(&self) -> f64 {
        (self.cards.len() as f64 / DECK_SIZE as f64) * 100.0
    }

    /// Returns the Hi-Lo running count since the last reshuffle.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running_count
    }

    /// Returns the true count: the running count divided by the number of
    /// decks remaining.
    ///
    /// Returns `0.0` when the shoe is empty.
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    #[must_use]
    pub fn true_count(&self) -> f64 {
        if self.cards.is_empty() {
            return 0.0;
        }

        let decks_remaining = self.cards.len() as f64 / DECK_SIZE as f64;
        f64::from(self.running_count) / decks_remaining
    }

    /// Replaces the contents of the shoe and resets the running count.
    ///
    /// The top of the shoe is the end of the vector. Intended for setting up
    /// deterministic deals in tests and demos.
    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.running_count = 0;
    }
}
