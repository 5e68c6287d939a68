//! Player and dealer hand representations.

use crate::card::Card;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == 1 {
            aces += 1;
        }
        value = value.saturating_add(card.point_value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Player has stood.
    Stand,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a natural blackjack.
    Blackjack,
}

/// A player's hand.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Current status of the hand.
    status: HandStatus,
    /// Wager riding on this hand. Zero means the hand has not entered play.
    wager: usize,
    /// Whether this hand was produced by a split.
    from_split: bool,
}

impl Hand {
    /// Creates a new empty hand with the given wager.
    #[must_use]
    pub const fn new(wager: usize) -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
            wager,
            from_split: false,
        }
    }

    /// Creates a new hand from a split with a single card.
    #[must_use]
    pub fn from_split(card: Card, wager: usize) -> Self {
        Self {
            cards: vec![card],
            status: HandStatus::Active,
            wager,
            from_split: true,
        }
    }

    /// Adds a card to the hand, updating the status on bust or natural
    /// blackjack.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        let (value, _) = evaluate_cards(&self.cards);

        if value > 21 {
            self.status = HandStatus::Bust;
        }
        // A two-card 21 is only a natural when the hand was not split.
        else if self.cards.len() == 2 && value == 21 && !self.from_split {
            self.status = HandStatus::Blackjack;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status.
    pub(crate) const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Returns the wager riding on this hand.
    #[must_use]
    pub const fn wager(&self) -> usize {
        self.wager
    }

    /// Doubles the wager.
    pub(crate) const fn double_wager(&mut self) {
        self.wager *= 2;
    }

    /// Returns whether this hand was produced by a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is a natural blackjack: exactly two cards
    /// totalling 21 on a hand that did not come from a split.
    ///
    /// A split hand can reach 21 with two cards but is not paid at blackjack
    /// odds.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21 && !self.from_split
    }

    /// Returns whether the hand is a split-eligible pair.
    ///
    /// Eligibility compares point values, not ranks, so ten-value cards of
    /// different ranks (e.g. 10 and K) form a pair.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].point_value() == self.cards[1].point_value()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The ordered collection of player hands for one round, with a cursor to the
/// hand currently in play.
///
/// Holds a single hand until a split replaces it with two new hands. Hands
/// before the cursor are always resolved (stood or busted).
#[derive(Debug, Clone, Default)]
pub struct PlayerHands {
    /// The hands, in play order.
    hands: Vec<Hand>,
    /// Index of the hand currently in play.
    active: usize,
}

impl PlayerHands {
    /// Creates an empty collection (no round staged yet).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hands: Vec::new(),
            active: 0,
        }
    }

    /// Replaces all hands with a single empty hand carrying the given wager.
    pub(crate) fn reset(&mut self, wager: usize) {
        self.hands = vec![Hand::new(wager)];
        self.active = 0;
    }

    /// Clears all hands.
    pub(crate) fn clear(&mut self) {
        self.hands.clear();
        self.active = 0;
    }

    /// Returns the hands in play order.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the index of the hand currently in play.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    /// Returns the hand currently in play, if any.
    #[must_use]
    pub fn active(&self) -> Option<&Hand> {
        self.hands.get(self.active)
    }

    /// Returns the hand currently in play mutably, if any.
    pub(crate) fn active_mut(&mut self) -> Option<&mut Hand> {
        self.hands.get_mut(self.active)
    }

    /// Advances the cursor to the next unresolved hand.
    ///
    /// Returns `false` if no unresolved hand remains.
    pub(crate) fn advance_to_next_active(&mut self) -> bool {
        while self.active + 1 < self.hands.len() {
            self.active += 1;
            if self.hands[self.active].status() == HandStatus::Active {
                return true;
            }
        }
        false
    }

    /// Replaces the active two-card hand with two split hands, each holding
    /// one of the original cards plus one freshly dealt card and inheriting
    /// the original wager. The cursor moves to the first new hand.
    pub(crate) fn split_active(&mut self, first_draw: Card, second_draw: Card) {
        let original = &self.hands[self.active];
        let wager = original.wager();
        let cards = original.cards();
        let (left, right) = (cards[0], cards[1]);

        let mut first = Hand::from_split(left, wager);
        first.add_card(first_draw);
        let mut second = Hand::from_split(right, wager);
        second.add_card(second_draw);

        self.hands = vec![first, second];
        self.active = 0;
    }

    /// Returns whether any hand stood (and so requires a dealer playout).
    #[must_use]
    pub fn any_standing(&self) -> bool {
        self.hands
            .iter()
            .any(|hand| hand.status() == HandStatus::Stand)
    }

    /// Returns the number of hands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hands.len()
    }

    /// Returns whether no hands exist yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}

/// The dealer's hand.
///
/// The first dealt card is the hole card, concealed from projections until
/// the round ends.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    /// Cards in the hand; the first card is the hole card.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand, including the hole card.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards a viewer may see: everything but the hole card
    /// while it is concealed, all cards once revealed.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        if self.hole_revealed || self.cards.is_empty() {
            &self.cards
        } else {
            &self.cards[1..]
        }
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the value of the visible cards only.
    ///
    /// This is a derived projection; the underlying hand is never altered to
    /// hide the hole card.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        evaluate_cards(self.visible_cards()).0
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is a blackjack (two-card 21).
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub(crate) fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}
