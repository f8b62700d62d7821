//! Player and dealer hand representations.

use core::ops::{Deref, DerefMut};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DrawError;

/// Hand totals above this value are bust.
pub const BUST_LIMIT: u32 = 21;

/// The state shared by the player and the dealer: a hand, its cached point
/// total, and a running win count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Participant {
    /// Cards in deal order.
    hand: Vec<Card>,
    /// Cached hand total, written by [`Self::update_hand_points`].
    hand_points: u32,
    /// Rounds won this session.
    score: u32,
}

impl Participant {
    /// Creates a participant with an empty hand and no wins.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Vec::new(),
            hand_points: 0,
            score: 0,
        }
    }

    /// Sums the points of the hand.
    ///
    /// If any card is face-down the total of the whole hand is 0, not just
    /// the total without that card. A hand only has a meaningful value once
    /// every card in it is face-up.
    #[must_use]
    pub fn compute_hand_points(&self) -> u32 {
        if self.hand.iter().any(|card| !card.is_face_up()) {
            return 0;
        }
        self.hand.iter().map(Card::points).sum()
    }

    /// Stores a new cached hand total.
    pub const fn update_hand_points(&mut self, points: u32) {
        self.hand_points = points;
    }

    /// Recomputes the hand total and stores it. Returns the new total.
    pub fn recompute_hand_points(&mut self) -> u32 {
        let points = self.compute_hand_points();
        self.update_hand_points(points);
        points
    }

    /// Returns the cached hand total.
    #[must_use]
    pub const fn hand_points(&self) -> u32 {
        self.hand_points
    }

    /// Returns whether the cached hand total is over 21.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.hand_points > BUST_LIMIT
    }

    /// Draws a card from the deck into the hand.
    ///
    /// The cached total is left untouched; call
    /// [`Self::recompute_hand_points`] before reading it again.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Empty`] if the deck has no cards left.
    pub fn add_card(&mut self, deck: &mut Deck) -> Result<Card, DrawError> {
        let card = deck.draw()?;
        self.hand.push(card);
        Ok(card)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Turns the card at `index` face-down. Returns `false` if there is no
    /// card at that position.
    ///
    /// The cached total is left untouched, as with [`Self::add_card`].
    pub fn set_card_face_down(&mut self, index: usize) -> bool {
        self.hand.get_mut(index).map(Card::set_face_down).is_some()
    }

    /// Empties the hand.
    pub fn reset_hand(&mut self) {
        self.hand.clear();
    }

    /// Sets the cached hand total back to 0.
    pub const fn reset_points(&mut self) {
        self.hand_points = 0;
    }

    /// Renders the hand as `"<rank> <suit>"` entries joined by `", "`, with
    /// face-down cards shown as `Hidden Card`.
    #[must_use]
    pub fn render_hand(&self) -> String {
        self.hand
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Returns the number of rounds won.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Records a round win.
    pub const fn increment_score(&mut self) {
        self.score += 1;
    }
}

/// The human player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    participant: Participant,
    funds: i32,
    min_funds: i32,
    max_funds: i32,
}

impl Player {
    /// Creates a player with the given funds and broke/rich boundaries.
    #[must_use]
    pub const fn new(funds: i32, min_funds: i32, max_funds: i32) -> Self {
        Self {
            participant: Participant::new(),
            funds,
            min_funds,
            max_funds,
        }
    }

    /// Returns the player's funds.
    #[must_use]
    pub const fn funds(&self) -> i32 {
        self.funds
    }

    /// Returns whether the funds are at or below the lower boundary.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.funds <= self.min_funds
    }

    /// Returns whether the funds are above the upper boundary.
    #[must_use]
    pub const fn is_rich(&self) -> bool {
        self.funds > self.max_funds
    }

    /// Removes funds. The result may go below zero.
    pub const fn deduct_funds(&mut self, amount: i32) {
        self.funds -= amount;
    }

    /// Adds funds. The result may exceed the upper boundary.
    pub const fn add_funds(&mut self, amount: i32) {
        self.funds += amount;
    }
}

impl Deref for Player {
    type Target = Participant;

    fn deref(&self) -> &Participant {
        &self.participant
    }
}

impl DerefMut for Player {
    fn deref_mut(&mut self) -> &mut Participant {
        &mut self.participant
    }
}

/// The automated dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dealer {
    participant: Participant,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            participant: Participant::new(),
        }
    }

    /// Returns whether any card in the hand is face-down.
    #[must_use]
    pub fn has_hidden_card(&self) -> bool {
        self.hand().iter().any(|card| !card.is_face_up())
    }

    /// Turns every face-down card face-up and returns the revealed cards.
    pub fn reveal_hidden_card(&mut self) -> Vec<Card> {
        let mut revealed = Vec::new();
        for card in &mut self.participant.hand {
            if !card.is_face_up() {
                card.set_face_up();
                revealed.push(*card);
            }
        }
        revealed
    }
}

impl Deref for Dealer {
    type Target = Participant;

    fn deref(&self) -> &Participant {
        &self.participant
    }
}

impl DerefMut for Dealer {
    fn deref_mut(&mut self) -> &mut Participant {
        &mut self.participant
    }
}
