//! Blackjack hand scoring and per-hand actions.
//!
//! A [`Hand`] is an ordered list of cards tied to one bet. Its score is derived
//! on demand: every Ace starts at 11 and is reduced to 1, one Ace at a time,
//! while the total exceeds 21.
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_engine::hand::{Hand, ScoreKind};
//! use blackjack_engine::money::Money;
//!
//! let hand = Hand::with_cards(
//!     vec![Card::new(Rank::Ace, Suit::Hearts), Card::new(Rank::Nine, Suit::Clubs)],
//!     Money::from_whole(10),
//! );
//! assert_eq!(hand.score(), 20);
//! assert_eq!(hand.score_kind(), ScoreKind::Soft);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::money::Money;

pub const BLACKJACK: u32 = 21;

/// Whether an Ace is still counted as 11 in the hand's score.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreKind {
    Soft,
    Hard,
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreKind::Soft => f.write_str("soft"),
            ScoreKind::Hard => f.write_str("hard"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    bet: Money,
    stopped: bool,
    surrendered: bool,
}

impl Hand {
    pub fn new(bet: Money) -> Self {
        Self {
            cards: Vec::new(),
            bet,
            stopped: false,
            surrendered: false,
        }
    }

    pub fn with_cards(cards: Vec<Card>, bet: Money) -> Self {
        Self {
            cards,
            ..Self::new(bet)
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn bet(&self) -> Money {
        self.bet
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn is_surrendered(&self) -> bool {
        self.surrendered
    }

    /// Returns (score after Ace reduction, Aces reduced to 1, Aces held).
    fn evaluate(&self) -> (u32, usize, usize) {
        let mut total: u32 = self.cards.iter().map(Card::value).sum();
        let aces = self.cards.iter().filter(|c| c.is_ace()).count();
        let mut reduced = 0;
        for _ in 0..aces {
            if total > BLACKJACK {
                total -= 10;
                reduced += 1;
            }
        }
        (total, reduced, aces)
    }

    pub fn score(&self) -> u32 {
        self.evaluate().0
    }

    pub fn score_kind(&self) -> ScoreKind {
        let (_, reduced, aces) = self.evaluate();
        if aces > reduced {
            ScoreKind::Soft
        } else {
            ScoreKind::Hard
        }
    }

    pub fn is_twenty_one(&self) -> bool {
        self.score() == BLACKJACK
    }

    /// A two-card 21. Any other card count is never a blackjack, so a
    /// three-card 21 such as 7-7-7 settles as an ordinary 21.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.is_twenty_one()
    }

    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Exactly two cards of equal value; ten-valued cards pair with each other.
    pub fn is_splittable(&self) -> bool {
        match self.cards.as_slice() {
            [a, b] => a.value() == b.value(),
            _ => false,
        }
    }

    /// Non-empty, not bust and not surrendered: the dealer's final hand
    /// matters to this hand's settlement.
    pub fn is_live(&self) -> bool {
        !self.is_empty() && !self.is_bust() && !self.surrendered
    }

    /// Stood, surrendered, or never dealt.
    pub fn is_resolved(&self) -> bool {
        self.stopped || self.surrendered || self.is_empty()
    }

    pub fn hit(&mut self, deck: &mut Deck) -> Result<Card, GameError> {
        let card = deck.draw()?;
        self.cards.push(card);
        Ok(card)
    }

    pub fn stand(&mut self) {
        self.stopped = true;
    }

    /// Doubles the bet, draws exactly one card and stands. The caller debits
    /// the extra stake from the bankroll.
    pub fn double_down(&mut self, deck: &mut Deck) -> Result<Card, GameError> {
        self.bet += self.bet;
        let card = self.hit(deck)?;
        self.stand();
        Ok(card)
    }

    /// Halves the bet and marks the hand surrendered. Returns the half that
    /// goes back to the bankroll.
    pub fn surrender(&mut self) -> Money {
        let refund = self.bet.half();
        self.bet -= refund;
        self.surrendered = true;
        refund
    }

    pub(crate) fn take_last_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub(crate) fn push_card(&mut self, card: Card) {
        self.cards.push(card);
    }
}
