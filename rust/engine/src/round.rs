//! One betting round: the player's hands, the dealer, and settlement.
//!
//! A round starts with a single hand holding the placed bet. Splitting can
//! grow it to [`MAX_SPLITS`] + 1 hands, all drawing from the same borrowed
//! [`Deck`]. Once every hand is stood or surrendered, [`Round::settle`] pays
//! insurance, plays the dealer out and labels each hand.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{Hand, ScoreKind};
use crate::money::Money;

/// Splits allowed per round (four hands at most).
pub const MAX_SPLITS: usize = 3;

/// Dealer draws below this score regardless of softness.
pub const DEALER_STANDS_AT: u32 = 17;

/// Settlement label of one hand, fixed once the round is settled.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Won,
    Lost,
    Tied,
    Surrendered,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Won => "won",
            Outcome::Lost => "lost",
            Outcome::Tied => "tied",
            Outcome::Surrendered => "surrendered",
        };
        f.write_str(s)
    }
}

/// Settles one hand against the dealer's final hand.
///
/// Returns the label and the amount credited back to the player, stake
/// included. Rules are tried in order and the first match wins:
///
/// 1. surrendered: nothing (the refund was paid at surrender time)
/// 2. both blackjack: stake back
/// 3. dealer blackjack: nothing
/// 4. player blackjack: stake plus 3:2
/// 5. player bust: nothing
/// 6. dealer bust: stake plus 1:1
/// 7. equal scores: stake back
/// 8. dealer higher: nothing
/// 9. player higher: stake plus 1:1
pub fn settle_hand(hand: &Hand, dealer: &Hand) -> (Outcome, Money) {
    let bet = hand.bet();
    if hand.is_surrendered() {
        (Outcome::Surrendered, Money::ZERO)
    } else if dealer.is_blackjack() && hand.is_blackjack() {
        (Outcome::Tied, bet)
    } else if dealer.is_blackjack() {
        (Outcome::Lost, Money::ZERO)
    } else if hand.is_blackjack() {
        (Outcome::Won, bet + bet.three_halves())
    } else if hand.is_bust() {
        (Outcome::Lost, Money::ZERO)
    } else if dealer.is_bust() {
        (Outcome::Won, bet.times(2))
    } else {
        match hand.score().cmp(&dealer.score()) {
            std::cmp::Ordering::Equal => (Outcome::Tied, bet),
            std::cmp::Ordering::Less => (Outcome::Lost, Money::ZERO),
            std::cmp::Ordering::Greater => (Outcome::Won, bet.times(2)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Round {
    hands: Vec<Hand>,
    dealer: Hand,
    split_count: usize,
    insurance: Money,
    winnings: Money,
    outcomes: Vec<Outcome>,
    settled: bool,
    dealer_played: bool,
}

impl Round {
    pub fn new(bet: Money) -> Self {
        Self {
            hands: vec![Hand::new(bet)],
            dealer: Hand::new(Money::ZERO),
            split_count: 0,
            insurance: Money::ZERO,
            winnings: Money::ZERO,
            outcomes: Vec::new(),
            settled: false,
            dealer_played: false,
        }
    }

    /// Deals player, dealer, player, dealer.
    pub fn deal_initial(&mut self, deck: &mut Deck) -> Result<(), GameError> {
        for _ in 0..2 {
            self.hands[0].hit(deck)?;
            self.dealer.hit(deck)?;
        }
        tracing::debug!(
            player = self.hands[0].score(),
            up_card = ?self.dealer_up_card(),
            "initial cards dealt"
        );
        Ok(())
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn hand(&self, index: usize) -> Result<&Hand, GameError> {
        self.hands.get(index).ok_or(GameError::NoSuchHand(index))
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn dealer_up_card(&self) -> Option<Card> {
        self.dealer.cards().first().copied()
    }

    pub fn split_count(&self) -> usize {
        self.split_count
    }

    pub fn can_split(&self) -> bool {
        self.split_count < MAX_SPLITS
    }

    pub fn insurance(&self) -> Money {
        self.insurance
    }

    pub fn winnings(&self) -> Money {
        self.winnings
    }

    /// Outcome labels aligned with the non-empty hands, in hand order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Whether the dealer's final hand decided anything: true once settled
    /// with at least one live player hand.
    pub fn dealer_played(&self) -> bool {
        self.dealer_played
    }

    /// Sum of the bets of every dealt hand.
    pub fn total_bet(&self) -> Money {
        self.hands
            .iter()
            .filter(|h| !h.is_empty())
            .map(Hand::bet)
            .sum()
    }

    /// Whether any hand still depends on the dealer's final cards.
    pub fn has_live_hand(&self) -> bool {
        self.hands.iter().any(Hand::is_live)
    }

    pub fn is_insurable(&self) -> bool {
        self.dealer_up_card().is_some_and(|c| c.is_ten_or_ace())
    }

    /// Stakes half of the primary bet on a dealer blackjack. Returns the
    /// insurance amount for the caller to debit.
    pub fn buy_insurance(&mut self) -> Result<Money, GameError> {
        if !self.is_insurable() {
            return Err(GameError::NotInsurable);
        }
        self.insurance = self.hands[0].bet().half();
        Ok(self.insurance)
    }

    /// Splits the pair at `index`, moving its second card to a new hand with
    /// the same bet. Each side draws one card; split Aces are then stood.
    /// Returns the index of the new hand.
    pub fn split(&mut self, index: usize, deck: &mut Deck) -> Result<usize, GameError> {
        let hand = self.active_hand_mut(index)?;
        if !hand.is_splittable() {
            return Err(GameError::NotSplittable(index));
        }
        if self.split_count >= MAX_SPLITS {
            return Err(GameError::SplitLimitReached(MAX_SPLITS));
        }

        let hand = &mut self.hands[index];
        let moved = hand.take_last_card().ok_or(GameError::NotSplittable(index))?;
        let mut split = Hand::with_cards(vec![moved], hand.bet());
        let aces = moved.is_ace();

        hand.hit(deck)?;
        split.hit(deck)?;
        if aces {
            hand.stand();
            split.stand();
        }

        self.hands.push(split);
        self.split_count += 1;
        tracing::debug!(
            from = index,
            to = self.hands.len() - 1,
            aces,
            splits = self.split_count,
            "hand split"
        );
        Ok(self.hands.len() - 1)
    }

    pub fn hit(&mut self, index: usize, deck: &mut Deck) -> Result<Card, GameError> {
        self.active_hand_mut(index)?.hit(deck)
    }

    pub fn stand(&mut self, index: usize) -> Result<(), GameError> {
        self.active_hand_mut(index)?.stand();
        Ok(())
    }

    pub fn double_down(&mut self, index: usize, deck: &mut Deck) -> Result<Card, GameError> {
        self.active_hand_mut(index)?.double_down(deck)
    }

    pub fn surrender(&mut self, index: usize) -> Result<Money, GameError> {
        Ok(self.active_hand_mut(index)?.surrender())
    }

    /// Keeps the dealer at two cards, used when the player's blackjack ends
    /// the round early.
    pub fn dealer_stand(&mut self) {
        self.dealer.stand();
    }

    /// Every hand is stood, surrendered or empty.
    pub fn is_settable(&self) -> bool {
        self.hands.iter().all(Hand::is_resolved)
    }

    /// Plays the dealer's fixed policy: draw while below 17, and keep drawing
    /// on any soft total short of 21. Skipped when no hand can be affected or
    /// the dealer already stood.
    pub fn dealer_play(&mut self, deck: &mut Deck) -> Result<(), GameError> {
        if self.dealer.is_stopped() || !self.has_live_hand() {
            return Ok(());
        }
        while self.dealer.score() < DEALER_STANDS_AT
            || (self.dealer.score_kind() == ScoreKind::Soft && !self.dealer.is_twenty_one())
        {
            self.dealer.hit(deck)?;
        }
        self.dealer.stand();
        tracing::debug!(
            score = self.dealer.score(),
            cards = self.dealer.cards().len(),
            "dealer stands"
        );
        Ok(())
    }

    /// Pays 2:1 plus the stake when the dealer's first two cards are a
    /// blackjack.
    pub fn settle_insurance(&mut self) {
        if self.dealer.cards().len() == 2 && self.dealer.is_blackjack() {
            self.winnings += self.insurance.times(3);
        }
    }

    /// Settles insurance, plays the dealer and labels every dealt hand.
    pub fn settle(&mut self, deck: &mut Deck) -> Result<&[Outcome], GameError> {
        if self.settled {
            return Err(GameError::AlreadySettled);
        }
        if !self.is_settable() {
            return Err(GameError::NotSettable);
        }

        self.settle_insurance();
        self.dealer_played = self.has_live_hand();
        self.dealer_play(deck)?;
        for hand in self.hands.iter().filter(|h| !h.is_empty()) {
            let (outcome, payout) = settle_hand(hand, &self.dealer);
            self.winnings += payout;
            self.outcomes.push(outcome);
        }
        self.settled = true;

        tracing::info!(
            outcomes = ?self.outcomes,
            dealer = self.dealer.score(),
            winnings = %self.winnings,
            "round settled"
        );
        Ok(&self.outcomes)
    }

    fn active_hand_mut(&mut self, index: usize) -> Result<&mut Hand, GameError> {
        let hand = self
            .hands
            .get_mut(index)
            .ok_or(GameError::NoSuchHand(index))?;
        if hand.is_stopped() || hand.is_surrendered() {
            return Err(GameError::HandNotActive(index));
        }
        Ok(hand)
    }
}
