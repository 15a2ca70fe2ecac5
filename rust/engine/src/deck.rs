use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Largest shoe the session accepts.
pub const MAX_DECKS: u8 = 12;

/// Number of decks needed to supply `rounds` rounds at roughly ten cards a
/// round.
pub fn decks_for_rounds(rounds: u32) -> u8 {
    (rounds * 10 / 52 + 1) as u8
}

/// A shoe of one or more 52-card decks, drawn front to back without
/// replacement.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    num_decks: u8,
    rng: ChaCha20Rng,
    refill_when_empty: bool,
    refills: u32,
}

impl Deck {
    /// Builds `num_decks` concatenated decks and shuffles them with a ChaCha
    /// stream seeded from `seed`.
    pub fn new(num_decks: u8, seed: u64) -> Result<Self, GameError> {
        if num_decks == 0 || num_decks > MAX_DECKS {
            return Err(GameError::InvalidDeckCount {
                count: num_decks,
                max: MAX_DECKS,
            });
        }
        let mut deck = Self {
            cards: Vec::new(),
            position: 0,
            num_decks,
            rng: ChaCha20Rng::seed_from_u64(seed),
            refill_when_empty: false,
            refills: 0,
        };
        deck.reshuffle();
        Ok(deck)
    }

    /// A stacked deck that deals `cards` in the given order. Reshuffling it
    /// restores a single standard deck.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            position: 0,
            num_decks: 1,
            rng: ChaCha20Rng::seed_from_u64(0),
            refill_when_empty: false,
            refills: 0,
        }
    }

    /// Makes [`draw`](Self::draw) reshuffle a fresh shoe instead of failing
    /// when the cards run out.
    pub fn refill_when_empty(mut self) -> Self {
        self.refill_when_empty = true;
        self
    }

    /// Replaces the shoe with fresh decks and shuffles them.
    pub fn reshuffle(&mut self) {
        let mut cards = Vec::with_capacity(52 * self.num_decks as usize);
        for _ in 0..self.num_decks {
            cards.extend(full_deck());
        }
        cards.shuffle(&mut self.rng);
        self.cards = cards;
        self.position = 0;
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        if self.refill_when_empty && self.remaining() == 0 {
            self.refills += 1;
            tracing::info!(refills = self.refills, "shoe ran out, reshuffling");
            self.reshuffle();
        }
        let card = self
            .cards
            .get(self.position)
            .copied()
            .ok_or(GameError::EmptyDeck)?;
        self.position += 1;
        tracing::trace!(%card, remaining = self.remaining(), "card drawn");
        Ok(card)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn num_decks(&self) -> u8 {
        self.num_decks
    }

    /// How many times [`draw`](Self::draw) had to refill an empty shoe.
    pub fn refills(&self) -> u32 {
        self.refills
    }
}
