use serde::{Deserialize, Serialize};
use std::io;

use crate::money::Money;
use crate::round::Round;

/// A validated player action token.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw one card (`H`)
    Hit,
    /// Stop drawing (`S`)
    Stand,
    /// Double the bet, draw one card and stand (`DD`)
    DoubleDown,
    /// Give up the hand for half the bet back (`R`)
    Surrender,
    /// Buy insurance against a dealer blackjack (`I`)
    Insure,
    /// Split a pair into two hands (`S` at a split offer)
    Split,
    /// Decline an insurance or split offer
    Skip,
}

impl Action {
    /// The token a player types for this action.
    pub fn token(self) -> &'static str {
        match self {
            Action::Hit => "H",
            Action::Stand => "S",
            Action::DoubleDown => "DD",
            Action::Surrender => "R",
            Action::Insure => "I",
            Action::Split => "S",
            Action::Skip => "skip",
        }
    }
}

/// The point in a round at which the engine waits for the player.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Decision {
    /// Dealer shows a ten-valued card or an Ace.
    Insurance { cost: Money },
    /// Hand `hand` holds a splittable pair.
    Split { hand: usize, cost: Money },
    /// Next move for hand `hand`; `first` is true before any card was drawn.
    Play { hand: usize, first: bool },
}

/// Source of player decisions. Implementations own prompting and re-prompting,
/// and must answer with one of the `allowed` actions.
pub trait PlayerInput {
    /// Whole-unit bet for the next round, between 1 and `bankroll`.
    /// `None` ends the session.
    fn place_bet(&mut self, bankroll: Money) -> io::Result<Option<u64>>;

    /// One of `allowed` for `decision`. `None` means input is exhausted.
    fn choose(
        &mut self,
        decision: Decision,
        allowed: &[Action],
        round: &Round,
    ) -> io::Result<Option<Action>>;
}
