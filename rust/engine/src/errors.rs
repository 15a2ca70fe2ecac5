use thiserror::Error;

use crate::player::Action;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Invalid deck count: {count}, allowed 1..={max}")]
    InvalidDeckCount { count: u8, max: u8 },
    #[error("Invalid round count: {count}, allowed 1..={max}")]
    InvalidRoundCount { count: u32, max: u32 },
    #[error("Invalid bet amount: {amount}, allowed 1..={maximum}")]
    InvalidBet { amount: u64, maximum: u64 },
    #[error("Starting bankroll must be between 1 and 1000000000")]
    InvalidBankroll,
    #[error("No hand at index {0}")]
    NoSuchHand(usize),
    #[error("Hand {0} is not a splittable pair")]
    NotSplittable(usize),
    #[error("Split limit of {0} reached")]
    SplitLimitReached(usize),
    #[error("Hand {0} is no longer active")]
    HandNotActive(usize),
    #[error("Dealer up-card does not allow insurance")]
    NotInsurable,
    #[error("Round cannot be settled while a hand is still in play")]
    NotSettable,
    #[error("Round already settled")]
    AlreadySettled,
}

/// Failures while driving a session through its collaborators.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Player input closed before the round finished")]
    InputClosed,
    #[error("Action {action:?} is not one of {allowed:?}")]
    UnexpectedAction { action: Action, allowed: Vec<Action> },
}
