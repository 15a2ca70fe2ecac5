//! # blackjack-engine: Blackjack Round Settlement Core
//!
//! A single-player Blackjack (21) engine. Provides card and shoe handling,
//! hand scoring, the round state machine with splits, doubles, surrender and
//! insurance, the dealer's fixed drawing policy, and exact payout arithmetic.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and blackjack values
//! - [`deck`] - Multi-deck shoe with seeded ChaCha20 shuffling
//! - [`money`] - Exact currency amounts in cents
//! - [`hand`] - Hand scoring (soft/hard), blackjack, bust and split checks
//! - [`round`] - One betting round: splits, insurance, dealer play, settlement
//! - [`session`] - Bankroll, game modes and the round-by-round controller
//! - [`player`] - Action tokens and the player-input collaborator
//! - [`presenter`] - Display collaborator notified of state changes
//! - [`rules`] - Action sets offered at each decision point
//! - [`logger`] - RoundRecord serialization to JSONL
//! - [`errors`] - Error types for game and session operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_engine::deck::Deck;
//! use blackjack_engine::money::Money;
//! use blackjack_engine::round::{Outcome, Round};
//!
//! // Player K-9, dealer 10-6, dealer draws a King and busts.
//! let mut deck = Deck::from_cards(vec![
//!     Card::new(Rank::King, Suit::Spades),
//!     Card::new(Rank::Ten, Suit::Hearts),
//!     Card::new(Rank::Nine, Suit::Clubs),
//!     Card::new(Rank::Six, Suit::Diamonds),
//!     Card::new(Rank::King, Suit::Hearts),
//! ]);
//! let mut round = Round::new(Money::from_whole(100));
//! round.deal_initial(&mut deck).unwrap();
//! round.stand(0).unwrap();
//! round.settle(&mut deck).unwrap();
//!
//! assert_eq!(round.outcomes(), &[Outcome::Won]);
//! assert_eq!(round.winnings(), Money::from_whole(200));
//! ```
//!
//! ## Deterministic Shoes
//!
//! ```rust
//! use blackjack_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let mut a = Deck::new(2, 42).unwrap();
//! let mut b = Deck::new(2, 42).unwrap();
//! assert_eq!(a.draw(), b.draw());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod money;
pub mod player;
pub mod presenter;
pub mod round;
pub mod rules;
pub mod session;
