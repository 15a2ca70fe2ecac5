#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use blackjack_engine::cards::{Card, Rank, Suit};
use blackjack_engine::deck::Deck;
use blackjack_engine::hand::Hand;
use blackjack_engine::money::Money;
use blackjack_engine::player::{Action, Decision, PlayerInput};
use blackjack_engine::presenter::Presenter;
use blackjack_engine::round::Round;
use blackjack_engine::session::{SessionStatus, SessionSummary};

pub fn card(rank: Rank) -> Card {
    Card::new(rank, Suit::Spades)
}

/// Deck that deals `ranks` in order.
pub fn stacked(ranks: &[Rank]) -> Deck {
    Deck::from_cards(ranks.iter().map(|&r| card(r)).collect())
}

pub fn hand(ranks: &[Rank]) -> Hand {
    Hand::with_cards(ranks.iter().map(|&r| card(r)).collect(), Money::from_whole(100))
}

/// Collaborator that replays scripted bets and actions and records what the
/// engine offered and announced.
#[derive(Default)]
pub struct ScriptedTable {
    pub bets: VecDeque<u64>,
    pub actions: VecDeque<Action>,
    pub offers: Vec<(Decision, Vec<Action>)>,
    pub events: Vec<String>,
}

impl ScriptedTable {
    pub fn new(bets: &[u64], actions: &[Action]) -> Self {
        Self {
            bets: bets.iter().copied().collect(),
            actions: actions.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl PlayerInput for ScriptedTable {
    fn place_bet(&mut self, _bankroll: Money) -> io::Result<Option<u64>> {
        Ok(self.bets.pop_front())
    }

    fn choose(
        &mut self,
        decision: Decision,
        allowed: &[Action],
        _round: &Round,
    ) -> io::Result<Option<Action>> {
        self.offers.push((decision, allowed.to_vec()));
        Ok(self.actions.pop_front())
    }
}

impl Presenter for ScriptedTable {
    fn round_started(&mut self, status: &SessionStatus) -> io::Result<()> {
        self.events.push(format!("round {}", status.round_number));
        Ok(())
    }

    fn table_dealt(&mut self, _round: &Round) -> io::Result<()> {
        self.events.push("dealt".into());
        Ok(())
    }

    fn hands_updated(&mut self, round: &Round) -> io::Result<()> {
        self.events.push(format!("hands {}", round.hands().len()));
        Ok(())
    }

    fn surrendered(&mut self, hand: usize, refund: Money) -> io::Result<()> {
        self.events.push(format!("surrendered {} {}", hand, refund));
        Ok(())
    }

    fn round_settled(&mut self, _round: &Round, bankroll: Money) -> io::Result<()> {
        self.events.push(format!("settled {}", bankroll));
        Ok(())
    }

    fn session_finished(&mut self, summary: &SessionSummary) -> io::Result<()> {
        self.events.push(format!("finished {}", summary.rounds_played));
        Ok(())
    }
}

/// Collaborator that always bets the same amount, declines every offer and
/// stands on every hand.
pub struct FlatBettor {
    pub bet: u64,
}

impl PlayerInput for FlatBettor {
    fn place_bet(&mut self, _bankroll: Money) -> io::Result<Option<u64>> {
        Ok(Some(self.bet))
    }

    fn choose(
        &mut self,
        _decision: Decision,
        allowed: &[Action],
        _round: &Round,
    ) -> io::Result<Option<Action>> {
        if allowed.contains(&Action::Skip) {
            Ok(Some(Action::Skip))
        } else {
            Ok(Some(Action::Stand))
        }
    }
}

impl Presenter for FlatBettor {}
