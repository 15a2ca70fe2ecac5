//! Session controller: bankroll, shoe and the sequence of rounds.
//!
//! The session owns the [`Deck`] and lends it to each [`Round`]. Player
//! decisions come from a collaborator implementing [`PlayerInput`]; the same
//! collaborator is told about state changes through [`Presenter`]. Bankroll
//! checks for doubles, splits and insurance are made here before the round
//! is asked to perform them.

use crate::deck::{decks_for_rounds, Deck, MAX_DECKS};
use crate::errors::{GameError, SessionError};
use crate::money::Money;
use crate::player::{Action, Decision, PlayerInput};
use crate::presenter::Presenter;
use crate::round::{Outcome, Round};
use crate::rules::{insurance_actions, play_actions, split_actions};

/// Longest fixed-round session.
pub const MAX_ROUNDS: u32 = 60;

/// A shoe with this many cards or fewer is considered exhausted.
pub const LOW_SHOE: usize = 10;

/// Largest starting bankroll, in whole units.
pub const MAX_BANKROLL: u64 = 1_000_000_000;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameMode {
    /// Play until the shoe is down to [`LOW_SHOE`] cards.
    UntilDeckLow { decks: u8 },
    /// Play a fixed number of rounds from a shoe sized by [`decks_for_rounds`].
    FixedRounds { rounds: u32 },
}

impl GameMode {
    pub fn num_decks(&self) -> u8 {
        match *self {
            GameMode::UntilDeckLow { decks } => decks,
            GameMode::FixedRounds { rounds } => decks_for_rounds(rounds),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub mode: GameMode,
    pub starting_bankroll: Money,
    pub seed: u64,
}

/// Snapshot shown at the start of each round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStatus {
    pub round_number: u32,
    pub bankroll: Money,
    pub cards_remaining: usize,
    pub rounds_remaining: Option<u32>,
}

/// What one settled round cost and returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub number: u32,
    pub bet: Money,
    pub insurance: Money,
    pub winnings: Money,
    pub outcomes: Vec<Outcome>,
}

impl RoundSummary {
    pub fn from_round(number: u32, round: &Round) -> Self {
        Self {
            number,
            bet: round.total_bet(),
            insurance: round.insurance(),
            winnings: round.winnings(),
            outcomes: round.outcomes().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_played: u32,
    pub initial_bankroll: Money,
    pub final_bankroll: Money,
    pub rounds: Vec<RoundSummary>,
}

#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    deck: Deck,
    bankroll: Money,
    rounds_played: u32,
    history: Vec<RoundSummary>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, GameError> {
        if let GameMode::FixedRounds { rounds } = config.mode {
            if rounds == 0 || rounds > MAX_ROUNDS {
                return Err(GameError::InvalidRoundCount {
                    count: rounds,
                    max: MAX_ROUNDS,
                });
            }
        }
        if config.starting_bankroll <= Money::ZERO
            || config.starting_bankroll > Money::from_whole(MAX_BANKROLL)
        {
            return Err(GameError::InvalidBankroll);
        }
        let deck = Deck::new(config.mode.num_decks(), config.seed)?;
        Ok(Self::with_deck(config, deck))
    }

    /// A session over a caller-supplied shoe, e.g. a stacked deck. A shoe
    /// that runs out mid-round is refilled so the round can finish.
    pub fn with_deck(config: SessionConfig, deck: Deck) -> Self {
        tracing::info!(
            mode = ?config.mode,
            decks = deck.num_decks(),
            bankroll = %config.starting_bankroll,
            "session started"
        );
        Self {
            bankroll: config.starting_bankroll,
            config,
            deck: deck.refill_when_empty(),
            rounds_played: 0,
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn bankroll(&self) -> Money {
        self.bankroll
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn status(&self) -> SessionStatus {
        let rounds_remaining = match self.config.mode {
            GameMode::FixedRounds { rounds } => Some(rounds.saturating_sub(self.rounds_played)),
            GameMode::UntilDeckLow { .. } => None,
        };
        SessionStatus {
            round_number: self.rounds_played + 1,
            bankroll: self.bankroll,
            cards_remaining: self.deck.remaining(),
            rounds_remaining,
        }
    }

    /// More than one unit of bankroll left and the mode allows another round.
    /// A deck-mode session ends once its shoe has had to be refilled.
    pub fn should_continue(&self) -> bool {
        if self.bankroll <= Money::from_whole(1) {
            return false;
        }
        match self.config.mode {
            GameMode::UntilDeckLow { .. } => {
                self.deck.refills() == 0 && self.deck.remaining() > LOW_SHOE
            }
            GameMode::FixedRounds { rounds } => self.rounds_played < rounds,
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            rounds_played: self.rounds_played,
            initial_bankroll: self.config.starting_bankroll,
            final_bankroll: self.bankroll,
            rounds: self.history.clone(),
        }
    }

    /// Plays rounds until the session ends or the player declines to bet.
    pub fn play<T>(&mut self, table: &mut T) -> Result<SessionSummary, SessionError>
    where
        T: PlayerInput + Presenter + ?Sized,
    {
        while self.should_continue() {
            if self.play_round(table)?.is_none() {
                break;
            }
        }
        let summary = self.summary();
        table.session_finished(&summary)?;
        Ok(summary)
    }

    /// Runs one round from bet to settlement and returns it settled, or
    /// `None` when the player declined to bet.
    pub fn play_round<T>(&mut self, table: &mut T) -> Result<Option<Round>, SessionError>
    where
        T: PlayerInput + Presenter + ?Sized,
    {
        if matches!(self.config.mode, GameMode::FixedRounds { .. })
            && self.deck.remaining() <= LOW_SHOE
        {
            tracing::info!(remaining = self.deck.remaining(), "reshuffling shoe");
            self.deck.reshuffle();
        }

        table.round_started(&self.status())?;
        let Some(amount) = table.place_bet(self.bankroll)? else {
            return Ok(None);
        };
        let bet = Money::from_whole(amount);
        if amount == 0 || bet > self.bankroll {
            return Err(GameError::InvalidBet {
                amount,
                maximum: (self.bankroll.cents() / 100).max(0) as u64,
            }
            .into());
        }

        self.bankroll -= bet;
        self.rounds_played += 1;
        let mut round = Round::new(bet);
        round.deal_initial(&mut self.deck)?;
        table.table_dealt(&round)?;

        self.offer_insurance(&mut round, table)?;

        if round.dealer().is_blackjack() {
            round.stand(0)?;
        } else if round.hand(0)?.is_blackjack() {
            round.stand(0)?;
            round.dealer_stand();
        } else {
            self.offer_splits(&mut round, table)?;
            for index in 0..round.hands().len() {
                let hand = round.hand(index)?;
                if hand.is_blackjack() {
                    round.stand(index)?;
                } else if !hand.is_resolved() {
                    self.play_hand(index, &mut round, table)?;
                }
            }
        }

        round.settle(&mut self.deck)?;
        self.bankroll += round.winnings();
        self.history
            .push(RoundSummary::from_round(self.rounds_played, &round));
        table.round_settled(&round, self.bankroll)?;
        Ok(Some(round))
    }

    fn offer_insurance<T>(&mut self, round: &mut Round, table: &mut T) -> Result<(), SessionError>
    where
        T: PlayerInput + Presenter + ?Sized,
    {
        let cost = round.hand(0)?.bet().half();
        if !round.is_insurable() || self.bankroll < cost {
            return Ok(());
        }
        let choice = ask(table, Decision::Insurance { cost }, &insurance_actions(), round)?;
        if choice == Action::Insure {
            self.bankroll -= round.buy_insurance()?;
        }
        Ok(())
    }

    /// Offers splits hand by hand: while the current hand is a pair, the
    /// split budget remains and the bankroll covers another bet.
    fn offer_splits<T>(&mut self, round: &mut Round, table: &mut T) -> Result<(), SessionError>
    where
        T: PlayerInput + Presenter + ?Sized,
    {
        let mut index = 0;
        while index < round.hands().len() {
            loop {
                let hand = round.hand(index)?;
                let cost = hand.bet();
                if !hand.is_splittable()
                    || hand.is_resolved()
                    || !round.can_split()
                    || self.bankroll < cost
                {
                    break;
                }
                let decision = Decision::Split { hand: index, cost };
                if ask(table, decision, &split_actions(), round)? != Action::Split {
                    break;
                }
                self.bankroll -= cost;
                round.split(index, &mut self.deck)?;
                table.hands_updated(round)?;
            }
            index += 1;
        }
        Ok(())
    }

    fn play_hand<T>(
        &mut self,
        index: usize,
        round: &mut Round,
        table: &mut T,
    ) -> Result<(), SessionError>
    where
        T: PlayerInput + Presenter + ?Sized,
    {
        let mut first = true;
        loop {
            let hand = round.hand(index)?;
            if !first && hand.score() >= 21 {
                break;
            }
            let bet = hand.bet();
            let allowed = play_actions(self.bankroll >= bet, first && round.split_count() == 0);
            let decision = Decision::Play { hand: index, first };
            match ask(table, decision, &allowed, round)? {
                Action::Hit => {
                    round.hit(index, &mut self.deck)?;
                    table.hands_updated(round)?;
                    first = false;
                }
                Action::Stand => {
                    round.stand(index)?;
                    return Ok(());
                }
                Action::DoubleDown => {
                    self.bankroll -= bet;
                    round.double_down(index, &mut self.deck)?;
                    table.hands_updated(round)?;
                    return Ok(());
                }
                Action::Surrender => {
                    let refund = round.surrender(index)?;
                    self.bankroll += refund;
                    table.surrendered(index, refund)?;
                    return Ok(());
                }
                action @ (Action::Insure | Action::Split | Action::Skip) => {
                    return Err(SessionError::UnexpectedAction { action, allowed });
                }
            }
        }
        round.stand(index)?;
        Ok(())
    }
}

fn ask<T>(
    table: &mut T,
    decision: Decision,
    allowed: &[Action],
    round: &Round,
) -> Result<Action, SessionError>
where
    T: PlayerInput + Presenter + ?Sized,
{
    match table.choose(decision, allowed, round)? {
        None => Err(SessionError::InputClosed),
        Some(action) if allowed.contains(&action) => Ok(action),
        Some(action) => Err(SessionError::UnexpectedAction {
            action,
            allowed: allowed.to_vec(),
        }),
    }
}
