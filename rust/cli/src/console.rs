//! Terminal collaborator: reads bets and decisions from a line-oriented
//! reader and renders the table to a writer.

use std::io::{self, BufRead, Write};

use blackjack_engine::logger::{RoundLogger, RoundRecord};
use blackjack_engine::money::Money;
use blackjack_engine::player::{Action, Decision, PlayerInput};
use blackjack_engine::presenter::Presenter;
use blackjack_engine::round::Round;
use blackjack_engine::session::{SessionStatus, SessionSummary};

use crate::formatters::{format_cards, format_dealer_up, format_hand, format_outcome};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{self, ParseResult};

pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
    history: Option<(&'a mut RoundLogger, u64)>,
}

impl<'a> Console<'a> {
    pub fn new(input: &'a mut dyn BufRead, out: &'a mut dyn Write) -> Self {
        Self {
            input,
            out,
            history: None,
        }
    }

    /// Also appends every settled round, tagged with `seed`, to `logger`.
    pub fn with_history(mut self, logger: &'a mut RoundLogger, seed: u64) -> Self {
        self.history = Some((logger, seed));
        self
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(read_stdin_line(self.input))
    }

    fn write_hands(&mut self, round: &Round) -> io::Result<()> {
        let live: Vec<_> = round.hands().iter().filter(|h| !h.is_empty()).collect();
        if live.len() == 1 {
            writeln!(self.out, "Your hand: {}", format_hand(live[0]))
        } else {
            for (i, hand) in live.iter().enumerate() {
                writeln!(self.out, "Hand {}: {}", i + 1, format_hand(hand))?;
            }
            Ok(())
        }
    }
}

fn play_prompt(hand: usize, hand_count: usize, allowed: &[Action]) -> String {
    let mut options = Vec::new();
    for action in allowed {
        let label = match action {
            Action::Hit => "H for Hit",
            Action::Stand => "S for Stand",
            Action::DoubleDown => "DD for Double-Down",
            Action::Surrender => "R for suRrender",
            _ => continue,
        };
        options.push(label);
    }
    let prefix = if hand_count > 1 {
        format!("Hand {}: ", hand + 1)
    } else {
        String::new()
    };
    format!("{}Press {}: ", prefix, options.join(", "))
}

impl PlayerInput for Console<'_> {
    fn place_bet(&mut self, bankroll: Money) -> io::Result<Option<u64>> {
        loop {
            let Some(line) = self.prompt("Place your bet for this round (q to quit): ")? else {
                return Ok(None);
            };
            if validation::is_quit(&line) {
                return Ok(None);
            }
            match validation::parse_bet(&line, bankroll) {
                Ok(amount) => return Ok(Some(amount)),
                Err(msg) => writeln!(self.out, "{}", msg)?,
            }
        }
    }

    fn choose(
        &mut self,
        decision: Decision,
        allowed: &[Action],
        round: &Round,
    ) -> io::Result<Option<Action>> {
        match decision {
            Decision::Insurance { cost } => {
                let text = format!(
                    "Press I to buy Insurance for {} or any other key to skip: ",
                    cost
                );
                Ok(self
                    .prompt(&text)?
                    .map(|line| validation::parse_offer(&line, Action::Insure)))
            }
            Decision::Split { hand, cost } => {
                let text = format!(
                    "Hand {} is a pair. Press S to Split for {} or any other key to skip: ",
                    hand + 1,
                    cost
                );
                Ok(self
                    .prompt(&text)?
                    .map(|line| validation::parse_offer(&line, Action::Split)))
            }
            Decision::Play { hand, .. } => {
                let text = play_prompt(hand, round.hands().len(), allowed);
                loop {
                    let Some(line) = self.prompt(&text)? else {
                        return Ok(None);
                    };
                    match validation::parse_play_action(&line, allowed) {
                        ParseResult::Action(action) => return Ok(Some(action)),
                        ParseResult::Quit => return Ok(None),
                        ParseResult::Invalid(msg) => writeln!(self.out, "{}", msg)?,
                    }
                }
            }
        }
    }
}

impl Presenter for Console<'_> {
    fn round_started(&mut self, status: &SessionStatus) -> io::Result<()> {
        writeln!(self.out)?;
        ui::write_banner(self.out, '#', &format!("ROUND {}", status.round_number))?;
        match status.rounds_remaining {
            Some(n) => writeln!(
                self.out,
                "There are {} remaining rounds after this one",
                n.saturating_sub(1)
            )?,
            None => writeln!(
                self.out,
                "There are {} cards remaining",
                status.cards_remaining
            )?,
        }
        writeln!(self.out, "Your balance: {}", status.bankroll)
    }

    fn table_dealt(&mut self, round: &Round) -> io::Result<()> {
        writeln!(self.out, "Dealer's hand: {}", format_dealer_up(round.dealer()))?;
        writeln!(self.out, "{}", ui::rule('-'))?;
        self.write_hands(round)
    }

    fn hands_updated(&mut self, round: &Round) -> io::Result<()> {
        self.write_hands(round)
    }

    fn surrendered(&mut self, _hand: usize, refund: Money) -> io::Result<()> {
        writeln!(self.out, "You'll get back half of your bet: {}", refund)
    }

    fn round_settled(&mut self, round: &Round, bankroll: Money) -> io::Result<()> {
        ui::write_banner(self.out, '=', "This round is settled")?;
        let dealer = round.dealer();
        if round.dealer_played() {
            writeln!(
                self.out,
                "Dealer's hand: {} {}",
                format_cards(dealer.cards()),
                dealer.score()
            )?;
        } else {
            writeln!(
                self.out,
                "Dealer's hand: {} (no play needed)",
                format_cards(dealer.cards())
            )?;
        }
        let hands = round.hands().iter().filter(|h| !h.is_empty());
        for (i, (hand, outcome)) in hands.zip(round.outcomes()).enumerate() {
            writeln!(
                self.out,
                "Hand {}: {} -> {}",
                i + 1,
                format_hand(hand),
                format_outcome(*outcome)
            )?;
        }
        writeln!(self.out, "Total bet: {}", round.total_bet())?;
        if !round.insurance().is_zero() {
            writeln!(self.out, "Insurance: {}", round.insurance())?;
        }
        writeln!(self.out, "Winnings: {}", round.winnings())?;
        writeln!(self.out, "Your balance: {}", bankroll)?;

        if let Some((logger, seed)) = self.history.as_mut() {
            let record = RoundRecord::from_round(logger.next_id(), Some(*seed), round, bankroll);
            logger.write(&record)?;
        }
        Ok(())
    }

    fn session_finished(&mut self, summary: &SessionSummary) -> io::Result<()> {
        writeln!(self.out)?;
        ui::write_banner(
            self.out,
            '*',
            &format!("End of game! You've played {} rounds!", summary.rounds_played),
        )?;
        for r in &summary.rounds {
            let outcomes: Vec<&str> = r.outcomes.iter().map(|o| format_outcome(*o)).collect();
            writeln!(
                self.out,
                "  Round {:>2}: bet {}, returned {} [{}]",
                r.number,
                r.bet + r.insurance,
                r.winnings,
                outcomes.join(", ")
            )?;
        }
        writeln!(self.out, "Initial investment: {}", summary.initial_bankroll)?;
        writeln!(self.out, "Final balance: {}", summary.final_bankroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_engine::cards::{Card, Rank, Suit};
    use blackjack_engine::deck::Deck;
    use std::io::Cursor;

    fn dealt_round(ranks: &[Rank]) -> Round {
        let cards = ranks.iter().map(|&r| Card::new(r, Suit::Clubs)).collect();
        let mut deck = Deck::from_cards(cards);
        let mut round = Round::new(Money::from_whole(10));
        round.deal_initial(&mut deck).unwrap();
        round
    }

    #[test]
    fn bet_prompt_reprompts_until_valid() {
        let mut input = Cursor::new(b"abc\n500\n25\n".to_vec());
        let mut out = Vec::new();
        let bet = Console::new(&mut input, &mut out)
            .place_bet(Money::from_whole(100))
            .unwrap();
        assert_eq!(bet, Some(25));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid bet 'abc'"));
        assert!(text.contains("exceeds your balance"));
    }

    #[test]
    fn bet_prompt_ends_on_quit_or_eof() {
        let mut out = Vec::new();
        let mut quit = Cursor::new(b"q\n".to_vec());
        assert_eq!(
            Console::new(&mut quit, &mut out)
                .place_bet(Money::from_whole(100))
                .unwrap(),
            None
        );
        let mut eof = Cursor::new(Vec::new());
        assert_eq!(
            Console::new(&mut eof, &mut out)
                .place_bet(Money::from_whole(100))
                .unwrap(),
            None
        );
    }

    #[test]
    fn play_choice_skips_unavailable_tokens() {
        let round = dealt_round(&[Rank::Ten, Rank::Nine, Rank::Six, Rank::Seven]);
        let mut input = Cursor::new(b"r\nx\nh\n".to_vec());
        let mut out = Vec::new();
        let allowed = [Action::Hit, Action::Stand];
        let choice = Console::new(&mut input, &mut out)
            .choose(Decision::Play { hand: 0, first: false }, &allowed, &round)
            .unwrap();
        assert_eq!(choice, Some(Action::Hit));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Press H for Hit, S for Stand: "));
        assert!(text.contains("'R' is not available now"));
        assert!(text.contains("Unrecognized action 'x'"));
    }

    #[test]
    fn insurance_offer_takes_any_other_key_as_skip() {
        let round = dealt_round(&[Rank::Ten, Rank::Ace, Rank::Six, Rank::Seven]);
        let mut input = Cursor::new(b"n\n".to_vec());
        let mut out = Vec::new();
        let decision = Decision::Insurance {
            cost: Money::from_whole(5),
        };
        let choice = Console::new(&mut input, &mut out)
            .choose(decision, &[Action::Insure, Action::Skip], &round)
            .unwrap();
        assert_eq!(choice, Some(Action::Skip));
        assert!(String::from_utf8(out).unwrap().contains("Insurance for $5.00"));
    }

    #[test]
    fn dealt_table_hides_hole_card() {
        let round = dealt_round(&[Rank::Ten, Rank::Nine, Rank::Six, Rank::Ace]);
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        Console::new(&mut input, &mut out)
            .table_dealt(&round)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Dealer's hand: [9"));
        assert!(text.contains("??]"));
        assert!(text.contains("Your hand: [10"));
    }
}
