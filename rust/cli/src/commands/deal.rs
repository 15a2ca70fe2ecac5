//! Deals the opening cards of one round from a freshly shuffled single deck
//! and shows both hands face up.

use std::io::Write;

use blackjack_engine::deck::Deck;
use blackjack_engine::money::Money;
use blackjack_engine::round::Round;

use crate::error::CliError;
use crate::formatters::format_hand;

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new(1, seed)?;
    let mut round = Round::new(Money::from_whole(1));
    round.deal_initial(&mut deck)?;
    let player = round.hand(0)?;

    let yes_no = |b: bool| if b { "yes" } else { "no" };
    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Player: {}", format_hand(player))?;
    writeln!(out, "Dealer: {}", format_hand(round.dealer()))?;
    writeln!(out, "Insurable: {}", yes_no(round.is_insurable()))?;
    writeln!(out, "Splittable: {}", yes_no(player.is_splittable()))?;
    Ok(())
}
