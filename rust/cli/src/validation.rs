//! Parsing of interactive answers: bets, play tokens and offer replies.
//! All tokens are case-insensitive.

use blackjack_engine::money::Money;
use blackjack_engine::player::Action;

/// Result of parsing one answer at a play decision.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// One of the allowed actions
    Action(Action),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

pub fn is_quit(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "q" | "quit")
}

/// Parses a play token (`H`, `S`, `DD`, `R`) and checks it against `allowed`.
///
/// ```rust
/// # use blackjack_cli::validation::{parse_play_action, ParseResult};
/// use blackjack_engine::player::Action;
///
/// let allowed = [Action::Hit, Action::Stand];
/// assert_eq!(parse_play_action("h", &allowed), ParseResult::Action(Action::Hit));
/// assert!(matches!(parse_play_action("dd", &allowed), ParseResult::Invalid(_)));
/// assert_eq!(parse_play_action("quit", &allowed), ParseResult::Quit);
/// ```
pub fn parse_play_action(input: &str, allowed: &[Action]) -> ParseResult {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    if is_quit(&input) {
        return ParseResult::Quit;
    }

    let action = match input.as_str() {
        "h" | "hit" => Action::Hit,
        "s" | "stand" => Action::Stand,
        "dd" | "double" => Action::DoubleDown,
        "r" | "surrender" => Action::Surrender,
        other => {
            return ParseResult::Invalid(format!(
                "Unrecognized action '{}'. Valid actions: {}",
                other,
                token_list(allowed)
            ));
        }
    };
    if allowed.contains(&action) {
        ParseResult::Action(action)
    } else {
        ParseResult::Invalid(format!(
            "'{}' is not available now. Valid actions: {}",
            action.token(),
            token_list(allowed)
        ))
    }
}

/// Reply to an insurance or split offer: `accept` when its token was
/// typed, `Skip` for anything else.
pub fn parse_offer(input: &str, accept: Action) -> Action {
    if input.trim().eq_ignore_ascii_case(accept.token()) {
        accept
    } else {
        Action::Skip
    }
}

/// Parses a whole-unit bet between 1 and the bankroll's whole units.
pub fn parse_bet(input: &str, bankroll: Money) -> Result<u64, String> {
    let maximum = (bankroll.cents() / 100).max(0) as u64;
    let amount: u64 = input
        .trim()
        .parse()
        .map_err(|_| format!("Invalid bet '{}'. Enter a whole number", input.trim()))?;
    if amount == 0 {
        return Err("Bet must be positive".to_string());
    }
    if amount > maximum {
        return Err(format!("Bet exceeds your balance of {}", bankroll));
    }
    Ok(amount)
}

fn token_list(allowed: &[Action]) -> String {
    allowed
        .iter()
        .map(|a| a.token())
        .collect::<Vec<_>>()
        .join(", ")
}
