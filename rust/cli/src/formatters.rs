//! Card and hand formatters for terminal display.
//!
//! Suits render as ♥ ♦ ♣ ♠ where the terminal supports Unicode and as
//! h d c s otherwise.
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_cli::formatters::{format_card, format_cards};
//!
//! let ace = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace) == "A♠" || format_card(&ace) == "As");
//! assert!(format_cards(&[ace]).starts_with("[A"));
//! ```

use blackjack_engine::cards::{Card, Suit};
use blackjack_engine::hand::Hand;
use blackjack_engine::round::Outcome;

/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Unix-like systems are
/// assumed to render Unicode.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> &'static str {
    if supports_unicode() {
        suit.symbol()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.label(), format_suit(card.suit))
}

/// `[A♠ 10♥]`
pub fn format_cards(cards: &[Card]) -> String {
    let parts: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", parts.join(" "))
}

/// Cards followed by score and kind, with a note for blackjack, bust or
/// surrender: `[A♠ 10♥] 21 soft, Blackjack!`
pub fn format_hand(hand: &Hand) -> String {
    let mut line = format!(
        "{} {} {}",
        format_cards(hand.cards()),
        hand.score(),
        hand.score_kind()
    );
    if hand.is_surrendered() {
        line.push_str(", surrendered");
    } else if hand.is_blackjack() {
        line.push_str(", Blackjack!");
    } else if hand.is_bust() {
        line.push_str(", bust");
    }
    line
}

/// The dealer's up-card with the hole card hidden.
pub fn format_dealer_up(dealer: &Hand) -> String {
    match dealer.cards().first() {
        Some(up) => format!("[{} ??]", format_card(up)),
        None => "[]".to_string(),
    }
}

pub fn format_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Won => "WON",
        Outcome::Lost => "LOST",
        Outcome::Tied => "PUSH",
        Outcome::Surrendered => "SURRENDERED",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_engine::cards::Rank;
    use blackjack_engine::money::Money;

    fn hand(cards: &[(Rank, Suit)]) -> Hand {
        Hand::with_cards(
            cards.iter().map(|&(r, s)| Card::new(r, s)).collect(),
            Money::from_whole(10),
        )
    }

    #[test]
    fn ten_keeps_two_digits() {
        let card = Card::new(Rank::Ten, Suit::Hearts);
        assert!(format_card(&card).starts_with("10"));
    }

    #[test]
    fn blackjack_hand_is_annotated() {
        let h = hand(&[(Rank::Ace, Suit::Spades), (Rank::King, Suit::Clubs)]);
        let text = format_hand(&h);
        assert!(text.contains(" 21 soft"));
        assert!(text.ends_with("Blackjack!"));
    }

    #[test]
    fn bust_hand_is_annotated() {
        let h = hand(&[
            (Rank::King, Suit::Spades),
            (Rank::Queen, Suit::Clubs),
            (Rank::Five, Suit::Hearts),
        ]);
        assert!(format_hand(&h).ends_with("25 hard, bust"));
    }

    #[test]
    fn dealer_hole_card_is_hidden() {
        let d = hand(&[(Rank::Nine, Suit::Spades), (Rank::Ace, Suit::Clubs)]);
        let text = format_dealer_up(&d);
        assert!(text.starts_with("[9"));
        assert!(text.ends_with("??]"));
        assert!(!text.contains('A'));
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(format_outcome(Outcome::Tied), "PUSH");
        assert_eq!(format_outcome(Outcome::Won), "WON");
    }
}
