mod helpers;

use blackjack_engine::cards::Rank::*;
use blackjack_engine::hand::ScoreKind;
use helpers::hand;

#[test]
fn ace_with_nine_is_soft_twenty() {
    let h = hand(&[Ace, Nine]);
    assert_eq!(h.score(), 20);
    assert_eq!(h.score_kind(), ScoreKind::Soft);
}

#[test]
fn pair_of_aces_reduces_once() {
    let h = hand(&[Ace, Ace]);
    assert_eq!(h.score(), 12);
    assert_eq!(h.score_kind(), ScoreKind::Soft);
}

#[test]
fn two_aces_and_nine_reduce_once_to_soft_twenty_one() {
    let h = hand(&[Ace, Nine, Ace]);
    assert_eq!(h.score(), 21);
    assert_eq!(h.score_kind(), ScoreKind::Soft);
    assert!(h.is_twenty_one());
    assert!(!h.is_blackjack(), "three-card 21 is not a blackjack");
}

#[test]
fn every_ace_reduced_makes_hand_hard() {
    let h = hand(&[Ace, Six, Ten]);
    assert_eq!(h.score(), 17);
    assert_eq!(h.score_kind(), ScoreKind::Hard);

    let h = hand(&[Ace, Ace, Ace, Nine, Nine]);
    assert_eq!(h.score(), 23);
    assert_eq!(h.score_kind(), ScoreKind::Hard);
    assert!(h.is_bust());
}

#[test]
fn hands_without_aces_are_hard() {
    let h = hand(&[Two, Two]);
    assert_eq!(h.score(), 4);
    assert_eq!(h.score_kind(), ScoreKind::Hard);
}

#[test]
fn blackjack_needs_two_cards() {
    assert!(hand(&[Ace, King]).is_blackjack());
    assert!(hand(&[Queen, Ace]).is_blackjack());
    assert!(!hand(&[Seven, Seven, Seven]).is_blackjack());
    assert!(!hand(&[Ten, Nine]).is_blackjack());
}

#[test]
fn bust_over_twenty_one() {
    assert!(hand(&[Ten, Six, King]).is_bust());
    assert!(!hand(&[Ten, Six, Five]).is_bust());
}

#[test]
fn equal_values_are_splittable() {
    assert!(hand(&[Ten, King]).is_splittable());
    assert!(hand(&[Eight, Eight]).is_splittable());
    assert!(hand(&[Ace, Ace]).is_splittable());
    assert!(!hand(&[Ten, Nine]).is_splittable());
    assert!(!hand(&[Eight, Eight, Eight]).is_splittable());
}
