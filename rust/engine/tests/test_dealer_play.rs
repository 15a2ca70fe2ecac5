mod helpers;

use blackjack_engine::cards::Rank::{self, *};
use blackjack_engine::money::Money;
use blackjack_engine::round::{Outcome, Round};
use helpers::stacked;

/// Deals player (p1, p2) and dealer (d1, d2), stands the player and settles.
fn settle_with(player: [Rank; 2], dealer: [Rank; 2], draws: &[Rank]) -> Round {
    let mut cards = vec![player[0], dealer[0], player[1], dealer[1]];
    cards.extend_from_slice(draws);
    let mut deck = stacked(&cards);
    let mut round = Round::new(Money::from_whole(100));
    round.deal_initial(&mut deck).unwrap();
    round.stand(0).unwrap();
    round.settle(&mut deck).unwrap();
    round
}

#[test]
fn dealer_hits_soft_seventeen() {
    let round = settle_with([Ten, Nine], [Ace, Six], &[Ten]);
    assert_eq!(round.dealer().cards().len(), 3);
    assert_eq!(round.dealer().score(), 17);
    assert_eq!(round.outcomes(), &[Outcome::Won]);
}

#[test]
fn dealer_keeps_hitting_soft_totals_until_twenty_one() {
    let round = settle_with([Ten, Nine], [Ace, Seven], &[Three]);
    assert_eq!(round.dealer().cards().len(), 3);
    assert_eq!(round.dealer().score(), 21);
    assert_eq!(round.outcomes(), &[Outcome::Lost]);
}

#[test]
fn dealer_stands_on_multi_card_soft_twenty_one() {
    let round = settle_with([Ten, Nine], [Ace, Six], &[Four, King]);
    assert_eq!(round.dealer().cards().len(), 3);
    assert_eq!(round.dealer().score(), 21);
}

#[test]
fn dealer_hits_hard_sixteen() {
    let round = settle_with([Ten, Nine], [Seven, Nine], &[Two]);
    assert_eq!(round.dealer().cards().len(), 3);
    assert_eq!(round.dealer().score(), 18);
    assert_eq!(round.outcomes(), &[Outcome::Won]);
}

#[test]
fn dealer_stands_on_hard_seventeen() {
    let round = settle_with([Ten, Nine], [Ten, Seven], &[]);
    assert_eq!(round.dealer().cards().len(), 2);
    assert_eq!(round.outcomes(), &[Outcome::Won]);
    assert_eq!(round.winnings(), Money::from_whole(200));
    assert!(round.dealer_played());
}

#[test]
fn dealer_skips_play_when_every_hand_is_bust() {
    let mut deck = stacked(&[Ten, Ten, Six, Six, King, Five]);
    let mut round = Round::new(Money::from_whole(100));
    round.deal_initial(&mut deck).unwrap();
    round.hit(0, &mut deck).unwrap();
    assert!(round.hand(0).unwrap().is_bust());
    round.stand(0).unwrap();
    round.settle(&mut deck).unwrap();

    assert_eq!(round.dealer().cards().len(), 2, "dealer must not draw");
    assert_eq!(deck.remaining(), 1);
    assert_eq!(round.outcomes(), &[Outcome::Lost]);
    assert!(!round.has_live_hand());
    assert!(!round.dealer_played());
}

#[test]
fn dealer_skips_play_after_surrender() {
    let mut deck = stacked(&[Ten, Ten, Six, Six, Five]);
    let mut round = Round::new(Money::from_whole(100));
    round.deal_initial(&mut deck).unwrap();
    assert_eq!(round.surrender(0).unwrap(), Money::from_whole(50));
    round.settle(&mut deck).unwrap();
    assert_eq!(round.dealer().cards().len(), 2);
    assert_eq!(round.outcomes(), &[Outcome::Surrendered]);
    assert_eq!(round.winnings(), Money::ZERO);
}

#[test]
fn stood_dealer_does_not_draw() {
    let mut deck = stacked(&[Ace, Nine, King, Six, Ten]);
    let mut round = Round::new(Money::from_whole(100));
    round.deal_initial(&mut deck).unwrap();
    round.stand(0).unwrap();
    round.dealer_stand();
    round.settle(&mut deck).unwrap();
    assert_eq!(round.dealer().score(), 15);
    assert_eq!(round.outcomes(), &[Outcome::Won]);
    assert_eq!(round.winnings(), Money::from_whole(250));
}
