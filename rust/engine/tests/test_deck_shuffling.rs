use std::collections::{HashMap, HashSet};

use blackjack_engine::cards::Card;
use blackjack_engine::deck::Deck;
use blackjack_engine::errors::GameError;

#[test]
fn single_deck_has_52_unique_cards() {
    let mut deck = Deck::new(1, 42).unwrap();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.draw().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert_eq!(deck.draw(), Err(GameError::EmptyDeck));
}

#[test]
fn multi_deck_shoe_holds_each_card_once_per_deck() {
    let mut deck = Deck::new(3, 9).unwrap();
    assert_eq!(deck.remaining(), 156);
    let mut counts: HashMap<Card, usize> = HashMap::new();
    while let Ok(c) = deck.draw() {
        *counts.entry(c).or_default() += 1;
    }
    assert_eq!(counts.len(), 52);
    assert!(counts.values().all(|&n| n == 3));
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new(1, 12345).unwrap();
    let mut d2 = Deck::new(1, 12345).unwrap();
    let a: Vec<Card> = (0..10).map(|_| d1.draw().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new(1, 1).unwrap();
    let mut d2 = Deck::new(1, 2).unwrap();
    let a: Vec<Card> = (0..10).map(|_| d1.draw().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn reshuffle_restores_a_full_shoe() {
    let mut deck = Deck::new(2, 5).unwrap();
    for _ in 0..100 {
        deck.draw().unwrap();
    }
    assert_eq!(deck.remaining(), 4);
    deck.reshuffle();
    assert_eq!(deck.remaining(), 104);
}
