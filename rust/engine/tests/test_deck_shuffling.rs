use std::collections::HashSet;

use callbreak_engine::cards::{Card, Suit};
use callbreak_engine::deck::{Deck, HAND_SIZE};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn shuffled_deck_has_52_unique_cards() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let deck = Deck::shuffled(&mut rng);
    let set: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(set.len(), 52);
    for suit in callbreak_engine::cards::all_suits() {
        assert_eq!(set.iter().filter(|c| c.suit == suit).count(), 13);
    }
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let a = Deck::shuffled(&mut ChaCha20Rng::seed_from_u64(12345));
    let b = Deck::shuffled(&mut ChaCha20Rng::seed_from_u64(12345));
    assert_eq!(a.cards(), b.cards(), "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let a = Deck::shuffled(&mut ChaCha20Rng::seed_from_u64(1));
    let b = Deck::shuffled(&mut ChaCha20Rng::seed_from_u64(2));
    assert_ne!(
        a.cards(),
        b.cards(),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn shuffle_moves_cards_from_factory_order() {
    let shuffled = Deck::shuffled(&mut ChaCha20Rng::seed_from_u64(777));
    assert_ne!(shuffled.cards(), Deck::ordered().cards());
}

#[test]
fn deal_assigns_by_index_modulo_four() {
    let deck = Deck::shuffled(&mut ChaCha20Rng::seed_from_u64(5));
    let order = *deck.cards();
    let hands = deck.deal();
    for (i, card) in order.iter().enumerate() {
        assert!(hands[i % 4].contains(card), "card {} at index {}", card, i);
    }
}

#[test]
fn dealt_hands_are_disjoint_and_cover_the_deck() {
    let deck = Deck::shuffled(&mut ChaCha20Rng::seed_from_u64(9));
    let expected: HashSet<Card> = deck.cards().iter().copied().collect();
    let hands = deck.deal();

    let mut seen = HashSet::new();
    for hand in &hands {
        assert_eq!(hand.len(), HAND_SIZE);
        for &card in hand {
            assert!(seen.insert(card), "card {} dealt twice", card);
        }
    }
    assert_eq!(seen, expected);
}

#[test]
fn dealt_hands_show_spades_first() {
    let hands = Deck::shuffled(&mut ChaCha20Rng::seed_from_u64(31)).deal();
    for hand in &hands {
        let spades = hand.iter().take_while(|c| c.suit == Suit::Spades).count();
        assert!(
            hand[spades..].iter().all(|c| c.suit != Suit::Spades),
            "spades must be grouped at the front: {:?}",
            hand
        );
        assert!(hand[..spades].windows(2).all(|w| w[0].rank > w[1].rank));
    }
}
