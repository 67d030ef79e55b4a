use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{full_deck, Card};
use crate::player::{Seat, SEATS};

/// Cards dealt to each seat per round.
pub const HAND_SIZE: usize = 13;

/// One round's 52-card deck. Consumed by [`Deck::deal`]; a new deck is built
/// for every round.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: [Card; 52],
}

impl Deck {
    /// Unshuffled deck in suit-then-rank order.
    pub fn ordered() -> Self {
        Self { cards: full_deck() }
    }

    /// Fresh deck with a uniform Fisher-Yates permutation drawn from `rng`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self { cards }
    }

    pub fn cards(&self) -> &[Card; 52] {
        &self.cards
    }

    /// Splits the deck round-robin (`i % 4`) into four 13-card hands, each
    /// sorted for display.
    pub fn deal(self) -> [Vec<Card>; SEATS] {
        let mut hands: [Vec<Card>; SEATS] = std::array::from_fn(|_| Vec::with_capacity(HAND_SIZE));
        for (i, card) in self.cards.into_iter().enumerate() {
            let seat: Seat = i % SEATS;
            hands[seat].push(card);
        }
        for hand in &mut hands {
            sort_hand(hand);
        }
        hands
    }
}

/// Display order: spades first, then clubs, diamonds, hearts; each suit from
/// high to low. Never affects legality.
pub fn sort_hand(hand: &mut [Card]) {
    hand.sort_by(|a, b| {
        a.suit
            .display_order()
            .cmp(&b.suit.display_order())
            .then(b.rank.cmp(&a.rank))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn ordered_deal_gives_each_seat_every_fourth_card() {
        let hands = Deck::ordered().deal();
        // Clubs 2 is index 0, Clubs 6 is index 4: both land on seat 0.
        assert!(hands[0].contains(&Card::new(Suit::Clubs, Rank::Two)));
        assert!(hands[0].contains(&Card::new(Suit::Clubs, Rank::Six)));
        assert!(hands[1].contains(&Card::new(Suit::Clubs, Rank::Three)));
        assert!(hands.iter().all(|h| h.len() == HAND_SIZE));
    }

    #[test]
    fn sort_hand_puts_spades_first_then_suit_groups_descending() {
        let mut hand = vec![
            Card::new(Suit::Hearts, Rank::Two),
            Card::new(Suit::Clubs, Rank::Four),
            Card::new(Suit::Spades, Rank::Three),
            Card::new(Suit::Diamonds, Rank::Ace),
            Card::new(Suit::Spades, Rank::King),
            Card::new(Suit::Clubs, Rank::Jack),
        ];
        sort_hand(&mut hand);
        assert_eq!(
            hand,
            vec![
                Card::new(Suit::Spades, Rank::King),
                Card::new(Suit::Spades, Rank::Three),
                Card::new(Suit::Clubs, Rank::Jack),
                Card::new(Suit::Clubs, Rank::Four),
                Card::new(Suit::Diamonds, Rank::Ace),
                Card::new(Suit::Hearts, Rank::Two),
            ]
        );
    }
}
