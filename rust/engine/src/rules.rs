use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::errors::MoveRejection;
use crate::player::{next_seat, Seat, SEATS};

/// Smallest bid a seat may make.
pub const MIN_BID: u8 = 1;
/// Largest bid a seat may make.
pub const MAX_BID: u8 = 8;
/// Rounds in one game.
pub const ROUNDS_PER_GAME: u8 = 5;

/// A single card played into a trick by a seat.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Play {
    pub seat: Seat,
    pub card: Card,
}

impl Play {
    pub fn new(seat: Seat, card: Card) -> Self {
        Self { seat, card }
    }
}

/// Plays of the trick in progress, in the order they were made. Holds at most
/// one play per seat.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct Trick {
    plays: Vec<Play>,
}

impl Trick {
    pub fn new() -> Self {
        Self {
            plays: Vec::with_capacity(SEATS),
        }
    }

    /// Rebuilds a trick in progress from plays in table order, such as the
    /// `trick` of a [`GameState`](crate::game::GameState) snapshot.
    ///
    /// Returns `None` unless the plays could have happened at a table: at most
    /// one per seat, seats following each other clockwise, no card twice.
    pub fn from_plays(plays: &[Play]) -> Option<Self> {
        if plays.len() > SEATS || plays.iter().any(|p| p.seat >= SEATS) {
            return None;
        }
        for (i, play) in plays.iter().enumerate().skip(1) {
            if play.seat != next_seat(plays[i - 1].seat) {
                return None;
            }
            if plays[..i].iter().any(|earlier| earlier.card == play.card) {
                return None;
            }
        }
        let mut trick = Self::new();
        trick.plays.extend_from_slice(plays);
        Some(trick)
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == SEATS
    }

    /// Suit of the first card played, if any.
    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|p| p.card.suit)
    }

    /// Whether any spade has been played into the trick.
    pub fn is_cut(&self) -> bool {
        self.plays.iter().any(|p| p.card.is_trump())
    }

    pub fn highest_trump(&self) -> Option<Card> {
        self.plays
            .iter()
            .map(|p| p.card)
            .filter(Card::is_trump)
            .max_by_key(|c| c.rank)
    }

    /// The play currently winning the trick.
    pub fn winning_play(&self) -> Option<Play> {
        winning_play(&self.plays)
    }

    /// # Panics
    ///
    /// Panics if the trick already holds a play from every seat; the session
    /// resolves a trick as soon as it is complete.
    pub(crate) fn push(&mut self, play: Play) {
        assert!(
            !self.is_complete(),
            "trick already holds {} plays; refusing {:?}",
            SEATS,
            play
        );
        self.plays.push(play);
    }

    pub(crate) fn take(&mut self) -> Vec<Play> {
        std::mem::replace(&mut self.plays, Vec::with_capacity(SEATS))
    }
}

/// Checks a candidate play against the player's hand and the trick so far.
///
/// A card must be in hand. Leading, any card may be played. Following, a hand
/// holding the lead suit must play it; a hand void in the lead suit may play
/// anything, with no obligation to trump or to beat the table.
///
/// # Examples
///
/// ```
/// use callbreak_engine::cards::{Card, Rank, Suit};
/// use callbreak_engine::errors::MoveRejection;
/// use callbreak_engine::rules::check_move;
///
/// let hand = [
///     Card::new(Suit::Hearts, Rank::Two),
///     Card::new(Suit::Spades, Rank::Ace),
/// ];
/// let lead = Some(Suit::Hearts);
/// assert!(check_move(hand[0], &hand, lead).is_ok());
/// assert!(matches!(
///     check_move(hand[1], &hand, lead),
///     Err(MoveRejection::MustFollowSuit { .. })
/// ));
/// ```
pub fn check_move(card: Card, hand: &[Card], lead_suit: Option<Suit>) -> Result<(), MoveRejection> {
    if !hand.contains(&card) {
        return Err(MoveRejection::CardNotInHand(card));
    }
    match lead_suit {
        Some(lead) if card.suit != lead && hand.iter().any(|c| c.suit == lead) => {
            Err(MoveRejection::MustFollowSuit { lead, card })
        }
        _ => Ok(()),
    }
}

/// Boolean form of [`check_move`] against a trick in progress.
pub fn is_valid_move(card: Card, hand: &[Card], trick: &Trick) -> bool {
    check_move(card, hand, trick.lead_suit()).is_ok()
}

/// Every card in `hand` that may legally be played into `trick`, in hand order.
pub fn valid_cards(hand: &[Card], trick: &Trick) -> Vec<Card> {
    let lead = trick.lead_suit();
    hand.iter()
        .copied()
        .filter(|&c| check_move(c, hand, lead).is_ok())
        .collect()
}

/// Seat of the play winning `plays` so far, or `None` for an empty trick.
///
/// A spade beats any non-spade; between spades the higher rank wins; without a
/// spade, the highest card of the lead suit wins. Off-suit non-spades never win.
pub fn trick_winner(plays: &[Play]) -> Option<Seat> {
    winning_play(plays).map(|p| p.seat)
}

fn winning_play(plays: &[Play]) -> Option<Play> {
    let (first, rest) = plays.split_first()?;
    let lead = first.card.suit;
    let mut best = *first;
    for play in rest {
        let card = play.card;
        let beats = match (card.is_trump(), best.card.is_trump()) {
            (true, false) => true,
            (true, true) => card.rank > best.card.rank,
            (false, true) => false,
            (false, false) => card.suit == lead && card.rank > best.card.rank,
        };
        if beats {
            best = *play;
        }
    }
    Some(best)
}
