use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::scoring::Score;

/// Seat index at the table, `0..SEATS`, clockwise.
pub type Seat = usize;

/// Number of seats at a Callbreak table.
pub const SEATS: usize = 4;

/// The single human-controlled seat.
pub const HUMAN_SEAT: Seat = 0;

const SEAT_NAMES: [&str; SEATS] = ["You", "Sita (AI)", "Ram (AI)", "Gita (AI)"];

/// Next seat clockwise.
pub fn next_seat(seat: Seat) -> Seat {
    (seat + 1) % SEATS
}

/// Represents one seat's player: identity, round-scoped hand and bid, and the
/// running total that persists across rounds.
///
/// Only the public side of a seat is exposed outside the engine. The cards
/// are reached through [`GameSession`](crate::engine::GameSession), which
/// separates the human's view from full-information access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    seat: Seat,
    name: String,
    is_bot: bool,
    #[serde(skip)]
    hand: Vec<Card>,
    bid: Option<u8>,
    tricks_won: u8,
    round_score: Score,
    total_score: Score,
}

impl Player {
    pub fn new(seat: Seat) -> Self {
        Self {
            seat,
            name: SEAT_NAMES[seat % SEATS].to_string(),
            is_bot: seat != HUMAN_SEAT,
            hand: Vec::new(),
            bid: None,
            tricks_won: 0,
            round_score: Score::ZERO,
            total_score: Score::ZERO,
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn is_bot(&self) -> bool {
        self.is_bot
    }
    pub(crate) fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }
    pub fn bid(&self) -> Option<u8> {
        self.bid
    }
    pub fn tricks_won(&self) -> u8 {
        self.tricks_won
    }
    pub fn round_score(&self) -> Score {
        self.round_score
    }
    pub fn total_score(&self) -> Score {
        self.total_score
    }

    /// Takes a freshly dealt hand and clears every round-scoped field.
    pub(crate) fn start_round(&mut self, hand: Vec<Card>) {
        self.hand = hand;
        self.bid = None;
        self.tricks_won = 0;
        self.round_score = Score::ZERO;
    }

    pub(crate) fn set_bid(&mut self, bid: u8) {
        self.bid = Some(bid);
    }

    /// Removes `card` from the hand, returning whether it was held.
    pub(crate) fn remove_card(&mut self, card: Card) -> bool {
        match self.hand.iter().position(|&c| c == card) {
            Some(idx) => {
                self.hand.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn win_trick(&mut self) {
        self.tricks_won += 1;
    }

    pub(crate) fn record_round_score(&mut self, score: Score) {
        self.round_score = score;
        self.total_score += score;
    }
}
