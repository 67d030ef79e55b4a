use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::{Player, Seat};
use crate::rules::Play;
use crate::scoring::Score;

/// Stage of the game session.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// No round has been dealt yet
    Idle,
    /// A fresh deck is being shuffled and dealt
    Shuffling,
    /// Waiting for the human bid; bots bid right after it
    Bidding,
    /// Tricks are being played
    Playing,
    /// All 13 tricks played and the round scored
    RoundEnd,
    /// Final round scored; terminal
    GameEnd,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "IDLE",
            Phase::Shuffling => "SHUFFLING",
            Phase::Bidding => "BIDDING",
            Phase::Playing => "PLAYING",
            Phase::RoundEnd => "ROUND_END",
            Phase::GameEnd => "GAME_END",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved trick: the four plays in order and the seat that took it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CompletedTrick {
    pub plays: Vec<Play>,
    pub winner: Seat,
}

/// Per-seat line of a round's scoreboard.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatResult {
    pub seat: Seat,
    pub bid: u8,
    pub tricks_won: u8,
    pub round_score: Score,
    pub total_score: Score,
}

/// Scoreboard entry recorded when a round ends. Kept in memory only.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u8,
    pub seats: Vec<SeatResult>,
}

/// Public view of one seat. Opponents' cards are reduced to a count.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatView {
    pub seat: Seat,
    pub name: String,
    pub is_bot: bool,
    pub hand_size: usize,
    pub bid: Option<u8>,
    pub tricks_won: u8,
    pub round_score: Score,
    pub total_score: Score,
}

impl SeatView {
    pub(crate) fn of(player: &Player) -> Self {
        Self {
            seat: player.seat(),
            name: player.name().to_string(),
            is_bot: player.is_bot(),
            hand_size: player.hand_size(),
            bid: player.bid(),
            tricks_won: player.tricks_won(),
            round_score: player.round_score(),
            total_score: player.total_score(),
        }
    }
}

/// Read-only snapshot handed to the presentation layer after every
/// transition, from the human seat's point of view.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,
    /// Current round, 1 through 5
    pub round: u8,
    /// Seat expected to act while playing
    pub turn: Option<Seat>,
    /// The human seat's cards, in display order
    pub hand: Vec<Card>,
    pub seats: Vec<SeatView>,
    pub trick: Vec<Play>,
    pub last_trick: Option<CompletedTrick>,
    /// Human-readable description of the last transition
    pub status: String,
}

impl GameState {
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameEnd
    }

    pub fn seat(&self, seat: Seat) -> Option<&SeatView> {
        self.seats.get(seat)
    }
}
