use thiserror::Error;

use crate::cards::{Card, Suit};
use crate::game::Phase;
use crate::player::Seat;

/// Errors returned by [`crate::engine::GameSession`] operations. Every error
/// leaves the session unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid bid: {0}")]
    InvalidBid(#[from] BidRejection),
    #[error("Invalid move: {0}")]
    InvalidMove(#[from] MoveRejection),
    #[error("Invalid transition: cannot {action} during {phase}")]
    InvalidTransition { action: &'static str, phase: Phase },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BidRejection {
    #[error("bid {0} is outside 1..=8")]
    OutOfRange(u8),
    #[error("bids are only accepted during bidding (currently {0})")]
    WrongPhase(Phase),
    #[error("seat {0} is not the human seat")]
    NotHumanSeat(Seat),
    #[error("seat {0} has already bid")]
    AlreadyBid(Seat),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("cards are only played during play (currently {0})")]
    WrongPhase(Phase),
    #[error("it's not seat {actual}'s turn (expected seat {expected})")]
    NotYourTurn { expected: Seat, actual: Seat },
    #[error("{0} is not in hand")]
    CardNotInHand(Card),
    #[error("must follow {lead:?}; {card} is off-suit")]
    MustFollowSuit { lead: Suit, card: Card },
}
