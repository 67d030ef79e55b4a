//! Cooperative pacing for bot turns.
//!
//! The engine itself never waits. A presentation layer that wants bots to
//! "think" for a moment wraps the session in a [`BotScheduler`] and calls
//! [`BotScheduler::poll`] from its own loop or timer; at most one bot card is
//! played per call, and only after the configured delay.

use std::time::{Duration, Instant};

use crate::engine::GameSession;
use crate::errors::GameError;
use crate::game::Phase;
use crate::rules::Play;

/// Identifies one pending turn: round, seat on turn, and cards still in hand.
type TurnKey = (u8, usize, usize);

#[derive(Debug, Clone)]
pub struct BotScheduler {
    delay: Duration,
    pending: Option<(TurnKey, Instant)>,
}

impl BotScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// When the pending bot turn becomes due, if one is being timed.
    pub fn ready_at(&self) -> Option<Instant> {
        self.pending.map(|(_, since)| since + self.delay)
    }

    /// Plays the bot on turn if its delay has elapsed by `now`.
    ///
    /// A bot turn seen for the first time starts its timer at `now`. Returns
    /// `Ok(None)` when nothing was played: not playing, human on turn, or
    /// still waiting.
    pub fn poll(&mut self, session: &mut GameSession, now: Instant) -> Result<Option<Play>, GameError> {
        if session.phase() != Phase::Playing {
            self.pending = None;
            return Ok(None);
        }
        let seat = session.current_turn();
        if !session.players()[seat].is_bot() {
            self.pending = None;
            return Ok(None);
        }

        let cards_left: usize = session.players().iter().map(|p| p.hand_size()).sum();
        let key = (session.round(), seat, cards_left);
        let since = match self.pending {
            Some((pending_key, since)) if pending_key == key => since,
            _ => {
                self.pending = Some((key, now));
                now
            }
        };
        if now.duration_since(since) < self.delay {
            return Ok(None);
        }

        self.pending = None;
        session.play_bot_turn()
    }
}
