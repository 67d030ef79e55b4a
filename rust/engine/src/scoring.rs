//! Round scoring.
//!
//! Scores are kept in tenths of a point so that overtrick bonuses (0.1 each)
//! add up exactly and totals compare without floating-point drift.

use std::fmt;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// A score in tenths of a point (`52` is 5.2).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(i32);

impl Score {
    pub const ZERO: Score = Score(0);

    pub const fn from_tenths(tenths: i32) -> Self {
        Score(tenths)
    }

    pub fn tenths(self) -> i32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Score) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        f.pad(&format!("{}{}.{}", sign, abs / 10, abs % 10))
    }
}

/// Score for one round: making the bid earns the bid plus 0.1 per overtrick,
/// missing it forfeits the full bid.
///
/// # Examples
///
/// ```
/// use callbreak_engine::scoring::{score_round, Score};
///
/// assert_eq!(score_round(5, 5), Score::from_tenths(50));
/// assert_eq!(score_round(5, 7), Score::from_tenths(52));
/// assert_eq!(score_round(5, 3), Score::from_tenths(-50));
/// ```
pub fn score_round(bid: u8, tricks_won: u8) -> Score {
    let bid = i32::from(bid);
    let won = i32::from(tricks_won);
    if won >= bid {
        Score(bid * 10 + (won - bid))
    } else {
        Score(-bid * 10)
    }
}
