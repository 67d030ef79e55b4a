//! Bot decision making.
//!
//! Both heuristics are pure functions of the hand and the trick in progress.
//! The only randomness is the easy tier's bid jitter, drawn from the caller's
//! RNG so seeded sessions replay exactly.
//!
//! ## Strategies
//!
//! [`Strategy`] is the seam the session and the CLI drive seats through:
//!
//! - [`HeuristicStrategy`] - bidding and card heuristics used by the bot seats
//! - [`RandomStrategy`] - any valid card; the forced move for a timed-out human
//!
//! ```rust
//! use callbreak_engine::bot::{create_strategy, Difficulty};
//!
//! let bot = create_strategy("heuristic", Difficulty::Hard).expect("known strategy");
//! assert_eq!(bot.name(), "heuristic");
//! assert!(create_strategy("mcts", Difficulty::Hard).is_none());
//! ```

use std::fmt;
use std::str::FromStr;

use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::rules::{valid_cards, Trick, MAX_BID, MIN_BID};

/// Bot skill tier.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Bids are nudged by one trick at random
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}

/// Estimated tricks in half-trick units.
///
/// High spades (J and up) and non-spade aces count a full trick; non-spade
/// kings count half. With more than four spades, every lower spade adds half a
/// trick for length.
fn estimate_half_tricks(hand: &[Card]) -> u8 {
    let spades = hand.iter().filter(|c| c.is_trump()).count();
    hand.iter()
        .map(|c| match (c.is_trump(), c.rank) {
            (true, r) if r >= Rank::Jack => 2,
            (true, _) if spades > 4 => 1,
            (true, _) => 0,
            (false, Rank::Ace) => 2,
            (false, Rank::King) => 1,
            (false, _) => 0,
        })
        .sum()
}

/// Bot bid for `hand`, always within `MIN_BID..=MAX_BID`.
///
/// The estimate is floored and raised to at least one. Easy bots then move it
/// one trick up or down at random; other tiers are deterministic and only cap
/// it at eight.
///
/// # Examples
///
/// ```
/// use callbreak_engine::bot::{calculate_bot_bid, Difficulty};
/// use callbreak_engine::cards::Card;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let hand: Vec<Card> = ["AS", "KS", "QS", "AH", "KD", "2C"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// // 3 high spades + ace of hearts + half for the king of diamonds
/// assert_eq!(calculate_bot_bid(&hand, Difficulty::Medium, &mut rng), 4);
/// ```
pub fn calculate_bot_bid<R: Rng + ?Sized>(hand: &[Card], difficulty: Difficulty, rng: &mut R) -> u8 {
    let base = (estimate_half_tricks(hand) / 2).max(MIN_BID);
    match difficulty {
        Difficulty::Easy => {
            let nudged = if rng.random_bool(0.5) {
                base.saturating_add(1)
            } else {
                base.saturating_sub(1)
            };
            nudged.clamp(MIN_BID, MAX_BID)
        }
        Difficulty::Medium | Difficulty::Hard => base.min(MAX_BID),
    }
}

/// Card a bot plays from `hand` into `trick`, or `None` for an empty hand.
///
/// Leading, it cashes a non-spade ace, otherwise leads its lowest non-spade,
/// and only leads its lowest spade when nothing else is left. Following, it
/// plays the cheapest card that would take the trick right now, and otherwise
/// throws its lowest valid card.
///
/// # Examples
///
/// ```
/// use callbreak_engine::bot::choose_bot_card;
/// use callbreak_engine::cards::Card;
/// use callbreak_engine::rules::Trick;
///
/// let hand: Vec<Card> = ["KS", "2S", "9H", "AD"].iter().map(|s| s.parse().unwrap()).collect();
/// assert_eq!(choose_bot_card(&hand, &Trick::new()), Some("AD".parse().unwrap()));
/// ```
pub fn choose_bot_card(hand: &[Card], trick: &Trick) -> Option<Card> {
    let valid = valid_cards(hand, trick);
    let (Some(lead), Some(winning)) = (trick.lead_suit(), trick.winning_play()) else {
        return choose_lead(&valid);
    };

    let current = winning.card;
    let is_cut = trick.is_cut();
    let highest_trump = trick.highest_trump();
    let takes_trick = |c: &Card| {
        if lead.is_trump() {
            c.is_trump() && c.rank > current.rank
        } else if c.suit == lead {
            !is_cut && c.rank > current.rank
        } else if c.is_trump() {
            highest_trump.is_none_or(|h| c.rank > h.rank)
        } else {
            false
        }
    };

    valid
        .iter()
        .copied()
        .filter(takes_trick)
        .min_by_key(|c| c.rank)
        .or_else(|| lowest(&valid))
}

fn choose_lead(valid: &[Card]) -> Option<Card> {
    if let Some(&ace) = valid.iter().find(|c| !c.is_trump() && c.rank == Rank::Ace) {
        return Some(ace);
    }
    let non_trump: Vec<Card> = valid.iter().copied().filter(|c| !c.is_trump()).collect();
    lowest(&non_trump).or_else(|| lowest(valid))
}

fn lowest(cards: &[Card]) -> Option<Card> {
    cards.iter().copied().min_by_key(|c| c.rank)
}

/// Interface for anything that can act for a seat: the bot heuristics, or a
/// fallback that picks for a human who ran out of time.
pub trait Strategy: Send + Sync {
    /// Bid for a freshly dealt hand, within `MIN_BID..=MAX_BID`.
    fn choose_bid(&self, hand: &[Card], rng: &mut dyn RngCore) -> u8;

    /// A valid card from `hand` for `trick`, or `None` if the hand is empty.
    fn choose_card(&self, hand: &[Card], trick: &Trick, rng: &mut dyn RngCore) -> Option<Card>;

    fn name(&self) -> &str;
}

/// The bot seats' strategy: [`calculate_bot_bid`] and [`choose_bot_card`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStrategy {
    difficulty: Difficulty,
}

impl HeuristicStrategy {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Strategy for HeuristicStrategy {
    fn choose_bid(&self, hand: &[Card], rng: &mut dyn RngCore) -> u8 {
        calculate_bot_bid(hand, self.difficulty, rng)
    }

    fn choose_card(&self, hand: &[Card], trick: &Trick, _rng: &mut dyn RngCore) -> Option<Card> {
        choose_bot_card(hand, trick)
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

/// Uniformly random valid card and bid.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn choose_bid(&self, _hand: &[Card], rng: &mut dyn RngCore) -> u8 {
        rng.random_range(MIN_BID..=MAX_BID)
    }

    fn choose_card(&self, hand: &[Card], trick: &Trick, rng: &mut dyn RngCore) -> Option<Card> {
        valid_cards(hand, trick).choose(rng).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Names accepted by [`create_strategy`].
pub const STRATEGY_NAMES: [&str; 2] = ["heuristic", "random"];

/// Builds a strategy by name (`"heuristic"` or `"random"`).
pub fn create_strategy(name: &str, difficulty: Difficulty) -> Option<Box<dyn Strategy>> {
    match name {
        "heuristic" => Some(Box::new(HeuristicStrategy::new(difficulty))),
        "random" => Some(Box::new(RandomStrategy)),
        _ => None,
    }
}
