//! Deal command handler.
//!
//! Deals round 1 of a seeded game and shows all four sorted hands with the
//! bids the bots would make. Handy for checking seeds and bidding heuristics.

use std::io::Write;

use callbreak_engine::bot::Difficulty;
use callbreak_engine::engine::{GameConfig, GameSession};
use callbreak_engine::player::HUMAN_SEAT;
use callbreak_engine::rules::MIN_BID;

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_hand;

/// Handle the deal command.
///
/// Bot bids do not depend on the human's bid, so a placeholder bid is
/// submitted to let the bots bid exactly as they would in play.
pub fn handle_deal_command(
    seed: Option<u64>,
    difficulty: Option<Difficulty>,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    let difficulty = difficulty.unwrap_or(config.difficulty);
    let mut game = GameSession::new(GameConfig {
        seed: Some(seed),
        difficulty,
    });
    let hands: Vec<String> = game.reveal_hands().iter().map(|h| format_hand(h)).collect();
    let state = game.submit_bid(HUMAN_SEAT, MIN_BID)?;

    writeln!(out, "deal: seed={} difficulty={}", seed, difficulty)?;
    for (seat, hand) in state.seats.iter().zip(hands) {
        if seat.is_bot {
            let bid = seat.bid.map_or_else(|| "-".to_string(), |b| b.to_string());
            writeln!(out, "{:<10} bid {:>2}  {}", seat.name, bid, hand)?;
        } else {
            writeln!(out, "{:<10}         {}", seat.name, hand)?;
        }
    }
    Ok(())
}
