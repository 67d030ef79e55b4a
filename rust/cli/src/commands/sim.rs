//! Simulation command handler for bot-only games.
//!
//! Bot seats play the move heuristic. The human seat always bids
//! [`SIM_HUMAN_BID`] and plays its cards with the strategy named by
//! `--strategy` (`heuristic` by default, or `random`). Game seeds are drawn
//! from a ChaCha stream keyed by the base seed, so one `--seed` reproduces the
//! whole batch.
//!
//! # Environment Variables
//!
//! - `CALLBREAK_SIM_BREAK_AFTER`: Stop after N games and report an interruption (for testing)

use std::io::Write;

use callbreak_engine::bot::{Difficulty, STRATEGY_NAMES, Strategy, create_strategy};
use callbreak_engine::engine::{GameConfig, GameSession};
use callbreak_engine::game::Phase;
use callbreak_engine::player::{HUMAN_SEAT, SEATS, Seat};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

use crate::config::Config;
use crate::error::CliError;

/// Bid submitted for the human seat in every simulated round.
pub const SIM_HUMAN_BID: u8 = 4;

#[derive(Debug, Clone, Default)]
pub struct SimOptions {
    pub games: u32,
    pub seed: Option<u64>,
    pub difficulty: Option<Difficulty>,
    /// Strategy for the human seat; `None` means the heuristic
    pub strategy: Option<String>,
    pub json: bool,
}

/// Outcome of one simulated game.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game: u32,
    pub seed: u64,
    pub winner: Seat,
    pub totals: [f64; SEATS],
}

/// Handle the sim command: play `games` complete games and report winners.
///
/// Prints one line per game (text or JSON) followed by wins per seat.
pub fn handle_sim_command(
    opts: &SimOptions,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let base_seed = opts.seed.or(config.seed).unwrap_or_else(rand::random);
    let difficulty = opts.difficulty.unwrap_or(config.difficulty);
    let strategy_name = opts.strategy.as_deref().unwrap_or("heuristic");
    let strategy = create_strategy(strategy_name, difficulty).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "unknown strategy '{}' (expected one of: {})",
            strategy_name,
            STRATEGY_NAMES.join(", ")
        ))
    })?;
    let break_after = std::env::var("CALLBREAK_SIM_BREAK_AFTER")
        .ok()
        .and_then(|v| v.parse::<u32>().ok());

    if !opts.json {
        writeln!(
            out,
            "sim: games={} seed={} difficulty={} strategy={}",
            opts.games,
            base_seed,
            difficulty,
            strategy.name()
        )?;
    }

    let mut seeds = ChaCha20Rng::seed_from_u64(base_seed);
    let mut wins = [0u32; SEATS];
    let mut names: Vec<String> = Vec::new();

    for i in 1..=opts.games {
        let game_seed = seeds.next_u64();
        let game = play_out(game_seed, difficulty, strategy.as_ref())?;
        if names.is_empty() {
            names = game.players().iter().map(|p| p.name().to_string()).collect();
        }

        let winner = game
            .winner()
            .ok_or_else(|| CliError::Engine("finished game has no winner".to_string()))?;
        wins[winner] += 1;
        let record = GameRecord {
            game: i,
            seed: game_seed,
            winner,
            totals: game.players().each_ref().map(|p| p.total_score().as_f64()),
        };
        tracing::info!(game = i, seed = game_seed, winner, "simulated game finished");

        if opts.json {
            let line = serde_json::to_string(&record).map_err(std::io::Error::other)?;
            writeln!(out, "{}", line)?;
        } else {
            let totals: Vec<String> = game
                .players()
                .iter()
                .map(|p| p.total_score().to_string())
                .collect();
            writeln!(
                out,
                "Game {}: winner={} totals=[{}] seed={}",
                i,
                names[winner],
                totals.join(", "),
                game_seed
            )?;
        }

        if let Some(b) = break_after
            && i >= b
            && i < opts.games
        {
            writeln!(out, "Interrupted: completed {}/{}", i, opts.games)?;
            return Err(CliError::Interrupted(format!(
                "completed {}/{}",
                i, opts.games
            )));
        }
    }

    if opts.json {
        let summary = serde_json::json!({
            "games": opts.games,
            "seed": base_seed,
            "difficulty": difficulty,
            "strategy": strategy.name(),
            "wins": wins,
        });
        writeln!(out, "{}", summary)?;
    } else {
        let parts: Vec<String> = names
            .iter()
            .zip(wins)
            .map(|(name, n)| format!("{}={}", name, n))
            .collect();
        writeln!(out, "Wins: {}", parts.join(" "))?;
    }
    Ok(())
}

/// Plays one game to the end, with `human` acting for the human seat.
fn play_out(
    seed: u64,
    difficulty: Difficulty,
    human: &dyn Strategy,
) -> Result<GameSession, CliError> {
    let mut game = GameSession::new(GameConfig {
        seed: Some(seed),
        difficulty,
    });
    loop {
        match game.phase() {
            Phase::Bidding => {
                game.submit_bid(HUMAN_SEAT, SIM_HUMAN_BID)?;
            }
            Phase::Playing => {
                if game.play_bot_turn()?.is_none() {
                    game.play_turn_with(human)?;
                }
            }
            Phase::RoundEnd => {
                game.advance_round()?;
            }
            Phase::GameEnd => return Ok(game),
            other => {
                return Err(CliError::Engine(format!("unexpected phase {}", other)));
            }
        }
    }
}
