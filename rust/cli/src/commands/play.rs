//! # Play Command
//!
//! Interactive Callbreak on stdin/stdout: the user holds seat 0 against three
//! heuristic bots for five rounds.
//!
//! ## Features
//!
//! - Bids and cards are re-prompted until the engine accepts them
//! - Cards can be typed (`AS`, `10h`, `Q♦`) or picked by hand position
//! - `--bid N` answers every bidding prompt, `--auto` plays the human's cards
//!   with the bot heuristic, so the two together run unattended
//! - Bot cards are paced by `bot_delay_ms` through the engine's scheduler
//! - Graceful quit with `q`, or when stdin closes

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use callbreak_engine::bot::{Difficulty, HeuristicStrategy};
use callbreak_engine::engine::{GameConfig, GameSession};
use callbreak_engine::game::Phase;
use callbreak_engine::player::HUMAN_SEAT;
use callbreak_engine::rules::Play;
use callbreak_engine::scheduler::BotScheduler;

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{
    format_bids, format_completed_trick, format_hand, format_numbered_hand, format_play,
    format_round_summary, format_trick,
};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_bid_input, parse_card_input};

/// Flags of the `play` subcommand; unset values fall back to [`Config`].
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub seed: Option<u64>,
    pub difficulty: Option<Difficulty>,
    pub bid: Option<u8>,
    pub auto: bool,
}

/// Handle the play command: one interactive game.
///
/// Returns `Ok(())` when the game ends or the player quits; engine
/// rejections of typed input are reported on `err` and re-prompted.
///
/// # Examples
///
/// ```ignore
/// use std::io::{stdin, stdout, stderr};
///
/// let opts = PlayOptions { bid: Some(3), auto: true, ..Default::default() };
/// handle_play_command(&opts, &Config::default(), &mut stdout(), &mut stderr(), &mut stdin().lock()).unwrap();
/// ```
pub fn handle_play_command(
    opts: &PlayOptions,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let seed = opts.seed.or(config.seed).unwrap_or_else(rand::random);
    let difficulty = opts.difficulty.unwrap_or(config.difficulty);
    let mut game = GameSession::new(GameConfig {
        seed: Some(seed),
        difficulty,
    });
    let mut scheduler = BotScheduler::new(Duration::from_millis(config.bot_delay_ms));
    let heuristic = HeuristicStrategy::new(difficulty);

    let owned: Vec<String> = game.players().iter().map(|p| p.name().to_string()).collect();
    let names: Vec<&str> = owned.iter().map(String::as_str).collect();

    writeln!(out, "play: seed={} difficulty={}", seed, difficulty)?;

    loop {
        match game.phase() {
            Phase::Bidding => {
                writeln!(out)?;
                writeln!(out, "Dealing Round {}...", game.round())?;
                writeln!(
                    out,
                    "Your hand: {}",
                    format_hand(game.human_hand())
                )?;
                let Some(bid) = read_bid(opts.bid, out, err, stdin)? else {
                    return quit(&game, out);
                };
                let state = game.submit_bid(HUMAN_SEAT, bid)?;
                for line in format_bids(&state.seats) {
                    writeln!(out, "  {}", line)?;
                }
                writeln!(out, "{}", state.status)?;
            }
            Phase::Playing => {
                let seat = game.current_turn();
                let play = if game.players()[seat].is_bot() {
                    wait_for_bot(&mut game, &mut scheduler)?
                } else if opts.auto {
                    game.play_turn_with(&heuristic)?
                } else {
                    match read_play(&mut game, &names, out, err, stdin)? {
                        Some(play) => play,
                        None => return quit(&game, out),
                    }
                };
                writeln!(out, "{}", format_play(&play, &names))?;
                if game.trick().is_empty()
                    && let Some(done) = game.last_trick()
                {
                    writeln!(out, "Trick: {}", format_completed_trick(done, &names))?;
                }
            }
            Phase::RoundEnd => {
                writeln!(out)?;
                if let Some(summary) = game.history().last() {
                    for line in format_round_summary(summary, game.players()) {
                        writeln!(out, "{}", line)?;
                    }
                }
                writeln!(out, "{}", game.status())?;
                game.advance_round()?;
            }
            Phase::GameEnd => {
                writeln!(out)?;
                writeln!(out, "{}", game.status())?;
                for (place, &seat) in game.standings().iter().enumerate() {
                    writeln!(
                        out,
                        "{}. {} {}",
                        place + 1,
                        names[seat],
                        game.players()[seat].total_score()
                    )?;
                }
                return Ok(());
            }
            other => {
                return Err(CliError::Engine(format!("unexpected phase {}", other)));
            }
        }
    }
}

fn quit(game: &GameSession, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "Game abandoned in round {}.", game.round())?;
    Ok(())
}

/// The human's bid: the fixed `--bid` value, or prompted until well formed.
/// `None` means quit.
fn read_bid(
    fixed: Option<u8>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<u8>, CliError> {
    if let Some(bid) = fixed {
        writeln!(out, "Your bid: {}", bid)?;
        return Ok(Some(bid));
    }
    loop {
        ui::prompt(out, "Your bid (1-8, q to quit): ")?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        match parse_bid_input(&line) {
            ParseResult::Value(bid) => return Ok(Some(bid)),
            ParseResult::Quit => return Ok(None),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}

/// Prompts for the human's card until the engine accepts one. `None` means
/// quit.
fn read_play(
    game: &mut GameSession,
    names: &[&str],
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<Play>, CliError> {
    writeln!(out, "Table: {}", format_trick(game.trick().plays(), names))?;
    loop {
        let hand = game.human_hand().to_vec();
        writeln!(out, "Your hand: {}", format_numbered_hand(&hand))?;
        ui::prompt(out, "Play a card (e.g. AS, 10H, or its number; q to quit): ")?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        match parse_card_input(&line, &hand) {
            ParseResult::Value(card) => match game.submit_play(HUMAN_SEAT, card) {
                Ok(_) => return Ok(Some(Play::new(HUMAN_SEAT, card))),
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
            ParseResult::Quit => return Ok(None),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}

/// Blocks until the scheduler releases the bot on turn, then returns its play.
fn wait_for_bot(game: &mut GameSession, scheduler: &mut BotScheduler) -> Result<Play, CliError> {
    loop {
        if let Some(play) = scheduler.poll(game, Instant::now())? {
            return Ok(play);
        }
        match scheduler.ready_at() {
            Some(at) => std::thread::sleep(at.saturating_duration_since(Instant::now())),
            None => return Err(CliError::Engine("no bot is on turn".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_play(opts: PlayOptions, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = handle_play_command(&opts, &Config::default(), &mut out, &mut err, &mut stdin);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_unattended_game_runs_to_the_end() {
        let opts = PlayOptions {
            seed: Some(42),
            bid: Some(3),
            auto: true,
            ..Default::default()
        };
        let (result, out, err) = run_play(opts, "");
        assert!(result.is_ok());
        assert!(out.starts_with("play: seed=42 difficulty=medium"));
        assert_eq!(out.matches("Dealing Round").count(), 5);
        assert!(out.contains("the game with"));
        assert!(out.contains("\n4. "));
        assert!(err.is_empty(), "unexpected stderr: {}", err);
    }

    #[test]
    fn test_same_seed_same_transcript() {
        let opts = PlayOptions {
            seed: Some(7),
            difficulty: Some(Difficulty::Easy),
            bid: Some(2),
            auto: true,
        };
        let (_, a, _) = run_play(opts.clone(), "");
        let (_, b, _) = run_play(opts, "");
        assert_eq!(a, b);
    }

    #[test]
    fn test_quit_at_bid_prompt() {
        let opts = PlayOptions {
            seed: Some(1),
            ..Default::default()
        };
        let (result, out, _) = run_play(opts, "q\n");
        assert!(result.is_ok());
        assert!(out.contains("Game abandoned in round 1."));
    }

    #[test]
    fn test_eof_is_treated_as_quit() {
        let opts = PlayOptions {
            seed: Some(1),
            ..Default::default()
        };
        let (result, out, _) = run_play(opts, "");
        assert!(result.is_ok());
        assert!(out.contains("Game abandoned"));
    }

    #[test]
    fn test_bad_bid_is_reprompted() {
        let opts = PlayOptions {
            seed: Some(3),
            ..Default::default()
        };
        // bid accepted on the second try; first card prompt then quits
        let (result, out, err) = run_play(opts, "12\n3\nq\n");
        assert!(result.is_ok());
        assert!(err.contains("Bid must be a number from 1 to 8"));
        assert!(out.contains("Game Started!"));
        assert!(out.contains("Play a card"));
    }

    #[test]
    fn test_human_can_pick_cards_by_number() {
        let opts = PlayOptions {
            seed: Some(5),
            bid: Some(1),
            ..Default::default()
        };
        // leading the first trick, any card is legal
        let (result, out, _) = run_play(opts, "1\nq\n");
        assert!(result.is_ok());
        assert!(out.contains("You played"));
        assert!(out.contains("Sita (AI) played"));
    }

    #[test]
    fn test_unparseable_card_is_reprompted() {
        let opts = PlayOptions {
            seed: Some(9),
            bid: Some(1),
            ..Default::default()
        };
        let (result, _, err) = run_play(opts, "ZZ\nq\n");
        assert!(result.is_ok());
        assert!(err.contains("unrecognized card"));
    }

    #[test]
    fn test_engine_rejection_is_reported_and_reprompted() {
        let preview = GameSession::new(GameConfig {
            seed: Some(9),
            ..Default::default()
        });
        let hand = preview.human_hand();
        let missing = callbreak_engine::cards::full_deck()
            .into_iter()
            .find(|c| !hand.contains(c))
            .unwrap();

        let opts = PlayOptions {
            seed: Some(9),
            bid: Some(1),
            ..Default::default()
        };
        let (result, out, err) = run_play(opts, &format!("{}\n1\nq\n", missing));
        assert!(result.is_ok());
        assert!(err.contains("is not in hand"), "stderr: {}", err);
        assert!(out.contains("You played"));
    }
}
