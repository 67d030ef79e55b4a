//! # Callbreak CLI Library
//!
//! Command-line front end for the `callbreak-engine` crate: play a game
//! against three bots on stdin, simulate bot-only games, inspect deals, and
//! show the resolved configuration.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["callbreak", "play", "--seed", "42"];
//! let code = callbreak_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play five rounds against three heuristic bots
//! - `sim`: Run complete bot-only games and tally the winners
//! - `deal`: Deal one round and show every hand with the bots' bids
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{CallbreakCli, Commands};
use commands::{
    PlayOptions, SimOptions, handle_cfg_command, handle_deal_command, handle_play_command,
    handle_sim_command,
};

pub use error::CliError;
pub use logging::init_logging;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments, resolves configuration, and dispatches to
/// the subcommand handler. `play` reads moves from the process's stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["callbreak", "deal", "--seed", "42"];
/// let code = callbreak_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// [`run`] with an explicit input stream for `play`.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn std::io::BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "deal", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CallbreakCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "Callbreak CLI").is_err()
                        || writeln!(err, "Usage: callbreak <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    let _ = writeln!(err, "\nFor full help, run: callbreak --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            let _ = ui::write_error(err, &format!("Invalid configuration: {}", e));
            return exit_code::ERROR;
        }
    };
    let config = &resolved.config;

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(&resolved, out),
        Commands::Play {
            seed,
            difficulty,
            bid,
            auto,
        } => {
            let opts = PlayOptions {
                seed,
                difficulty,
                bid,
                auto,
            };
            handle_play_command(&opts, config, out, err, stdin)
        }
        Commands::Sim {
            games,
            seed,
            difficulty,
            strategy,
            json,
        } => {
            let opts = SimOptions {
                games,
                seed,
                difficulty,
                strategy,
                json,
            };
            handle_sim_command(&opts, config, out)
        }
        Commands::Deal { seed, difficulty } => handle_deal_command(seed, difficulty, config, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            tracing::warn!(%msg, "command interrupted");
            exit_code::INTERRUPTED
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            if writeln!(err, "Error: {}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}
