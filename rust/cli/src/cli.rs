//! Command-line argument definitions.

use callbreak_engine::bot::Difficulty;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "callbreak",
    version,
    about = "Play and simulate Callbreak against heuristic bots"
)]
pub struct CallbreakCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a five-round game against three bots on stdin
    Play {
        /// RNG seed for shuffles and bot jitter
        #[arg(long)]
        seed: Option<u64>,
        /// Bot difficulty: easy, medium or hard
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Bid this every round instead of prompting
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
        bid: Option<u8>,
        /// Let the move heuristic play your cards
        #[arg(long)]
        auto: bool,
    },
    /// Run complete bot-only games and report the winners
    Sim {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// How the human seat plays its cards: heuristic or random
        #[arg(long)]
        strategy: Option<String>,
        /// One JSON object per game plus a summary line
        #[arg(long)]
        json: bool,
    },
    /// Deal one round and show every hand with the bots' bids
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        difficulty: Option<Difficulty>,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_flags_parse() {
        let cli = CallbreakCli::try_parse_from([
            "callbreak",
            "play",
            "--seed",
            "7",
            "--difficulty",
            "hard",
            "--bid",
            "3",
            "--auto",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Play {
                seed,
                difficulty,
                bid,
                auto,
            } => {
                assert_eq!(seed, Some(7));
                assert_eq!(difficulty, Some(Difficulty::Hard));
                assert_eq!(bid, Some(3));
                assert!(auto);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_bid_range_enforced_by_parser() {
        assert!(CallbreakCli::try_parse_from(["callbreak", "play", "--bid", "0"]).is_err());
        assert!(CallbreakCli::try_parse_from(["callbreak", "play", "--bid", "9"]).is_err());
    }

    #[test]
    fn test_sim_requires_positive_games() {
        assert!(CallbreakCli::try_parse_from(["callbreak", "sim"]).is_err());
        assert!(CallbreakCli::try_parse_from(["callbreak", "sim", "--games", "0"]).is_err());
        assert!(CallbreakCli::try_parse_from(["callbreak", "sim", "--games", "2"]).is_ok());
    }

    #[test]
    fn test_sim_strategy_is_optional() {
        let cli = CallbreakCli::try_parse_from(["callbreak", "sim", "--games", "1"]).unwrap();
        assert!(matches!(cli.cmd, Commands::Sim { strategy: None, .. }));
        let cli = CallbreakCli::try_parse_from([
            "callbreak", "sim", "--games", "1", "--strategy", "random",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Sim { strategy, .. } => assert_eq!(strategy.as_deref(), Some("random")),
            other => panic!("expected sim, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        assert!(
            CallbreakCli::try_parse_from(["callbreak", "deal", "--difficulty", "brutal"]).is_err()
        );
    }

    #[test]
    fn test_all_subcommands_parse() {
        for args in [
            vec!["callbreak", "cfg"],
            vec!["callbreak", "play"],
            vec!["callbreak", "deal"],
            vec!["callbreak", "sim", "--games", "1"],
        ] {
            assert!(
                CallbreakCli::try_parse_from(&args).is_ok(),
                "Failed to parse: {:?}",
                args
            );
        }
    }
}
