//! # callbreak-engine: Callbreak Game Engine Core
//!
//! A four-seat Callbreak engine: one human seat and three heuristic bots play
//! five rounds of thirteen tricks with spades as permanent trump. The engine is
//! single-threaded and turn-sequential, and every source of randomness flows
//! from one seeded RNG so games can be replayed exactly.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text format
//! - [`deck`] - Shuffling, round-robin dealing and hand display order
//! - [`rules`] - Move validation, tricks and trick resolution
//! - [`bot`] - Bidding and card-play heuristics behind the [`bot::Strategy`] seam
//! - [`scoring`] - Bid-versus-tricks round scoring
//! - [`player`] - Seats and per-player state
//! - [`game`] - Phases, snapshots and round summaries
//! - [`engine`] - The [`engine::GameSession`] state machine
//! - [`scheduler`] - Optional pacing of bot turns for interactive callers
//! - [`errors`] - Error types for rejected bids, moves and transitions
//!
//! ## Quick Start
//!
//! ```rust
//! use callbreak_engine::engine::{GameConfig, GameSession};
//! use callbreak_engine::game::Phase;
//!
//! let mut game = GameSession::new(GameConfig { seed: Some(7), ..Default::default() });
//! let state = game.submit_bid(0, 3).expect("bidding is open");
//! assert_eq!(state.phase, Phase::Playing);
//!
//! // The human seat leads the first trick
//! let card = state.hand[0];
//! match game.submit_play(0, card) {
//!     Ok(state) => println!("{}", state.status),
//!     Err(e) => println!("rejected: {}", e),
//! }
//! ```
//!
//! ## Trick Resolution
//!
//! ```rust
//! use callbreak_engine::rules::{trick_winner, Play};
//!
//! let plays: Vec<Play> = [(0, "5S"), (1, "AH"), (2, "9S"), (3, "2H")]
//!     .iter()
//!     .map(|&(seat, card)| Play::new(seat, card.parse().unwrap()))
//!     .collect();
//! assert_eq!(trick_winner(&plays), Some(2));
//! ```

pub mod bot;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod player;
pub mod rules;
pub mod scheduler;
pub mod scoring;
