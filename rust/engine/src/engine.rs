use std::cmp::Reverse;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::bot::{calculate_bot_bid, choose_bot_card, Difficulty, Strategy};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::{BidRejection, GameError, MoveRejection};
use crate::game::{CompletedTrick, GameState, Phase, RoundSummary, SeatResult, SeatView};
use crate::player::{next_seat, Player, Seat, HUMAN_SEAT, SEATS};
use crate::rules::{check_move, trick_winner, Play, Trick, MAX_BID, MIN_BID, ROUNDS_PER_GAME};
use crate::scoring::score_round;

/// Settings fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// RNG seed for shuffles and bot jitter; `None` draws a fresh one
    pub seed: Option<u64>,
    pub difficulty: Difficulty,
}

/// One game of Callbreak: four seats, five rounds of thirteen tricks.
///
/// The session owns every piece of game state. Operations either apply
/// completely and return the new [`GameState`] snapshot, or fail with a
/// [`GameError`] and leave the session untouched.
///
/// # Examples
///
/// ```
/// use callbreak_engine::engine::{GameConfig, GameSession};
/// use callbreak_engine::game::Phase;
///
/// let mut game = GameSession::new(GameConfig { seed: Some(42), ..Default::default() });
/// assert_eq!(game.phase(), Phase::Bidding);
///
/// game.submit_bid(0, 4).expect("valid bid");
/// assert_eq!(game.phase(), Phase::Playing);
///
/// // Let the heuristic play every seat, the human included
/// while game.phase() != Phase::GameEnd {
///     match game.phase() {
///         Phase::Bidding => {
///             game.submit_bid(0, 4).unwrap();
///         }
///         Phase::Playing => {
///             let seat = game.current_turn();
///             let card = game.bot_move(seat).expect("cards left");
///             game.submit_play(seat, card).unwrap();
///         }
///         Phase::RoundEnd => {
///             game.advance_round().unwrap();
///         }
///         _ => unreachable!(),
///     }
/// }
/// assert_eq!(game.history().len(), 5);
/// assert!(game.winner().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    seed: u64,
    rng: ChaCha20Rng,
    difficulty: Difficulty,
    phase: Phase,
    round: u8,
    players: [Player; SEATS],
    turn: Seat,
    trick: Trick,
    last_trick: Option<CompletedTrick>,
    history: Vec<RoundSummary>,
    status: String,
}

impl GameSession {
    /// Seats one human and three bots and deals round 1.
    pub fn new(config: GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut session = Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
            difficulty: config.difficulty,
            phase: Phase::Idle,
            round: 1,
            players: std::array::from_fn(Player::new),
            turn: HUMAN_SEAT,
            trick: Trick::new(),
            last_trick: None,
            history: Vec::with_capacity(usize::from(ROUNDS_PER_GAME)),
            status: "Welcome to Callbreak!".to_string(),
        };
        info!(seed, difficulty = %config.difficulty, "new game");
        session.start_round();
        session
    }

    /// New game with an OS-seeded shuffle and medium bots.
    pub fn new_game() -> Self {
        Self::new(GameConfig::default())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn round(&self) -> u8 {
        self.round
    }
    /// Seat expected to play next. Meaningful while playing.
    pub fn current_turn(&self) -> Seat {
        self.turn
    }
    /// Public side of every seat: names, bids, tricks and scores. Cards are
    /// not reachable from here.
    pub fn players(&self) -> &[Player; SEATS] {
        &self.players
    }
    /// The human seat's cards, in display order.
    pub fn human_hand(&self) -> &[Card] {
        self.players[HUMAN_SEAT].hand()
    }
    /// Every seat's cards. Full information for simulations, deal inspection
    /// and tests; a player-facing front end uses [`GameSession::state`].
    pub fn reveal_hands(&self) -> [&[Card]; SEATS] {
        std::array::from_fn(|seat| self.players[seat].hand())
    }
    pub fn trick(&self) -> &Trick {
        &self.trick
    }
    pub fn last_trick(&self) -> Option<&CompletedTrick> {
        self.last_trick.as_ref()
    }
    pub fn history(&self) -> &[RoundSummary] {
        &self.history
    }
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Records the human bid, then has every bot bid, and starts play.
    pub fn submit_bid(&mut self, seat: Seat, bid: u8) -> Result<GameState, GameError> {
        if let Err(reason) = self.check_bid(seat, bid) {
            debug!(seat, bid, %reason, "bid rejected");
            return Err(reason.into());
        }

        self.players[seat].set_bid(bid);
        debug!(round = self.round, seat, bid, "bid accepted");
        for player in self.players.iter_mut().filter(|p| p.is_bot()) {
            let bot_bid = calculate_bot_bid(player.hand(), self.difficulty, &mut self.rng);
            player.set_bid(bot_bid);
            debug!(round = self.round, seat = player.seat(), bid = bot_bid, "bot bid");
        }

        self.phase = Phase::Playing;
        self.turn = HUMAN_SEAT;
        self.status = "Game Started!".to_string();
        Ok(self.state())
    }

    fn check_bid(&self, seat: Seat, bid: u8) -> Result<(), BidRejection> {
        if self.phase != Phase::Bidding {
            return Err(BidRejection::WrongPhase(self.phase));
        }
        if seat != HUMAN_SEAT {
            return Err(BidRejection::NotHumanSeat(seat));
        }
        if self.players[seat].bid().is_some() {
            return Err(BidRejection::AlreadyBid(seat));
        }
        if !(MIN_BID..=MAX_BID).contains(&bid) {
            return Err(BidRejection::OutOfRange(bid));
        }
        Ok(())
    }

    /// Plays `card` for `seat`. Completing a trick resolves it immediately;
    /// the winner leads the next trick, or the round is scored once every hand
    /// is empty.
    pub fn submit_play(&mut self, seat: Seat, card: Card) -> Result<GameState, GameError> {
        if let Err(reason) = self.check_play(seat, card) {
            debug!(seat, %card, %reason, "play rejected");
            return Err(reason.into());
        }

        self.players[seat].remove_card(card);
        self.trick.push(Play::new(seat, card));
        debug!(round = self.round, seat, %card, "card played");

        if self.trick.is_complete() {
            self.resolve_trick();
        } else {
            self.turn = next_seat(seat);
        }
        Ok(self.state())
    }

    fn check_play(&self, seat: Seat, card: Card) -> Result<(), MoveRejection> {
        if self.phase != Phase::Playing {
            return Err(MoveRejection::WrongPhase(self.phase));
        }
        if seat != self.turn {
            return Err(MoveRejection::NotYourTurn {
                expected: self.turn,
                actual: seat,
            });
        }
        check_move(card, self.players[seat].hand(), self.trick.lead_suit())
    }

    fn resolve_trick(&mut self) {
        let plays = self.trick.take();
        let Some(winner) = trick_winner(&plays) else {
            unreachable!("a complete trick has four plays");
        };
        self.players[winner].win_trick();
        info!(round = self.round, winner, "trick won");
        self.status = format!("{} Wins!", self.players[winner].name());
        self.last_trick = Some(CompletedTrick { plays, winner });
        self.turn = winner;

        if self.players.iter().all(|p| p.hand().is_empty()) {
            self.end_round();
        }
    }

    fn end_round(&mut self) {
        let mut seats = Vec::with_capacity(SEATS);
        for player in &mut self.players {
            let bid = player.bid().unwrap_or(MIN_BID);
            let score = score_round(bid, player.tricks_won());
            player.record_round_score(score);
            seats.push(SeatResult {
                seat: player.seat(),
                bid,
                tricks_won: player.tricks_won(),
                round_score: score,
                total_score: player.total_score(),
            });
        }
        info!(round = self.round, "round scored");
        self.history.push(RoundSummary {
            round: self.round,
            seats,
        });
        self.phase = Phase::RoundEnd;
        let you = &self.players[HUMAN_SEAT];
        self.status = format!(
            "Round {} complete: you took {} of {} bid ({})",
            self.round,
            you.tricks_won(),
            you.bid().unwrap_or(MIN_BID),
            you.round_score()
        );
    }

    /// Leaves the scoreboard: deals the next round, or ends the game after
    /// the last round.
    pub fn advance_round(&mut self) -> Result<GameState, GameError> {
        if self.phase != Phase::RoundEnd {
            return Err(GameError::InvalidTransition {
                action: "advance the round",
                phase: self.phase,
            });
        }
        if self.round >= ROUNDS_PER_GAME {
            self.phase = Phase::GameEnd;
            let winner = self.standings()[0];
            let player = &self.players[winner];
            info!(winner, total = %player.total_score(), "game over");
            self.status = format!(
                "{} win{} the game with {} points!",
                player.name(),
                if winner == HUMAN_SEAT { "" } else { "s" },
                player.total_score()
            );
        } else {
            self.round += 1;
            self.start_round();
        }
        Ok(self.state())
    }

    fn start_round(&mut self) {
        self.phase = Phase::Shuffling;
        debug!(round = self.round, "dealing");
        let hands = Deck::shuffled(&mut self.rng).deal();
        for (player, hand) in self.players.iter_mut().zip(hands) {
            player.start_round(hand);
        }
        self.trick = Trick::new();
        self.last_trick = None;
        self.turn = HUMAN_SEAT;
        self.phase = Phase::Bidding;
        self.status = format!("Round {} dealt. Your Turn to Bid!", self.round);
    }

    /// Seats ordered by total score, highest first; equal totals keep seat
    /// order.
    pub fn standings(&self) -> [Seat; SEATS] {
        let mut order: [Seat; SEATS] = std::array::from_fn(|s| s);
        order.sort_by_key(|&s| (Reverse(self.players[s].total_score()), s));
        order
    }

    /// Game winner, once the game has ended.
    pub fn winner(&self) -> Option<Seat> {
        (self.phase == Phase::GameEnd).then(|| self.standings()[0])
    }

    /// The heuristic's choice for `seat` in the current trick. Pure: nothing is
    /// played.
    pub fn bot_move(&self, seat: Seat) -> Option<Card> {
        let player = self.players.get(seat)?;
        choose_bot_card(player.hand(), &self.trick)
    }

    /// Plays the heuristic move for the seat on turn when it is a bot.
    /// Returns `Ok(None)` when the human is on turn.
    pub fn play_bot_turn(&mut self) -> Result<Option<Play>, GameError> {
        if self.phase != Phase::Playing {
            return Err(MoveRejection::WrongPhase(self.phase).into());
        }
        let seat = self.turn;
        if !self.players[seat].is_bot() {
            return Ok(None);
        }
        let card = self
            .bot_move(seat)
            .ok_or(MoveRejection::WrongPhase(self.phase))?;
        self.submit_play(seat, card)?;
        Ok(Some(Play::new(seat, card)))
    }

    /// Plays for the seat on turn using `strategy`, drawing any randomness
    /// from the session RNG. Used for a human who timed out or for autoplay.
    pub fn play_turn_with(&mut self, strategy: &dyn Strategy) -> Result<Play, GameError> {
        if self.phase != Phase::Playing {
            return Err(MoveRejection::WrongPhase(self.phase).into());
        }
        let seat = self.turn;
        let card = strategy
            .choose_card(self.players[seat].hand(), &self.trick, &mut self.rng)
            .ok_or(MoveRejection::WrongPhase(self.phase))?;
        self.submit_play(seat, card)?;
        Ok(Play::new(seat, card))
    }

    /// Snapshot from the human seat's point of view.
    pub fn state(&self) -> GameState {
        GameState {
            phase: self.phase,
            round: self.round,
            turn: (self.phase == Phase::Playing).then_some(self.turn),
            hand: self.players[HUMAN_SEAT].hand().to_vec(),
            seats: self.players.iter().map(SeatView::of).collect(),
            trick: self.trick.plays().to_vec(),
            last_trick: self.last_trick.clone(),
            status: self.status.clone(),
        }
    }
}
