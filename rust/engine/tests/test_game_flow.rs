use callbreak_engine::bot::{Difficulty, RandomStrategy};
use callbreak_engine::engine::{GameConfig, GameSession};
use callbreak_engine::errors::GameError;
use callbreak_engine::game::Phase;
use callbreak_engine::player::SEATS;
use callbreak_engine::rules::{valid_cards, ROUNDS_PER_GAME};
use callbreak_engine::scoring::{score_round, Score};

/// Drives a game to the end with the heuristic on every seat and the human
/// always bidding `human_bid`. Returns the number of rounds dealt.
fn autoplay(game: &mut GameSession, human_bid: u8) -> u8 {
    let mut rounds = 1;
    loop {
        match game.phase() {
            Phase::Bidding => {
                game.submit_bid(0, human_bid).expect("bid accepted");
            }
            Phase::Playing => {
                let seat = game.current_turn();
                let card = game.bot_move(seat).expect("seat on turn holds cards");
                game.submit_play(seat, card).expect("heuristic moves are legal");
            }
            Phase::RoundEnd => {
                game.advance_round().expect("round end advances");
                if game.phase() == Phase::Bidding {
                    rounds += 1;
                }
            }
            Phase::GameEnd => return rounds,
            other => panic!("unexpected phase {}", other),
        }
    }
}

#[test]
fn bot_only_game_always_reaches_game_end() {
    for seed in 0..20 {
        let mut game = GameSession::new(GameConfig {
            seed: Some(seed),
            difficulty: Difficulty::Medium,
        });
        let rounds = autoplay(&mut game, 4);
        assert_eq!(rounds, ROUNDS_PER_GAME);
        assert_eq!(game.phase(), Phase::GameEnd);

        let winner = game.winner().expect("winner at game end");
        let best = game.players().iter().map(|p| p.total_score()).max().unwrap();
        assert_eq!(game.players()[winner].total_score(), best);
        let first_best = game
            .players()
            .iter()
            .position(|p| p.total_score() == best)
            .unwrap();
        assert_eq!(winner, first_best, "ties go to the lowest seat");
    }
}

#[test]
fn game_end_only_after_fifth_round_is_advanced() {
    let mut game = GameSession::new(GameConfig {
        seed: Some(3),
        difficulty: Difficulty::Easy,
    });
    let mut round_ends = 0;
    while game.phase() != Phase::GameEnd {
        match game.phase() {
            Phase::Bidding => {
                game.submit_bid(0, 2).unwrap();
            }
            Phase::Playing => {
                game.play_turn_with(&RandomStrategy).unwrap();
            }
            Phase::RoundEnd => {
                round_ends += 1;
                assert_eq!(game.round(), round_ends);
                game.advance_round().unwrap();
            }
            other => panic!("unexpected phase {}", other),
        }
    }
    assert_eq!(round_ends, 5);
    assert!(matches!(
        game.advance_round(),
        Err(GameError::InvalidTransition {
            phase: Phase::GameEnd,
            ..
        })
    ));
}

#[test]
fn totals_are_the_sum_of_round_scores() {
    let mut game = GameSession::new(GameConfig {
        seed: Some(21),
        difficulty: Difficulty::Hard,
    });
    autoplay(&mut game, 3);

    let history = game.history();
    assert_eq!(history.len(), 5);
    for seat in 0..SEATS {
        let mut total = Score::ZERO;
        for summary in history {
            let line = summary.seats[seat];
            assert_eq!(line.round_score, score_round(line.bid, line.tricks_won));
            total += line.round_score;
            assert_eq!(line.total_score, total);
        }
        assert_eq!(game.players()[seat].total_score(), total);
    }
    for summary in history {
        let tricks: u8 = summary.seats.iter().map(|s| s.tricks_won).sum();
        assert_eq!(tricks, 13, "round {}", summary.round);
    }
}

#[test]
fn every_turn_offers_a_legal_move_and_hands_shrink_in_step() {
    let mut game = GameSession::new(GameConfig {
        seed: Some(8),
        ..Default::default()
    });
    game.submit_bid(0, 5).unwrap();
    while game.phase() == Phase::Playing {
        let seat = game.current_turn();
        let hand = game.reveal_hands()[seat].to_vec();
        let legal = valid_cards(&hand, game.trick());
        assert!(!legal.is_empty());

        let card = game.bot_move(seat).unwrap();
        assert!(legal.contains(&card));
        game.submit_play(seat, card).unwrap();
        assert_eq!(game.players()[seat].hand_size(), hand.len() - 1);
    }
    assert_eq!(game.phase(), Phase::RoundEnd);
    assert!(game.reveal_hands().iter().all(|h| h.is_empty()));
}

#[test]
fn illegal_card_is_a_no_op() {
    // find a seed where the human can be caught not following suit
    for seed in 0..200 {
        let mut game = GameSession::new(GameConfig {
            seed: Some(seed),
            ..Default::default()
        });
        game.submit_bid(0, 1).unwrap();
        let lead = game.bot_move(0).unwrap();
        game.submit_play(0, lead).unwrap();
        // bots play until the trick wraps back; human leads again only after
        // winning, so check the first follower instead
        let seat = game.current_turn();
        let hand = game.reveal_hands()[seat].to_vec();
        let follows = hand.iter().any(|c| c.suit == lead.suit);
        let Some(&off_suit) = hand.iter().find(|c| c.suit != lead.suit) else {
            continue;
        };
        if !follows {
            continue;
        }
        let before = game.state();
        let result = game.submit_play(seat, off_suit);
        assert!(matches!(result, Err(GameError::InvalidMove(_))));
        assert_eq!(game.state(), before);
        return;
    }
    panic!("no seed produced a follow-suit situation");
}
