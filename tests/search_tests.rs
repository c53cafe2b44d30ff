//! Scenario tests for move selection through the public API.

use std::time::Duration;

use move_selector::board::{Game, Position};
use move_selector::timer::StepClock;
use move_selector::{select_move, EngineOptions, SearchContext, SearchWorker};

/// The start position always produces a legal move once depth 2 completes
#[test]
fn startpos_returns_legal_move() {
    let game = Game::startpos();
    let mut context = SearchContext::new(EngineOptions::default().with_max_depth(3));
    let report = context.think(&game, Duration::from_secs(60), &StepClock::frozen());

    assert!(report.depth >= 2);
    let best = report.best_move.expect("Should find a move");
    assert!(game.legal_moves().contains(&best));
}

/// Black to move with no legal moves and not in check
#[test]
fn stalemate_returns_none() {
    let game = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("valid fen");
    assert!(game.is_stalemate());
    assert_eq!(select_move(&game, Duration::from_secs(1)), None);
}

/// Checkmated side has nothing to play
#[test]
fn checkmate_returns_none() {
    let game =
        Game::from_fen("rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1").expect("valid fen");
    assert!(game.is_checkmate());
    assert_eq!(select_move(&game, Duration::from_secs(1)), None);
}

/// Wall-clock entry point with a real deadline
#[test]
fn select_move_within_deadline() {
    let game = Game::startpos();
    let best = select_move(&game, Duration::from_millis(300)).expect("Should find a move");
    assert!(game.legal_moves().contains(&best));
}

/// Test that the engine does not hang a queen for nothing
#[test]
fn keeps_queen_out_of_capture() {
    // White queen on d4 attacked by the pawn on e5
    let game = Game::from_fen("4k3/8/8/4p3/3Q4/8/8/4K3 w - - 0 1").expect("valid fen");
    let mut context = SearchContext::new(EngineOptions::default().with_max_depth(2));
    let report = context.think(&game, Duration::from_secs(60), &StepClock::frozen());

    let best = report.best_move.expect("Should find a move");
    let mut after = game.clone();
    after.apply(best).expect("legal move");
    let recaptures = after
        .legal_moves()
        .into_iter()
        .filter(|&mv| after.is_capture(mv))
        .filter(|mv| after.board().piece_on(mv.to) == Some(cozy_chess::Piece::Queen))
        .count();
    assert_eq!(recaptures, 0, "queen left en prise after {best}");
}

/// Test that the engine takes a free piece
#[test]
fn captures_hanging_rook() {
    let game = Game::from_fen("4k3/8/8/8/8/8/r7/R3K3 w - - 0 1").expect("valid fen");
    let mut context = SearchContext::new(EngineOptions::default().with_max_depth(2));
    let report = context.think(&game, Duration::from_secs(60), &StepClock::frozen());
    assert_eq!(report.best_move.map(|mv| mv.to_string()), Some("a1a2".to_string()));
}

/// Two decisions in one game share a context
#[test]
fn context_reused_across_moves() {
    let mut game = Game::startpos();
    let mut context = SearchContext::new(EngineOptions::default().with_max_depth(2));

    for _ in 0..4 {
        let report = context.think(&game, Duration::from_secs(60), &StepClock::frozen());
        let best = report.best_move.expect("Should find a move");
        game.apply(best).expect("legal move");
    }
    assert_eq!(game.applied_moves(), 4);
}

#[test]
fn worker_runs_in_background() {
    let game = Game::startpos();
    let mut worker = SearchWorker::new(EngineOptions::default().with_max_depth(2));
    worker.start(&game).expect("idle worker");
    let report = worker.wait().expect("job was started");
    assert_eq!(report.depth, 2);
    assert!(report.best_move.is_some());
}
