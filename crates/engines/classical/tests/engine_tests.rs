//! Drives the classical engine through the `Engine` trait, as the binary does.

use chess_core::{Board, ChessError, Color, Engine, SearchLimits, parse_coord_move};
use classical_engine::ClassicalEngine;
use pretty_assertions::assert_eq;

#[test]
fn engine_plays_a_short_game_without_touching_caller_state() {
    let mut engine = ClassicalEngine::new();
    let mut board = Board::startpos();

    for _ in 0..6 {
        let snapshot = board.serialize_position().to_string();
        let result = engine.search(&board, SearchLimits::default()).unwrap();
        assert_eq!(board.serialize_position(), snapshot);
        assert_eq!(result.depth, 2);
        assert_eq!(engine.nodes(), result.nodes);
        board.apply_move(result.best_move).unwrap();
    }
    assert_eq!(board.move_log().len(), 6);
    assert_eq!(board.position_log().len(), 7);
}

#[test]
fn engine_answers_mate_threat_by_mating_first() {
    // White to move can mate on the back rank immediately
    let board = Board::new("6k1/5ppp/8/8/8/8/5PPP/R5K1", Color::White).unwrap();
    let mut engine = ClassicalEngine::new();
    let result = engine.search(&board, SearchLimits::depth(2)).unwrap();
    let expected = parse_coord_move(board.position(), "a1a8").unwrap();
    assert_eq!(result.best_move, expected);
}

#[test]
fn engine_refuses_finished_games() {
    let board = Board::new("k7/8/1Q6/8/8/8/8/1K6", Color::Black).unwrap();
    let mut engine = ClassicalEngine::new();
    let err = engine.search(&board, SearchLimits::default()).unwrap_err();
    assert!(matches!(err, ChessError::Precondition(_)));
    engine.new_game();
    assert_eq!(engine.nodes(), 0);
}
