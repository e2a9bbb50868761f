use super::*;
use crate::eval::{CHECKMATE, evaluate};
use chess_core::{Color, MoveKind, Square};
use std::time::Duration;

fn board(placement: &str, side: Color) -> Board {
    Board::new(placement, side).unwrap()
}

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn run(b: &Board, depth: u8) -> SearchResult {
    let mut limits = SearchLimits::depth(depth);
    limits.start();
    search_root(b, &limits).unwrap()
}

/// Unpruned one-ply scores for the mover, in generation order.
fn one_ply_scores(b: &Board) -> Vec<(Move, i32)> {
    let sign = b.side_to_move().sign();
    b.legal_moves()
        .into_iter()
        .map(|mv| {
            let mut child = *b.position();
            child.make_move(mv);
            (mv, sign * evaluate(&child))
        })
        .collect()
}

#[test]
fn test_depth_one_matches_unpruned_maximum() {
    for (placement, side) in [
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR", Color::White),
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR", Color::Black),
        ("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R", Color::White),
        ("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R", Color::Black),
        ("4k3/8/8/3q4/4P3/8/8/4K3", Color::White),
    ] {
        let b = board(placement, side);
        let result = run(&b, 1);
        let scores = one_ply_scores(&b);
        let max = scores.iter().map(|&(_, s)| s).max().unwrap();
        let first_best = scores.iter().find(|&&(_, s)| s == max).unwrap().0;
        assert_eq!(result.score, max, "{placement} {side}");
        assert_eq!(result.best_move, first_best, "{placement} {side}");
    }
}

#[test]
fn test_takes_hanging_queen() {
    let b = board("4k3/8/8/3q4/4P3/8/8/4K3", Color::White);
    let result = run(&b, 2);
    assert_eq!(result.best_move, Move::new(sq("e4"), sq("d5")));
}

#[test]
fn test_finds_mate_in_one() {
    // Rook lift to the back rank mates
    let b = board("6k1/5ppp/8/8/8/8/8/R5K1", Color::White);
    let result = run(&b, 2);
    assert_eq!(result.best_move, Move::new(sq("a1"), sq("a8")));
    assert_eq!(result.score, CHECKMATE);
}

#[test]
fn test_black_finds_fools_mate() {
    let b = board(
        "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR",
        Color::Black,
    );
    assert_eq!(best_move(&b, 2).unwrap(), Move::new(sq("d8"), sq("h4")));
}

#[test]
fn test_promotes_when_it_can() {
    let b = board("7k/P7/8/8/8/8/8/K7", Color::White);
    let mv = best_move(&b, 2).unwrap();
    assert_eq!(mv.kind, MoveKind::Promotion);
}

#[test]
fn test_result_is_legal_and_board_untouched() {
    let b = Board::startpos();
    let before = b.serialize_position().to_string();
    let result = run(&b, 2);
    assert!(b.legal_moves().contains(&result.best_move));
    assert_eq!(b.serialize_position(), before);
    assert_eq!(result.depth, 2);
    assert!(result.nodes > 20);
    assert!(!result.stopped);
}

#[test]
fn test_game_over_is_a_precondition_error() {
    let mated = board(
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR",
        Color::White,
    );
    assert!(matches!(
        best_move(&mated, 2),
        Err(ChessError::Precondition(_))
    ));

    let stalemate = board("k7/8/1Q6/8/8/8/8/1K6", Color::Black);
    assert!(matches!(
        best_move(&stalemate, 2),
        Err(ChessError::Precondition(_))
    ));
}

#[test]
fn test_depth_zero_searches_one_ply() {
    let b = Board::startpos();
    assert_eq!(run(&b, 0).best_move, run(&b, 1).best_move);
}

#[test]
fn test_raised_stop_flag_returns_first_legal_move() {
    let b = Board::startpos();
    let mut limits = SearchLimits::depth(4);
    limits.start();
    limits.time_control.stop();
    let result = search_root(&b, &limits).unwrap();
    assert!(result.stopped);
    assert_eq!(result.best_move, b.legal_moves()[0]);
}

#[test]
fn test_spent_budget_stops_search() {
    let b = Board::startpos();
    let mut limits = SearchLimits::depth_and_time(6, Duration::ZERO);
    limits.start();
    let result = search_root(&b, &limits).unwrap();
    assert!(result.stopped);
    assert!(b.legal_moves().contains(&result.best_move));
}
