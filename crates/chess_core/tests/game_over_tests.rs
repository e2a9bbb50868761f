//! Checkmate and stalemate detection through the public Board API.

use chess_core::{Board, Color, GameStatus, Move, Square};

fn mv(from: &str, to: &str) -> Move {
    Move::new(from.parse::<Square>().unwrap(), to.parse::<Square>().unwrap())
}

// =============================================================================
// Checkmate
// =============================================================================

#[test]
fn test_fools_mate_from_placement() {
    let board = Board::new(
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR",
        Color::White,
    )
    .unwrap();
    assert!(board.in_check(Color::White));
    assert!(board.legal_moves().is_empty());
    assert_eq!(board.is_game_over(), (true, Some(Color::Black)));
}

#[test]
fn test_fools_mate_played_out() {
    let mut board = Board::startpos();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4")] {
        board.apply_move(mv(from, to)).unwrap();
        assert_eq!(board.is_game_over(), (false, None));
    }
    board.apply_move(mv("d8", "h4")).unwrap();
    assert_eq!(
        board.status(),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );

    // Nothing further can be played
    assert!(board.apply_move(mv("e2", "e4")).is_err());
}

#[test]
fn test_back_rank_mate_black_loses() {
    let board = Board::new("R5k1/5ppp/8/8/8/8/8/6K1", Color::Black).unwrap();
    assert_eq!(board.is_game_over(), (true, Some(Color::White)));
}

#[test]
fn test_check_with_escape_is_not_mate() {
    let board = Board::new("4k3/8/8/8/8/8/8/R3K3", Color::Black).unwrap();
    assert!(!board.in_check(Color::Black));
    let board = Board::new("R3k3/8/8/8/8/8/8/4K3", Color::Black).unwrap();
    assert!(board.in_check(Color::Black));
    assert_eq!(board.is_game_over(), (false, None));
}

// =============================================================================
// Stalemate
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king a8, White queen b6, White king b1
    let board = Board::new("k7/8/1Q6/8/8/8/8/1K6", Color::Black).unwrap();
    assert!(!board.in_check(Color::Black));
    assert!(board.legal_moves().is_empty());
    assert_eq!(board.is_game_over(), (true, None));
    assert_eq!(board.status(), GameStatus::Stalemate);
}

#[test]
fn test_stalemate_blocked_pawn() {
    // White king h1 boxed in by the black queen, own pawn on a4 blocked by a5
    let board = Board::new("k7/8/8/p7/P7/6q1/8/7K", Color::White).unwrap();
    assert!(!board.in_check(Color::White));
    assert_eq!(board.is_game_over(), (true, None));
}

#[test]
fn test_same_position_not_stalemate_for_other_side() {
    let board = Board::new("k7/8/1Q6/8/8/8/8/1K6", Color::White).unwrap();
    assert_eq!(board.is_game_over(), (false, None));
}
