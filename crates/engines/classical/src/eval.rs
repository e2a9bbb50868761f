//! Static evaluation from White's perspective.
//!
//! Material and piece-square bonuses dominate; pawn structure and king safety
//! are added at a tenth of their raw weight. Finished games bypass the
//! heuristics entirely.

use chess_core::{Color, GameStatus, Grid, PieceKind, Position};

pub const CHECKMATE: i32 = 100_000;
pub const STALEMATE: i32 = 0;

/// Material values indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 20_000];

const DOUBLED_PAWN: i32 = 100;
const EMPTY_FILE: i32 = 100;
const KING_GUARD: i32 = 100;
const KING_EXPOSED: i32 = 30;

// Piece-square tables for White, row 0 = rank 8. Black reads them upside down.
type Table = [[i32; 8]; 8];

#[rustfmt::skip]
const PAWN_TABLE: Table = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    [ 10,  10,  20,  30,  30,  20,  10,  10],
    [  5,   5,  10,  25,  25,  10,   5,   5],
    [  0,   0,   0,  20,  20,   0,   0,   0],
    [  5,  -5, -10,   0,   0, -10,  -5,   5],
    [  5,  10,  10, -20, -20,  10,  10,   5],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: Table = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const BISHOP_TABLE: Table = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
const ROOK_TABLE: Table = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [  5,  10,  10,  10,  10,  10,  10,   5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [  0,   0,   0,   5,   5,   0,   0,   0],
];

#[rustfmt::skip]
const QUEEN_TABLE: Table = [
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,   5,   5,   5,   0, -10],
    [ -5,   0,   5,   5,   5,   5,   0,  -5],
    [  0,   0,   5,   5,   5,   5,   0,  -5],
    [-10,   5,   5,   5,   5,   5,   0, -10],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
];

#[rustfmt::skip]
const KING_TABLE: Table = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [ 20,  20,   0,   0,   0,   0,  20,  20],
    [ 20,  30,  10,   0,   0,  10,  30,  20],
];

fn table(kind: PieceKind) -> &'static Table {
    match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    }
}

/// Scores `pos` from White's perspective.
///
/// - `+CHECKMATE` / `-CHECKMATE` when White / Black has delivered mate
/// - `STALEMATE` (0) for a stalemate
/// - otherwise `material + (pawn_structure + king_safety) / 10`
pub fn evaluate(pos: &Position) -> i32 {
    evaluate_with_status(pos, pos.status())
}

/// Same as [`evaluate`] when the caller already knows the game status.
pub fn evaluate_with_status(pos: &Position, status: GameStatus) -> i32 {
    match status {
        GameStatus::Checkmate { winner } => winner.sign() * CHECKMATE,
        GameStatus::Stalemate => STALEMATE,
        GameStatus::Ongoing => static_eval(&pos.grid),
    }
}

/// Heuristic terms only, ignoring whether the game has ended.
pub fn static_eval(grid: &Grid) -> i32 {
    material(grid) + (pawn_structure(grid) + king_safety(grid)) / 10
}

/// Piece values plus piece-square bonuses, White minus Black.
pub fn material(grid: &Grid) -> i32 {
    grid.pieces()
        .map(|(sq, pc)| {
            let row = match pc.color {
                Color::White => sq.row(),
                Color::Black => 7 - sq.row(),
            };
            let value = PIECE_VALUES[pc.kind.idx()] + table(pc.kind)[row as usize][sq.col() as usize];
            pc.color.sign() * value
        })
        .sum()
}

/// Doubled pawns cost their owner; a file with no pawns of a colour counts
/// against that colour.
pub fn pawn_structure(grid: &Grid) -> i32 {
    let mut counts = [[0i32; 8]; 2];
    for (sq, pc) in grid.pieces() {
        if pc.kind == PieceKind::Pawn {
            counts[pc.color.idx()][sq.col() as usize] += 1;
        }
    }

    let mut score = 0;
    for color in [Color::White, Color::Black] {
        for &n in &counts[color.idx()] {
            let penalty = if n == 0 {
                EMPTY_FILE
            } else {
                (n - 1) * DOUBLED_PAWN
            };
            score -= color.sign() * penalty;
        }
    }
    score
}

/// Looks at the three squares directly in front of each king.
pub fn king_safety(grid: &Grid) -> i32 {
    let mut score = 0;
    for color in [Color::White, Color::Black] {
        let Some(king) = grid.king_square(color) else {
            continue;
        };
        for dc in -1..=1 {
            let Some(guard) = king.offset(color.forward(), dc) else {
                continue;
            };
            match grid.get(guard) {
                Some(pc) if pc.color == color => score += color.sign() * KING_GUARD,
                Some(_) => {}
                None => score -= color.sign() * KING_EXPOSED,
            }
        }
    }
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
