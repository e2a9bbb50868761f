//! Check detection on a mailbox grid.
//!
//! Every call recomputes from scratch: there is no cached attack map or pin
//! information. The offset tables here are shared with move generation.

use crate::codec::Grid;
use crate::types::{Color, PieceKind, Square};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (-1, 1),
    (-1, 0),
    (1, -1),
    (0, 1),
    (-1, -1),
    (0, -1),
];

pub const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Returns true when `color`'s king is attacked.
///
/// A missing king is reported as "not in check" so transient or hand-built
/// positions can be probed without error.
pub fn in_check(grid: &Grid, color: Color) -> bool {
    match grid.king_square(color) {
        Some(ksq) => is_square_attacked(grid, ksq, color.other()),
        None => false,
    }
}

/// Returns true if any piece of color `by` attacks `target`.
pub fn is_square_attacked(grid: &Grid, target: Square, by: Color) -> bool {
    let is_enemy = |sq: Square, kinds: &[PieceKind]| {
        grid.get(sq)
            .is_some_and(|pc| pc.color == by && kinds.contains(&pc.kind))
    };

    // Knights
    for (dr, dc) in KNIGHT_OFFSETS {
        if let Some(sq) = target.offset(dr, dc)
            && is_enemy(sq, &[PieceKind::Knight])
        {
            return true;
        }
    }

    // King adjacency; unreachable in legal play but kept for hand-built positions
    for (dr, dc) in KING_OFFSETS {
        if let Some(sq) = target.offset(dr, dc)
            && is_enemy(sq, &[PieceKind::King])
        {
            return true;
        }
    }

    // Rook / queen rays
    for (dr, dc) in ORTHOGONAL {
        if let Some(sq) = first_occupied(grid, target, dr, dc)
            && is_enemy(sq, &[PieceKind::Rook, PieceKind::Queen])
        {
            return true;
        }
    }

    // Bishop / queen rays; a pawn only counts one step away on its capture side.
    // An attacking pawn of `by` sits one row behind the target from its own
    // point of view, i.e. at row offset -by.forward().
    let pawn_row = -by.forward();
    for (dr, dc) in DIAGONAL {
        if let Some(sq) = first_occupied(grid, target, dr, dc) {
            if is_enemy(sq, &[PieceKind::Bishop, PieceKind::Queen]) {
                return true;
            }
            let one_step = target.offset(dr, dc) == Some(sq);
            if one_step && dr == pawn_row && is_enemy(sq, &[PieceKind::Pawn]) {
                return true;
            }
        }
    }

    false
}

/// First occupied square walking from `from` (exclusive) along `(dr, dc)`.
fn first_occupied(grid: &Grid, from: Square, dr: i8, dc: i8) -> Option<Square> {
    let mut cur = from.offset(dr, dc);
    while let Some(sq) = cur {
        if grid.get(sq).is_some() {
            return Some(sq);
        }
        cur = sq.offset(dr, dc);
    }
    None
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
