use crate::attacks::{DIAGONAL, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL};
use crate::board::Position;
use crate::types::*;

const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(pos, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// Each pseudo-legal candidate is played on an independent copy of the
/// position and dropped if it leaves the mover's king attacked.
pub fn legal_moves_into(pos: &Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    out.retain(|&mv| {
        let mut child = *pos;
        child.make_move(mv);
        !child.in_check(mover)
    });
}

/// Moves obeying per-piece movement rules, order is deterministic
/// (pawns, sliders, knights, king, each scanned top rank first).
pub fn pseudo_legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    pseudo_moves(pos, &mut out);
    out
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    let c = pos.side_to_move;
    let own: Vec<(Square, PieceKind)> = pos
        .grid
        .pieces()
        .filter(|(_, pc)| pc.color == c)
        .map(|(sq, pc)| (sq, pc.kind))
        .collect();

    for &(sq, kind) in &own {
        if kind == PieceKind::Pawn {
            gen_pawn(pos, sq, c, out);
        }
    }
    for &(sq, kind) in &own {
        match kind {
            PieceKind::Bishop => gen_slider(pos, sq, c, out, &DIAGONAL),
            PieceKind::Rook => gen_slider(pos, sq, c, out, &ORTHOGONAL),
            PieceKind::Queen => gen_slider(pos, sq, c, out, &QUEEN_DIRS),
            _ => {}
        }
    }
    for &(sq, kind) in &own {
        if kind == PieceKind::Knight {
            gen_steps(pos, sq, c, out, &KNIGHT_OFFSETS);
        }
    }
    for &(sq, kind) in &own {
        if kind == PieceKind::King {
            gen_steps(pos, sq, c, out, &KING_OFFSETS);
        }
    }
    gen_castle(pos, c, out);
}

fn gen_pawn(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>) {
    let dir = c.forward();
    // Pawns start one row in front of their home row
    let start_row = (c.home_row() as i8 + dir) as u8;
    // Rank next to the one an enemy double step lands on
    let ep_row = (c.other().home_row() as i8 + 3 * c.other().forward()) as u8;
    let back_row = c.other().home_row();

    let Some(ahead) = from.offset(dir, 0) else {
        return;
    };
    let kind = if ahead.row() == back_row {
        MoveKind::Promotion
    } else {
        MoveKind::Normal
    };

    // forward 1, then forward 2 from the start row
    if pos.piece_at(ahead).is_none() {
        out.push(Move::with_kind(from, ahead, kind));
        if from.row() == start_row
            && let Some(two) = from.offset(2 * dir, 0)
            && pos.piece_at(two).is_none()
        {
            out.push(Move::new(from, two));
        }
    }

    // captures
    for dc in [1, -1] {
        if let Some(to) = from.offset(dir, dc)
            && pos.piece_at(to).is_some_and(|pc| pc.color != c)
        {
            out.push(Move::with_kind(from, to, kind));
        }
    }

    // en passant: only straight after an adjacent enemy pawn's double step
    if from.row() == ep_row
        && let Some(prev) = pos.last_move
        && prev.to.row() == from.row()
        && prev.from.col() == prev.to.col()
        && prev.from.row().abs_diff(prev.to.row()) == 2
        && prev.to.col().abs_diff(from.col()) == 1
        && pos.piece_at(prev.to) == Some(Piece::new(c.other(), PieceKind::Pawn))
        && let Some(to) = prev.to.offset(dir, 0)
        && pos.piece_at(to).is_none()
    {
        out.push(Move::with_kind(from, to, MoveKind::EnPassant));
    }
}

fn gen_slider(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

/// Knight and king: fixed offsets onto empty or enemy squares.
fn gen_steps(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>, offsets: &[(i8, i8)]) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

/// Castling needs only the king on e-file home, the rook in its corner and
/// empty squares between them. Move history and attacked transit squares are
/// not considered.
fn gen_castle(pos: &Position, c: Color, out: &mut Vec<Move>) {
    let row = c.home_row();
    let (Some(king_sq), Some(h_sq), Some(a_sq)) =
        (Square::new(row, 4), Square::new(row, 7), Square::new(row, 0))
    else {
        return;
    };
    if pos.piece_at(king_sq) != Some(Piece::new(c, PieceKind::King)) {
        return;
    }
    let rook = Some(Piece::new(c, PieceKind::Rook));
    let empty_between = |lo: u8, hi: u8| {
        (lo + 1..hi).all(|col| Square::new(row, col).is_some_and(|sq| pos.piece_at(sq).is_none()))
    };

    if pos.piece_at(h_sq) == rook
        && empty_between(4, 7)
        && let Some(to) = king_sq.offset(0, 2)
    {
        out.push(Move::with_kind(king_sq, to, MoveKind::CastleKingside));
    }
    if pos.piece_at(a_sq) == rook
        && empty_between(0, 4)
        && let Some(to) = king_sq.offset(0, -2)
    {
        out.push(Move::with_kind(king_sq, to, MoveKind::CastleQueenside));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
