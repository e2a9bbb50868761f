//! Coordinate move notation ("e2e4", "a7a8q").

use crate::{board::Position, error::ChessError, movegen::legal_moves, types::*};

pub fn move_to_coord(mv: Move) -> String {
    let mut s = mv.to_string();
    if mv.kind == MoveKind::Promotion {
        s.push('q');
    }
    s
}

/// Resolves coordinate text against the legal moves of `pos`, so the returned
/// move carries the right kind tag (castle, en passant, promotion).
///
/// A trailing promotion letter is accepted but only `q` is meaningful: pawns
/// always promote to a queen.
pub fn parse_coord_move(pos: &Position, txt: &str) -> Result<Move, ChessError> {
    let txt = txt.trim();
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return Err(ChessError::illegal(txt, "expected coordinate notation like e2e4"));
    }
    let square = |s: &str| {
        s.parse::<Square>()
            .map_err(|_| ChessError::illegal(txt, "square outside the 8x8 board"))
    };
    let from = square(&txt[0..2])?;
    let to = square(&txt[2..4])?;
    if let Some(promo) = txt[4..].chars().next()
        && !promo.eq_ignore_ascii_case(&'q')
    {
        return Err(ChessError::illegal(txt, "pawns only promote to a queen"));
    }

    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to)
        .ok_or_else(|| ChessError::illegal(txt, format!("not legal for {}", pos.side_to_move)))
}
