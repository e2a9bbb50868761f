//! Piece-placement codec: the first field of a FEN record to and from an 8x8 grid.

use std::fmt;
use std::str::FromStr;

use crate::error::ChessError;
use crate::types::{Color, Piece, PieceKind, Square};

/// Standard starting placement.
pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// 8x8 mailbox, row 0 is rank 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [[Option<Piece>; 8]; 8],
}

impl Grid {
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, sq: Square, pc: Option<Piece>) {
        self.cells[sq.row() as usize][sq.col() as usize] = pc;
    }

    /// Moves whatever sits on `from` to `to`, leaving `from` empty.
    #[inline]
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let captured = self.get(to);
        let moving = self.get(from);
        self.set(to, moving);
        self.set(from, None);
        captured
    }

    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.cells
    }

    /// Every occupied square, top rank first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|pc| (sq, pc)))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.color == color && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

/// Decodes a placement string into a grid.
///
/// Ranks are `/`-separated, top rank first; digits 1-8 expand to that many
/// empty squares and must not be adjacent. A full FEN record is accepted and
/// only its first field is read.
pub fn parse(placement: &str) -> Result<Grid, ChessError> {
    let field = placement
        .split_whitespace()
        .next()
        .ok_or_else(|| ChessError::malformed(placement, "empty placement"))?;

    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::malformed(
            placement,
            format!("expected 8 ranks, found {}", ranks.len()),
        ));
    }

    let mut grid = Grid::empty();
    for (row, rank) in ranks.iter().enumerate() {
        let mut col: usize = 0;
        let mut prev_digit = false;
        for ch in rank.chars() {
            if let Some(d) = ch.to_digit(10) {
                if d == 0 || d > 8 || prev_digit {
                    return Err(ChessError::malformed(
                        placement,
                        format!("bad empty-square run '{ch}' in rank {}", row + 1),
                    ));
                }
                col += d as usize;
                prev_digit = true;
            } else {
                let pc = Piece::from_symbol(ch).ok_or_else(|| {
                    ChessError::malformed(placement, format!("invalid piece character '{ch}'"))
                })?;
                if col < 8 {
                    grid.cells[row][col] = Some(pc);
                }
                col += 1;
                prev_digit = false;
            }
            if col > 8 {
                return Err(ChessError::malformed(
                    placement,
                    format!("rank {} holds more than 8 squares", row + 1),
                ));
            }
        }
        if col != 8 {
            return Err(ChessError::malformed(
                placement,
                format!("rank {} holds {col} squares, expected 8", row + 1),
            ));
        }
    }
    Ok(grid)
}

/// Encodes a grid, run-length encoding empty squares per rank.
pub fn serialize(grid: &Grid) -> String {
    let mut out = String::with_capacity(72);
    for (row, cells) in grid.rows().iter().enumerate() {
        if row > 0 {
            out.push('/');
        }
        let mut empty = 0u8;
        for cell in cells {
            match cell {
                None => empty += 1,
                Some(pc) => {
                    if empty > 0 {
                        out.push((b'0' + empty) as char);
                        empty = 0;
                    }
                    out.push(pc.symbol());
                }
            }
        }
        if empty > 0 {
            out.push((b'0' + empty) as char);
        }
    }
    out
}

impl FromStr for Grid {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod codec_tests;
