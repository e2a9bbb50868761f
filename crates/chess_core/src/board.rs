use log::{debug, warn};

use crate::attacks::in_check;
use crate::codec::{self, Grid, START_PLACEMENT};
use crate::error::ChessError;
use crate::movegen::legal_moves;
use crate::types::*;

/// Outcome of probing a position for the end of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// No legal moves and in check; the side not to move wins.
    Checkmate { winner: Color },
    /// No legal moves and not in check.
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// `(over, winner)` pair; winner is None for a draw or an unfinished game.
    pub fn as_pair(self) -> (bool, Option<Color>) {
        match self {
            GameStatus::Ongoing => (false, None),
            GameStatus::Checkmate { winner } => (true, Some(winner)),
            GameStatus::Stalemate => (true, None),
        }
    }
}

/// Grid plus the state move generation needs: side to move and the previous
/// move (for en passant). Cheap to copy; search and legality filtering work on
/// private copies of this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub grid: Grid,
    pub side_to_move: Color,
    pub last_move: Option<Move>,
}

/// What `Position::make_move` needs to put back in `unmake_move`.
#[derive(Clone, Copy, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub captured_sq: Square,
    pub moved_piece: Option<Piece>,
    pub rook_move: Option<(Square, Square)>,
    pub last_move: Option<Move>,
}

impl Position {
    pub fn new(grid: Grid, side_to_move: Color) -> Self {
        Self {
            grid,
            side_to_move,
            last_move: None,
        }
    }

    pub fn startpos() -> Self {
        // The constant is well-formed, parsing cannot fail.
        let grid = codec::parse(START_PLACEMENT).unwrap_or_default();
        Self::new(grid, Color::White)
    }

    pub fn from_placement(placement: &str, side_to_move: Color) -> Result<Self, ChessError> {
        Ok(Self::new(codec::parse(placement)?, side_to_move))
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid.get(sq)
    }

    pub fn in_check(&self, c: Color) -> bool {
        in_check(&self.grid, c)
    }

    pub fn placement(&self) -> String {
        codec::serialize(&self.grid)
    }

    /// Checkmate / stalemate / ongoing for the side to move.
    pub fn status(&self) -> GameStatus {
        if !legal_moves(self).is_empty() {
            GameStatus::Ongoing
        } else if self.in_check(self.side_to_move) {
            GameStatus::Checkmate {
                winner: self.side_to_move.other(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    /// Applies `mv` without any legality check and flips the side to move once.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let mover = self.piece_at(mv.from);
        let color = mover.map_or(self.side_to_move, |pc| pc.color);
        let mut undo = Undo {
            captured: self.piece_at(mv.to),
            captured_sq: mv.to,
            moved_piece: mover,
            rook_move: None,
            last_move: self.last_move,
        };

        match mv.kind {
            MoveKind::Normal => {
                self.grid.relocate(mv.from, mv.to);
            }
            MoveKind::EnPassant => {
                self.grid.relocate(mv.from, mv.to);
                // The captured pawn sits one row behind the destination
                if let Some(behind) = mv.to.offset(-color.forward(), 0) {
                    undo.captured = self.piece_at(behind);
                    undo.captured_sq = behind;
                    self.grid.set(behind, None);
                }
            }
            MoveKind::Promotion => {
                self.grid.relocate(mv.from, mv.to);
                self.grid.set(mv.to, Some(Piece::new(color, PieceKind::Queen)));
            }
            MoveKind::CastleKingside | MoveKind::CastleQueenside => {
                let (rook_col, dir): (u8, i8) = if mv.kind == MoveKind::CastleKingside {
                    (7, 1)
                } else {
                    (0, -1)
                };
                let row = mv.from.row();
                if let (Some(rook_from), Some(rook_to), Some(king_to)) = (
                    Square::new(row, rook_col),
                    mv.from.offset(0, dir),
                    mv.from.offset(0, 2 * dir),
                ) {
                    self.grid.relocate(rook_from, rook_to);
                    self.grid.relocate(mv.from, king_to);
                    undo.rook_move = Some((rook_from, rook_to));
                    undo.captured = None;
                }
            }
        }

        self.side_to_move = self.side_to_move.other();
        self.last_move = Some(mv);
        undo
    }

    /// Reverts a `make_move` using its undo record.
    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.last_move = undo.last_move;

        if let Some((rook_from, rook_to)) = undo.rook_move {
            let king_to = self.king_destination(mv);
            self.grid.relocate(king_to, mv.from);
            self.grid.relocate(rook_to, rook_from);
            return;
        }

        self.grid.set(mv.from, undo.moved_piece);
        self.grid.set(mv.to, None);
        self.grid.set(undo.captured_sq, undo.captured);
    }

    fn king_destination(&self, mv: Move) -> Square {
        let dir = if mv.kind == MoveKind::CastleKingside { 2 } else { -2 };
        mv.from.offset(0, dir).unwrap_or(mv.to)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

/// A game in progress: the live position plus its history.
///
/// `position_log` starts with the initial placement and gains one snapshot per
/// applied move, so `position_log.len() == move_log.len() + 1` always holds and
/// the grid equals the decoding of the last snapshot.
#[derive(Clone, Debug)]
pub struct Board {
    position: Position,
    position_log: Vec<String>,
    move_log: Vec<Move>,
}

impl Board {
    /// Builds a board from a placement string; nothing is created on error.
    pub fn new(placement: &str, side_to_move: Color) -> Result<Self, ChessError> {
        let position = Position::from_placement(placement, side_to_move)?;
        Ok(Self::from_position(position))
    }

    pub fn startpos() -> Self {
        Self::from_position(Position::startpos())
    }

    fn from_position(position: Position) -> Self {
        Self {
            position_log: vec![position.placement()],
            move_log: Vec::new(),
            position,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }
    pub fn grid(&self) -> &Grid {
        &self.position.grid
    }
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.position.piece_at(sq)
    }
    pub fn position_log(&self) -> &[String] {
        &self.position_log
    }
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// Serialized form of the current grid.
    pub fn serialize_position(&self) -> &str {
        // The log always holds at least the initial snapshot.
        self.position_log.last().map_or("", String::as_str)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.position)
    }

    pub fn in_check(&self, c: Color) -> bool {
        self.position.in_check(c)
    }

    pub fn status(&self) -> GameStatus {
        self.position.status()
    }

    pub fn is_game_over(&self) -> (bool, Option<Color>) {
        self.status().as_pair()
    }

    /// Validates `mv` against the legal-move set and commits it.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), ChessError> {
        if !self.legal_moves().contains(&mv) {
            return Err(ChessError::illegal(
                mv,
                format!("not legal for {} in {}", self.side_to_move(), self.serialize_position()),
            ));
        }
        self.position.make_move(mv);
        self.position_log.push(self.position.placement());
        self.move_log.push(mv);
        debug!("applied {mv} ({:?}), {} to move", mv.kind, self.side_to_move());
        Ok(())
    }

    /// Restores the previous snapshot. No-op when only the initial position remains.
    pub fn undo_move(&mut self) {
        if self.position_log.len() <= 1 {
            return;
        }
        let previous = &self.position_log[self.position_log.len() - 2];
        let grid = match codec::parse(previous) {
            Ok(grid) => grid,
            Err(e) => {
                warn!("undo skipped, snapshot does not parse: {e}");
                return;
            }
        };
        self.position_log.pop();
        let undone = self.move_log.pop();
        self.position.grid = grid;
        self.position.side_to_move = self.position.side_to_move.other();
        self.position.last_move = self.move_log.last().copied();
        if let Some(mv) = undone {
            debug!("undid {mv}, {} to move", self.side_to_move());
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
