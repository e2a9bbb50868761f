use log::debug;

use crate::board::Board;
use crate::codec::{self, Grid};
use crate::error::ChessError;
use crate::types::Color;

/// Read-only cursor over the successive positions of a finished game.
///
/// Every placement is decoded when the history is built, so moving the cursor
/// can never fail.
#[derive(Clone, Debug)]
pub struct ReviewHistory {
    placements: Vec<String>,
    grids: Vec<Grid>,
    first_side: Color,
    index: usize,
}

impl ReviewHistory {
    /// History of a game in which White moved first.
    pub fn new(placements: Vec<String>) -> Result<Self, ChessError> {
        Self::with_first_side(placements, Color::White)
    }

    /// History whose first position has `first_side` to move.
    pub fn with_first_side(placements: Vec<String>, first_side: Color) -> Result<Self, ChessError> {
        if placements.is_empty() {
            return Err(ChessError::Precondition(
                "review history needs at least one position".into(),
            ));
        }
        let grids = placements
            .iter()
            .map(|p| codec::parse(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            placements,
            grids,
            first_side,
            index: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    /// Always false: construction rejects an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_grid(&self) -> &Grid {
        &self.grids[self.index]
    }

    pub fn current_placement(&self) -> &str {
        &self.placements[self.index]
    }

    /// Jumps to `index`; out-of-range requests are a precondition error.
    pub fn seek(&mut self, index: usize) -> Result<(), ChessError> {
        if index >= self.len() {
            return Err(ChessError::Precondition(format!(
                "review index {index} out of range 0..{}",
                self.len()
            )));
        }
        self.index = index;
        Ok(())
    }

    /// Moves the cursor by `delta`, wrapping around both ends.
    pub fn step(&mut self, delta: isize) {
        let len = self.len() as isize;
        self.index = (self.index as isize + delta).rem_euclid(len) as usize;
        debug!("review at {}/{}", self.index + 1, self.len());
    }

    pub fn first_side(&self) -> Color {
        self.first_side
    }

    /// Side to move in the viewed position; sides alternate from the first.
    pub fn side_to_move(&self) -> Color {
        if self.index % 2 == 0 {
            self.first_side
        } else {
            self.first_side.other()
        }
    }

    /// Starts a fresh playable game from the viewed position.
    pub fn to_board(&self) -> Result<Board, ChessError> {
        Board::new(self.current_placement(), self.side_to_move())
    }
}

#[cfg(test)]
#[path = "review_tests.rs"]
mod review_tests;
