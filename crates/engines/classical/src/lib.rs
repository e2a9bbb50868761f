//! Classical Chess Engine
//!
//! Fixed-depth negamax with alpha-beta pruning over a hand-tuned evaluation
//! (material, piece-square tables, pawn structure, king safety).

pub mod eval;
pub mod search;

use chess_core::{Board, ChessError, Engine, SearchLimits, SearchResult};

/// Classical chess engine using negamax with alpha-beta pruning.
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    /// Node counter of the last search
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &Board, mut limits: SearchLimits) -> Result<SearchResult, ChessError> {
        self.nodes = 0;
        limits.start();

        let result = search::search_root(board, &limits)?;
        self.nodes = result.nodes;
        Ok(result)
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{CHECKMATE, STALEMATE, evaluate};
pub use search::best_move;
