//! Random Move Chess Engine
//!
//! Picks uniformly among the legal moves. Any real engine should beat it, which
//! makes it a handy sparring partner and a smoke test for move generation.

use chess_core::{Board, ChessError, Engine, SearchLimits, SearchResult};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;


/// A chess engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible move sequence for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, _limits: SearchLimits) -> Result<SearchResult, ChessError> {
        let moves = board.legal_moves();
        let Some(&best_move) = moves.choose(&mut self.rng) else {
            return Err(ChessError::Precondition(
                "game is over, no move to choose".into(),
            ));
        };
        debug!("random pick {best_move} out of {}", moves.len());

        Ok(SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: 1,
            stopped: false,
        })
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
