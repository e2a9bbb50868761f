pub mod attacks;
pub mod board;
pub mod codec;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod record;
pub mod review;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use attacks::{in_check, is_square_attacked};
pub use board::*;
pub use codec::{Grid, START_PLACEMENT};
pub use error::ChessError;
pub use movegen::*;
pub use notation::{move_to_coord, parse_coord_move};
pub use perft::{perft, perft_divide};
pub use record::{GameRecord, GameResult};
pub use review::ReviewHistory;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move chooser (classical, random)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The move the engine chose
    pub best_move: Move,
    /// Score of that move from the side to move's perspective
    pub score: i32,
    /// Depth the search was asked for
    pub depth: u8,
    /// Number of nodes visited
    pub nodes: u64,
    /// Whether the search was cut short by its time limit or stop flag
    pub stopped: bool,
}

/// Trait that all chess engines must implement.
///
/// Engines never mutate the caller's board; they explore private copies.
pub trait Engine: Send {
    /// Choose a move for the side to move on `board`.
    ///
    /// Returns `ChessError::Precondition` when the game is already over.
    fn search(&mut self, board: &Board, limits: SearchLimits) -> Result<SearchResult, ChessError>;

    /// Short human-readable engine name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
