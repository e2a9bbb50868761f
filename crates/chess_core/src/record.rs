use serde::{Deserialize, Serialize};

use crate::board::{Board, GameStatus};
use crate::error::ChessError;
use crate::notation::{move_to_coord, parse_coord_move};
use crate::review::ReviewHistory;
use crate::types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    Ongoing,
    WhiteWins,
    BlackWins,
    Draw,
}

impl From<GameStatus> for GameResult {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::Ongoing => GameResult::Ongoing,
            GameStatus::Checkmate { winner: Color::White } => GameResult::WhiteWins,
            GameStatus::Checkmate { winner: Color::Black } => GameResult::BlackWins,
            GameStatus::Stalemate => GameResult::Draw,
        }
    }
}

/// A played game as plain data: starting point, every snapshot, and the moves
/// in coordinate notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub start: String,
    pub side_to_move: Color,
    pub positions: Vec<String>,
    pub moves: Vec<String>,
    pub result: GameResult,
}

impl GameRecord {
    pub fn from_board(board: &Board) -> Self {
        let positions = board.position_log().to_vec();
        // Logs are never empty; the first snapshot is the starting placement.
        let start = positions.first().cloned().unwrap_or_default();
        let moves = board.move_log().iter().copied().map(move_to_coord).collect();
        // Side to move at the start, recovered from the current side and ply count.
        let side_to_move = if board.move_log().len() % 2 == 0 {
            board.side_to_move()
        } else {
            board.side_to_move().other()
        };
        Self {
            start,
            side_to_move,
            positions,
            moves,
            result: board.status().into(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Replays the moves from the start, checking each against the rules.
    pub fn replay(&self) -> Result<Board, ChessError> {
        let mut board = Board::new(&self.start, self.side_to_move)?;
        for text in &self.moves {
            let mv = parse_coord_move(board.position(), text)?;
            board.apply_move(mv)?;
        }
        Ok(board)
    }

    pub fn to_review(&self) -> Result<ReviewHistory, ChessError> {
        ReviewHistory::with_first_side(self.positions.clone(), self.side_to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::START_PLACEMENT;
    use crate::types::{Move, Square};
    use pretty_assertions::assert_eq;

    fn mv(from: &str, to: &str) -> Move {
        Move::new(from.parse::<Square>().unwrap(), to.parse::<Square>().unwrap())
    }

    fn fools_mate() -> Board {
        let mut board = Board::startpos();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            board.apply_move(mv(from, to)).unwrap();
        }
        board
    }

    #[test]
    fn record_captures_the_game() {
        let record = GameRecord::from_board(&fools_mate());
        assert_eq!(record.moves, vec!["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert_eq!(record.positions.len(), 5);
        assert_eq!(record.side_to_move, Color::White);
        assert_eq!(record.result, GameResult::BlackWins);
    }

    #[test]
    fn json_round_trip_and_replay() {
        let record = GameRecord::from_board(&fools_mate());
        let json = record.to_json().unwrap();
        assert!(json.contains("\"black_wins\""));
        let back = GameRecord::from_json(&json).unwrap();
        assert_eq!(back, record);

        let replayed = back.replay().unwrap();
        assert_eq!(replayed.position_log(), record.positions.as_slice());
        assert_eq!(back.to_review().unwrap().len(), 5);
    }

    #[test]
    fn start_side_survives_odd_ply_count() {
        let mut board = Board::startpos();
        board.apply_move(mv("e2", "e4")).unwrap();
        let record = GameRecord::from_board(&board);
        assert_eq!(record.side_to_move, Color::White);
        assert_eq!(record.result, GameResult::Ongoing);
    }

    #[test]
    fn review_of_black_first_game_keeps_sides() {
        let mut board = Board::new(START_PLACEMENT, Color::Black).unwrap();
        board.apply_move(mv("e7", "e5")).unwrap();
        let record = GameRecord::from_board(&board);
        assert_eq!(record.side_to_move, Color::Black);

        let mut review = record.to_review().unwrap();
        assert_eq!(review.to_board().unwrap().side_to_move(), Color::Black);
        review.step(1);
        let board = review.to_board().unwrap();
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.serialize_position(), record.positions[1]);
    }

    #[test]
    fn replay_rejects_tampered_moves() {
        let mut record = GameRecord::from_board(&fools_mate());
        record.moves[1] = "e7e4".into();
        assert!(matches!(record.replay(), Err(ChessError::IllegalMove { .. })));
    }
}
