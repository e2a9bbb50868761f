//! Fixed-depth negamax with alpha-beta pruning.

use log::{debug, trace, warn};

use chess_core::{
    Board, ChessError, GameStatus, Move, Position, SearchLimits, SearchResult,
    TimeControl, legal_moves, legal_moves_into,
};

use crate::eval::evaluate_with_status;

const INF: i32 = i32::MAX / 2;

/// Per-call bookkeeping: node count and the cancellation source.
pub struct SearchContext<'a> {
    pub nodes: u64,
    pub stopped: bool,
    time_control: &'a TimeControl,
}

impl<'a> SearchContext<'a> {
    pub fn new(time_control: &'a TimeControl) -> Self {
        Self {
            nodes: 0,
            stopped: false,
            time_control,
        }
    }

    /// Polled once per node; only reads the clock every few hundred nodes.
    fn should_stop(&mut self) -> bool {
        if self.stopped {
            return true;
        }
        let hit = if self.time_control.should_check_time(self.nodes) {
            self.time_control.check_time()
        } else {
            self.time_control.is_stopped()
        };
        self.stopped = hit;
        hit
    }
}

fn status_of(pos: &Position, has_moves: bool) -> GameStatus {
    if has_moves {
        GameStatus::Ongoing
    } else if pos.in_check(pos.side_to_move) {
        GameStatus::Checkmate {
            winner: pos.side_to_move.other(),
        }
    } else {
        GameStatus::Stalemate
    }
}

/// Negamax score of `pos` for the side `color_sign` stands for.
///
/// Moves are played and taken back in place, so `pos` is unchanged on return.
/// Returns 0 once the context has been stopped; callers discard that value.
pub fn search(
    pos: &mut Position,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    color_sign: i32,
    ctx: &mut SearchContext<'_>,
) -> i32 {
    if ctx.should_stop() {
        return 0;
    }
    ctx.nodes += 1;

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);

    if depth == 0 || moves.is_empty() {
        let status = status_of(pos, !moves.is_empty());
        return color_sign * evaluate_with_status(pos, status);
    }

    let mut best = -INF;
    for mv in moves {
        let undo = pos.make_move(mv);
        let score = -search(pos, depth - 1, -beta, -alpha, -color_sign, ctx);
        pos.unmake_move(mv, undo);

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

/// Picks the root move with the highest negamax score; ties keep the earliest.
///
/// `board` is never touched: the search runs on a private copy of its position.
/// A depth of 0 is treated as 1.
pub fn search_root(board: &Board, limits: &SearchLimits) -> Result<SearchResult, ChessError> {
    let (over, winner) = board.is_game_over();
    if over {
        return Err(ChessError::Precondition(match winner {
            Some(w) => format!("game is over, {w} has won"),
            None => "game is over by stalemate".into(),
        }));
    }

    let mut pos = *board.position();
    let root_moves = legal_moves(&pos);
    let depth = limits.depth.max(1);
    // +1 when White is to move, -1 otherwise
    let sign = pos.side_to_move.sign();
    let mut ctx = SearchContext::new(&limits.time_control);

    let mut best: Option<(Move, i32)> = None;
    let mut alpha = -INF;
    let beta = INF;

    for &mv in &root_moves {
        if limits.time_control.check_time() {
            ctx.stopped = true;
            break;
        }
        let undo = pos.make_move(mv);
        let score = -search(&mut pos, depth - 1, -beta, -alpha, -sign, &mut ctx);
        pos.unmake_move(mv, undo);
        if ctx.stopped {
            break;
        }

        trace!("root {mv}: {score}");
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((mv, score));
        }
        alpha = alpha.max(score);
    }

    let (best_move, score) = match best {
        Some(found) => found,
        // Stopped before any root move finished: fall back to the first legal move.
        None => match root_moves.first() {
            Some(&mv) => (mv, 0),
            None => return Err(ChessError::Precondition("no legal moves".into())),
        },
    };

    if ctx.stopped {
        warn!(
            "search stopped after {:?}, returning {best_move}",
            limits.time_control.elapsed()
        );
    }
    debug!(
        "best move {best_move} score {score} depth {depth} nodes {}",
        ctx.nodes
    );

    Ok(SearchResult {
        best_move,
        score,
        depth,
        nodes: ctx.nodes,
        stopped: ctx.stopped,
    })
}

/// Best move at a fixed depth with no time limit.
pub fn best_move(board: &Board, depth: u8) -> Result<Move, ChessError> {
    let mut limits = SearchLimits::depth(depth);
    limits.start();
    search_root(board, &limits).map(|r| r.best_move)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
