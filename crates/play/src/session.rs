//! Turn loop for one game between any mix of humans and engines.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chess_core::{Board, Color, Engine, GameStatus, move_to_coord, parse_coord_move};
use classical_engine::ClassicalEngine;
use log::{debug, info};
use random_engine::RandomEngine;

use crate::config::{PlayConfig, PlayerKind};
use crate::render::render;

pub enum Seat {
    Human,
    Engine(Box<dyn Engine>),
}

impl Seat {
    pub fn from_kind(kind: PlayerKind) -> Self {
        match kind {
            PlayerKind::Human => Seat::Human,
            PlayerKind::Classical => Seat::Engine(Box::new(ClassicalEngine::new())),
            PlayerKind::Random => Seat::Engine(Box::new(RandomEngine::new())),
        }
    }

    fn is_human(&self) -> bool {
        matches!(self, Seat::Human)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Finished(GameStatus),
    Quit,
    PlyLimit,
}

pub struct Session<R, W> {
    board: Board,
    config: PlayConfig,
    white: Seat,
    black: Seat,
    input: R,
    out: W,
}

const HELP: &str = "enter a move like e2e4 (a7a8q to promote), or: moves, board, undo, help, quit";

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(board: Board, config: PlayConfig, white: Seat, black: Seat, input: R, out: W) -> Self {
        Self {
            board,
            config,
            white,
            black,
            input,
            out,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    fn seat(&mut self, color: Color) -> &mut Seat {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Plays until the game ends, a human quits, or the ply limit is reached.
    pub fn run(&mut self) -> Result<Outcome> {
        for seat in [&mut self.white, &mut self.black] {
            if let Seat::Engine(engine) = seat {
                engine.new_game();
            }
        }
        writeln!(self.out, "{}", render(self.board.grid(), self.board.side_to_move()))?;

        loop {
            let status = self.board.status();
            if status.is_over() {
                writeln!(self.out, "{}", describe(status))?;
                info!("game over: {status:?} after {} plies", self.board.move_log().len());
                return Ok(Outcome::Finished(status));
            }
            if self.board.move_log().len() as u32 >= self.config.max_plies {
                writeln!(self.out, "ply limit reached, game abandoned")?;
                return Ok(Outcome::PlyLimit);
            }

            let side = self.board.side_to_move();
            if self.seat(side).is_human() {
                if !self.human_turn(side)? {
                    return Ok(Outcome::Quit);
                }
            } else {
                self.engine_turn(side)?;
            }
        }
    }

    fn engine_turn(&mut self, side: Color) -> Result<()> {
        let limits = self.config.search_limits();
        let board = self.board.clone();
        let Seat::Engine(engine) = self.seat(side) else {
            return Ok(());
        };
        let name = engine.name().to_string();
        let result = engine
            .search(&board, limits)
            .with_context(|| format!("{name} failed to move"))?;
        debug!(
            "{name}: {} score {} nodes {}",
            result.best_move, result.score, result.nodes
        );

        self.board.apply_move(result.best_move)?;
        writeln!(self.out, "{side} ({name}) plays {}", move_to_coord(result.best_move))?;
        writeln!(self.out, "{}", render(self.board.grid(), self.board.side_to_move()))?;
        Ok(())
    }

    /// Reads commands until a move is made. Returns false on quit or end of input.
    fn human_turn(&mut self, side: Color) -> Result<bool> {
        loop {
            write!(self.out, "{side}> ")?;
            self.out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            match line.trim() {
                "" => continue,
                "quit" | "exit" => return Ok(false),
                "help" => writeln!(self.out, "{HELP}")?,
                "board" => writeln!(
                    self.out,
                    "{}",
                    render(self.board.grid(), self.board.side_to_move())
                )?,
                "moves" => {
                    let moves: Vec<String> =
                        self.board.legal_moves().into_iter().map(move_to_coord).collect();
                    writeln!(self.out, "{}", moves.join(" "))?;
                }
                "undo" => {
                    self.undo_to_human();
                    writeln!(self.out, "{}", render(self.board.grid(), self.board.side_to_move()))?;
                    // The side to move may have changed hands
                    return Ok(true);
                }
                text => match parse_coord_move(self.board.position(), text) {
                    Ok(mv) => {
                        self.board.apply_move(mv)?;
                        writeln!(self.out, "{}", render(self.board.grid(), self.board.side_to_move()))?;
                        return Ok(true);
                    }
                    Err(e) => writeln!(self.out, "{e}")?,
                },
            }
        }
    }

    /// Takes back one ply, or two when an engine replied to the human.
    fn undo_to_human(&mut self) {
        self.board.undo_move();
        let side = self.board.side_to_move();
        if !self.seat(side).is_human() {
            self.board.undo_move();
        }
    }
}

pub fn describe(status: GameStatus) -> String {
    match status {
        GameStatus::Ongoing => "game in progress".to_string(),
        GameStatus::Checkmate { winner } => format!("checkmate, {winner} wins"),
        GameStatus::Stalemate => "stalemate, draw".to_string(),
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
