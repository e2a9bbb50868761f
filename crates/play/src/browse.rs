//! Interactive stepping through a recorded game.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chess_core::{Board, GameRecord, ReviewHistory};

use crate::render::render;

/// Reads either a JSON game record or a plain list of placements, one per line.
pub fn load_history(path: &Path) -> Result<ReviewHistory> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_history(&text).with_context(|| format!("in {}", path.display()))
}

pub fn parse_history(text: &str) -> Result<ReviewHistory> {
    if text.trim_start().starts_with('{') {
        let record = GameRecord::from_json(text).context("invalid game record")?;
        return Ok(record.to_review()?);
    }
    let placements: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect();
    Ok(ReviewHistory::new(placements)?)
}

/// Steps through `history` on command. Returns a board to continue playing
/// from when the user asks for one.
pub fn browse<R: BufRead, W: Write>(
    history: &mut ReviewHistory,
    mut input: R,
    mut out: W,
) -> Result<Option<Board>> {
    loop {
        let side = history.side_to_move();
        writeln!(out, "{}", render(history.current_grid(), side))?;
        writeln!(out, "position {}/{}", history.index() + 1, history.len())?;
        write!(out, "review (n, p, <number>, play, q)> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim() {
            "n" | "" => history.step(1),
            "p" => history.step(-1),
            "q" | "quit" => return Ok(None),
            "play" => return Ok(Some(history.to_board()?)),
            other => match other.parse::<usize>() {
                Ok(n) if n >= 1 => {
                    if let Err(e) = history.seek(n - 1) {
                        writeln!(out, "{e}")?;
                    }
                }
                _ => writeln!(out, "unknown command: {other}")?,
            },
        }
    }
}
