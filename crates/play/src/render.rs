use std::fmt::Write;

use chess_core::{Color, Grid};

/// Plain-text diagram, rank 8 at the top, `.` for empty squares.
pub fn render(grid: &Grid, side_to_move: Color) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "   a b c d e f g h");
    let _ = writeln!(out, "  +-----------------+");
    for (row, cells) in grid.rows().iter().enumerate() {
        let rank = 8 - row;
        let squares: Vec<String> = cells
            .iter()
            .map(|cell| cell.map_or('.', |pc| pc.symbol()).to_string())
            .collect();
        let _ = writeln!(out, "{rank} | {} | {rank}", squares.join(" "));
    }
    let _ = writeln!(out, "  +-----------------+");
    let _ = writeln!(out, "   a b c d e f g h");
    let _ = write!(out, "{side_to_move} to move");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::START_PLACEMENT;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_start_position() {
        let grid: Grid = START_PLACEMENT.parse().unwrap();
        let text = render(&grid, Color::White);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[2], "8 | r n b q k b n r | 8");
        assert_eq!(lines[5], "5 | . . . . . . . . | 5");
        assert_eq!(lines[9], "1 | R N B Q K B N R | 1");
        assert_eq!(lines[12], "White to move");
    }
}
