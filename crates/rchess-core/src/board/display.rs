//! Text rendering of a board
//!
//! Diagnostic view only: ranks 8 to 1 from top to bottom, files a to h from
//! left to right, white pieces uppercase, black pieces lowercase, `.` empty.

use std::fmt;

use super::{Board, BoardView};
use crate::types::Square;

const BORDER: &str = "  +-----------------+";

/// Plain 8x8 grid, one line per rank
pub fn render(board: &dyn BoardView) -> String {
    let mut out = String::with_capacity(72);
    for rank in (0..8).rev() {
        for file in 0..8 {
            out.push(square_char(board, Square::from_rank_file(rank, file)));
        }
        out.push('\n');
    }
    out
}

/// Framed grid with rank numbers and a file legend
pub fn pretty(board: &dyn BoardView) -> String {
    let mut out = String::new();
    out.push_str(BORDER);
    out.push('\n');
    for rank in (0..8).rev() {
        out.push_str(&format!("{} |", rank + 1));
        for file in 0..8 {
            out.push(' ');
            out.push(square_char(board, Square::from_rank_file(rank, file)));
        }
        out.push_str(" |\n");
    }
    out.push_str(BORDER);
    out.push('\n');
    out.push_str("    a b c d e f g h\n");
    out
}

#[inline]
fn square_char(board: &dyn BoardView, sq: Square) -> char {
    board.piece_on(sq).map_or('.', |p| p.to_char())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

impl Board {
    /// Framed diagnostic view
    pub fn pretty(&self) -> String {
        pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_initial_position() {
        let expected = "\
rnbqkbnr
pppppppp
........
........
........
........
PPPPPPPP
RNBQKBNR
";
        assert_eq!(Board::new().to_string(), expected);
    }

    #[test]
    fn test_pretty_has_frame_and_legend() {
        let text = Board::new().pretty();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], BORDER);
        assert_eq!(lines[1], "8 | r n b q k b n r |");
        assert_eq!(lines[8], "1 | R N B Q K B N R |");
        assert_eq!(lines[10], "    a b c d e f g h");
    }
}
