//! Board representation
//!
//! `Board` owns the real piece placement; `DeltaBoard` is a sparse overlay used
//! to simulate moves without touching its parent. Both are read through the
//! `BoardView` trait so the piece catalog and the threat scan work on either.

mod board_repr;
mod delta;
mod display;

pub use self::board_repr::Board;
pub use self::delta::DeltaBoard;
pub use self::display::{pretty, render};

use crate::bitboard::Bitboard;
use crate::types::{Color, Piece, Square};

/// Read access to a piece placement
pub trait BoardView {
    /// Piece on square (`None` when empty)
    fn piece_on(&self, sq: Square) -> Option<Piece>;

    /// Cached king square for a color
    fn king_square(&self, color: Color) -> Square;

    #[inline]
    fn is_empty(&self, sq: Square) -> bool {
        self.piece_on(sq).is_none()
    }

    /// Color of the piece on square, if any
    #[inline]
    fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_on(sq).map(|p| p.color)
    }

    /// Squares occupied by a color
    fn occupied_by(&self, color: Color) -> Bitboard {
        Square::all().filter(|&sq| self.color_on(sq) == Some(color)).collect()
    }
}
