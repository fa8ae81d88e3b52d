//! Castling rights

use serde::{Deserialize, Serialize};

use crate::board::BoardView;
use crate::types::{CastleSide, Color, Piece, PieceKind, Square};

/// Per-color castling flags
///
/// A flag only ever goes from set to cleared. It is cleared when the king
/// moves, or when anything leaves or lands on the matching rook corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRights {
    /// [color][side] with side 0 = kingside, 1 = queenside
    flags: [[bool; 2]; 2],
}

impl CastlingRights {
    /// No castling for anyone
    pub const NONE: Self = CastlingRights { flags: [[false; 2]; 2] };

    /// All four castles available
    pub const ALL: Self = CastlingRights { flags: [[true; 2]; 2] };

    #[inline]
    const fn side_index(side: CastleSide) -> usize {
        match side {
            CastleSide::Kingside => 0,
            CastleSide::Queenside => 1,
        }
    }

    /// Rights that the piece placement still allows
    ///
    /// A flag is set only when the king and the matching rook both stand on
    /// their home squares.
    pub fn infer(board: &dyn BoardView) -> Self {
        let mut rights = CastlingRights::NONE;
        for color in Color::ALL {
            let back = color.back_rank();
            let king_home = Square::from_rank_file(back, 4);
            if board.piece_on(king_home) != Some(Piece::new(PieceKind::King, color)) {
                continue;
            }
            for side in [CastleSide::Kingside, CastleSide::Queenside] {
                let rook_home = Square::from_rank_file(back, side.rook_files().0);
                if board.piece_on(rook_home) == Some(Piece::new(PieceKind::Rook, color)) {
                    rights.flags[color.index()][Self::side_index(side)] = true;
                }
            }
        }
        rights
    }

    #[inline]
    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        self.flags[color.index()][Self::side_index(side)]
    }

    /// True when `color` may still castle on either side
    #[inline]
    pub fn any(&self, color: Color) -> bool {
        self.flags[color.index()].iter().any(|&f| f)
    }

    #[inline]
    pub fn clear(&mut self, color: Color, side: CastleSide) {
        self.flags[color.index()][Self::side_index(side)] = false;
    }

    /// Clear both flags of a color (king moved)
    #[inline]
    pub fn clear_color(&mut self, color: Color) {
        self.flags[color.index()] = [false; 2];
    }

    /// Clear the flag tied to a rook corner, if `sq` is one
    pub fn clear_corner(&mut self, sq: Square) {
        let color = match sq.rank() {
            0 => Color::White,
            7 => Color::Black,
            _ => return,
        };
        match sq.file() {
            7 => self.clear(color, CastleSide::Kingside),
            0 => self.clear(color, CastleSide::Queenside),
            _ => {}
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::ALL
    }
}
