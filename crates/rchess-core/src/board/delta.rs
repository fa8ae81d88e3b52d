//! Copy-on-write overlay board for move simulation
//!
//! A `DeltaBoard` borrows a parent view and records only the squares that
//! changed. Lookups hit the overlay first and fall through to the parent, so a
//! "what if" position costs a handful of entries instead of a board copy.

use smallvec::SmallVec;

use super::BoardView;
use crate::types::{Color, Piece, Square};

/// Overlay entries; a simulated move touches at most three squares
type Overlay = SmallVec<[(Square, Option<Piece>); 4]>;

/// Sparse overlay over a parent board
pub struct DeltaBoard<'a> {
    parent: &'a dyn BoardView,
    overlay: Overlay,
    king_squares: [Square; 2],
}

impl<'a> DeltaBoard<'a> {
    /// Create an empty overlay over `parent`
    pub fn new(parent: &'a dyn BoardView) -> Self {
        DeltaBoard {
            parent,
            overlay: SmallVec::new(),
            king_squares: [parent.king_square(Color::White), parent.king_square(Color::Black)],
        }
    }

    /// Discard all overlay entries and delegate to the parent unchanged
    pub fn reset(&mut self) {
        self.overlay.clear();
        self.king_squares = [
            self.parent.king_square(Color::White),
            self.parent.king_square(Color::Black),
        ];
    }

    /// Override the piece on a square (the parent is left untouched)
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        if let Some(p) = piece {
            if p.is_king() {
                self.king_squares[p.color.index()] = sq;
            }
        }
        match self.overlay.iter_mut().find(|(s, _)| *s == sq) {
            Some(entry) => entry.1 = piece,
            None => self.overlay.push((sq, piece)),
        }
    }

    /// `set(destination, moved); set(source, None)`
    pub fn make_move(&mut self, source: Square, destination: Square, moved: Piece) {
        self.set(destination, Some(moved));
        self.set(source, None);
    }

    /// Number of overridden squares
    #[inline]
    pub fn overlay_len(&self) -> usize {
        self.overlay.len()
    }

    #[inline]
    pub fn is_empty_overlay(&self) -> bool {
        self.overlay.is_empty()
    }
}

impl BoardView for DeltaBoard<'_> {
    fn piece_on(&self, sq: Square) -> Option<Piece> {
        match self.overlay.iter().find(|(s, _)| *s == sq) {
            Some((_, piece)) => *piece,
            None => self.parent.piece_on(sq),
        }
    }

    #[inline]
    fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }
}
