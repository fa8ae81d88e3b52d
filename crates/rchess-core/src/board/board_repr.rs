//! Board representation and basic manipulation
//!
//! This module contains the Board struct which stores piece placement in a
//! 64-slot array and keeps a per-color king square cache.

use super::BoardView;
use crate::types::{Color, Piece, PieceKind, Square};
#[cfg(debug_assertions)]
use log::warn;

/// Back rank layout from file a to file h
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Board representation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Piece on each square, indexed by `Square::index`
    squares: [Option<Piece>; 64],

    /// King square per color [color]
    /// - Updated whenever a king is placed through `set`
    /// - Avoids a 64-square scan on every check test
    king_squares: [Square; 2],
}

impl Board {
    /// Board with the standard 32-piece starting setup
    pub fn new() -> Self {
        let mut board = Board::with_kings(Square::E1, Square::E8);
        for color in Color::ALL {
            for (file, kind) in BACK_RANK.iter().enumerate() {
                let sq = Square::from_rank_file(color.back_rank(), file as u8);
                board.set(sq, Some(Piece::new(*kind, color)));
                let pawn_sq = Square::from_rank_file(color.pawn_rank(), file as u8);
                board.set(pawn_sq, Some(Piece::new(PieceKind::Pawn, color)));
            }
        }
        board
    }

    /// Board holding only the two kings
    pub fn with_kings(white_king: Square, black_king: Square) -> Self {
        debug_assert_ne!(white_king, black_king);
        let mut squares = [None; 64];
        squares[white_king.index()] = Some(Piece::new(PieceKind::King, Color::White));
        squares[black_king.index()] = Some(Piece::new(PieceKind::King, Color::Black));
        Board {
            squares,
            king_squares: [white_king, black_king],
        }
    }

    /// Place (or clear, with `None`) the piece on a square
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        #[cfg(debug_assertions)]
        if let Some(old) = self.squares[sq.index()] {
            if old.is_king() && piece != Some(old) {
                warn!("Overwriting {:?} king on {sq}", old.color);
            }
        }
        if let Some(p) = piece {
            if p.is_king() {
                self.king_squares[p.color.index()] = sq;
            }
        }
        self.squares[sq.index()] = piece;
    }

    /// Place piece on board
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.set(sq, Some(piece));
    }

    /// Remove piece from board
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.squares[sq.index()];
        self.squares[sq.index()] = None;
        piece
    }

    /// `set(destination, moved); set(source, None)`
    pub fn make_move(&mut self, source: Square, destination: Square, moved: Piece) {
        self.set(destination, Some(moved));
        self.set(source, None);
    }

    /// Iterate occupied squares with their pieces
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.squares[sq.index()].map(|p| (sq, p)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl BoardView for Board {
    #[inline]
    fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_initial_setup() {
        let board = Board::new();
        assert_eq!(board.iter().count(), 32);
        assert_eq!(board.piece_on(sq("a1")), Some(Piece::new(PieceKind::Rook, Color::White)));
        assert_eq!(board.piece_on(sq("d8")), Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert_eq!(board.piece_on(sq("e2")), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(board.piece_on(sq("e4")), None);
        assert_eq!(board.king_square(Color::White), Square::E1);
        assert_eq!(board.king_square(Color::Black), Square::E8);
        assert_eq!(board.occupied_by(Color::White).count(), 16);
    }

    #[test]
    fn test_board_operations() {
        let mut board = Board::with_kings(Square::E1, Square::E8);
        let knight = Piece::new(PieceKind::Knight, Color::White);

        board.put(sq("b1"), knight);
        assert_eq!(board.piece_on(sq("b1")), Some(knight));

        board.make_move(sq("b1"), sq("c3"), knight);
        assert_eq!(board.piece_on(sq("b1")), None);
        assert_eq!(board.piece_on(sq("c3")), Some(knight));

        assert_eq!(board.remove(sq("c3")), Some(knight));
        assert!(board.is_empty(sq("c3")));
    }

    #[test]
    fn test_king_square_cache_follows_king() {
        let mut board = Board::with_kings(Square::E1, Square::E8);
        let white_king = Piece::new(PieceKind::King, Color::White);

        board.make_move(Square::E1, sq("e2"), white_king);
        assert_eq!(board.king_square(Color::White), sq("e2"));
        assert_eq!(board.king_square(Color::Black), Square::E8);
    }
}
