//! Piece catalog
//!
//! Movement geometry per piece kind and the threatened-square sets derived
//! from it. Dispatch is a plain `match` on `PieceKind`:
//! - single-step pieces (King, Knight) test each vector once
//! - sliding pieces (Bishop, Rook, Queen) walk each vector to a blocker
//! - pawns have no vectors and are handled entirely as special moves

mod finder;
mod non_sliding;
mod pawn;
mod sliding;

pub use self::finder::{find, find_unique};
pub use self::pawn::en_passant_victim;

use crate::bitboard::Bitboard;
use crate::board::BoardView;
use crate::rules::CastlingRights;
use crate::types::{PieceKind, PlayedMove, Square};

/// (rank, file) deltas
pub type Direction = (i8, i8);

pub const DIAGONALS: [Direction; 4] = [(-1, 1), (1, -1), (1, 1), (-1, -1)];
pub const STRAIGHTS: [Direction; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const QUEEN_DIRECTIONS: [Direction; 8] =
    [(-1, 1), (1, -1), (1, 1), (-1, -1), (1, 0), (-1, 0), (0, 1), (0, -1)];
pub const KNIGHT_DELTAS: [Direction; 8] =
    [(1, 2), (2, 1), (-1, 2), (-2, 1), (1, -2), (2, -1), (-1, -2), (-2, -1)];

/// How a piece kind walks its direction vectors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    /// One step per vector (King, Knight)
    SingleStep,
    /// Repeat each vector until a blocker (Bishop, Rook, Queen)
    Sliding,
    /// No vectors; pushes and captures are special moves
    Pawn,
}

/// Direction vectors of a piece kind (empty for pawns)
pub const fn directions(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Pawn => &[],
        PieceKind::Knight => &KNIGHT_DELTAS,
        PieceKind::Bishop => &DIAGONALS,
        PieceKind::Rook => &STRAIGHTS,
        PieceKind::Queen | PieceKind::King => &QUEEN_DIRECTIONS,
    }
}

/// Movement classification of a piece kind
pub const fn movement(kind: PieceKind) -> Movement {
    match kind {
        PieceKind::Pawn => Movement::Pawn,
        PieceKind::Knight | PieceKind::King => Movement::SingleStep,
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => Movement::Sliding,
    }
}

/// Game state needed by the special rules (castling, en passant)
#[derive(Clone, Copy, Debug)]
pub struct SpecialContext<'a> {
    pub castling: CastlingRights,
    pub last_move: Option<&'a PlayedMove>,
}

/// Normal moves/captures of the piece on `sq`
///
/// Friendly-occupied squares are never included. Empty squares yield an
/// empty set.
pub fn threatened_squares(sq: Square, board: &dyn BoardView) -> Bitboard {
    let Some(piece) = board.piece_on(sq) else {
        return Bitboard::EMPTY;
    };
    let dirs = directions(piece.kind);
    match movement(piece.kind) {
        Movement::SingleStep => non_sliding::step_targets(sq, piece.color, dirs, board),
        Movement::Sliding => sliding::ray_targets(sq, piece.color, dirs, board),
        Movement::Pawn => Bitboard::EMPTY,
    }
}

/// Additional squares from the special rules
///
/// King: castling destinations (transit safety is checked by the rules
/// engine). Pawn: pushes, double push, diagonal captures and en passant.
pub fn special_threatened_squares(
    sq: Square,
    board: &dyn BoardView,
    ctx: &SpecialContext<'_>,
) -> Bitboard {
    let Some(piece) = board.piece_on(sq) else {
        return Bitboard::EMPTY;
    };
    match piece.kind {
        PieceKind::King => non_sliding::castling_targets(sq, piece.color, board, ctx.castling),
        PieceKind::Pawn => pawn::pawn_targets(sq, piece.color, board, ctx.last_move),
        _ => Bitboard::EMPTY,
    }
}

/// Union of normal and special destinations
#[inline]
pub fn all_threatened_squares(
    sq: Square,
    board: &dyn BoardView,
    ctx: &SpecialContext<'_>,
) -> Bitboard {
    threatened_squares(sq, board) | special_threatened_squares(sq, board, ctx)
}

/// Squares the piece on `sq` controls, for threat tests
///
/// Same as `threatened_squares` except for pawns, which control both forward
/// diagonals whatever stands there and never control their push squares.
pub fn attacks(sq: Square, board: &dyn BoardView) -> Bitboard {
    match board.piece_on(sq) {
        Some(p) if p.is_pawn() => pawn::pawn_attacks(sq, p.color),
        Some(_) => threatened_squares(sq, board),
        None => Bitboard::EMPTY,
    }
}
