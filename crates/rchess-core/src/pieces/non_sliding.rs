//! Single-step pieces (King, Knight) and castling candidates

use crate::bitboard::Bitboard;
use crate::board::BoardView;
use crate::rules::CastlingRights;
use crate::types::{CastleSide, Color, Piece, PieceKind, Square};

use super::Direction;

/// Each vector tested once; friendly-occupied destinations are dropped
pub(super) fn step_targets(
    from: Square,
    color: Color,
    dirs: &[Direction],
    board: &dyn BoardView,
) -> Bitboard {
    dirs.iter()
        .filter_map(|&(dr, df)| from.offset(dr, df))
        .filter(|&to| board.color_on(to) != Some(color))
        .collect()
}

/// Castling destinations that pass the static checks
///
/// King on its home square, flag set, own rook on the corner and every square
/// strictly between them empty. Attacked transit squares are not checked here.
pub(super) fn castling_targets(
    from: Square,
    color: Color,
    board: &dyn BoardView,
    rights: CastlingRights,
) -> Bitboard {
    let back = color.back_rank();
    let mut targets = Bitboard::EMPTY;
    if from != Square::from_rank_file(back, 4) {
        return targets;
    }
    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if !rights.has(color, side) {
            continue;
        }
        let (rook_file, _) = side.rook_files();
        let rook_sq = Square::from_rank_file(back, rook_file);
        if board.piece_on(rook_sq) != Some(Piece::new(PieceKind::Rook, color)) {
            continue;
        }
        let (lo, hi) = if rook_file > 4 { (5, rook_file) } else { (rook_file + 1, 4) };
        let clear = (lo..hi).all(|f| board.is_empty(Square::from_rank_file(back, f)));
        if clear {
            targets.set(Square::from_rank_file(back, side.king_target_file()));
        }
    }
    targets
}
