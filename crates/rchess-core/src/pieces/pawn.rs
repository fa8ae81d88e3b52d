//! Pawn moves
//!
//! Pawns have no direction vectors; every pawn destination is special:
//! single push, double push from the start rank, diagonal capture and
//! en passant against a pawn that just advanced two ranks.

use crate::bitboard::Bitboard;
use crate::board::BoardView;
use crate::types::{Color, PlayedMove, Square};

/// All pawn destinations for the pawn on `from`
pub(super) fn pawn_targets(
    from: Square,
    color: Color,
    board: &dyn BoardView,
    last_move: Option<&PlayedMove>,
) -> Bitboard {
    let fwd = color.forward();
    let mut targets = Bitboard::EMPTY;

    if let Some(one) = from.offset(fwd, 0).filter(|&s| board.is_empty(s)) {
        targets.set(one);
        if from.rank() == color.pawn_rank() {
            if let Some(two) = one.offset(fwd, 0).filter(|&s| board.is_empty(s)) {
                targets.set(two);
            }
        }
    }

    for df in [-1, 1] {
        let Some(diag) = from.offset(fwd, df) else {
            continue;
        };
        match board.color_on(diag) {
            Some(c) if c != color => targets.set(diag),
            Some(_) => {}
            None => {
                if en_passant_victim(from, diag, color, last_move).is_some() {
                    targets.set(diag);
                }
            }
        }
    }
    targets
}

/// Both forward diagonals, whatever stands on them
pub(super) fn pawn_attacks(from: Square, color: Color) -> Bitboard {
    let fwd = color.forward();
    [-1, 1].into_iter().filter_map(|df| from.offset(fwd, df)).collect()
}

/// Square of the pawn captured en passant by `from -> to`, if the move is one
///
/// The last move must be a double push by an enemy pawn that landed beside
/// `from` on the destination file.
pub fn en_passant_victim(
    from: Square,
    to: Square,
    color: Color,
    last_move: Option<&PlayedMove>,
) -> Option<Square> {
    if from.rank() != color.en_passant_rank() || from.file() == to.file() {
        return None;
    }
    let last = last_move?;
    let victim = last.destination();
    let jumped = last.piece().is_pawn()
        && last.piece().color != color
        && last.is_double_pawn_push()
        && victim.rank() == from.rank()
        && victim.file() == to.file();
    jumped.then_some(victim)
}
