//! Sliding pieces (Bishop, Rook, Queen)

use crate::bitboard::Bitboard;
use crate::board::BoardView;
use crate::types::{Color, Square};

use super::Direction;

/// Walk every direction until the board edge or the first piece.
/// An enemy blocker is included, a friendly one is not.
pub(super) fn ray_targets(
    from: Square,
    color: Color,
    dirs: &[Direction],
    board: &dyn BoardView,
) -> Bitboard {
    let mut targets = Bitboard::EMPTY;
    for &(dr, df) in dirs {
        let mut cur = from;
        while let Some(next) = cur.offset(dr, df) {
            match board.color_on(next) {
                None => targets.set(next),
                Some(c) => {
                    if c != color {
                        targets.set(next);
                    }
                    break;
                }
            }
            cur = next;
        }
    }
    targets
}

/// First occupied square along `dir` starting next to `from`
pub(super) fn first_blocker(
    from: Square,
    dir: Direction,
    board: &dyn BoardView,
) -> Option<Square> {
    let mut cur = from;
    while let Some(next) = cur.offset(dir.0, dir.1) {
        if !board.is_empty(next) {
            return Some(next);
        }
        cur = next;
    }
    None
}
