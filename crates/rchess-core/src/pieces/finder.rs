//! Reverse move lookup
//!
//! Given a destination, list the squares holding a piece of a given kind and
//! color that could move there by geometry alone. Used to resolve SAN source
//! squares and to build disambiguation tokens.

use smallvec::SmallVec;

use crate::board::BoardView;
use crate::error::{ChessError, Result};
use crate::types::{Color, Piece, PieceKind, Square};

use super::sliding::first_blocker;
use super::{Movement, directions, movement};

/// Candidate source squares; rarely more than two
pub type Candidates = SmallVec<[Square; 4]>;

/// Every square with a `kind`/`color` piece able to reach `destination`
///
/// `source_rank` and `source_file` restrict the result when given. Sliding
/// paths must be unobstructed. Pins are not considered.
pub fn find(
    kind: PieceKind,
    color: Color,
    destination: Square,
    source_rank: Option<u8>,
    source_file: Option<u8>,
    board: &dyn BoardView,
) -> Candidates {
    let wanted = Piece::new(kind, color);
    let holds = |sq: Square| board.piece_on(sq) == Some(wanted);

    let mut found = Candidates::new();
    match movement(kind) {
        Movement::SingleStep => {
            // king and knight vectors are symmetric, so stepping back from the
            // destination visits every possible source
            for &(dr, df) in directions(kind) {
                if let Some(src) = destination.offset(-dr, -df).filter(|&s| holds(s)) {
                    found.push(src);
                }
            }
        }
        Movement::Sliding => {
            for &(dr, df) in directions(kind) {
                if let Some(src) = first_blocker(destination, (dr, df), board).filter(|&s| holds(s)) {
                    found.push(src);
                }
            }
        }
        Movement::Pawn => find_pawns(color, destination, board, &holds, &mut found),
    }

    found.retain(|sq| {
        source_rank.is_none_or(|r| sq.rank() == r) && source_file.is_none_or(|f| sq.file() == f)
    });
    found.sort_unstable();
    found
}

fn find_pawns(
    color: Color,
    destination: Square,
    board: &dyn BoardView,
    holds: &dyn Fn(Square) -> bool,
    found: &mut Candidates,
) {
    let back = -color.forward();
    match board.color_on(destination) {
        None => {
            let Some(one) = destination.offset(back, 0) else {
                return;
            };
            if holds(one) {
                found.push(one);
            } else if destination.rank() == color.double_push_rank() && board.is_empty(one) {
                if let Some(two) = one.offset(back, 0).filter(|&s| holds(s)) {
                    found.push(two);
                }
            }
        }
        Some(c) if c != color => {
            for df in [-1, 1] {
                if let Some(src) = destination.offset(back, df).filter(|&s| holds(s)) {
                    found.push(src);
                }
            }
        }
        Some(_) => {}
    }
}

/// The single matching source square
///
/// `ImpossibleMove` when nothing matches, `AmbiguousAlgebraicMove` when more
/// than one piece does.
pub fn find_unique(
    kind: PieceKind,
    color: Color,
    destination: Square,
    source_rank: Option<u8>,
    source_file: Option<u8>,
    board: &dyn BoardView,
) -> Result<Square> {
    let found = find(kind, color, destination, source_rank, source_file, board);
    match found.as_slice() {
        [] => Err(ChessError::ImpossibleMove(format!(
            "no {color:?} {kind:?} can reach {destination}"
        ))),
        [only] => Ok(*only),
        many => Err(ChessError::AmbiguousAlgebraicMove {
            san: format!("{}{destination}", kind.san_prefix()),
            candidates: many.to_vec(),
        }),
    }
}
