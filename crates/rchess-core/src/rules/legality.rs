//! RulesEngine extensions for move legality checking

use log::trace;

use crate::bitboard::Bitboard;
use crate::board::{BoardView, DeltaBoard};
use crate::error::{ChessError, Result};
use crate::pieces::{self, SpecialContext, en_passant_victim};
use crate::types::{CastleSide, Color, Move, Piece, PieceKind, PlayedMove, Square};

use super::{CastlingRights, RulesEngine};

/// True when any `by` piece attacks `sq` on `board`
pub(crate) fn is_square_threatened(board: &dyn BoardView, sq: Square, by: Color) -> bool {
    board.occupied_by(by).into_iter().any(|from| pieces::attacks(from, board).test(sq))
}

/// Play `mv` on an overlay: en-passant victim, castling rook, then the piece
/// itself (promoted if requested)
pub(crate) fn simulate(
    delta: &mut DeltaBoard<'_>,
    mv: Move,
    piece: Piece,
    last_move: Option<&PlayedMove>,
) {
    if piece.is_pawn() {
        if let Some(victim) = en_passant_victim(mv.source, mv.destination, piece.color, last_move) {
            delta.set(victim, None);
        }
    }
    if piece.is_king() {
        if let Some(side) = mv.castle_side() {
            let (from_file, to_file) = side.rook_files();
            let rook = Piece::new(PieceKind::Rook, piece.color);
            delta.make_move(mv.source.with_file(from_file), mv.source.with_file(to_file), rook);
        }
    }
    let placed = match mv.promotion {
        Some(kind) if piece.is_pawn() => Piece::new(kind, piece.color),
        _ => piece,
    };
    delta.make_move(mv.source, mv.destination, placed);
}

/// Board, side to move and special-move context
///
/// Lets the same legality code run on the real board or on an overlay that
/// already holds a simulated move.
pub(crate) struct PositionView<'a> {
    pub board: &'a dyn BoardView,
    pub active: Color,
    pub ctx: SpecialContext<'a>,
}

impl PositionView<'_> {
    /// Legal destinations of the piece on `sq`
    pub fn legal_destinations(&self, sq: Square) -> Result<Bitboard> {
        let piece = self.board.piece_on(sq).ok_or(ChessError::PieceNotFound(sq))?;
        if piece.color != self.active {
            return Err(ChessError::ActiveColor {
                square: sq,
                active: self.active,
            });
        }
        let candidates = pieces::all_threatened_squares(sq, self.board, &self.ctx);
        if candidates.is_empty() {
            return Ok(candidates);
        }
        let safe = self.filter_king_safety(sq, piece, candidates);
        Ok(if piece.is_king() { self.filter_castling_transit(sq, piece.color, safe) } else { safe })
    }

    fn filter_king_safety(&self, from: Square, piece: Piece, candidates: Bitboard) -> Bitboard {
        let color = piece.color;
        let enemy = color.opponent();
        let last_move = self.ctx.last_move;
        let mut delta = DeltaBoard::new(self.board);

        if !piece.is_king() {
            // cheap probe: lift the piece (and any en-passant victim) and see
            // whether that alone exposes the king
            delta.set(from, None);
            if piece.is_pawn() {
                for to in candidates {
                    if let Some(victim) = en_passant_victim(from, to, color, last_move) {
                        if self.board.is_empty(to) {
                            delta.set(victim, None);
                        }
                    }
                }
            }
            if !is_square_threatened(&delta, delta.king_square(color), enemy) {
                return candidates;
            }
        }

        let mut safe = Bitboard::EMPTY;
        for to in candidates {
            delta.reset();
            simulate(&mut delta, Move::new(from, to), piece, last_move);
            if !is_square_threatened(&delta, delta.king_square(color), enemy) {
                safe.set(to);
            } else {
                trace!("{from}{to} leaves the {color:?} king in check");
            }
        }
        safe
    }

    /// Drop castle destinations whose transit squares are attacked
    fn filter_castling_transit(&self, from: Square, color: Color, mut targets: Bitboard) -> Bitboard {
        for side in [CastleSide::Kingside, CastleSide::Queenside] {
            let dest = from.with_file(side.king_target_file());
            if !targets.test(dest) || Move::new(from, dest).castle_side() != Some(side) {
                continue;
            }
            let files = match side {
                CastleSide::Kingside => 4..=6,
                CastleSide::Queenside => 2..=4,
            };
            let attacked = files
                .map(|f| from.with_file(f))
                .any(|sq| is_square_threatened(self.board, sq, color.opponent()));
            if attacked {
                targets.clear(dest);
            }
        }
        targets
    }

    /// True if the side to move has at least one legal move
    pub fn has_legal_moves(&self) -> bool {
        self.board
            .occupied_by(self.active)
            .into_iter()
            .any(|sq| self.legal_destinations(sq).is_ok_and(|dests| !dests.is_empty()))
    }

    pub fn king_in_check(&self) -> bool {
        let king = self.board.king_square(self.active);
        is_square_threatened(self.board, king, self.active.opponent())
    }
}

impl RulesEngine {
    pub(crate) fn position(&self) -> PositionView<'_> {
        PositionView {
            board: &self.board,
            active: self.active,
            ctx: self.special_context(),
        }
    }

    /// Legal destinations of the piece on `sq`
    ///
    /// `PieceNotFound` for an empty square, `ActiveColor` for a piece of the
    /// side not on move.
    pub fn get_legal_moves(&self, sq: Square) -> Result<Bitboard> {
        self.position().legal_destinations(sq)
    }

    /// Every legal move of the side to move, promotions expanded
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for from in self.board.occupied_by(self.active) {
            let Ok(dests) = self.get_legal_moves(from) else {
                continue;
            };
            let Some(piece) = self.board.piece_on(from) else {
                continue;
            };
            for to in dests {
                if piece.is_pawn() && to.rank() == piece.color.promotion_rank() {
                    moves.extend(PieceKind::PROMOTION_CHOICES.map(|k| Move::with_promotion(from, to, k)));
                } else {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    /// Check a move request against the current position
    ///
    /// Returns the moving piece. Nothing is mutated.
    pub(crate) fn validate(&self, mv: &Move) -> Result<Piece> {
        let dests = self.get_legal_moves(mv.source)?;
        if !dests.test(mv.destination) {
            return Err(ChessError::illegal_move(mv.to_string(), "destination is not reachable"));
        }
        let piece = self
            .board
            .piece_on(mv.source)
            .ok_or(ChessError::PieceNotFound(mv.source))?;
        let needs_promotion = piece.is_pawn() && mv.destination.rank() == piece.color.promotion_rank();
        match mv.promotion {
            None if needs_promotion => {
                Err(ChessError::illegal_move(mv.to_string(), "pawn must promote"))
            }
            Some(_) if !needs_promotion => {
                Err(ChessError::illegal_move(mv.to_string(), "only a pawn reaching the last rank promotes"))
            }
            Some(kind) if !kind.is_promotion_choice() => {
                Err(ChessError::illegal_move(mv.to_string(), format!("cannot promote to {kind:?}")))
            }
            _ => Ok(piece),
        }
    }

    pub fn is_legal_move(&self, mv: &Move) -> bool {
        self.validate(mv).is_ok()
    }

    /// True if any `by` piece attacks `sq`
    pub fn is_square_threatened(&self, sq: Square, by: Color) -> bool {
        is_square_threatened(&self.board, sq, by)
    }

    /// True if `color`'s king is attacked
    pub fn is_king_threatened(&self, color: Color) -> bool {
        is_square_threatened(&self.board, self.board.king_square(color), color.opponent())
    }

    /// True if the legal move `mv` would attack the opponent's king
    pub fn delivers_check(&self, mv: &Move) -> Result<bool> {
        let piece = self.validate(mv)?;
        Ok(self.gives_check(mv, piece))
    }

    pub(crate) fn gives_check(&self, mv: &Move, piece: Piece) -> bool {
        let mut delta = DeltaBoard::new(&self.board);
        simulate(&mut delta, *mv, piece, self.last_move());
        let enemy = piece.color.opponent();
        is_square_threatened(&delta, delta.king_square(enemy), piece.color)
    }

    /// True if the legal move `mv` would checkmate the opponent
    pub fn is_move_checkmate(&self, mv: &Move) -> Result<bool> {
        let piece = self.validate(mv)?;
        let mut delta = DeltaBoard::new(&self.board);
        simulate(&mut delta, *mv, piece, self.last_move());

        let enemy = piece.color.opponent();
        if !is_square_threatened(&delta, delta.king_square(enemy), piece.color) {
            return Ok(false);
        }

        // only the facts en passant depends on are needed here
        let played = PlayedMove::new(
            *mv,
            piece,
            self.board.piece_on(mv.destination),
            None,
            false,
            String::new(),
            true,
            String::new(),
        );
        let after = PositionView {
            board: &delta,
            active: enemy,
            ctx: SpecialContext {
                castling: rights_after(self.castling, mv, piece),
                last_move: Some(&played),
            },
        };
        Ok(!after.has_legal_moves())
    }
}

/// Rights after `mv`, without touching the engine
pub(crate) fn rights_after(rights: CastlingRights, mv: &Move, piece: Piece) -> CastlingRights {
    let mut rights = rights;
    if piece.is_king() {
        rights.clear_color(piece.color);
    }
    rights.clear_corner(mv.source);
    rights.clear_corner(mv.destination);
    rights
}
