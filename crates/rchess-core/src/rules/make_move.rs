//! Move application

use log::debug;

use crate::board::BoardView;
use crate::error::Result;
use crate::notation::san;
use crate::pieces::en_passant_victim;
use crate::types::{Move, Piece, PieceKind, PlayedMove};

use super::RulesEngine;
use super::legality::rights_after;

impl RulesEngine {
    /// Validate and apply a move
    ///
    /// Every check runs before the board is touched, so a rejected move
    /// leaves the engine exactly as it was. The returned `PlayedMove` carries
    /// the SAN and check flag computed against the position it was played in.
    pub fn make_legal_move(&mut self, mv: Move) -> Result<PlayedMove> {
        let piece = self.validate(&mv).inspect_err(|e| debug!("Rejected {mv}: {e}"))?;

        let ep_victim = if piece.is_pawn() {
            en_passant_victim(mv.source, mv.destination, piece.color, self.last_move())
                .filter(|_| self.board.piece_on(mv.destination).is_none())
        } else {
            None
        };
        let captured = match ep_victim {
            Some(victim) => self.board.piece_on(victim),
            None => self.board.piece_on(mv.destination),
        };
        let castle = if piece.is_king() { mv.castle_side() } else { None };
        let disambiguation = san::disambiguation_for(self, &mv, piece);
        let gives_check = self.gives_check(&mv, piece);
        let text = san::compose(piece, &mv, &disambiguation, captured.is_some(), castle, gives_check);

        if let Some(victim) = ep_victim {
            self.board.set(victim, None);
        }
        if let Some(side) = castle {
            let (from_file, to_file) = side.rook_files();
            let rook = Piece::new(PieceKind::Rook, piece.color);
            self.board.make_move(mv.source.with_file(from_file), mv.source.with_file(to_file), rook);
        }
        self.castling = rights_after(self.castling, &mv, piece);
        let placed = match mv.promotion {
            Some(kind) => Piece::new(kind, piece.color),
            None => piece,
        };
        self.board.make_move(mv.source, mv.destination, placed);
        self.active = self.active.opponent();

        let played = PlayedMove::new(
            mv,
            piece,
            captured,
            castle,
            ep_victim.is_some(),
            disambiguation,
            gives_check,
            text,
        );
        debug!("{}. {} ({})", self.history.len() + 1, played.algebraic(), played.uci());
        self.history.push(played.clone());
        Ok(played)
    }
}
