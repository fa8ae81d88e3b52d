//! Rules engine
//!
//! `RulesEngine` owns the real board, the side to move, castling rights and
//! the move history. Legal-move generation lives in `legality`, move
//! application in `make_move` and end-of-game detection in `status`.
//! All mutation goes through `make_legal_move`.

mod castling;
mod legality;
mod make_move;
mod status;

pub use self::castling::CastlingRights;
pub use self::status::GameStatus;

use crate::board::Board;
use crate::pieces::SpecialContext;
use crate::types::{Color, PlayedMove};

/// Chess game state plus the rules that move it forward
#[derive(Clone, Debug)]
pub struct RulesEngine {
    board: Board,
    active: Color,
    castling: CastlingRights,
    history: Vec<PlayedMove>,
}

impl RulesEngine {
    /// Standard starting position, White to move
    pub fn new() -> Self {
        RulesEngine {
            board: Board::new(),
            active: Color::White,
            castling: CastlingRights::ALL,
            history: Vec::new(),
        }
    }

    /// Custom setup; castling rights are inferred from the placement
    pub fn from_board(board: Board, active: Color) -> Self {
        let castling = CastlingRights::infer(&board);
        RulesEngine {
            board,
            active,
            castling,
            history: Vec::new(),
        }
    }

    /// Custom setup with explicit castling rights
    pub fn with_castling(board: Board, active: Color, castling: CastlingRights) -> Self {
        RulesEngine {
            board,
            active,
            castling,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move
    #[inline]
    pub fn active_color(&self) -> Color {
        self.active
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Moves played so far, oldest first
    #[inline]
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&PlayedMove> {
        self.history.last()
    }

    /// Number of plies played
    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub(crate) fn special_context(&self) -> SpecialContext<'_> {
        SpecialContext {
            castling: self.castling,
            last_move: self.last_move(),
        }
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        RulesEngine::new()
    }
}
