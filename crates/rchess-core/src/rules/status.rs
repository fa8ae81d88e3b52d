//! Check, checkmate and stalemate

use std::fmt;

use serde::{Deserialize, Serialize};

use super::RulesEngine;
use crate::types::Color;

/// Outcome of the current position for the side to move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    /// Side to move is in check but has a legal reply
    Check,
    /// Side to move is mated; carries the winner
    Checkmate(Color),
    Stalemate,
}

impl GameStatus {
    /// True for checkmate and stalemate
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => f.write_str("ongoing"),
            GameStatus::Check => f.write_str("check"),
            GameStatus::Checkmate(winner) => write!(f, "checkmate, {winner:?} wins"),
            GameStatus::Stalemate => f.write_str("stalemate"),
        }
    }
}

impl RulesEngine {
    /// True if the side to move has any legal move (stops at the first one)
    pub fn has_legal_moves(&self) -> bool {
        self.position().has_legal_moves()
    }

    pub fn in_checkmate(&self) -> bool {
        self.is_king_threatened(self.active) && !self.has_legal_moves()
    }

    pub fn in_stalemate(&self) -> bool {
        !self.is_king_threatened(self.active) && !self.has_legal_moves()
    }

    pub fn status(&self) -> GameStatus {
        let in_check = self.position().king_in_check();
        match (in_check, self.has_legal_moves()) {
            (true, false) => GameStatus::Checkmate(self.active.opponent()),
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ongoing,
        }
    }
}
