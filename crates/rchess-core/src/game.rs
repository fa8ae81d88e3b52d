//! Game facade
//!
//! Wraps a `RulesEngine` with text-level entry points (SAN, UCI, square
//! names) and a serializable move record.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board;
use crate::error::{ChessError, Result};
use crate::notation::{parse_algebraic_move, parse_uci};
use crate::rules::{GameStatus, RulesEngine};
use crate::types::{Move, PieceKind, PlayedMove, Square};

/// Move list of a game, in both notations
///
/// The UCI list alone is enough to replay the game; the SAN list is checked
/// against the replay when present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub uci: Vec<String>,
    #[serde(default)]
    pub san: Vec<String>,
}

/// A game played through text moves
#[derive(Clone, Debug, Default)]
pub struct Game {
    engine: RulesEngine,
}

impl Game {
    /// Game from the standard starting position
    pub fn new() -> Self {
        Game {
            engine: RulesEngine::new(),
        }
    }

    /// Game continuing from an existing engine state
    pub fn from_engine(engine: RulesEngine) -> Self {
        Game { engine }
    }

    /// Replay a record from the starting position
    pub fn from_record(record: &GameRecord) -> Result<Self> {
        let mut game = Game::new();
        for (ply, uci) in record.uci.iter().enumerate() {
            let played = game.make_move_from_uci(uci)?;
            if let Some(expected) = record.san.get(ply) {
                if played.algebraic() != expected.as_str() {
                    return Err(ChessError::InvalidNotation(format!(
                        "record move {} is {uci}, which plays {} not {expected}",
                        ply + 1,
                        played.algebraic()
                    )));
                }
            }
        }
        Ok(game)
    }

    #[inline]
    pub fn engine(&self) -> &RulesEngine {
        &self.engine
    }

    pub fn make_move(&mut self, mv: Move) -> Result<PlayedMove> {
        self.engine.make_legal_move(mv)
    }

    /// Play a SAN move (`Nf3`, `exd5`, `O-O`)
    pub fn make_move_from_algebraic(&mut self, san: &str) -> Result<PlayedMove> {
        let mv = parse_algebraic_move(&self.engine, san)?;
        self.make_move(mv)
    }

    /// Play a UCI move (`e2e4`, `e7e8q`)
    pub fn make_move_from_uci(&mut self, uci: &str) -> Result<PlayedMove> {
        let mv = parse_uci(uci)?;
        self.make_move(mv)
    }

    /// Play a move given as square names
    pub fn make_move_from_squares(
        &mut self,
        source: &str,
        destination: &str,
        promotion: Option<PieceKind>,
    ) -> Result<PlayedMove> {
        let mv = Move {
            source: source.parse::<Square>()?,
            destination: destination.parse::<Square>()?,
            promotion,
        };
        self.make_move(mv)
    }

    /// Play a sequence of SAN moves, stopping at the first failure
    pub fn replay<I, S>(&mut self, moves: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for san in moves {
            let san = san.as_ref();
            if let Err(e) = self.make_move_from_algebraic(san) {
                debug!("Replay stopped at ply {} ({san}): {e}", self.engine.ply() + 1);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Framed board diagram
    pub fn board_string(&self) -> String {
        board::pretty(self.engine.board())
    }

    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    pub fn moves_san(&self) -> Vec<String> {
        self.engine.history().iter().map(|m| m.algebraic().to_string()).collect()
    }

    pub fn moves_uci(&self) -> Vec<String> {
        self.engine.history().iter().map(PlayedMove::uci).collect()
    }

    pub fn record(&self) -> GameRecord {
        GameRecord {
            uci: self.moves_uci(),
            san: self.moves_san(),
        }
    }
}
