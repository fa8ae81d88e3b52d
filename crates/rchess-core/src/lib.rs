//! # rchess-core
//!
//! チェスのルールエンジン。合法手の列挙、指し手の適用、チェックメイト/ステイルメイト判定、
//! SAN/UCI 表記の相互変換を提供する。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Color, Square, PieceKind, Piece, Move, PlayedMove）
//! - `bitboard`: 64升の集合
//! - `board`: 盤面表現と差分オーバーレイ（DeltaBoard）
//! - `pieces`: 駒ごとの利きと移動幾何（Piece Catalog）
//! - `rules`: 合法性判定、特殊手（キャスリング/アンパッサン/プロモーション）、手番管理
//! - `notation`: SAN/UCI のパースと整形
//! - `game`: 棋譜を扱う薄いファサード
//!

pub mod bitboard;
pub mod board;
pub mod error;
pub mod game;
pub mod notation;
pub mod pieces;
pub mod rules;
pub mod types;

pub use bitboard::Bitboard;
pub use board::{Board, BoardView, DeltaBoard};
pub use error::{ChessError, Result};
pub use game::{Game, GameRecord};
pub use rules::{CastlingRights, GameStatus, RulesEngine};
pub use types::{CastleSide, Color, Move, Piece, PieceKind, PlayedMove, Square};
