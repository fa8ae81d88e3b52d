//! 基本型モジュール
//!
//! ルールエンジンで使用する基本的な型を定義する。
//!
//! # 型の依存関係
//!
//! ```text
//! Color
//!   ↓
//! Square
//!   ↓
//! PieceKind
//!   ↓
//! Piece ← Move
//!   ↓
//! PlayedMove
//! ```

mod color;
mod moves;
mod piece;
mod square;

pub use color::Color;
pub use moves::{CastleSide, Move, PlayedMove};
pub use piece::{Piece, PieceKind};
pub use square::Square;
