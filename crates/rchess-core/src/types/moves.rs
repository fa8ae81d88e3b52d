//! 指し手（Move, PlayedMove）

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Piece, PieceKind, Square};

/// 指し手の要求（移動元・移動先・プロモーション先）
///
/// 局面に依存する情報は持たない。SAN/UCI のパース結果や座標から直接作られ、
/// `RulesEngine::make_legal_move` に渡される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub source: Square,
    pub destination: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(source: Square, destination: Square) -> Self {
        Move {
            source,
            destination,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(source: Square, destination: Square, promotion: PieceKind) -> Self {
        Move {
            source,
            destination,
            promotion: Some(promotion),
        }
    }

    /// 筋が2つ離れた同段の移動（キングなら キャスリング）
    #[inline]
    pub fn castle_side(&self) -> Option<CastleSide> {
        if self.source.rank() != self.destination.rank() || self.source.file() != 4 {
            return None;
        }
        match self.destination.file() {
            6 => Some(CastleSide::Kingside),
            2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

/// UCI 形式（"e2e4", "e7e8q"）
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.destination)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

/// キャスリングの方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// キングの移動先の筋
    #[inline]
    pub const fn king_target_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// ルークの (移動元, 移動先) の筋
    #[inline]
    pub const fn rook_files(self) -> (u8, u8) {
        match self {
            CastleSide::Kingside => (7, 5),
            CastleSide::Queenside => (0, 3),
        }
    }

    /// SAN 表記
    #[inline]
    pub const fn san(self) -> &'static str {
        match self {
            CastleSide::Kingside => "O-O",
            CastleSide::Queenside => "O-O-O",
        }
    }
}

/// 適用済みの指し手
///
/// 指された局面で計算した派生情報（動かした駒、取った駒、曖昧さ回避、王手、SAN）を
/// 固定して保持する。生成後に変更されることはない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    mv: Move,
    piece: Piece,
    captured: Option<Piece>,
    castle: Option<CastleSide>,
    en_passant: bool,
    disambiguation: String,
    gives_check: bool,
    san: String,
}

impl PlayedMove {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        mv: Move,
        piece: Piece,
        captured: Option<Piece>,
        castle: Option<CastleSide>,
        en_passant: bool,
        disambiguation: String,
        gives_check: bool,
        san: String,
    ) -> Self {
        PlayedMove {
            mv,
            piece,
            captured,
            castle,
            en_passant,
            disambiguation,
            gives_check,
            san,
        }
    }

    #[inline]
    pub fn as_move(&self) -> Move {
        self.mv
    }

    #[inline]
    pub fn source(&self) -> Square {
        self.mv.source
    }

    #[inline]
    pub fn destination(&self) -> Square {
        self.mv.destination
    }

    #[inline]
    pub fn promotion(&self) -> Option<PieceKind> {
        self.mv.promotion
    }

    /// 動かした駒（プロモーション前）
    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// 取った駒（アンパッサンで取ったポーンを含む）
    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    pub fn castle(&self) -> Option<CastleSide> {
        self.castle
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.en_passant
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// SAN の曖昧さ回避トークン（不要なら空）
    #[inline]
    pub fn disambiguation(&self) -> &str {
        &self.disambiguation
    }

    #[inline]
    pub fn gives_check(&self) -> bool {
        self.gives_check
    }

    /// SAN 表記（"Nbd2", "exf8=Q+", "O-O"）
    #[inline]
    pub fn algebraic(&self) -> &str {
        &self.san
    }

    /// UCI 表記
    pub fn uci(&self) -> String {
        self.mv.to_string()
    }

    /// 2マス前進したポーンか
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.is_pawn() && self.mv.source.rank().abs_diff(self.mv.destination.rank()) == 2
    }
}

impl fmt::Display for PlayedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.san)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_move_display_is_uci() {
        assert_eq!(Move::new(sq("e2"), sq("e4")).to_string(), "e2e4");
        assert_eq!(
            Move::with_promotion(sq("e7"), sq("e8"), PieceKind::Queen).to_string(),
            "e7e8q"
        );
    }

    #[test]
    fn test_castle_side() {
        assert_eq!(Move::new(Square::E1, Square::G1).castle_side(), Some(CastleSide::Kingside));
        assert_eq!(Move::new(Square::E8, Square::C8).castle_side(), Some(CastleSide::Queenside));
        assert_eq!(Move::new(Square::E1, Square::F1).castle_side(), None);
        assert_eq!(Move::new(sq("d1"), sq("f1")).castle_side(), None);
    }

    #[test]
    fn test_played_move_accessors() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        let played = PlayedMove::new(
            Move::new(sq("e2"), sq("e4")),
            pawn,
            None,
            None,
            false,
            String::new(),
            false,
            "e4".to_string(),
        );
        assert!(played.is_double_pawn_push());
        assert!(!played.is_capture());
        assert_eq!(played.algebraic(), "e4");
        assert_eq!(played.uci(), "e2e4");
        assert_eq!(played.to_string(), "e4");
    }
}
