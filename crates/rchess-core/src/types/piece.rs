//! 駒（PieceKind, Piece）

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Color;

/// 駒種（6種類）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// 駒種の数
    pub const NUM: usize = 6;

    /// 全ての駒種
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// プロモーション先として選べる駒種
    pub const PROMOTION_CHOICES: [PieceKind; 4] =
        [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight];

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 大文字の駒文字（'P', 'N', 'B', 'R', 'Q', 'K'）
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// SAN での接頭辞（ポーンは空）
    #[inline]
    pub const fn san_prefix(self) -> &'static str {
        match self {
            PieceKind::Pawn => "",
            PieceKind::Knight => "N",
            PieceKind::Bishop => "B",
            PieceKind::Rook => "R",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
        }
    }

    /// 駒文字から駒種へ（大文字・小文字を問わない）
    pub const fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// プロモーション先として有効か
    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(self, PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight)
    }
}

/// 盤上の駒（駒種と色）
///
/// 空きマスは `Option<Piece>` の `None` で表す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// 表示用の文字（白は大文字、黒は小文字）
    #[inline]
    pub const fn to_char(self) -> char {
        let c = self.kind.letter();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    /// 表示用の文字から駒へ（大文字は白）
    pub const fn from_char(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        match PieceKind::from_letter(c) {
            Some(kind) => Some(Piece { kind, color }),
            None => None,
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    #[inline]
    pub const fn is_pawn(self) -> bool {
        matches!(self.kind, PieceKind::Pawn)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_chars() {
        assert_eq!(Piece::new(PieceKind::Knight, Color::White).to_char(), 'N');
        assert_eq!(Piece::new(PieceKind::Knight, Color::Black).to_char(), 'n');
        assert_eq!(Piece::from_char('q'), Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert_eq!(Piece::from_char('K'), Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(Piece::from_char('x'), None);
    }

    #[test]
    fn test_piece_equality_by_kind_and_color() {
        let a = Piece::new(PieceKind::Rook, Color::White);
        let b = Piece::new(PieceKind::Rook, Color::White);
        let c = Piece::new(PieceKind::Rook, Color::Black);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_promotion_choices() {
        for kind in PieceKind::PROMOTION_CHOICES {
            assert!(kind.is_promotion_choice());
        }
        assert!(!PieceKind::King.is_promotion_choice());
        assert!(!PieceKind::Pawn.is_promotion_choice());
    }

    #[test]
    fn test_piece_kind_round_trip_letter() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_letter(kind.letter()), Some(kind));
        }
    }
}
