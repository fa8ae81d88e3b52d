//! 升目（Square）

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChessError, Result};

/// 升目（0-63）
///
/// 配置: index = rank * 8 + file
/// a1=0, b1=1, ..., h1=7, a2=8, ..., h8=63
/// rank 0 は白の初期段、file 0 は a 筋。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升目の数
    pub const NUM: usize = 64;

    // 定数定義（主要なもの）
    pub const A1: Square = Square(0);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);

    /// 段と筋から Square を生成（範囲外は `IllegalPosition`）
    pub fn new(rank: i32, file: i32) -> Result<Square> {
        if !(0..8).contains(&rank) || !(0..8).contains(&file) {
            return Err(ChessError::IllegalPosition { rank, file });
        }
        Ok(Square((rank * 8 + file) as u8))
    }

    /// 段と筋から生成（範囲チェックは debug のみ）
    #[inline]
    pub const fn from_rank_file(rank: u8, file: u8) -> Square {
        debug_assert!(rank < 8 && file < 8);
        Square(rank * 8 + file)
    }

    /// u8から生成（範囲チェックあり）
    #[inline]
    pub const fn from_index(n: u8) -> Option<Square> {
        if n < 64 { Some(Square(n)) } else { None }
    }

    /// 段（0-7）
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 >> 3
    }

    /// 筋（0-7）
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 & 7
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 段・筋をずらした升目（盤外なら None）
    #[inline]
    pub fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Square> {
        let rank = self.rank() as i8 + rank_delta;
        let file = self.file() as i8 + file_delta;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square::from_rank_file(rank as u8, file as u8))
        } else {
            None
        }
    }

    /// 同じ筋のまま段を置き換える
    #[inline]
    pub const fn with_rank(self, rank: u8) -> Square {
        Square::from_rank_file(rank, self.file())
    }

    /// 同じ段のまま筋を置き換える
    #[inline]
    pub const fn with_file(self, file: u8) -> Square {
        Square::from_rank_file(self.rank(), file)
    }

    /// 筋の文字（'a'-'h'）
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.file()) as char
    }

    /// 段の文字（'1'-'8'）
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'1' + self.rank()) as char
    }

    /// 筋の文字からインデックスへ
    #[inline]
    pub const fn file_from_char(c: char) -> Option<u8> {
        match c {
            'a'..='h' => Some(c as u8 - b'a'),
            _ => None,
        }
    }

    /// 段の文字からインデックスへ
    #[inline]
    pub const fn rank_from_char(c: char) -> Option<u8> {
        match c {
            '1'..='8' => Some(c as u8 - b'1'),
            _ => None,
        }
    }

    /// 代数表記の文字から Square に変換
    pub fn from_chars(file: char, rank: char) -> Result<Square> {
        match (Self::file_from_char(file), Self::rank_from_char(rank)) {
            (Some(f), Some(r)) => Ok(Square::from_rank_file(r, f)),
            _ => Err(ChessError::InvalidNotation(format!("bad square name: {file}{rank}"))),
        }
    }

    /// 全ての升を返すイテレータ
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = ChessError;

    /// Parse algebraic square name (e.g. "e4")
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => Self::from_chars(f, r),
            _ => Err(ChessError::InvalidNotation(format!("bad square name: {s:?}"))),
        }
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> String {
        sq.to_string()
    }
}

impl TryFrom<String> for Square {
    type Error = ChessError;

    fn try_from(s: String) -> Result<Square> {
        s.parse()
    }
}
