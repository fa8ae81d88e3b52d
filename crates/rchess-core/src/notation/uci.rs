//! UCI move strings (`e2e4`, `e7e8q`)

use crate::error::{ChessError, Result};
use crate::types::{Move, PieceKind, Square};

/// Parse a 4 or 5 character UCI move
pub fn parse_uci(text: &str) -> Result<Move> {
    let s = text.trim();
    let chars: Vec<char> = s.chars().collect();
    if chars.len() != 4 && chars.len() != 5 {
        return Err(ChessError::InvalidNotation(format!("UCI move must be 4 or 5 characters: {s:?}")));
    }

    let source = Square::from_chars(chars[0], chars[1])?;
    let destination = Square::from_chars(chars[2], chars[3])?;
    let promotion = match chars.get(4) {
        None => None,
        Some(&c) => match PieceKind::from_letter(c) {
            Some(kind) if kind.is_promotion_choice() => Some(kind),
            _ => {
                return Err(ChessError::InvalidNotation(format!("Invalid promotion piece: {c}")));
            }
        },
    };
    Ok(Move {
        source,
        destination,
        promotion,
    })
}

/// Format a move as UCI
#[inline]
pub fn move_to_uci(mv: &Move) -> String {
    mv.to_string()
}

/// Split concatenated UCI moves (`"e2e4e7e5"`) into single moves
///
/// Moves are read four characters at a time. A fifth character is taken as a
/// promotion letter when it is a letter and is not followed by a rank digit
/// (which would make it the file of the next move).
pub fn split_long_uci(text: &str) -> Result<Vec<String>> {
    let chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    let mut moves = Vec::with_capacity(chars.len() / 4);
    let mut i = 0;
    while i < chars.len() {
        if i + 4 > chars.len() {
            let rest: String = chars[i..].iter().collect();
            return Err(ChessError::InvalidNotation(format!("Trailing characters in UCI string: {rest:?}")));
        }
        let mut end = i + 4;
        let promotes = chars.get(end).is_some_and(|c| c.is_ascii_alphabetic())
            && !chars.get(end + 1).is_some_and(|c| c.is_ascii_digit());
        if promotes {
            end += 1;
        }
        let mv: String = chars[i..end].iter().collect();
        // every chunk must itself be a valid UCI move
        parse_uci(&mv)?;
        moves.push(mv);
        i = end;
    }
    Ok(moves)
}
