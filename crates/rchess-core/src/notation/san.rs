//! Standard algebraic notation (`Nbd2`, `exd8=Q+`, `O-O`)

use crate::board::BoardView;
use crate::error::{ChessError, Result};
use crate::pieces::{find, find_unique};
use crate::rules::RulesEngine;
use crate::types::{CastleSide, Move, Piece, PieceKind, Square};

/// Trailing annotation characters that carry no move information
const ANNOTATIONS: &[char] = &['+', '#', '!', '?'];

fn invalid(text: &str, what: &str) -> ChessError {
    ChessError::InvalidNotation(format!("{what}: {text:?}"))
}

/// Parse SAN against the engine's current position
///
/// Only the source square is resolved here; legality is checked when the
/// move is played.
pub fn parse_algebraic_move(engine: &RulesEngine, text: &str) -> Result<Move> {
    let san = text.trim().trim_end_matches(ANNOTATIONS);
    let color = engine.active_color();

    let castle = match san {
        "O-O" | "0-0" => Some(CastleSide::Kingside),
        "O-O-O" | "0-0-0" => Some(CastleSide::Queenside),
        _ => None,
    };
    if let Some(side) = castle {
        let king = Square::from_rank_file(color.back_rank(), 4);
        return Ok(Move::new(king, king.with_file(side.king_target_file())));
    }

    match san.chars().next() {
        None => Err(invalid(text, "Empty move")),
        Some(c) if c.is_ascii_lowercase() => parse_pawn_move(engine, san, text),
        Some(c) if c.is_ascii_uppercase() => parse_piece_move(engine, san, text),
        Some(_) => Err(invalid(text, "Unrecognized move")),
    }
}

/// Destination square from the last two characters, plus what precedes it
fn split_destination<'a>(san: &'a str, text: &str) -> Result<(&'a str, Square)> {
    if san.len() < 2 || !san.is_ascii() {
        return Err(invalid(text, "Move too short"));
    }
    let (head, tail) = san.split_at(san.len() - 2);
    let mut chars = tail.chars();
    match (chars.next(), chars.next()) {
        (Some(f), Some(r)) => Ok((head, Square::from_chars(f, r)?)),
        _ => Err(invalid(text, "Move too short")),
    }
}

fn parse_pawn_move(engine: &RulesEngine, san: &str, text: &str) -> Result<Move> {
    let color = engine.active_color();
    let san = san.strip_suffix("e.p.").unwrap_or(san).trim_end();

    let (body, promotion) = match san.split_once('=') {
        Some((body, piece)) => {
            let mut letters = piece.chars();
            let kind = match (letters.next().and_then(PieceKind::from_letter), letters.next()) {
                (Some(kind), None) if kind.is_promotion_choice() => kind,
                _ => return Err(invalid(text, "Invalid promotion piece")),
            };
            (body, Some(kind))
        }
        None => (san, None),
    };

    let (head, destination) = split_destination(body, text)?;
    let back = -color.forward();
    let source = match head.strip_suffix('x').unwrap_or(head) {
        "" => {
            let one = destination.offset(back, 0);
            match one {
                Some(behind)
                    if destination.rank() == color.double_push_rank()
                        && engine.board().is_empty(behind) =>
                {
                    behind.offset(back, 0)
                }
                _ => one,
            }
        }
        file => {
            let mut chars = file.chars();
            match (chars.next().and_then(Square::file_from_char), chars.next()) {
                (Some(f), None) => destination.offset(back, 0).map(|s| s.with_file(f)),
                _ => return Err(invalid(text, "Invalid pawn capture")),
            }
        }
    };
    let source = source.ok_or_else(|| ChessError::ImpossibleMove(text.to_string()))?;
    Ok(Move {
        source,
        destination,
        promotion,
    })
}

fn parse_piece_move(engine: &RulesEngine, san: &str, text: &str) -> Result<Move> {
    let color = engine.active_color();
    let mut chars = san.chars();
    let kind = chars
        .next()
        .and_then(PieceKind::from_letter)
        .ok_or_else(|| invalid(text, "Unknown piece"))?;
    let (head, destination) = split_destination(chars.as_str(), text)?;
    let hint = head.strip_suffix('x').unwrap_or(head);

    let (source_rank, source_file) = match hint.len() {
        0 => (None, None),
        1 => match hint.chars().next() {
            Some(c @ '1'..='8') => (Square::rank_from_char(c), None),
            Some(c @ 'a'..='h') => (None, Square::file_from_char(c)),
            _ => return Err(invalid(text, "Invalid disambiguation")),
        },
        2 => {
            let source: Square = hint.parse()?;
            if engine.board().piece_on(source) != Some(Piece::new(kind, color)) {
                return Err(ChessError::IllegalSquare(format!(
                    "{source} does not hold a {color:?} {kind:?} ({text})"
                )));
            }
            return Ok(Move::new(source, destination));
        }
        _ => return Err(invalid(text, "Disambiguation too long")),
    };

    if kind == PieceKind::King && hint.is_empty() {
        return Ok(Move::new(engine.board().king_square(color), destination));
    }

    let board = engine.board();
    let source = match find_unique(kind, color, destination, source_rank, source_file, board) {
        Ok(only) => only,
        Err(ChessError::ImpossibleMove(_)) => return Err(ChessError::ImpossibleMove(text.to_string())),
        Err(ChessError::AmbiguousAlgebraicMove { candidates, .. }) => {
            // a pinned piece does not count as a rival
            let mut legal = candidates.iter().copied().filter(|&s| reaches(engine, s, destination));
            match (legal.next(), legal.next()) {
                (Some(only), None) => only,
                _ => {
                    return Err(ChessError::AmbiguousAlgebraicMove {
                        san: text.to_string(),
                        candidates,
                    });
                }
            }
        }
        Err(e) => return Err(e),
    };
    Ok(Move::new(source, destination))
}

#[inline]
fn reaches(engine: &RulesEngine, source: Square, destination: Square) -> bool {
    engine.get_legal_moves(source).is_ok_and(|d| d.test(destination))
}

/// Minimal token telling `mv` apart from rival moves to the same square
///
/// Pawn captures always carry the source file. Rivals are pieces of the same
/// kind and color that can legally reach the destination.
pub(crate) fn disambiguation_for(engine: &RulesEngine, mv: &Move, piece: Piece) -> String {
    let (src, dst) = (mv.source, mv.destination);
    match piece.kind {
        PieceKind::Pawn if src.file() != dst.file() => return src.file_char().to_string(),
        PieceKind::Pawn | PieceKind::King => return String::new(),
        _ => {}
    }

    let rivals: Vec<Square> = find(piece.kind, piece.color, dst, None, None, engine.board())
        .into_iter()
        .filter(|&s| s != src && reaches(engine, s, dst))
        .collect();
    if rivals.is_empty() {
        String::new()
    } else if rivals.iter().all(|s| s.file() != src.file()) {
        src.file_char().to_string()
    } else if rivals.iter().all(|s| s.rank() != src.rank()) {
        src.rank_char().to_string()
    } else {
        src.to_string()
    }
}

/// Assemble SAN from the facts of a move
pub(crate) fn compose(
    piece: Piece,
    mv: &Move,
    disambiguation: &str,
    capture: bool,
    castle: Option<CastleSide>,
    gives_check: bool,
) -> String {
    let mut san = match castle {
        Some(side) => side.san().to_string(),
        None => {
            let mut s = String::with_capacity(8);
            s.push_str(piece.kind.san_prefix());
            s.push_str(disambiguation);
            if capture {
                s.push('x');
            }
            s.push_str(&mv.destination.to_string());
            if let Some(kind) = mv.promotion {
                s.push('=');
                s.push(kind.letter());
            }
            s
        }
    };
    if gives_check {
        san.push('+');
    }
    san
}

/// SAN of a legal move in the engine's current position
pub fn algebraic(engine: &RulesEngine, mv: &Move) -> Result<String> {
    let piece = engine.validate(mv)?;
    let capture = engine.board().piece_on(mv.destination).is_some()
        || (piece.is_pawn() && mv.source.file() != mv.destination.file());
    let castle = if piece.is_king() { mv.castle_side() } else { None };
    let disambiguation = disambiguation_for(engine, mv, piece);
    Ok(compose(piece, mv, &disambiguation, capture, castle, engine.gives_check(mv, piece)))
}

/// Disambiguation token of a legal move (empty when none is needed)
pub fn disambiguation(engine: &RulesEngine, mv: &Move) -> Result<String> {
    let piece = engine.validate(mv)?;
    Ok(disambiguation_for(engine, mv, piece))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::Color;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn cleared(active: Color, pieces: &[(&str, PieceKind, Color)]) -> RulesEngine {
        let mut board = Board::with_kings(Square::E1, Square::E8);
        for &(s, kind, color) in pieces {
            board.put(sq(s), Piece::new(kind, color));
        }
        RulesEngine::from_board(board, active)
    }

    fn parsed(engine: &RulesEngine, text: &str) -> (Square, Square) {
        let mv = parse_algebraic_move(engine, text).unwrap();
        (mv.source, mv.destination)
    }

    const W: Color = Color::White;
    const B: Color = Color::Black;

    #[test]
    fn test_game_start() {
        let mut engine = RulesEngine::new();
        engine.make_legal_move(Move::new(sq("e2"), sq("e4"))).unwrap();
        assert_eq!(parsed(&engine, "e5"), (sq("e7"), sq("e5")));
        assert_eq!(parsed(&engine, "Nf6"), (sq("g8"), sq("f6")));
    }

    #[test]
    fn test_pawn_move_parsing() {
        let mut engine = cleared(W, &[("f7", PieceKind::Pawn, W), ("e6", PieceKind::Pawn, W)]);
        assert_eq!(parsed(&engine, "exf7+"), (sq("e6"), sq("f7")));
        assert_eq!(parsed(&engine, "exf7#"), (sq("e6"), sq("f7")));

        engine = cleared(W, &[("e2", PieceKind::Pawn, W)]);
        assert_eq!(parsed(&engine, "e4"), (sq("e2"), sq("e4")));

        // two pawns on one file: the front one moves
        engine = cleared(W, &[("e2", PieceKind::Pawn, W), ("e3", PieceKind::Pawn, W)]);
        assert_eq!(parsed(&engine, "e4"), (sq("e3"), sq("e4")));
        assert_eq!(parsed(&engine, "exd4"), (sq("e3"), sq("d4")));

        engine = cleared(B, &[("e5", PieceKind::Pawn, B)]);
        assert_eq!(parsed(&engine, "e4"), (sq("e5"), sq("e4")));
        assert_eq!(parsed(&engine, "exd4"), (sq("e5"), sq("d4")));
        assert_eq!(parsed(&engine, "exd4 e.p."), (sq("e5"), sq("d4")));
    }

    #[test]
    fn test_promotion_parsing() {
        let engine = cleared(W, &[("a7", PieceKind::Pawn, W)]);
        let mv = parse_algebraic_move(&engine, "a8=Q+").unwrap();
        assert_eq!(mv, Move::with_promotion(sq("a7"), sq("a8"), PieceKind::Queen));
        let mv = parse_algebraic_move(&engine, "a8=R").unwrap();
        assert_eq!(mv, Move::with_promotion(sq("a7"), sq("a8"), PieceKind::Rook));

        let engine = cleared(B, &[]);
        let mv = parse_algebraic_move(&engine, "a1=R").unwrap();
        assert_eq!(mv, Move::with_promotion(sq("a2"), sq("a1"), PieceKind::Rook));
        let mv = parse_algebraic_move(&engine, "bxa1=R").unwrap();
        assert_eq!(mv, Move::with_promotion(sq("b2"), sq("a1"), PieceKind::Rook));

        assert!(matches!(
            parse_algebraic_move(&engine, "a1=K"),
            Err(ChessError::InvalidNotation(_))
        ));
    }

    #[test]
    fn test_castling_parsing() {
        let engine = cleared(W, &[]);
        assert_eq!(parsed(&engine, "O-O"), (Square::E1, Square::G1));
        assert_eq!(parsed(&engine, "O-O-O"), (Square::E1, Square::C1));
        let engine = cleared(B, &[]);
        assert_eq!(parsed(&engine, "O-O+"), (Square::E8, Square::G8));
        assert_eq!(parsed(&engine, "O-O-O"), (Square::E8, Square::C8));
    }

    #[test]
    fn test_explicit_source_square() {
        let engine = cleared(W, &[("a4", PieceKind::Queen, W)]);
        assert_eq!(parsed(&engine, "Qa4xa5"), (sq("a4"), sq("a5")));
    }

    #[test]
    fn test_bishop_moves() {
        let engine = cleared(W, &[("f1", PieceKind::Bishop, W)]);
        assert_eq!(parsed(&engine, "Bb5"), (sq("f1"), sq("b5")));

        let engine = cleared(W, &[("e2", PieceKind::Bishop, W)]);
        assert_eq!(parsed(&engine, "Bb5"), (sq("e2"), sq("b5")));

        let engine = cleared(W, &[("e2", PieceKind::Bishop, W), ("a6", PieceKind::Bishop, W)]);
        assert_eq!(parsed(&engine, "Beb5"), (sq("e2"), sq("b5")));
        assert_eq!(parsed(&engine, "Bab5"), (sq("a6"), sq("b5")));
    }

    #[test]
    fn test_knight_moves() {
        let engine = cleared(W, &[("e2", PieceKind::Knight, W)]);
        assert_eq!(parsed(&engine, "Ng3"), (sq("e2"), sq("g3")));
        assert_eq!(parsed(&engine, "Nf4"), (sq("e2"), sq("f4")));

        let engine = cleared(W, &[("e2", PieceKind::Knight, W), ("e4", PieceKind::Knight, W)]);
        assert_eq!(parsed(&engine, "N2g3"), (sq("e2"), sq("g3")));
        assert_eq!(parsed(&engine, "N4g3"), (sq("e4"), sq("g3")));
        assert_eq!(parsed(&engine, "Nf4"), (sq("e2"), sq("f4")));

        let knights = [
            ("e2", PieceKind::Knight, W),
            ("e4", PieceKind::Knight, W),
            ("g2", PieceKind::Knight, B),
        ];
        assert_eq!(parsed(&cleared(W, &knights), "Nf4"), (sq("e2"), sq("f4")));
        assert_eq!(parsed(&cleared(B, &knights), "Nf4"), (sq("g2"), sq("f4")));
    }

    #[test]
    fn test_rook_and_queen_moves() {
        let engine = cleared(B, &[("a4", PieceKind::Rook, B), ("h4", PieceKind::Rook, B)]);
        assert_eq!(parsed(&engine, "Rae4"), (sq("a4"), sq("e4")));
        assert_eq!(parsed(&engine, "Rhe4"), (sq("h4"), sq("e4")));

        let engine = cleared(W, &[("b4", PieceKind::Queen, W), ("b1", PieceKind::Queen, W)]);
        assert_eq!(parsed(&engine, "Qc2"), (sq("b1"), sq("c2")));
        assert_eq!(parsed(&engine, "Q1xe4+"), (sq("b1"), sq("e4")));
    }

    #[test]
    fn test_king_moves() {
        assert_eq!(parsed(&cleared(W, &[]), "Ke2"), (Square::E1, sq("e2")));
        assert_eq!(parsed(&cleared(B, &[]), "Ke7"), (Square::E8, sq("e7")));
    }

    #[test]
    fn test_piece_location() {
        let queens: Vec<_> = ["b4", "a2", "c3", "d2", "e5", "e2"]
            .into_iter()
            .map(|s| (s, PieceKind::Queen, W))
            .collect();
        let engine = cleared(W, &queens);
        assert_eq!(parsed(&engine, "Qbb2"), (sq("b4"), sq("b2")));
        assert_eq!(parsed(&engine, "Qab2"), (sq("a2"), sq("b2")));
        assert_eq!(parsed(&engine, "Qcb2"), (sq("c3"), sq("b2")));
        assert!(matches!(
            parse_algebraic_move(&engine, "Qeb2"),
            Err(ChessError::ImpossibleMove(_))
        ));

        let without_c3: Vec<_> = queens.iter().copied().filter(|q| q.0 != "c3").collect();
        let engine = cleared(W, &without_c3);
        assert_eq!(parsed(&engine, "Qeb2"), (sq("e5"), sq("b2")));
    }

    #[test]
    fn test_explicit_source_must_hold_named_piece() {
        let engine = cleared(W, &[("a1", PieceKind::Queen, W), ("h8", PieceKind::Knight, B)]);
        assert_eq!(parsed(&engine, "Qa1b2"), (sq("a1"), sq("b2")));
        assert!(matches!(
            parse_algebraic_move(&engine, "Na1b2"),
            Err(ChessError::IllegalSquare(_))
        ));
        // right kind, wrong color
        assert!(matches!(
            parse_algebraic_move(&engine, "Nh8g6"),
            Err(ChessError::IllegalSquare(_))
        ));
        assert!(matches!(
            parse_algebraic_move(&engine, "Qc3b2"),
            Err(ChessError::IllegalSquare(_))
        ));
        assert_eq!(parsed(&engine, "Ke1e2"), (Square::E1, sq("e2")));
    }

    #[test]
    fn test_no_move_found_and_ambiguous() {
        let engine = RulesEngine::new();
        assert!(matches!(
            parse_algebraic_move(&engine, "Qcb2"),
            Err(ChessError::ImpossibleMove(_))
        ));

        let mut board = Board::new();
        board.put(sq("c2"), Piece::new(PieceKind::Queen, W));
        board.put(sq("c3"), Piece::new(PieceKind::Queen, W));
        let engine = RulesEngine::from_board(board, W);
        assert!(matches!(
            parse_algebraic_move(&engine, "Qcb2"),
            Err(ChessError::AmbiguousAlgebraicMove { .. })
        ));
    }

    #[test]
    fn test_malformed_input() {
        let engine = RulesEngine::new();
        for text in ["", "+", "N", "Qz9", "Nabcd4", "e9", "%e4"] {
            assert!(parse_algebraic_move(&engine, text).is_err(), "{text:?} should fail");
        }
    }

    #[test]
    fn test_disambiguation_tokens() {
        let engine = cleared(W, &[("e2", PieceKind::Knight, W), ("e4", PieceKind::Knight, W)]);
        let mv = Move::new(sq("e2"), sq("g3"));
        assert_eq!(disambiguation(&engine, &mv).unwrap(), "2");
        assert_eq!(algebraic(&engine, &mv).unwrap(), "N2g3");
        assert_eq!(algebraic(&engine, &Move::new(sq("e2"), sq("c1"))).unwrap(), "Nc1");

        let engine = cleared(B, &[("a4", PieceKind::Rook, B), ("h4", PieceKind::Rook, B)]);
        // lands on the white king's file
        assert_eq!(algebraic(&engine, &Move::new(sq("a4"), sq("e4"))).unwrap(), "Rae4+");

        let engine = cleared(
            W,
            &[("a1", PieceKind::Queen, W), ("a3", PieceKind::Queen, W), ("c1", PieceKind::Queen, W)],
        );
        assert_eq!(algebraic(&engine, &Move::new(sq("a1"), sq("b2"))).unwrap(), "Qa1b2");
    }

    #[test]
    fn test_checking_move_gets_plus_only() {
        // mate on e7, still rendered with '+'
        let engine = cleared(W, &[("a7", PieceKind::Queen, W), ("d6", PieceKind::Queen, W)]);
        let mv = Move::new(sq("a7"), sq("e7"));
        assert_eq!(algebraic(&engine, &mv).unwrap(), "Qae7+");
        assert_eq!(engine.is_move_checkmate(&mv), Ok(true));
    }
}
