//! Full games replayed through the SAN entry point
//!
//! Every played move must render back to exactly the text it was parsed from.

use rchess_core::notation::{algebraic, parse_algebraic_move, split_long_uci};
use rchess_core::{BoardView, Color, Game, GameStatus, Piece, PieceKind, Square};

const MOVES1: &[&str] = &[
    "e4", "e5", "Nf3", "Nc6", "Bc4", "d6", "c3", "a6", "d4", "exd4", "cxd4", "Bd7", "Nc3", "Na5",
    "Bxf7+", "Kxf7", "Ng5+", "Ke8", "Qf3", "Qf6", "Bf4", "Ne7", "O-O", "h6", "e5", "Qg6", "exd6",
    "hxg5", "dxe7", "gxf4", "exf8=Q+", "Rxf8", "Rae1+", "Kd8", "Nd5", "Qc6", "Rc1", "Qd6", "Nxc7",
    "Rc8", "Nd5", "Bc6", "Rfe1", "Bxd5", "Rxc8+", "Kxc8", "Qg4+", "Qd7", "Rc1+", "Kd8", "Qg5+",
    "Qe7", "Rc8+", "Kd7", "Rc7+", "Kxc7", "Qxe7+",
];

const MOVES2: &[&str] = &[
    "e4", "e6", "Nf3", "c6", "d4", "c5", "c3", "h6", "Bd3", "Nf6", "Bf4", "Nc6", "Nbd2", "d6",
    "O-O", "Qc7", "dxc5", "e5", "cxd6", "Qxd6", "Nxe5", "Qxd3", "Nxd3", "Be7", "Qb3", "O-O", "Nf3",
    "Nxe4", "Rfe1", "Bf5", "Qxb7", "Rac8", "Nfe5", "Nxe5", "Nxe5", "Bd6", "Qxa7", "Bxe5", "Bxe5",
    "f6", "Bd4", "Ra8", "Qe7", "Rae8", "Qb4", "Rb8", "Qc4+", "Kh8", "b3", "Rbc8", "Qb4", "Rb8",
    "Qa3", "Ra8", "Qb2", "Rad8", "f3", "Ng5", "h4", "Ne6", "Bb6", "Rde8", "Re2", "Rf7",
];

const MOVES3: &[&str] = &[
    "d4", "d5", "Nf3", "Nc6", "e3", "Bf5", "Bd3", "Nh6", "Bxf5", "Nxf5", "a3", "e6", "Nbd2", "Bd6",
    "O-O", "Qf6", "Re1", "Qg6", "e4", "Nfe7", "exd5", "Nxd5", "c4", "Nf4", "g3", "Nh3+", "Kg2",
    "Ng5", "Ne4", "Nxe4", "c5", "Be7", "Ne5", "Nxe5", "dxe5", "Bxc5", "Be3", "Bxe3", "Rxe3", "Nc5",
    "b4", "Nd7", "Rc1", "O-O-O", "Rec3", "c6", "b5", "Nxe5", "Qa4", "Kb8", "bxc6", "Nxc6", "Rb3",
    "Rc8", "Rxc6",
];

fn play_and_compare(moves: &[&str]) -> Game {
    let mut game = Game::new();
    for (ply, &text) in moves.iter().enumerate() {
        let played = game
            .make_move_from_algebraic(text)
            .unwrap_or_else(|e| panic!("ply {} ({text}): {e}", ply + 1));
        assert_eq!(played.algebraic(), text, "ply {}", ply + 1);
    }
    game
}

/// Every legal move in the current position survives a SAN round trip
fn assert_san_round_trip(game: &Game) {
    let engine = game.engine();
    for mv in engine.legal_moves() {
        let san = algebraic(engine, &mv).unwrap();
        let parsed = parse_algebraic_move(engine, &san).unwrap_or_else(|e| panic!("{san}: {e}"));
        assert_eq!(parsed, mv, "{san}");
    }
}

#[test]
fn test_moves1() {
    let game = play_and_compare(MOVES1);
    assert_eq!(game.moves_san(), MOVES1);
    assert_eq!(game.engine().active_color(), Color::Black);
}

#[test]
fn test_moves2() {
    let game = play_and_compare(MOVES2);
    assert_eq!(game.status(), GameStatus::Ongoing);
    assert_eq!(game.engine().board().piece_on(Square::H8), Some(Piece::new(PieceKind::King, Color::Black)));
}

#[test]
fn test_moves3() {
    let game = play_and_compare(MOVES3);
    assert_eq!(game.engine().board().piece_on(Square::C8), Some(Piece::new(PieceKind::Rook, Color::Black)));
    assert_eq!(game.engine().board().piece_on(sq("c6")), Some(Piece::new(PieceKind::Rook, Color::White)));
}

#[test]
fn test_san_round_trip_along_games() {
    for moves in [MOVES1, MOVES2, MOVES3] {
        let mut game = Game::new();
        for &text in moves {
            assert_san_round_trip(&game);
            game.make_move_from_algebraic(text).unwrap();
        }
        assert_san_round_trip(&game);
    }
}

#[test]
fn test_replay_through_uci_record() {
    let game = play_and_compare(MOVES3);
    let long: String = game.moves_uci().concat();

    let mut replayed = Game::new();
    for uci in split_long_uci(&long).unwrap() {
        replayed.make_move_from_uci(&uci).unwrap();
    }
    assert_eq!(replayed.moves_san(), MOVES3);
    assert_eq!(replayed.engine().board(), game.engine().board());
}

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}
