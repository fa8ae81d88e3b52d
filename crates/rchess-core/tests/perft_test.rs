//! Leaf counts of the legal move tree from the starting position

use rchess_core::RulesEngine;

fn perft(engine: &RulesEngine, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = engine.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        let mut next = engine.clone();
        next.make_legal_move(mv).unwrap_or_else(|e| panic!("{mv}: {e}"));
        nodes += perft(&next, depth - 1);
    }
    nodes
}

#[test]
fn test_perft_startpos() {
    let engine = RulesEngine::new();
    assert_eq!(perft(&engine, 1), 20);
    assert_eq!(perft(&engine, 2), 400);
    assert_eq!(perft(&engine, 3), 8_902);
}

#[test]
fn test_perft_after_e4_e5() {
    let mut engine = RulesEngine::new();
    for uci in ["e2e4", "e7e5"] {
        engine.make_legal_move(rchess_core::notation::parse_uci(uci).unwrap()).unwrap();
    }
    // 14 pawn moves, 5 knight, 5 bishop, 4 queen, Ke2
    assert_eq!(perft(&engine, 1), 29);
}
