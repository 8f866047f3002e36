//! Perft counts against published reference values.
//!
//! Promotions count once here, so the positions are limited to depths at
//! which no pawn can reach its last rank.

use chess_engine::{perft, perft_divide, Game};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const ENDGAME: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

fn count(fen: &str, depth: u32) -> u64 {
    perft(&Game::from_fen(fen).unwrap(), depth)
}

#[test]
fn startpos() {
    let game = Game::startpos();
    assert_eq!(perft(&game, 1), 20);
    assert_eq!(perft(&game, 2), 400);
    assert_eq!(perft(&game, 3), 8902);
}

#[test]
fn startpos_depth_4() {
    let game = Game::startpos();
    assert_eq!(perft(&game, 4), 197_281);
}

// Slow in debug builds
#[test]
#[ignore]
fn startpos_depth_5() {
    let game = Game::startpos();
    assert_eq!(perft(&game, 5), 4_865_609);
}

#[test]
fn kiwipete() {
    assert_eq!(count(KIWIPETE, 1), 48);
    assert_eq!(count(KIWIPETE, 2), 2039);
}

#[test]
fn kiwipete_depth_3() {
    assert_eq!(count(KIWIPETE, 3), 97_862);
}

#[test]
fn endgame() {
    assert_eq!(count(ENDGAME, 1), 14);
    assert_eq!(count(ENDGAME, 2), 191);
    assert_eq!(count(ENDGAME, 3), 2812);
    assert_eq!(count(ENDGAME, 4), 43_238);
}

#[test]
fn divide_sums_to_perft() {
    let game = Game::from_fen(KIWIPETE).unwrap();
    let divide = perft_divide(&game, 2);
    assert_eq!(divide.len(), 48);
    assert!(divide.windows(2).all(|w| w[0].0 < w[1].0));
    assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 2039);

    let castle = divide.iter().find(|(mv, _)| mv == "e1g1").unwrap();
    assert_eq!(castle.1, 43);
}
