//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.
//! Moves are played and taken back on a private clone of the [`Game`], so
//! the count also exercises make/unmake while the caller's history,
//! redo stack included, stays as it was.

use crate::Game;

/// Counts the number of leaf nodes at the given depth.
///
/// Promotions count once (the queen), so only positions without promotions
/// within `depth` plies match the published tables.
pub fn perft(game: &Game, depth: u32) -> u64 {
    count(&mut game.clone(), depth)
}

/// Perft with divide - node count below each root move, sorted by move text.
pub fn perft_divide(game: &Game, depth: u32) -> Vec<(String, u64)> {
    let mut game = game.clone();
    let moves = game.moves();
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        if !game.move_piece(m.from().index(), m.to().index()) {
            continue;
        }
        let nodes = if depth > 1 {
            count(&mut game, depth - 1)
        } else {
            1
        };
        game.undo();
        results.push((m.to_coordinate(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

fn count(game: &mut Game, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in &moves {
        if game.move_piece(m.from().index(), m.to().index()) {
            nodes += count(game, depth - 1);
            game.undo();
        }
    }
    nodes
}
