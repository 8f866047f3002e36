//! Bitboard chess rules core.
//!
//! This crate provides:
//! - [`Bitboard`] - 64-bit square sets with shift and iteration helpers
//! - [`Position`] - square array plus per-piece bitboards, kept in sync with
//!   an incrementally updated Zobrist hash
//! - [`Game`] - move validation, undo/redo history and board editing
//! - Legal move generation, check and checkmate detection
//! - [`perft`] for validating the move generator
//!
//! # Architecture
//!
//! Every piece kind of every colour has its own bitboard alongside a
//! 64-entry square array. Move generation works on pseudo-legal
//! destination bitboards and filters them by simulating each move on a
//! scratch copy of the bitboards.
//!
//! # Example
//!
//! ```
//! use chess_core::Square;
//! use chess_engine::Game;
//!
//! let mut game = Game::startpos();
//! println!("Legal moves from starting position: {}", game.moves().len());
//!
//! let e2 = Square::from_algebraic("e2").unwrap().index();
//! let e4 = Square::from_algebraic("e4").unwrap().index();
//! assert!(game.move_piece(e2, e4));
//! assert!(game.undo());
//! println!("Zobrist: {}", game.zobrist());
//! ```

mod bitboard;
mod game;
mod history;
pub mod movegen;
mod position;
pub mod zobrist;

pub use bitboard::{Bitboard, BitboardIter};
pub use game::{Game, GameError, MoveError};
pub use history::{History, Undo};
pub use movegen::perft::{perft, perft_divide};
pub use movegen::{
    attacked_squares, attacks_on_square, bishop_attacks, generate_moves, in_check, in_checkmate,
    is_king_attacked, is_square_attacked, king_attacks, knight_attacks, legal_moves, make_move,
    pawn_attacks, queen_attacks, rook_attacks, unmake_move, MoveList,
};
pub use position::Position;
pub use zobrist::{hash_position, ZobristKeys, ZOBRIST};
