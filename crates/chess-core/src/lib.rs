//! Core types for chess.
//!
//! This crate provides the fundamental types used across the chess engine:
//! - [`Piece`], [`PieceKind`] and [`Color`] for the packed one-byte piece codec
//! - [`Square`], [`File`], and [`Rank`] for board coordinates (a8 = 0, h1 = 63)
//! - [`CastlingRights`] for the castling flag set
//! - [`Move`] for move representation
//! - [`PlacementSink`] / [`PositionSource`], the seam a position loader feeds
//! - [`Fen`], a FEN position loader

mod castling;
mod color;
mod fen;
mod loader;
mod mov;
mod piece;
mod square;

pub use castling::{CastlingRight, CastlingRights};
pub use color::Color;
pub use fen::{Fen, FenError};
pub use loader::{PlacementSink, PositionSource};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::{File, Rank, Square};
