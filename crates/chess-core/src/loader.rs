//! The seam between a position loader and the board it populates.
//!
//! A loader walks its own description of a position and reports it through
//! a [`PlacementSink`]: one [`put`](PlacementSink::put) per square in index
//! order (a8 through h1), then the side to move, castling rights and en
//! passant target. The board never parses text itself.

use crate::{CastlingRights, Color, Piece, Square};

/// Receives a position one square at a time.
pub trait PlacementSink {
    /// Places `piece` on `square`. An empty piece leaves the square empty.
    fn put(&mut self, piece: Piece, square: Square);

    /// Sets the side to move.
    fn set_turn(&mut self, color: Color);

    /// Sets the castling rights.
    fn set_castling_rights(&mut self, rights: CastlingRights);

    /// Sets the en passant target square.
    fn set_en_passant(&mut self, square: Option<Square>);
}

/// Something that can describe a full position to a [`PlacementSink`].
pub trait PositionSource {
    /// Feeds the whole position into `sink`.
    fn place(&self, sink: &mut dyn PlacementSink);
}

/// A plain square array is a source of piece placement only; White moves,
/// with no castling rights and no en passant target.
impl PositionSource for [Piece; 64] {
    fn place(&self, sink: &mut dyn PlacementSink) {
        for (square, &piece) in Square::all().zip(self.iter()) {
            sink.put(piece, square);
        }
        sink.set_turn(Color::White);
        sink.set_castling_rights(CastlingRights::NONE);
        sink.set_en_passant(None);
    }
}
