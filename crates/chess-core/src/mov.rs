//! Move representation.

use crate::{Piece, Square};
use std::fmt;

/// A candidate move: which piece travels from where to where.
///
/// Castling is a two-file king move and en passant is a pawn move onto the
/// en passant target; neither needs a flag because the position decides.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    piece: Piece,
    from: Square,
    to: Square,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(piece: Piece, from: Square, to: Square) -> Self {
        Move { piece, from, to }
    }

    /// Returns the moving piece.
    #[inline]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4").
    pub fn to_coordinate(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// A null move (used as placeholder, not a legal move).
    pub const NULL: Move = Move {
        piece: Piece::NONE,
        from: Square::A8,
        to: Square::A8,
    };
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {})", self.piece, self.to_coordinate())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinate())
    }
}
