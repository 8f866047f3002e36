//! Castling rights.

use crate::Color;
use std::fmt;

/// A single castling right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CastlingRight {
    WhiteKingSide = 0b0001,
    WhiteQueenSide = 0b0010,
    BlackKingSide = 0b0100,
    BlackQueenSide = 0b1000,
}

impl CastlingRight {
    /// All four rights in FEN order (`KQkq`).
    pub const ALL: [CastlingRight; 4] = [
        CastlingRight::WhiteKingSide,
        CastlingRight::WhiteQueenSide,
        CastlingRight::BlackKingSide,
        CastlingRight::BlackQueenSide,
    ];

    /// The king-side right of a color.
    #[inline]
    pub const fn kingside(color: Color) -> Self {
        match color {
            Color::White => CastlingRight::WhiteKingSide,
            Color::Black => CastlingRight::BlackKingSide,
        }
    }

    /// The queen-side right of a color.
    #[inline]
    pub const fn queenside(color: Color) -> Self {
        match color {
            Color::White => CastlingRight::WhiteQueenSide,
            Color::Black => CastlingRight::BlackQueenSide,
        }
    }

    /// Returns the FEN letter for this right.
    pub const fn to_char(self) -> char {
        match self {
            CastlingRight::WhiteKingSide => 'K',
            CastlingRight::WhiteQueenSide => 'Q',
            CastlingRight::BlackKingSide => 'k',
            CastlingRight::BlackQueenSide => 'q',
        }
    }

    /// Parses a FEN castling letter.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'K' => Some(CastlingRight::WhiteKingSide),
            'Q' => Some(CastlingRight::WhiteQueenSide),
            'k' => Some(CastlingRight::BlackKingSide),
            'q' => Some(CastlingRight::BlackQueenSide),
            _ => None,
        }
    }
}

/// The set of castling rights still available.
///
/// Only shrinks during play; it grows only when a position is loaded.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    /// Creates a set from raw flag bits; bits above the low four are dropped.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        CastlingRights(bits & 0b1111)
    }

    /// Returns the raw flag bits (0-15).
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if the right is in the set.
    #[inline]
    pub const fn has(self, right: CastlingRight) -> bool {
        self.0 & right as u8 != 0
    }

    /// Returns the set with the right added.
    #[inline]
    pub const fn with(self, right: CastlingRight) -> Self {
        CastlingRights(self.0 | right as u8)
    }

    /// Returns the set with the right removed.
    #[inline]
    pub const fn without(self, right: CastlingRight) -> Self {
        CastlingRights(self.0 & !(right as u8))
    }

    /// Returns the set with both rights of a color removed.
    #[inline]
    pub const fn without_color(self, color: Color) -> Self {
        self.without(CastlingRight::kingside(color))
            .without(CastlingRight::queenside(color))
    }

    /// Returns true if the given side can still castle king-side.
    #[inline]
    pub const fn can_castle_kingside(self, color: Color) -> bool {
        self.has(CastlingRight::kingside(color))
    }

    /// Returns true if the given side can still castle queen-side.
    #[inline]
    pub const fn can_castle_queenside(self, color: Color) -> bool {
        self.has(CastlingRight::queenside(color))
    }

    /// Returns true if no rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the rights present, in FEN order.
    pub fn iter(self) -> impl Iterator<Item = CastlingRight> {
        CastlingRight::ALL
            .into_iter()
            .filter(move |&right| self.has(right))
    }
}

impl FromIterator<CastlingRight> for CastlingRights {
    fn from_iter<I: IntoIterator<Item = CastlingRight>>(iter: I) -> Self {
        iter.into_iter()
            .fold(CastlingRights::NONE, CastlingRights::with)
    }
}

impl fmt::Debug for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastlingRights({})", self)
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for right in self.iter() {
            write!(f, "{}", right.to_char())?;
        }
        Ok(())
    }
}
