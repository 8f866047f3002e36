//! Chess piece representation.
//!
//! A [`Piece`] packs its kind and color into a single byte:
//! `(color << 3) | kind`. The empty square is the all-zero byte.

use crate::Color;
use std::fmt;

const KIND_MASK: u8 = 0b0000_0111;
const COLOR_MASK: u8 = 0b0000_1000;

/// The kinds of piece, including the empty marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PieceKind {
    #[default]
    None = 0,
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    /// All real piece kinds in order (excludes [`PieceKind::None`]).
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may promote to.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Decodes the low three bits of a piece byte.
    #[inline]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(PieceKind::None),
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Returns the zero-based table index of a real piece kind (Pawn = 0 … King = 5).
    ///
    /// Must not be called on [`PieceKind::None`].
    #[inline]
    pub const fn index(self) -> usize {
        debug_assert!(!matches!(self, PieceKind::None));
        self as usize - 1
    }

    /// Returns true if this kind slides along rays (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Returns true if a pawn may promote to this kind.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        let mut i = 0;
        while i < Self::PROMOTIONS.len() {
            if Self::PROMOTIONS[i] as u8 == self as u8 {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Returns the lowercase FEN letter, or `None` for the empty kind.
    pub const fn to_char(self) -> Option<char> {
        match self {
            PieceKind::None => None,
            PieceKind::Pawn => Some('p'),
            PieceKind::Knight => Some('n'),
            PieceKind::Bishop => Some('b'),
            PieceKind::Rook => Some('r'),
            PieceKind::Queen => Some('q'),
            PieceKind::King => Some('k'),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::None => "None",
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A colored piece packed into one byte, or the empty square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece(u8);

impl Piece {
    /// The empty square.
    pub const NONE: Piece = Piece(0);

    pub const WHITE_PAWN: Piece = Piece::new(Color::White, PieceKind::Pawn);
    pub const WHITE_KNIGHT: Piece = Piece::new(Color::White, PieceKind::Knight);
    pub const WHITE_BISHOP: Piece = Piece::new(Color::White, PieceKind::Bishop);
    pub const WHITE_ROOK: Piece = Piece::new(Color::White, PieceKind::Rook);
    pub const WHITE_QUEEN: Piece = Piece::new(Color::White, PieceKind::Queen);
    pub const WHITE_KING: Piece = Piece::new(Color::White, PieceKind::King);
    pub const BLACK_PAWN: Piece = Piece::new(Color::Black, PieceKind::Pawn);
    pub const BLACK_KNIGHT: Piece = Piece::new(Color::Black, PieceKind::Knight);
    pub const BLACK_BISHOP: Piece = Piece::new(Color::Black, PieceKind::Bishop);
    pub const BLACK_ROOK: Piece = Piece::new(Color::Black, PieceKind::Rook);
    pub const BLACK_QUEEN: Piece = Piece::new(Color::Black, PieceKind::Queen);
    pub const BLACK_KING: Piece = Piece::new(Color::Black, PieceKind::King);

    /// Packs a color and kind. A `None` kind always yields [`Piece::NONE`].
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        match kind {
            PieceKind::None => Piece::NONE,
            _ => Piece(((color as u8) << 3) | kind as u8),
        }
    }

    /// Decodes a packed byte.
    ///
    /// Returns `None` for bytes that no piece encodes (unused high bits or kind 7).
    /// A color bit on an empty kind is dropped.
    #[inline]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte & !(KIND_MASK | COLOR_MASK) != 0 {
            return None;
        }
        match PieceKind::from_bits(byte & KIND_MASK) {
            Some(PieceKind::None) => Some(Piece::NONE),
            Some(_) => Some(Piece(byte)),
            None => None,
        }
    }

    /// Returns the packed byte.
    #[inline]
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// Returns the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match PieceKind::from_bits(self.0 & KIND_MASK) {
            Some(kind) => kind,
            None => PieceKind::None,
        }
    }

    /// Returns the piece color. Meaningless (White) for [`Piece::NONE`].
    #[inline]
    pub const fn color(self) -> Color {
        if self.0 & COLOR_MASK == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Returns true for the empty square.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 & KIND_MASK == 0
    }

    /// Returns true if this is a real piece of the given kind.
    #[inline]
    pub const fn is(self, kind: PieceKind) -> bool {
        !self.is_none() && self.0 & KIND_MASK == kind as u8
    }

    /// Returns the same piece with a different kind, keeping the color.
    #[inline]
    pub const fn with_kind(self, kind: PieceKind) -> Self {
        Piece::new(self.color(), kind)
    }

    /// Returns the FEN character (uppercase for White), or `None` for the empty square.
    pub const fn to_fen_char(self) -> Option<char> {
        match self.kind().to_char() {
            Some(c) => match self.color() {
                Color::White => Some(c.to_ascii_uppercase()),
                Color::Black => Some(c),
            },
            None => None,
        }
    }

    /// Parses a FEN character into a piece.
    pub const fn from_fen_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece::new(color, kind))
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "Piece(None)")
        } else {
            write!(f, "Piece({} {})", self.color(), self.kind())
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen_char().unwrap_or('.'))
    }
}
