//! FEN (Forsyth-Edwards Notation) parsing and serialization.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{
    CastlingRight, CastlingRights, Color, Piece, PieceKind, PlacementSink, PositionSource, Rank,
    Square,
};

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 4 or 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// A validated FEN record.
///
/// Parsing checks every field up front, so feeding a `Fen` into a board
/// through [`PositionSource`] cannot fail half-way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    /// Square contents in index order (a8 first).
    pub placement: [Piece; 64],
    /// Side to move.
    pub turn: Color,
    /// Castling availability.
    pub castling: CastlingRights,
    /// En passant target square.
    pub en_passant: Option<Square>,
    /// Halfmove clock (for the 50-move rule).
    pub halfmove_clock: u32,
    /// Fullmove number.
    pub fullmove_number: u32,
}

impl Fen {
    /// The standard starting position.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// The empty board.
    pub const EMPTY: &'static str = "8/8/8/8/8/8/8/8 w - - 0 1";

    /// Parses a FEN string.
    ///
    /// The halfmove clock and fullmove number may be omitted together; they
    /// default to `0` and `1`.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 && parts.len() != 4 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let placement = Self::parse_piece_placement(parts[0])?;

        let turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        let castling = Self::parse_castling(parts[2])?;
        let en_passant = Self::parse_en_passant(parts[3], turn)?;

        let (halfmove_clock, fullmove_number) = if parts.len() == 6 {
            let halfmove_clock = parts[4]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidHalfmoveClock(parts[4].to_string()))?;
            let fullmove_number = parts[5]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidFullmoveNumber(parts[5].to_string()))?;
            (halfmove_clock, fullmove_number)
        } else {
            (0, 1)
        };

        Ok(Fen {
            placement,
            turn,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    fn parse_piece_placement(placement: &str) -> Result<[Piece; 64], FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut board = [Piece::NONE; 64];
        for (row, rank) in ranks.iter().enumerate() {
            let mut file = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as usize;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    if file < 8 {
                        board[row * 8 + file] = piece;
                    }
                    file += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - row
                    )));
                }
            }
            if file != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - row,
                    file
                )));
            }
        }

        Ok(board)
    }

    fn parse_castling(castling: &str) -> Result<CastlingRights, FenError> {
        if castling == "-" {
            return Ok(CastlingRights::NONE);
        }

        castling
            .chars()
            .map(|c| {
                CastlingRight::from_char(c).ok_or_else(|| {
                    FenError::InvalidCastlingRights(format!("invalid character '{}'", c))
                })
            })
            .collect()
    }

    /// The target lies behind a pawn the opponent just double-pushed: on
    /// the sixth rank when White is to move, the third when Black is.
    fn parse_en_passant(ep: &str, turn: Color) -> Result<Option<Square>, FenError> {
        if ep == "-" {
            return Ok(None);
        }

        let target_rank = match turn {
            Color::White => Rank::R6,
            Color::Black => Rank::R3,
        };
        match Square::from_algebraic(ep) {
            Some(sq) if sq.rank() == target_rank => Ok(Some(sq)),
            _ => Err(FenError::InvalidEnPassantSquare(ep.to_string())),
        }
    }

    fn placement_string(&self) -> String {
        let mut out = String::new();
        for (row, rank) in self.placement.chunks(8).enumerate() {
            let mut empty_count = 0;
            for piece in rank {
                match piece.to_fen_char() {
                    Some(c) => {
                        if empty_count > 0 {
                            out.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        out.push(c);
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                out.push_str(&empty_count.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }
}

impl Default for Fen {
    /// The standard starting position.
    fn default() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut placement = [Piece::NONE; 64];
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            placement[file] = Piece::new(Color::Black, kind);
            placement[8 + file] = Piece::BLACK_PAWN;
            placement[48 + file] = Piece::WHITE_PAWN;
            placement[56 + file] = Piece::new(Color::White, kind);
        }

        Fen {
            placement,
            turn: Color::White,
            castling: CastlingRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl FromStr for Fen {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fen::parse(s)
    }
}

impl fmt::Display for Fen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let turn = match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let en_passant = self
            .en_passant
            .map_or_else(|| "-".to_string(), Square::to_algebraic);
        write!(
            f,
            "{} {} {} {} {} {}",
            self.placement_string(),
            turn,
            self.castling,
            en_passant,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl PositionSource for Fen {
    fn place(&self, sink: &mut dyn PlacementSink) {
        for (square, &piece) in Square::all().zip(self.placement.iter()) {
            sink.put(piece, square);
        }
        sink.set_turn(self.turn);
        sink.set_castling_rights(self.castling);
        sink.set_en_passant(self.en_passant);
    }
}
