//! Zobrist hashing for position identification.
//!
//! Zobrist hashing creates a unique hash for each chess position by XORing
//! random numbers associated with:
//! - Each piece on each square (12 pieces x 64 squares = 768 values)
//! - Side to move
//! - Castling rights (one key per 4-bit rights value, 16 values)
//! - En passant file (8 values)
//!
//! [`Position`](crate::Position) keeps its hash current through incremental
//! XORs on every mutation; [`hash_position`] recomputes it from scratch.

use chess_core::{CastlingRights, Color, Piece, Square};

use crate::Position;

/// Seed for the key generator. Changing it changes every hash.
const SEED: u64 = 2025;

/// SplitMix64 step: advances `state` and returns the next output.
const fn split_mix(state: u64) -> (u64, u64) {
    let state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    (state, z ^ (z >> 31))
}

/// Zobrist hash keys.
///
/// Generated using a fixed seed for reproducibility. Keys are drawn in
/// layout order: pieces (white pawn..king, then black), castling values,
/// en passant files, side to move.
pub struct ZobristKeys {
    /// Keys for pieces: [color][kind][square]
    pub pieces: [[[u64; 64]; 6]; 2],
    /// Keys for each castling rights value, indexed by its bits.
    pub castling: [u64; 16],
    /// Keys for en passant file.
    pub en_passant: [u64; 8],
    /// Key for black to move (XOR when black to move).
    pub black_to_move: u64,
}

impl ZobristKeys {
    /// Initializes Zobrist keys from [`SEED`].
    pub const fn new() -> Self {
        let mut state = SEED;
        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut castling = [0u64; 16];
        let mut en_passant = [0u64; 8];

        let mut color = 0;
        while color < 2 {
            let mut kind = 0;
            while kind < 6 {
                let mut square = 0;
                while square < 64 {
                    let (new_state, value) = split_mix(state);
                    state = new_state;
                    pieces[color][kind][square] = value;
                    square += 1;
                }
                kind += 1;
            }
            color += 1;
        }

        let mut i = 0;
        while i < 16 {
            let (new_state, value) = split_mix(state);
            state = new_state;
            castling[i] = value;
            i += 1;
        }

        let mut i = 0;
        while i < 8 {
            let (new_state, value) = split_mix(state);
            state = new_state;
            en_passant[i] = value;
            i += 1;
        }

        let (_, black_to_move) = split_mix(state);

        ZobristKeys {
            pieces,
            castling,
            en_passant,
            black_to_move,
        }
    }

    /// Returns the key for a piece on a square. The empty piece has key 0.
    #[inline]
    pub fn piece_key(&self, piece: Piece, square: Square) -> u64 {
        if piece.is_none() {
            return 0;
        }
        self.pieces[piece.color().index()][piece.kind().index()][square.index() as usize]
    }

    /// Returns the key for a castling rights value.
    #[inline]
    pub const fn castling_key(&self, rights: CastlingRights) -> u64 {
        self.castling[rights.bits() as usize]
    }

    /// Returns the key for an en passant target, keyed by its file.
    #[inline]
    pub const fn en_passant_key(&self, square: Option<Square>) -> u64 {
        match square {
            Some(sq) => self.en_passant[sq.file().index() as usize],
            None => 0,
        }
    }

    /// Returns the side key contribution for `turn`.
    #[inline]
    pub const fn side_key(&self, turn: Color) -> u64 {
        match turn {
            Color::White => 0,
            Color::Black => self.black_to_move,
        }
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

/// Global Zobrist keys (initialized at compile time).
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

/// Computes the hash of a position from scratch.
pub fn hash_position(position: &Position) -> u64 {
    let mut hash = Square::all()
        .map(|sq| ZOBRIST.piece_key(position.piece_at(sq), sq))
        .fold(0, |acc, key| acc ^ key);

    hash ^= ZOBRIST.side_key(position.turn());
    hash ^= ZOBRIST.castling_key(position.castling_rights());
    hash ^= ZOBRIST.en_passant_key(position.en_passant());
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn zobrist_keys_are_nonzero() {
        assert_ne!(ZOBRIST.black_to_move, 0);
        assert_ne!(ZOBRIST.pieces[0][0][0], 0);
        assert_ne!(ZOBRIST.castling[0], 0);
        assert_ne!(ZOBRIST.en_passant[7], 0);
    }

    #[test]
    fn zobrist_keys_are_unique() {
        let mut seen = HashSet::new();
        let all = ZOBRIST
            .pieces
            .iter()
            .flatten()
            .flatten()
            .chain(ZOBRIST.castling.iter())
            .chain(ZOBRIST.en_passant.iter())
            .chain(std::iter::once(&ZOBRIST.black_to_move));
        for &key in all {
            assert!(seen.insert(key), "duplicate key {:x}", key);
        }
        assert_eq!(seen.len(), 12 * 64 + 16 + 8 + 1);
    }

    #[test]
    fn keys_are_deterministic() {
        let fresh = ZobristKeys::new();
        assert_eq!(fresh.pieces, ZOBRIST.pieces);
        assert_eq!(fresh.black_to_move, ZOBRIST.black_to_move);
    }

    #[test]
    fn first_key_is_split_mix_of_seed() {
        assert_eq!(split_mix(SEED).1, ZOBRIST.pieces[0][0][0]);
    }

    #[test]
    fn piece_key_lookup() {
        let a1 = Square::A1;
        assert_eq!(ZOBRIST.piece_key(Piece::NONE, a1), 0);
        assert_ne!(
            ZOBRIST.piece_key(Piece::WHITE_PAWN, a1),
            ZOBRIST.piece_key(Piece::BLACK_PAWN, a1)
        );
        assert_eq!(
            ZOBRIST.piece_key(Piece::BLACK_KING, Square::H1),
            ZOBRIST.pieces[1][5][63]
        );
    }

    #[test]
    fn side_and_en_passant_keys() {
        assert_eq!(ZOBRIST.side_key(Color::White), 0);
        assert_eq!(ZOBRIST.side_key(Color::Black), ZOBRIST.black_to_move);
        assert_eq!(ZOBRIST.en_passant_key(None), 0);
        let e3 = Square::from_algebraic("e3").unwrap();
        let e6 = Square::from_algebraic("e6").unwrap();
        assert_eq!(ZOBRIST.en_passant_key(Some(e3)), ZOBRIST.en_passant_key(Some(e6)));
    }

    #[test]
    fn hash_of_empty_position() {
        let position = Position::empty();
        assert_eq!(hash_position(&position), ZOBRIST.castling[0]);
    }
}
