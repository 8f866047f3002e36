//! Chess position representation.

use chess_core::{
    CastlingRights, Color, Fen, FenError, Piece, PieceKind, PlacementSink, PositionSource, Square,
};

use crate::zobrist::{hash_position, ZOBRIST};
use crate::Bitboard;

/// Board state: a square array and per-(color, kind) bitboards kept in
/// lockstep, plus side to move, castling rights, en passant target and the
/// running Zobrist hash.
///
/// Every mutator keeps the hash equal to [`hash_position`] of the current
/// state, so callers never need to rehash after a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    squares: [Piece; 64],
    pieces: [[Bitboard; 6]; 2],
    turn: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    hash: u64,
}

impl Position {
    /// Creates an empty position: no pieces, White to move, no rights.
    pub fn empty() -> Self {
        let mut position = Position {
            squares: [Piece::NONE; 64],
            pieces: [[Bitboard::EMPTY; 6]; 2],
            turn: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            hash: 0,
        };
        position.rehash();
        position
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        let mut position = Position::empty();
        position.load(&Fen::default());
        position
    }

    /// Creates a position from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let fen = Fen::parse(fen)?;
        let mut position = Position::empty();
        position.load(&fen);
        Ok(position)
    }

    /// Replaces the whole state with what `source` describes and recomputes
    /// the hash from scratch.
    pub fn load(&mut self, source: &dyn PositionSource) {
        self.clear();
        source.place(self);
        self.rehash();
    }

    /// Resets to the empty position.
    pub fn clear(&mut self) {
        self.squares = [Piece::NONE; 64];
        self.pieces = [[Bitboard::EMPTY; 6]; 2];
        self.turn = Color::White;
        self.castling = CastlingRights::NONE;
        self.en_passant = None;
        self.rehash();
    }

    /// Recomputes the hash from scratch.
    pub fn rehash(&mut self) {
        self.hash = hash_position(self);
    }

    /// Returns the piece on a square ([`Piece::NONE`] if empty).
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Piece {
        self.squares[sq.index() as usize]
    }

    /// Returns the square array, a8 first.
    #[inline]
    pub fn board(&self) -> &[Piece; 64] {
        &self.squares
    }

    /// Places a piece on an empty square. Placing [`Piece::NONE`] is a no-op.
    ///
    /// The square must be empty; callers remove before they add.
    pub fn add_piece(&mut self, piece: Piece, sq: Square) {
        if piece.is_none() {
            return;
        }
        debug_assert!(self.piece_at(sq).is_none(), "add_piece on occupied {}", sq);
        self.squares[sq.index() as usize] = piece;
        self.pieces[piece.color().index()][piece.kind().index()].set(sq);
        self.hash ^= ZOBRIST.piece_key(piece, sq);
    }

    /// Removes and returns the piece on a square. Removing from an empty
    /// square is a no-op returning [`Piece::NONE`].
    pub fn remove_piece(&mut self, sq: Square) -> Piece {
        let piece = self.piece_at(sq);
        if piece.is_none() {
            return piece;
        }
        self.squares[sq.index() as usize] = Piece::NONE;
        self.pieces[piece.color().index()][piece.kind().index()].clear(sq);
        self.hash ^= ZOBRIST.piece_key(piece, sq);
        piece
    }

    /// Returns the per-(color, kind) bitboards, indexed `[color][kind]`.
    #[inline]
    pub fn bitboards(&self) -> &[[Bitboard; 6]; 2] {
        &self.pieces
    }

    /// Returns a bitboard of pieces of the given color and kind.
    #[inline]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> Bitboard {
        match kind {
            PieceKind::None => Bitboard::EMPTY,
            _ => self.pieces[color.index()][kind.index()],
        }
    }

    /// Returns a bitboard of all pieces of one color.
    #[inline]
    pub fn occupied(&self, color: Color) -> Bitboard {
        self.pieces[color.index()]
            .iter()
            .fold(Bitboard::EMPTY, |acc, &bb| acc | bb)
    }

    /// Returns a bitboard of all occupied squares.
    #[inline]
    pub fn occupied_all(&self) -> Bitboard {
        self.occupied(Color::White) | self.occupied(Color::Black)
    }

    /// Returns a bitboard of all empty squares.
    #[inline]
    pub fn empty_squares(&self) -> Bitboard {
        !self.occupied_all()
    }

    #[inline]
    pub fn pawns(&self, color: Color) -> Bitboard {
        self.pieces_of(color, PieceKind::Pawn)
    }

    #[inline]
    pub fn knights(&self, color: Color) -> Bitboard {
        self.pieces_of(color, PieceKind::Knight)
    }

    #[inline]
    pub fn bishops(&self, color: Color) -> Bitboard {
        self.pieces_of(color, PieceKind::Bishop)
    }

    #[inline]
    pub fn rooks(&self, color: Color) -> Bitboard {
        self.pieces_of(color, PieceKind::Rook)
    }

    #[inline]
    pub fn queens(&self, color: Color) -> Bitboard {
        self.pieces_of(color, PieceKind::Queen)
    }

    #[inline]
    pub fn kings(&self, color: Color) -> Bitboard {
        self.pieces_of(color, PieceKind::King)
    }

    /// Returns the square of the given color's king, if it has one.
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings(color).lsb()
    }

    /// Returns the side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the castling rights.
    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Returns the en passant target square, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Returns the Zobrist hash.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Sets the side to move.
    pub fn set_turn(&mut self, color: Color) {
        self.hash ^= ZOBRIST.side_key(self.turn) ^ ZOBRIST.side_key(color);
        self.turn = color;
    }

    /// Replaces the castling rights.
    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.hash ^= ZOBRIST.castling_key(self.castling) ^ ZOBRIST.castling_key(rights);
        self.castling = rights;
    }

    /// Replaces the en passant target.
    pub fn set_en_passant(&mut self, square: Option<Square>) {
        self.hash ^= ZOBRIST.en_passant_key(self.en_passant) ^ ZOBRIST.en_passant_key(square);
        self.en_passant = square;
    }

    /// Returns true if the square array and bitboards agree and the hash
    /// matches a fresh computation.
    pub fn is_consistent(&self) -> bool {
        let bitboards_agree = Square::all().all(|sq| {
            let piece = self.piece_at(sq);
            Color::ALL.iter().all(|&color| {
                PieceKind::ALL.iter().all(|&kind| {
                    let expected = !piece.is_none() && piece.color() == color && piece.is(kind);
                    self.pieces_of(color, kind).contains(sq) == expected
                })
            })
        });
        bitboards_agree && self.hash == hash_position(self)
    }

    /// Describes this position as a FEN record (clocks are not tracked).
    pub fn to_fen(&self) -> Fen {
        Fen {
            placement: self.squares,
            turn: self.turn,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::empty()
    }
}

impl PlacementSink for Position {
    fn put(&mut self, piece: Piece, square: Square) {
        self.remove_piece(square);
        self.add_piece(piece, square);
    }

    fn set_turn(&mut self, color: Color) {
        Position::set_turn(self, color);
    }

    fn set_castling_rights(&mut self, rights: CastlingRights) {
        Position::set_castling_rights(self, rights);
    }

    fn set_en_passant(&mut self, square: Option<Square>) {
        Position::set_en_passant(self, square);
    }
}
