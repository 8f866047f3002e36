//! Game management with undo/redo history.
//!
//! [`Game`] owns a [`Position`] and its [`History`] and is the single entry
//! point for everything that mutates the board: moves, undo/redo, loading
//! and direct edits.

use chess_core::{
    CastlingRights, Color, Fen, FenError, Move, Piece, PieceKind, PositionSource, Square,
};
use thiserror::Error;
use tracing::{debug, trace};

use crate::history::History;
use crate::movegen::{
    attacked_squares, attacks_on_square, generate_moves, in_check, in_checkmate, legal_moves,
    make_move, moves_for_piece, moves_from_square, remake_move, unmake_move,
};
use crate::{Bitboard, MoveList, Position};

/// Why a move was rejected. A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("source and destination are the same square")]
    SameSquare,

    #[error("square index {0} is off the board")]
    OutOfRange(u8),

    #[error("no piece on the source square")]
    EmptySquare,

    #[error("the piece on the source square belongs to the side not on move")]
    WrongSide,

    #[error("destination is not a legal move for that piece")]
    IllegalDestination,

    #[error("cannot promote to {0}")]
    InvalidPromotion(PieceKind),
}

/// Error type for game operations.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Fen(#[from] FenError),

    #[error("illegal move: {0}")]
    Move(#[from] MoveError),
}

/// A chess game: one position plus its undo/redo history.
///
/// Moves are validated before anything changes. Direct board edits
/// (`put_piece`, `remove_piece`, the setters) keep the hash current but
/// drop the history, since recorded moves no longer describe the board.
#[derive(Debug, Clone, Default)]
pub struct Game {
    position: Position,
    history: History,
}

impl Game {
    /// Creates a game on an empty board.
    pub fn new() -> Self {
        Game {
            position: Position::empty(),
            history: History::new(),
        }
    }

    /// Creates a game at the standard starting position.
    pub fn startpos() -> Self {
        let mut game = Self::new();
        game.reset();
        game
    }

    /// Creates a game from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let mut game = Self::new();
        game.load_fen(fen)?;
        Ok(game)
    }

    /// Returns the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the undo/redo history.
    pub fn history(&self) -> &History {
        &self.history
    }

    // --- Loading ---

    /// Clears the board and history, then populates the board from `source`.
    pub fn load(&mut self, source: &dyn PositionSource) {
        self.history.clear();
        self.position.load(source);
        debug!(hash = %self.zobrist(), "position loaded");
    }

    /// Parses and loads a FEN string. On a parse error nothing changes.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), GameError> {
        let fen = Fen::parse(fen)?;
        self.load(&fen);
        Ok(())
    }

    /// Loads the standard starting position.
    pub fn reset(&mut self) {
        self.load(&Fen::default());
    }

    /// Empties the board and the history.
    pub fn clear(&mut self) {
        self.history.clear();
        self.position.clear();
        debug!("position cleared");
    }

    // --- Direct edits ---

    /// Places a piece, replacing whatever stood on the square.
    pub fn put_piece(&mut self, piece: Piece, square: Square) {
        self.history.clear();
        self.position.remove_piece(square);
        self.position.add_piece(piece, square);
    }

    /// Removes and returns the piece on a square.
    pub fn remove_piece(&mut self, square: Square) -> Piece {
        self.history.clear();
        self.position.remove_piece(square)
    }

    pub fn set_turn(&mut self, color: Color) {
        self.history.clear();
        self.position.set_turn(color);
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.history.clear();
        self.position.set_castling_rights(rights);
    }

    pub fn set_en_passant(&mut self, square: Option<Square>) {
        self.history.clear();
        self.position.set_en_passant(square);
    }

    // --- Queries ---

    /// Returns the packed piece bytes, a8 first.
    pub fn board(&self) -> [u8; 64] {
        (*self.position.board()).map(Piece::byte)
    }

    /// Returns the piece on a square.
    pub fn piece_at(&self, square: Square) -> Piece {
        self.position.piece_at(square)
    }

    pub fn occupied(&self, color: Color) -> Bitboard {
        self.position.occupied(color)
    }

    pub fn pawns(&self, color: Color) -> Bitboard {
        self.position.pawns(color)
    }

    pub fn knights(&self, color: Color) -> Bitboard {
        self.position.knights(color)
    }

    pub fn bishops(&self, color: Color) -> Bitboard {
        self.position.bishops(color)
    }

    pub fn rooks(&self, color: Color) -> Bitboard {
        self.position.rooks(color)
    }

    pub fn queens(&self, color: Color) -> Bitboard {
        self.position.queens(color)
    }

    pub fn kings(&self, color: Color) -> Bitboard {
        self.position.kings(color)
    }

    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.position.castling_rights()
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.position.en_passant()
    }

    /// Returns the Zobrist hash.
    pub fn hash(&self) -> u64 {
        self.position.hash()
    }

    /// Returns the Zobrist hash as lowercase hex without padding.
    pub fn zobrist(&self) -> String {
        format!("{:x}", self.position.hash())
    }

    /// Describes the current position as FEN.
    pub fn fen(&self) -> Fen {
        self.position.to_fen()
    }

    /// All legal moves of the side to move.
    pub fn moves(&self) -> MoveList {
        generate_moves(&self.position)
    }

    /// Legal moves of the piece on `square`, if it belongs to the side to move.
    pub fn moves_from_square(&self, square: Square) -> MoveList {
        moves_from_square(&self.position, square)
    }

    /// Legal moves of every `piece` on the board.
    pub fn moves_for_piece(&self, piece: Piece) -> MoveList {
        moves_for_piece(&self.position, piece)
    }

    /// Legal destinations of `piece` standing on `square`.
    pub fn possible_moves(&self, piece: Piece, square: Square) -> Bitboard {
        legal_moves(&self.position, piece, square)
    }

    /// Squares attacked by the side not on move.
    pub fn opponent_attacks(&self) -> Bitboard {
        attacked_squares(&self.position, self.turn().opposite())
    }

    /// Squares of `color`'s pieces attacking `square`.
    pub fn attacks_on_square(&self, square: Square, color: Color) -> Bitboard {
        attacks_on_square(&self.position, square, color)
    }

    /// Returns true if the side to move is in check.
    pub fn in_check(&self) -> bool {
        in_check(&self.position)
    }

    /// Returns true if the side to move is in check and its king cannot move.
    ///
    /// Captures of the checking piece and blocks are not considered.
    pub fn in_checkmate(&self) -> bool {
        in_checkmate(&self.position)
    }

    // --- Moves ---

    /// Plays `from -> to`, promoting to a queen. Returns false, changing
    /// nothing, if the move is rejected.
    pub fn move_piece(&mut self, from: u8, to: u8) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Plays `from -> to`, promoting to `promotion`.
    pub fn move_piece_with_promotion(&mut self, from: u8, to: u8, promotion: PieceKind) -> bool {
        self.try_move_with_promotion(from, to, promotion).is_ok()
    }

    /// Plays `from -> to`, promoting to a queen, and reports why a
    /// rejected move was rejected.
    pub fn try_move(&mut self, from: u8, to: u8) -> Result<Move, MoveError> {
        self.try_move_with_promotion(from, to, PieceKind::Queen)
    }

    /// Plays `from -> to` with an explicit promotion choice.
    pub fn try_move_with_promotion(
        &mut self,
        from: u8,
        to: u8,
        promotion: PieceKind,
    ) -> Result<Move, MoveError> {
        let mv = self.validate(from, to, promotion).inspect_err(|err| {
            debug!(from, to, %err, "move rejected");
        })?;

        let undo = make_move(&mut self.position, mv, promotion);
        self.history.record(undo);
        trace!(%mv, hash = %self.zobrist(), "move applied");
        Ok(mv)
    }

    fn validate(&self, from: u8, to: u8, promotion: PieceKind) -> Result<Move, MoveError> {
        let from_sq = Square::from_index(from).ok_or(MoveError::OutOfRange(from))?;
        let to_sq = Square::from_index(to).ok_or(MoveError::OutOfRange(to))?;
        if from_sq == to_sq {
            return Err(MoveError::SameSquare);
        }
        if !promotion.is_promotion_target() {
            return Err(MoveError::InvalidPromotion(promotion));
        }

        let piece = self.position.piece_at(from_sq);
        if piece.is_none() {
            return Err(MoveError::EmptySquare);
        }
        if piece.color() != self.position.turn() {
            return Err(MoveError::WrongSide);
        }
        if !legal_moves(&self.position, piece, from_sq).contains(to_sq) {
            return Err(MoveError::IllegalDestination);
        }

        Ok(Move::new(piece, from_sq, to_sq))
    }

    /// Takes back the last move. Returns false if there is none.
    pub fn undo(&mut self) -> bool {
        let Some(undo) = self.history.take_back() else {
            return false;
        };
        unmake_move(&mut self.position, &undo);
        trace!(mv = %undo.mv, hash = %self.zobrist(), "move undone");
        true
    }

    /// Replays the last undone move. Returns false if there is none.
    pub fn redo(&mut self) -> bool {
        let Some(undo) = self.history.replay() else {
            return false;
        };
        remake_move(&mut self.position, &undo);
        trace!(mv = %undo.mv, hash = %self.zobrist(), "move redone");
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
