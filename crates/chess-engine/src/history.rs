//! Undo/redo history.

use chess_core::{CastlingRights, Move, Piece, PieceKind, Square};

/// Everything needed to take back one applied move exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undo {
    /// The move as requested.
    pub mv: Move,
    /// The captured piece, or [`Piece::NONE`].
    pub captured: Piece,
    /// Where the captured piece stood. Differs from `mv.to()` only for en passant.
    pub captured_on: Square,
    /// The kind a pawn promoted to, if the move promoted.
    pub promotion: Option<PieceKind>,
    pub old_castling: CastlingRights,
    pub new_castling: CastlingRights,
    pub old_en_passant: Option<Square>,
    pub new_en_passant: Option<Square>,
}

impl Undo {
    /// Returns true if the move captured something.
    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_none()
    }

    /// Returns true if the move captured en passant.
    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.is_capture() && self.captured_on != self.mv.to()
    }

    /// Returns true if the move was a castling king move.
    #[inline]
    pub fn is_castling(&self) -> bool {
        self.mv.piece().is(PieceKind::King)
            && self.mv.from().file().index().abs_diff(self.mv.to().file().index()) == 2
    }
}

/// Undo and redo stacks for one position.
///
/// Pushing a fresh move discards the redo stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    undo: Vec<Undo>,
    redo: Vec<Undo>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a newly played move, invalidating any undone future.
    pub fn record(&mut self, undo: Undo) {
        self.redo.clear();
        self.undo.push(undo);
    }

    /// Pops the last played move and moves it onto the redo stack.
    pub fn take_back(&mut self) -> Option<Undo> {
        let undo = self.undo.pop()?;
        self.redo.push(undo);
        Some(undo)
    }

    /// Pops the last undone move and moves it back onto the undo stack.
    pub fn replay(&mut self) -> Option<Undo> {
        let undo = self.redo.pop()?;
        self.undo.push(undo);
        Some(undo)
    }

    /// Drops both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Played moves, oldest first.
    pub fn played(&self) -> &[Undo] {
        &self.undo
    }

    /// Undone moves, most recently undone last.
    pub fn undone(&self) -> &[Undo] {
        &self.redo
    }

    /// Returns the last played move.
    pub fn last(&self) -> Option<&Undo> {
        self.undo.last()
    }
}
