//! Applying and taking back moves on a [`Position`].
//!
//! Every board change goes through the position's hash-aware mutators, so
//! the Zobrist hash follows the captured pawn of an en passant capture and
//! the rook of a castling move without any extra bookkeeping here.

use chess_core::{CastlingRight, File, Move, Piece, PieceKind, Square};

use super::en_passant_victim;
use crate::history::Undo;
use crate::Position;

/// The castling right tied to a rook home square.
fn rook_home_right(sq: Square) -> Option<CastlingRight> {
    match sq {
        Square::H1 => Some(CastlingRight::WhiteKingSide),
        Square::A1 => Some(CastlingRight::WhiteQueenSide),
        Square::H8 => Some(CastlingRight::BlackKingSide),
        Square::A8 => Some(CastlingRight::BlackQueenSide),
        _ => None,
    }
}

/// Rook origin and destination for a castling king move, or `None` if the
/// move is not one.
fn castling_rook(mv: Move) -> Option<(Square, Square)> {
    let from = mv.from();
    let to = mv.to();
    if !mv.piece().is(PieceKind::King) || from.file().index().abs_diff(to.file().index()) != 2 {
        return None;
    }
    let rank = to.rank();
    let on_rank = |file| Square::new(file, rank);
    match to.file() {
        File::G => Some((on_rank(File::H), on_rank(File::F))),
        File::C => Some((on_rank(File::A), on_rank(File::D))),
        _ => None,
    }
}

/// Applies a move that is already known to be legal and returns the record
/// that takes it back.
///
/// A pawn reaching its last rank becomes `promotion`.
pub fn make_move(position: &mut Position, mv: Move, promotion: PieceKind) -> Undo {
    let piece = mv.piece();
    let us = piece.color();
    let from = mv.from();
    let to = mv.to();

    let old_castling = position.castling_rights();
    let old_en_passant = position.en_passant();

    let captured_on = en_passant_victim(position, from, to).unwrap_or(to);
    let captured = position.remove_piece(captured_on);

    position.remove_piece(from);
    let placed = placed_piece(mv, promotion);
    position.add_piece(placed, to);

    if let Some((rook_from, rook_to)) = castling_rook(mv) {
        let rook = position.remove_piece(rook_from);
        position.add_piece(rook, rook_to);
    }

    let mut new_castling = old_castling;
    if piece.is(PieceKind::King) {
        new_castling = new_castling.without_color(us);
    }
    for right in [from, to].into_iter().filter_map(rook_home_right) {
        new_castling = new_castling.without(right);
    }

    let new_en_passant = if piece.is(PieceKind::Pawn) && from.index().abs_diff(to.index()) == 16 {
        Square::from_index((from.index() + to.index()) / 2)
    } else {
        None
    };

    position.set_castling_rights(new_castling);
    position.set_en_passant(new_en_passant);
    position.set_turn(us.opposite());

    Undo {
        mv,
        captured,
        captured_on,
        promotion: (placed != piece).then_some(promotion),
        old_castling,
        new_castling,
        old_en_passant,
        new_en_passant,
    }
}

/// Restores the position exactly as it was before `undo.mv` was applied.
pub fn unmake_move(position: &mut Position, undo: &Undo) {
    let mv = undo.mv;

    position.remove_piece(mv.to());
    position.add_piece(mv.piece(), mv.from());

    if let Some((rook_from, rook_to)) = castling_rook(mv) {
        let rook = position.remove_piece(rook_to);
        position.add_piece(rook, rook_from);
    }

    position.add_piece(undo.captured, undo.captured_on);

    position.set_castling_rights(undo.old_castling);
    position.set_en_passant(undo.old_en_passant);
    position.set_turn(mv.piece().color());
}

/// Replays a taken-back move from its record.
pub fn remake_move(position: &mut Position, undo: &Undo) -> Undo {
    let promotion = undo.promotion.unwrap_or(PieceKind::Queen);
    let replayed = make_move(position, undo.mv, promotion);
    debug_assert_eq!(&replayed, undo);
    replayed
}

/// The piece that lands on the destination, given the promotion choice.
fn placed_piece(mv: Move, promotion: PieceKind) -> Piece {
    let piece = mv.piece();
    if piece.is(PieceKind::Pawn) && mv.to().rank() == piece.color().promotion_rank() {
        piece.with_kind(promotion)
    } else {
        piece
    }
}
