//! Move generation.
//!
//! Per-piece generators return pseudo-legal destination bitboards. The
//! legality filter then replays each candidate on a copy of the bitboards
//! and drops those that leave the mover's king attacked; the live position
//! is never touched during generation.

mod attacks;
mod make;
pub mod perft;

use crate::{Bitboard, Position};
use chess_core::{Color, File, Move, Piece, PieceKind, Square};

pub use attacks::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, pawn_double_push, pawn_push,
    queen_attacks, rook_attacks,
};
pub use make::{make_move, remake_move, unmake_move};

/// A list of moves with a fixed maximum capacity.
///
/// Chess positions have at most 218 legal moves, so we use a fixed-size
/// array to avoid heap allocations during move generation.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of legal moves in any chess position.
    pub const MAX_MOVES: usize = 256;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Returns true if the list holds a move from `from` to `to`.
    pub fn contains(&self, from: Square, to: Square) -> bool {
        self.as_slice()
            .iter()
            .any(|m| m.from() == from && m.to() == to)
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.moves[read]) {
                self.moves[write] = self.moves[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Pseudo-legal pawn destinations: pushes onto empty squares, the double
/// push from the start rank when both squares are empty, captures of enemy
/// pieces, and the en passant target when the side to move can take it.
pub fn generate_pawn_moves(position: &Position, sq: Square, color: Color) -> Bitboard {
    let empty = position.empty_squares();
    let enemy = position.occupied(color.opposite());

    let push = pawn_push(sq, color) & empty;
    let double_push = if push.is_not_empty() {
        pawn_double_push(sq, color) & empty
    } else {
        Bitboard::EMPTY
    };

    let capture_mask = pawn_attacks(sq, color);
    let mut captures = capture_mask & enemy;
    if color == position.turn() {
        if let Some(ep) = position.en_passant() {
            let victim = Square::new(ep.file(), sq.rank());
            if capture_mask.contains(ep)
                && position.piece_at(victim) == Piece::new(color.opposite(), PieceKind::Pawn)
            {
                captures.set(ep);
            }
        }
    }

    push | double_push | captures
}

/// Pseudo-legal knight destinations.
pub fn generate_knight_moves(position: &Position, sq: Square, color: Color) -> Bitboard {
    knight_attacks(sq) & !position.occupied(color)
}

/// Pseudo-legal bishop destinations.
pub fn generate_bishop_moves(position: &Position, sq: Square, color: Color) -> Bitboard {
    bishop_attacks(sq, position.occupied_all()) & !position.occupied(color)
}

/// Pseudo-legal rook destinations.
pub fn generate_rook_moves(position: &Position, sq: Square, color: Color) -> Bitboard {
    rook_attacks(sq, position.occupied_all()) & !position.occupied(color)
}

/// Pseudo-legal queen destinations.
pub fn generate_queen_moves(position: &Position, sq: Square, color: Color) -> Bitboard {
    queen_attacks(sq, position.occupied_all()) & !position.occupied(color)
}

/// King destinations not attacked by the opponent, plus castling targets.
///
/// Castling needs the right, the rook at home, every square between king
/// and rook empty, and the king's start, transit and destination squares
/// unattacked.
pub fn generate_king_moves(position: &Position, sq: Square, color: Color) -> Bitboard {
    let attacked = attacked_squares(position, color.opposite());
    let mut moves = king_attacks(sq) & !position.occupied(color) & !attacked;

    let rights = position.castling_rights();
    let home = Square::new(File::E, color.back_rank());
    if sq != home || attacked.contains(home) {
        return moves;
    }

    let occupied = position.occupied_all();
    let rook = Piece::new(color, PieceKind::Rook);
    let on_back_rank = |file| Square::new(file, color.back_rank());

    if rights.can_castle_kingside(color) && position.piece_at(on_back_rank(File::H)) == rook {
        let between: Bitboard = [File::F, File::G].into_iter().map(on_back_rank).collect();
        if (occupied & between).is_empty() && (attacked & between).is_empty() {
            moves.set(on_back_rank(File::G));
        }
    }

    if rights.can_castle_queenside(color) && position.piece_at(on_back_rank(File::A)) == rook {
        let between: Bitboard = [File::B, File::C, File::D]
            .into_iter()
            .map(on_back_rank)
            .collect();
        let path: Bitboard = [File::C, File::D].into_iter().map(on_back_rank).collect();
        if (occupied & between).is_empty() && (attacked & path).is_empty() {
            moves.set(on_back_rank(File::C));
        }
    }

    moves
}

/// Pseudo-legal destinations of `piece` standing on `sq`.
pub fn generate_piece_moves(position: &Position, piece: Piece, sq: Square) -> Bitboard {
    let color = piece.color();
    match piece.kind() {
        PieceKind::None => Bitboard::EMPTY,
        PieceKind::Pawn => generate_pawn_moves(position, sq, color),
        PieceKind::Knight => generate_knight_moves(position, sq, color),
        PieceKind::Bishop => generate_bishop_moves(position, sq, color),
        PieceKind::Rook => generate_rook_moves(position, sq, color),
        PieceKind::Queen => generate_queen_moves(position, sq, color),
        PieceKind::King => generate_king_moves(position, sq, color),
    }
}

/// Squares holding pieces of `by` that attack `sq`, given per-kind bitboards.
fn attackers(boards: &[[Bitboard; 6]; 2], sq: Square, by: Color) -> Bitboard {
    let occupied = boards
        .iter()
        .flatten()
        .fold(Bitboard::EMPTY, |acc, &bb| acc | bb);
    let theirs = &boards[by.index()];
    let of = |kind: PieceKind| theirs[kind.index()];

    (pawn_attacks(sq, by.opposite()) & of(PieceKind::Pawn))
        | (knight_attacks(sq) & of(PieceKind::Knight))
        | (king_attacks(sq) & of(PieceKind::King))
        | (bishop_attacks(sq, occupied) & (of(PieceKind::Bishop) | of(PieceKind::Queen)))
        | (rook_attacks(sq, occupied) & (of(PieceKind::Rook) | of(PieceKind::Queen)))
}

/// Returns the squares of `by`'s pieces attacking `sq`.
pub fn attacks_on_square(position: &Position, sq: Square, by: Color) -> Bitboard {
    attackers(position.bitboards(), sq, by)
}

/// Returns true if `sq` is attacked by any piece of `by`.
pub fn is_square_attacked(position: &Position, sq: Square, by: Color) -> bool {
    attacks_on_square(position, sq, by).is_not_empty()
}

/// Returns every square `by` attacks: pawn capture masks, jump masks and
/// slider rays against the current occupancy.
pub fn attacked_squares(position: &Position, by: Color) -> Bitboard {
    let occupied = position.occupied_all();
    let mut attacks = Bitboard::EMPTY;

    for sq in position.occupied(by) {
        attacks |= match position.piece_at(sq).kind() {
            PieceKind::Pawn => pawn_attacks(sq, by),
            PieceKind::Knight => knight_attacks(sq),
            PieceKind::Bishop => bishop_attacks(sq, occupied),
            PieceKind::Rook => rook_attacks(sq, occupied),
            PieceKind::Queen => queen_attacks(sq, occupied),
            PieceKind::King => king_attacks(sq),
            PieceKind::None => Bitboard::EMPTY,
        };
    }

    attacks
}

/// Returns true if the king of the given color is attacked.
pub fn is_king_attacked(position: &Position, color: Color) -> bool {
    position
        .king_square(color)
        .is_some_and(|king| is_square_attacked(position, king, color.opposite()))
}

/// Returns true if the side to move is in check.
pub fn in_check(position: &Position) -> bool {
    is_king_attacked(position, position.turn())
}

/// Returns true if the side to move is in check and its king has no legal
/// move.
///
/// Only the king's own mobility is considered: a check that another piece
/// could capture or block still counts as mate here.
pub fn in_checkmate(position: &Position) -> bool {
    let us = position.turn();
    let Some(king) = position.king_square(us) else {
        return false;
    };
    is_square_attacked(position, king, us.opposite())
        && legal_moves(position, Piece::new(us, PieceKind::King), king).is_empty()
}

/// Returns the square of the pawn an en passant capture `from -> to` would
/// take, or `None` if the move is not an en passant capture.
///
/// The square beside `from` must hold an enemy pawn; a stale or hand-set
/// target next to a friendly piece is never a capture.
pub fn en_passant_victim(position: &Position, from: Square, to: Square) -> Option<Square> {
    let piece = position.piece_at(from);
    if !piece.is(PieceKind::Pawn)
        || position.en_passant() != Some(to)
        || !position.piece_at(to).is_none()
        || from.file() == to.file()
    {
        return None;
    }
    let victim = Square::new(to.file(), from.rank());
    let enemy_pawn = Piece::new(piece.color().opposite(), PieceKind::Pawn);
    (position.piece_at(victim) == enemy_pawn).then_some(victim)
}

/// Returns true if moving the piece on `from` to `to` would leave its own
/// king attacked. Works on a scratch copy of the bitboards.
pub fn leaves_king_in_check(position: &Position, from: Square, to: Square) -> bool {
    let piece = position.piece_at(from);
    if piece.is_none() {
        return false;
    }
    let us = piece.color();
    let them = us.opposite();

    let mut boards = *position.bitboards();
    let captured_on = en_passant_victim(position, from, to).unwrap_or(to);
    for bb in boards[them.index()].iter_mut() {
        bb.clear(captured_on);
    }
    let moving = &mut boards[us.index()][piece.kind().index()];
    moving.clear(from);
    moving.set(to);

    let king = if piece.is(PieceKind::King) {
        Some(to)
    } else {
        boards[us.index()][PieceKind::King.index()].lsb()
    };
    king.is_some_and(|king| attackers(&boards, king, them).is_not_empty())
}

/// Legal destinations of `piece` standing on `sq`.
///
/// Empty if `piece` is not what stands on `sq`.
pub fn legal_moves(position: &Position, piece: Piece, sq: Square) -> Bitboard {
    if piece.is_none() || position.piece_at(sq) != piece {
        return Bitboard::EMPTY;
    }
    generate_piece_moves(position, piece, sq)
        .into_iter()
        .filter(|&to| !leaves_king_in_check(position, sq, to))
        .collect()
}

fn push_moves_from(position: &Position, sq: Square, moves: &mut MoveList) {
    let piece = position.piece_at(sq);
    if piece.is_none() || piece.color() != position.turn() {
        return;
    }
    for to in legal_moves(position, piece, sq) {
        moves.push(Move::new(piece, sq, to));
    }
}

/// Generates all legal moves for the side to move, by ascending source
/// square and then ascending destination.
pub fn generate_moves(position: &Position) -> MoveList {
    let mut moves = MoveList::new();
    for sq in position.occupied(position.turn()) {
        push_moves_from(position, sq, &mut moves);
    }
    moves
}

/// Legal moves of the piece on `sq`, if it belongs to the side to move.
pub fn moves_from_square(position: &Position, sq: Square) -> MoveList {
    let mut moves = MoveList::new();
    push_moves_from(position, sq, &mut moves);
    moves
}

/// Legal moves of every `piece` of the side to move.
pub fn moves_for_piece(position: &Position, piece: Piece) -> MoveList {
    let mut moves = MoveList::new();
    if piece.is_none() || piece.color() != position.turn() {
        return moves;
    }
    for sq in position.pieces_of(piece.color(), piece.kind()) {
        push_moves_from(position, sq, &mut moves);
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn pos(fen: &str) -> Position {
        Position::from_fen(fen).unwrap()
    }

    #[test]
    fn movelist_push_and_iterate() {
        let mut list = MoveList::new();
        assert!(list.is_empty());

        let m1 = Move::new(Piece::WHITE_PAWN, sq("e2"), sq("e4"));
        let m2 = Move::new(Piece::WHITE_PAWN, sq("d2"), sq("d4"));
        list.push(m1);
        list.push(m2);

        assert_eq!(list.len(), 2);
        assert_eq!(list[0], m1);
        assert_eq!(list[1], m2);
        assert!(list.contains(sq("d2"), sq("d4")));
        assert!(!list.contains(sq("d2"), sq("d3")));
    }

    #[test]
    fn movelist_retain_and_clear() {
        let mut list = MoveList::default();
        list.push(Move::new(Piece::WHITE_PAWN, sq("e2"), sq("e3")));
        list.push(Move::new(Piece::WHITE_PAWN, sq("e2"), sq("e4")));
        list.push(Move::new(Piece::WHITE_PAWN, sq("d2"), sq("d4")));

        list.retain(|m| m.from() == sq("e2"));
        assert_eq!(list.len(), 2);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn generate_moves_startpos() {
        let moves = generate_moves(&Position::startpos());
        assert_eq!(moves.len(), 20);
        let pawn_moves = moves
            .as_slice()
            .iter()
            .filter(|m| m.piece() == Piece::WHITE_PAWN)
            .count();
        assert_eq!(pawn_moves, 16);
    }

    #[test]
    fn moves_are_ordered_by_source_square() {
        let moves = generate_moves(&Position::startpos());
        assert!(moves
            .as_slice()
            .windows(2)
            .all(|w| (w[0].from(), w[0].to()) < (w[1].from(), w[1].to())));
        assert_eq!(moves[0].from(), sq("a2"));
        assert_eq!(moves[0].to(), sq("a4"));
    }

    #[test]
    fn pawn_pushes_respect_blockers() {
        let position = pos("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        assert!(generate_pawn_moves(&position, sq("e2"), Color::White).is_empty());

        let position = pos("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
        assert_eq!(
            generate_pawn_moves(&position, sq("e2"), Color::White),
            Bitboard::from_square(sq("e3"))
        );
    }

    #[test]
    fn pawn_captures_only_enemies() {
        let position = pos("4k3/8/8/8/8/3p1N2/4P3/4K3 w - - 0 1");
        let moves = generate_pawn_moves(&position, sq("e2"), Color::White);
        assert!(moves.contains(sq("d3")));
        assert!(!moves.contains(sq("f3")));
        assert!(moves.contains(sq("e4")));
    }

    #[test]
    fn black_pawn_moves_south() {
        let position = pos("4k3/3p4/8/8/8/8/8/4K3 b - - 0 1");
        let moves = generate_pawn_moves(&position, sq("d7"), Color::Black);
        assert_eq!(moves, Bitboard::from_square(sq("d6")) | sq("d5").into());
    }

    #[test]
    fn en_passant_target_is_generated() {
        let position = pos("rnbqkbnr/pppp1ppp/8/4pP2/8/8/PPPPP1PP/RNBQKBNR w KQkq e6 0 1");
        let moves = generate_pawn_moves(&position, sq("f5"), Color::White);
        assert!(moves.contains(sq("e6")));
        assert!(moves_from_square(&position, sq("f5")).contains(sq("f5"), sq("e6")));
    }

    #[test]
    fn en_passant_exposing_king_is_illegal() {
        // Taking on d6 would open the fifth rank to the rook.
        let position = pos("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1");
        assert!(generate_pawn_moves(&position, sq("e5"), Color::White).contains(sq("d6")));
        assert!(leaves_king_in_check(&position, sq("e5"), sq("d6")));
        assert!(!moves_from_square(&position, sq("e5")).contains(sq("e5"), sq("d6")));
    }

    #[test]
    fn en_passant_needs_an_enemy_pawn_beside() {
        // A hand-set target with the mover's own pawn on the victim square.
        let mut position = pos("4k3/8/8/8/8/8/3PP3/4K3 w - - 0 1");
        position.set_en_passant(Some(sq("e3")));
        assert!(!generate_pawn_moves(&position, sq("d2"), Color::White).contains(sq("e3")));
        assert_eq!(en_passant_victim(&position, sq("d2"), sq("e3")), None);

        // An enemy knight where the pawn should be is no capture either.
        let mut position = pos("4k3/8/8/3Pn3/8/8/8/4K3 w - - 0 1");
        position.set_en_passant(Some(sq("e6")));
        assert!(!generate_pawn_moves(&position, sq("d5"), Color::White).contains(sq("e6")));
        assert_eq!(en_passant_victim(&position, sq("d5"), sq("e6")), None);
    }

    #[test]
    fn en_passant_victim_is_beside_the_capturer() {
        let position = pos("rnbqkbnr/pppp1ppp/8/4pP2/8/8/PPPPP1PP/RNBQKBNR w KQkq e6 0 1");
        assert_eq!(en_passant_victim(&position, sq("f5"), sq("e6")), Some(sq("e5")));
        assert_eq!(en_passant_victim(&position, sq("f5"), sq("f6")), None);
    }

    #[test]
    fn knight_moves_exclude_own_pieces() {
        let position = Position::startpos();
        let moves = generate_knight_moves(&position, sq("g1"), Color::White);
        assert_eq!(moves, Bitboard::from_square(sq("f3")) | sq("h3").into());
    }

    #[test]
    fn sliders_stop_at_pieces() {
        let position = pos("4k3/8/8/3p4/8/8/3R4/4K3 w - - 0 1");
        let moves = generate_rook_moves(&position, sq("d2"), Color::White);
        assert!(moves.contains(sq("d5")));
        assert!(!moves.contains(sq("d6")));
        assert!(moves.contains(sq("d1")));
        assert!(moves.contains(sq("a2")));
        assert!(moves.contains(sq("h2")));
    }

    #[test]
    fn king_avoids_attacked_squares() {
        let position = pos("4k3/8/8/8/8/8/r7/4K3 w - - 0 1");
        let moves = generate_king_moves(&position, Square::E1, Color::White);
        assert!(!moves.contains(sq("d2")));
        assert!(!moves.contains(sq("e2")));
        assert!(moves.contains(Square::D1));
        assert!(moves.contains(Square::F1));
    }

    #[test]
    fn king_cannot_retreat_along_checking_ray() {
        let position = pos("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
        let legal = legal_moves(&position, Piece::WHITE_KING, Square::E1);
        assert!(!legal.contains(Square::F1));
        assert!(legal.contains(sq("e2")));
    }

    #[test]
    fn castling_both_sides() {
        let position = pos("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
        let moves = generate_king_moves(&position, Square::E1, Color::White);
        assert!(moves.contains(Square::G1));
        assert!(moves.contains(Square::C1));

        let position = pos("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R b KQkq - 0 1");
        let moves = generate_king_moves(&position, Square::E8, Color::Black);
        assert!(moves.contains(Square::G8));
        assert!(moves.contains(Square::C8));
    }

    #[test]
    fn castling_needs_rights_and_empty_squares() {
        let position = pos("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w Qkq - 0 1");
        assert!(!generate_king_moves(&position, Square::E1, Color::White).contains(Square::G1));

        let position = pos("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/RN2K2R w KQkq - 0 1");
        let moves = generate_king_moves(&position, Square::E1, Color::White);
        assert!(!moves.contains(Square::C1));
        assert!(moves.contains(Square::G1));
    }

    #[test]
    fn no_castling_through_check() {
        // Rook on f-file attacks f1.
        let position = pos("r3kr2/pppp3p/8/8/8/8/PPPP3P/R3K2R w KQq - 0 1");
        let moves = generate_king_moves(&position, Square::E1, Color::White);
        assert!(!moves.contains(Square::G1));
        assert!(moves.contains(Square::C1));
    }

    #[test]
    fn no_castling_out_of_check() {
        let position = pos("r3k2r/pppp1ppp/8/4r3/8/8/PPPP1PPP/R3K2R w KQkq - 0 1");
        let moves = generate_king_moves(&position, Square::E1, Color::White);
        assert!(!moves.contains(Square::G1));
        assert!(!moves.contains(Square::C1));
    }

    #[test]
    fn queenside_castling_ignores_attacked_b_file() {
        let position = pos("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        let moves = generate_king_moves(&position, Square::E1, Color::White);
        assert!(moves.contains(Square::C1));
    }

    #[test]
    fn attacks_on_square_finds_all_attackers() {
        let position = pos("4k3/8/8/1b6/8/3p1n2/8/4K2r w - - 0 1");
        let attackers = attacks_on_square(&position, Square::E1, Color::Black);
        assert_eq!(attackers, Bitboard::from_square(Square::H1) | sq("f3").into());

        // The d3 pawn shields e2 from the bishop.
        let e2 = attacks_on_square(&position, sq("e2"), Color::Black);
        assert_eq!(e2, Bitboard::from_square(sq("d3")));
    }

    #[test]
    fn attacked_squares_startpos() {
        let position = Position::startpos();
        let attacked = attacked_squares(&position, Color::White);
        let rank_3 = Bitboard::RANK_2.north();
        assert_eq!(attacked & rank_3, rank_3);
        assert!(!attacked.contains(sq("e4")));
        assert!(is_square_attacked(&position, sq("e3"), Color::White));
    }

    #[test]
    fn check_detection() {
        let position = pos("4k3/8/8/8/8/8/8/4K2r w - - 0 1");
        assert!(in_check(&position));
        assert!(is_king_attacked(&position, Color::White));
        assert!(!is_king_attacked(&position, Color::Black));
        assert!(!in_check(&Position::startpos()));
    }

    #[test]
    fn back_rank_mate() {
        let position = pos("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert!(in_check(&position));
        assert!(in_checkmate(&position));
        assert!(generate_moves(&position).is_empty());
    }

    #[test]
    fn square_behind_king_on_checking_ray_is_no_escape() {
        // h8 is shadowed by the king itself when the rook's ray is cast.
        let position = pos("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert!(!attacked_squares(&position, Color::White).contains(Square::H8));
        assert!(legal_moves(&position, Piece::BLACK_KING, Square::G8).is_empty());
    }

    #[test]
    fn checkmate_ignores_blocks_and_captures() {
        // The bishop can take the checking rook or block on c1, but the king is stuck.
        let position = pos("6k1/5ppp/8/8/8/8/1B3PPP/r5K1 w - - 0 1");
        assert!(in_check(&position));
        assert!(in_checkmate(&position));
        let moves = generate_moves(&position);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(sq("b2"), Square::A1));
        assert!(moves.contains(sq("b2"), Square::C1));
    }

    #[test]
    fn check_with_escape_is_not_mate() {
        let position = pos("6k1/5pp1/8/8/8/8/8/3R2K1 b - - 0 1");
        assert!(!in_check(&position));
        let position = pos("3R2k1/5pp1/8/8/8/8/8/6K1 b - - 0 1");
        assert!(in_check(&position));
        assert!(!in_checkmate(&position));
    }

    #[test]
    fn pinned_piece_cannot_leave_line() {
        let position = pos("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
        assert!(legal_moves(&position, Piece::WHITE_KNIGHT, sq("e2")).is_empty());
        assert!(!generate_knight_moves(&position, sq("e2"), Color::White).is_empty());
    }

    #[test]
    fn legal_moves_require_matching_piece() {
        let position = Position::startpos();
        assert!(legal_moves(&position, Piece::WHITE_QUEEN, sq("e2")).is_empty());
        assert!(legal_moves(&position, Piece::NONE, sq("e4")).is_empty());
        assert_eq!(
            legal_moves(&position, Piece::WHITE_PAWN, sq("e2")).count(),
            2
        );
    }

    #[test]
    fn moves_for_piece_and_square() {
        let position = Position::startpos();
        assert_eq!(moves_for_piece(&position, Piece::WHITE_KNIGHT).len(), 4);
        assert!(moves_for_piece(&position, Piece::BLACK_KNIGHT).is_empty());
        assert_eq!(moves_from_square(&position, sq("b1")).len(), 2);
        assert!(moves_from_square(&position, sq("b8")).is_empty());
        assert!(moves_from_square(&position, sq("e4")).is_empty());
    }
}
