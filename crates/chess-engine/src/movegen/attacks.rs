//! Attack table generation and lookup for all piece types.
//!
//! Jump and pawn tables are built at compile time. Sliding attacks are ray
//! cast on demand against the blocker set.

use crate::Bitboard;
use chess_core::{Color, Square};

/// Knight jump offsets as (row, file) deltas; row 0 is the eighth rank.
const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King step offsets as (row, file) deltas.
const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Precomputed knight attack tables.
const KNIGHT_ATTACKS: [Bitboard; 64] = compute_jumps(&KNIGHT_DELTAS);

/// Precomputed king attack tables.
const KING_ATTACKS: [Bitboard; 64] = compute_jumps(&KING_DELTAS);

/// Precomputed pawn capture tables [color][square].
const PAWN_ATTACKS: [[Bitboard; 64]; 2] = compute_pawn_table(PawnTable::Captures);

/// Precomputed single pawn pushes [color][square].
const PAWN_PUSHES: [[Bitboard; 64]; 2] = compute_pawn_table(PawnTable::Push);

/// Precomputed double pawn pushes [color][square], set only on the start rank.
const PAWN_DOUBLE_PUSHES: [[Bitboard; 64]; 2] = compute_pawn_table(PawnTable::DoublePush);

/// Returns knight attacks from the given square.
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index() as usize]
}

/// Returns king attacks from the given square.
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index() as usize]
}

/// Returns pawn attacks from the given square for the given color.
#[inline]
pub fn pawn_attacks(sq: Square, color: Color) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index() as usize]
}

/// Returns the single push square of a pawn, ignoring occupancy.
#[inline]
pub fn pawn_push(sq: Square, color: Color) -> Bitboard {
    PAWN_PUSHES[color.index()][sq.index() as usize]
}

/// Returns the double push square of a pawn on its start rank, ignoring occupancy.
#[inline]
pub fn pawn_double_push(sq: Square, color: Color) -> Bitboard {
    PAWN_DOUBLE_PUSHES[color.index()][sq.index() as usize]
}

/// Returns bishop attacks from `sq`, stopping at (and including) the first blocker on each ray.
#[inline]
pub fn bishop_attacks(sq: Square, blockers: Bitboard) -> Bitboard {
    slide(sq, blockers, &BISHOP_DIRECTIONS)
}

/// Returns rook attacks from `sq`, stopping at (and including) the first blocker on each ray.
#[inline]
pub fn rook_attacks(sq: Square, blockers: Bitboard) -> Bitboard {
    slide(sq, blockers, &ROOK_DIRECTIONS)
}

/// Returns queen attacks (rook | bishop).
#[inline]
pub fn queen_attacks(sq: Square, blockers: Bitboard) -> Bitboard {
    rook_attacks(sq, blockers) | bishop_attacks(sq, blockers)
}

fn slide(sq: Square, blockers: Bitboard, directions: &[(i8, i8)]) -> Bitboard {
    let row = (sq.index() / 8) as i8;
    let file = (sq.index() % 8) as i8;
    let mut attacks = 0u64;

    for &(dr, df) in directions {
        let (mut r, mut f) = (row + dr, file + df);
        while (0..8).contains(&r) && (0..8).contains(&f) {
            let bit = 1u64 << ((r * 8 + f) as u32);
            attacks |= bit;
            if blockers.0 & bit != 0 {
                break;
            }
            r += dr;
            f += df;
        }
    }

    Bitboard(attacks)
}

/// Builds a jump table from (row, file) deltas, clipped at the board edges.
const fn compute_jumps(deltas: &[(i8, i8)]) -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut sq = 0u8;

    while sq < 64 {
        let row = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut bb = 0u64;

        let mut i = 0;
        while i < deltas.len() {
            let r = row + deltas[i].0;
            let f = file + deltas[i].1;
            if r >= 0 && r < 8 && f >= 0 && f < 8 {
                bb |= 1u64 << ((r * 8 + f) as u32);
            }
            i += 1;
        }

        attacks[sq as usize] = Bitboard(bb);
        sq += 1;
    }

    attacks
}

#[derive(Clone, Copy)]
enum PawnTable {
    Captures,
    Push,
    DoublePush,
}

/// Pawn targets from `from`, ignoring occupancy.
const fn pawn_targets(table: PawnTable, color: Color, from: Bitboard) -> Bitboard {
    match (table, color) {
        (PawnTable::Captures, Color::White) => from.north_west().union(from.north_east()),
        (PawnTable::Captures, Color::Black) => from.south_west().union(from.south_east()),
        (PawnTable::Push, Color::White) => from.north(),
        (PawnTable::Push, Color::Black) => from.south(),
        (PawnTable::DoublePush, Color::White) => {
            Bitboard(from.0 & Bitboard::RANK_2.0).north().north()
        }
        (PawnTable::DoublePush, Color::Black) => {
            Bitboard(from.0 & Bitboard::RANK_7.0).south().south()
        }
    }
}

/// Builds a [color][square] pawn table.
const fn compute_pawn_table(table: PawnTable) -> [[Bitboard; 64]; 2] {
    let mut targets = [[Bitboard::EMPTY; 64]; 2];
    let mut sq = 0;

    while sq < 64 {
        let from = Bitboard(1 << sq);
        targets[0][sq] = pawn_targets(table, Color::White, from);
        targets[1][sq] = pawn_targets(table, Color::Black, from);
        sq += 1;
    }

    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{File, Rank};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn knight_attacks_center() {
        let attacks = knight_attacks(Square::new(File::D, Rank::R4));
        assert_eq!(attacks.count(), 8);
    }

    #[test]
    fn knight_attacks_corner() {
        let attacks = knight_attacks(Square::A1);
        assert_eq!(attacks.count(), 2);
        assert!(attacks.contains(sq("b3")));
        assert!(attacks.contains(sq("c2")));
    }

    #[test]
    fn knight_attacks_edge() {
        let attacks = knight_attacks(Square::new(File::A, Rank::R4));
        assert_eq!(attacks.count(), 4);
    }

    #[test]
    fn knight_specific_squares() {
        let attacks = knight_attacks(sq("e4"));
        for target in ["d6", "f6", "g5", "g3", "f2", "d2", "c3", "c5"] {
            assert!(attacks.contains(sq(target)), "missing {}", target);
        }
    }

    #[test]
    fn king_attacks_counts() {
        assert_eq!(king_attacks(sq("d4")).count(), 8);
        assert_eq!(king_attacks(Square::A1).count(), 3);
        assert_eq!(king_attacks(Square::H8).count(), 3);
        assert_eq!(king_attacks(sq("a4")).count(), 5);
    }

    #[test]
    fn pawn_attacks_white() {
        let attacks = pawn_attacks(sq("d4"), Color::White);
        assert_eq!(attacks.count(), 2);
        assert!(attacks.contains(sq("c5")));
        assert!(attacks.contains(sq("e5")));
    }

    #[test]
    fn pawn_attacks_black() {
        let attacks = pawn_attacks(sq("d4"), Color::Black);
        assert_eq!(attacks.count(), 2);
        assert!(attacks.contains(sq("c3")));
        assert!(attacks.contains(sq("e3")));
    }

    #[test]
    fn pawn_attacks_edge_file() {
        let white_attacks = pawn_attacks(sq("a4"), Color::White);
        assert_eq!(white_attacks.count(), 1);
        assert!(white_attacks.contains(sq("b5")));

        let black_attacks = pawn_attacks(sq("h5"), Color::Black);
        assert_eq!(black_attacks.count(), 1);
        assert!(black_attacks.contains(sq("g4")));
    }

    #[test]
    fn pawn_attacks_last_rank_is_empty() {
        assert!(pawn_attacks(sq("d8"), Color::White).is_empty());
        assert!(pawn_attacks(sq("d1"), Color::Black).is_empty());
    }

    #[test]
    fn pawn_pushes() {
        assert_eq!(pawn_push(sq("e2"), Color::White), Bitboard::from_square(sq("e3")));
        assert_eq!(pawn_push(sq("e7"), Color::Black), Bitboard::from_square(sq("e6")));
        assert!(pawn_push(sq("e8"), Color::White).is_empty());
    }

    #[test]
    fn pawn_double_pushes_only_from_start_rank() {
        assert_eq!(
            pawn_double_push(sq("e2"), Color::White),
            Bitboard::from_square(sq("e4"))
        );
        assert_eq!(
            pawn_double_push(sq("c7"), Color::Black),
            Bitboard::from_square(sq("c5"))
        );
        assert!(pawn_double_push(sq("e3"), Color::White).is_empty());
        assert!(pawn_double_push(sq("e2"), Color::Black).is_empty());
    }

    #[test]
    fn rook_attacks_empty_board() {
        assert_eq!(rook_attacks(sq("d4"), Bitboard::EMPTY).count(), 14);
        assert_eq!(rook_attacks(Square::A1, Bitboard::EMPTY).count(), 14);
    }

    #[test]
    fn bishop_attacks_empty_board() {
        assert_eq!(bishop_attacks(sq("d4"), Bitboard::EMPTY).count(), 13);
        assert_eq!(bishop_attacks(Square::A1, Bitboard::EMPTY).count(), 7);
    }

    #[test]
    fn slider_rays_stop_at_blocker_inclusive() {
        let blockers: Bitboard = [sq("d6"), sq("f4")].into_iter().collect();
        let attacks = rook_attacks(sq("d4"), blockers);
        assert!(attacks.contains(sq("d5")));
        assert!(attacks.contains(sq("d6")));
        assert!(!attacks.contains(sq("d7")));
        assert!(attacks.contains(sq("f4")));
        assert!(!attacks.contains(sq("g4")));
        assert!(attacks.contains(sq("a4")));
        assert!(attacks.contains(sq("d1")));
    }

    #[test]
    fn rays_do_not_wrap_files() {
        let attacks = bishop_attacks(sq("h4"), Bitboard::EMPTY);
        assert!(!attacks.contains(sq("a4")));
        assert!(!attacks.contains(sq("a5")));
        assert!(attacks.contains(sq("g5")));
        assert_eq!(attacks.count(), 7);
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let blockers = Bitboard::from_square(sq("e5"));
        assert_eq!(
            queen_attacks(sq("d4"), blockers),
            rook_attacks(sq("d4"), blockers) | bishop_attacks(sq("d4"), blockers)
        );
    }
}
