//! Square sets packed into a `u64`.
//!
//! Bit `i` stands for square index `i`, so a8 is bit 0 and h1 is bit 63.
//! Set algebra is plain integer arithmetic.

use chess_core::Square;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// A set of squares.
///
/// "North" means toward the eighth rank, which lowers square indices.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const FULL: Bitboard = Bitboard(u64::MAX);

    pub const FILE_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
    pub const FILE_H: Bitboard = Bitboard(0x8080_8080_8080_8080);

    pub const RANK_8: Bitboard = Bitboard(0xFF);
    pub const RANK_7: Bitboard = Bitboard(0xFF << 8);
    pub const RANK_2: Bitboard = Bitboard(0xFF << 48);
    pub const RANK_1: Bitboard = Bitboard(0xFF << 56);

    #[inline]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    /// The set holding only `sq`.
    #[inline]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1 << sq.index())
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_not_empty(self) -> bool {
        !self.is_empty()
    }

    /// Number of squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & Self::from_square(sq).0 != 0
    }

    /// Set union, usable in const tables.
    #[inline]
    pub const fn union(self, other: Bitboard) -> Bitboard {
        Bitboard(self.0 | other.0)
    }

    #[inline]
    pub fn set(&mut self, sq: Square) {
        *self |= Self::from_square(sq);
    }

    #[inline]
    pub fn clear(&mut self, sq: Square) {
        *self &= !Self::from_square(sq);
    }

    /// The square with the lowest index, if any.
    #[inline]
    pub const fn lsb(self) -> Option<Square> {
        if self.is_empty() {
            return None;
        }
        Square::from_index(self.0.trailing_zeros() as u8)
    }

    /// Removes and returns the square with the lowest index.
    #[inline]
    pub fn pop_lsb(&mut self) -> Option<Square> {
        let sq = self.lsb()?;
        self.0 &= self.0 - 1;
        Some(sq)
    }

    // One-step shifts. Squares pushed off the board are dropped; the file
    // masks stop horizontal moves from wrapping onto the next rank.

    #[inline]
    pub const fn north(self) -> Bitboard {
        Bitboard(self.0 >> 8)
    }

    #[inline]
    pub const fn south(self) -> Bitboard {
        Bitboard(self.0 << 8)
    }

    #[inline]
    pub const fn east(self) -> Bitboard {
        Bitboard(self.0 << 1 & !Self::FILE_A.0)
    }

    #[inline]
    pub const fn west(self) -> Bitboard {
        Bitboard(self.0 >> 1 & !Self::FILE_H.0)
    }

    #[inline]
    pub const fn north_east(self) -> Bitboard {
        self.north().east()
    }

    #[inline]
    pub const fn north_west(self) -> Bitboard {
        self.north().west()
    }

    #[inline]
    pub const fn south_east(self) -> Bitboard {
        self.south().east()
    }

    #[inline]
    pub const fn south_west(self) -> Bitboard {
        self.south().west()
    }
}

impl From<Square> for Bitboard {
    #[inline]
    fn from(sq: Square) -> Self {
        Bitboard::from_square(sq)
    }
}

macro_rules! bit_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $tok:tt) => {
        impl $op for Bitboard {
            type Output = Bitboard;

            #[inline]
            fn $method(self, rhs: Bitboard) -> Bitboard {
                Bitboard(self.0 $tok rhs.0)
            }
        }

        impl $assign for Bitboard {
            #[inline]
            fn $assign_method(&mut self, rhs: Bitboard) {
                *self = $op::$method(*self, rhs);
            }
        }
    };
}

bit_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
bit_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
bit_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

/// Prints the set as a board diagram, eighth rank on top.
impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bitboard({:#018x})", self.0)?;
        for (row, rank) in self.0.to_le_bytes().iter().enumerate() {
            let cells: String = (0..8)
                .map(|file| if rank >> file & 1 == 1 { " x" } else { " ." })
                .collect();
            writeln!(f, "{}{cells}", 8 - row)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

/// Squares of a bitboard in ascending index order.
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.0.pop_lsb()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    #[inline]
    fn into_iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut bb = Bitboard::EMPTY;
        for sq in iter {
            bb.set(sq);
        }
        bb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{File, Rank};

    #[test]
    fn bitboard_from_square() {
        let bb = Bitboard::from_square(Square::A8);
        assert_eq!(bb.0, 1);
        assert!(bb.contains(Square::A8));
        assert!(!bb.contains(Square::B8));
    }

    #[test]
    fn bitboard_count() {
        assert_eq!(Bitboard::EMPTY.count(), 0);
        assert_eq!(Bitboard::FULL.count(), 64);
        assert_eq!(Bitboard::FILE_A.count(), 8);
        assert_eq!(Bitboard::RANK_1.count(), 8);
    }

    #[test]
    fn rank_masks_match_squares() {
        assert!(Bitboard::RANK_1.contains(Square::A1));
        assert!(Bitboard::RANK_1.contains(Square::H1));
        assert!(Bitboard::RANK_8.contains(Square::E8));
        assert!(Bitboard::RANK_2.contains(Square::new(File::C, Rank::R2)));
        assert!(Bitboard::RANK_7.contains(Square::new(File::C, Rank::R7)));
    }

    #[test]
    fn bitboard_shifts() {
        let a1 = Bitboard::from_square(Square::A1);
        assert!(a1.north().contains(Square::new(File::A, Rank::R2)));
        assert!(a1.east().contains(Square::B1));
        assert!(a1.north_east().contains(Square::new(File::B, Rank::R2)));
        assert!(a1.west().is_empty());
        assert!(a1.south().is_empty());

        let h8 = Bitboard::from_square(Square::H8);
        assert!(h8.south_west().contains(Square::new(File::G, Rank::R7)));
        assert!(h8.east().is_empty());
        assert!(h8.north_west().is_empty());
    }

    #[test]
    fn bitboard_iterator_ascends() {
        let bb = Bitboard::FILE_A;
        let squares: Vec<Square> = bb.into_iter().collect();
        assert_eq!(squares.len(), 8);
        assert_eq!(squares[0], Square::A8);
        assert_eq!(squares[7], Square::A1);
    }

    #[test]
    fn set_and_clear() {
        let mut bb = Bitboard::EMPTY;
        bb.set(Square::E1);
        bb.set(Square::E8);
        assert_eq!(bb.count(), 2);
        bb.clear(Square::E1);
        assert_eq!(bb, Bitboard::from_square(Square::E8));
        assert_eq!(Bitboard::RANK_8.union(Bitboard::RANK_1).count(), 16);
    }

    #[test]
    fn debug_draws_board() {
        let text = format!("{:?}", Bitboard::from_square(Square::A8));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "8 x . . . . . . .");
        assert_eq!(lines[8], "1 . . . . . . . .");
        assert_eq!(lines[9], "  a b c d e f g h");
    }

    #[test]
    fn bitboard_pop_lsb() {
        let mut bb = Bitboard::new(0b1010);
        assert_eq!(bb.pop_lsb().map(|s| s.index()), Some(1));
        assert_eq!(bb.pop_lsb().map(|s| s.index()), Some(3));
        assert_eq!(bb.pop_lsb(), None);
    }

    #[test]
    fn collect_squares() {
        let bb: Bitboard = [Square::A8, Square::H1].into_iter().collect();
        assert_eq!(bb.count(), 2);
        assert!(bb.contains(Square::H1));
    }
}
