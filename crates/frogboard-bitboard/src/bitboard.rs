//! Bitboard representation and operations.
//!
//! A bitboard is a 64-bit integer where each bit represents a square on the
//! chess board. This allows efficient parallel operations on multiple squares.

use frogboard_core::{File, Rank, Square};
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::render::{render, RenderOptions};

/// A 64-bit board plane.
///
/// Bit 0 = a1, bit 1 = b1, ..., bit 63 = h8 (little-endian rank-file mapping).
///
/// The single-square primitives take the plane by value and hand back the
/// updated plane, so `let p = p.set(sq)` is the way to mutate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    /// Empty bitboard (no squares set).
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Full bitboard (all squares set).
    pub const FULL: Bitboard = Bitboard(!0);

    pub const FILE_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
    pub const RANK_1: Bitboard = Bitboard(0x0000_0000_0000_00FF);

    /// Creates a bitboard from a raw u64.
    #[inline]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    /// Creates a bitboard with a single square set.
    #[inline]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(sq.bitboard())
    }

    /// All squares of one file.
    #[inline]
    pub const fn file(file: File) -> Self {
        Bitboard(Self::FILE_A.0 << file.index())
    }

    /// All squares of one rank.
    #[inline]
    pub const fn rank(rank: Rank) -> Self {
        Bitboard(Self::RANK_1.0 << (rank.index() * 8))
    }

    /// Returns the raw bits.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns true if the bitboard is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the bitboard is not empty.
    #[inline]
    pub const fn is_not_empty(self) -> bool {
        self.0 != 0
    }

    /// Returns the number of set bits (population count).
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & sq.bitboard()) != 0
    }

    /// Returns this plane with `sq` set.
    #[inline]
    #[must_use]
    pub const fn set(self, sq: Square) -> Self {
        Bitboard(self.0 | sq.bitboard())
    }

    /// Returns this plane with `sq` cleared; every other bit is kept.
    #[inline]
    #[must_use]
    pub const fn clear(self, sq: Square) -> Self {
        Bitboard(self.0 & !sq.bitboard())
    }

    /// Returns this plane with `sq` flipped.
    #[inline]
    #[must_use]
    pub const fn toggle(self, sq: Square) -> Self {
        Bitboard(self.0 ^ sq.bitboard())
    }

    /// Returns the least significant set square, if any.
    #[inline]
    pub const fn lsb(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_index_unchecked(self.0.trailing_zeros() as u8))
        }
    }

    /// Pops and returns the least significant set square.
    #[inline]
    pub fn pop_lsb(&mut self) -> Option<Square> {
        let sq = self.lsb()?;
        self.0 &= self.0 - 1;
        Some(sq)
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Bitboard {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Self;
    #[inline]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bitboard({:#018x})", self.0)?;
        write!(f, "{}", render(*self, &RenderOptions::labelled()))
    }
}

/// Renders with the default [`RenderOptions`].
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(*self, &RenderOptions::default()))
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::EMPTY, Bitboard::set)
    }
}

/// Iterator over set squares in a bitboard.
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_lsb()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        BitboardIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitboard_from_square() {
        let bb = Bitboard::from_square(Square::A1);
        assert_eq!(bb.0, 1);
        assert!(bb.contains(Square::A1));
        assert!(!bb.contains(Square::B1));
    }

    #[test]
    fn set_then_test() {
        let plane = Bitboard::EMPTY.set(Square::D1);
        assert_eq!(plane.bits(), 1 << 3);
        assert!(plane.contains(Square::D1));
        assert!(!plane.contains(Square::E1));
    }

    #[test]
    fn clear_only_touches_its_square() {
        let plane = Bitboard::new(0b1011);
        assert_eq!(plane.clear(Square::B1), Bitboard::new(0b1001));
        assert_eq!(plane.clear(Square::C1), plane);
        assert_eq!(Bitboard::FULL.clear(Square::H8).count(), 63);
    }

    #[test]
    fn toggle() {
        let plane = Bitboard::EMPTY.toggle(Square::E4);
        assert!(plane.contains(Square::E4));
        assert!(plane.toggle(Square::E4).is_empty());
    }

    #[test]
    fn bitboard_count() {
        assert_eq!(Bitboard::EMPTY.count(), 0);
        assert_eq!(Bitboard::FULL.count(), 64);
        assert_eq!(Bitboard::FILE_A.count(), 8);
        assert_eq!(Bitboard::RANK_1.count(), 8);
    }

    #[test]
    fn file_and_rank_masks() {
        assert_eq!(Bitboard::file(File::A), Bitboard::FILE_A);
        assert_eq!(Bitboard::file(File::H).bits(), 0x8080_8080_8080_8080);
        assert_eq!(Bitboard::rank(Rank::R1), Bitboard::RANK_1);
        assert_eq!(Bitboard::rank(Rank::R8).bits(), 0xFF00_0000_0000_0000);
        assert!(Bitboard::file(File::E).contains(Square::E5));
    }

    #[test]
    fn bitboard_iterator() {
        let bb = Bitboard::FILE_A;
        let squares: Vec<Square> = bb.into_iter().collect();
        assert_eq!(squares.len(), 8);
        assert_eq!(squares[0], Square::A1);
        assert_eq!(squares[7], Square::A8);
    }

    #[test]
    fn collect_into_bitboard() {
        let bb: Bitboard = [Square::E4, Square::D5, Square::E4].into_iter().collect();
        assert_eq!(bb.count(), 2);
    }

    #[test]
    fn bitboard_pop_lsb() {
        let mut bb = Bitboard::new(0b1010);
        assert_eq!(bb.pop_lsb(), Some(Square::B1));
        assert_eq!(bb.pop_lsb(), Some(Square::D1));
        assert_eq!(bb.pop_lsb(), None);
    }
}
