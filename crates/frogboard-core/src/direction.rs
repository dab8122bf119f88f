//! Square-index deltas used to step around the board.

use std::ops::{Add, Neg};

/// A signed delta applied to a square index.
///
/// Positive values move toward h8, negative values toward a1. Stepping
/// a square by a direction does not detect wrapping across the a/h files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction(i8);

impl Direction {
    pub const NORTH: Direction = Direction(8);
    pub const EAST: Direction = Direction(1);
    pub const SOUTH: Direction = Direction(-8);
    pub const WEST: Direction = Direction(-1);

    pub const NORTH_EAST: Direction = Direction(9);
    pub const NORTH_WEST: Direction = Direction(7);
    pub const SOUTH_EAST: Direction = Direction(-7);
    pub const SOUTH_WEST: Direction = Direction(-9);

    /// The eight single-step directions, orthogonals first.
    pub const ALL: [Direction; 8] = [
        Direction::NORTH,
        Direction::EAST,
        Direction::SOUTH,
        Direction::WEST,
        Direction::NORTH_EAST,
        Direction::NORTH_WEST,
        Direction::SOUTH_EAST,
        Direction::SOUTH_WEST,
    ];

    /// Creates a direction from a raw delta.
    #[inline]
    pub const fn new(delta: i8) -> Self {
        Direction(delta)
    }

    /// Returns the raw square-index delta.
    #[inline]
    pub const fn delta(self) -> i8 {
        self.0
    }

    /// Returns the direction pointing the other way.
    #[inline]
    pub const fn reverse(self) -> Self {
        Direction(-self.0)
    }
}

impl Add for Direction {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Direction(self.0 + rhs.0)
    }
}

impl Neg for Direction {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        self.reverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonals_are_sums_of_orthogonals() {
        assert_eq!(Direction::NORTH + Direction::EAST, Direction::NORTH_EAST);
        assert_eq!(Direction::NORTH + Direction::WEST, Direction::NORTH_WEST);
        assert_eq!(Direction::SOUTH + Direction::EAST, Direction::SOUTH_EAST);
        assert_eq!(Direction::SOUTH + Direction::WEST, Direction::SOUTH_WEST);
    }

    #[test]
    fn reverse() {
        assert_eq!(-Direction::NORTH, Direction::SOUTH);
        assert_eq!(Direction::EAST.reverse(), Direction::WEST);
        assert_eq!(-Direction::NORTH_EAST, Direction::SOUTH_WEST);
    }
}
