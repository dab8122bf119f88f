//! Castling rights flags.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};
use std::str::FromStr;

use crate::{Color, ParseError};

/// The wing a king castles toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

/// A set of castling rights stored in the low four bits.
///
/// A right only says the side has not lost it yet; whether castling is
/// currently legal is decided by the move generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_OO: CastlingRights = CastlingRights(0b0001);
    pub const WHITE_OOO: CastlingRights = CastlingRights(0b0010);
    pub const BLACK_OO: CastlingRights = CastlingRights(0b0100);
    pub const BLACK_OOO: CastlingRights = CastlingRights(0b1000);

    pub const WHITE: CastlingRights = CastlingRights(0b0011);
    pub const BLACK: CastlingRights = CastlingRights(0b1100);
    pub const ANY: CastlingRights = CastlingRights(0b1111);

    /// Number of distinct flag combinations.
    pub const NB: usize = 16;

    /// Creates castling rights from raw flags; bits above the low four are
    /// dropped.
    #[inline]
    pub const fn new(flags: u8) -> Self {
        CastlingRights(flags & 0b1111)
    }

    /// The single right for `color` castling toward `side`.
    #[inline]
    pub const fn of(color: Color, side: CastlingSide) -> Self {
        match (color, side) {
            (Color::White, CastlingSide::KingSide) => Self::WHITE_OO,
            (Color::White, CastlingSide::QueenSide) => Self::WHITE_OOO,
            (Color::Black, CastlingSide::KingSide) => Self::BLACK_OO,
            (Color::Black, CastlingSide::QueenSide) => Self::BLACK_OOO,
        }
    }

    /// Both rights belonging to `color`.
    #[inline]
    pub const fn for_color(color: Color) -> Self {
        match color {
            Color::White => Self::WHITE,
            Color::Black => Self::BLACK,
        }
    }

    /// Returns the raw flags.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every right in `other` is present.
    #[inline]
    pub const fn contains(self, other: CastlingRights) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if `color` may still castle toward `side`.
    #[inline]
    pub const fn can_castle(self, color: Color, side: CastlingSide) -> bool {
        self.contains(Self::of(color, side))
    }

    /// Adds the given rights.
    #[inline]
    pub fn insert(&mut self, other: CastlingRights) {
        self.0 |= other.0;
    }

    /// Removes the given rights.
    #[inline]
    pub fn remove(&mut self, other: CastlingRights) {
        self.0 &= !other.0;
    }
}

impl BitOr for CastlingRights {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        CastlingRights(self.0 | rhs.0)
    }
}

impl BitOrAssign for CastlingRights {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for CastlingRights {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        CastlingRights(self.0 & rhs.0)
    }
}

impl BitAndAssign for CastlingRights {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for CastlingRights {
    type Output = Self;
    #[inline]
    fn not(self) -> Self::Output {
        CastlingRights::new(!self.0)
    }
}

/// FEN castling field: "KQkq" order, "-" when empty.
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (right, c) in [
            (Self::WHITE_OO, 'K'),
            (Self::WHITE_OOO, 'Q'),
            (Self::BLACK_OO, 'k'),
            (Self::BLACK_OOO, 'q'),
        ] {
            if self.contains(right) {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

/// Accepts only the text [`Display`](fmt::Display) would produce.
impl FromStr for CastlingRights {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            return Ok(Self::NONE);
        }
        if s.is_empty() {
            return Err(ParseError::InvalidCastlingRights(s.to_string()));
        }
        let mut rights = Self::NONE;
        for c in s.chars() {
            let right = match c {
                'K' => Self::WHITE_OO,
                'Q' => Self::WHITE_OOO,
                'k' => Self::BLACK_OO,
                'q' => Self::BLACK_OOO,
                _ => {
                    return Err(ParseError::InvalidCastlingRights(format!(
                        "invalid character '{}'",
                        c
                    )))
                }
            };
            rights |= right;
        }
        if rights.to_string() != s {
            return Err(ParseError::InvalidCastlingRights(format!(
                "non-canonical rights '{}'",
                s
            )));
        }
        Ok(rights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_values() {
        assert_eq!(CastlingRights::NONE.raw(), 0);
        assert_eq!(CastlingRights::WHITE_OO.raw(), 1);
        assert_eq!(CastlingRights::WHITE_OOO.raw(), 2);
        assert_eq!(CastlingRights::BLACK_OO.raw(), 4);
        assert_eq!(CastlingRights::BLACK_OOO.raw(), 8);
        assert_eq!(
            CastlingRights::WHITE_OO | CastlingRights::WHITE_OOO,
            CastlingRights::WHITE
        );
        assert_eq!(
            CastlingRights::WHITE | CastlingRights::BLACK,
            CastlingRights::ANY
        );
    }

    #[test]
    fn lookup_by_side() {
        let rights = CastlingRights::WHITE_OO | CastlingRights::BLACK_OOO;
        assert!(rights.can_castle(Color::White, CastlingSide::KingSide));
        assert!(!rights.can_castle(Color::White, CastlingSide::QueenSide));
        assert!(!rights.can_castle(Color::Black, CastlingSide::KingSide));
        assert!(rights.can_castle(Color::Black, CastlingSide::QueenSide));
        assert_eq!(CastlingRights::for_color(Color::Black), CastlingRights::BLACK);
    }

    #[test]
    fn insert_and_remove() {
        let mut rights = CastlingRights::ANY;
        rights.remove(CastlingRights::for_color(Color::White));
        assert_eq!(rights, CastlingRights::BLACK);
        rights.insert(CastlingRights::WHITE_OOO);
        assert_eq!(rights.raw(), 0b1110);
    }

    #[test]
    fn not_stays_in_four_bits() {
        assert_eq!(!CastlingRights::WHITE, CastlingRights::BLACK);
        assert_eq!(!CastlingRights::NONE, CastlingRights::ANY);
        assert_eq!(CastlingRights::new(0xFF), CastlingRights::ANY);
    }

    #[test]
    fn fen_text() {
        assert_eq!(CastlingRights::ANY.to_string(), "KQkq");
        assert_eq!(CastlingRights::NONE.to_string(), "-");
        assert_eq!(
            (CastlingRights::WHITE_OOO | CastlingRights::BLACK_OO).to_string(),
            "Qk"
        );
        assert_eq!("KQkq".parse::<CastlingRights>(), Ok(CastlingRights::ANY));
        assert_eq!("-".parse::<CastlingRights>(), Ok(CastlingRights::NONE));
        assert_eq!("Qk".parse::<CastlingRights>(), Ok(CastlingRights::new(0b0110)));
        assert!("KX".parse::<CastlingRights>().is_err());
        assert!("".parse::<CastlingRights>().is_err());
    }

    #[test]
    fn fen_text_rejects_non_canonical() {
        assert!("kQ".parse::<CastlingRights>().is_err());
        assert!("KK".parse::<CastlingRights>().is_err());
        assert!("qK".parse::<CastlingRights>().is_err());
        assert!("-K".parse::<CastlingRights>().is_err());
        for bits in 0..16 {
            let rights = CastlingRights::new(bits);
            assert_eq!(rights.to_string().parse::<CastlingRights>(), Ok(rights));
        }
    }
}
