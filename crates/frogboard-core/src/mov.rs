//! Packed move representation.

use std::fmt;
use std::str::FromStr;

use crate::{ParseError, PieceType, Square};

/// Special move class stored in bits 14-15 of a [`Move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveType {
    /// Quiet move or capture.
    Normal = 0,
    /// Pawn promotion; the promotion piece lives in bits 12-13.
    Promotion = 1,
    /// En passant capture.
    EnPassant = 2,
    /// Castling, encoded as the king's move.
    Castling = 3,
}

impl MoveType {
    /// Bits this class occupies inside a packed move.
    #[inline]
    pub const fn bits(self) -> u16 {
        (self as u16) << 14
    }
}

/// A chess move packed into 16 bits.
///
/// ```text
/// bits  0-5   destination square
/// bits  6-11  origin square
/// bits 12-13  promotion piece (0 knight, 1 bishop, 2 rook, 3 queen)
/// bits 14-15  move class (see MoveType)
/// ```
///
/// A real move always has different origin and destination. The two
/// sentinels [`Move::NONE`] and [`Move::NULL`] are the only values with
/// equal endpoints, which is what [`Move::is_valid`] checks.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Move(u16);

impl Move {
    /// No move at all.
    pub const NONE: Move = Move(0);

    /// A deliberate pass (b1 to b1).
    pub const NULL: Move = Move(65);

    /// Creates a normal move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move(((from.index() as u16) << 6) | to.index() as u16)
    }

    /// Creates a promotion to `piece_type`, which must be a knight,
    /// bishop, rook or queen.
    #[inline]
    pub const fn promotion(from: Square, to: Square, piece_type: PieceType) -> Self {
        debug_assert!(matches!(
            piece_type,
            PieceType::Knight | PieceType::Bishop | PieceType::Rook | PieceType::Queen
        ));
        let selector = (piece_type as u16 - PieceType::Knight as u16) & 3;
        Move(Move::new(from, to).0 | (selector << 12) | MoveType::Promotion.bits())
    }

    /// Creates an en passant capture.
    #[inline]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move(Move::new(from, to).0 | MoveType::EnPassant.bits())
    }

    /// Creates a castling move from the king's origin and destination.
    #[inline]
    pub const fn castling(from: Square, to: Square) -> Self {
        Move(Move::new(from, to).0 | MoveType::Castling.bits())
    }

    /// Reinterprets a raw packed value.
    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Move(raw)
    }

    /// Returns the raw packed value.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Returns the origin square.
    #[inline]
    pub const fn from(self) -> Square {
        Square::from_index_unchecked(((self.0 >> 6) & 0x3F) as u8)
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        Square::from_index_unchecked((self.0 & 0x3F) as u8)
    }

    /// Origin and destination as one 12-bit key, for butterfly tables and
    /// cheap comparisons that ignore the move class.
    #[inline]
    pub const fn from_to(self) -> u16 {
        self.0 & 0xFFF
    }

    /// Returns the move class.
    #[inline]
    pub const fn move_type(self) -> MoveType {
        match self.0 >> 14 {
            0 => MoveType::Normal,
            1 => MoveType::Promotion,
            2 => MoveType::EnPassant,
            _ => MoveType::Castling,
        }
    }

    /// Returns the promotion piece encoded in bits 12-13.
    ///
    /// Only meaningful when [`Move::move_type`] is [`MoveType::Promotion`];
    /// other moves decode as a knight.
    #[inline]
    pub const fn promotion_type(self) -> PieceType {
        match (self.0 >> 12) & 3 {
            0 => PieceType::Knight,
            1 => PieceType::Bishop,
            2 => PieceType::Rook,
            _ => PieceType::Queen,
        }
    }

    /// Returns false for [`Move::NONE`] and [`Move::NULL`].
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.from().index() != self.to().index()
    }

    /// Returns the UCI notation for this move (e.g., "e2e4", "e7e8q").
    ///
    /// Both sentinels print as "0000".
    pub fn to_uci(self) -> String {
        if !self.is_valid() {
            return "0000".to_string();
        }
        match self.move_type() {
            MoveType::Promotion => format!(
                "{}{}{}",
                self.from(),
                self.to(),
                self.promotion_type().to_char()
            ),
            _ => format!("{}{}", self.from(), self.to()),
        }
    }

    /// Parses a move from UCI notation.
    ///
    /// A fifth character makes a promotion. Castling and en passant cannot
    /// be told apart from normal moves without a position, so callers that
    /// know the position rebuild those with [`Move::castling`] or
    /// [`Move::en_passant`].
    pub fn from_uci(s: &str) -> Result<Self, ParseError> {
        if s.len() < 4 || s.len() > 5 || !s.is_ascii() {
            return Err(ParseError::InvalidMove(s.to_string()));
        }
        let from = s[0..2].parse::<Square>()?;
        let to = s[2..4].parse::<Square>()?;
        if from == to {
            return Err(ParseError::InvalidMove(s.to_string()));
        }
        match s[4..].chars().next() {
            None => Ok(Move::new(from, to)),
            Some(c) => match PieceType::from_char(c) {
                Some(
                    pt @ (PieceType::Knight
                    | PieceType::Bishop
                    | PieceType::Rook
                    | PieceType::Queen),
                ) => Ok(Move::promotion(from, to, pt)),
                _ => Err(ParseError::InvalidPromotion(c)),
            },
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::NONE => write!(f, "Move(none)"),
            Move::NULL => write!(f, "Move(null)"),
            m => write!(f, "Move({})", m.to_uci()),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_uci(s)
    }
}
