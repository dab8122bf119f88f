//! Piece types and packed colored pieces.

use std::fmt;

use crate::Color;

/// The six kinds of chess pieces.
///
/// Discriminants start at 1; 0 is the "no piece type" slot of the packed
/// [`Piece`] encoding and is represented as `None` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PieceType {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceType {
    /// All piece types in order.
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Creates a piece type from its packed value (1-6).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(PieceType::Pawn),
            2 => Some(PieceType::Knight),
            3 => Some(PieceType::Bishop),
            4 => Some(PieceType::Rook),
            5 => Some(PieceType::Queen),
            6 => Some(PieceType::King),
            _ => None,
        }
    }

    /// Returns the packed value (1-6).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase letter used in FEN and UCI promotions.
    pub const fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    /// Parses a piece letter, ignoring case.
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceType::Pawn => "Pawn",
            PieceType::Knight => "Knight",
            PieceType::Bishop => "Bishop",
            PieceType::Rook => "Rook",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A colored piece packed as `(color << 3) | piece_type`.
///
/// Bit 3 carries the color and bits 0-2 the piece type, so white pieces
/// occupy 1-6 and black pieces 9-14. [`Piece::NONE`] (0) marks an empty
/// square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece(u8);

impl Piece {
    /// Size of a table indexed by packed piece value.
    pub const NB: usize = 16;

    pub const NONE: Piece = Piece(0);

    pub const WHITE_PAWN: Piece = Piece::new(Color::White, PieceType::Pawn);
    pub const WHITE_KNIGHT: Piece = Piece::new(Color::White, PieceType::Knight);
    pub const WHITE_BISHOP: Piece = Piece::new(Color::White, PieceType::Bishop);
    pub const WHITE_ROOK: Piece = Piece::new(Color::White, PieceType::Rook);
    pub const WHITE_QUEEN: Piece = Piece::new(Color::White, PieceType::Queen);
    pub const WHITE_KING: Piece = Piece::new(Color::White, PieceType::King);
    pub const BLACK_PAWN: Piece = Piece::new(Color::Black, PieceType::Pawn);
    pub const BLACK_KNIGHT: Piece = Piece::new(Color::Black, PieceType::Knight);
    pub const BLACK_BISHOP: Piece = Piece::new(Color::Black, PieceType::Bishop);
    pub const BLACK_ROOK: Piece = Piece::new(Color::Black, PieceType::Rook);
    pub const BLACK_QUEEN: Piece = Piece::new(Color::Black, PieceType::Queen);
    pub const BLACK_KING: Piece = Piece::new(Color::Black, PieceType::King);

    /// The twelve real pieces in plane order.
    pub const ALL: [Piece; 12] = [
        Piece::WHITE_PAWN,
        Piece::WHITE_KNIGHT,
        Piece::WHITE_BISHOP,
        Piece::WHITE_ROOK,
        Piece::WHITE_QUEEN,
        Piece::WHITE_KING,
        Piece::BLACK_PAWN,
        Piece::BLACK_KNIGHT,
        Piece::BLACK_BISHOP,
        Piece::BLACK_ROOK,
        Piece::BLACK_QUEEN,
        Piece::BLACK_KING,
    ];

    /// Packs a color and piece type.
    #[inline]
    pub const fn new(color: Color, piece_type: PieceType) -> Self {
        Piece(((color as u8) << 3) | piece_type as u8)
    }

    /// Returns the raw packed value.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Returns true for [`Piece::NONE`].
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Returns the color of this piece.
    ///
    /// Must not be called on [`Piece::NONE`].
    #[inline]
    pub const fn color(self) -> Color {
        debug_assert!(!self.is_none());
        match self.0 >> 3 {
            0 => Color::White,
            _ => Color::Black,
        }
    }

    /// Returns the piece type, or `None` for [`Piece::NONE`].
    #[inline]
    pub const fn piece_type(self) -> Option<PieceType> {
        PieceType::from_index(self.0 & 7)
    }

    /// Index of this piece's plane in a 12-plane board (white pawn = 0,
    /// black king = 11).
    ///
    /// Must not be called on [`Piece::NONE`].
    #[inline]
    pub const fn plane_index(self) -> usize {
        debug_assert!(!self.is_none());
        (self.0 >> 3) as usize * 6 + (self.0 & 7) as usize - 1
    }

    /// Returns the FEN character (uppercase for White).
    pub const fn to_fen_char(self) -> Option<char> {
        match self.piece_type() {
            Some(pt) => match self.color() {
                Color::White => Some(pt.to_char().to_ascii_uppercase()),
                Color::Black => Some(pt.to_char()),
            },
            None => None,
        }
    }

    /// Parses a FEN character into a piece.
    pub const fn from_fen_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        match PieceType::from_char(c) {
            Some(pt) => Some(Piece::new(color, pt)),
            None => None,
        }
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_fen_char() {
            Some(c) => write!(f, "Piece({})", c),
            None => write!(f, "Piece(-)"),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.piece_type() {
            Some(pt) => write!(f, "{} {}", self.color(), pt),
            None => write!(f, "None"),
        }
    }
}
