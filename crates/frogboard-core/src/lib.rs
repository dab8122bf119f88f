//! Board-state algebra for chess.
//!
//! This crate provides the packed vocabulary shared by move generation,
//! search and evaluation:
//! - [`Square`], [`File`], [`Rank`] and [`Direction`] for board coordinates
//! - [`Color`], [`PieceType`] and [`Piece`] for piece identity
//! - [`Move`] and [`MoveType`] for 16-bit packed moves
//! - [`CastlingRights`] for castling flags
//!
//! Every conversion is a pure `const fn` over plain integers. Out-of-range
//! inputs are caller errors caught only by debug assertions; the text
//! parsers are the only fallible entry points.
//!
//! # Example
//!
//! ```
//! use frogboard_core::{File, Move, MoveType, Rank, Square};
//!
//! let m = Move::new(Square::new(File::E, Rank::R2), Square::new(File::E, Rank::R4));
//! assert_eq!(m.from().file(), File::E);
//! assert_eq!(m.to().rank(), Rank::R4);
//! assert_eq!(m.move_type(), MoveType::Normal);
//! ```

mod castling;
mod color;
mod direction;
mod error;
mod mov;
mod piece;
mod square;

pub use castling::{CastlingRights, CastlingSide};
pub use color::Color;
pub use direction::Direction;
pub use error::ParseError;
pub use mov::{Move, MoveType};
pub use piece::{Piece, PieceType};
pub use square::{File, Rank, Square};

/// Upper bound on the moves of any reachable position.
pub const MAX_MOVES: usize = 256;

/// Deepest ply a search may reach.
pub const MAX_PLY: usize = 246;
