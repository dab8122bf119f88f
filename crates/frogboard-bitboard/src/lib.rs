//! Bitboard store for the Frogboard board representation.
//!
//! This crate provides:
//! - [`Bitboard`] - a 64-bit plane with value-returning set/clear primitives
//! - [`BoardPlanes`] - twelve piece planes plus White/Black/Both occupancy
//! - [`render`] - a `1`/`0` text grid of any plane for debugging
//!
//! # Example
//!
//! ```
//! use frogboard_bitboard::{render, Bitboard, RenderOptions};
//! use frogboard_core::Square;
//!
//! let plane = Bitboard::EMPTY.set(Square::D1);
//! assert!(plane.contains(Square::D1));
//! assert!(!plane.contains(Square::E1));
//!
//! let text = render(plane, &RenderOptions::default());
//! assert_eq!(text.lines().last(), Some("0 0 0 1 0 0 0 0"));
//! ```

mod bitboard;
mod planes;
mod render;

pub use bitboard::{Bitboard, BitboardIter};
pub use planes::{BoardPlanes, Occupancy};
pub use render::{render, Orientation, RenderOptions};
