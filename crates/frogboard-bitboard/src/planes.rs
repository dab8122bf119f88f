//! The fifteen planes that make up a board.

use frogboard_core::{Color, Piece, Square};

use crate::Bitboard;

/// Aggregate occupancy planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Occupancy {
    White = 0,
    Black = 1,
    Both = 2,
}

impl Occupancy {
    /// The occupancy plane belonging to one side.
    #[inline]
    pub const fn of(color: Color) -> Self {
        match color {
            Color::White => Occupancy::White,
            Color::Black => Occupancy::Black,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Piece placement as twelve piece planes plus three occupancy planes.
///
/// `put` and `remove` keep the occupancy planes in step with the piece
/// planes. Code that edits `pieces` directly must call
/// [`BoardPlanes::recompute_occupancies`] afterwards. No legality is
/// enforced: putting a piece on an occupied square stacks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoardPlanes {
    /// One plane per real piece, indexed by [`Piece::plane_index`].
    pub pieces: [Bitboard; 12],

    /// White, Black and Both, indexed by [`Occupancy::index`].
    pub occupancies: [Bitboard; 3],
}

impl BoardPlanes {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        BoardPlanes {
            pieces: [Bitboard::EMPTY; 12],
            occupancies: [Bitboard::EMPTY; 3],
        }
    }

    /// Returns the plane for `piece`.
    #[inline]
    pub const fn pieces(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.plane_index()]
    }

    /// Returns an occupancy plane.
    #[inline]
    pub const fn occupancy(&self, which: Occupancy) -> Bitboard {
        self.occupancies[which.index()]
    }

    /// Places `piece` on `sq`.
    #[inline]
    pub fn put(&mut self, piece: Piece, sq: Square) {
        let plane = &mut self.pieces[piece.plane_index()];
        *plane = plane.set(sq);
        let side = &mut self.occupancies[Occupancy::of(piece.color()).index()];
        *side = side.set(sq);
        let both = &mut self.occupancies[Occupancy::Both.index()];
        *both = both.set(sq);
    }

    /// Lifts `piece` off `sq`.
    ///
    /// Does nothing when `piece` is not on `sq`. The occupancy bits for `sq`
    /// are cleared only once no remaining plane of that side (or of either
    /// side, for Both) still holds it.
    #[inline]
    pub fn remove(&mut self, piece: Piece, sq: Square) {
        let plane = &mut self.pieces[piece.plane_index()];
        if !plane.contains(sq) {
            return;
        }
        *plane = plane.clear(sq);

        let color = piece.color();
        let held_by = |c: Color| {
            Piece::ALL
                .into_iter()
                .filter(|p| p.color() == c)
                .any(|p| self.pieces(p).contains(sq))
        };
        let side_holds = held_by(color);
        let other_holds = held_by(color.opposite());

        if !side_holds {
            let side = &mut self.occupancies[Occupancy::of(color).index()];
            *side = side.clear(sq);
        }
        if !side_holds && !other_holds {
            let both = &mut self.occupancies[Occupancy::Both.index()];
            *both = both.clear(sq);
        }
    }

    /// Returns the piece on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !self.occupancy(Occupancy::Both).contains(sq) {
            return None;
        }
        Piece::ALL
            .into_iter()
            .find(|&piece| self.pieces(piece).contains(sq))
    }

    /// Rebuilds the three occupancy planes from the piece planes.
    pub fn recompute_occupancies(&mut self) {
        let mut sides = [Bitboard::EMPTY; 2];
        for piece in Piece::ALL {
            sides[piece.color().index()] |= self.pieces(piece);
        }
        self.occupancies = [sides[0], sides[1], sides[0] | sides[1]];
    }

    /// Checks the occupancy invariants: no two piece planes overlap, the
    /// side planes are the unions of their pieces, the side planes are
    /// disjoint, and Both is their union.
    pub fn is_consistent(&self) -> bool {
        let mut seen = Bitboard::EMPTY;
        let mut sides = [Bitboard::EMPTY; 2];
        for piece in Piece::ALL {
            let plane = self.pieces(piece);
            if (seen & plane).is_not_empty() {
                return false;
            }
            seen |= plane;
            sides[piece.color().index()] |= plane;
        }

        let white = self.occupancy(Occupancy::White);
        let black = self.occupancy(Occupancy::Black);
        let both = self.occupancy(Occupancy::Both);

        white == sides[0]
            && black == sides[1]
            && (white & black).is_empty()
            && (white | black) == both
            && seen == both
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frogboard_core::PieceType;

    #[test]
    fn empty_board_is_consistent() {
        let board = BoardPlanes::empty();
        assert!(board.is_consistent());
        assert!(board.occupancy(Occupancy::Both).is_empty());
        assert_eq!(board, BoardPlanes::default());
    }

    #[test]
    fn put_updates_occupancy() {
        let mut board = BoardPlanes::empty();
        board.put(Piece::WHITE_KNIGHT, Square::G1);
        board.put(Piece::BLACK_KING, Square::E8);

        assert!(board.pieces(Piece::WHITE_KNIGHT).contains(Square::G1));
        assert!(board.occupancy(Occupancy::White).contains(Square::G1));
        assert!(!board.occupancy(Occupancy::Black).contains(Square::G1));
        assert!(board.occupancy(Occupancy::Black).contains(Square::E8));
        assert_eq!(board.occupancy(Occupancy::Both).count(), 2);
        assert!(board.is_consistent());
    }

    #[test]
    fn remove_restores_empty() {
        let mut board = BoardPlanes::empty();
        board.put(Piece::BLACK_QUEEN, Square::D8);
        board.put(Piece::BLACK_ROOK, Square::A8);
        board.remove(Piece::BLACK_QUEEN, Square::D8);

        assert!(board.pieces(Piece::BLACK_QUEEN).is_empty());
        assert!(board.occupancy(Occupancy::Black).contains(Square::A8));
        assert!(!board.occupancy(Occupancy::Both).contains(Square::D8));
        assert!(board.is_consistent());
    }

    #[test]
    fn remove_of_absent_piece_keeps_occupant() {
        let mut board = BoardPlanes::empty();
        board.put(Piece::WHITE_PAWN, Square::E4);
        board.remove(Piece::WHITE_KNIGHT, Square::E4);

        assert_eq!(board.piece_at(Square::E4), Some(Piece::WHITE_PAWN));
        assert!(board.occupancy(Occupancy::White).contains(Square::E4));
        assert!(board.occupancy(Occupancy::Both).contains(Square::E4));
        assert!(board.is_consistent());

        board.remove(Piece::BLACK_PAWN, Square::E4);
        assert_eq!(board.piece_at(Square::E4), Some(Piece::WHITE_PAWN));
        assert!(board.is_consistent());
    }

    #[test]
    fn remove_from_stack_keeps_remaining_occupant() {
        let mut board = BoardPlanes::empty();
        board.put(Piece::WHITE_PAWN, Square::E4);
        board.put(Piece::BLACK_PAWN, Square::E4);
        board.remove(Piece::BLACK_PAWN, Square::E4);

        assert_eq!(board.piece_at(Square::E4), Some(Piece::WHITE_PAWN));
        assert!(!board.occupancy(Occupancy::Black).contains(Square::E4));
        assert!(board.is_consistent());
    }

    #[test]
    fn piece_at() {
        let mut board = BoardPlanes::empty();
        board.put(Piece::new(Color::Black, PieceType::Pawn), Square::C7);
        assert_eq!(board.piece_at(Square::C7), Some(Piece::BLACK_PAWN));
        assert_eq!(board.piece_at(Square::C6), None);
    }

    #[test]
    fn stacked_pieces_are_inconsistent() {
        let mut board = BoardPlanes::empty();
        board.put(Piece::WHITE_PAWN, Square::E4);
        board.put(Piece::BLACK_PAWN, Square::E4);
        assert!(!board.is_consistent());
    }

    #[test]
    fn direct_edits_need_recompute() {
        let mut board = BoardPlanes::empty();
        board.pieces[Piece::WHITE_ROOK.plane_index()] = Bitboard::from_square(Square::A1);
        assert!(!board.is_consistent());

        board.recompute_occupancies();
        assert!(board.is_consistent());
        assert_eq!(
            board.occupancy(Occupancy::White),
            Bitboard::from_square(Square::A1)
        );
    }
}
