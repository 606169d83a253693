//! The move record.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::grid::Board;
use super::piece::{Cell, Color, Piece};
use super::square::Square;
use crate::board::error::MoveError;

/// One ply, captured against the board it was built from.
///
/// The captured piece is read once at construction, so a move can be undone
/// correctly after later mutations, and an en passant move records the pawn
/// beside its origin rather than the (empty) destination.
///
/// Two moves compare equal when their origin and destination match; the flags
/// and pieces are ignored. This lets a move built from a pair of clicked
/// squares be matched against the generated legal set.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece_moved: (Color, Piece),
    piece_captured: Option<(Color, Piece)>,
    is_en_passant: bool,
    is_castle: bool,
    is_promotion: bool,
}

impl Move {
    /// Build a plain move from the board. Fails if `from` is empty.
    pub fn new(from: Square, to: Square, board: &Board) -> Result<Self, MoveError> {
        Self::build(from, to, board, false, false)
    }

    pub(crate) fn build(
        from: Square,
        to: Square,
        board: &Board,
        is_en_passant: bool,
        is_castle: bool,
    ) -> Result<Self, MoveError> {
        let Cell::Occupied(color, piece) = board[from] else {
            return Err(MoveError::EmptyOrigin { square: from });
        };
        let piece_captured = if is_en_passant {
            match board[Square::at(from.row(), to.col())] {
                Cell::Occupied(c, p) => Some((c, p)),
                Cell::Empty => None,
            }
        } else {
            match board[to] {
                Cell::Occupied(c, p) => Some((c, p)),
                Cell::Empty => None,
            }
        };
        Ok(Move {
            from,
            to,
            piece_moved: (color, piece),
            piece_captured,
            is_en_passant,
            is_castle,
            is_promotion: piece == Piece::Pawn && to.row() == color.promotion_row(),
        })
    }

    /// Split `e2e4`-style notation into its two squares.
    pub fn parse_squares(notation: &str) -> Result<(Square, Square), MoveError> {
        let len = notation.chars().count();
        if len != 4 {
            return Err(MoveError::InvalidLength { len });
        }
        let invalid = || MoveError::InvalidSquare {
            notation: notation.to_string(),
        };
        if !notation.is_ascii() {
            return Err(invalid());
        }
        let from = notation[..2].parse().map_err(|_| invalid())?;
        let to = notation[2..].parse().map_err(|_| invalid())?;
        Ok((from, to))
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.piece_moved.0
    }

    #[inline]
    #[must_use]
    pub const fn piece_moved(&self) -> (Color, Piece) {
        self.piece_moved
    }

    #[inline]
    #[must_use]
    pub const fn piece_captured(&self) -> Option<(Color, Piece)> {
        self.piece_captured
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(&self) -> bool {
        self.is_castle
    }

    /// True for a castle toward the h-file.
    #[inline]
    #[must_use]
    pub const fn is_kingside_castle(&self) -> bool {
        self.is_castle && self.to.col() == self.from.col() + 2
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        self.is_promotion
    }

    /// True for a pawn advancing two rows.
    #[inline]
    #[must_use]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.1 == Piece::Pawn && self.from.row().abs_diff(self.to.row()) == 2
    }

    /// Square of the pawn removed by an en passant capture.
    #[inline]
    #[must_use]
    pub(crate) const fn en_passant_victim(&self) -> Square {
        Square::at(self.from.row(), self.to.col())
    }

    /// Long algebraic notation, e.g. `e2e4`.
    #[must_use]
    pub fn notation(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_reads_pieces_from_board() {
        let board = Board::starting();
        let mv = Move::new(sq("g1"), sq("f3"), &board).unwrap();
        assert_eq!(mv.piece_moved(), (Color::White, Piece::Knight));
        assert_eq!(mv.piece_captured(), None);
        assert!(!mv.is_promotion());
        assert_eq!(mv.notation(), "g1f3");
    }

    #[test]
    fn test_empty_origin_is_rejected() {
        let board = Board::starting();
        assert_eq!(
            Move::new(sq("e4"), sq("e5"), &board),
            Err(MoveError::EmptyOrigin { square: sq("e4") })
        );
    }

    #[test]
    fn test_equality_ignores_flags() {
        let mut board = Board::empty();
        board[sq("e5")] = Cell::Occupied(Color::White, Piece::Pawn);
        board[sq("d5")] = Cell::Occupied(Color::Black, Piece::Pawn);
        let ep = Move::build(sq("e5"), sq("d6"), &board, true, false).unwrap();
        let clicked = Move::new(sq("e5"), sq("d6"), &board).unwrap();
        assert_eq!(ep, clicked);
        assert!(ep.is_en_passant());
        assert_eq!(ep.piece_captured(), Some((Color::Black, Piece::Pawn)));
        assert_eq!(clicked.piece_captured(), None);
        assert_eq!(ep.en_passant_victim(), sq("d5"));
    }

    #[test]
    fn test_promotion_flag_per_color() {
        let mut board = Board::empty();
        board[sq("a7")] = Cell::Occupied(Color::White, Piece::Pawn);
        board[sq("h2")] = Cell::Occupied(Color::Black, Piece::Pawn);
        board[sq("b7")] = Cell::Occupied(Color::White, Piece::Rook);
        assert!(Move::new(sq("a7"), sq("a8"), &board).unwrap().is_promotion());
        assert!(Move::new(sq("h2"), sq("h1"), &board).unwrap().is_promotion());
        assert!(!Move::new(sq("b7"), sq("b8"), &board).unwrap().is_promotion());
    }

    #[test]
    fn test_parse_squares() {
        assert_eq!(Move::parse_squares("e2e4"), Ok((sq("e2"), sq("e4"))));
        assert_eq!(
            Move::parse_squares("e2e"),
            Err(MoveError::InvalidLength { len: 3 })
        );
        assert_eq!(
            Move::parse_squares("e2z4"),
            Err(MoveError::InvalidSquare {
                notation: "e2z4".to_string()
            })
        );
    }
}
