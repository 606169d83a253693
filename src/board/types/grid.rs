//! The 8x8 cell grid.

use std::fmt;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Cell, Color, Piece};
use super::square::Square;

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Board contents, indexed by [`Square`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    #[must_use]
    pub fn empty() -> Self {
        Board::default()
    }

    /// The standard starting arrangement.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for (col, piece) in BACK_RANK.into_iter().enumerate() {
            for color in Color::BOTH {
                board.cells[color.back_row()][col] = Cell::Occupied(color, piece);
                board.cells[color.pawn_start_row()][col] = Cell::Occupied(color, Piece::Pawn);
            }
        }
        board
    }

    /// Squares holding pieces of `color`, in row-major order
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self[sq].is_color(color))
    }

    /// Locate the (first) king of `color`
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self[sq].is(color, Piece::King))
    }
}

impl Index<Square> for Board {
    type Output = Cell;

    fn index(&self, sq: Square) -> &Cell {
        &self.cells[sq.row()][sq.col()]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, sq: Square) -> &mut Cell {
        &mut self.cells[sq.row()][sq.col()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                write!(f, " {cell}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
