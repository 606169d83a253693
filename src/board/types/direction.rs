//! Ray directions and leaper offsets.

use super::square::Square;

/// A (row, column) step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: isize,
    pub d_col: isize,
}

impl Direction {
    pub(crate) const fn new(d_row: isize, d_col: isize) -> Self {
        Direction { d_row, d_col }
    }

    /// Returns true for rook-like steps
    #[inline]
    #[must_use]
    pub const fn is_orthogonal(self) -> bool {
        self.d_row == 0 || self.d_col == 0
    }

    /// The square `steps` steps away from `from`, if still on the board
    #[inline]
    #[must_use]
    pub fn walk(self, from: Square, steps: isize) -> Option<Square> {
        from.offset(self.d_row * steps, self.d_col * steps)
    }

    /// Returns true if `to` lies on the line through `from` along this direction.
    #[inline]
    #[must_use]
    pub fn aligned(self, from: Square, to: Square) -> bool {
        let d_row = to.row() as isize - from.row() as isize;
        let d_col = to.col() as isize - from.col() as isize;
        d_row * self.d_col == d_col * self.d_row
    }
}

pub(crate) const ORTHOGONAL: [Direction; 4] = [
    Direction::new(-1, 0),
    Direction::new(0, -1),
    Direction::new(1, 0),
    Direction::new(0, 1),
];

pub(crate) const DIAGONAL: [Direction; 4] = [
    Direction::new(-1, -1),
    Direction::new(-1, 1),
    Direction::new(1, -1),
    Direction::new(1, 1),
];

/// Orthogonal rays first, then diagonals.
pub(crate) const ALL_DIRECTIONS: [Direction; 8] = [
    ORTHOGONAL[0],
    ORTHOGONAL[1],
    ORTHOGONAL[2],
    ORTHOGONAL[3],
    DIAGONAL[0],
    DIAGONAL[1],
    DIAGONAL[2],
    DIAGONAL[3],
];

pub(crate) const KNIGHT_OFFSETS: [Direction; 8] = [
    Direction::new(-2, -1),
    Direction::new(-2, 1),
    Direction::new(-1, -2),
    Direction::new(-1, 2),
    Direction::new(1, -2),
    Direction::new(1, 2),
    Direction::new(2, -1),
    Direction::new(2, 1),
];
