//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board as (row, column).
///
/// Row 0 is Black's home row (rank 8) and row 7 is White's (rank 1); column 0
/// is file a. A `Square` is always on the board: the only public constructors
/// check bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    row: usize,
    col: usize,
}

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Unchecked constructor for coordinates already known to be on the board.
    #[inline]
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        debug_assert!(row < 8 && col < 8);
        Square { row, col }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// File letter, `a` for column 0
    #[inline]
    #[must_use]
    pub const fn file(self) -> char {
        (b'a' + self.col as u8) as char
    }

    /// Rank digit, `1` for row 7
    #[inline]
    #[must_use]
    pub const fn rank(self) -> char {
        (b'8' - self.row as u8) as char
    }

    /// Step by a signed row/column delta, `None` when leaving the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Square> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Square::new(row, col)
    }

    /// All 64 squares, row by row from a8 to h1
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square { row, col })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let row = match rank {
            '1'..='8' => '8' as usize - rank as usize,
            _ => return Err(invalid()),
        };

        Ok(Square { row, col })
    }
}
