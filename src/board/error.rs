//! Error types for chess board operations.

use std::fmt;

use super::types::{Color, Square};

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for building or submitting moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// There is no piece on the origin square
    EmptyOrigin { square: Square },
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptyOrigin { square } => {
                write!(f, "No piece on origin square {square}")
            }
            MoveError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for positions assembled with `GameBuilder`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// A side has no king
    MissingKing { color: Color },
    /// A side has more than one king
    DuplicateKing { color: Color },
    /// En passant target is not behind a pawn that could have just double-stepped
    InvalidEnPassant { square: Square },
    /// The side not to move is in check, so its king could be captured
    OpponentInCheck { color: Color },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MissingKing { color } => write!(f, "{color} has no king"),
            PositionError::DuplicateKing { color } => {
                write!(f, "{color} has more than one king")
            }
            PositionError::InvalidEnPassant { square } => {
                write!(f, "Invalid en passant target {square}")
            }
            PositionError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but not to move")
            }
        }
    }
}

impl std::error::Error for PositionError {}
