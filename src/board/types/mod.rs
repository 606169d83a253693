//! Core chess types.
//!
//! - `Piece`, `Color` and `Cell` - what sits on a square
//! - `Square` - bounds-checked (row, column) coordinate
//! - `Board` - the 8x8 grid of cells
//! - `Move` - an immutable ply record
//! - `CastleRights` - castling state
//! - `Direction` - ray steps used by move generation and check detection

mod castling;
mod direction;
mod grid;
mod moves;
mod piece;
mod square;

pub use castling::CastleRights;
pub use direction::Direction;
pub use grid::Board;
pub use moves::Move;
pub use piece::{Cell, Color, Piece};
pub use square::Square;

pub(crate) use direction::{ALL_DIRECTIONS, DIAGONAL, KNIGHT_OFFSETS, ORTHOGONAL};
