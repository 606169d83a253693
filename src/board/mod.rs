//! Chess board representation and rules.
//!
//! Uses an 8x8 mailbox board and ray scans from the king for pin and check
//! detection. Supports the full rules of movement including castling, en
//! passant and promotion (always to a queen).
//!
//! # Example
//! ```
//! use chess_rules::board::GameState;
//!
//! let mut game = GameState::new();
//! let moves = game.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod builder;
mod error;
mod make_unmake;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::GameBuilder;
pub use error::{MoveError, PositionError, SquareError};
pub use state::{Check, GameOptions, GameState, Pin};
pub use types::{Board, CastleRights, Cell, Color, Direction, Move, Piece, Square};

pub(crate) use types::{ALL_DIRECTIONS, DIAGONAL, KNIGHT_OFFSETS, ORTHOGONAL};
