pub mod board;
pub mod sync;

pub use board::{Color, GameBuilder, GameOptions, GameState, Move, MoveError, Piece, Square};
pub use sync::SharedGame;
