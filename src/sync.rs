//! Shared access to one game from several threads.
//!
//! Every call locks the game for its whole duration, so requests are handled
//! one at a time in the order they acquire the lock.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{GameState, Move, MoveError, Square};

/// A cloneable handle to a game guarded by a mutex.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<GameState>>);

impl SharedGame {
    /// Share a new game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(GameState::new())
    }

    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        SharedGame(Arc::new(Mutex::new(state)))
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.0.lock().legal_moves()
    }

    pub fn try_move(&self, from: Square, to: Square) -> Result<Move, MoveError> {
        self.0.lock().try_move(from, to)
    }

    pub fn play(&self, notation: &str) -> Result<Move, MoveError> {
        self.0.lock().play(notation)
    }

    /// Take back the last move, if any.
    pub fn undo(&self) -> Option<Move> {
        self.0.lock().undo_move()
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.0.lock().clone()
    }

    /// Run `f` with exclusive access to the game.
    pub fn with_state<R>(&self, f: impl FnOnce(&mut GameState) -> R) -> R {
        f(&mut self.0.lock())
    }
}

impl From<GameState> for SharedGame {
    fn from(state: GameState) -> Self {
        SharedGame::from_state(state)
    }
}
